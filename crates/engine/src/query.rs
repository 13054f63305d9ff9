// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use matview_type::{Result, error::ViewError};

/// Trim surrounding whitespace and trailing semicolons so the query can be
/// wrapped as a sub-select.
pub fn normalize_query(query: &str) -> Result<&str> {
	let normalized = query.trim().trim_end_matches(|c: char| c == ';' || c.is_whitespace());
	if normalized.is_empty() {
		return Err(ViewError::EmptyQuery.into());
	}
	Ok(normalized)
}
