// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Validation and quoting of names spliced into SQL text.
//!
//! View names come from callers and column names from query metadata, so
//! neither can be trusted to be a plain identifier. Every name passes
//! [`validate`] once at the boundary and is then always emitted through
//! [`quote`].

use matview_type::{
	Result,
	error::{IdentifierKind, ViewError},
};

pub const MAX_IDENTIFIER_LEN: usize = 255;

pub fn validate(kind: IdentifierKind, name: &str) -> Result<()> {
	let reason = if name.is_empty() {
		Some("name is empty")
	} else if name.len() > MAX_IDENTIFIER_LEN {
		Some("name is longer than 255 bytes")
	} else if name.chars().any(char::is_control) {
		Some("name contains control characters")
	} else if kind != IdentifierKind::Column && name.get(..7).is_some_and(|p| p.eq_ignore_ascii_case("sqlite_")) {
		Some("names starting with 'sqlite_' are reserved")
	} else {
		None
	};

	match reason {
		Some(reason) => Err(ViewError::InvalidIdentifier {
			kind,
			name: name.to_string(),
			reason,
		}
		.into()),
		None => Ok(()),
	}
}

/// Quote `name` as an SQL identifier, doubling embedded quotes.
pub fn quote(name: &str) -> String {
	let mut quoted = String::with_capacity(name.len() + 2);
	quoted.push('"');
	for c in name.chars() {
		if c == '"' {
			quoted.push('"');
		}
		quoted.push(c);
	}
	quoted.push('"');
	quoted
}
