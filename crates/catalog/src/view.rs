// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewId(pub i64);

impl Display for ViewId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

/// One registration of a view. Timestamps are SQLite `CURRENT_TIMESTAMP`
/// strings (UTC, `YYYY-MM-DD HH:MM:SS`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewDef {
	pub id: ViewId,
	pub name: String,
	pub query: String,
	pub created_at: String,
	pub updated_at: String,
	pub deleted_at: Option<String>,
}

impl ViewDef {
	pub fn is_deleted(&self) -> bool {
		self.deleted_at.is_some()
	}
}
