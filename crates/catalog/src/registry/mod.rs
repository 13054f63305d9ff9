// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod delete;
mod ensure;
mod find;
mod layout;
mod list;
mod register;

use matview_sqlite::identifier::quote;

pub const DEFAULT_REGISTRY_TABLE: &str = "materialized_views";

/// Maps view names to their defining queries.
///
/// Registrations form a version history: a changed query appends a row and
/// the row with the highest id wins. Soft-deleted rows are kept for
/// [`ViewRegistry::history`] but ignored by every other read. The registry
/// holds no state besides its table name; every call goes to the store, so
/// the same functions work on a plain connection and inside a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRegistry {
	table: String,
}

impl ViewRegistry {
	pub fn new() -> Self {
		Self::with_table(DEFAULT_REGISTRY_TABLE)
	}

	pub fn with_table(table: impl Into<String>) -> Self {
		Self {
			table: table.into(),
		}
	}

	pub fn table(&self) -> &str {
		&self.table
	}

	fn quoted_table(&self) -> String {
		quote(&self.table)
	}
}

impl Default for ViewRegistry {
	fn default() -> Self {
		Self::new()
	}
}
