// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use matview_catalog::DEFAULT_REGISTRY_TABLE;

/// What to do when a refresh finds the backing table's columns no longer
/// match the defining query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemaChangePolicy {
	/// Drop and recreate the backing table inside the refresh transaction.
	#[default]
	Rebuild,
	/// Fail the refresh before anything is written. Columns without a
	/// declared type keep their existing storage type instead.
	Reject,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewConfig {
	pub registry_table: String,
	pub on_schema_change: SchemaChangePolicy,
}

impl ViewConfig {
	pub fn registry_table(mut self, table: impl Into<String>) -> Self {
		self.registry_table = table.into();
		self
	}

	pub fn on_schema_change(mut self, policy: SchemaChangePolicy) -> Self {
		self.on_schema_change = policy;
		self
	}
}

impl Default for ViewConfig {
	fn default() -> Self {
		Self {
			registry_table: DEFAULT_REGISTRY_TABLE.to_string(),
			on_schema_change: SchemaChangePolicy::default(),
		}
	}
}
