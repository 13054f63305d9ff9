// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod create;
mod drop;
mod refresh;

use matview_catalog::{ViewDef, ViewRegistry};
use matview_sqlite::{identifier::validate, introspect::table_exists};
use matview_type::{
	Error, Result,
	error::{IdentifierKind, TransactionStage, ViewError},
};
use rusqlite::Connection;

use crate::{ViewConfig, schema::InferredColumn};

/// Outcome of a successful create or refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializedView {
	pub name: String,
	pub query: String,
	pub columns: Vec<InferredColumn>,
	/// Rows written to the backing table.
	pub rows: usize,
	/// Whether the backing table was dropped and recreated because its
	/// shape no longer matched the defining query.
	pub rebuilt: bool,
}

/// Creates, refreshes and drops materialized views.
///
/// The manager keeps no state between calls besides its configuration. It
/// does not serialize concurrent refreshes of the same view; callers that
/// refresh one view from several connections must do that themselves.
#[derive(Debug, Clone)]
pub struct MaterializedViewManager {
	registry: ViewRegistry,
	config: ViewConfig,
}

impl MaterializedViewManager {
	pub fn new() -> Self {
		Self::with_config(ViewConfig::default())
	}

	pub fn with_config(config: ViewConfig) -> Self {
		Self {
			registry: ViewRegistry::with_table(config.registry_table.clone()),
			config,
		}
	}

	pub fn registry(&self) -> &ViewRegistry {
		&self.registry
	}

	pub fn config(&self) -> &ViewConfig {
		&self.config
	}

	pub fn ensure_schema(&self, conn: &Connection) -> Result<()> {
		self.registry.ensure_schema(conn)
	}

	/// Current definitions of all registered views.
	pub fn views(&self, conn: &Connection) -> Result<Vec<ViewDef>> {
		if !self.registry_exists(conn)? {
			return Ok(vec![]);
		}
		self.registry.list(conn)
	}

	/// Look a view up without creating the registry on the way, so a miss
	/// performs no writes.
	fn find_registered(&self, conn: &Connection, name: &str) -> Result<Option<ViewDef>> {
		if !self.registry_exists(conn)? {
			return Ok(None);
		}
		self.registry.find_view(conn, name)
	}

	fn registry_exists(&self, conn: &Connection) -> Result<bool> {
		table_exists(conn, self.registry.table())
	}

	fn validate_view_name(&self, name: &str) -> Result<()> {
		validate(IdentifierKind::View, name)?;
		if name.eq_ignore_ascii_case(self.registry.table()) {
			return Err(ViewError::InvalidIdentifier {
				kind: IdentifierKind::View,
				name: name.to_string(),
				reason: "name is used by the view registry",
			}
			.into());
		}
		Ok(())
	}
}

impl Default for MaterializedViewManager {
	fn default() -> Self {
		Self::new()
	}
}

fn not_found(name: &str) -> Error {
	ViewError::ViewNotFound {
		name: name.to_string(),
	}
	.into()
}

/// Run one statement of a view transaction.
fn step(tx: &Connection, view: &str, stage: TransactionStage, sql: &str) -> Result<usize> {
	tx.execute(sql, []).map_err(|e| {
		ViewError::TransactionFailed {
			view: view.to_string(),
			stage,
			statement: Some(sql.to_string()),
			cause: e.to_string(),
		}
		.into()
	})
}

/// Re-label an error raised inside a view transaction with the stage it
/// interrupted, keeping the failing statement and the store's message.
fn in_stage(view: &str, stage: TransactionStage, err: Error) -> Error {
	ViewError::TransactionFailed {
		view: view.to_string(),
		stage,
		statement: err.statement.clone(),
		cause: err.root_cause().message.clone(),
	}
	.into()
}

fn tx_failed(view: &str, stage: TransactionStage, err: rusqlite::Error) -> Error {
	ViewError::TransactionFailed {
		view: view.to_string(),
		stage,
		statement: None,
		cause: err.to_string(),
	}
	.into()
}
