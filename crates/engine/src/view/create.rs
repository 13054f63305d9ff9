// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use matview_sqlite::introspect::{table_columns, table_exists};
use matview_type::{
	Result,
	error::{TransactionStage, ViewError},
};
use rusqlite::{Connection, Transaction, TransactionBehavior};
use tracing::{debug, info, instrument, warn};

use super::{MaterializedView, MaterializedViewManager, in_stage, step, tx_failed};
use crate::{
	SchemaChangePolicy,
	query::normalize_query,
	schema::{InferredSchema, ddl, describe_existing, infer_schema},
};

impl MaterializedViewManager {
	/// Create the view `view_name` over `query`, or refresh it if it exists.
	///
	/// Everything happens in one immediate transaction: the query runs once
	/// to infer the backing table's schema, the table is created (or rebuilt
	/// on a shape change), the definition is registered, old rows are
	/// deleted and the query's current result set is inserted. Taking the
	/// write lock first means the conflict and drift checks see the same
	/// state the writes apply to. Any failure rolls the whole transaction
	/// back.
	#[instrument(name = "engine::view::create_or_refresh", level = "info", skip(self, conn, query))]
	pub fn create_or_refresh(&self, conn: &mut Connection, query: &str, view_name: &str) -> Result<MaterializedView> {
		self.validate_view_name(view_name)?;
		let query = normalize_query(query)?;

		let tx = conn
			.transaction_with_behavior(TransactionBehavior::Immediate)
			.map_err(|e| tx_failed(view_name, TransactionStage::Begin, e))?;

		let (schema, rows, rebuild) = match self.apply(&tx, view_name, query) {
			Ok(applied) => applied,
			Err(err) => {
				warn!(view = view_name, code = %err.code, "rolling back view transaction");
				if let Err(rollback) = tx.rollback() {
					warn!(view = view_name, error = %rollback, "rollback failed");
				}
				return Err(err);
			}
		};

		tx.commit().map_err(|e| tx_failed(view_name, TransactionStage::Commit, e))?;

		info!(view = view_name, rows, rebuilt = rebuild, "materialized view populated");
		Ok(MaterializedView {
			name: view_name.to_string(),
			query: query.to_string(),
			columns: schema.columns,
			rows,
			rebuilt: rebuild,
		})
	}

	fn apply(&self, tx: &Transaction<'_>, view_name: &str, query: &str) -> Result<(InferredSchema, usize, bool)> {
		self.registry.ensure_schema(tx)?;
		let schema = infer_schema(tx, view_name, query)?;
		let rebuild = self.check_existing(tx, view_name, &schema)?;
		let rows = self.populate(tx, view_name, query, &schema, rebuild)?;
		Ok((schema, rows, rebuild))
	}

	/// Decide what to do with an existing table of the same name. Returns
	/// whether it has to be rebuilt.
	fn check_existing(&self, conn: &Connection, view_name: &str, schema: &InferredSchema) -> Result<bool> {
		if !table_exists(conn, view_name)? {
			return Ok(false);
		}

		if self.registry.find_view(conn, view_name)?.is_none() {
			return Err(ViewError::NameConflict {
				name: view_name.to_string(),
			}
			.into());
		}

		let existing = table_columns(conn, view_name)?;
		if schema.matches(&existing) {
			return Ok(false);
		}

		match self.config.on_schema_change {
			SchemaChangePolicy::Reject if schema.compatible(&existing) => {
				debug!(view = view_name, "observed column types changed, keeping existing table");
				Ok(false)
			}
			SchemaChangePolicy::Reject => Err(ViewError::SchemaDrift {
				view: view_name.to_string(),
				existing: describe_existing(&existing),
				inferred: schema.describe(),
			}
			.into()),
			SchemaChangePolicy::Rebuild => {
				debug!(view = view_name, "shape changed, backing table will be rebuilt");
				Ok(true)
			}
		}
	}

	fn populate(
		&self,
		tx: &Transaction<'_>,
		view_name: &str,
		query: &str,
		schema: &InferredSchema,
		rebuild: bool,
	) -> Result<usize> {
		if rebuild {
			step(tx, view_name, TransactionStage::Rebuild, &ddl::drop_table(view_name))?;
		}

		let create = ddl::create_table(view_name, schema);
		debug!(statement = %create, "creating backing table");
		tx.execute(&create, []).map_err(|e| ViewError::CreateTableFailed {
			view: view_name.to_string(),
			statement: create.clone(),
			cause: e.to_string(),
		})?;

		self.registry
			.register(tx, view_name, query)
			.map_err(|err| in_stage(view_name, TransactionStage::Register, err))?;

		step(tx, view_name, TransactionStage::Truncate, &ddl::truncate(view_name))?;

		let insert = ddl::populate(view_name, schema, query);
		debug!(statement = %insert, "repopulating backing table");
		step(tx, view_name, TransactionStage::Populate, &insert)
	}
}
