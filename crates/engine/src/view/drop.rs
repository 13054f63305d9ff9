// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use matview_type::{Result, error::TransactionStage};
use rusqlite::{Connection, TransactionBehavior};
use tracing::{info, instrument, warn};

use super::{MaterializedViewManager, in_stage, not_found, step, tx_failed};
use crate::schema::ddl;

impl MaterializedViewManager {
	/// Drop the backing table of `view_name` and mark its registry rows as
	/// deleted. Both happen in one transaction.
	#[instrument(name = "engine::view::drop", level = "info", skip(self, conn))]
	pub fn drop_view(&self, conn: &mut Connection, view_name: &str) -> Result<()> {
		if self.find_registered(conn, view_name)?.is_none() {
			return Err(not_found(view_name));
		}

		let tx = conn
			.transaction_with_behavior(TransactionBehavior::Immediate)
			.map_err(|e| tx_failed(view_name, TransactionStage::Begin, e))?;

		let result = self
			.registry
			.delete(&tx, view_name)
			.map_err(|err| in_stage(view_name, TransactionStage::Unregister, err))
			.and_then(|_| step(&tx, view_name, TransactionStage::Drop, &ddl::drop_table(view_name)));

		if let Err(err) = result {
			warn!(view = view_name, code = %err.code, "rolling back view transaction");
			if let Err(rollback) = tx.rollback() {
				warn!(view = view_name, error = %rollback, "rollback failed");
			}
			return Err(err);
		}

		tx.commit().map_err(|e| tx_failed(view_name, TransactionStage::Commit, e))?;
		info!(view = view_name, "materialized view dropped");
		Ok(())
	}
}
