// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use matview_sqlite::error::store_error;
use matview_type::Result;
use rusqlite::{Connection, params};
use tracing::instrument;

use crate::ViewRegistry;

impl ViewRegistry {
	/// Soft-delete every active registration of `name`. Returns the number
	/// of rows marked.
	#[instrument(name = "catalog::registry::delete", level = "debug", skip(self, conn))]
	pub fn delete(&self, conn: &Connection, name: &str) -> Result<usize> {
		let sql = format!(
			"UPDATE {} SET deleted_at = CURRENT_TIMESTAMP, updated_at = CURRENT_TIMESTAMP
			 WHERE name = ?1 COLLATE NOCASE AND deleted_at IS NULL",
			self.quoted_table()
		);
		conn.execute(&sql, params![name]).map_err(|e| store_error(sql, &e))
	}
}
