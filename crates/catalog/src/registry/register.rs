// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use matview_sqlite::error::store_error;
use matview_type::Result;
use rusqlite::{Connection, params};
use tracing::{debug, instrument};

use crate::{ViewDef, ViewId, ViewRegistry};

impl ViewRegistry {
	/// Record `query` as the definition of `name`.
	///
	/// A query that differs from the current definition appends a new row;
	/// the identical query only touches `updated_at` of the current row, so
	/// repeated refreshes do not grow the history.
	#[instrument(name = "catalog::registry::register", level = "debug", skip(self, conn, query))]
	pub fn register(&self, conn: &Connection, name: &str, query: &str) -> Result<ViewDef> {
		let id = match self.find_view(conn, name)? {
			Some(current) if current.query == query => {
				let sql = format!("UPDATE {} SET updated_at = CURRENT_TIMESTAMP WHERE id = ?1", self.quoted_table());
				conn.execute(&sql, params![current.id.0]).map_err(|e| store_error(sql, &e))?;
				debug!(id = %current.id, "definition unchanged");
				current.id
			}
			_ => {
				let sql = format!("INSERT INTO {} (name, query) VALUES (?1, ?2)", self.quoted_table());
				conn.execute(&sql, params![name, query]).map_err(|e| store_error(sql, &e))?;
				let id = ViewId(conn.last_insert_rowid());
				debug!(id = %id, "definition recorded");
				id
			}
		};

		self.get_view(conn, id)
	}
}
