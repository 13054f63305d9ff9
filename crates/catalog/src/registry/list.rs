// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use matview_sqlite::error::store_error;
use matview_type::Result;
use rusqlite::{Connection, params};

use super::layout::{self, COLUMNS};
use crate::{ViewDef, ViewRegistry};

impl ViewRegistry {
	/// The current definition of every registered view, ordered by name.
	pub fn list(&self, conn: &Connection) -> Result<Vec<ViewDef>> {
		let table = self.quoted_table();
		let sql = format!(
			"SELECT {columns} FROM {table} WHERE id IN (
				SELECT MAX(id) FROM {table} WHERE deleted_at IS NULL GROUP BY name COLLATE NOCASE
			) ORDER BY name COLLATE NOCASE",
			columns = COLUMNS,
			table = table
		);
		self.collect(conn, &sql, [])
	}

	/// Every registration of `name`, oldest first, including deleted ones.
	pub fn history(&self, conn: &Connection, name: &str) -> Result<Vec<ViewDef>> {
		let sql = format!(
			"SELECT {} FROM {} WHERE name = ?1 COLLATE NOCASE ORDER BY id",
			COLUMNS,
			self.quoted_table()
		);
		self.collect(conn, &sql, params![name])
	}

	fn collect<P: rusqlite::Params>(&self, conn: &Connection, sql: &str, params: P) -> Result<Vec<ViewDef>> {
		let mut stmt = conn.prepare(sql).map_err(|e| store_error(sql, &e))?;
		let rows = stmt.query_map(params, layout::read_row).map_err(|e| store_error(sql, &e))?;
		rows.collect::<rusqlite::Result<Vec<_>>>().map_err(|e| store_error(sql, &e))
	}
}
