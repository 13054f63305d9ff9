// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use matview_sqlite::error::store_error;
use matview_type::{Result, internal_error, return_error};
use rusqlite::{Connection, OptionalExtension, params};
use tracing::instrument;

use super::layout::{self, COLUMNS};
use crate::{ViewDef, ViewId, ViewRegistry};

impl ViewRegistry {
	/// The current definition of `name`, or `None` when the name was never
	/// registered or has been deleted.
	#[instrument(name = "catalog::registry::find_view", level = "trace", skip(self, conn))]
	pub fn find_view(&self, conn: &Connection, name: &str) -> Result<Option<ViewDef>> {
		let sql = format!(
			"SELECT {} FROM {} WHERE name = ?1 COLLATE NOCASE AND deleted_at IS NULL ORDER BY id DESC LIMIT 1",
			COLUMNS,
			self.quoted_table()
		);
		conn.query_row(&sql, params![name], layout::read_row).optional().map_err(|e| store_error(sql, &e))
	}

	/// The defining query of `name`; `None` is the not-found outcome.
	pub fn lookup_query(&self, conn: &Connection, name: &str) -> Result<Option<String>> {
		Ok(self.find_view(conn, name)?.map(|view| view.query))
	}

	pub(crate) fn get_view(&self, conn: &Connection, id: ViewId) -> Result<ViewDef> {
		let sql = format!("SELECT {} FROM {} WHERE id = ?1", COLUMNS, self.quoted_table());
		match conn.query_row(&sql, params![id.0], layout::read_row).optional() {
			Ok(Some(view)) => Ok(view),
			Ok(None) => return_error!(internal_error!("registry row {} vanished", id)),
			Err(e) => Err(store_error(sql, &e)),
		}
	}
}
