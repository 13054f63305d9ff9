// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use matview_sqlite::{
	error::store_error,
	identifier::{quote, validate},
};
use matview_type::{Result, error::IdentifierKind};
use rusqlite::Connection;
use tracing::{debug, instrument};

use super::layout;
use crate::ViewRegistry;

impl ViewRegistry {
	/// Create the registry table and its lookup index if they are missing.
	#[instrument(name = "catalog::registry::ensure_schema", level = "debug", skip(self, conn), fields(table = %self.table))]
	pub fn ensure_schema(&self, conn: &Connection) -> Result<()> {
		validate(IdentifierKind::Table, &self.table)?;

		let table = self.quoted_table();
		let create = layout::create_table(&table);
		conn.execute(&create, []).map_err(|e| store_error(create.as_str(), &e))?;

		let index = layout::create_name_index(&table, &quote(&format!("{}_name_idx", self.table)));
		conn.execute(&index, []).map_err(|e| store_error(index.as_str(), &e))?;

		debug!("registry schema ready");
		Ok(())
	}
}
