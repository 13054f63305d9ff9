// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{ViewDef, ViewId};

pub(crate) const COLUMNS: &str = "id, name, query, created_at, updated_at, deleted_at";

pub(crate) fn create_table(table: &str) -> String {
	format!(
		"CREATE TABLE IF NOT EXISTS {} (
			id         INTEGER PRIMARY KEY AUTOINCREMENT,
			name       TEXT NOT NULL,
			query      TEXT NOT NULL,
			created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
			updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
			deleted_at TIMESTAMP
		)",
		table
	)
}

pub(crate) fn create_name_index(table: &str, index: &str) -> String {
	format!("CREATE INDEX IF NOT EXISTS {} ON {} (name, id)", index, table)
}

pub(crate) fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ViewDef> {
	Ok(ViewDef {
		id: ViewId(row.get(0)?),
		name: row.get(1)?,
		query: row.get(2)?,
		created_at: row.get(3)?,
		updated_at: row.get(4)?,
		deleted_at: row.get(5)?,
	})
}
