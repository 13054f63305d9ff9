// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use matview_type::Result;
use rusqlite::{Connection, OptionalExtension, params};

use crate::error::store_error;

/// A column of an existing table as SQLite reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
	pub name: String,
	/// The declared type, empty when the column was declared without one.
	pub declared_type: String,
}

const TABLE_EXISTS: &str = "SELECT 1 FROM (
		SELECT type, name FROM main.sqlite_master
		UNION ALL
		SELECT type, name FROM temp.sqlite_master
	) WHERE type IN ('table', 'view') AND name = ?1 COLLATE NOCASE LIMIT 1";

const TABLE_COLUMNS: &str = "SELECT name, type FROM pragma_table_info(?1, 'main') ORDER BY cid";

/// Whether a table or view named `name` exists in the main or the temp
/// schema. A temp object shadows a main one of the same name for unqualified
/// statements, so both count. SQLite compares names case-insensitively, and
/// so does this check.
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
	conn.query_row(TABLE_EXISTS, params![name], |_| Ok(()))
		.optional()
		.map(|found| found.is_some())
		.map_err(|e| store_error(TABLE_EXISTS, &e))
}

/// The columns of table `name` in the main schema, in declaration order;
/// empty when there is no such table.
pub fn table_columns(conn: &Connection, name: &str) -> Result<Vec<TableColumn>> {
	let mut stmt = conn.prepare(TABLE_COLUMNS).map_err(|e| store_error(TABLE_COLUMNS, &e))?;
	let rows = stmt
		.query_map(params![name], |row| {
			Ok(TableColumn {
				name: row.get(0)?,
				declared_type: row.get(1)?,
			})
		})
		.map_err(|e| store_error(TABLE_COLUMNS, &e))?;

	rows.collect::<rusqlite::Result<Vec<_>>>().map_err(|e| store_error(TABLE_COLUMNS, &e))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn conn() -> Connection {
		let conn = Connection::open_in_memory().unwrap();
		conn.execute_batch("CREATE TABLE \"Odd \"\"Name\"\" \" (b INTEGER, a TEXT, c)").unwrap();
		conn
	}

	#[test]
	fn test_table_exists() {
		let conn = conn();
		assert!(table_exists(&conn, "Odd \"Name\" ").unwrap());
		assert!(table_exists(&conn, "odd \"name\" ").unwrap());
		assert!(!table_exists(&conn, "missing").unwrap());
	}

	#[test]
	fn test_table_columns_in_declaration_order() {
		let conn = conn();
		let columns = table_columns(&conn, "Odd \"Name\" ").unwrap();
		assert_eq!(
			columns,
			vec![
				TableColumn {
					name: "b".to_string(),
					declared_type: "INTEGER".to_string()
				},
				TableColumn {
					name: "a".to_string(),
					declared_type: "TEXT".to_string()
				},
				TableColumn {
					name: "c".to_string(),
					declared_type: "".to_string()
				},
			]
		);
	}

	#[test]
	fn test_table_columns_missing_table() {
		let conn = conn();
		assert!(table_columns(&conn, "missing").unwrap().is_empty());
	}

	#[test]
	fn test_temp_table_exists() {
		let conn = conn();
		conn.execute_batch("CREATE TEMP TABLE scratch (x INTEGER)").unwrap();
		assert!(table_exists(&conn, "scratch").unwrap());
		assert!(table_columns(&conn, "scratch").unwrap().is_empty());
	}
}
