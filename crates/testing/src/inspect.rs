// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use matview_sqlite::identifier::quote;
use rusqlite::{Connection, types::Value};

/// All rows of `table` in insertion order.
pub fn table_rows(conn: &Connection, table: &str) -> Vec<Vec<Value>> {
	query_rows(conn, &format!("SELECT * FROM {} ORDER BY rowid", quote(table)))
}

pub fn query_rows(conn: &Connection, sql: &str) -> Vec<Vec<Value>> {
	let mut stmt = conn.prepare(sql).expect("prepare query");
	let width = stmt.column_count();
	stmt.query_map([], |row| (0..width).map(|i| row.get::<_, Value>(i)).collect::<rusqlite::Result<Vec<_>>>())
		.expect("run query")
		.collect::<rusqlite::Result<Vec<_>>>()
		.expect("read rows")
}

/// `(name, declared type)` of each column of `table`, in order.
pub fn table_columns(conn: &Connection, table: &str) -> Vec<(String, String)> {
	matview_sqlite::introspect::table_columns(conn, table)
		.expect("table info")
		.into_iter()
		.map(|c| (c.name, c.declared_type))
		.collect()
}
