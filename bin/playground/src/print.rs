// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use matview_engine::Result;
use matview_sqlite::error::store_error;
use rusqlite::{Connection, types::ValueRef};

const WIDTH: usize = 15;

/// Print the result set of `sql` as a table of fixed width columns.
pub fn print_table(conn: &Connection, sql: &str) -> Result<()> {
	let mut stmt = conn.prepare(sql).map_err(|e| store_error(sql, &e))?;
	let names: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

	println!();
	for name in &names {
		print!("{name:<WIDTH$}");
	}
	println!();
	println!("{}", "-".repeat(WIDTH * names.len()));

	let mut rows = stmt.query([]).map_err(|e| store_error(sql, &e))?;
	while let Some(row) = rows.next().map_err(|e| store_error(sql, &e))? {
		for i in 0..names.len() {
			let value = row.get_ref(i).map_err(|e| store_error(sql, &e))?;
			print!("{:<WIDTH$}", render(value));
		}
		println!();
	}
	println!();

	Ok(())
}

fn render(value: ValueRef<'_>) -> String {
	match value {
		ValueRef::Null => String::new(),
		ValueRef::Integer(i) => i.to_string(),
		ValueRef::Real(f) => f.to_string(),
		ValueRef::Text(t) => String::from_utf8_lossy(t).into_owned(),
		ValueRef::Blob(b) => format!("<{} bytes>", b.len()),
	}
}
