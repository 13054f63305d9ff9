// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use matview_sqlite::{SqliteConfig, open};
use rusqlite::{Connection, params};

/// An in-memory database opened with the same pragmas as a file store.
pub fn memory_connection() -> Connection {
	open(&SqliteConfig::in_memory()).expect("in-memory database opens")
}

/// Create `source(id, value, label)` holding rows `1..=n`, where `value` is
/// `id * 10` and `label` is `row-{id}`.
pub fn seed_source(conn: &Connection, n: i64) {
	conn.execute_batch(
		"CREATE TABLE IF NOT EXISTS source (
			id INTEGER PRIMARY KEY,
			value INTEGER NOT NULL,
			label TEXT NOT NULL
		)",
	)
	.expect("source table");

	let mut stmt = conn
		.prepare("INSERT INTO source (id, value, label) VALUES (?1, ?2, ?3)")
		.expect("prepare source insert");
	for id in 1..=n {
		stmt.execute(params![id, id * 10, format!("row-{id}")]).expect("insert source row");
	}
}

/// Create the `events` ledger and append `n` rows with deterministic
/// values. Every tenth event belongs to `user_id = 1`.
pub fn seed_events(conn: &Connection, n: i64) {
	create_events(conn, "events");

	let mut stmt = conn
		.prepare(
			"INSERT INTO events (amount, date, category, necessity, description, user_id)
			VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
		)
		.expect("prepare event insert");
	for i in 1..=n {
		let category = if i % 2 == 0 {
			"income"
		} else {
			"expense"
		};
		let necessity = if i % 3 == 0 {
			"want"
		} else {
			"need"
		};
		let date = format!("2025-01-{:02} {:02}:00:00", 1 + i % 28, i % 24);
		stmt.execute(params![(i * 37) % 10_000, date, category, necessity, format!("event {i}"), i % 10])
			.expect("insert event");
	}
}

/// Create an empty table with the layout of the cash flow ledger.
fn create_events(conn: &Connection, table: &str) {
	conn.execute_batch(&format!(
		"CREATE TABLE IF NOT EXISTS {table} (
			id INTEGER PRIMARY KEY AUTOINCREMENT,
			amount INTEGER NOT NULL,
			date TIMESTAMP NOT NULL,
			category TEXT NOT NULL,
			necessity TEXT NOT NULL,
			description TEXT,
			user_id INTEGER NOT NULL,
			created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
			updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
			deleted_at TIMESTAMP
		)"
	))
	.expect("events table");
}
