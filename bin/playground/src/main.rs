// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod print;

use std::{
	env, fs,
	path::{Path, PathBuf},
	process,
};

use matview_engine::{MaterializedViewManager, Result};
use matview_sqlite::{SqliteConfig, error::store_error, open};
use matview_sub_tracing::TracingBuilder;
use print::print_table;
use rusqlite::{Connection, params};
use tracing::{error, info};

const EVENTS: usize = 1000;

const SAMPLE: &str = "SELECT id, amount, category, user_id FROM cash_flow_events LIMIT 5";

const VIEW: &str = "cash_flow_events_mv";

const CREATE_EVENTS: &str = "CREATE TABLE IF NOT EXISTS cash_flow_events (
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
)";

const INSERT_EVENT: &str = "INSERT INTO cash_flow_events (amount, date, category, necessity, description, user_id)
	VALUES (?1, date('now', '+' || ?2 || ' days'), 'income', 'need', 'description', ?3)";

fn main() {
	TracingBuilder::default().init();

	let path = env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("playground.db"));
	let result = run(&path);

	for suffix in ["", "-wal", "-shm"] {
		let mut file = path.clone().into_os_string();
		file.push(suffix);
		let _ = fs::remove_file(file);
	}

	if let Err(err) = result {
		error!(code = %err.code, "playground failed");
		eprintln!("{err}");
		process::exit(1);
	}
}

fn run(path: &Path) -> Result<()> {
	let mut conn = open(&SqliteConfig::new(path))?;

	conn.execute_batch(CREATE_EVENTS).map_err(|e| store_error(CREATE_EVENTS, &e))?;
	let count = seed_events(&conn, EVENTS)?;
	info!(count, "events ready");

	print_table(&conn, SAMPLE)?;

	let manager = MaterializedViewManager::new();
	let view = manager.create_or_refresh(&mut conn, SAMPLE, VIEW)?;
	info!(view = %view.name, rows = view.rows, columns = view.columns.len(), "view created");
	print_table(&conn, &format!("SELECT * FROM {VIEW}"))?;

	conn.execute("DELETE FROM cash_flow_events WHERE id IN (SELECT id FROM cash_flow_events LIMIT 2)", [])
		.map_err(|e| store_error("DELETE FROM cash_flow_events", &e))?;

	let view = manager.refresh(&mut conn, VIEW)?;
	info!(view = %view.name, rows = view.rows, "view refreshed");
	print_table(&conn, &format!("SELECT * FROM {VIEW}"))?;

	for def in manager.views(&conn)? {
		info!(view = %def.name, id = %def.id, updated_at = %def.updated_at, "registered");
	}

	Ok(())
}

/// Top the ledger up to `target` events with deterministic values and
/// return the resulting count.
fn seed_events(conn: &Connection, target: usize) -> Result<usize> {
	const COUNT: &str = "SELECT COUNT(*) FROM cash_flow_events";
	let count = |conn: &Connection| -> Result<usize> {
		conn.query_row(COUNT, [], |row| row.get::<_, i64>(0))
			.map(|n| n as usize)
			.map_err(|e| store_error(COUNT, &e))
	};

	let existing = count(conn)?;
	if existing < target {
		let mut stmt = conn.prepare(INSERT_EVENT).map_err(|e| store_error(INSERT_EVENT, &e))?;
		for i in existing..target {
			let i = i as i64;
			stmt.execute(params![(i * 7919) % 10_000, i % 30, (i * 31) % 100])
				.map_err(|e| store_error(INSERT_EVENT, &e))?;
		}
	}

	count(conn)
}
