// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use matview_engine::{MaterializedViewManager, SchemaChangePolicy, StorageType, ViewConfig};
use matview_sqlite::{SqliteConfig, introspect::table_exists, open};
use matview_testing::{memory_connection, query_rows, seed_source, table_columns, table_rows, temp_dir};
use rusqlite::types::Value;

fn ids(rows: &[Vec<Value>]) -> Vec<i64> {
	rows.iter()
		.map(|row| match row[0] {
			Value::Integer(id) => id,
			ref other => panic!("expected integer id, got {other:?}"),
		})
		.collect()
}

#[test]
fn test_create_populates_backing_table() {
	let mut conn = memory_connection();
	seed_source(&conn, 10);
	let manager = MaterializedViewManager::new();

	let view = manager.create_or_refresh(&mut conn, "SELECT id, label FROM source WHERE id <= 3", "small").unwrap();

	assert_eq!(view.name, "small");
	assert_eq!(view.rows, 3);
	assert!(!view.rebuilt);
	assert_eq!(
		table_rows(&conn, "small"),
		vec![
			vec![Value::Integer(1), Value::Text("row-1".into())],
			vec![Value::Integer(2), Value::Text("row-2".into())],
			vec![Value::Integer(3), Value::Text("row-3".into())],
		]
	);
	assert_eq!(
		manager.registry().lookup_query(&conn, "small").unwrap().as_deref(),
		Some("SELECT id, label FROM source WHERE id <= 3")
	);
}

#[test]
fn test_create_twice_is_idempotent() {
	let mut conn = memory_connection();
	seed_source(&conn, 5);
	let manager = MaterializedViewManager::new();

	let first = manager.create_or_refresh(&mut conn, "SELECT * FROM source", "all_rows").unwrap();
	let before = table_rows(&conn, "all_rows");
	let id = manager.registry().find_view(&conn, "all_rows").unwrap().unwrap().id;

	let second = manager.create_or_refresh(&mut conn, "SELECT * FROM source;", "all_rows").unwrap();

	assert_eq!(first.rows, second.rows);
	assert_eq!(table_rows(&conn, "all_rows"), before);
	assert_eq!(manager.registry().find_view(&conn, "all_rows").unwrap().unwrap().id, id);
	assert_eq!(manager.registry().history(&conn, "all_rows").unwrap().len(), 1);
}

#[test]
fn test_refresh_reflects_deleted_rows() {
	let mut conn = memory_connection();
	seed_source(&conn, 100);
	let manager = MaterializedViewManager::new();

	manager.create_or_refresh(&mut conn, "SELECT id, value FROM source ORDER BY id DESC LIMIT 5", "latest").unwrap();
	assert_eq!(ids(&query_rows(&conn, "SELECT id FROM latest ORDER BY id DESC")), vec![100, 99, 98, 97, 96]);

	conn.execute("DELETE FROM source WHERE id > 95", []).unwrap();
	let view = manager.refresh(&mut conn, "latest").unwrap();

	assert_eq!(view.rows, 5);
	assert_eq!(ids(&query_rows(&conn, "SELECT id FROM latest ORDER BY id DESC")), vec![95, 94, 93, 92, 91]);
}

#[test]
fn test_refresh_of_empty_result() {
	let mut conn = memory_connection();
	seed_source(&conn, 3);
	let manager = MaterializedViewManager::new();

	manager.create_or_refresh(&mut conn, "SELECT id FROM source", "ids").unwrap();
	conn.execute("DELETE FROM source", []).unwrap();

	let view = manager.refresh(&mut conn, "ids").unwrap();
	assert_eq!(view.rows, 0);
	assert!(table_rows(&conn, "ids").is_empty());
	assert_eq!(table_columns(&conn, "ids"), vec![("id".to_string(), "INTEGER".to_string())]);
}

#[test]
fn test_columns_follow_query_order() {
	let mut conn = memory_connection();
	seed_source(&conn, 2);
	let manager = MaterializedViewManager::new();

	let view = manager.create_or_refresh(&mut conn, "SELECT label AS b, id AS a FROM source", "ordered").unwrap();

	assert_eq!(
		table_columns(&conn, "ordered"),
		vec![("b".to_string(), "TEXT".to_string()), ("a".to_string(), "INTEGER".to_string())]
	);
	assert_eq!(view.columns[0].storage_type, StorageType::Text);
	assert_eq!(view.columns[1].storage_type, StorageType::Integer);
}

#[test]
fn test_expression_columns_use_runtime_type() {
	let mut conn = memory_connection();
	seed_source(&conn, 4);
	let manager = MaterializedViewManager::new();

	manager.create_or_refresh(
		&mut conn,
		"SELECT COUNT(*) AS n, SUM(value) * 1.5 AS total, NULL AS empty FROM source",
		"totals",
	)
	.unwrap();

	assert_eq!(
		table_columns(&conn, "totals"),
		vec![
			("n".to_string(), "INTEGER".to_string()),
			("total".to_string(), "REAL".to_string()),
			("empty".to_string(), "TEXT".to_string()),
		]
	);
	assert_eq!(
		table_rows(&conn, "totals"),
		vec![vec![Value::Integer(4), Value::Real(150.0), Value::Null]]
	);
}

#[test]
fn test_changed_query_appends_history() {
	let mut conn = memory_connection();
	seed_source(&conn, 10);
	let manager = MaterializedViewManager::new();

	manager.create_or_refresh(&mut conn, "SELECT id FROM source WHERE id < 3", "subset").unwrap();
	manager.create_or_refresh(&mut conn, "SELECT id FROM source WHERE id < 6", "subset").unwrap();

	let history = manager.registry().history(&conn, "subset").unwrap();
	assert_eq!(history.len(), 2);
	assert!(history[0].id < history[1].id);

	let view = manager.refresh(&mut conn, "subset").unwrap();
	assert_eq!(view.query, "SELECT id FROM source WHERE id < 6");
	assert_eq!(view.rows, 5);
}

#[test]
fn test_schema_change_rebuilds_table() {
	let mut conn = memory_connection();
	seed_source(&conn, 3);
	let manager = MaterializedViewManager::new();

	manager.create_or_refresh(&mut conn, "SELECT id, value FROM source", "shape").unwrap();
	let view = manager.create_or_refresh(&mut conn, "SELECT id, label FROM source", "shape").unwrap();

	assert!(view.rebuilt);
	assert_eq!(
		table_columns(&conn, "shape"),
		vec![("id".to_string(), "INTEGER".to_string()), ("label".to_string(), "TEXT".to_string())]
	);
	assert_eq!(table_rows(&conn, "shape").len(), 3);
}

#[test]
fn test_rebuild_picks_up_observed_column_type() {
	let mut conn = memory_connection();
	seed_source(&conn, 0);
	let manager = MaterializedViewManager::new();

	manager.create_or_refresh(&mut conn, "SELECT MAX(value) AS m FROM source", "peak").unwrap();
	conn.execute("INSERT INTO source (id, value, label) VALUES (1, 10, 'row-1')", []).unwrap();
	let view = manager.refresh(&mut conn, "peak").unwrap();

	assert!(view.rebuilt);
	assert_eq!(table_columns(&conn, "peak"), vec![("m".to_string(), "INTEGER".to_string())]);
	assert_eq!(table_rows(&conn, "peak"), vec![vec![Value::Integer(10)]]);
}

#[test]
fn test_names_are_case_insensitive() {
	let mut conn = memory_connection();
	seed_source(&conn, 3);
	let manager = MaterializedViewManager::new();

	manager.create_or_refresh(&mut conn, "SELECT id FROM source", "Daily").unwrap();
	let view = manager.refresh(&mut conn, "DAILY").unwrap();

	assert_eq!(view.rows, 3);
	assert_eq!(manager.views(&conn).unwrap().len(), 1);
}

#[test]
fn test_views_lists_current_definitions() {
	let mut conn = memory_connection();
	seed_source(&conn, 3);
	let manager = MaterializedViewManager::new();
	assert!(manager.views(&conn).unwrap().is_empty());

	manager.create_or_refresh(&mut conn, "SELECT id FROM source", "b_view").unwrap();
	manager.create_or_refresh(&mut conn, "SELECT label FROM source", "a_view").unwrap();
	manager.create_or_refresh(&mut conn, "SELECT value FROM source", "b_view").unwrap();

	let views = manager.views(&conn).unwrap();
	let listed: Vec<_> = views.iter().map(|v| (v.name.as_str(), v.query.as_str())).collect();
	assert_eq!(listed, vec![("a_view", "SELECT label FROM source"), ("b_view", "SELECT value FROM source")]);
}

#[test]
fn test_custom_registry_table() {
	let mut conn = memory_connection();
	seed_source(&conn, 2);
	let manager = MaterializedViewManager::with_config(
		ViewConfig::default().registry_table("view_catalog").on_schema_change(SchemaChangePolicy::Rebuild),
	);

	manager.create_or_refresh(&mut conn, "SELECT id FROM source", "ids").unwrap();

	assert!(table_exists(&conn, "view_catalog").unwrap());
	assert!(!table_exists(&conn, "materialized_views").unwrap());
	assert_eq!(manager.refresh(&mut conn, "ids").unwrap().rows, 2);
}

#[test]
fn test_views_survive_reopen() {
	temp_dir(|dir| {
		let config = SqliteConfig::new(dir.join("views.db"));
		let manager = MaterializedViewManager::new();

		{
			let mut conn = open(&config).unwrap();
			seed_source(&conn, 4);
			manager.create_or_refresh(&mut conn, "SELECT id FROM source WHERE id % 2 = 0", "even").unwrap();
		}

		let mut conn = open(&config).unwrap();
		conn.execute("INSERT INTO source (id, value, label) VALUES (6, 60, 'row-6')", []).unwrap();
		let view = manager.refresh(&mut conn, "even").unwrap();

		assert_eq!(view.rows, 3);
		assert_eq!(ids(&table_rows(&conn, "even")), vec![2, 4, 6]);
		Ok(())
	})
	.unwrap();
}
