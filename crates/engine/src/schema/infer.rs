// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashSet;

use matview_sqlite::identifier::validate;
use matview_type::{
	Error, Result,
	error::{IdentifierKind, ViewError},
};
use rusqlite::{Connection, types::Type};
use tracing::{debug, instrument};

use super::{InferredColumn, InferredSchema};

/// Execute `query` once and derive the backing table's columns from its
/// result set.
///
/// Declared types come from the prepared statement. Columns without one
/// (expressions, aggregates) take the storage class of their first non-NULL
/// value; columns that are NULL in every row end up as TEXT.
#[instrument(name = "engine::schema::infer", level = "debug", skip(conn, query))]
pub fn infer_schema(conn: &Connection, view: &str, query: &str) -> Result<InferredSchema> {
	let query_failed = |e: rusqlite::Error| -> Error {
		ViewError::QueryFailed {
			statement: query.to_string(),
			cause: e.to_string(),
		}
		.into()
	};

	let mut stmt = conn.prepare(query).map_err(query_failed)?;

	if !stmt.readonly() {
		return Err(ViewError::QueryFailed {
			statement: query.to_string(),
			cause: "defining query must be a read-only statement".to_string(),
		}
		.into());
	}

	let declared: Vec<(String, Option<String>)> = stmt
		.columns()
		.into_iter()
		.map(|column| (column.name().to_string(), column.decl_type().map(str::to_string)))
		.collect();

	if declared.is_empty() {
		return Err(ViewError::NoColumns {
			view: view.to_string(),
		}
		.into());
	}

	let mut observed: Vec<Option<Type>> = vec![None; declared.len()];
	let mut pending = declared.iter().filter(|(_, decl)| decl.is_none()).count();
	let mut row_count = 0usize;

	let mut rows = stmt.query([]).map_err(query_failed)?;
	while let Some(row) = rows.next().map_err(query_failed)? {
		row_count += 1;
		if pending == 0 {
			continue;
		}
		for (idx, slot) in observed.iter_mut().enumerate() {
			if slot.is_some() || declared[idx].1.is_some() {
				continue;
			}
			let data_type = row.get_ref(idx).map_err(query_failed)?.data_type();
			if data_type != Type::Null {
				*slot = Some(data_type);
				pending -= 1;
			}
		}
	}

	let columns = declared
		.into_iter()
		.zip(observed)
		.map(|((name, decl), observed)| match decl {
			Some(decl) => InferredColumn::new(name, Some(decl)),
			None => InferredColumn::observed(name, observed.map(type_name)),
		})
		.collect::<Vec<_>>();

	validate_columns(view, &columns)?;

	debug!(columns = columns.len(), rows = row_count, "schema inferred");
	Ok(InferredSchema {
		columns,
	})
}

fn type_name(data_type: Type) -> String {
	match data_type {
		Type::Null => "NULL",
		Type::Integer => "INTEGER",
		Type::Real => "REAL",
		Type::Text => "TEXT",
		Type::Blob => "BLOB",
	}
	.to_string()
}

/// Every column must be a usable identifier and unique under SQLite's
/// case-insensitive comparison.
fn validate_columns(view: &str, columns: &[InferredColumn]) -> Result<()> {
	let mut seen = HashSet::with_capacity(columns.len());
	for column in columns {
		validate(IdentifierKind::Column, &column.name)?;
		if !seen.insert(column.name.to_ascii_lowercase()) {
			return Err(ViewError::DuplicateColumn {
				view: view.to_string(),
				column: column.name.clone(),
			}
			.into());
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use matview_testing::{memory_connection, seed_source};
	use matview_type::ErrorKind;

	use super::*;
	use crate::StorageType::*;

	fn shape(schema: &InferredSchema) -> Vec<(&str, crate::StorageType)> {
		schema.columns.iter().map(|c| (c.name.as_str(), c.storage_type)).collect()
	}

	#[test]
	fn test_declared_types() {
		let conn = memory_connection();
		seed_source(&conn, 3);

		let schema = infer_schema(&conn, "v", "SELECT id, value, label FROM source").unwrap();
		assert_eq!(shape(&schema), vec![("id", Integer), ("value", Integer), ("label", Text)]);
		assert_eq!(schema.columns[2].native_type.as_deref(), Some("TEXT"));
		assert!(schema.columns.iter().all(|c| c.declared));
	}

	#[test]
	fn test_preserves_column_order() {
		let conn = memory_connection();
		seed_source(&conn, 3);

		let schema = infer_schema(&conn, "v", "SELECT label, id FROM source").unwrap();
		assert_eq!(schema.column_names().collect::<Vec<_>>(), vec!["label", "id"]);
	}

	#[test]
	fn test_expression_columns_use_runtime_type() {
		let conn = memory_connection();
		seed_source(&conn, 3);

		let schema = infer_schema(
			&conn,
			"v",
			"SELECT COUNT(*) AS n, AVG(value) AS mean, x'00ff' AS raw, NULL AS empty FROM source",
		)
		.unwrap();
		assert_eq!(shape(&schema), vec![("n", Integer), ("mean", Real), ("raw", Blob), ("empty", Text)]);
		assert_eq!(schema.columns[3].native_type, None);
		assert!(schema.columns.iter().all(|c| !c.declared));
	}

	#[test]
	fn test_expression_type_skips_leading_nulls() {
		let conn = memory_connection();
		seed_source(&conn, 3);

		let schema = infer_schema(
			&conn,
			"v",
			"SELECT CASE WHEN id > 1 THEN id * 2 END AS doubled FROM source ORDER BY id",
		)
		.unwrap();
		assert_eq!(shape(&schema), vec![("doubled", Integer)]);
	}

	#[test]
	fn test_inference_is_deterministic() {
		let conn = memory_connection();
		seed_source(&conn, 10);
		let query = "SELECT id, value * 1.5 AS scaled, label FROM source ORDER BY id DESC LIMIT 5";

		let first = infer_schema(&conn, "v", query).unwrap();
		let second = infer_schema(&conn, "v", query).unwrap();
		assert_eq!(first, second);
	}

	#[test]
	fn test_missing_table_is_query_error() {
		let conn = memory_connection();
		let err = infer_schema(&conn, "v", "SELECT * FROM missing").unwrap_err();
		assert_eq!(err.kind(), ErrorKind::Query);
		assert_eq!(err.statement.as_deref(), Some("SELECT * FROM missing"));
		assert!(err.root_cause().message.contains("no such table"));
	}

	#[test]
	fn test_syntax_error_is_query_error() {
		let conn = memory_connection();
		let err = infer_schema(&conn, "v", "SELEC 1").unwrap_err();
		assert_eq!(err.kind(), ErrorKind::Query);
	}

	#[test]
	fn test_rejects_writing_statement() {
		let conn = memory_connection();
		seed_source(&conn, 3);

		let err = infer_schema(&conn, "v", "DELETE FROM source").unwrap_err();
		assert_eq!(err.kind(), ErrorKind::Query);

		let remaining: i64 = conn.query_row("SELECT COUNT(*) FROM source", [], |row| row.get(0)).unwrap();
		assert_eq!(remaining, 3);
	}

	#[test]
	fn test_duplicate_column_names() {
		let conn = memory_connection();
		seed_source(&conn, 3);

		let err = infer_schema(&conn, "v", "SELECT id, value AS ID FROM source").unwrap_err();
		assert_eq!(err.code, "DDL_003");
	}
}
