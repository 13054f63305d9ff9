// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Statements for a view's backing table. Every identifier goes through
//! [`quote`]; the defining query is only ever embedded as a sub-select.
//! Backing tables always live in the main schema, so a temp table of the
//! same name is never touched.

use matview_sqlite::identifier::quote;

use super::InferredSchema;

pub fn create_table(view: &str, schema: &InferredSchema) -> String {
	let columns = schema
		.columns
		.iter()
		.map(|c| format!("{} {}", quote(&c.name), c.storage_type))
		.collect::<Vec<_>>()
		.join(", ");
	format!("CREATE TABLE IF NOT EXISTS {} ({})", qualified(view), columns)
}

pub fn drop_table(view: &str) -> String {
	format!("DROP TABLE IF EXISTS {}", qualified(view))
}

pub fn truncate(view: &str) -> String {
	format!("DELETE FROM {}", qualified(view))
}

/// The query sits on its own lines so a trailing `--` comment cannot swallow
/// the closing parenthesis.
pub fn populate(view: &str, schema: &InferredSchema, query: &str) -> String {
	let columns = schema.column_names().map(quote).collect::<Vec<_>>().join(", ");
	format!("INSERT INTO {} ({}) SELECT * FROM (\n{}\n)", qualified(view), columns, query)
}

fn qualified(view: &str) -> String {
	format!("\"main\".{}", quote(view))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::schema::InferredColumn;

	fn schema() -> InferredSchema {
		InferredSchema {
			columns: vec![
				InferredColumn::new("b", Some("BIGINT".to_string())),
				InferredColumn::new("a \"quoted\"", Some("VARCHAR(10)".to_string())),
				InferredColumn::new("count(*)", None),
			],
		}
	}

	#[test]
	fn test_create_table() {
		assert_eq!(
			create_table("daily", &schema()),
			"CREATE TABLE IF NOT EXISTS \"main\".\"daily\" (\"b\" INTEGER, \"a \"\"quoted\"\"\" TEXT, \"count(*)\" TEXT)"
		);
	}

	#[test]
	fn test_view_name_cannot_break_out() {
		assert_eq!(drop_table("v\"; DROP TABLE source; --"), "DROP TABLE IF EXISTS \"main\".\"v\"\"; DROP TABLE source; --\"");
	}

	#[test]
	fn test_populate_names_columns() {
		assert_eq!(
			populate("daily", &schema(), "SELECT 1, 2, 3 -- trailing"),
			"INSERT INTO \"main\".\"daily\" (\"b\", \"a \"\"quoted\"\"\", \"count(*)\") SELECT * FROM (\nSELECT 1, 2, 3 -- trailing\n)"
		);
	}

	#[test]
	fn test_truncate() {
		assert_eq!(truncate("daily"), "DELETE FROM \"main\".\"daily\"");
	}
}
