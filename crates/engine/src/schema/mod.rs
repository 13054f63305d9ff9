// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod ddl;
mod infer;
mod storage_type;

pub use infer::infer_schema;
use matview_sqlite::introspect::TableColumn;
pub use storage_type::StorageType;

/// A result column of the defining query and the storage type chosen for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferredColumn {
	pub name: String,
	/// The declared type reported by SQLite, or the storage class of the
	/// first non-NULL value for expression columns.
	pub native_type: Option<String>,
	pub storage_type: StorageType,
	/// Whether `native_type` is the column's declared type rather than one
	/// observed in the data.
	pub declared: bool,
}

impl InferredColumn {
	pub fn new(name: impl Into<String>, native_type: Option<String>) -> Self {
		let declared = native_type.is_some();
		Self::with_origin(name, native_type, declared)
	}

	/// A column whose type was taken from the values the query returned.
	pub fn observed(name: impl Into<String>, native_type: Option<String>) -> Self {
		Self::with_origin(name, native_type, false)
	}

	fn with_origin(name: impl Into<String>, native_type: Option<String>, declared: bool) -> Self {
		let storage_type = StorageType::from_native(native_type.as_deref().unwrap_or_default());
		Self {
			name: name.into(),
			native_type,
			storage_type,
			declared,
		}
	}
}

/// The ordered columns of a defining query's result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferredSchema {
	pub columns: Vec<InferredColumn>,
}

impl InferredSchema {
	pub fn column_names(&self) -> impl Iterator<Item = &str> {
		self.columns.iter().map(|c| c.name.as_str())
	}

	/// Whether an existing table already has exactly these columns, in
	/// order, with the same storage types.
	pub fn matches(&self, existing: &[TableColumn]) -> bool {
		self.columns.len() == existing.len()
			&& self.columns.iter().zip(existing).all(|(inferred, column)| {
				inferred.name == column.name
					&& inferred.storage_type.as_sql().eq_ignore_ascii_case(&column.declared_type)
			})
	}

	/// Like [`matches`](Self::matches), but the type of a column without a
	/// declared type is not compared. Such a type depends on the rows the
	/// query happened to return, so it can change while the query does not.
	pub fn compatible(&self, existing: &[TableColumn]) -> bool {
		self.columns.len() == existing.len()
			&& self.columns.iter().zip(existing).all(|(inferred, column)| {
				inferred.name == column.name
					&& (!inferred.declared
						|| inferred.storage_type.as_sql().eq_ignore_ascii_case(&column.declared_type))
			})
	}

	pub(crate) fn describe(&self) -> Vec<String> {
		self.columns.iter().map(|c| format!("{} {}", c.name, c.storage_type)).collect()
	}
}

pub(crate) fn describe_existing(existing: &[TableColumn]) -> Vec<String> {
	existing.iter().map(|c| format!("{} {}", c.name, c.declared_type)).collect()
}
