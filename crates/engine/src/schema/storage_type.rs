// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

/// Column type of a backing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageType {
	Integer,
	Real,
	Text,
	Blob,
}

impl StorageType {
	/// Map a native type name onto a storage type.
	///
	/// Follows SQLite's column affinity rules: the first matching substring
	/// wins, checked in the order `INT`, `CHAR`/`CLOB`/`TEXT`, `BLOB`,
	/// `REAL`/`FLOA`/`DOUB`. Everything else, including an empty name,
	/// is stored as TEXT.
	pub fn from_native(native: &str) -> Self {
		let upper = native.trim().to_ascii_uppercase();

		if upper.contains("INT") {
			StorageType::Integer
		} else if upper.contains("CHAR") || upper.contains("CLOB") || upper.contains("TEXT") {
			StorageType::Text
		} else if upper.contains("BLOB") {
			StorageType::Blob
		} else if upper.contains("REAL") || upper.contains("FLOA") || upper.contains("DOUB") {
			StorageType::Real
		} else {
			StorageType::Text
		}
	}

	pub fn as_sql(&self) -> &'static str {
		match self {
			StorageType::Integer => "INTEGER",
			StorageType::Real => "REAL",
			StorageType::Text => "TEXT",
			StorageType::Blob => "BLOB",
		}
	}
}

impl Display for StorageType {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_sql())
	}
}
