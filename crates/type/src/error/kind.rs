// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

/// Coarse classification of an [`Error`](super::Error), derived from the
/// prefix of its diagnostic code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// The defining query could not be prepared, executed or introspected.
	Query,
	/// The backing table could not be created or its shape is unusable.
	Ddl,
	/// Register, rebuild, truncate, insert or commit failed and was rolled back.
	Transaction,
	/// The requested view is not registered.
	NotFound,
	/// The underlying store failed outside of a view operation.
	Store,
	Internal,
}

impl ErrorKind {
	pub fn from_code(code: &str) -> Self {
		match code.split('_').next().unwrap_or_default() {
			"QUERY" => ErrorKind::Query,
			"DDL" => ErrorKind::Ddl,
			"TXN" => ErrorKind::Transaction,
			"VIEW" => ErrorKind::NotFound,
			"STORE" => ErrorKind::Store,
			_ => ErrorKind::Internal,
		}
	}
}

impl Display for ErrorKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			ErrorKind::Query => f.write_str("query"),
			ErrorKind::Ddl => f.write_str("ddl"),
			ErrorKind::Transaction => f.write_str("transaction"),
			ErrorKind::NotFound => f.write_str("not found"),
			ErrorKind::Store => f.write_str("store"),
			ErrorKind::Internal => f.write_str("internal"),
		}
	}
}
