// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::Diagnostic;

/// A failure reported by the underlying SQLite library.
pub fn sqlite_failure(reason: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "STORE_001".to_string(),
		statement: None,
		message: reason.into(),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

pub fn store_failed(statement: impl Into<String>, reason: impl Into<String>) -> Diagnostic {
	let reason = reason.into();
	Diagnostic {
		code: "STORE_001".to_string(),
		statement: Some(statement.into()),
		message: format!("store operation failed: {}", reason),
		label: Some("statement rejected by the store".to_string()),
		help: Some("check that the database file is writable and not corrupted".to_string()),
		notes: vec![],
		cause: Some(Box::new(sqlite_failure(reason))),
	}
}

pub fn connection_failed(path: impl Into<String>, reason: impl Into<String>) -> Diagnostic {
	let path = path.into();
	let reason = reason.into();
	Diagnostic {
		code: "STORE_002".to_string(),
		statement: None,
		message: format!("Failed to connect to database at {}: {}", path, reason),
		label: None,
		help: Some("verify the path exists and the process may open it".to_string()),
		notes: vec![],
		cause: Some(Box::new(sqlite_failure(reason))),
	}
}
