// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use super::diagnostic::{Diagnostic, IntoDiagnostic, store::sqlite_failure};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
	View,
	Column,
	Table,
}

impl Display for IdentifierKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			IdentifierKind::View => f.write_str("view"),
			IdentifierKind::Column => f.write_str("column"),
			IdentifierKind::Table => f.write_str("table"),
		}
	}
}

/// The step of the refresh transaction that was running when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStage {
	Begin,
	Register,
	Rebuild,
	Truncate,
	Populate,
	Unregister,
	Drop,
	Commit,
}

impl Display for TransactionStage {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			TransactionStage::Begin => f.write_str("begin"),
			TransactionStage::Register => f.write_str("register"),
			TransactionStage::Rebuild => f.write_str("rebuild"),
			TransactionStage::Truncate => f.write_str("truncate"),
			TransactionStage::Populate => f.write_str("populate"),
			TransactionStage::Unregister => f.write_str("unregister"),
			TransactionStage::Drop => f.write_str("drop"),
			TransactionStage::Commit => f.write_str("commit"),
		}
	}
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ViewError {
	#[error("defining query failed: {cause}")]
	QueryFailed {
		statement: String,
		cause: String,
	},

	#[error("defining query is empty")]
	EmptyQuery,

	#[error("failed to create backing table for view '{view}': {cause}")]
	CreateTableFailed {
		view: String,
		statement: String,
		cause: String,
	},

	#[error("invalid {kind} name '{name}': {reason}")]
	InvalidIdentifier {
		kind: IdentifierKind,
		name: String,
		reason: &'static str,
	},

	#[error("defining query of view '{view}' returns column '{column}' more than once")]
	DuplicateColumn {
		view: String,
		column: String,
	},

	#[error("shape of view '{view}' changed")]
	SchemaDrift {
		view: String,
		existing: Vec<String>,
		inferred: Vec<String>,
	},

	#[error("'{name}' already exists and is not a materialized view")]
	NameConflict {
		name: String,
	},

	#[error("defining query of view '{view}' returns no columns")]
	NoColumns {
		view: String,
	},

	#[error("{stage} step of view '{view}' failed: {cause}")]
	TransactionFailed {
		view: String,
		stage: TransactionStage,
		statement: Option<String>,
		cause: String,
	},

	#[error("materialized view '{name}' not found")]
	ViewNotFound {
		name: String,
	},
}

impl IntoDiagnostic for ViewError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			ViewError::QueryFailed {
				statement,
				cause,
			} => Diagnostic {
				code: "QUERY_001".to_string(),
				statement: Some(statement),
				message,
				label: Some("query could not be executed".to_string()),
				help: Some(
					"check the query for syntax errors and that every referenced table exists"
						.to_string(),
				),
				notes: vec![],
				cause: Some(Box::new(sqlite_failure(cause))),
			},

			ViewError::EmptyQuery => Diagnostic {
				code: "QUERY_002".to_string(),
				statement: None,
				message,
				label: None,
				help: Some("provide a SELECT statement whose result set the view should hold".to_string()),
				notes: vec![],
				cause: None,
			},

			ViewError::CreateTableFailed {
				statement,
				cause,
				..
			} => Diagnostic {
				code: "DDL_001".to_string(),
				statement: Some(statement),
				message,
				label: Some("backing table could not be created".to_string()),
				help: None,
				notes: vec!["the transaction was rolled back, nothing was written".to_string()],
				cause: Some(Box::new(sqlite_failure(cause))),
			},

			ViewError::InvalidIdentifier {
				kind,
				..
			} => Diagnostic {
				code: "DDL_002".to_string(),
				statement: None,
				message,
				label: Some(format!("{} names are used as SQL identifiers", kind)),
				help: Some(match kind {
					IdentifierKind::Column => "alias the column in the defining query, e.g. `SELECT count(*) AS total`".to_string(),
					_ => "choose a non-empty name without control characters".to_string(),
				}),
				notes: vec![],
				cause: None,
			},

			ViewError::DuplicateColumn {
				column,
				..
			} => Diagnostic {
				code: "DDL_003".to_string(),
				statement: None,
				message,
				label: Some(format!("column '{}' appears more than once", column)),
				help: Some("give each result column a distinct alias".to_string()),
				notes: vec!["column names are compared case-insensitively".to_string()],
				cause: None,
			},

			ViewError::SchemaDrift {
				existing,
				inferred,
				..
			} => Diagnostic {
				code: "DDL_004".to_string(),
				statement: None,
				message,
				label: Some("backing table no longer matches the defining query".to_string()),
				help: Some(
					"drop the view and create it again, or enable rebuilding on schema change"
						.to_string(),
				),
				notes: vec![
					format!("existing columns: {}", existing.join(", ")),
					format!("inferred columns: {}", inferred.join(", ")),
				],
				cause: None,
			},

			ViewError::NameConflict {
				..
			} => Diagnostic {
				code: "DDL_005".to_string(),
				statement: None,
				message,
				label: Some("refreshing would overwrite an unmanaged table".to_string()),
				help: Some("choose a different view name".to_string()),
				notes: vec![],
				cause: None,
			},

			ViewError::NoColumns {
				..
			} => Diagnostic {
				code: "DDL_006".to_string(),
				statement: None,
				message,
				label: Some("a table needs at least one column".to_string()),
				help: Some("use a SELECT statement as defining query".to_string()),
				notes: vec![],
				cause: None,
			},

			ViewError::TransactionFailed {
				statement,
				cause,
				..
			} => Diagnostic {
				code: "TXN_001".to_string(),
				statement,
				message,
				label: Some("transaction rolled back".to_string()),
				help: None,
				notes: vec!["the backing table and the registry were left unchanged".to_string()],
				cause: Some(Box::new(sqlite_failure(cause))),
			},

			ViewError::ViewNotFound {
				..
			} => Diagnostic {
				code: "VIEW_001".to_string(),
				statement: None,
				message,
				label: None,
				help: Some("create the view before refreshing or dropping it".to_string()),
				notes: vec![],
				cause: None,
			},
		}
	}
}
