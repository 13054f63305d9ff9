// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use matview_type::{Error, error, error::diagnostic::store::store_failed};

/// Wrap a rusqlite failure that happened while running `statement`.
pub fn store_error(statement: impl Into<String>, err: &rusqlite::Error) -> Error {
	error!(store_failed(statement, err.to_string()))
}
