// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! SQLite connection utilities.

use std::path::PathBuf;

use matview_type::{Result, error, error::diagnostic::store::connection_failed};
use rusqlite::Connection;
use tracing::{debug, instrument};

use crate::{DbPath, OpenFlags, SqliteConfig, error::store_error};

/// Open a connection and apply the configured pragmas.
#[instrument(name = "sqlite::open", level = "info", skip(config), fields(
	db_path = ?config.path,
	journal_mode = %config.journal_mode.as_str()
))]
pub fn open(config: &SqliteConfig) -> Result<Connection> {
	let flags = convert_flags(&config.flags);

	let conn = match resolve_db_path(&config.path)? {
		DbPath::File(path) => Connection::open_with_flags(&path, flags)
			.map_err(|e| error!(connection_failed(path.display().to_string(), e.to_string())))?,
		DbPath::Memory => Connection::open_in_memory_with_flags(flags)
			.map_err(|e| error!(connection_failed(":memory:", e.to_string())))?,
	};

	configure(&conn, config)?;
	Ok(conn)
}

fn configure(conn: &Connection, config: &SqliteConfig) -> Result<()> {
	conn.pragma_update(None, "journal_mode", config.journal_mode.as_str())
		.map_err(|e| store_error("PRAGMA journal_mode", &e))?;
	conn.pragma_update(None, "synchronous", config.synchronous_mode.as_str())
		.map_err(|e| store_error("PRAGMA synchronous", &e))?;
	conn.pragma_update(None, "temp_store", config.temp_store.as_str())
		.map_err(|e| store_error("PRAGMA temp_store", &e))?;
	conn.pragma_update(None, "cache_size", -(config.cache_size as i64))
		.map_err(|e| store_error("PRAGMA cache_size", &e))?;

	conn.busy_timeout(config.busy_timeout).map_err(|e| store_error("PRAGMA busy_timeout", &e))?;

	debug!(
		synchronous = config.synchronous_mode.as_str(),
		temp_store = config.temp_store.as_str(),
		cache_size = config.cache_size,
		"connection configured"
	);
	Ok(())
}

/// Resolve the database path, creating directories as needed. A path
/// without an extension is treated as a directory holding `matview.db`.
fn resolve_db_path(db_path: &DbPath) -> Result<DbPath> {
	match db_path {
		DbPath::Memory => Ok(DbPath::Memory),
		DbPath::File(path) => {
			let resolved: PathBuf = if path.extension().is_none() && !path.as_os_str().is_empty() {
				std::fs::create_dir_all(path).map_err(|e| {
					error!(connection_failed(path.display().to_string(), e.to_string()))
				})?;
				path.join("matview.db")
			} else {
				if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
					std::fs::create_dir_all(parent).map_err(|e| {
						error!(connection_failed(path.display().to_string(), e.to_string()))
					})?;
				}
				path.clone()
			};
			Ok(DbPath::File(resolved))
		}
	}
}

/// Convert our OpenFlags to rusqlite OpenFlags.
fn convert_flags(flags: &OpenFlags) -> rusqlite::OpenFlags {
	let mut rusqlite_flags = rusqlite::OpenFlags::empty();

	if flags.read_write {
		rusqlite_flags |= rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE;
	}
	if flags.create {
		rusqlite_flags |= rusqlite::OpenFlags::SQLITE_OPEN_CREATE;
	}
	if flags.full_mutex {
		rusqlite_flags |= rusqlite::OpenFlags::SQLITE_OPEN_FULL_MUTEX;
	}
	if flags.no_mutex {
		rusqlite_flags |= rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX;
	}
	if flags.shared_cache {
		rusqlite_flags |= rusqlite::OpenFlags::SQLITE_OPEN_SHARED_CACHE;
	}
	if flags.private_cache {
		rusqlite_flags |= rusqlite::OpenFlags::SQLITE_OPEN_PRIVATE_CACHE;
	}
	if flags.uri {
		rusqlite_flags |= rusqlite::OpenFlags::SQLITE_OPEN_URI;
	}

	rusqlite_flags
}
