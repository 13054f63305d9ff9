// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! SQLite plumbing shared by the registry and the view engine: connection
//! configuration, identifier quoting and schema introspection.

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod config;
mod connection;
pub mod error;
pub mod identifier;
pub mod introspect;

pub use config::{DbPath, JournalMode, OpenFlags, SqliteConfig, SynchronousMode, TempStore};
pub use connection::open;
pub use matview_type::{Error, Result};
pub use rusqlite::Connection;
