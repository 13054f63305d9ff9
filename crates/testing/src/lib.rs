// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Fixtures shared by the matview test suites.

pub mod fixture;
pub mod inspect;
pub mod tempdir;

pub use fixture::{memory_connection, seed_events, seed_source};
pub use inspect::{query_rows, table_columns, table_rows};
pub use tempdir::temp_dir;
