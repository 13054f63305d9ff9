// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Materialized views for SQLite.
//!
//! A view is a plain table holding the result set of a defining query. The
//! [`MaterializedViewManager`] infers the table's schema from the query,
//! records the query in the [`ViewRegistry`] and repopulates the table in a
//! single transaction, so a failed refresh leaves both untouched.

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod config;
mod query;
pub mod schema;
mod view;

pub use config::{SchemaChangePolicy, ViewConfig};
pub use matview_catalog::{ViewDef, ViewId, ViewRegistry};
pub use matview_type::{Error, ErrorKind, Result};
pub use query::normalize_query;
pub use schema::{InferredColumn, InferredSchema, StorageType, infer_schema};
pub use view::{MaterializedView, MaterializedViewManager};
