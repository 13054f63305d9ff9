// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Durable registry of materialized view definitions.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod registry;
mod view;

pub use matview_type::{Error, Result};
pub use registry::{DEFAULT_REGISTRY_TABLE, ViewRegistry};
pub use view::{ViewDef, ViewId};
