// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use matview_type::{Result, error, internal_error};
use tracing::{Level, debug};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Builder for the global fmt subscriber.
///
/// `RUST_LOG`, when set and valid, takes precedence over [`level`](Self::level).
#[derive(Debug, Clone)]
pub struct TracingBuilder {
	level: Level,
	json: bool,
	with_target: bool,
	ansi: bool,
}

impl TracingBuilder {
	pub fn new() -> Self {
		Self {
			level: Level::INFO,
			json: false,
			with_target: true,
			ansi: true,
		}
	}

	pub fn level(mut self, level: Level) -> Self {
		self.level = level;
		self
	}

	/// Emit one JSON object per event instead of human readable lines.
	pub fn json(mut self, json: bool) -> Self {
		self.json = json;
		self
	}

	pub fn with_target(mut self, with_target: bool) -> Self {
		self.with_target = with_target;
		self
	}

	pub fn ansi(mut self, ansi: bool) -> Self {
		self.ansi = ansi;
		self
	}

	pub(crate) fn filter(&self) -> EnvFilter {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.level.as_str().to_lowercase()))
	}

	/// Install the subscriber. Fails if one is already installed.
	pub fn try_init(self) -> Result<()> {
		let filter = self.filter();
		let registry = tracing_subscriber::registry().with(filter);

		let installed = if self.json {
			registry.with(fmt::layer().json().with_target(self.with_target)).try_init()
		} else {
			registry.with(fmt::layer().with_target(self.with_target).with_ansi(self.ansi)).try_init()
		};

		installed.map_err(|e| error!(internal_error!("tracing subscriber: {}", e)))
	}

	/// Install the subscriber. An already installed one stays in place and
	/// the failure is reported through it.
	pub fn init(self) {
		if let Err(err) = self.try_init() {
			debug!(code = %err.code, error = %err.message, "tracing subscriber not installed");
		}
	}
}

impl Default for TracingBuilder {
	fn default() -> Self {
		Self::new()
	}
}
