// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use matview_type::Result;
use rusqlite::Connection;
use tracing::{debug, instrument};

use super::{MaterializedView, MaterializedViewManager, not_found};

impl MaterializedViewManager {
	/// Re-run the registered query of `view_name` and replace the backing
	/// table's rows with its result set.
	///
	/// Fails with a not-found error, without writing anything, when no
	/// view of that name is registered.
	#[instrument(name = "engine::view::refresh", level = "info", skip(self, conn))]
	pub fn refresh(&self, conn: &mut Connection, view_name: &str) -> Result<MaterializedView> {
		let Some(view) = self.find_registered(conn, view_name)? else {
			return Err(not_found(view_name));
		};
		debug!(view = %view.name, id = %view.id, "refreshing registered view");
		self.create_or_refresh(conn, &view.query, view_name)
	}

	/// Refresh every registered view in name order, stopping at the first
	/// failure. Views refreshed before the failure stay committed.
	#[instrument(name = "engine::view::refresh_all", level = "info", skip_all)]
	pub fn refresh_all(&self, conn: &mut Connection) -> Result<Vec<MaterializedView>> {
		let views = self.views(conn)?;
		let mut refreshed = Vec::with_capacity(views.len());
		for view in views {
			refreshed.push(self.create_or_refresh(conn, &view.query, &view.name)?);
		}
		Ok(refreshed)
	}
}

#[cfg(test)]
mod tests {
	use matview_testing::{memory_connection, seed_source, table_rows};
	use matview_type::ErrorKind;

	use crate::MaterializedViewManager;

	#[test]
	fn test_refresh_unknown_view() {
		let mut conn = memory_connection();
		let manager = MaterializedViewManager::new();

		let err = manager.refresh(&mut conn, "missing").unwrap_err();
		assert_eq!(err.kind(), ErrorKind::NotFound);
		assert_eq!(err.code, "VIEW_001");
	}

	#[test]
	fn test_refresh_picks_up_new_rows() {
		let mut conn = memory_connection();
		seed_source(&conn, 3);
		let manager = MaterializedViewManager::new();

		manager.create_or_refresh(&mut conn, "SELECT id FROM source", "ids").unwrap();
		conn.execute("INSERT INTO source (id, value, label) VALUES (4, 40, 'row-4')", []).unwrap();

		let view = manager.refresh(&mut conn, "ids").unwrap();
		assert_eq!(view.rows, 4);
		assert_eq!(table_rows(&conn, "ids").len(), 4);
	}

	#[test]
	fn test_refresh_all_in_name_order() {
		let mut conn = memory_connection();
		seed_source(&conn, 2);
		let manager = MaterializedViewManager::new();

		manager.create_or_refresh(&mut conn, "SELECT label FROM source", "zeta").unwrap();
		manager.create_or_refresh(&mut conn, "SELECT id FROM source", "alpha").unwrap();

		let refreshed = manager.refresh_all(&mut conn).unwrap();
		let names: Vec<_> = refreshed.iter().map(|v| v.name.as_str()).collect();
		assert_eq!(names, vec!["alpha", "zeta"]);
	}

	#[test]
	fn test_refresh_all_without_registry() {
		let mut conn = memory_connection();
		let manager = MaterializedViewManager::new();
		assert!(manager.refresh_all(&mut conn).unwrap().is_empty());
	}
}
