//! Shared helpers for integration tests backed by a temporary SQLite file.

use customer_service::db::{DbPool, establish_connection_pool, run_migrations};
use tempfile::TempDir;

/// Migrated SQLite database living in its own temporary directory.
///
/// The directory, database file and WAL side files are removed on drop.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let database_url = path.to_str().expect("utf-8 temp path").to_string();

        let pool = establish_connection_pool(&database_url).expect("create pool");
        run_migrations(&pool).expect("run migrations");

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}
