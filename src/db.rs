//! SQLite pool, per-connection setup and embedded schema migrations.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::define_sql_function;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel::sql_types::Text;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use log::{error, info};
use thiserror::Error;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

define_sql_function! {
    /// Full Unicode lowercase; SQLite's built-in `lower` only folds ASCII.
    fn unicode_lower(value: Text) -> Text;
}

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Database connection error: {0}")]
    ConnectionError(#[from] PoolError),
    #[error("Database migration error: {0}")]
    MigrationError(Box<dyn std::error::Error + Send + Sync>),
}

/// Applied to every connection the pool hands out.
#[derive(Debug)]
pub struct ConnectionOptions {
    /// Switch the journal to Write Ahead Logging.
    pub enable_wal: bool,
    /// How long a writer waits on a locked database.
    pub busy_timeout: Option<Duration>,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        (|| {
            if self.enable_wal {
                conn.batch_execute("PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;")?;
            }
            if let Some(timeout) = self.busy_timeout {
                conn.batch_execute(&format!("PRAGMA busy_timeout = {};", timeout.as_millis()))?;
            }
            unicode_lower_utils::register_impl(conn, |value: String| value.to_lowercase())
        })()
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Create the connection pool for `database_url`.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, PoolError> {
    Pool::builder()
        .connection_customizer(Box::new(ConnectionOptions {
            enable_wal: true,
            busy_timeout: Some(Duration::from_secs(30)),
        }))
        .build(ConnectionManager::<SqliteConnection>::new(database_url))
}

/// Checks a connection out of the pool, logging failures.
pub fn get_connection(pool: &DbPool) -> Result<DbConnection, PoolError> {
    pool.get().inspect_err(|e| error!("Failed to get connection from pool: {e}"))
}

/// Apply every embedded migration that has not run against the database yet.
pub fn run_migrations(pool: &DbPool) -> Result<(), DbError> {
    let mut conn = get_connection(pool)?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(DbError::MigrationError)?;
    if !applied.is_empty() {
        info!("Applied {} database migration(s)", applied.len());
    }
    Ok(())
}
