//! Storage handle and its configuration.
//!
//! # Responsibility
//! - Describe where the catalog store lives and how connections behave.
//! - Scope one connection to one unit of work.
//!
//! # Invariants
//! - No connection outlives the call that opened it.
//! - Close failures on the success path are surfaced, not swallowed.

use super::schema::apply_schema;
use super::open::open_db;
use super::{DbError, DbResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// File name of the catalog store when no explicit path is configured.
pub const DATABASE_NAME: &str = "articles.db";

/// Default time a connection waits on a locked store before failing.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Store location and connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path of the SQLite file. Relative paths resolve against the process cwd.
    pub path: PathBuf,
    /// Busy timeout applied to every connection.
    pub busy_timeout: Duration,
}

impl StoreConfig {
    /// Config for a store at `path` with default connection settings.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DATABASE_NAME),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }
}

/// Explicit handle to the file-backed catalog store.
///
/// Holds configuration only. Connections are acquired per unit of work via
/// [`Store::with_connection`].
#[derive(Debug, Clone, Default)]
pub struct Store {
    config: StoreConfig,
}

impl Store {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Handle for a store at `path` with default connection settings.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self::new(StoreConfig::at(path))
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Ensures the `authors`, `magazines` and `articles` tables exist.
    ///
    /// The create-if-absent DDL runs on every call, so a table missing from
    /// an earlier-initialized file is recreated. Safe to call repeatedly.
    /// Failure to reach or write the store is returned as-is and never
    /// retried.
    ///
    /// # Side effects
    /// - Creates the store file when missing.
    /// - Emits `store_init` logging events.
    pub fn initialize(&self) -> DbResult<()> {
        let started_at = Instant::now();
        info!("event=store_init module=db status=start");

        let result = self.create_tables();
        match &result {
            Ok(()) => info!(
                "event=store_init module=db status=ok duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=store_init module=db status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }

    /// Runs `work` on a freshly opened connection and releases it afterwards.
    ///
    /// On success the connection is closed explicitly and a close failure is
    /// reported. On failure the connection is dropped and `work`'s error wins.
    pub fn with_connection<T, E, F>(&self, work: F) -> Result<T, E>
    where
        F: FnOnce(&Connection) -> Result<T, E>,
        E: From<DbError>,
    {
        let conn = open_db(&self.config).map_err(E::from)?;
        let value = work(&conn)?;
        release(conn).map_err(E::from)?;
        Ok(value)
    }

    // The DDL runs in a transaction, which needs the connection by `&mut`.
    fn create_tables(&self) -> DbResult<()> {
        let mut conn = open_db(&self.config)?;
        apply_schema(&mut conn)?;
        release(conn)
    }
}

fn release(conn: Connection) -> DbResult<()> {
    conn.close().map_err(|(_, err)| DbError::from(err))
}

#[cfg(test)]
mod tests {
    use super::{Store, StoreConfig, DATABASE_NAME, DEFAULT_BUSY_TIMEOUT};
    use crate::db::DbError;
    use rusqlite::Connection;
    use std::path::Path;
    use std::time::Duration;

    #[test]
    fn default_config_points_at_fixed_file_name() {
        let config = StoreConfig::default();
        assert_eq!(config.path, Path::new(DATABASE_NAME));
        assert_eq!(config.busy_timeout, DEFAULT_BUSY_TIMEOUT);
    }

    #[test]
    fn with_connection_enables_foreign_keys() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let store = Store::at(dir.path().join("fk.db"));

        let enabled: i64 = store
            .with_connection(|conn| {
                conn.query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
                    .map_err(DbError::from)
            })
            .expect("pragma should be readable");
        assert_eq!(enabled, 1);
    }

    #[test]
    fn with_connection_propagates_work_error() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let store = Store::at(dir.path().join("err.db"));

        let err = store
            .with_connection(|conn| {
                conn.execute_batch("SELECT * FROM missing_table;")
                    .map_err(DbError::from)
            })
            .expect_err("query on missing table should fail");
        assert!(matches!(err, DbError::Sqlite(_)));
    }

    #[test]
    fn connection_is_released_after_failed_work() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let store = Store::new(StoreConfig {
            path: dir.path().join("release.db"),
            busy_timeout: Duration::ZERO,
        });
        store.initialize().expect("store should initialize");

        let err = store
            .with_connection(|conn| {
                conn.execute_batch("BEGIN IMMEDIATE; INSERT INTO authors (name) VALUES ('');")
                    .map_err(DbError::from)
            })
            .expect_err("empty author name should be rejected");
        assert!(matches!(err, DbError::Sqlite(_)));

        // A leaked handle would still hold the write lock and fail fast here.
        let conn = Connection::open(store.path()).expect("store should reopen");
        conn.busy_timeout(Duration::ZERO)
            .expect("busy timeout should be settable");
        conn.execute("INSERT INTO authors (name) VALUES ('After');", [])
            .expect("write after failed work should succeed");
    }

    #[test]
    fn initialize_fails_when_parent_directory_is_missing() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let store = Store::at(dir.path().join("no_such_dir").join("catalog.db"));

        let err = store.initialize().expect_err("unreachable store should fail");
        assert!(matches!(err, DbError::Sqlite(_)));
    }
}
