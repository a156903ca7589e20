//! SQLite storage bootstrap and schema entry points.
//!
//! # Responsibility
//! - Own the storage handle (`Store`) and its configuration.
//! - Open and configure short-lived SQLite connections.
//! - Create the catalog tables when they are missing.
//!
//! # Invariants
//! - Every connection has `foreign_keys=ON`; referential integrity is a
//!   store-side contract, not an entity-layer check.
//! - A connection handed to a unit of work is released on every exit path.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod schema;
mod open;
mod store;

pub use open::{open_db, open_db_in_memory};
pub use store::{Store, StoreConfig, DATABASE_NAME, DEFAULT_BUSY_TIMEOUT};

pub type DbResult<T> = Result<T, DbError>;

/// Store failure: unreachable, unwritable, or rejecting a statement.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
