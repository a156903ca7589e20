//! Repository layer abstractions and SQLite implementations.
//!
//! # Responsibility
//! - Define per-entity data access contracts.
//! - Isolate SQL details from service orchestration.
//! - Translate store rejections into typed constraint errors.
//!
//! # Invariants
//! - Repositories only run against connections where their table exists.
//! - Lookups report a missing row as `Ok(None)`, never as an error.
//! - Input rules (lengths, uniqueness, references) are enforced by the store;
//!   repositories never pre-validate.

use crate::db::schema::table_exists;
use crate::db::DbError;
use rusqlite::{ffi, Connection, ErrorCode};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod article_repo;
pub mod author_repo;
pub mod magazine_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Which declared rule the store rejected an insert for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    Unique,
    Check,
    NotNull,
    ForeignKey,
    PrimaryKey,
    Other,
}

impl ConstraintKind {
    fn from_extended_code(code: i32) -> Self {
        match code {
            ffi::SQLITE_CONSTRAINT_UNIQUE => Self::Unique,
            ffi::SQLITE_CONSTRAINT_CHECK => Self::Check,
            ffi::SQLITE_CONSTRAINT_NOTNULL => Self::NotNull,
            ffi::SQLITE_CONSTRAINT_FOREIGNKEY => Self::ForeignKey,
            ffi::SQLITE_CONSTRAINT_PRIMARYKEY => Self::PrimaryKey,
            _ => Self::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unique => "unique",
            Self::Check => "check",
            Self::NotNull => "not_null",
            Self::ForeignKey => "foreign_key",
            Self::PrimaryKey => "primary_key",
            Self::Other => "other",
        }
    }
}

/// Repository error for catalog persistence and lookup operations.
#[derive(Debug)]
pub enum RepoError {
    /// Store transport/availability failure.
    Db(DbError),
    /// The store rejected a write because it violates a declared rule.
    Constraint {
        kind: ConstraintKind,
        message: String,
    },
    /// The entity's table does not exist; the store was never initialized
    /// or the table was dropped since.
    MissingRequiredTable(&'static str),
}

impl RepoError {
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::Constraint { .. })
    }

    /// Returns the constraint kind when this is a constraint violation.
    pub fn constraint_kind(&self) -> Option<ConstraintKind> {
        match self {
            Self::Constraint { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Stable code used in log events.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Db(_) => "db_error",
            Self::Constraint { .. } => "constraint_violation",
            Self::MissingRequiredTable(_) => "missing_required_table",
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Constraint { kind, message } => {
                write!(f, "{} constraint violation: {message}", kind.as_str())
            }
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing; initialize the store first")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Constraint { .. } => None,
            Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        match value {
            DbError::Sqlite(err) => Self::from(err),
        }
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::SqliteFailure(err, message)
                if err.code == ErrorCode::ConstraintViolation =>
            {
                Self::Constraint {
                    kind: ConstraintKind::from_extended_code(err.extended_code),
                    message: message.unwrap_or_else(|| err.to_string()),
                }
            }
            other => Self::Db(DbError::Sqlite(other)),
        }
    }
}

/// Verifies `table` exists on the connection.
pub(crate) fn ensure_connection_ready(conn: &Connection, table: &'static str) -> RepoResult<()> {
    if !table_exists(conn, table)? {
        return Err(RepoError::MissingRequiredTable(table));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{ConstraintKind, RepoError};
    use crate::db::DbError;
    use rusqlite::Connection;

    fn failing_insert(setup: &str, insert: &str) -> RepoError {
        let conn = Connection::open_in_memory().expect("in-memory db should open");
        conn.execute_batch(setup).expect("setup should succeed");
        let err = conn
            .execute_batch(insert)
            .expect_err("insert should be rejected");
        RepoError::from(err)
    }

    #[test]
    fn classifies_unique_violation() {
        let err = failing_insert(
            "CREATE TABLE t (name TEXT UNIQUE); INSERT INTO t VALUES ('a');",
            "INSERT INTO t VALUES ('a');",
        );
        assert_eq!(err.constraint_kind(), Some(ConstraintKind::Unique));
        assert_eq!(err.error_code(), "constraint_violation");
    }

    #[test]
    fn classifies_check_violation() {
        let err = failing_insert(
            "CREATE TABLE t (name TEXT CHECK (length(name) > 0));",
            "INSERT INTO t VALUES ('');",
        );
        assert_eq!(err.constraint_kind(), Some(ConstraintKind::Check));
        assert!(err.to_string().starts_with("check constraint violation"));
    }

    #[test]
    fn classifies_not_null_violation() {
        let err = failing_insert(
            "CREATE TABLE t (name TEXT NOT NULL);",
            "INSERT INTO t VALUES (NULL);",
        );
        assert_eq!(err.constraint_kind(), Some(ConstraintKind::NotNull));
    }

    #[test]
    fn non_constraint_errors_stay_db_errors() {
        let conn = Connection::open_in_memory().expect("in-memory db should open");
        let err = RepoError::from(
            conn.execute_batch("SELECT * FROM nowhere;")
                .expect_err("missing table should fail"),
        );
        assert!(matches!(err, RepoError::Db(DbError::Sqlite(_))));
        assert!(!err.is_constraint_violation());
    }
}
