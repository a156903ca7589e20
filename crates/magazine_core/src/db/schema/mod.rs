//! Catalog schema executor.
//!
//! # Responsibility
//! - Ensure the `authors`, `magazines` and `articles` tables exist.
//!
//! # Invariants
//! - The DDL runs on every call; presence of the tables is never inferred
//!   from other store metadata.
//! - DDL is create-if-absent, so existing tables and rows are left untouched.
//! - All three tables are created in one transaction.

use crate::db::DbResult;
use rusqlite::Connection;

const TABLES_SQL: &str = include_str!("tables.sql");

/// Tables an initialized store contains.
pub const CATALOG_TABLES: [&str; 3] = ["authors", "magazines", "articles"];

/// Creates any missing catalog table on the provided connection.
pub fn apply_schema(conn: &mut Connection) -> DbResult<()> {
    let tx = conn.transaction()?;
    tx.execute_batch(TABLES_SQL)?;
    tx.commit()?;
    Ok(())
}

/// Returns whether `table` exists on the connection.
pub fn table_exists(conn: &Connection, table: &str) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

#[cfg(test)]
mod tests {
    use super::{apply_schema, table_exists, CATALOG_TABLES};
    use rusqlite::Connection;

    #[test]
    fn applying_twice_creates_each_table_once() {
        let mut conn = Connection::open_in_memory().expect("in-memory db should open");
        apply_schema(&mut conn).expect("first apply should succeed");
        apply_schema(&mut conn).expect("second apply should succeed");

        for table in CATALOG_TABLES {
            assert!(table_exists(&conn, table).expect("lookup should succeed"));
        }
    }

    #[test]
    fn existing_tables_and_rows_are_kept() {
        let mut conn = Connection::open_in_memory().expect("in-memory db should open");
        conn.execute_batch(
            "CREATE TABLE authors (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE CHECK (length(name) > 0)
            );
            INSERT INTO authors (name) VALUES ('Existing');",
        )
        .expect("pre-existing table should be created");

        apply_schema(&mut conn).expect("apply should keep existing tables");

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM authors;", [], |row| row.get(0))
            .expect("authors should be countable");
        assert_eq!(count, 1);
        assert!(table_exists(&conn, "articles").expect("lookup should succeed"));
    }

    #[test]
    fn foreign_user_version_is_ignored() {
        let mut conn = Connection::open_in_memory().expect("in-memory db should open");
        conn.execute_batch("PRAGMA user_version = 999;")
            .expect("user_version should be writable");

        apply_schema(&mut conn).expect("apply should not depend on user_version");
        assert!(table_exists(&conn, "magazines").expect("lookup should succeed"));
    }
}
