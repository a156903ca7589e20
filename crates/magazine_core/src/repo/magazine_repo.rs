//! Magazine repository contract and SQLite implementation.

use crate::model::magazine::{Magazine, MagazineId};
use crate::repo::{ensure_connection_ready, RepoResult};
use rusqlite::{params, Connection, Row};

/// Repository interface for magazine persistence.
pub trait MagazineRepository {
    fn create_magazine(&self, name: &str, category: &str) -> RepoResult<Magazine>;
    fn get_magazine(&self, id: MagazineId) -> RepoResult<Option<Magazine>>;
}

/// SQLite-backed magazine repository.
pub struct SqliteMagazineRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMagazineRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "magazines")?;
        Ok(Self { conn })
    }
}

impl MagazineRepository for SqliteMagazineRepository<'_> {
    fn create_magazine(&self, name: &str, category: &str) -> RepoResult<Magazine> {
        self.conn.execute(
            "INSERT INTO magazines (name, category) VALUES (?1, ?2);",
            params![name, category],
        )?;

        Ok(Magazine {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
            category: category.to_string(),
        })
    }

    fn get_magazine(&self, id: MagazineId) -> RepoResult<Option<Magazine>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, category FROM magazines WHERE id = ?1;")?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_magazine_row(row)?));
        }

        Ok(None)
    }
}

fn parse_magazine_row(row: &Row<'_>) -> RepoResult<Magazine> {
    Ok(Magazine {
        id: row.get("id")?,
        name: row.get("name")?,
        category: row.get("category")?,
    })
}
