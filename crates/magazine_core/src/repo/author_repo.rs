//! Author repository contract and SQLite implementation.

use crate::model::author::{Author, AuthorId};
use crate::repo::{ensure_connection_ready, RepoResult};
use rusqlite::{params, Connection, Row};

/// Repository interface for author persistence.
pub trait AuthorRepository {
    /// Inserts one author and returns it with the store-assigned id.
    fn create_author(&self, name: &str) -> RepoResult<Author>;
    /// Gets one author by id, `None` when absent.
    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>>;
}

/// SQLite-backed author repository.
pub struct SqliteAuthorRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAuthorRepository<'conn> {
    /// Constructs a repository from an initialized connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "authors")?;
        Ok(Self { conn })
    }
}

impl AuthorRepository for SqliteAuthorRepository<'_> {
    fn create_author(&self, name: &str) -> RepoResult<Author> {
        self.conn
            .execute("INSERT INTO authors (name) VALUES (?1);", params![name])?;

        Ok(Author {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
        })
    }

    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM authors WHERE id = ?1;")?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_author_row(row)?));
        }

        Ok(None)
    }
}

fn parse_author_row(row: &Row<'_>) -> RepoResult<Author> {
    Ok(Author {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}
