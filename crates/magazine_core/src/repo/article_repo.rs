//! Article repository contract and SQLite implementation.
//!
//! # Invariants
//! - `author_id`/`magazine_id` are written as given; a dangling reference is
//!   rejected by the store as a foreign-key violation.

use crate::model::article::{Article, ArticleId};
use crate::model::author::AuthorId;
use crate::model::magazine::MagazineId;
use crate::repo::{ensure_connection_ready, RepoResult};
use rusqlite::{params, Connection, Row};

/// Repository interface for article persistence.
pub trait ArticleRepository {
    fn create_article(
        &self,
        title: &str,
        author_id: AuthorId,
        magazine_id: MagazineId,
    ) -> RepoResult<Article>;
    fn get_article(&self, id: ArticleId) -> RepoResult<Option<Article>>;
}

/// SQLite-backed article repository.
pub struct SqliteArticleRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteArticleRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "articles")?;
        Ok(Self { conn })
    }
}

impl ArticleRepository for SqliteArticleRepository<'_> {
    fn create_article(
        &self,
        title: &str,
        author_id: AuthorId,
        magazine_id: MagazineId,
    ) -> RepoResult<Article> {
        self.conn.execute(
            "INSERT INTO articles (title, author_id, magazine_id) VALUES (?1, ?2, ?3);",
            params![title, author_id, magazine_id],
        )?;

        Ok(Article {
            id: self.conn.last_insert_rowid(),
            title: title.to_string(),
            author_id,
            magazine_id,
        })
    }

    fn get_article(&self, id: ArticleId) -> RepoResult<Option<Article>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                id,
                title,
                author_id,
                magazine_id
             FROM articles
             WHERE id = ?1;",
        )?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_article_row(row)?));
        }

        Ok(None)
    }
}

fn parse_article_row(row: &Row<'_>) -> RepoResult<Article> {
    Ok(Article {
        id: row.get("id")?,
        title: row.get("title")?,
        author_id: row.get("author_id")?,
        magazine_id: row.get("magazine_id")?,
    })
}
