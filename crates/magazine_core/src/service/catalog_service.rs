//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide the create/fetch entry points for authors, magazines and
//!   articles.
//! - Acquire a dedicated connection per call and release it before returning.
//!
//! # Invariants
//! - Each operation runs one data statement (one INSERT or one SELECT by
//!   id) and never retries.
//! - Store errors, constraint violations included, are returned unchanged.
//! - Log events carry ids and codes only, never names or titles.

use crate::db::Store;
use crate::model::article::{Article, ArticleId};
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::repo::article_repo::{ArticleRepository, SqliteArticleRepository};
use crate::repo::author_repo::{AuthorRepository, SqliteAuthorRepository};
use crate::repo::magazine_repo::{MagazineRepository, SqliteMagazineRepository};
use crate::repo::RepoResult;
use log::{debug, warn};
use std::time::Instant;

/// Use-case service over a catalog store.
#[derive(Debug, Clone)]
pub struct CatalogService {
    store: Store,
}

impl CatalogService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Persists a new author and returns it with its assigned id.
    ///
    /// # Errors
    /// - `RepoError::Constraint` when `name` is empty or already taken.
    pub fn create_author(&self, name: &str) -> RepoResult<Author> {
        let started_at = Instant::now();
        let result = self.store.with_connection(|conn| {
            SqliteAuthorRepository::try_new(conn)?.create_author(name)
        });
        log_outcome("author_create", started_at, &result, |author| author.id);
        result
    }

    /// Gets one author by id; `Ok(None)` when no row matches.
    pub fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        let started_at = Instant::now();
        let result = self
            .store
            .with_connection(|conn| SqliteAuthorRepository::try_new(conn)?.get_author(id));
        log_outcome("author_get", started_at, &result, |_| id);
        result
    }

    /// Persists a new magazine and returns it with its assigned id.
    ///
    /// # Errors
    /// - `RepoError::Constraint` when `name` is outside 2..=16 characters or
    ///   taken, or when `category` is empty.
    pub fn create_magazine(&self, name: &str, category: &str) -> RepoResult<Magazine> {
        let started_at = Instant::now();
        let result = self.store.with_connection(|conn| {
            SqliteMagazineRepository::try_new(conn)?.create_magazine(name, category)
        });
        log_outcome("magazine_create", started_at, &result, |magazine| magazine.id);
        result
    }

    /// Gets one magazine by id; `Ok(None)` when no row matches.
    pub fn get_magazine(&self, id: MagazineId) -> RepoResult<Option<Magazine>> {
        let started_at = Instant::now();
        let result = self
            .store
            .with_connection(|conn| SqliteMagazineRepository::try_new(conn)?.get_magazine(id));
        log_outcome("magazine_get", started_at, &result, |_| id);
        result
    }

    /// Persists a new article linked to already-persisted `author` and
    /// `magazine`.
    ///
    /// Only the ids are taken from the linked records. Whether they exist is
    /// decided by the store's foreign keys, not checked here.
    ///
    /// # Errors
    /// - `RepoError::Constraint` with `Check` when `title` is outside 5..=50
    ///   characters, or `ForeignKey` when either id is unknown to the store.
    pub fn create_article(
        &self,
        title: &str,
        author: &Author,
        magazine: &Magazine,
    ) -> RepoResult<Article> {
        let started_at = Instant::now();
        let result = self.store.with_connection(|conn| {
            SqliteArticleRepository::try_new(conn)?.create_article(title, author.id, magazine.id)
        });
        log_outcome("article_create", started_at, &result, |article| article.id);
        result
    }

    /// Gets one article by id; `Ok(None)` when no row matches.
    pub fn get_article(&self, id: ArticleId) -> RepoResult<Option<Article>> {
        let started_at = Instant::now();
        let result = self
            .store
            .with_connection(|conn| SqliteArticleRepository::try_new(conn)?.get_article(id));
        log_outcome("article_get", started_at, &result, |_| id);
        result
    }
}

fn log_outcome<T>(
    event: &str,
    started_at: Instant,
    result: &RepoResult<T>,
    id_of: impl FnOnce(&T) -> i64,
) {
    let duration_ms = started_at.elapsed().as_millis();
    match result {
        Ok(value) => debug!(
            "event={event} module=service status=ok duration_ms={duration_ms} id={}",
            id_of(value)
        ),
        Err(err) => warn!(
            "event={event} module=service status=error duration_ms={duration_ms} error_code={} constraint={}",
            err.error_code(),
            err.constraint_kind().map_or("none", |kind| kind.as_str())
        ),
    }
}
