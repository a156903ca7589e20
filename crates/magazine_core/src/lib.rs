//! Persistence layer for an author/magazine/article catalog.
//! Schema, constraints and identifiers are owned by the SQLite store; this
//! crate opens it, creates rows and looks them up by id.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{Store, StoreConfig, DATABASE_NAME};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{Article, ArticleId};
pub use model::author::{Author, AuthorId};
pub use model::magazine::{Magazine, MagazineId};
pub use repo::article_repo::{ArticleRepository, SqliteArticleRepository};
pub use repo::author_repo::{AuthorRepository, SqliteAuthorRepository};
pub use repo::magazine_repo::{MagazineRepository, SqliteMagazineRepository};
pub use repo::{ConstraintKind, RepoError, RepoResult};
pub use service::catalog_service::CatalogService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
