//! Article record.
//!
//! # Invariants
//! - An article references an author and a magazine that were persisted
//!   before it. The store's foreign keys enforce this; callers are not
//!   expected to pre-check.

use super::author::AuthorId;
use super::magazine::MagazineId;
use serde::{Deserialize, Serialize};

/// Store-assigned article identifier.
pub type ArticleId = i64;

/// A titled article linked to exactly one author and one magazine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    /// 5 to 50 characters.
    pub title: String,
    pub author_id: AuthorId,
    pub magazine_id: MagazineId,
}
