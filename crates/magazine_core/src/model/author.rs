//! Author record.

use serde::{Deserialize, Serialize};

/// Store-assigned author identifier.
pub type AuthorId = i64;

/// A named author.
///
/// `name` is non-empty and unique across authors; both rules are enforced by
/// the store at insert time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
}
