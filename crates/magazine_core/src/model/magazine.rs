//! Magazine record.

use serde::{Deserialize, Serialize};

/// Store-assigned magazine identifier.
pub type MagazineId = i64;

/// A named, categorized magazine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Magazine {
    pub id: MagazineId,
    /// Unique, 2 to 16 characters.
    pub name: String,
    /// Non-empty.
    pub category: String,
}
