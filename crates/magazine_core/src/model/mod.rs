//! Catalog domain model.
//!
//! # Responsibility
//! - Define the records persisted for authors, magazines and articles.
//!
//! # Invariants
//! - Every record carries the identifier the store assigned on insert.
//! - Records are never mutated after creation.
//! - Cross-entity links are plain foreign-key integers.

pub mod article;
pub mod author;
pub mod magazine;
