//! Catalog use-case services.
//!
//! # Responsibility
//! - Expose create/fetch entry points for each entity.
//! - Scope one store connection to each operation.

pub mod catalog_service;
