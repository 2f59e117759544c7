//! Catalog Backend Module
//!
//! Stores and their catalog: billboards, categories, sizes, colors and
//! products with images and variants.
//!
//! Same layering as `auth`:
//! - `domain/` - Entities, listing filter, repository traits
//! - `application/` - One service per resource, ownership checks
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Access
//! - Reads are public and need no session
//! - Writes need a session whose user owns the store
//! - Archived products are hidden from listings and from everyone but the
//!   owner

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

mod tests;

// Re-exports for convenience
pub use error::{CatalogError, CatalogResult};
pub use infra::{memory::MemoryCatalogRepository, postgres::PgCatalogRepository};
pub use presentation::{CatalogAppState, CatalogStore, admin_stores_router, catalog_router};
