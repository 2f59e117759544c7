//! Presentation Layer

pub mod dto;
pub mod handlers;
pub mod json;
pub mod router;

pub use handlers::{CatalogAppState, CatalogStore};
pub use router::{admin_stores_router, catalog_router};
