//! Domain Layer
//!
//! Catalog entities and repository traits.

pub mod entity;
pub mod repository;

pub use entity::{
    attribute::{Attribute, AttributeId, AttributeKind},
    billboard::{Billboard, BillboardId},
    category::{Category, CategoryId},
    product::{Product, ProductFields, ProductFilter, ProductId, ProductImage, ProductVariant},
    store::Store,
};
pub use repository::{
    AttributeRepository, BillboardRepository, CategoryRepository, ProductRepository,
    StoreRepository,
};
