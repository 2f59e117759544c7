//! Domain Entities

pub mod attribute;
pub mod billboard;
pub mod category;
pub mod product;
pub mod store;
