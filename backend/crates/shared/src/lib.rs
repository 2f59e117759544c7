//! Shared Kernel
//!
//! Vocabulary the account and catalog crates both speak: typed ids (a user
//! owns stores, a store owns every catalog record) and the error shape the
//! storefront renders.

pub mod error {
    pub mod app_error;
    #[cfg(feature = "sqlx")]
    pub mod database;
    pub mod kind;
}
pub mod id;
pub mod text;
