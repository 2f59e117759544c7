//! Request bodies that are not valid JSON for the route.

use axum::extract::FromRequest;

use crate::error::CatalogError;

/// `axum::Json` rejecting with a [`CatalogError`], so a broken body gets
/// the usual `{ "error": ... }` 400.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(CatalogError))]
pub struct CatalogJson<T>(pub T);
