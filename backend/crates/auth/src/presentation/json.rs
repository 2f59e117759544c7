//! JSON request bodies that fail to parse are answered like any other
//! validation error: 400 with `{ "error": ... }`.

use axum::extract::FromRequest;

use crate::error::AuthError;

/// `axum::Json` with the rejection turned into [`AuthError`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AuthError))]
pub struct AuthJson<T>(pub T);
