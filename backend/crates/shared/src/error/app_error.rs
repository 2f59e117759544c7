//! Rendered error - what the storefront actually receives.

use std::borrow::Cow;
use std::fmt;

use serde_json::{Map, Value};

use super::kind::ErrorKind;

/// Error as sent over HTTP.
///
/// The body is always `{ "error": <message> }`. Extra members, such as
/// `needsVerification` on an unconfirmed sign-in, are added with
/// [`AppError::with_field`].
///
/// ```rust
/// use kernel::error::app_error::AppError;
///
/// let err = AppError::forbidden("Please verify your email before signing in")
///     .with_field("needsVerification", true);
/// assert_eq!(err.status_code(), 403);
/// assert_eq!(err.body()["needsVerification"], true);
/// ```
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    fields: Map<String, Value>,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            fields: Map::new(),
        }
    }

    pub fn bad_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    pub fn unauthorized(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn conflict(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    /// Add a member next to `error` in the body. `error` itself cannot be
    /// replaced this way.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key != "error" {
            self.fields.insert(key, value.into());
        }
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// JSON body sent to the client.
    pub fn body(&self) -> Value {
        let mut body = Map::with_capacity(self.fields.len() + 1);
        body.insert("error".to_string(), Value::from(self.message.as_ref()));
        body.extend(self.fields.iter().map(|(k, v)| (k.clone(), v.clone())));
        Value::Object(body)
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("fields", &self.fields)
            .finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_carries_only_the_message_by_default() {
        let err = AppError::unauthorized("Invalid email or password");
        assert_eq!(
            err.body(),
            serde_json::json!({ "error": "Invalid email or password" })
        );
    }

    #[test]
    fn fields_are_merged_into_body() {
        let body = AppError::forbidden("Please verify your email before signing in")
            .with_field("needsVerification", true)
            .body();
        assert_eq!(body["error"], "Please verify your email before signing in");
        assert_eq!(body["needsVerification"], true);
    }

    #[test]
    fn error_member_cannot_be_overwritten() {
        let err = AppError::bad_request("Name is required").with_field("error", "overwritten");
        assert_eq!(err.body()["error"], "Name is required");
    }

    #[test]
    fn constructors_pick_their_status() {
        assert_eq!(AppError::bad_request("x").status_code(), 400);
        assert_eq!(AppError::not_found("x").status_code(), 404);
        assert_eq!(AppError::conflict("x").status_code(), 409);
        assert_eq!(AppError::internal("x").status_code(), 500);
    }

    #[test]
    fn display_prefixes_the_kind() {
        let err = AppError::not_found("Product not found");
        assert_eq!(err.to_string(), "[Not Found] Product not found");
    }

    #[cfg(feature = "axum")]
    #[test]
    fn into_response_uses_kind_status() {
        use axum::response::IntoResponse;
        let response = AppError::conflict("Email already in use").into_response();
        assert_eq!(response.status().as_u16(), 409);
    }
}
