//! Auth Error Types
//!
//! Account errors. Messages of client errors are shown to the user as is;
//! server errors are logged and replaced by a generic message.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::token::TokenError;
use thiserror::Error;

use crate::infra::mailer::MailError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Message shared by every credential failure on sign-in.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

const GENERIC_FAILURE: &str = "An unexpected error occurred";

/// Client message for a body that is not the JSON the route expects.
pub const INVALID_BODY: &str = "Invalid request body";

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Missing or malformed input
    #[error("{0}")]
    Validation(String),

    /// Email already belongs to another account
    #[error("Email already in use")]
    EmailTaken,

    /// Unknown email, no local password, or wrong password
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Correct credentials, email not confirmed yet
    #[error("Please verify your email before signing in")]
    Unverified,

    /// No valid session
    #[error("Unauthenticated")]
    Unauthenticated,

    /// Authenticated, but not allowed
    #[error("Forbidden")]
    Forbidden,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Invalid or expired verification token")]
    InvalidVerificationToken,

    #[error("Invalid or expired reset token")]
    InvalidResetToken,

    /// Session token failed verification
    #[error("Invalid session token: {0}")]
    Token(#[from] TokenError),

    /// Outbound mail failed
    #[error("Mail delivery failed: {0}")]
    Mail(#[from] MailError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Server-side failure with an operation-specific client message
    #[error("{message}: {detail}")]
    Failed { message: &'static str, detail: String },
}

impl From<JsonRejection> for AuthError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(detail = %rejection.body_text(), "Rejected request body");
        AuthError::Validation(INVALID_BODY.to_string())
    }
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_)
            | AuthError::InvalidVerificationToken
            | AuthError::InvalidResetToken => ErrorKind::BadRequest,
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::InvalidCredentials | AuthError::Unauthenticated | AuthError::Token(_) => {
                ErrorKind::Unauthorized
            }
            AuthError::Unverified | AuthError::Forbidden => ErrorKind::Forbidden,
            AuthError::NotFound(_) => ErrorKind::NotFound,
            AuthError::Mail(_)
            | AuthError::Database(_)
            | AuthError::Internal(_)
            | AuthError::Failed { .. } => ErrorKind::InternalServerError,
        }
    }

    /// Replace the client-facing message of a server-side failure.
    ///
    /// Client errors pass through untouched.
    pub fn context(self, message: &'static str) -> Self {
        if self.kind().is_server_error() {
            match self {
                AuthError::Failed { detail, .. } => AuthError::Failed { message, detail },
                other => AuthError::Failed {
                    message,
                    detail: other.to_string(),
                },
            }
        } else {
            self
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Unverified => AppError::forbidden(self.to_string())
                .with_field("needsVerification", true),
            AuthError::Token(_) => AppError::unauthorized("Unauthenticated"),
            AuthError::Failed { message, .. } => AppError::internal(*message),
            _ if self.kind().is_server_error() => AppError::internal(GENERIC_FAILURE),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Mail(e) => {
                tracing::error!(error = %e, "Auth mail error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::Failed { message, detail } => {
                tracing::error!(message = %message, detail = %detail, "Auth operation failed");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::Unverified => {
                tracing::warn!("Login attempt on unverified account");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AuthError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AuthError::EmailTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            AuthError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AuthError::Unverified.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            AuthError::NotFound("Address").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AuthError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_unverified_carries_flag() {
        let body = AuthError::Unverified.to_app_error().body();
        assert_eq!(body["error"], "Please verify your email before signing in");
        assert_eq!(body["needsVerification"], true);
    }

    #[test]
    fn test_server_errors_do_not_leak_detail() {
        let body = AuthError::Internal("connection refused on 10.0.0.3".into())
            .to_app_error()
            .body();
        assert_eq!(body["error"], GENERIC_FAILURE);
    }

    #[test]
    fn test_context_only_rewrites_server_errors() {
        let err = AuthError::Internal("pool closed".into())
            .context("An error occurred while retrieving session");
        assert_eq!(
            err.to_app_error().body()["error"],
            "An error occurred while retrieving session"
        );

        let err = AuthError::EmailTaken.context("An error occurred during signup");
        assert!(matches!(err, AuthError::EmailTaken));
    }
}
