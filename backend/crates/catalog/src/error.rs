//! Catalog Error Types
//!
//! Every variant renders through `kernel::error::app_error::AppError`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{
    app_error::AppError,
    database::{Constraint, violated_constraint},
    kind::ErrorKind,
};
use thiserror::Error;

/// Catalog result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;

const GENERIC_FAILURE: &str = "Internal error";

/// Catalog error variants
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Missing or malformed input, message shown to the user as is
    #[error("{0}")]
    Validation(String),

    /// The store belongs to someone else
    #[error("Unauthorized")]
    Forbidden,

    #[error("{0} not found")]
    NotFound(&'static str),

    /// Still referenced by other records, or a duplicate
    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for CatalogError {
    fn from(err: sqlx::Error) -> Self {
        match violated_constraint(&err) {
            Some(Constraint::ForeignKey) => {
                CatalogError::Conflict("Resource is still in use".to_string())
            }
            Some(Constraint::Unique) => {
                CatalogError::Conflict("Resource already exists".to_string())
            }
            None => CatalogError::Database(err),
        }
    }
}

impl From<JsonRejection> for CatalogError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(detail = %rejection.body_text(), "Rejected request body");
        CatalogError::validation("Invalid request body")
    }
}

impl CatalogError {
    pub fn validation(message: impl Into<String>) -> Self {
        CatalogError::Validation(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Validation(_) => ErrorKind::BadRequest,
            CatalogError::Forbidden => ErrorKind::Forbidden,
            CatalogError::NotFound(_) => ErrorKind::NotFound,
            CatalogError::Conflict(_) => ErrorKind::Conflict,
            CatalogError::Database(_) | CatalogError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn to_app_error(&self) -> AppError {
        if self.kind().is_server_error() {
            AppError::internal(GENERIC_FAILURE)
        } else {
            AppError::new(self.kind(), self.to_string())
        }
    }

    fn log(&self) {
        match self {
            CatalogError::Database(e) => {
                tracing::error!(error = %e, "Catalog database error");
            }
            CatalogError::Internal(msg) => {
                tracing::error!(message = %msg, "Catalog internal error");
            }
            CatalogError::Forbidden => {
                tracing::warn!("Catalog write on a foreign store");
            }
            _ => {
                tracing::debug!(error = %self, "Catalog error");
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
