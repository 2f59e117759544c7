//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod json;
pub mod middleware;
pub mod router;

pub use handlers::{AuthAppState, AuthStore};
pub use json::AuthJson;
pub use middleware::{AdminUser, AuthGuardState, CurrentUser, route_guard};
pub use router::{admin_users_router, auth_router};
