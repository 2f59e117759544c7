//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations, mailer
//! - `presentation/` - HTTP handlers, DTOs, router, route guard
//!
//! ## Features
//! - Storefront sign up / sign in / sign out / current session
//! - Email verification and password reset by mailed single-use tokens
//! - Profile and address book for signed-in users
//! - Route authorization (public, protected, admin-only) with redirects
//!
//! ## Security Model
//! - Passwords hashed with bcrypt (work factor 10 by default)
//! - Sessions are stateless HS256 tokens in an `HttpOnly` `auth_token` cookie
//! - Signing out clears the cookie; a copied token stays valid until `exp`
//! - Credential failures share one message so accounts cannot be enumerated

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::value_object::{
    route_policy::{RouteAccess, RoutePolicy},
    session_claims::SessionClaims,
    user_role::UserRole,
};
pub use error::{AuthError, AuthResult};
pub use infra::{mailer::Mailer, memory::MemoryAuthRepository, postgres::PgAuthRepository};
pub use presentation::{
    AdminUser, AuthAppState, AuthGuardState, CurrentUser, admin_users_router, auth_router,
    route_guard,
};

pub use kernel::error::{app_error::AppError, kind::ErrorKind};
