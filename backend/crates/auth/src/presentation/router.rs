//! Auth Router

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::presentation::handlers::{self, AuthAppState, AuthStore};

/// Routes mounted under `/api/auth`, for any repository implementation
pub fn auth_router<R>(state: AuthAppState<R>) -> Router
where
    R: AuthStore,
{
    Router::new()
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/signin", post(handlers::sign_in::<R>))
        .route(
            "/signout",
            post(handlers::sign_out::<R>).get(handlers::sign_out::<R>),
        )
        .route("/session", get(handlers::session::<R>))
        .route("/verify-email", post(handlers::verify_email::<R>))
        .route(
            "/resend-verification",
            post(handlers::resend_verification::<R>),
        )
        .route(
            "/reset-password",
            post(handlers::request_password_reset::<R>),
        )
        .route(
            "/reset-password/{token}",
            post(handlers::reset_password::<R>),
        )
        .route(
            "/profile",
            get(handlers::get_profile::<R>).put(handlers::update_profile::<R>),
        )
        .route(
            "/addresses",
            get(handlers::list_addresses::<R>).post(handlers::create_address::<R>),
        )
        .route(
            "/addresses/{id}",
            put(handlers::update_address::<R>).delete(handlers::delete_address::<R>),
        )
        .with_state(state)
}

/// Routes mounted under `/api/admin/users`
pub fn admin_users_router<R>(state: AuthAppState<R>) -> Router
where
    R: AuthStore,
{
    Router::new()
        .route("/{id}/verify", post(handlers::mark_verified::<R>))
        .with_state(state)
}
