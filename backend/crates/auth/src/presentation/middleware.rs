//! Route Authorization Middleware
//!
//! Classifies every request path and enforces the session policy before the
//! handlers run:
//!
//! | State                     | Result                                   |
//! |---------------------------|------------------------------------------|
//! | public                    | pass through (claims attached if valid)  |
//! | no cookie / bad token     | 307 to `/signin?returnUrl=<path>`        |
//! | non-admin on admin route  | 307 to `/`                               |
//! | allowed                   | pass through with claims attached        |
//!
//! Handlers read the claims back with the [`CurrentUser`] extractor.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{FromRequestParts, OptionalFromRequestParts, State};
use axum::http::{Request, header, request::Parts};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use platform::cookie::SessionCookie;

use crate::application::config::AuthConfig;
use crate::application::session_token::SessionTokens;
use crate::domain::value_object::route_policy::{RouteAccess, RoutePolicy};
use crate::domain::value_object::session_claims::SessionClaims;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthGuardState {
    pub policy: Arc<RoutePolicy>,
    pub tokens: Arc<SessionTokens>,
    pub cookie: SessionCookie,
}

impl AuthGuardState {
    pub fn new(policy: RoutePolicy, config: Arc<AuthConfig>) -> Self {
        Self {
            policy: Arc::new(policy),
            cookie: config.cookie(),
            tokens: Arc::new(SessionTokens::new(config)),
        }
    }

    /// Default storefront policy.
    pub fn storefront(config: Arc<AuthConfig>) -> Self {
        Self::new(RoutePolicy::storefront(), config)
    }
}

/// Guard for `axum::middleware::from_fn_with_state`.
pub async fn route_guard(
    State(guard): State<AuthGuardState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let path = req.uri().path().to_string();
    let access = guard.policy.classify(&path);

    let verified = guard
        .cookie
        .read(req.headers())
        .map(|token| guard.tokens.verify(&token));

    if access == RouteAccess::Public {
        if let Some(Ok(claims)) = verified {
            req.extensions_mut().insert(claims);
        }
        return next.run(req).await;
    }

    let claims = match verified {
        Some(Ok(claims)) => claims,
        Some(Err(e)) => {
            tracing::debug!(path = %path, error = %e, "Rejected session token");
            let mut response = redirect_to_sign_in(&path);
            if let Some(clear) = guard.cookie.clear() {
                response.headers_mut().append(header::SET_COOKIE, clear);
            }
            return response;
        }
        None => {
            tracing::debug!(path = %path, "No session cookie");
            return redirect_to_sign_in(&path);
        }
    };

    if access == RouteAccess::Admin && !claims.is_admin() {
        tracing::warn!(path = %path, user_id = %claims.user_id, "Non-admin on admin route");
        return Redirect::temporary("/").into_response();
    }

    req.extensions_mut().insert(claims);
    next.run(req).await
}

/// `/signin?returnUrl=<encoded path>`
pub fn sign_in_location(path: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(path.as_bytes()).collect();
    format!("/signin?returnUrl={encoded}")
}

fn redirect_to_sign_in(path: &str) -> Response {
    Redirect::temporary(&sign_in_location(path)).into_response()
}

/// Verified claims of the signed-in user.
///
/// Rejects with 401 `{"error":"Unauthenticated"}` when the guard attached no
/// claims.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub SessionClaims);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionClaims>()
            .cloned()
            .map(CurrentUser)
            .ok_or(AuthError::Unauthenticated)
    }
}

/// `Option<CurrentUser>`: claims if the guard attached any, never rejects.
impl<S> OptionalFromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(parts.extensions.get::<SessionClaims>().cloned().map(CurrentUser))
    }
}

/// Like [`CurrentUser`], but admins only (403 otherwise).
#[derive(Debug, Clone)]
pub struct AdminUser(pub SessionClaims);

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let CurrentUser(claims) =
            <CurrentUser as FromRequestParts<S>>::from_request_parts(parts, state).await?;
        if !claims.is_admin() {
            return Err(AuthError::Forbidden);
        }
        Ok(AdminUser(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_location_encodes_path() {
        assert_eq!(sign_in_location("/account"), "/signin?returnUrl=%2Faccount");
        assert_eq!(
            sign_in_location("/account/orders"),
            "/signin?returnUrl=%2Faccount%2Forders"
        );
    }
}
