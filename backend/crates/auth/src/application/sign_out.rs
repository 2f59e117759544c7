//! Sign Out Use Case
//!
//! Sessions are stateless, so signing out only means the caller drops the
//! cookie. The token itself stays valid until it expires.

use std::sync::Arc;

use crate::application::session_token::SessionTokens;

/// Sign out use case
pub struct SignOutUseCase {
    tokens: Arc<SessionTokens>,
}

impl SignOutUseCase {
    pub fn new(tokens: Arc<SessionTokens>) -> Self {
        Self { tokens }
    }

    /// Never fails. An invalid or missing token is just logged.
    pub fn execute(&self, token: Option<&str>) {
        match token.map(|t| self.tokens.verify(t)) {
            Some(Ok(claims)) => {
                tracing::info!(user_id = %claims.user_id, "User signed out");
            }
            Some(Err(e)) => {
                tracing::debug!(error = %e, "Sign out with invalid token");
            }
            None => {
                tracing::debug!("Sign out without session cookie");
            }
        }
    }
}
