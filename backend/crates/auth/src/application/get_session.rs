//! Get Session Use Case
//!
//! Resolves the `auth_token` cookie into the current account snapshot.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::session_token::SessionTokens;
use crate::domain::entity::account_summary::{AccountSummary, RECENT_ORDER_LIMIT};
use crate::domain::entity::user::User;
use crate::domain::repository::{AccountSummaryRepository, AddressRepository, UserRepository};
use crate::error::{AuthError, AuthResult};

/// Current account with its aggregates.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub user: User,
    pub summary: AccountSummary,
    /// The token's `exp`
    pub expires: DateTime<Utc>,
}

/// Outcome of a session lookup.
#[derive(Debug)]
pub enum SessionLookup {
    /// No cookie
    Anonymous,
    /// Cookie present but unusable (bad signature, expired, user gone).
    /// The caller should clear it.
    Invalid,
    Active(Box<SessionSnapshot>),
}

/// Get session use case
pub struct GetSessionUseCase<U, A, S>
where
    U: UserRepository,
    A: AddressRepository,
    S: AccountSummaryRepository,
{
    user_repo: Arc<U>,
    address_repo: Arc<A>,
    summary_repo: Arc<S>,
    tokens: Arc<SessionTokens>,
}

impl<U, A, S> GetSessionUseCase<U, A, S>
where
    U: UserRepository,
    A: AddressRepository,
    S: AccountSummaryRepository,
{
    pub fn new(
        user_repo: Arc<U>,
        address_repo: Arc<A>,
        summary_repo: Arc<S>,
        tokens: Arc<SessionTokens>,
    ) -> Self {
        Self {
            user_repo,
            address_repo,
            summary_repo,
            tokens,
        }
    }

    /// Only persistence failures are errors.
    pub async fn execute(&self, token: Option<&str>) -> AuthResult<SessionLookup> {
        let Some(token) = token else {
            return Ok(SessionLookup::Anonymous);
        };

        let claims = match self.tokens.verify(token) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::debug!(error = %e, "Session token rejected");
                return Ok(SessionLookup::Invalid);
            }
        };

        let Some(user) = self.user_repo.find_user_by_id(&claims.user_id).await? else {
            tracing::debug!(user_id = %claims.user_id, "Session for missing user");
            return Ok(SessionLookup::Invalid);
        };

        let expires = claims
            .expires_at()
            .ok_or_else(|| AuthError::Internal("Token expiry out of range".to_string()))?;

        let summary = AccountSummary {
            address_count: self.address_repo.count_addresses(&user.user_id).await?,
            favorite_count: self.summary_repo.count_favorites(&user.user_id).await?,
            recent_orders: self
                .summary_repo
                .recent_orders(&user.user_id, RECENT_ORDER_LIMIT)
                .await?,
        };

        Ok(SessionLookup::Active(Box::new(SessionSnapshot {
            user,
            summary,
            expires,
        })))
    }
}
