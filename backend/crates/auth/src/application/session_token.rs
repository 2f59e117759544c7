//! Session Token Service
//!
//! Issues and verifies the signed `auth_token` value. Stateless: nothing is
//! persisted, so a token stays valid until `exp` even after sign-out.

use std::sync::Arc;

use chrono::Utc;
use platform::token::TokenCodec;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::value_object::session_claims::SessionClaims;
use crate::error::{AuthError, AuthResult};

/// A freshly signed session.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub claims: SessionClaims,
    pub max_age: std::time::Duration,
}

/// HS256 session tokens bound to the configured secret and TTLs.
#[derive(Debug, Clone)]
pub struct SessionTokens {
    codec: TokenCodec,
    config: Arc<AuthConfig>,
}

impl SessionTokens {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self {
            codec: TokenCodec::new(&config.token_secret),
            config,
        }
    }

    pub fn issue(&self, user: &User, remember_me: bool) -> AuthResult<IssuedSession> {
        let max_age = self.config.session_ttl(remember_me);
        let ttl = chrono::Duration::from_std(max_age)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let claims = SessionClaims::new(user.user_id, &user.email, user.role, Utc::now(), ttl);
        let token = self.codec.issue(&claims)?;

        Ok(IssuedSession {
            token,
            claims,
            max_age,
        })
    }

    /// Signature and `exp` are checked with zero leeway.
    pub fn verify(&self, token: &str) -> AuthResult<SessionClaims> {
        Ok(self.codec.verify(token)?)
    }

    /// Sign an arbitrary claim set (tests build expired tokens with this).
    pub fn sign(&self, claims: &SessionClaims) -> AuthResult<String> {
        Ok(self.codec.issue(claims)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{
        email::Email, user_id::UserId, user_password::UserPassword, user_role::UserRole,
    };
    use platform::token::TokenError;

    fn tokens() -> SessionTokens {
        SessionTokens::new(Arc::new(AuthConfig::with_random_secret()))
    }

    fn user() -> User {
        let hash = UserPassword::from_hash_string(
            "$2b$04$abcdefghijklmnopqrstuu0123456789012345678901234567890",
        )
        .unwrap();
        User::new_customer(
            Email::new("alice@example.com").unwrap(),
            "Alice".to_string(),
            None,
            hash,
            "t".to_string(),
        )
    }

    #[test]
    fn test_ttl_follows_remember_me() {
        let tokens = tokens();
        let user = user();

        let short = tokens.issue(&user, false).unwrap();
        assert_eq!(short.claims.exp - short.claims.iat, 86_400);
        assert_eq!(short.max_age.as_secs(), 86_400);

        let long = tokens.issue(&user, true).unwrap();
        assert_eq!(long.claims.exp - long.claims.iat, 2_592_000);
        assert_eq!(long.max_age.as_secs(), 2_592_000);
    }

    #[test]
    fn test_verify_roundtrip() {
        let tokens = tokens();
        let user = user();
        let issued = tokens.issue(&user, false).unwrap();
        let claims = tokens.verify(&issued.token).unwrap();
        assert_eq!(claims.user_id, user.user_id);
        assert_eq!(claims.role, UserRole::Customer);
    }

    #[test]
    fn test_rejects_expired_token() {
        let tokens = tokens();
        let now = Utc::now().timestamp();
        let claims = SessionClaims {
            user_id: UserId::new(),
            email: "alice@example.com".to_string(),
            role: UserRole::Customer,
            iat: now - 100,
            exp: now - 1,
        };
        let token = tokens.sign(&claims).unwrap();
        assert!(matches!(
            tokens.verify(&token),
            Err(AuthError::Token(TokenError::Expired))
        ));
    }

    #[test]
    fn test_rejects_foreign_secret() {
        let issued = tokens().issue(&user(), false).unwrap();
        assert!(tokens().verify(&issued.token).is_err());
    }
}
