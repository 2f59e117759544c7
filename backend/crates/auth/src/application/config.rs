//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::cookie::SessionCookie;
use platform::password::DEFAULT_COST;

pub use platform::cookie::SameSite;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// HS256 signing secret for session tokens
    pub token_secret: Vec<u8>,
    /// Session TTL without "Remember Me" (1 day)
    pub session_ttl_short: Duration,
    /// Session TTL with "Remember Me" (30 days)
    pub session_ttl_long: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// Lifetime of a password reset token (1 hour)
    pub reset_token_ttl: Duration,
    /// Storefront origin used to build links in mails
    pub public_base_url: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "auth_token".to_string(),
            token_secret: Vec::new(),
            session_ttl_short: Duration::from_secs(24 * 3600), // 1 day
            session_ttl_long: Duration::from_secs(30 * 24 * 3600), // 30 days
            cookie_secure: true,
            cookie_same_site: SameSite::Strict,
            bcrypt_cost: DEFAULT_COST,
            reset_token_ttl: Duration::from_secs(3600),
            public_base_url: "http://localhost:3000".to_string(),
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = vec![0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Session lifetime for the given "Remember Me" choice.
    pub fn session_ttl(&self, remember_me: bool) -> Duration {
        if remember_me {
            self.session_ttl_long
        } else {
            self.session_ttl_short
        }
    }

    pub fn cookie(&self) -> SessionCookie {
        SessionCookie::new(
            self.session_cookie_name.clone(),
            self.cookie_secure,
            self.cookie_same_site,
        )
    }

    /// `{base}/verify-email?token=...`
    pub fn verification_link(&self, token: &str) -> String {
        format!(
            "{}/verify-email?token={}",
            self.public_base_url.trim_end_matches('/'),
            token
        )
    }

    /// `{base}/reset-password/...`
    pub fn reset_link(&self, token: &str) -> String {
        format!(
            "{}/reset-password/{}",
            self.public_base_url.trim_end_matches('/'),
            token
        )
    }
}
