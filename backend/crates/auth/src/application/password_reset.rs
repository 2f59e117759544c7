//! Password Reset Use Cases

use std::sync::Arc;

use chrono::Utc;
use platform::crypto::random_hex_token;

use crate::application::config::AuthConfig;
use crate::application::required;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};
use crate::infra::mailer::Mailer;

/// Stores a reset token and mails the reset link.
pub struct RequestPasswordResetUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    mailer: Arc<Mailer>,
    config: Arc<AuthConfig>,
}

impl<U> RequestPasswordResetUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, mailer: Arc<Mailer>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            mailer,
            config,
        }
    }

    /// Succeeds whether or not the address belongs to an account.
    pub async fn execute(&self, email: &str) -> AuthResult<()> {
        let Ok(email) = Email::new(email) else {
            return Ok(());
        };
        let Some(user) = self.user_repo.find_user_by_email(&email).await? else {
            return Ok(());
        };

        let ttl = chrono::Duration::from_std(self.config.reset_token_ttl)
            .map_err(|e| AuthError::Internal(e.to_string()))?;
        let token = random_hex_token();
        self.user_repo
            .store_reset_token(&user.user_id, &token, Utc::now() + ttl)
            .await?;

        let link = self.config.reset_link(&token);
        if let Err(e) = self.mailer.send_password_reset(&user.email, &link).await {
            tracing::warn!(user_id = %user.user_id, error = %e, "Mail not sent");
        }

        tracing::info!(user_id = %user.user_id, "Password reset requested");
        Ok(())
    }
}

/// Reset password input
pub struct ResetPasswordInput {
    pub token: String,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

/// Consumes a reset token and sets the new password.
pub struct ResetPasswordUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> ResetPasswordUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: ResetPasswordInput) -> AuthResult<()> {
        let (Some(password), Some(confirm_password)) = (
            input.password.filter(|p| !p.is_empty()),
            input.confirm_password.filter(|p| !p.is_empty()),
        ) else {
            return Err(AuthError::Validation("Missing required fields".to_string()));
        };
        if password != confirm_password {
            return Err(AuthError::Validation("Passwords do not match".to_string()));
        }
        let raw_password = RawPassword::new(password)?;

        let Some(token) = required(Some(input.token)) else {
            return Err(AuthError::InvalidResetToken);
        };
        // Cheap rejection before hashing; the consume below is what counts
        self.user_repo
            .find_user_by_reset_token(&token)
            .await?
            .filter(|u| u.reset_token_matches(&token, Utc::now()))
            .ok_or(AuthError::InvalidResetToken)?;

        let password_hash = UserPassword::from_raw(raw_password, self.config.bcrypt_cost).await?;
        let user_id = self
            .user_repo
            .consume_reset_token(&token, &password_hash, Utc::now())
            .await?
            .ok_or(AuthError::InvalidResetToken)?;

        tracing::info!(user_id = %user_id, "Password reset completed");
        Ok(())
    }
}
