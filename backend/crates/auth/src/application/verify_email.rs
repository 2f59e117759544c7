//! Email Verification Use Cases
//!
//! - confirm an address with its token
//! - resend the verification mail
//! - let an admin mark an account verified

use std::sync::Arc;

use platform::crypto::random_hex_token;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::{AuthError, AuthResult};
use crate::infra::mailer::Mailer;

/// Confirms an email address with the mailed token.
pub struct VerifyEmailUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> VerifyEmailUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, token: &str) -> AuthResult<User> {
        let token = token.trim();
        if token.is_empty() {
            return Err(AuthError::InvalidVerificationToken);
        }

        let user = self
            .user_repo
            .consume_verification_token(token)
            .await?
            .ok_or(AuthError::InvalidVerificationToken)?;

        tracing::info!(user_id = %user.user_id, "Email verified");
        Ok(user)
    }
}

/// Issues a fresh verification token and mails it.
pub struct ResendVerificationUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    mailer: Arc<Mailer>,
    config: Arc<AuthConfig>,
}

impl<U> ResendVerificationUseCase<U>
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

    /// Silent for unknown or already verified addresses.
    pub async fn execute(&self, email: &str) -> AuthResult<()> {
        let Ok(email) = Email::new(email) else {
            return Ok(());
        };

        let Some(mut user) = self.user_repo.find_user_by_email(&email).await? else {
            return Ok(());
        };
        if user.is_verified {
            return Ok(());
        }

        let token = random_hex_token();
        user.set_verification_token(token.clone());
        self.user_repo.update_user(&user).await?;

        let link = self.config.verification_link(&token);
        if let Err(e) = self.mailer.send_verification(&user.email, &link).await {
            tracing::warn!(user_id = %user.user_id, error = %e, "Mail not sent");
        }

        tracing::info!(user_id = %user.user_id, "Verification token reissued");
        Ok(())
    }
}

/// Admin override for accounts that cannot receive mail.
pub struct MarkVerifiedUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> MarkVerifiedUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, user_id: &UserId, admin_id: &UserId) -> AuthResult<User> {
        let mut user = self
            .user_repo
            .find_user_by_id(user_id)
            .await?
            .ok_or(AuthError::NotFound("User"))?;

        if !user.is_verified {
            user.mark_verified();
            self.user_repo.update_user(&user).await?;
        }

        tracing::info!(user_id = %user.user_id, admin_id = %admin_id, "User marked verified");
        Ok(user)
    }
}
