//! Profile Use Case
//!
//! Read and update the signed-in user's own profile.

use std::sync::Arc;

use platform::crypto::random_hex_token;

use crate::application::config::AuthConfig;
use crate::application::required;
use crate::domain::entity::user::{ProfileChanges, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::{AuthError, AuthResult};
use crate::infra::mailer::Mailer;

/// Profile update input
pub struct ProfileInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub image: Option<String>,
}

/// Profile use case
pub struct ProfileUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    mailer: Arc<Mailer>,
    config: Arc<AuthConfig>,
}

impl<U> ProfileUseCase<U>
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

    pub async fn get(&self, user_id: &UserId) -> AuthResult<User> {
        self.user_repo
            .find_user_by_id(user_id)
            .await?
            .ok_or(AuthError::NotFound("User"))
    }

    /// An email change unverifies the account and mails a fresh
    /// verification link to the new address.
    pub async fn update(&self, user_id: &UserId, input: ProfileInput) -> AuthResult<User> {
        let name = required(input.name)
            .ok_or_else(|| AuthError::Validation("Name is required".to_string()))?;
        let email = required(input.email)
            .ok_or_else(|| AuthError::Validation("Email is required".to_string()))?;
        let email = Email::new(email)?;

        let mut user = self.get(user_id).await?;

        if email != user.email {
            let taken = self
                .user_repo
                .find_user_by_email(&email)
                .await?
                .is_some_and(|other| other.user_id != user.user_id);
            if taken {
                return Err(AuthError::EmailTaken);
            }
        }

        let verification_token = random_hex_token();
        let changes = ProfileChanges {
            name,
            email,
            phone: required(input.phone),
            image: required(input.image),
        };
        let email_changed = user.update_profile(changes, verification_token.clone());

        self.user_repo.update_user(&user).await?;

        if email_changed {
            tracing::info!(user_id = %user.user_id, "Email changed, verification required");
            let link = self.config.verification_link(&verification_token);
            if let Err(e) = self.mailer.send_verification(&user.email, &link).await {
                tracing::warn!(user_id = %user.user_id, error = %e, "Verification mail not sent");
            }
        } else {
            tracing::debug!(user_id = %user.user_id, "Profile updated");
        }

        Ok(user)
    }
}
