//! Sign Up Use Case
//!
//! Creates a new, unverified customer account and mails the verification
//! link.

use std::sync::Arc;

use platform::crypto::random_hex_token;

use crate::application::config::AuthConfig;
use crate::application::required;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};
use crate::infra::mailer::Mailer;

/// Sign up input
pub struct SignUpInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub phone: Option<String>,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    mailer: Arc<Mailer>,
    config: Arc<AuthConfig>,
}

impl<U> SignUpUseCase<U>
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

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<User> {
        let (Some(name), Some(email), Some(password), Some(confirm_password)) = (
            required(input.name),
            required(input.email),
            input.password.filter(|p| !p.is_empty()),
            input.confirm_password.filter(|p| !p.is_empty()),
        ) else {
            return Err(AuthError::Validation("Missing required fields".to_string()));
        };

        let email = Email::new(email)?;

        if password != confirm_password {
            return Err(AuthError::Validation("Passwords do not match".to_string()));
        }
        let raw_password = RawPassword::new(password)?;

        if self.user_repo.find_user_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = UserPassword::from_raw(raw_password, self.config.bcrypt_cost).await?;
        let verification_token = random_hex_token();

        let user = User::new_customer(
            email,
            name,
            required(input.phone),
            password_hash,
            verification_token.clone(),
        );

        // Racing sign-ups surface here as EmailTaken via the unique index
        self.user_repo.create_user(&user).await?;

        tracing::info!(user_id = %user.user_id, "User signed up");

        let link = self.config.verification_link(&verification_token);
        if let Err(e) = self.mailer.send_verification(&user.email, &link).await {
            tracing::warn!(user_id = %user.user_id, error = %e, "Verification mail not sent");
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use platform::password::MIN_COST;

    use super::*;
    use crate::domain::value_object::user_id::UserId;
    use crate::infra::memory::MemoryAuthRepository;

    /// Lookup never sees the existing account, as when two sign-ups for
    /// one email both pass the check before either inserts.
    struct StaleLookup(MemoryAuthRepository);

    impl UserRepository for StaleLookup {
        async fn create_user(&self, user: &User) -> AuthResult<()> {
            self.0.create_user(user).await
        }

        async fn find_user_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
            self.0.find_user_by_id(user_id).await
        }

        async fn find_user_by_email(&self, _email: &Email) -> AuthResult<Option<User>> {
            Ok(None)
        }

        async fn find_user_by_reset_token(&self, token: &str) -> AuthResult<Option<User>> {
            self.0.find_user_by_reset_token(token).await
        }

        async fn update_user(&self, user: &User) -> AuthResult<()> {
            self.0.update_user(user).await
        }

        async fn consume_verification_token(&self, token: &str) -> AuthResult<Option<User>> {
            self.0.consume_verification_token(token).await
        }

        async fn store_reset_token(
            &self,
            user_id: &UserId,
            token: &str,
            expires_at: DateTime<Utc>,
        ) -> AuthResult<()> {
            self.0.store_reset_token(user_id, token, expires_at).await
        }

        async fn consume_reset_token(
            &self,
            token: &str,
            password_hash: &UserPassword,
            now: DateTime<Utc>,
        ) -> AuthResult<Option<UserId>> {
            self.0.consume_reset_token(token, password_hash, now).await
        }
    }

    fn input(email: &str) -> SignUpInput {
        SignUpInput {
            name: Some("Alice".to_string()),
            email: Some(email.to_string()),
            password: Some("Password123!".to_string()),
            confirm_password: Some("Password123!".to_string()),
            phone: None,
        }
    }

    #[tokio::test]
    async fn test_insert_conflict_after_missed_lookup_is_email_taken() {
        let repo = MemoryAuthRepository::new();
        let config = Arc::new(AuthConfig {
            bcrypt_cost: MIN_COST,
            ..AuthConfig::development()
        });
        let use_case = SignUpUseCase::new(
            Arc::new(StaleLookup(repo.clone())),
            Arc::new(Mailer::default()),
            config,
        );

        use_case.execute(input("race@example.com")).await.unwrap();
        let err = use_case
            .execute(input("race@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::EmailTaken));
        assert_eq!(err.to_string(), "Email already in use");

        let email = Email::new("race@example.com").unwrap();
        assert!(repo.find_user_by_email(&email).await.unwrap().is_some());
    }
}
