//! Sign In Use Case
//!
//! Checks credentials and issues a session token.

use std::sync::Arc;

use crate::application::required;
use crate::application::session_token::{IssuedSession, SessionTokens};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: Option<String>,
    pub password: Option<String>,
    pub remember_me: bool,
}

/// Sign in output
pub struct SignInOutput {
    pub user: User,
    pub session: IssuedSession,
}

/// Sign in use case
pub struct SignInUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<SessionTokens>,
}

impl<U> SignInUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<SessionTokens>) -> Self {
        Self { user_repo, tokens }
    }

    /// Unknown email, missing hash and wrong password all return
    /// `InvalidCredentials`. The verification check runs only after the
    /// password matched.
    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let (Some(email), Some(password)) = (
            required(input.email),
            input.password.filter(|p| !p.is_empty()),
        ) else {
            return Err(AuthError::Validation(
                "Email and password are required".to_string(),
            ));
        };

        let email = Email::new(email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_user_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password_hash = user
            .password_hash
            .as_ref()
            .ok_or(AuthError::InvalidCredentials)?;

        if !password_hash
            .verify(RawPassword::for_sign_in(password))
            .await
        {
            return Err(AuthError::InvalidCredentials);
        }

        if !user.is_verified {
            return Err(AuthError::Unverified);
        }

        let session = self.tokens.issue(&user, input.remember_me)?;

        tracing::info!(
            user_id = %user.user_id,
            remember_me = input.remember_me,
            "User signed in"
        );

        Ok(SignInOutput { user, session })
    }
}
