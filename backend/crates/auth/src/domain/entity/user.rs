//! User Entity
//!
//! A storefront account. Created unverified by sign-up; never hard-deleted
//! here.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    email::Email, user_id::UserId, user_password::UserPassword, user_role::UserRole,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    /// Unique, lower-cased
    pub email: Email,
    pub name: Option<String>,
    /// Accounts without a hash cannot sign in locally
    pub password_hash: Option<UserPassword>,
    pub phone: Option<String>,
    pub image: Option<String>,
    pub role: UserRole,
    pub is_verified: bool,
    /// Single-use email verification token
    pub verification_token: Option<String>,
    /// Single-use password reset token
    pub reset_token: Option<String>,
    pub reset_token_expiry: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profile fields a user may change about themselves.
#[derive(Debug, Clone)]
pub struct ProfileChanges {
    pub name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub image: Option<String>,
}

impl User {
    /// New unverified customer.
    pub fn new_customer(
        email: Email,
        name: String,
        phone: Option<String>,
        password_hash: UserPassword,
        verification_token: String,
    ) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            email,
            name: Some(name),
            password_hash: Some(password_hash),
            phone,
            image: None,
            role: UserRole::Customer,
            is_verified: false,
            verification_token: Some(verification_token),
            reset_token: None,
            reset_token_expiry: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Confirm the email address and burn the verification token.
    pub fn mark_verified(&mut self) {
        self.is_verified = true;
        self.verification_token = None;
        self.touch();
    }

    /// Replace the verification token (resend, email change).
    pub fn set_verification_token(&mut self, token: String) {
        self.verification_token = Some(token);
        self.touch();
    }

    pub fn issue_reset_token(&mut self, token: String, expires_at: DateTime<Utc>) {
        self.reset_token = Some(token);
        self.reset_token_expiry = Some(expires_at);
        self.touch();
    }

    /// Carry over the fields `update_user` writes, keeping this user's
    /// password hash and reset token.
    pub fn apply_persisted(&mut self, other: &User) {
        self.email = other.email.clone();
        self.name = other.name.clone();
        self.phone = other.phone.clone();
        self.image = other.image.clone();
        self.role = other.role;
        self.is_verified = other.is_verified;
        self.verification_token = other.verification_token.clone();
        self.updated_at = other.updated_at;
    }

    /// `true` when `token` is this user's reset token and has not expired.
    pub fn reset_token_matches(&self, token: &str, now: DateTime<Utc>) -> bool {
        match (&self.reset_token, self.reset_token_expiry) {
            (Some(stored), Some(expiry)) => {
                platform::crypto::constant_time_eq(stored.as_bytes(), token.as_bytes())
                    && expiry > now
            }
            _ => false,
        }
    }

    /// Set a new password and burn any reset token.
    pub fn change_password(&mut self, password_hash: UserPassword) {
        self.password_hash = Some(password_hash);
        self.reset_token = None;
        self.reset_token_expiry = None;
        self.touch();
    }

    /// Apply profile changes. Returns `true` when the email changed, in
    /// which case the account is unverified again until the new address is
    /// confirmed with `verification_token`.
    pub fn update_profile(&mut self, changes: ProfileChanges, verification_token: String) -> bool {
        let email_changed = changes.email != self.email;

        self.name = Some(changes.name);
        self.phone = changes.phone;
        self.image = changes.image;

        if email_changed {
            self.email = changes.email;
            self.is_verified = false;
            self.verification_token = Some(verification_token);
        }

        self.touch();
        email_changed
    }

    pub fn set_role(&mut self, role: UserRole) {
        self.role = role;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_password::RawPassword;
    use chrono::Duration;
    use platform::password::MIN_COST;

    async fn sample_user() -> User {
        let hash = UserPassword::from_raw(
            RawPassword::new("Password123!".to_string()).unwrap(),
            MIN_COST,
        )
        .await
        .unwrap();
        User::new_customer(
            Email::new("alice@example.com").unwrap(),
            "Alice".to_string(),
            None,
            hash,
            "verify-token".to_string(),
        )
    }

    #[tokio::test]
    async fn test_new_customer_defaults() {
        let user = sample_user().await;
        assert_eq!(user.role, UserRole::Customer);
        assert!(!user.is_verified);
        assert_eq!(user.verification_token.as_deref(), Some("verify-token"));
        assert!(user.reset_token.is_none());
    }

    #[tokio::test]
    async fn test_mark_verified_consumes_token() {
        let mut user = sample_user().await;
        user.mark_verified();
        assert!(user.is_verified);
        assert!(user.verification_token.is_none());
    }

    #[tokio::test]
    async fn test_reset_token_expiry() {
        let mut user = sample_user().await;
        user.issue_reset_token("reset".to_string(), Utc::now() + Duration::hours(1));

        assert!(user.reset_token_matches("reset", Utc::now()));
        assert!(!user.reset_token_matches("other", Utc::now()));
        assert!(!user.reset_token_matches("reset", Utc::now() + Duration::hours(2)));
    }

    #[tokio::test]
    async fn test_update_profile_email_change_resets_verification() {
        let mut user = sample_user().await;
        user.mark_verified();

        let same_email = ProfileChanges {
            name: "Alice B".to_string(),
            email: user.email.clone(),
            phone: Some("555-0100".to_string()),
            image: None,
        };
        assert!(!user.update_profile(same_email, "unused".to_string()));
        assert!(user.is_verified);
        assert_eq!(user.name.as_deref(), Some("Alice B"));

        let new_email = ProfileChanges {
            name: "Alice B".to_string(),
            email: Email::new("alice.b@example.com").unwrap(),
            phone: None,
            image: None,
        };
        assert!(user.update_profile(new_email, "fresh".to_string()));
        assert!(!user.is_verified);
        assert_eq!(user.verification_token.as_deref(), Some("fresh"));
    }
}
