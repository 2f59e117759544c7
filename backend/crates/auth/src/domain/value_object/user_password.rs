//! User Password Value Object
//!
//! Domain wrapper over `platform::password`. Policy violations become
//! validation errors with the messages the storefront shows verbatim;
//! hashing runs on the blocking pool.

use platform::password::{ClearTextPassword, HashedPassword, PasswordPolicyError};
use std::fmt;

use crate::error::{AuthError, AuthResult};

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input. Zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Validate a new password (sign-up, reset).
    pub fn new(raw: String) -> AuthResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| match e {
            PasswordPolicyError::TooShort { .. } => AuthError::Validation(e.to_string()),
            PasswordPolicyError::TooLong { .. } => AuthError::Validation(e.to_string()),
            PasswordPolicyError::InvalidCharacter => {
                AuthError::Validation("Password contains invalid characters".to_string())
            }
        })?;

        Ok(Self(clear_text))
    }

    /// Wrap a submitted sign-in password. No policy applies here.
    pub fn for_sign_in(raw: String) -> Self {
        Self(ClearTextPassword::for_verification(raw))
    }

    fn into_inner(self) -> ClearTextPassword {
        self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// bcrypt hash for database storage.
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a validated password at the given work factor.
    pub async fn from_raw(raw: RawPassword, cost: u32) -> AuthResult<Self> {
        let hashed = raw
            .into_inner()
            .hash_blocking(cost)
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        Ok(Self(hashed))
    }

    /// Load a stored hash (from database)
    pub fn from_hash_string(hash: impl Into<String>) -> AuthResult<Self> {
        let hashed = HashedPassword::from_hash_string(hash)
            .map_err(|_| AuthError::Internal("Invalid password hash in database".to_string()))?;

        Ok(Self(hashed))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Compare a submitted password against this hash.
    pub async fn verify(&self, raw: RawPassword) -> bool {
        self.0.verify_blocking(raw.into_inner()).await
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

impl fmt::Display for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[HASHED_PASSWORD]")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::MIN_COST;

    #[test]
    fn test_raw_password_validation() {
        assert!(RawPassword::new("Password123!".to_string()).is_ok());

        let err = RawPassword::new("short".to_string()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Password must be at least 8 characters long"
        );

        assert!(RawPassword::new("a".repeat(73)).is_err());
    }

    #[tokio::test]
    async fn test_hash_and_verify() {
        let raw = RawPassword::new("Password123!".to_string()).unwrap();
        let hashed = UserPassword::from_raw(raw, MIN_COST).await.unwrap();

        assert_ne!(hashed.as_str(), "Password123!");
        assert!(
            hashed
                .verify(RawPassword::for_sign_in("Password123!".to_string()))
                .await
        );
        assert!(
            !hashed
                .verify(RawPassword::for_sign_in("Password123?".to_string()))
                .await
        );
    }

    #[tokio::test]
    async fn test_hash_string_roundtrip() {
        let raw = RawPassword::new("Password123!".to_string()).unwrap();
        let hashed = UserPassword::from_raw(raw, MIN_COST).await.unwrap();

        let restored = UserPassword::from_hash_string(hashed.as_str().to_string()).unwrap();
        assert!(
            restored
                .verify(RawPassword::for_sign_in("Password123!".to_string()))
                .await
        );
        assert!(UserPassword::from_hash_string("plaintext").is_err());
    }

    #[tokio::test]
    async fn test_debug_redaction() {
        let raw = RawPassword::new("SecretPassword123!".to_string()).unwrap();
        assert!(!format!("{:?}", raw).contains("Secret"));

        let hashed = UserPassword::from_raw(raw, MIN_COST).await.unwrap();
        assert!(!format!("{:?}", hashed).contains("$2"));
        assert_eq!(hashed.to_string(), "[HASHED_PASSWORD]");
    }
}
