//! Password Hashing and Verification
//!
//! Password handling with:
//! - bcrypt hashing with a configurable work factor
//! - Unicode NFKC normalization before hashing and verifying
//! - Zeroization of cleartext on drop
//!
//! bcrypt only reads the first 72 bytes of its input, so longer passwords are
//! rejected instead of being silently truncated.

use std::fmt;

use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// Minimum password length in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length in bytes (bcrypt input limit)
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Default bcrypt work factor
pub const DEFAULT_COST: u32 = 10;

/// Lowest work factor bcrypt accepts. Only tests should go this low.
pub const MIN_COST: u32 = 4;

/// Highest work factor bcrypt accepts.
const MAX_COST: u32 = 31;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters long")]
    TooShort { min: usize, actual: usize },

    #[error("Password must be at most {max} bytes long")]
    TooLong { max: usize, actual: usize },

    #[error("Password contains invalid control characters")]
    InvalidCharacter,
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
///
/// ## Examples
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("Password123!".to_string()).unwrap();
/// // Password is automatically zeroized when dropped
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a new clear text password with policy validation
    ///
    /// - at least [`MIN_PASSWORD_LENGTH`] characters
    /// - at most [`MAX_PASSWORD_BYTES`] bytes
    /// - no control characters
    ///
    /// Unicode is normalized using NFKC before validation.
    pub fn new(mut raw: String) -> Result<Self, PasswordPolicyError> {
        let normalized: String = raw.nfkc().collect();
        raw.zeroize();
        let candidate = Self(normalized);

        let char_count = candidate.0.chars().count();
        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        let byte_len = candidate.0.len();
        if byte_len > MAX_PASSWORD_BYTES {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_BYTES,
                actual: byte_len,
            });
        }

        if candidate
            .0
            .chars()
            .any(|ch| ch.is_control() && ch != '\t')
        {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        Ok(candidate)
    }

    /// Wrap a submitted password without applying the policy.
    ///
    /// Used on sign-in: stored hashes may predate the current policy, so the
    /// only check that matters is the hash comparison itself.
    pub fn for_verification(mut raw: String) -> Self {
        let normalized: String = raw.nfkc().collect();
        raw.zeroize();
        Self(normalized)
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash the password with bcrypt at the given work factor.
    pub fn hash(&self, cost: u32) -> Result<HashedPassword, PasswordHashError> {
        let cost = cost.clamp(MIN_COST, MAX_COST);
        let hash = bcrypt::hash(self.as_bytes(), cost)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;
        Ok(HashedPassword { hash })
    }

    /// [`ClearTextPassword::hash`] on the blocking thread pool.
    pub async fn hash_blocking(self, cost: u32) -> Result<HashedPassword, PasswordHashError> {
        tokio::task::spawn_blocking(move || self.hash(cost))
            .await
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// bcrypt hash in modular crypt format (`$2b$10$...`)
///
/// ## Examples
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("Password123!".to_string()).unwrap();
/// let hashed = password.hash(4).unwrap();
/// assert!(hashed.verify(&password));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from a stored hash string (e.g., from database)
    pub fn from_hash_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        // $2a$, $2b$, $2x$ or $2y$, two-digit cost, 53 chars of salt + digest
        let well_formed = hash.len() == 60
            && hash.starts_with("$2")
            && hash.as_bytes().get(3) == Some(&b'$')
            && hash.as_bytes().get(6) == Some(&b'$');
        if !well_formed {
            return Err(PasswordHashError::InvalidHashFormat);
        }

        Ok(Self { hash })
    }

    /// Get the hash string for storage
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash.
    ///
    /// Any bcrypt error counts as a mismatch.
    pub fn verify(&self, password: &ClearTextPassword) -> bool {
        bcrypt::verify(password.as_bytes(), &self.hash).unwrap_or(false)
    }

    /// [`HashedPassword::verify`] on the blocking thread pool.
    pub async fn verify_blocking(&self, password: ClearTextPassword) -> bool {
        let hashed = self.clone();
        tokio::task::spawn_blocking(move || hashed.verify(&password))
            .await
            .unwrap_or(false)
    }

    /// Work factor encoded in the hash.
    pub fn cost(&self) -> Option<u32> {
        self.hash.get(4..6)?.parse().ok()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
