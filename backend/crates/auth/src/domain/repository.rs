//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//! Method names are unique across traits so one type can implement all of
//! them without call-site ambiguity.

use chrono::{DateTime, Utc};

use crate::domain::entity::{
    account_summary::OrderSummary,
    address::{Address, AddressId},
    user::User,
};
use crate::domain::value_object::{email::Email, user_id::UserId, user_password::UserPassword};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user. A duplicate email is `AuthError::EmailTaken`.
    async fn create_user(&self, user: &User) -> AuthResult<()>;

    async fn find_user_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Case-insensitive (emails are stored lower-cased).
    async fn find_user_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    async fn find_user_by_reset_token(&self, token: &str) -> AuthResult<Option<User>>;

    /// Persist profile, role and verification fields. A duplicate email is
    /// `AuthError::EmailTaken`. The password hash and the reset token are
    /// left alone; only the reset methods below write them.
    async fn update_user(&self, user: &User) -> AuthResult<()>;

    /// Mark the holder of `token` verified and clear the token, in one
    /// atomic step. `None` when no account holds the token (any more).
    async fn consume_verification_token(&self, token: &str) -> AuthResult<Option<User>>;

    async fn store_reset_token(
        &self,
        user_id: &UserId,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> AuthResult<()>;

    /// Swap in `password_hash` and clear the reset token, in one atomic
    /// step, if `token` is still unexpired at `now`. Of two concurrent
    /// calls with the same token at most one gets `Some`.
    async fn consume_reset_token(
        &self,
        token: &str,
        password_hash: &UserPassword,
        now: DateTime<Utc>,
    ) -> AuthResult<Option<UserId>>;
}

/// Address repository trait
#[trait_variant::make(AddressRepository: Send)]
pub trait LocalAddressRepository {
    /// Oldest first
    async fn list_addresses(&self, user_id: &UserId) -> AuthResult<Vec<Address>>;

    /// Scoped to the owner: another user's address is `None`.
    async fn find_address(
        &self,
        user_id: &UserId,
        address_id: &AddressId,
    ) -> AuthResult<Option<Address>>;

    /// Insert. When `is_default` is set, every other address of the user
    /// loses the flag in the same unit of work.
    async fn create_address(&self, address: &Address) -> AuthResult<()>;

    /// Update, with the same default handling as `create_address`.
    async fn update_address(&self, address: &Address) -> AuthResult<()>;

    /// Returns `false` when nothing was deleted.
    async fn delete_address(&self, user_id: &UserId, address_id: &AddressId) -> AuthResult<bool>;

    async fn count_addresses(&self, user_id: &UserId) -> AuthResult<i64>;
}

/// Read-only view of data owned by other parts of the system
#[trait_variant::make(AccountSummaryRepository: Send)]
pub trait LocalAccountSummaryRepository {
    async fn count_favorites(&self, user_id: &UserId) -> AuthResult<i64>;

    /// Newest first
    async fn recent_orders(&self, user_id: &UserId, limit: i64) -> AuthResult<Vec<OrderSummary>>;
}
