//! In-Memory Repository
//!
//! Implements every repository trait over process-local maps. Used by the
//! router tests and for running the API without a database.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entity::{
    account_summary::OrderSummary,
    address::{Address, AddressId},
    user::User,
};
use crate::domain::repository::{AccountSummaryRepository, AddressRepository, UserRepository};
use crate::domain::value_object::{
    email::Email, user_id::UserId, user_password::UserPassword, user_role::UserRole,
};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct Tables {
    users: HashMap<UserId, User>,
    addresses: Vec<Address>,
    favorites: Vec<(UserId, Uuid)>,
    orders: Vec<(UserId, OrderSummary)>,
}

/// Shared in-memory store. Clones see the same data.
#[derive(Clone, Default)]
pub struct MemoryAuthRepository {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AuthResult<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| AuthError::Internal("memory repository poisoned".to_string()))
    }

    /// Record an order for the session summary.
    pub fn add_order(&self, user_id: UserId, order: OrderSummary) -> AuthResult<()> {
        self.lock()?.orders.push((user_id, order));
        Ok(())
    }

    pub fn add_favorite(&self, user_id: UserId, product_id: Uuid) -> AuthResult<()> {
        self.lock()?.favorites.push((user_id, product_id));
        Ok(())
    }

    /// Seed helper: flag the account verified without a token round-trip.
    pub fn set_verified(&self, email: &Email) -> AuthResult<bool> {
        let mut tables = self.lock()?;
        let user = tables.users.values_mut().find(|u| &u.email == email);
        Ok(user.map(|u| u.mark_verified()).is_some())
    }

    /// Seed helper: promote an account.
    pub fn set_role(&self, email: &Email, role: UserRole) -> AuthResult<bool> {
        let mut tables = self.lock()?;
        let user = tables.users.values_mut().find(|u| &u.email == email);
        Ok(user.map(|u| u.set_role(role)).is_some())
    }

    /// Remove a user outright (simulates an account deleted elsewhere).
    pub fn remove_user(&self, user_id: &UserId) -> AuthResult<bool> {
        Ok(self.lock()?.users.remove(user_id).is_some())
    }

    fn find_user(&self, predicate: impl Fn(&User) -> bool) -> AuthResult<Option<User>> {
        Ok(self.lock()?.users.values().find(|u| predicate(u)).cloned())
    }
}

impl UserRepository for MemoryAuthRepository {
    async fn create_user(&self, user: &User) -> AuthResult<()> {
        let mut tables = self.lock()?;
        if tables.users.values().any(|u| u.email == user.email) {
            return Err(AuthError::EmailTaken);
        }
        tables.users.insert(user.user_id, user.clone());
        Ok(())
    }

    async fn find_user_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.lock()?.users.get(user_id).cloned())
    }

    async fn find_user_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        self.find_user(|u| &u.email == email)
    }

    async fn find_user_by_reset_token(&self, token: &str) -> AuthResult<Option<User>> {
        self.find_user(|u| u.reset_token.as_deref() == Some(token))
    }

    async fn update_user(&self, user: &User) -> AuthResult<()> {
        let mut tables = self.lock()?;
        if tables
            .users
            .values()
            .any(|u| u.email == user.email && u.user_id != user.user_id)
        {
            return Err(AuthError::EmailTaken);
        }
        if let Some(stored) = tables.users.get_mut(&user.user_id) {
            stored.apply_persisted(user);
        }
        Ok(())
    }

    async fn consume_verification_token(&self, token: &str) -> AuthResult<Option<User>> {
        let mut tables = self.lock()?;
        let user = tables
            .users
            .values_mut()
            .find(|u| u.verification_token.as_deref() == Some(token));
        Ok(user.map(|u| {
            u.mark_verified();
            u.clone()
        }))
    }

    async fn store_reset_token(
        &self,
        user_id: &UserId,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> AuthResult<()> {
        if let Some(user) = self.lock()?.users.get_mut(user_id) {
            user.issue_reset_token(token.to_string(), expires_at);
        }
        Ok(())
    }

    async fn consume_reset_token(
        &self,
        token: &str,
        password_hash: &UserPassword,
        now: DateTime<Utc>,
    ) -> AuthResult<Option<UserId>> {
        let mut tables = self.lock()?;
        let user = tables
            .users
            .values_mut()
            .find(|u| u.reset_token_matches(token, now));
        Ok(user.map(|u| {
            u.change_password(password_hash.clone());
            u.user_id
        }))
    }
}

impl AddressRepository for MemoryAuthRepository {
    async fn list_addresses(&self, user_id: &UserId) -> AuthResult<Vec<Address>> {
        let mut addresses: Vec<Address> = self
            .lock()?
            .addresses
            .iter()
            .filter(|a| &a.user_id == user_id)
            .cloned()
            .collect();
        addresses.sort_by_key(|a| a.created_at);
        Ok(addresses)
    }

    async fn find_address(
        &self,
        user_id: &UserId,
        address_id: &AddressId,
    ) -> AuthResult<Option<Address>> {
        Ok(self
            .lock()?
            .addresses
            .iter()
            .find(|a| &a.address_id == address_id && &a.user_id == user_id)
            .cloned())
    }

    async fn create_address(&self, address: &Address) -> AuthResult<()> {
        let mut tables = self.lock()?;
        if address.is_default {
            clear_default(&mut tables.addresses, address);
        }
        tables.addresses.push(address.clone());
        Ok(())
    }

    async fn update_address(&self, address: &Address) -> AuthResult<()> {
        let mut tables = self.lock()?;
        if address.is_default {
            clear_default(&mut tables.addresses, address);
        }
        if let Some(stored) = tables
            .addresses
            .iter_mut()
            .find(|a| a.address_id == address.address_id && a.user_id == address.user_id)
        {
            *stored = address.clone();
        }
        Ok(())
    }

    async fn delete_address(&self, user_id: &UserId, address_id: &AddressId) -> AuthResult<bool> {
        let mut tables = self.lock()?;
        let before = tables.addresses.len();
        tables
            .addresses
            .retain(|a| !(&a.address_id == address_id && &a.user_id == user_id));
        Ok(tables.addresses.len() < before)
    }

    async fn count_addresses(&self, user_id: &UserId) -> AuthResult<i64> {
        let count = self
            .lock()?
            .addresses
            .iter()
            .filter(|a| &a.user_id == user_id)
            .count();
        Ok(count as i64)
    }
}

fn clear_default(addresses: &mut [Address], keep: &Address) {
    let now = Utc::now();
    for other in addresses
        .iter_mut()
        .filter(|a| a.user_id == keep.user_id && a.address_id != keep.address_id && a.is_default)
    {
        other.is_default = false;
        other.updated_at = now;
    }
}

impl AccountSummaryRepository for MemoryAuthRepository {
    async fn count_favorites(&self, user_id: &UserId) -> AuthResult<i64> {
        let count = self
            .lock()?
            .favorites
            .iter()
            .filter(|(owner, _)| owner == user_id)
            .count();
        Ok(count as i64)
    }

    async fn recent_orders(&self, user_id: &UserId, limit: i64) -> AuthResult<Vec<OrderSummary>> {
        let mut orders: Vec<OrderSummary> = self
            .lock()?
            .orders
            .iter()
            .filter(|(owner, _)| owner == user_id)
            .map(|(_, order)| order.clone())
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        orders.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(orders)
    }
}
