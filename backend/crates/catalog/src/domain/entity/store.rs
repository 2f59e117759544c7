//! Store Entity
//!
//! The tenant. Every catalog record belongs to exactly one store, and only
//! the store's owner may change it.

use chrono::{DateTime, Utc};
use kernel::id::{StoreId, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    pub store_id: StoreId,
    /// Owner
    pub user_id: UserId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Store {
    pub fn new(user_id: UserId, name: String) -> Self {
        let now = Utc::now();
        Self {
            store_id: StoreId::new(),
            user_id,
            name,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}
