//! Address Entity

use chrono::{DateTime, Utc};
use kernel::id::Id;

use crate::domain::value_object::user_id::UserId;

pub struct AddressMarker;
pub type AddressId = Id<AddressMarker>;

/// Shipping address owned by one user. At most one per user is the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub address_id: AddressId,
    pub user_id: UserId,
    pub name: String,
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub state: Option<String>,
    pub postal_code: String,
    pub country: String,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated address fields, shared by create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressFields {
    pub name: String,
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub state: Option<String>,
    pub postal_code: String,
    pub country: String,
    pub is_default: bool,
}

impl Address {
    pub fn new(user_id: UserId, fields: AddressFields) -> Self {
        let now = Utc::now();
        Self {
            address_id: AddressId::new(),
            user_id,
            name: fields.name,
            line1: fields.line1,
            line2: fields.line2,
            city: fields.city,
            state: fields.state,
            postal_code: fields.postal_code,
            country: fields.country,
            is_default: fields.is_default,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, fields: AddressFields) {
        self.name = fields.name;
        self.line1 = fields.line1;
        self.line2 = fields.line2;
        self.city = fields.city;
        self.state = fields.state;
        self.postal_code = fields.postal_code;
        self.country = fields.country;
        self.is_default = fields.is_default;
        self.updated_at = Utc::now();
    }
}
