//! Billboard Entity
//!
//! Hero banner shown on the storefront, referenced by categories.

use chrono::{DateTime, Utc};
use kernel::id::{Id, StoreId};

pub struct BillboardMarker;
pub type BillboardId = Id<BillboardMarker>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Billboard {
    pub billboard_id: BillboardId,
    pub store_id: StoreId,
    pub label: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Billboard {
    pub fn new(store_id: StoreId, label: String, image_url: String) -> Self {
        let now = Utc::now();
        Self {
            billboard_id: BillboardId::new(),
            store_id,
            label,
            image_url,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(&mut self, label: String, image_url: String) {
        self.label = label;
        self.image_url = image_url;
        self.updated_at = Utc::now();
    }
}
