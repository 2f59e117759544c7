//! Category Entity

use chrono::{DateTime, Utc};
use kernel::id::{Id, StoreId};

use crate::domain::entity::billboard::BillboardId;

pub struct CategoryMarker;
pub type CategoryId = Id<CategoryMarker>;

/// Product grouping, displayed under one billboard of the same store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub category_id: CategoryId,
    pub store_id: StoreId,
    pub billboard_id: BillboardId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn new(store_id: StoreId, billboard_id: BillboardId, name: String) -> Self {
        let now = Utc::now();
        Self {
            category_id: CategoryId::new(),
            store_id,
            billboard_id,
            name,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(&mut self, billboard_id: BillboardId, name: String) {
        self.billboard_id = billboard_id;
        self.name = name;
        self.updated_at = Utc::now();
    }
}
