//! Variant Attributes
//!
//! Sizes and colors have the same shape (`name`, `value`) and differ only in
//! where they are stored and how `value` is validated.

use chrono::{DateTime, Utc};
use kernel::id::{Id, StoreId};

pub struct AttributeMarker;
pub type AttributeId = Id<AttributeMarker>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AttributeKind {
    #[display("Size")]
    Size,
    #[display("Color")]
    Color,
}

impl AttributeKind {
    /// Backing table
    pub const fn table(&self) -> &'static str {
        match self {
            AttributeKind::Size => "sizes",
            AttributeKind::Color => "colors",
        }
    }

    /// Colors are stored as `#rgb` or `#rrggbb`.
    pub fn validate_value(&self, value: &str) -> Result<(), &'static str> {
        match self {
            AttributeKind::Size => Ok(()),
            AttributeKind::Color => {
                let hex = value.strip_prefix('#').unwrap_or("");
                if matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()) {
                    Ok(())
                } else {
                    Err("Value must be a valid hex code")
                }
            }
        }
    }
}

/// A size or a color of one store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub attribute_id: AttributeId,
    pub store_id: StoreId,
    pub kind: AttributeKind,
    pub name: String,
    pub value: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Attribute {
    pub fn new(store_id: StoreId, kind: AttributeKind, name: String, value: String) -> Self {
        let now = Utc::now();
        Self {
            attribute_id: AttributeId::new(),
            store_id,
            kind,
            name,
            value,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(&mut self, name: String, value: String) {
        self.name = name;
        self.value = value;
        self.updated_at = Utc::now();
    }
}
