//! Product Entity
//!
//! A product owns its images and variants; they are replaced as a whole on
//! update.

use chrono::{DateTime, Utc};
use kernel::id::{Id, StoreId};
use rust_decimal::Decimal;

use crate::domain::entity::{attribute::AttributeId, category::CategoryId};

pub struct ProductMarker;
pub type ProductId = Id<ProductMarker>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductImage {
    pub url: String,
}

/// One size/color combination and its stock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductVariant {
    pub size_id: AttributeId,
    pub color_id: AttributeId,
    pub in_stock: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub product_id: ProductId,
    pub store_id: StoreId,
    pub category_id: CategoryId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub is_featured: bool,
    /// Hidden from listings; only the owner sees it by id
    pub is_archived: bool,
    pub images: Vec<ProductImage>,
    pub variants: Vec<ProductVariant>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated product fields, shared by create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFields {
    pub category_id: CategoryId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub is_featured: bool,
    pub is_archived: bool,
    pub images: Vec<ProductImage>,
    pub variants: Vec<ProductVariant>,
}

impl Product {
    pub fn new(store_id: StoreId, fields: ProductFields) -> Self {
        let now = Utc::now();
        Self {
            product_id: ProductId::new(),
            store_id,
            category_id: fields.category_id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            is_featured: fields.is_featured,
            is_archived: fields.is_archived,
            images: fields.images,
            variants: fields.variants,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, fields: ProductFields) {
        self.category_id = fields.category_id;
        self.name = fields.name;
        self.description = fields.description;
        self.price = fields.price;
        self.is_featured = fields.is_featured;
        self.is_archived = fields.is_archived;
        self.images = fields.images;
        self.variants = fields.variants;
        self.updated_at = Utc::now();
    }
}

/// Storefront listing filter. Archived products never match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub category_id: Option<CategoryId>,
    pub size_id: Option<AttributeId>,
    pub color_id: Option<AttributeId>,
    /// Case-insensitive substring of the name
    pub name: Option<String>,
    pub featured_only: bool,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        if product.is_archived {
            return false;
        }
        if self
            .category_id
            .is_some_and(|id| id != product.category_id)
        {
            return false;
        }
        if self.featured_only && !product.is_featured {
            return false;
        }
        if let Some(name) = &self.name {
            if !product.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }
        if self.size_id.is_some() || self.color_id.is_some() {
            // Both constraints must hold on the same variant
            return product.variants.iter().any(|v| {
                self.size_id.is_none_or(|id| id == v.size_id)
                    && self.color_id.is_none_or(|id| id == v.color_id)
            });
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn product(small_red: (AttributeId, AttributeId), large_blue: (AttributeId, AttributeId)) -> Product {
        Product::new(
            StoreId::new(),
            ProductFields {
                category_id: CategoryId::new(),
                name: "Blue Shirt".to_string(),
                description: "Cotton".to_string(),
                price: Decimal::from_str("19.99").unwrap(),
                is_featured: true,
                is_archived: false,
                images: vec![ProductImage {
                    url: "https://img.example.com/1.png".to_string(),
                }],
                variants: vec![
                    ProductVariant {
                        size_id: small_red.0,
                        color_id: small_red.1,
                        in_stock: 3,
                    },
                    ProductVariant {
                        size_id: large_blue.0,
                        color_id: large_blue.1,
                        in_stock: 0,
                    },
                ],
            },
        )
    }

    #[test]
    fn test_variant_filter_requires_same_variant() {
        let (small, large, red, blue) = (
            AttributeId::new(),
            AttributeId::new(),
            AttributeId::new(),
            AttributeId::new(),
        );
        let p = product((small, red), (large, blue));

        let filter = |size_id, color_id| ProductFilter {
            size_id,
            color_id,
            ..Default::default()
        };
        assert!(filter(Some(small), Some(red)).matches(&p));
        assert!(filter(Some(large), None).matches(&p));
        assert!(filter(None, Some(blue)).matches(&p));
        assert!(!filter(Some(small), Some(blue)).matches(&p));
    }

    #[test]
    fn test_name_and_flags() {
        let ids = (AttributeId::new(), AttributeId::new());
        let mut p = product(ids, ids);

        let by_name = ProductFilter {
            name: Some("SHIRT".to_string()),
            featured_only: true,
            ..Default::default()
        };
        assert!(by_name.matches(&p));

        let other_category = ProductFilter {
            category_id: Some(CategoryId::new()),
            ..Default::default()
        };
        assert!(!other_category.matches(&p));

        p.is_archived = true;
        assert!(!ProductFilter::default().matches(&p));
    }
}
