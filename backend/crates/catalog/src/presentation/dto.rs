//! API DTOs
//!
//! Same convention as the account routes: every request field is optional,
//! so missing input fails in the services with a readable message.
//! Prices travel as decimal strings (`"19.99"`); numbers are accepted too.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::{
    AttributeInput, BillboardInput, CategoryInput, CategoryView, ProductInput, ProductListQuery,
    VariantInput,
};
use crate::domain::entity::{
    attribute::Attribute,
    billboard::Billboard,
    category::Category,
    product::{Product, ProductImage, ProductVariant},
    store::Store,
};

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreRequest {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BillboardRequest {
    pub label: Option<String>,
    pub image_url: Option<String>,
}

impl From<BillboardRequest> for BillboardInput {
    fn from(req: BillboardRequest) -> Self {
        Self {
            label: req.label,
            image_url: req.image_url,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryRequest {
    pub name: Option<String>,
    pub billboard_id: Option<String>,
}

impl From<CategoryRequest> for CategoryInput {
    fn from(req: CategoryRequest) -> Self {
        Self {
            name: req.name,
            billboard_id: req.billboard_id,
        }
    }
}

/// Size or color
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttributeRequest {
    pub name: Option<String>,
    pub value: Option<String>,
}

impl From<AttributeRequest> for AttributeInput {
    fn from(req: AttributeRequest) -> Self {
        Self {
            name: req.name,
            value: req.value,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageRequest {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VariantRequest {
    /// Size id or size name
    pub size_id: Option<String>,
    /// Color id or color name
    pub color_id: Option<String>,
    pub in_stock: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category_id: Option<String>,
    pub images: Option<Vec<ImageRequest>>,
    pub variants: Option<Vec<VariantRequest>>,
    pub is_featured: Option<bool>,
    pub is_archived: Option<bool>,
}

impl From<ProductRequest> for ProductInput {
    fn from(req: ProductRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            price: req.price,
            category_id: req.category_id,
            images: req
                .images
                .map(|images| images.into_iter().filter_map(|i| i.url).collect()),
            variants: req.variants.map(|variants| {
                variants
                    .into_iter()
                    .map(|v| VariantInput {
                        size_id: v.size_id,
                        color_id: v.color_id,
                        in_stock: v.in_stock,
                    })
                    .collect()
            }),
            is_featured: req.is_featured,
            is_archived: req.is_archived,
        }
    }
}

/// `GET /api/{storeId}/products` query string
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductQuery {
    pub category_id: Option<String>,
    pub size_id: Option<String>,
    pub color_id: Option<String>,
    pub name: Option<String>,
    pub is_featured: Option<bool>,
}

impl From<ProductQuery> for ProductListQuery {
    fn from(query: ProductQuery) -> Self {
        Self {
            category_id: query.category_id,
            size_id: query.size_id,
            color_id: query.color_id,
            name: query.name,
            is_featured: query.is_featured,
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Store> for StoreResponse {
    fn from(store: &Store) -> Self {
        Self {
            id: store.store_id.into_uuid(),
            user_id: store.user_id.into_uuid(),
            name: store.name.clone(),
            created_at: store.created_at,
            updated_at: store.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillboardResponse {
    pub id: Uuid,
    pub store_id: Uuid,
    pub label: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Billboard> for BillboardResponse {
    fn from(billboard: &Billboard) -> Self {
        Self {
            id: billboard.billboard_id.into_uuid(),
            store_id: billboard.store_id.into_uuid(),
            label: billboard.label.clone(),
            image_url: billboard.image_url.clone(),
            created_at: billboard.created_at,
            updated_at: billboard.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: Uuid,
    pub store_id: Uuid,
    pub billboard_id: Uuid,
    pub name: String,
    /// Present on reads, absent on writes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billboard: Option<BillboardResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Category> for CategoryResponse {
    fn from(category: &Category) -> Self {
        Self {
            id: category.category_id.into_uuid(),
            store_id: category.store_id.into_uuid(),
            billboard_id: category.billboard_id.into_uuid(),
            name: category.name.clone(),
            billboard: None,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

impl From<&CategoryView> for CategoryResponse {
    fn from(view: &CategoryView) -> Self {
        Self {
            billboard: view.billboard.as_ref().map(BillboardResponse::from),
            ..Self::from(&view.category)
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeResponse {
    pub id: Uuid,
    pub store_id: Uuid,
    pub name: String,
    pub value: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Attribute> for AttributeResponse {
    fn from(attribute: &Attribute) -> Self {
        Self {
            id: attribute.attribute_id.into_uuid(),
            store_id: attribute.store_id.into_uuid(),
            name: attribute.name.clone(),
            value: attribute.value.clone(),
            created_at: attribute.created_at,
            updated_at: attribute.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageResponse {
    pub url: String,
}

impl From<&ProductImage> for ImageResponse {
    fn from(image: &ProductImage) -> Self {
        Self {
            url: image.url.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantResponse {
    pub size_id: Uuid,
    pub color_id: Uuid,
    pub in_stock: i32,
}

impl From<&ProductVariant> for VariantResponse {
    fn from(variant: &ProductVariant) -> Self {
        Self {
            size_id: variant.size_id.into_uuid(),
            color_id: variant.color_id.into_uuid(),
            in_stock: variant.in_stock,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: Uuid,
    pub store_id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub is_featured: bool,
    pub is_archived: bool,
    pub images: Vec<ImageResponse>,
    pub variants: Vec<VariantResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.product_id.into_uuid(),
            store_id: product.store_id.into_uuid(),
            category_id: product.category_id.into_uuid(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            is_featured: product.is_featured,
            is_archived: product.is_archived,
            images: product.images.iter().map(ImageResponse::from).collect(),
            variants: product.variants.iter().map(VariantResponse::from).collect(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
