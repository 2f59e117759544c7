//! Product Service
//!
//! Variants may name their size and color either by id or by name; both are
//! resolved against the product's own store before anything is written.

use std::sync::Arc;

use kernel::id::{StoreId, UserId};
use rust_decimal::Decimal;

use crate::application::{owned_store, parse_id, require, required};
use crate::domain::entity::{
    attribute::{AttributeId, AttributeKind},
    category::CategoryId,
    product::{Product, ProductFields, ProductFilter, ProductId, ProductImage, ProductVariant},
};
use crate::domain::repository::{
    AttributeRepository, CategoryRepository, ProductRepository, StoreRepository,
};
use crate::error::{CatalogError, CatalogResult};

#[derive(Debug, Clone, Default)]
pub struct VariantInput {
    /// Size id or size name
    pub size_id: Option<String>,
    /// Color id or color name
    pub color_id: Option<String>,
    pub in_stock: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct ProductInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category_id: Option<String>,
    pub images: Option<Vec<String>>,
    pub variants: Option<Vec<VariantInput>>,
    pub is_featured: Option<bool>,
    pub is_archived: Option<bool>,
}

/// Storefront query string, before id parsing.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    pub category_id: Option<String>,
    pub size_id: Option<String>,
    pub color_id: Option<String>,
    pub name: Option<String>,
    pub is_featured: Option<bool>,
}

pub struct ProductService<R>
where
    R: StoreRepository + CategoryRepository + AttributeRepository + ProductRepository,
{
    repo: Arc<R>,
}

impl<R> ProductService<R>
where
    R: StoreRepository + CategoryRepository + AttributeRepository + ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Non-archived products matching the query.
    ///
    /// An id filter that is not a UUID matches nothing.
    pub async fn list(
        &self,
        store_id: &StoreId,
        query: ProductListQuery,
    ) -> CatalogResult<Vec<Product>> {
        fn parse<T>(raw: Option<String>) -> Result<Option<kernel::id::Id<T>>, ()> {
            match required(raw) {
                Some(raw) => raw.parse().map(Some).map_err(|_| ()),
                None => Ok(None),
            }
        }

        let (Ok(category_id), Ok(size_id), Ok(color_id)) = (
            parse(query.category_id),
            parse(query.size_id),
            parse(query.color_id),
        ) else {
            return Ok(Vec::new());
        };

        let filter = ProductFilter {
            category_id,
            size_id,
            color_id,
            name: required(query.name),
            featured_only: query.is_featured.unwrap_or(false),
        };
        self.repo.list_products(store_id, &filter).await
    }

    /// Archived products are only visible to the store owner.
    pub async fn get(
        &self,
        store_id: &StoreId,
        id: &str,
        viewer: Option<&UserId>,
    ) -> CatalogResult<Product> {
        let product = self.find(store_id, id).await?;

        if product.is_archived {
            let owner = match viewer {
                Some(user_id) => self
                    .repo
                    .find_store(store_id)
                    .await?
                    .is_some_and(|store| store.is_owned_by(user_id)),
                None => false,
            };
            if !owner {
                return Err(CatalogError::NotFound("Product"));
            }
        }

        Ok(product)
    }

    pub async fn create(
        &self,
        store_id: &StoreId,
        user_id: &UserId,
        input: ProductInput,
    ) -> CatalogResult<Product> {
        owned_store(self.repo.as_ref(), store_id, user_id).await?;
        let fields = self.validate(store_id, input).await?;

        let product = Product::new(*store_id, fields);
        self.repo.create_product(&product).await?;

        tracing::info!(
            store_id = %store_id,
            product_id = %product.product_id,
            variants = product.variants.len(),
            "Product created"
        );
        Ok(product)
    }

    pub async fn update(
        &self,
        store_id: &StoreId,
        user_id: &UserId,
        id: &str,
        input: ProductInput,
    ) -> CatalogResult<Product> {
        owned_store(self.repo.as_ref(), store_id, user_id).await?;
        let mut product = self.find(store_id, id).await?;
        let fields = self.validate(store_id, input).await?;

        product.apply(fields);
        self.repo.update_product(&product).await?;
        Ok(product)
    }

    pub async fn delete(
        &self,
        store_id: &StoreId,
        user_id: &UserId,
        id: &str,
    ) -> CatalogResult<Product> {
        owned_store(self.repo.as_ref(), store_id, user_id).await?;
        let product = self.find(store_id, id).await?;

        if !self
            .repo
            .delete_product(store_id, &product.product_id)
            .await?
        {
            return Err(CatalogError::NotFound("Product"));
        }

        tracing::info!(store_id = %store_id, product_id = %product.product_id, "Product deleted");
        Ok(product)
    }

    /// Any product of the store, archived included.
    async fn find(&self, store_id: &StoreId, id: &str) -> CatalogResult<Product> {
        let id: ProductId = parse_id(id, "Product")?;
        self.repo
            .find_product(store_id, &id)
            .await?
            .ok_or(CatalogError::NotFound("Product"))
    }

    async fn validate(&self, store_id: &StoreId, input: ProductInput) -> CatalogResult<ProductFields> {
        let name = require(input.name, "Name")?;

        let images: Vec<ProductImage> = input
            .images
            .unwrap_or_default()
            .into_iter()
            .filter_map(|url| required(Some(url)))
            .map(|url| ProductImage { url })
            .collect();
        if images.is_empty() {
            return Err(CatalogError::validation("Images are required"));
        }

        let price = match input.price {
            None => return Err(CatalogError::validation("Price is required")),
            Some(price) if price.is_zero() => {
                return Err(CatalogError::validation("Price is required"));
            }
            Some(price) if price.is_sign_negative() => {
                return Err(CatalogError::validation("Price must be greater than zero"));
            }
            Some(price) => price,
        };

        let raw_category = require(input.category_id, "Category id")?;
        let description = require(input.description, "Description")?;

        let raw_variants = input.variants.unwrap_or_default();
        if raw_variants.is_empty() {
            return Err(CatalogError::validation("Need at least 1 variant of a product"));
        }

        let category_id: Option<CategoryId> = raw_category.parse().ok();
        let category_exists = match category_id {
            Some(id) => self.repo.find_category(store_id, &id).await?.is_some(),
            None => false,
        };
        let Some(category_id) = category_id.filter(|_| category_exists) else {
            return Err(CatalogError::validation("Category not found for this store"));
        };

        let mut variants = Vec::with_capacity(raw_variants.len());
        for variant in raw_variants {
            let in_stock = variant.in_stock.unwrap_or(0);
            if in_stock < 0 {
                return Err(CatalogError::validation("Stock cannot be negative"));
            }
            variants.push(ProductVariant {
                size_id: self
                    .resolve(store_id, AttributeKind::Size, variant.size_id)
                    .await?,
                color_id: self
                    .resolve(store_id, AttributeKind::Color, variant.color_id)
                    .await?,
                in_stock,
            });
        }

        Ok(ProductFields {
            category_id,
            name,
            description,
            price,
            is_featured: input.is_featured.unwrap_or(false),
            is_archived: input.is_archived.unwrap_or(false),
            images,
            variants,
        })
    }

    /// Map a variant's size or color reference to an id of this store.
    ///
    /// A UUID must exist as is; anything else is looked up by name.
    async fn resolve(
        &self,
        store_id: &StoreId,
        kind: AttributeKind,
        reference: Option<String>,
    ) -> CatalogResult<AttributeId> {
        let label = match kind {
            AttributeKind::Size => "size",
            AttributeKind::Color => "color",
        };
        let Some(reference) = required(reference) else {
            return Err(CatalogError::validation(format!(
                "Variant {label} is required"
            )));
        };

        let found = match reference.parse::<AttributeId>() {
            Ok(id) => self.repo.find_attribute(store_id, kind, &id).await?,
            Err(_) => {
                self.repo
                    .find_attribute_by_name(store_id, kind, &reference)
                    .await?
            }
        };

        match found {
            Some(attribute) => Ok(attribute.attribute_id),
            None if reference.parse::<AttributeId>().is_ok() => Err(CatalogError::validation(
                format!("{kind} with id \"{reference}\" not found"),
            )),
            None => Err(CatalogError::validation(format!(
                "{kind} with name \"{reference}\" not found"
            ))),
        }
    }
}
