//! Repository Traits
//!
//! Every lookup below the store level is scoped by `store_id`: a record of
//! another store is reported as missing.

use kernel::id::{StoreId, UserId};

use crate::domain::entity::{
    attribute::{Attribute, AttributeId, AttributeKind},
    billboard::{Billboard, BillboardId},
    category::{Category, CategoryId},
    product::{Product, ProductFilter, ProductId},
    store::Store,
};
use crate::error::CatalogResult;

/// Store repository trait
#[trait_variant::make(StoreRepository: Send)]
pub trait LocalStoreRepository {
    async fn create_store(&self, store: &Store) -> CatalogResult<()>;

    async fn find_store(&self, store_id: &StoreId) -> CatalogResult<Option<Store>>;

    /// Oldest first
    async fn list_stores_by_owner(&self, user_id: &UserId) -> CatalogResult<Vec<Store>>;
}

/// Billboard repository trait
#[trait_variant::make(BillboardRepository: Send)]
pub trait LocalBillboardRepository {
    /// Newest first
    async fn list_billboards(&self, store_id: &StoreId) -> CatalogResult<Vec<Billboard>>;

    async fn find_billboard(
        &self,
        store_id: &StoreId,
        billboard_id: &BillboardId,
    ) -> CatalogResult<Option<Billboard>>;

    async fn create_billboard(&self, billboard: &Billboard) -> CatalogResult<()>;

    async fn update_billboard(&self, billboard: &Billboard) -> CatalogResult<()>;

    /// Fails with `Conflict` while categories still use it.
    async fn delete_billboard(
        &self,
        store_id: &StoreId,
        billboard_id: &BillboardId,
    ) -> CatalogResult<bool>;
}

/// Category repository trait
#[trait_variant::make(CategoryRepository: Send)]
pub trait LocalCategoryRepository {
    /// Newest first
    async fn list_categories(&self, store_id: &StoreId) -> CatalogResult<Vec<Category>>;

    async fn find_category(
        &self,
        store_id: &StoreId,
        category_id: &CategoryId,
    ) -> CatalogResult<Option<Category>>;

    async fn create_category(&self, category: &Category) -> CatalogResult<()>;

    async fn update_category(&self, category: &Category) -> CatalogResult<()>;

    /// Fails with `Conflict` while products still use it.
    async fn delete_category(
        &self,
        store_id: &StoreId,
        category_id: &CategoryId,
    ) -> CatalogResult<bool>;
}

/// Size and color repository trait
#[trait_variant::make(AttributeRepository: Send)]
pub trait LocalAttributeRepository {
    /// Newest first
    async fn list_attributes(
        &self,
        store_id: &StoreId,
        kind: AttributeKind,
    ) -> CatalogResult<Vec<Attribute>>;

    async fn find_attribute(
        &self,
        store_id: &StoreId,
        kind: AttributeKind,
        attribute_id: &AttributeId,
    ) -> CatalogResult<Option<Attribute>>;

    /// Exact name match within the store.
    async fn find_attribute_by_name(
        &self,
        store_id: &StoreId,
        kind: AttributeKind,
        name: &str,
    ) -> CatalogResult<Option<Attribute>>;

    async fn create_attribute(&self, attribute: &Attribute) -> CatalogResult<()>;

    async fn update_attribute(&self, attribute: &Attribute) -> CatalogResult<()>;

    /// Fails with `Conflict` while variants still use it.
    async fn delete_attribute(
        &self,
        store_id: &StoreId,
        kind: AttributeKind,
        attribute_id: &AttributeId,
    ) -> CatalogResult<bool>;
}

/// Product repository trait
#[trait_variant::make(ProductRepository: Send)]
pub trait LocalProductRepository {
    /// Matching products with images and variants, newest first.
    async fn list_products(
        &self,
        store_id: &StoreId,
        filter: &ProductFilter,
    ) -> CatalogResult<Vec<Product>>;

    /// Includes archived products.
    async fn find_product(
        &self,
        store_id: &StoreId,
        product_id: &ProductId,
    ) -> CatalogResult<Option<Product>>;

    /// Insert the product with its images and variants in one unit of work.
    async fn create_product(&self, product: &Product) -> CatalogResult<()>;

    /// Update and replace images and variants in one unit of work.
    async fn update_product(&self, product: &Product) -> CatalogResult<()>;

    async fn delete_product(&self, store_id: &StoreId, product_id: &ProductId)
    -> CatalogResult<bool>;
}
