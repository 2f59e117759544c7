//! In-Memory Repository
//!
//! Process-local tables with the same reference rules as the database:
//! a record still used elsewhere cannot be deleted.

use std::sync::{Arc, Mutex, MutexGuard};

use kernel::id::{StoreId, UserId};

use crate::domain::entity::{
    attribute::{Attribute, AttributeId, AttributeKind},
    billboard::{Billboard, BillboardId},
    category::{Category, CategoryId},
    product::{Product, ProductFilter, ProductId},
    store::Store,
};
use crate::domain::repository::{
    AttributeRepository, BillboardRepository, CategoryRepository, ProductRepository,
    StoreRepository,
};
use crate::error::{CatalogError, CatalogResult};

const IN_USE: &str = "Resource is still in use";

// Rows are kept in insertion order; listings walk them newest first.
#[derive(Default)]
struct Tables {
    stores: Vec<Store>,
    billboards: Vec<Billboard>,
    categories: Vec<Category>,
    attributes: Vec<Attribute>,
    products: Vec<Product>,
}

/// Shared in-memory catalog. Clones see the same data.
#[derive(Clone, Default)]
pub struct MemoryCatalogRepository {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> CatalogResult<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| CatalogError::Internal("memory repository poisoned".to_string()))
    }
}

/// Replace the row `same` identifies. Returns whether one was found.
fn replace<T: Clone>(rows: &mut [T], row: &T, same: impl Fn(&T) -> bool) -> bool {
    match rows.iter_mut().find(|r| same(r)) {
        Some(stored) => {
            *stored = row.clone();
            true
        }
        None => false,
    }
}

fn newest_first<T: Clone>(rows: &[T], keep: impl Fn(&T) -> bool) -> Vec<T> {
    rows.iter().rev().filter(|r| keep(r)).cloned().collect()
}

impl StoreRepository for MemoryCatalogRepository {
    async fn create_store(&self, store: &Store) -> CatalogResult<()> {
        self.lock()?.stores.push(store.clone());
        Ok(())
    }

    async fn find_store(&self, store_id: &StoreId) -> CatalogResult<Option<Store>> {
        Ok(self
            .lock()?
            .stores
            .iter()
            .find(|s| &s.store_id == store_id)
            .cloned())
    }

    async fn list_stores_by_owner(&self, user_id: &UserId) -> CatalogResult<Vec<Store>> {
        Ok(self
            .lock()?
            .stores
            .iter()
            .filter(|s| s.is_owned_by(user_id))
            .cloned()
            .collect())
    }
}

impl BillboardRepository for MemoryCatalogRepository {
    async fn list_billboards(&self, store_id: &StoreId) -> CatalogResult<Vec<Billboard>> {
        Ok(newest_first(&self.lock()?.billboards, |b| {
            &b.store_id == store_id
        }))
    }

    async fn find_billboard(
        &self,
        store_id: &StoreId,
        billboard_id: &BillboardId,
    ) -> CatalogResult<Option<Billboard>> {
        Ok(self
            .lock()?
            .billboards
            .iter()
            .find(|b| &b.store_id == store_id && &b.billboard_id == billboard_id)
            .cloned())
    }

    async fn create_billboard(&self, billboard: &Billboard) -> CatalogResult<()> {
        self.lock()?.billboards.push(billboard.clone());
        Ok(())
    }

    async fn update_billboard(&self, billboard: &Billboard) -> CatalogResult<()> {
        replace(&mut self.lock()?.billboards, billboard, |b| {
            b.billboard_id == billboard.billboard_id
        });
        Ok(())
    }

    async fn delete_billboard(
        &self,
        store_id: &StoreId,
        billboard_id: &BillboardId,
    ) -> CatalogResult<bool> {
        let mut tables = self.lock()?;
        if tables
            .categories
            .iter()
            .any(|c| &c.billboard_id == billboard_id)
        {
            return Err(CatalogError::Conflict(IN_USE.to_string()));
        }
        let before = tables.billboards.len();
        tables
            .billboards
            .retain(|b| !(&b.store_id == store_id && &b.billboard_id == billboard_id));
        Ok(tables.billboards.len() < before)
    }
}

impl CategoryRepository for MemoryCatalogRepository {
    async fn list_categories(&self, store_id: &StoreId) -> CatalogResult<Vec<Category>> {
        Ok(newest_first(&self.lock()?.categories, |c| {
            &c.store_id == store_id
        }))
    }

    async fn find_category(
        &self,
        store_id: &StoreId,
        category_id: &CategoryId,
    ) -> CatalogResult<Option<Category>> {
        Ok(self
            .lock()?
            .categories
            .iter()
            .find(|c| &c.store_id == store_id && &c.category_id == category_id)
            .cloned())
    }

    async fn create_category(&self, category: &Category) -> CatalogResult<()> {
        self.lock()?.categories.push(category.clone());
        Ok(())
    }

    async fn update_category(&self, category: &Category) -> CatalogResult<()> {
        replace(&mut self.lock()?.categories, category, |c| {
            c.category_id == category.category_id
        });
        Ok(())
    }

    async fn delete_category(
        &self,
        store_id: &StoreId,
        category_id: &CategoryId,
    ) -> CatalogResult<bool> {
        let mut tables = self.lock()?;
        if tables
            .products
            .iter()
            .any(|p| &p.category_id == category_id)
        {
            return Err(CatalogError::Conflict(IN_USE.to_string()));
        }
        let before = tables.categories.len();
        tables
            .categories
            .retain(|c| !(&c.store_id == store_id && &c.category_id == category_id));
        Ok(tables.categories.len() < before)
    }
}

impl AttributeRepository for MemoryCatalogRepository {
    async fn list_attributes(
        &self,
        store_id: &StoreId,
        kind: AttributeKind,
    ) -> CatalogResult<Vec<Attribute>> {
        Ok(newest_first(&self.lock()?.attributes, |a| {
            &a.store_id == store_id && a.kind == kind
        }))
    }

    async fn find_attribute(
        &self,
        store_id: &StoreId,
        kind: AttributeKind,
        attribute_id: &AttributeId,
    ) -> CatalogResult<Option<Attribute>> {
        Ok(self
            .lock()?
            .attributes
            .iter()
            .find(|a| &a.store_id == store_id && a.kind == kind && &a.attribute_id == attribute_id)
            .cloned())
    }

    async fn find_attribute_by_name(
        &self,
        store_id: &StoreId,
        kind: AttributeKind,
        name: &str,
    ) -> CatalogResult<Option<Attribute>> {
        Ok(self
            .lock()?
            .attributes
            .iter()
            .find(|a| &a.store_id == store_id && a.kind == kind && a.name == name)
            .cloned())
    }

    async fn create_attribute(&self, attribute: &Attribute) -> CatalogResult<()> {
        self.lock()?.attributes.push(attribute.clone());
        Ok(())
    }

    async fn update_attribute(&self, attribute: &Attribute) -> CatalogResult<()> {
        replace(&mut self.lock()?.attributes, attribute, |a| {
            a.attribute_id == attribute.attribute_id
        });
        Ok(())
    }

    async fn delete_attribute(
        &self,
        store_id: &StoreId,
        kind: AttributeKind,
        attribute_id: &AttributeId,
    ) -> CatalogResult<bool> {
        let mut tables = self.lock()?;
        let in_use = tables.products.iter().flat_map(|p| &p.variants).any(|v| match kind {
            AttributeKind::Size => &v.size_id == attribute_id,
            AttributeKind::Color => &v.color_id == attribute_id,
        });
        if in_use {
            return Err(CatalogError::Conflict(IN_USE.to_string()));
        }
        let before = tables.attributes.len();
        tables.attributes.retain(|a| {
            !(&a.store_id == store_id && a.kind == kind && &a.attribute_id == attribute_id)
        });
        Ok(tables.attributes.len() < before)
    }
}

impl ProductRepository for MemoryCatalogRepository {
    async fn list_products(
        &self,
        store_id: &StoreId,
        filter: &ProductFilter,
    ) -> CatalogResult<Vec<Product>> {
        Ok(newest_first(&self.lock()?.products, |p| {
            &p.store_id == store_id && filter.matches(p)
        }))
    }

    async fn find_product(
        &self,
        store_id: &StoreId,
        product_id: &ProductId,
    ) -> CatalogResult<Option<Product>> {
        Ok(self
            .lock()?
            .products
            .iter()
            .find(|p| &p.store_id == store_id && &p.product_id == product_id)
            .cloned())
    }

    async fn create_product(&self, product: &Product) -> CatalogResult<()> {
        self.lock()?.products.push(product.clone());
        Ok(())
    }

    async fn update_product(&self, product: &Product) -> CatalogResult<()> {
        replace(&mut self.lock()?.products, product, |p| {
            p.product_id == product.product_id
        });
        Ok(())
    }

    async fn delete_product(
        &self,
        store_id: &StoreId,
        product_id: &ProductId,
    ) -> CatalogResult<bool> {
        let mut tables = self.lock()?;
        let before = tables.products.len();
        tables
            .products
            .retain(|p| !(&p.store_id == store_id && &p.product_id == product_id));
        Ok(tables.products.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Store {
        Store::new(UserId::new(), "Shop".to_string())
    }

    #[tokio::test]
    async fn test_lookups_are_scoped_by_store() {
        let repo = MemoryCatalogRepository::new();
        let (a, b) = (store(), store());
        repo.create_store(&a).await.unwrap();
        repo.create_store(&b).await.unwrap();

        let billboard = Billboard::new(a.store_id, "Summer".into(), "https://img/1".into());
        repo.create_billboard(&billboard).await.unwrap();

        assert!(
            repo.find_billboard(&a.store_id, &billboard.billboard_id)
                .await
                .unwrap()
                .is_some()
        );
        assert!(
            repo.find_billboard(&b.store_id, &billboard.billboard_id)
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            !repo
                .delete_billboard(&b.store_id, &billboard.billboard_id)
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_listing_is_newest_first() {
        let repo = MemoryCatalogRepository::new();
        let s = store();
        for label in ["first", "second", "third"] {
            let b = Billboard::new(s.store_id, label.into(), "https://img".into());
            repo.create_billboard(&b).await.unwrap();
        }

        let labels: Vec<_> = repo
            .list_billboards(&s.store_id)
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.label)
            .collect();
        assert_eq!(labels, ["third", "second", "first"]);
    }

    #[tokio::test]
    async fn test_referenced_billboard_cannot_be_deleted() {
        let repo = MemoryCatalogRepository::new();
        let s = store();
        let billboard = Billboard::new(s.store_id, "Summer".into(), "https://img/1".into());
        repo.create_billboard(&billboard).await.unwrap();
        let category = Category::new(s.store_id, billboard.billboard_id, "Shirts".into());
        repo.create_category(&category).await.unwrap();

        let err = repo
            .delete_billboard(&s.store_id, &billboard.billboard_id)
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Conflict(_)));

        assert!(
            repo.delete_category(&s.store_id, &category.category_id)
                .await
                .unwrap()
        );
        assert!(
            repo.delete_billboard(&s.store_id, &billboard.billboard_id)
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_sizes_and_colors_are_separate() {
        let repo = MemoryCatalogRepository::new();
        let s = store();
        let size = Attribute::new(s.store_id, AttributeKind::Size, "Large".into(), "L".into());
        repo.create_attribute(&size).await.unwrap();

        assert!(
            repo.find_attribute_by_name(&s.store_id, AttributeKind::Size, "Large")
                .await
                .unwrap()
                .is_some()
        );
        assert!(
            repo.find_attribute(&s.store_id, AttributeKind::Color, &size.attribute_id)
                .await
                .unwrap()
                .is_none()
        );
    }
}
