//! Category Service

use std::collections::HashMap;
use std::sync::Arc;

use kernel::id::{StoreId, UserId};

use crate::application::{owned_store, parse_id, require};
use crate::domain::entity::{
    billboard::{Billboard, BillboardId},
    category::{Category, CategoryId},
};
use crate::domain::repository::{BillboardRepository, CategoryRepository, StoreRepository};
use crate::error::{CatalogError, CatalogResult};

#[derive(Debug, Clone, Default)]
pub struct CategoryInput {
    pub name: Option<String>,
    pub billboard_id: Option<String>,
}

/// Category with its billboard, as the storefront renders it.
#[derive(Debug, Clone)]
pub struct CategoryView {
    pub category: Category,
    pub billboard: Option<Billboard>,
}

pub struct CategoryService<R>
where
    R: StoreRepository + BillboardRepository + CategoryRepository,
{
    repo: Arc<R>,
}

impl<R> CategoryService<R>
where
    R: StoreRepository + BillboardRepository + CategoryRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, store_id: &StoreId) -> CatalogResult<Vec<CategoryView>> {
        let categories = self.repo.list_categories(store_id).await?;
        let billboards: HashMap<BillboardId, Billboard> = self
            .repo
            .list_billboards(store_id)
            .await?
            .into_iter()
            .map(|b| (b.billboard_id, b))
            .collect();

        Ok(categories
            .into_iter()
            .map(|category| CategoryView {
                billboard: billboards.get(&category.billboard_id).cloned(),
                category,
            })
            .collect())
    }

    pub async fn get(&self, store_id: &StoreId, id: &str) -> CatalogResult<CategoryView> {
        let category = self.find(store_id, id).await?;
        let billboard = self
            .repo
            .find_billboard(store_id, &category.billboard_id)
            .await?;

        Ok(CategoryView {
            category,
            billboard,
        })
    }

    pub async fn create(
        &self,
        store_id: &StoreId,
        user_id: &UserId,
        input: CategoryInput,
    ) -> CatalogResult<Category> {
        owned_store(self.repo.as_ref(), store_id, user_id).await?;
        let (name, billboard_id) = self.validate(store_id, input).await?;

        let category = Category::new(*store_id, billboard_id, name);
        self.repo.create_category(&category).await?;

        tracing::info!(store_id = %store_id, category_id = %category.category_id, "Category created");
        Ok(category)
    }

    pub async fn update(
        &self,
        store_id: &StoreId,
        user_id: &UserId,
        id: &str,
        input: CategoryInput,
    ) -> CatalogResult<Category> {
        owned_store(self.repo.as_ref(), store_id, user_id).await?;
        let mut category = self.find(store_id, id).await?;
        let (name, billboard_id) = self.validate(store_id, input).await?;

        category.update(billboard_id, name);
        self.repo.update_category(&category).await?;
        Ok(category)
    }

    pub async fn delete(
        &self,
        store_id: &StoreId,
        user_id: &UserId,
        id: &str,
    ) -> CatalogResult<Category> {
        owned_store(self.repo.as_ref(), store_id, user_id).await?;
        let category = self.find(store_id, id).await?;

        if !self
            .repo
            .delete_category(store_id, &category.category_id)
            .await?
        {
            return Err(CatalogError::NotFound("Category"));
        }

        tracing::info!(store_id = %store_id, category_id = %category.category_id, "Category deleted");
        Ok(category)
    }

    async fn find(&self, store_id: &StoreId, id: &str) -> CatalogResult<Category> {
        let id: CategoryId = parse_id(id, "Category")?;
        self.repo
            .find_category(store_id, &id)
            .await?
            .ok_or(CatalogError::NotFound("Category"))
    }

    /// The billboard must belong to the same store.
    async fn validate(
        &self,
        store_id: &StoreId,
        input: CategoryInput,
    ) -> CatalogResult<(String, BillboardId)> {
        let name = require(input.name, "Name")?;
        let raw = require(input.billboard_id, "Billboard ID")?;

        let not_found = || CatalogError::validation(format!("Billboard with id \"{raw}\" not found"));
        let billboard_id: BillboardId = raw.parse().map_err(|_| not_found())?;
        if self
            .repo
            .find_billboard(store_id, &billboard_id)
            .await?
            .is_none()
        {
            return Err(not_found());
        }

        Ok((name, billboard_id))
    }
}
