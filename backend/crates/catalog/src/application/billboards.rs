//! Billboard Service

use std::sync::Arc;

use kernel::id::{StoreId, UserId};

use crate::application::{owned_store, parse_id, require};
use crate::domain::entity::billboard::{Billboard, BillboardId};
use crate::domain::repository::{BillboardRepository, StoreRepository};
use crate::error::{CatalogError, CatalogResult};

#[derive(Debug, Clone, Default)]
pub struct BillboardInput {
    pub label: Option<String>,
    pub image_url: Option<String>,
}

impl BillboardInput {
    fn validate(self) -> CatalogResult<(String, String)> {
        Ok((
            require(self.label, "Label")?,
            require(self.image_url, "Image URL")?,
        ))
    }
}

pub struct BillboardService<R>
where
    R: StoreRepository + BillboardRepository,
{
    repo: Arc<R>,
}

impl<R> BillboardService<R>
where
    R: StoreRepository + BillboardRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, store_id: &StoreId) -> CatalogResult<Vec<Billboard>> {
        self.repo.list_billboards(store_id).await
    }

    pub async fn get(&self, store_id: &StoreId, id: &str) -> CatalogResult<Billboard> {
        let id: BillboardId = parse_id(id, "Billboard")?;
        self.repo
            .find_billboard(store_id, &id)
            .await?
            .ok_or(CatalogError::NotFound("Billboard"))
    }

    pub async fn create(
        &self,
        store_id: &StoreId,
        user_id: &UserId,
        input: BillboardInput,
    ) -> CatalogResult<Billboard> {
        owned_store(self.repo.as_ref(), store_id, user_id).await?;
        let (label, image_url) = input.validate()?;

        let billboard = Billboard::new(*store_id, label, image_url);
        self.repo.create_billboard(&billboard).await?;

        tracing::info!(store_id = %store_id, billboard_id = %billboard.billboard_id, "Billboard created");
        Ok(billboard)
    }

    pub async fn update(
        &self,
        store_id: &StoreId,
        user_id: &UserId,
        id: &str,
        input: BillboardInput,
    ) -> CatalogResult<Billboard> {
        owned_store(self.repo.as_ref(), store_id, user_id).await?;
        let mut billboard = self.get(store_id, id).await?;
        let (label, image_url) = input.validate()?;

        billboard.update(label, image_url);
        self.repo.update_billboard(&billboard).await?;
        Ok(billboard)
    }

    pub async fn delete(
        &self,
        store_id: &StoreId,
        user_id: &UserId,
        id: &str,
    ) -> CatalogResult<Billboard> {
        owned_store(self.repo.as_ref(), store_id, user_id).await?;
        let billboard = self.get(store_id, id).await?;

        if !self
            .repo
            .delete_billboard(store_id, &billboard.billboard_id)
            .await?
        {
            return Err(CatalogError::NotFound("Billboard"));
        }

        tracing::info!(store_id = %store_id, billboard_id = %billboard.billboard_id, "Billboard deleted");
        Ok(billboard)
    }
}
