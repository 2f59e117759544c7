//! Store Service

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::require;
use crate::domain::entity::store::Store;
use crate::domain::repository::StoreRepository;
use crate::error::CatalogResult;

pub struct StoreService<R>
where
    R: StoreRepository,
{
    repo: Arc<R>,
}

impl<R> StoreService<R>
where
    R: StoreRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list_owned(&self, user_id: &UserId) -> CatalogResult<Vec<Store>> {
        self.repo.list_stores_by_owner(user_id).await
    }

    pub async fn create(&self, user_id: &UserId, name: Option<String>) -> CatalogResult<Store> {
        let store = Store::new(*user_id, require(name, "Name")?);
        self.repo.create_store(&store).await?;

        tracing::info!(store_id = %store.store_id, user_id = %user_id, "Store created");
        Ok(store)
    }
}
