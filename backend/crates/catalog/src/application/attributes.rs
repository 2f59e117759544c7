//! Size and Color Service
//!
//! One service serves both kinds; the kind picks the table, the error
//! labels and the value rule.

use std::sync::Arc;

use kernel::id::{StoreId, UserId};

use crate::application::{owned_store, require};
use crate::domain::entity::attribute::{Attribute, AttributeId, AttributeKind};
use crate::domain::repository::{AttributeRepository, StoreRepository};
use crate::error::{CatalogError, CatalogResult};

#[derive(Debug, Clone, Default)]
pub struct AttributeInput {
    pub name: Option<String>,
    pub value: Option<String>,
}

impl AttributeInput {
    fn validate(self, kind: AttributeKind) -> CatalogResult<(String, String)> {
        let name = require(self.name, "Name")?;
        let value = require(self.value, "Value")?;
        kind.validate_value(&value)
            .map_err(CatalogError::validation)?;
        Ok((name, value))
    }
}

pub struct AttributeService<R>
where
    R: StoreRepository + AttributeRepository,
{
    repo: Arc<R>,
    kind: AttributeKind,
}

impl<R> AttributeService<R>
where
    R: StoreRepository + AttributeRepository,
{
    pub fn new(repo: Arc<R>, kind: AttributeKind) -> Self {
        Self { repo, kind }
    }

    fn not_found(&self) -> CatalogError {
        match self.kind {
            AttributeKind::Size => CatalogError::NotFound("Size"),
            AttributeKind::Color => CatalogError::NotFound("Color"),
        }
    }

    pub async fn list(&self, store_id: &StoreId) -> CatalogResult<Vec<Attribute>> {
        self.repo.list_attributes(store_id, self.kind).await
    }

    pub async fn get(&self, store_id: &StoreId, id: &str) -> CatalogResult<Attribute> {
        let id: AttributeId = id.trim().parse().map_err(|_| self.not_found())?;
        self.repo
            .find_attribute(store_id, self.kind, &id)
            .await?
            .ok_or_else(|| self.not_found())
    }

    pub async fn create(
        &self,
        store_id: &StoreId,
        user_id: &UserId,
        input: AttributeInput,
    ) -> CatalogResult<Attribute> {
        owned_store(self.repo.as_ref(), store_id, user_id).await?;
        let (name, value) = input.validate(self.kind)?;

        let attribute = Attribute::new(*store_id, self.kind, name, value);
        self.repo.create_attribute(&attribute).await?;

        tracing::info!(
            store_id = %store_id,
            kind = %self.kind,
            attribute_id = %attribute.attribute_id,
            "Attribute created"
        );
        Ok(attribute)
    }

    pub async fn update(
        &self,
        store_id: &StoreId,
        user_id: &UserId,
        id: &str,
        input: AttributeInput,
    ) -> CatalogResult<Attribute> {
        owned_store(self.repo.as_ref(), store_id, user_id).await?;
        let mut attribute = self.get(store_id, id).await?;
        let (name, value) = input.validate(self.kind)?;

        attribute.update(name, value);
        self.repo.update_attribute(&attribute).await?;
        Ok(attribute)
    }

    pub async fn delete(
        &self,
        store_id: &StoreId,
        user_id: &UserId,
        id: &str,
    ) -> CatalogResult<Attribute> {
        owned_store(self.repo.as_ref(), store_id, user_id).await?;
        let attribute = self.get(store_id, id).await?;

        if !self
            .repo
            .delete_attribute(store_id, self.kind, &attribute.attribute_id)
            .await?
        {
            return Err(self.not_found());
        }

        tracing::info!(
            store_id = %store_id,
            kind = %self.kind,
            attribute_id = %attribute.attribute_id,
            "Attribute deleted"
        );
        Ok(attribute)
    }
}
