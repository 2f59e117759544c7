//! Application Layer
//!
//! One service per catalog resource. Writes check, in order: the store
//! exists, the caller owns it, the target record exists, the input is valid.

use std::str::FromStr;

use kernel::id::{Id, StoreId, UserId};
pub(crate) use kernel::text::required;

use crate::domain::entity::store::Store;
use crate::domain::repository::StoreRepository;
use crate::error::{CatalogError, CatalogResult};

pub mod attributes;
pub mod billboards;
pub mod categories;
pub mod products;
pub mod stores;

pub use attributes::{AttributeInput, AttributeService};
pub use billboards::{BillboardInput, BillboardService};
pub use categories::{CategoryInput, CategoryService, CategoryView};
pub use products::{ProductInput, ProductListQuery, ProductService, VariantInput};
pub use stores::StoreService;

/// Trimmed value or a `"<label> is required"` validation error.
pub(crate) fn require(value: Option<String>, label: &str) -> CatalogResult<String> {
    required(value).ok_or_else(|| CatalogError::validation(format!("{label} is required")))
}

/// Parse a path id. Anything unparseable cannot exist either.
pub fn parse_id<T>(raw: &str, what: &'static str) -> CatalogResult<Id<T>> {
    Id::from_str(raw.trim()).map_err(|_| CatalogError::NotFound(what))
}

/// The store, provided `user_id` owns it.
pub(crate) async fn owned_store<S>(
    stores: &S,
    store_id: &StoreId,
    user_id: &UserId,
) -> CatalogResult<Store>
where
    S: StoreRepository,
{
    let store = stores
        .find_store(store_id)
        .await?
        .ok_or(CatalogError::NotFound("Store"))?;

    if !store.is_owned_by(user_id) {
        tracing::warn!(store_id = %store_id, user_id = %user_id, "Write on a foreign store");
        return Err(CatalogError::Forbidden);
    }

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::billboard::BillboardId;

    #[test]
    fn test_require_messages() {
        assert_eq!(require(Some(" x ".into()), "Name").unwrap(), "x");
        assert_eq!(
            require(Some("  ".into()), "Label").unwrap_err().to_string(),
            "Label is required"
        );
    }

    #[test]
    fn test_parse_id() {
        let id = BillboardId::new();
        let parsed: BillboardId = parse_id(&id.to_string(), "Billboard").unwrap();
        assert_eq!(parsed, id);
        assert!(matches!(
            parse_id::<crate::domain::entity::billboard::BillboardMarker>("nope", "Billboard"),
            Err(CatalogError::NotFound("Billboard"))
        ));
    }
}
