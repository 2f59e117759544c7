//! HTTP Handlers
//!
//! Reads are public. Writes take [`CurrentUser`], so a request without a
//! session is rejected with 401 before any lookup happens.

use std::sync::Arc;

use auth::CurrentUser;
use axum::Json;
use axum::extract::{Path, Query, State};
use kernel::id::StoreId;

use crate::application::{
    AttributeService, BillboardService, CategoryService, ProductService, StoreService, parse_id,
};
use crate::domain::entity::attribute::AttributeKind;
use crate::domain::repository::{
    AttributeRepository, BillboardRepository, CategoryRepository, ProductRepository,
    StoreRepository,
};
use crate::error::CatalogResult;
use crate::presentation::dto::{
    AttributeRequest, AttributeResponse, BillboardRequest, BillboardResponse, CategoryRequest,
    CategoryResponse, ProductQuery, ProductRequest, ProductResponse, StoreRequest, StoreResponse,
};
use crate::presentation::json::CatalogJson;

/// Everything a repository needs to back the catalog routes.
pub trait CatalogStore:
    StoreRepository
    + BillboardRepository
    + CategoryRepository
    + AttributeRepository
    + ProductRepository
    + Clone
    + Send
    + Sync
    + 'static
{
}

impl<T> CatalogStore for T where
    T: StoreRepository
        + BillboardRepository
        + CategoryRepository
        + AttributeRepository
        + ProductRepository
        + Clone
        + Send
        + Sync
        + 'static
{
}

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogAppState<R>
where
    R: CatalogStore,
{
    pub repo: Arc<R>,
}

impl<R> CatalogAppState<R>
where
    R: CatalogStore,
{
    pub fn new(repo: R) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }
}

fn store_id(raw: &str) -> CatalogResult<StoreId> {
    parse_id(raw, "Store")
}

// ============================================================================
// Stores
// ============================================================================

/// GET /api/admin/stores
pub async fn list_stores<R>(
    State(state): State<CatalogAppState<R>>,
    CurrentUser(claims): CurrentUser,
) -> CatalogResult<Json<Vec<StoreResponse>>>
where
    R: CatalogStore,
{
    let stores = StoreService::new(state.repo.clone())
        .list_owned(&claims.user_id)
        .await?;
    Ok(Json(stores.iter().map(StoreResponse::from).collect()))
}

/// POST /api/admin/stores
pub async fn create_store<R>(
    State(state): State<CatalogAppState<R>>,
    CurrentUser(claims): CurrentUser,
    CatalogJson(req): CatalogJson<StoreRequest>,
) -> CatalogResult<Json<StoreResponse>>
where
    R: CatalogStore,
{
    let store = StoreService::new(state.repo.clone())
        .create(&claims.user_id, req.name)
        .await?;
    Ok(Json(StoreResponse::from(&store)))
}

// ============================================================================
// Billboards
// ============================================================================

/// GET /api/{store_id}/billboards
pub async fn list_billboards<R>(
    State(state): State<CatalogAppState<R>>,
    Path(store): Path<String>,
) -> CatalogResult<Json<Vec<BillboardResponse>>>
where
    R: CatalogStore,
{
    let billboards = BillboardService::new(state.repo.clone())
        .list(&store_id(&store)?)
        .await?;
    Ok(Json(billboards.iter().map(BillboardResponse::from).collect()))
}

/// GET /api/{store_id}/billboards/{id}
pub async fn get_billboard<R>(
    State(state): State<CatalogAppState<R>>,
    Path((store, id)): Path<(String, String)>,
) -> CatalogResult<Json<BillboardResponse>>
where
    R: CatalogStore,
{
    let billboard = BillboardService::new(state.repo.clone())
        .get(&store_id(&store)?, &id)
        .await?;
    Ok(Json(BillboardResponse::from(&billboard)))
}

/// POST /api/{store_id}/billboards
pub async fn create_billboard<R>(
    State(state): State<CatalogAppState<R>>,
    CurrentUser(claims): CurrentUser,
    Path(store): Path<String>,
    CatalogJson(req): CatalogJson<BillboardRequest>,
) -> CatalogResult<Json<BillboardResponse>>
where
    R: CatalogStore,
{
    let billboard = BillboardService::new(state.repo.clone())
        .create(&store_id(&store)?, &claims.user_id, req.into())
        .await?;
    Ok(Json(BillboardResponse::from(&billboard)))
}

/// PATCH /api/{store_id}/billboards/{id}
pub async fn update_billboard<R>(
    State(state): State<CatalogAppState<R>>,
    CurrentUser(claims): CurrentUser,
    Path((store, id)): Path<(String, String)>,
    CatalogJson(req): CatalogJson<BillboardRequest>,
) -> CatalogResult<Json<BillboardResponse>>
where
    R: CatalogStore,
{
    let billboard = BillboardService::new(state.repo.clone())
        .update(&store_id(&store)?, &claims.user_id, &id, req.into())
        .await?;
    Ok(Json(BillboardResponse::from(&billboard)))
}

/// DELETE /api/{store_id}/billboards/{id}
pub async fn delete_billboard<R>(
    State(state): State<CatalogAppState<R>>,
    CurrentUser(claims): CurrentUser,
    Path((store, id)): Path<(String, String)>,
) -> CatalogResult<Json<BillboardResponse>>
where
    R: CatalogStore,
{
    let billboard = BillboardService::new(state.repo.clone())
        .delete(&store_id(&store)?, &claims.user_id, &id)
        .await?;
    Ok(Json(BillboardResponse::from(&billboard)))
}

// ============================================================================
// Categories
// ============================================================================

/// GET /api/{store_id}/categories
pub async fn list_categories<R>(
    State(state): State<CatalogAppState<R>>,
    Path(store): Path<String>,
) -> CatalogResult<Json<Vec<CategoryResponse>>>
where
    R: CatalogStore,
{
    let categories = CategoryService::new(state.repo.clone())
        .list(&store_id(&store)?)
        .await?;
    Ok(Json(categories.iter().map(CategoryResponse::from).collect()))
}

/// GET /api/{store_id}/categories/{id}
pub async fn get_category<R>(
    State(state): State<CatalogAppState<R>>,
    Path((store, id)): Path<(String, String)>,
) -> CatalogResult<Json<CategoryResponse>>
where
    R: CatalogStore,
{
    let view = CategoryService::new(state.repo.clone())
        .get(&store_id(&store)?, &id)
        .await?;
    Ok(Json(CategoryResponse::from(&view)))
}

/// POST /api/{store_id}/categories
pub async fn create_category<R>(
    State(state): State<CatalogAppState<R>>,
    CurrentUser(claims): CurrentUser,
    Path(store): Path<String>,
    CatalogJson(req): CatalogJson<CategoryRequest>,
) -> CatalogResult<Json<CategoryResponse>>
where
    R: CatalogStore,
{
    let category = CategoryService::new(state.repo.clone())
        .create(&store_id(&store)?, &claims.user_id, req.into())
        .await?;
    Ok(Json(CategoryResponse::from(&category)))
}

/// PATCH /api/{store_id}/categories/{id}
pub async fn update_category<R>(
    State(state): State<CatalogAppState<R>>,
    CurrentUser(claims): CurrentUser,
    Path((store, id)): Path<(String, String)>,
    CatalogJson(req): CatalogJson<CategoryRequest>,
) -> CatalogResult<Json<CategoryResponse>>
where
    R: CatalogStore,
{
    let category = CategoryService::new(state.repo.clone())
        .update(&store_id(&store)?, &claims.user_id, &id, req.into())
        .await?;
    Ok(Json(CategoryResponse::from(&category)))
}

/// DELETE /api/{store_id}/categories/{id}
pub async fn delete_category<R>(
    State(state): State<CatalogAppState<R>>,
    CurrentUser(claims): CurrentUser,
    Path((store, id)): Path<(String, String)>,
) -> CatalogResult<Json<CategoryResponse>>
where
    R: CatalogStore,
{
    let category = CategoryService::new(state.repo.clone())
        .delete(&store_id(&store)?, &claims.user_id, &id)
        .await?;
    Ok(Json(CategoryResponse::from(&category)))
}

// ============================================================================
// Sizes and Colors
// ============================================================================

/// Selects the attribute kind a route serves.
pub trait AttributeRoute: Send + Sync + 'static {
    const KIND: AttributeKind;
}

/// `/api/{store_id}/sizes`
pub struct Sizes;

impl AttributeRoute for Sizes {
    const KIND: AttributeKind = AttributeKind::Size;
}

/// `/api/{store_id}/colors`
pub struct Colors;

impl AttributeRoute for Colors {
    const KIND: AttributeKind = AttributeKind::Color;
}

fn attributes<R, K>(state: &CatalogAppState<R>) -> AttributeService<R>
where
    R: CatalogStore,
    K: AttributeRoute,
{
    AttributeService::new(state.repo.clone(), K::KIND)
}

/// GET /api/{store_id}/{sizes,colors}
pub async fn list_attributes<R, K>(
    State(state): State<CatalogAppState<R>>,
    Path(store): Path<String>,
) -> CatalogResult<Json<Vec<AttributeResponse>>>
where
    R: CatalogStore,
    K: AttributeRoute,
{
    let list = attributes::<R, K>(&state).list(&store_id(&store)?).await?;
    Ok(Json(list.iter().map(AttributeResponse::from).collect()))
}

/// GET /api/{store_id}/{sizes,colors}/{id}
pub async fn get_attribute<R, K>(
    State(state): State<CatalogAppState<R>>,
    Path((store, id)): Path<(String, String)>,
) -> CatalogResult<Json<AttributeResponse>>
where
    R: CatalogStore,
    K: AttributeRoute,
{
    let attribute = attributes::<R, K>(&state)
        .get(&store_id(&store)?, &id)
        .await?;
    Ok(Json(AttributeResponse::from(&attribute)))
}

/// POST /api/{store_id}/{sizes,colors}
pub async fn create_attribute<R, K>(
    State(state): State<CatalogAppState<R>>,
    CurrentUser(claims): CurrentUser,
    Path(store): Path<String>,
    CatalogJson(req): CatalogJson<AttributeRequest>,
) -> CatalogResult<Json<AttributeResponse>>
where
    R: CatalogStore,
    K: AttributeRoute,
{
    let attribute = attributes::<R, K>(&state)
        .create(&store_id(&store)?, &claims.user_id, req.into())
        .await?;
    Ok(Json(AttributeResponse::from(&attribute)))
}

/// PATCH /api/{store_id}/{sizes,colors}/{id}
pub async fn update_attribute<R, K>(
    State(state): State<CatalogAppState<R>>,
    CurrentUser(claims): CurrentUser,
    Path((store, id)): Path<(String, String)>,
    CatalogJson(req): CatalogJson<AttributeRequest>,
) -> CatalogResult<Json<AttributeResponse>>
where
    R: CatalogStore,
    K: AttributeRoute,
{
    let attribute = attributes::<R, K>(&state)
        .update(&store_id(&store)?, &claims.user_id, &id, req.into())
        .await?;
    Ok(Json(AttributeResponse::from(&attribute)))
}

/// DELETE /api/{store_id}/{sizes,colors}/{id}
pub async fn delete_attribute<R, K>(
    State(state): State<CatalogAppState<R>>,
    CurrentUser(claims): CurrentUser,
    Path((store, id)): Path<(String, String)>,
) -> CatalogResult<Json<AttributeResponse>>
where
    R: CatalogStore,
    K: AttributeRoute,
{
    let attribute = attributes::<R, K>(&state)
        .delete(&store_id(&store)?, &claims.user_id, &id)
        .await?;
    Ok(Json(AttributeResponse::from(&attribute)))
}

// ============================================================================
// Products
// ============================================================================

/// GET /api/{store_id}/products
pub async fn list_products<R>(
    State(state): State<CatalogAppState<R>>,
    Path(store): Path<String>,
    Query(query): Query<ProductQuery>,
) -> CatalogResult<Json<Vec<ProductResponse>>>
where
    R: CatalogStore,
{
    let products = ProductService::new(state.repo.clone())
        .list(&store_id(&store)?, query.into())
        .await?;
    Ok(Json(products.iter().map(ProductResponse::from).collect()))
}

/// GET /api/{store_id}/products/{id}
///
/// The owner's session, when present, unlocks archived products.
pub async fn get_product<R>(
    State(state): State<CatalogAppState<R>>,
    viewer: Option<CurrentUser>,
    Path((store, id)): Path<(String, String)>,
) -> CatalogResult<Json<ProductResponse>>
where
    R: CatalogStore,
{
    let viewer = viewer.map(|CurrentUser(claims)| claims.user_id);
    let product = ProductService::new(state.repo.clone())
        .get(&store_id(&store)?, &id, viewer.as_ref())
        .await?;
    Ok(Json(ProductResponse::from(&product)))
}

/// POST /api/{store_id}/products
pub async fn create_product<R>(
    State(state): State<CatalogAppState<R>>,
    CurrentUser(claims): CurrentUser,
    Path(store): Path<String>,
    CatalogJson(req): CatalogJson<ProductRequest>,
) -> CatalogResult<Json<ProductResponse>>
where
    R: CatalogStore,
{
    let product = ProductService::new(state.repo.clone())
        .create(&store_id(&store)?, &claims.user_id, req.into())
        .await?;
    Ok(Json(ProductResponse::from(&product)))
}

/// PATCH /api/{store_id}/products/{id}
pub async fn update_product<R>(
    State(state): State<CatalogAppState<R>>,
    CurrentUser(claims): CurrentUser,
    Path((store, id)): Path<(String, String)>,
    CatalogJson(req): CatalogJson<ProductRequest>,
) -> CatalogResult<Json<ProductResponse>>
where
    R: CatalogStore,
{
    let product = ProductService::new(state.repo.clone())
        .update(&store_id(&store)?, &claims.user_id, &id, req.into())
        .await?;
    Ok(Json(ProductResponse::from(&product)))
}

/// DELETE /api/{store_id}/products/{id}
pub async fn delete_product<R>(
    State(state): State<CatalogAppState<R>>,
    CurrentUser(claims): CurrentUser,
    Path((store, id)): Path<(String, String)>,
) -> CatalogResult<Json<ProductResponse>>
where
    R: CatalogStore,
{
    let product = ProductService::new(state.repo.clone())
        .delete(&store_id(&store)?, &claims.user_id, &id)
        .await?;
    Ok(Json(ProductResponse::from(&product)))
}
