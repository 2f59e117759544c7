//! Catalog Router
//!
//! Routes carry their full `/api/...` paths and are merged, not nested: the
//! store segment is a path parameter next to the static `/api/auth` and
//! `/api/admin` trees.

use axum::{Router, routing::get};

use crate::presentation::handlers::{self, CatalogAppState, CatalogStore, Colors, Sizes};

/// Per-store catalog routes, for any repository implementation
pub fn catalog_router<R>(state: CatalogAppState<R>) -> Router
where
    R: CatalogStore,
{
    Router::new()
        .route(
            "/api/{store_id}/billboards",
            get(handlers::list_billboards::<R>).post(handlers::create_billboard::<R>),
        )
        .route(
            "/api/{store_id}/billboards/{id}",
            get(handlers::get_billboard::<R>)
                .patch(handlers::update_billboard::<R>)
                .delete(handlers::delete_billboard::<R>),
        )
        .route(
            "/api/{store_id}/categories",
            get(handlers::list_categories::<R>).post(handlers::create_category::<R>),
        )
        .route(
            "/api/{store_id}/categories/{id}",
            get(handlers::get_category::<R>)
                .patch(handlers::update_category::<R>)
                .delete(handlers::delete_category::<R>),
        )
        .route(
            "/api/{store_id}/sizes",
            get(handlers::list_attributes::<R, Sizes>)
                .post(handlers::create_attribute::<R, Sizes>),
        )
        .route(
            "/api/{store_id}/sizes/{id}",
            get(handlers::get_attribute::<R, Sizes>)
                .patch(handlers::update_attribute::<R, Sizes>)
                .delete(handlers::delete_attribute::<R, Sizes>),
        )
        .route(
            "/api/{store_id}/colors",
            get(handlers::list_attributes::<R, Colors>)
                .post(handlers::create_attribute::<R, Colors>),
        )
        .route(
            "/api/{store_id}/colors/{id}",
            get(handlers::get_attribute::<R, Colors>)
                .patch(handlers::update_attribute::<R, Colors>)
                .delete(handlers::delete_attribute::<R, Colors>),
        )
        .route(
            "/api/{store_id}/products",
            get(handlers::list_products::<R>).post(handlers::create_product::<R>),
        )
        .route(
            "/api/{store_id}/products/{id}",
            get(handlers::get_product::<R>)
                .patch(handlers::update_product::<R>)
                .delete(handlers::delete_product::<R>),
        )
        .with_state(state)
}

/// `GET`/`POST /api/admin/stores`, merged like the catalog routes
pub fn admin_stores_router<R>(state: CatalogAppState<R>) -> Router
where
    R: CatalogStore,
{
    Router::new()
        .route(
            "/api/admin/stores",
            get(handlers::list_stores::<R>).post(handlers::create_store::<R>),
        )
        .with_state(state)
}
