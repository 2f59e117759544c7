//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are the crates'
//! own error types, rendered through `kernel::error::app_error::AppError`.

mod config;

use std::net::SocketAddr;
use std::sync::Arc;

use auth::{
    AuthAppState, AuthGuardState, PgAuthRepository, admin_users_router, auth_router,
    route_guard,
};
use axum::{
    Router,
    http::{Method, header},
    middleware::from_fn_with_state,
};
use catalog::{CatalogAppState, PgCatalogRepository, admin_stores_router, catalog_router};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "shop_api=info,auth=info,catalog=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    let mailer = config.mailer()?;
    let auth_config = Arc::new(config.auth.clone());

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    tracing::info!(production = config.production, "Connected to database");

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(config.frontend_origins.clone())
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    let auth_state = AuthAppState::new(
        PgAuthRepository::new(pool.clone()),
        auth_config.clone(),
        mailer,
    );
    let catalog_state = CatalogAppState::new(PgCatalogRepository::new(pool));

    // Build router; the guard sees full paths, so it wraps everything
    let app = Router::new()
        .nest("/api/auth", auth_router(auth_state.clone()))
        .nest("/api/admin/users", admin_users_router(auth_state))
        .merge(admin_stores_router(catalog_state.clone()))
        .merge(catalog_router(catalog_state))
        .layer(from_fn_with_state(
            AuthGuardState::storefront(auth_config),
            route_guard,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
