mod core;
mod features;
mod modules;
mod shared;

use std::sync::Arc;

use axum::Router;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::config::Config;
use crate::core::middleware;
use crate::features::filter::{routes as filter_routes, FilterService};
use crate::features::regions::{routes as regions_routes, RegionDatasetService};
use crate::modules::storage::{FileStore, KvStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!("Configuration loaded successfully");

    // Initialize the persisted filter store
    let store: Arc<dyn KvStore> = Arc::new(FileStore::new(config.storage.path.clone()));
    tracing::info!("Filter store initialized at {}", config.storage.path.display());

    // Initialize Region Dataset Service
    let dataset_service = Arc::new(RegionDatasetService::new(config.dataset.path.clone()));
    tracing::info!(
        "Region dataset service initialized for {}",
        dataset_service.path().display()
    );

    // Initialize Filter Service
    let filter_service = Arc::new(FilterService::new(Arc::clone(&dataset_service), store));
    tracing::info!("Filter service initialized");

    // Simple health check endpoint
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    let app = Router::new()
        .merge(filter_routes::routes(filter_service))
        .merge(regions_routes::routes(dataset_service))
        .merge(health_route)
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));

    axum::serve(listener, app).await?;

    Ok(())
}
