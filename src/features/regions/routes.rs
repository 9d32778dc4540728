use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::regions::handlers;
use crate::features::regions::services::RegionDatasetService;

/// Create routes for the regions feature
pub fn routes(service: Arc<RegionDatasetService>) -> Router {
    Router::new()
        .route("/data/regions.json", get(handlers::get_dataset))
        .with_state(service)
}
