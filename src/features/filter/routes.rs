use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::filter::handlers;
use crate::features::filter::services::FilterService;

/// Create routes for the filter feature
pub fn routes(service: Arc<FilterService>) -> Router {
    Router::new()
        .route("/", get(handlers::filter_page))
        .route("/reset", post(handlers::reset_filter))
        .route("/static/styles.css", get(handlers::stylesheet))
        .with_state(service)
}
