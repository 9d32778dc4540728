use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::regions::services::{RegionDataset, RegionDatasetService};

/// Serve the region dataset as JSON, the static resource the page is
/// built from.
pub async fn get_dataset(
    State(service): State<Arc<RegionDatasetService>>,
) -> Result<Json<RegionDataset>> {
    let dataset = service.load().await?;
    Ok(Json(dataset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::regions::routes;
    use crate::shared::test_helpers::{sample_dataset, write_dataset_file};
    use axum::http::StatusCode;
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_dataset_endpoint_serves_the_parsed_dataset() {
        let path = write_dataset_file(&sample_dataset());
        let service = Arc::new(RegionDatasetService::new(path.clone()));
        let server = TestServer::new(routes::routes(service)).unwrap();

        let response = server.get("/data/regions.json").await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let dataset: RegionDataset = response.json();
        assert_eq!(dataset.provinces.len(), sample_dataset().provinces.len());
        assert_eq!(dataset.districts.len(), sample_dataset().districts.len());

        let _ = std::fs::remove_file(&path);
    }
}
