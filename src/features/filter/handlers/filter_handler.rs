use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse, Redirect},
};

use crate::core::error::Result;
use crate::features::filter::dtos::{FilterPageDto, FilterQuery};
use crate::features::filter::services::FilterService;
use crate::shared::templates::render_template;

/// Render the filter page for the current query state.
pub async fn filter_page(
    State(service): State<Arc<FilterService>>,
    Query(query): Query<FilterQuery>,
) -> Result<Html<String>> {
    let resolved = service.resolve(&query).await?;
    let page = FilterPageDto::from(&resolved);
    let html = render_template("filter.html.jinja", &page)?;
    Ok(Html(html))
}

/// Drop the persisted filter and return to the bare root path.
pub async fn reset_filter(State(service): State<Arc<FilterService>>) -> Result<Redirect> {
    service.clear_persisted()?;
    Ok(Redirect::to("/"))
}

/// The stylesheet is compiled into the binary; there is no asset pipeline.
pub async fn stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        include_str!("../../../../static/styles.css"),
    )
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use axum::http::StatusCode;
    use axum::Router;
    use axum_test::TestServer;

    use crate::features::filter::routes;
    use crate::features::filter::services::FilterService;
    use crate::features::regions::routes as regions_routes;
    use crate::features::regions::services::RegionDatasetService;
    use crate::modules::storage::{KvStore, MemoryStore};
    use crate::shared::constants::FILTER_STORE_KEY;
    use crate::shared::test_helpers::{sample_dataset, write_dataset_file};

    fn test_app() -> (TestServer, Arc<MemoryStore>, PathBuf) {
        let store = Arc::new(MemoryStore::new());
        let path = write_dataset_file(&sample_dataset());
        let dataset = Arc::new(RegionDatasetService::new(path.clone()));
        let service = Arc::new(FilterService::new(
            Arc::clone(&dataset),
            Arc::clone(&store) as Arc<dyn KvStore>,
        ));

        let app = Router::new()
            .merge(routes::routes(service))
            .merge(regions_routes::routes(dataset));

        (TestServer::new(app).unwrap(), store, path)
    }

    #[tokio::test]
    async fn test_selected_path_renders_breadcrumb_and_headline() {
        let (server, _store, path) = test_app();

        let response = server
            .get("/")
            .add_query_param("province", "11")
            .add_query_param("regency", "1101")
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body = response.text();

        // Order the trail inside the breadcrumb nav; the sidebar options
        // repeat the same names earlier in the page.
        let nav_start = body.find("<nav class=\"breadcrumb\">").unwrap();
        let nav = &body[nav_start..body.find("</nav>").unwrap()];
        let root = nav.find(">Indonesia<").unwrap();
        let province = nav.find(">Aceh<").unwrap();
        let regency = nav.find(">Kab. Aceh Selatan<").unwrap();
        assert!(root < province && province < regency);

        assert!(body.contains("<h2 class=\"hero-name\">Kab. Aceh Selatan</h2>"));

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_bare_page_prompts_for_a_selection() {
        let (server, _store, path) = test_app();

        let response = server.get("/").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body = response.text();
        assert!(body.contains("Silakan pilih wilayah dari"));
        // Dependent dropdowns start out disabled.
        assert!(body.contains(" disabled"));

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_selection_survives_a_reload_without_query_params() {
        let (server, _store, path) = test_app();

        server.get("/").add_query_param("province", "11").await;

        let response = server.get("/").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert!(response.text().contains("value=\"11\" selected"));

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_reset_clears_the_store_and_redirects_to_root() {
        let (server, store, path) = test_app();

        server.get("/").add_query_param("province", "11").await;
        assert!(store.get(FILTER_STORE_KEY).is_some());

        let response = server.post("/reset").await;
        assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), "/");
        assert!(store.get(FILTER_STORE_KEY).is_none());

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_unreachable_dataset_fails_the_page() {
        let store = Arc::new(MemoryStore::new());
        let dataset = Arc::new(RegionDatasetService::new(PathBuf::from(
            "/nonexistent/regions.json",
        )));
        let service = Arc::new(FilterService::new(
            dataset,
            Arc::clone(&store) as Arc<dyn KvStore>,
        ));
        let server = TestServer::new(routes::routes(service)).unwrap();

        let response = server.get("/").await;
        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_stylesheet_is_served() {
        let (server, _store, path) = test_app();

        let response = server.get("/static/styles.css").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert!(response.text().contains(".breadcrumb"));

        let _ = std::fs::remove_file(&path);
    }
}
