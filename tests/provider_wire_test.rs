//! Wire-level tests: what the client actually puts on the query string.

mod common;

use std::sync::Arc;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use infospace::adapters::ReqwestHttpClient;
use infospace::config::AppConfig;
use infospace::models::{MediaType, SpaceLibraryFilters};
use infospace::provider::{SpaceLibraryClient, LAST_PAGE_SENTINEL};

use common::page_of;

async fn client_against(server: &MockServer) -> SpaceLibraryClient {
    let config = AppConfig::default().with_library_base_url(format!("{}/search", server.uri()));
    SpaceLibraryClient::new(Arc::new(ReqwestHttpClient::new()), config)
}

fn current_year() -> String {
    use chrono::Datelike;
    chrono::Utc::now().year().to_string()
}

#[tokio::test]
async fn default_page_sends_current_year_and_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/"))
        .and(query_param("year_start", current_year()))
        .and(query_param("page", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_of(1, "d")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_against(&server).await;
    client.get_library_default(4).await.unwrap();
}

#[tokio::test]
async fn filtered_page_sends_comma_joined_media_types() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/"))
        .and(query_param("q", "saturn"))
        .and(query_param("media_type", "image,video"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_of(1, "f")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_against(&server).await;
    let mut filters = SpaceLibraryFilters::new(1);
    filters.search_text = Some("saturn".to_string());
    filters.media_types = Some(vec![MediaType::Image, MediaType::Video]);
    client.get_library_filtered(&filters).await.unwrap();
}

#[tokio::test]
async fn last_page_probes_use_the_sentinel_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/"))
        .and(query_param("page", LAST_PAGE_SENTINEL))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_of(0, "last")))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_against(&server).await;
    client.get_last_page_default().await.unwrap();

    let mut filters = SpaceLibraryFilters::new(1);
    filters.page = LAST_PAGE_SENTINEL.parse().unwrap();
    filters.year_end = Some("1980".to_string());
    client.get_last_page_filtered(&filters).await.unwrap();
}
