//! Catalog client against a real HTTP server (wiremock), exercising the
//! production reqwest adapter end to end.

mod common;

use podex::adapters::ReqwestHttpClient;
use podex::api::{ApiError, CatalogClient, PageRequest};

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{detail_json, page_json};

async fn client_for(server: &MockServer) -> CatalogClient<ReqwestHttpClient> {
    CatalogClient::with_base_url(ReqwestHttpClient::new(), format!("{}/api/v2", server.uri()))
}

#[tokio::test]
async fn list_hits_the_pokemon_endpoint_with_limit_and_offset() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon"))
        .and(query_param("limit", "10"))
        .and(query_param("offset", "30"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(page_json(&["pidgey", "rattata"], true), "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let page = client
        .list(PageRequest { limit: 10, offset: 30 })
        .await
        .unwrap();

    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[0].name, "pidgey");
    assert!(page.has_more());
}

#[tokio::test]
async fn detail_is_looked_up_by_name_slug() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/pikachu"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(detail_json(25, "pikachu"), "application/json"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let detail = client.detail_by_name("pikachu").await.unwrap();

    assert_eq!(detail.id, 25);
    assert_eq!(detail.types_line(), "Electric");
}

#[tokio::test]
async fn detail_is_looked_up_by_numeric_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/133"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(detail_json(133, "eevee"), "application/json"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let detail = client.detail_by_id(133).await.unwrap();
    assert_eq!(detail.name, "eevee");
}

#[tokio::test]
async fn server_error_status_is_carried_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .list(PageRequest { limit: 10, offset: 0 })
        .await
        .unwrap_err();
    assert_eq!(err, ApiError::Status(500));
}

#[tokio::test]
async fn not_found_detail_maps_to_status_404() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/missingno"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.detail_by_name("missingno").await.unwrap_err();
    assert_eq!(err, ApiError::Status(404));
}

#[tokio::test]
async fn malformed_body_maps_to_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>nope</html>", "text/html"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .list(PageRequest { limit: 10, offset: 0 })
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}
