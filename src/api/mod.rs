//! Catalog API client.
//!
//! Typed client for the PokeAPI-compatible catalog: a paginated list
//! endpoint and a path-parameterized detail endpoint. Runs on top of the
//! [`HttpClient`] trait so tests can substitute a scripted transport.

pub mod models;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::traits::{HttpClient, HttpError, Response};
use models::{PokemonDetail, PokemonPage};

/// Default base URL for the public PokeAPI.
pub const POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// The next slice of the catalog to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Number of entries to fetch, always > 0
    pub limit: u32,
    /// Number of entries already accumulated
    pub offset: u32,
}

/// Errors surfaced by catalog fetches.
///
/// All three are terminal for the attempt that produced them; retry happens
/// only through an explicit re-trigger by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Connectivity, DNS or timeout at the transport layer
    #[error("network error: {0}")]
    Transport(String),

    /// Non-2xx HTTP status, code kept for display
    #[error("server error with code {0}")]
    Status(u16),

    /// Response body did not match the expected shape
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl From<HttpError> for ApiError {
    fn from(err: HttpError) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// Client for the catalog endpoints.
#[derive(Debug, Clone)]
pub struct CatalogClient<C> {
    base_url: String,
    http: C,
}

impl<C: HttpClient> CatalogClient<C> {
    /// Create a client against the public PokeAPI.
    pub fn new(http: C) -> Self {
        Self::with_base_url(http, POKEAPI_BASE_URL)
    }

    /// Create a client against a custom base URL (local mirrors, tests).
    pub fn with_base_url(http: C, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one page of the catalog list.
    pub async fn list(&self, page: PageRequest) -> Result<PokemonPage, ApiError> {
        let url = format!("{}/pokemon", self.base_url);
        let query = [
            ("limit", page.limit.to_string()),
            ("offset", page.offset.to_string()),
        ];
        tracing::debug!(limit = page.limit, offset = page.offset, "fetching catalog page");
        let response = self.http.get(&url, &query).await?;
        Self::decode(response)
    }

    /// Fetch detail for an entry by its name slug.
    pub async fn detail_by_name(&self, name: &str) -> Result<PokemonDetail, ApiError> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        tracing::debug!(name, "fetching detail");
        let response = self.http.get(&url, &[]).await?;
        Self::decode(response)
    }

    /// Fetch detail for an entry by its numeric id.
    pub async fn detail_by_id(&self, id: u32) -> Result<PokemonDetail, ApiError> {
        let url = format!("{}/pokemon/{}", self.base_url, id);
        tracing::debug!(id, "fetching detail");
        let response = self.http.get(&url, &[]).await?;
        Self::decode(response)
    }

    fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.is_success() {
            return Err(ApiError::Status(response.status));
        }
        response.json().map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use bytes::Bytes;

    fn page_body() -> &'static str {
        r#"{"count": 2, "next": null, "previous": null,
            "results": [
                {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
                {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"}
            ]}"#
    }

    #[tokio::test]
    async fn list_sends_limit_and_offset_query() {
        let mock = MockHttpClient::new();
        mock.enqueue(
            "https://pokeapi.co/api/v2/pokemon",
            MockResponse::Success(Response::new(200, Bytes::from(page_body()))),
        );
        let client = CatalogClient::new(mock.clone());

        let page = client.list(PageRequest { limit: 10, offset: 20 }).await.unwrap();
        assert_eq!(page.results.len(), 2);

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "https://pokeapi.co/api/v2/pokemon");
        assert_eq!(
            requests[0].query,
            vec![
                ("limit".to_string(), "10".to_string()),
                ("offset".to_string(), "20".to_string())
            ]
        );
    }

    #[tokio::test]
    async fn non_2xx_maps_to_status_error() {
        let mock = MockHttpClient::new();
        mock.enqueue(
            "https://pokeapi.co/api/v2/pokemon",
            MockResponse::Success(Response::new(500, Bytes::from("oops"))),
        );
        let client = CatalogClient::new(mock);

        let err = client.list(PageRequest { limit: 10, offset: 0 }).await.unwrap_err();
        assert_eq!(err, ApiError::Status(500));
    }

    #[tokio::test]
    async fn garbage_body_maps_to_decode_error() {
        let mock = MockHttpClient::new();
        mock.enqueue(
            "https://pokeapi.co/api/v2/pokemon",
            MockResponse::Success(Response::new(200, Bytes::from("not json"))),
        );
        let client = CatalogClient::new(mock);

        let err = client.list(PageRequest { limit: 10, offset: 0 }).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn transport_failure_maps_to_transport_error() {
        let mock = MockHttpClient::new();
        mock.enqueue(
            "https://pokeapi.co/api/v2/pokemon",
            MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
        );
        let client = CatalogClient::new(mock);

        let err = client.list(PageRequest { limit: 10, offset: 0 }).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[tokio::test]
    async fn detail_lookup_by_name_and_id_share_the_path_shape() {
        let detail = r#"{"id": 25, "name": "pikachu", "height": 4, "weight": 60,
            "types": [], "sprites": {"front_default": null}}"#;
        let mock = MockHttpClient::new();
        mock.enqueue(
            "https://pokeapi.co/api/v2/pokemon/pikachu",
            MockResponse::Success(Response::new(200, Bytes::from(detail))),
        );
        mock.enqueue(
            "https://pokeapi.co/api/v2/pokemon/25",
            MockResponse::Success(Response::new(200, Bytes::from(detail))),
        );
        let client = CatalogClient::new(mock.clone());

        let by_name = client.detail_by_name("pikachu").await.unwrap();
        let by_id = client.detail_by_id(25).await.unwrap();
        assert_eq!(by_name.id, by_id.id);

        let requests = mock.requests();
        assert!(requests.iter().all(|r| r.query.is_empty()));
    }

    #[test]
    fn trailing_slash_in_base_url_is_trimmed() {
        let client = CatalogClient::with_base_url(MockHttpClient::new(), "http://localhost:9000/api/");
        assert_eq!(client.base_url(), "http://localhost:9000/api");
    }
}
