//! HTTP client trait abstraction.
//!
//! Provides a trait-based abstraction for HTTP operations, enabling
//! dependency injection and mocking in tests.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// HTTP response wrapper.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: Bytes,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, body: Bytes) -> Self {
        Self { status, body }
    }

    /// Check if the response indicates success (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the response body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// HTTP client errors.
#[derive(Debug, Clone, Error)]
pub enum HttpError {
    /// Connection failed
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timeout
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Request was cancelled by the caller losing interest
    #[error("request cancelled")]
    Cancelled,

    /// Invalid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Other error
    #[error("http error: {0}")]
    Other(String),
}

/// Trait for HTTP client operations.
///
/// This trait abstracts the transport so the catalog client can run against
/// the production reqwest-based adapter or a scripted mock in tests. The
/// catalog API is read-only, so only GET is modelled.
///
/// Cancellation is cooperative: dropping the future (or the task driving it)
/// discards the request; implementations must not require the caller to wait
/// for cancellation to complete.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a GET request against `url` with the given query parameters.
    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<Response, HttpError>;
}
