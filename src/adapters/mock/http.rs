//! Mock HTTP client for testing.
//!
//! Returns scripted responses per URL (in FIFO order when several are
//! queued for the same URL) and records every request for verification.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::traits::{HttpClient, HttpError, Response};

/// A recorded request for verification in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
}

/// A scripted outcome for one request.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(Response),
    Error(HttpError),
}

/// Mock HTTP client.
///
/// Clones share the same script and recording, so a test can keep a handle
/// for assertions while the client under test owns another.
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    responses: Arc<Mutex<HashMap<String, VecDeque<MockResponse>>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for `url`. Repeated calls for the same URL are
    /// served in the order they were queued.
    pub fn enqueue(&self, url: &str, response: MockResponse) {
        self.responses
            .lock()
            .expect("mock script lock poisoned")
            .entry(url.to_string())
            .or_default()
            .push_back(response);
    }

    /// All requests seen so far, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .expect("mock recording lock poisoned")
            .clone()
    }

    fn next_for(&self, url: &str) -> Option<MockResponse> {
        self.responses
            .lock()
            .expect("mock script lock poisoned")
            .get_mut(url)
            .and_then(VecDeque::pop_front)
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<Response, HttpError> {
        self.requests
            .lock()
            .expect("mock recording lock poisoned")
            .push(RecordedRequest {
                url: url.to_string(),
                query: query
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect(),
            });

        match self.next_for(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!(
                "no mock response queued for {url}"
            ))),
        }
    }
}
