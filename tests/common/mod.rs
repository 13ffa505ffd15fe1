//! Common test utilities for integration tests.

// Each test binary compiles its own copy; not every binary uses every helper.
#![allow(dead_code)]

use podex::adapters::mock::{MockHttpClient, MockResponse};
use podex::traits::Response;

use bytes::Bytes;
use serde_json::json;

/// JSON body for one list page.
pub fn page_json(names: &[&str], has_next: bool) -> String {
    json!({
        "count": 1302,
        "next": has_next.then_some("https://pokeapi.co/api/v2/pokemon?offset=next"),
        "previous": null,
        "results": names
            .iter()
            .map(|n| json!({"name": n, "url": format!("https://pokeapi.co/api/v2/pokemon/{n}/")}))
            .collect::<Vec<_>>(),
    })
    .to_string()
}

/// JSON body for one detail payload.
pub fn detail_json(id: u32, name: &str) -> String {
    json!({
        "id": id,
        "name": name,
        "height": 4,
        "weight": 60,
        "types": [
            {"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}
        ],
        "sprites": {"front_default": format!("https://sprites.test/{id}.png")},
    })
    .to_string()
}

/// Queue a successful list-page response on the mock transport.
pub fn enqueue_page(mock: &MockHttpClient, base_url: &str, names: &[&str], has_next: bool) {
    mock.enqueue(
        &format!("{base_url}/pokemon"),
        MockResponse::Success(Response::new(200, Bytes::from(page_json(names, has_next)))),
    );
}

/// Queue an HTTP error status on the list endpoint.
pub fn enqueue_page_status(mock: &MockHttpClient, base_url: &str, status: u16) {
    mock.enqueue(
        &format!("{base_url}/pokemon"),
        MockResponse::Success(Response::new(status, Bytes::from("server exploded"))),
    );
}
