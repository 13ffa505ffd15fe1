//! Trait abstractions for external collaborators.
//!
//! These traits define the boundaries between the application and the
//! outside world (HTTP transport, user persistence), enabling dependency
//! injection and mocking in tests.

mod http;
mod store;

pub use http::{HttpClient, HttpError, Response};
pub use store::{StoreError, UserStore};
