//! Concrete adapters for the trait abstractions.
//!
//! Production implementations live here (reqwest transport, SQLite user
//! store) along with the scripted mocks used by tests.

pub mod mock;
mod reqwest_http;
mod sqlite_store;

pub use reqwest_http::ReqwestHttpClient;
pub use sqlite_store::SqliteUserStore;
