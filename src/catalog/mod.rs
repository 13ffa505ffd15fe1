//! Catalog loading: the pagination engine and its async drivers.
//!
//! [`Paginator`] is the pure state machine (triggers in, fetch tickets out,
//! completions applied); [`CatalogLoader`] and [`DetailLoader`] drive it on
//! the tokio runtime, spawning fetches and routing completions back to the
//! owning event loop.

mod detail;
mod loader;
mod paginator;

pub use detail::{DetailDone, DetailLoader, DetailState};
pub use loader::{CatalogDone, CatalogLoader};
pub use paginator::{FetchTicket, LoadPhase, PaginationState, Paginator, DEFAULT_PAGE_SIZE};
