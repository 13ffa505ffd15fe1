//! The pagination state machine.
//!
//! Converts discrete UI triggers (`appear`, `reached_bottom`) into at most
//! one in-flight fetch at a time, maintains the append-only accumulated
//! list, and settles back to idle on every completion, success or failure.
//!
//! The machine does no I/O. A trigger that should start a fetch returns a
//! [`FetchTicket`]; the caller performs the fetch and feeds the outcome back
//! through [`Paginator::complete`]. Tickets carry the epoch they were issued
//! under, so completions that arrive after a [`Paginator::reset`] are
//! ignored rather than mutating a newer session's state.

use crate::api::models::{Pokemon, PokemonPage};
use crate::api::{ApiError, PageRequest};

/// Default number of entries per fetched page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// What the engine is currently doing.
///
/// A single value instead of two booleans: the initial-loading and
/// loading-more flags can never both be set because there is nothing here
/// to set them both to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    InitialLoading,
    LoadingMore,
}

/// Observable pagination state, snapshotted on every transition.
#[derive(Debug, Clone)]
pub struct PaginationState {
    /// Accumulated entries; append-only within a session.
    pub items: Vec<Pokemon>,
    pub phase: LoadPhase,
    /// Error from the most recent failed fetch; cleared when a new fetch
    /// starts and on any success.
    pub last_error: Option<ApiError>,
    /// Whether the server reported another page after the last success.
    /// Display-only; it never gates fetching.
    pub has_more: bool,
}

impl PaginationState {
    fn new() -> Self {
        Self {
            items: Vec::new(),
            phase: LoadPhase::Idle,
            last_error: None,
            has_more: true,
        }
    }

    pub fn is_initial_loading(&self) -> bool {
        self.phase == LoadPhase::InitialLoading
    }

    pub fn is_loading_more(&self) -> bool {
        self.phase == LoadPhase::LoadingMore
    }

    pub fn is_loading(&self) -> bool {
        self.phase != LoadPhase::Idle
    }
}

/// Permission to perform one fetch, issued by a trigger.
///
/// The epoch ties the ticket to the session it was issued in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    epoch: u64,
    request: PageRequest,
}

impl FetchTicket {
    pub fn request(&self) -> PageRequest {
        self.request
    }
}

/// The pagination engine.
pub struct Paginator {
    state: PaginationState,
    page_size: u32,
    epoch: u64,
}

impl Paginator {
    /// Create an empty engine. `page_size` of zero is treated as one.
    pub fn new(page_size: u32) -> Self {
        Self {
            state: PaginationState::new(),
            page_size: page_size.max(1),
            epoch: 0,
        }
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// The screen became visible.
    ///
    /// Starts the initial fetch only when nothing has been accumulated and
    /// no fetch is in flight; re-fires are no-ops, which also makes a
    /// failed initial load retryable by simply appearing again.
    pub fn appear(&mut self) -> Option<FetchTicket> {
        if !self.state.items.is_empty() || self.state.is_loading() {
            return None;
        }
        self.state.phase = LoadPhase::InitialLoading;
        self.state.last_error = None;
        Some(self.ticket(0))
    }

    /// The user scrolled past the trailing threshold.
    ///
    /// Ignored entirely (no queueing) while any fetch is in flight, so
    /// rapid duplicate firing cannot issue overlapping requests.
    pub fn reached_bottom(&mut self) -> Option<FetchTicket> {
        if self.state.is_loading() {
            return None;
        }
        self.state.phase = LoadPhase::LoadingMore;
        self.state.last_error = None;
        Some(self.ticket(self.state.items.len() as u32))
    }

    /// Apply a fetch outcome.
    ///
    /// Stale tickets (issued before the last [`reset`](Self::reset)) and
    /// completions arriving while idle are discarded. Both success and
    /// failure settle the phase back to [`LoadPhase::Idle`].
    pub fn complete(&mut self, ticket: FetchTicket, outcome: Result<PokemonPage, ApiError>) {
        if ticket.epoch != self.epoch || !self.state.is_loading() {
            tracing::debug!(offset = ticket.request.offset, "dropping stale fetch completion");
            return;
        }

        let phase = self.state.phase;
        self.state.phase = LoadPhase::Idle;
        match outcome {
            Ok(page) => {
                self.state.has_more = page.has_more();
                self.state.last_error = None;
                match phase {
                    // Initial load was issued at offset 0: replace.
                    LoadPhase::InitialLoading => self.state.items = page.results,
                    LoadPhase::LoadingMore => self.state.items.extend(page.results),
                    LoadPhase::Idle => unreachable!("guarded by is_loading above"),
                }
                tracing::debug!(total = self.state.items.len(), "catalog page applied");
            }
            Err(err) => {
                tracing::warn!(error = %err, "catalog fetch failed");
                self.state.last_error = Some(err);
            }
        }
    }

    /// Discard the session: clears accumulation and invalidates any ticket
    /// still in flight.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.state = PaginationState::new();
    }

    fn ticket(&self, offset: u32) -> FetchTicket {
        FetchTicket {
            epoch: self.epoch,
            request: PageRequest {
                limit: self.page_size,
                offset,
            },
        }
    }
}
