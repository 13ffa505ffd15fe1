//! Async driver for the detail screen.
//!
//! Same shape as the catalog loader but for a single lookup: `appear`
//! fetches once, a failed fetch can be retried by appearing again, and
//! opening a different entry bumps the epoch so a late completion for the
//! previous one is dropped.

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::api::models::{Pokemon, PokemonDetail};
use crate::api::{ApiError, CatalogClient};
use crate::traits::HttpClient;

/// Observable detail-screen state.
#[derive(Debug, Clone, Default)]
pub struct DetailState {
    /// The list entry this screen was opened for.
    pub target: Option<Pokemon>,
    pub detail: Option<PokemonDetail>,
    pub loading: bool,
    pub last_error: Option<ApiError>,
}

/// A finished detail fetch.
#[derive(Debug)]
pub struct DetailDone {
    epoch: u64,
    outcome: Result<PokemonDetail, ApiError>,
}

/// Drives detail lookups for the currently open entry.
pub struct DetailLoader<C: HttpClient + 'static> {
    api: Arc<CatalogClient<C>>,
    state: DetailState,
    epoch: u64,
    done_tx: mpsc::UnboundedSender<DetailDone>,
    done_rx: mpsc::UnboundedReceiver<DetailDone>,
}

impl<C: HttpClient + 'static> DetailLoader<C> {
    pub fn new(api: Arc<CatalogClient<C>>) -> Self {
        let (done_tx, done_rx) = mpsc::unbounded_channel();
        Self {
            api,
            state: DetailState::default(),
            epoch: 0,
            done_tx,
            done_rx,
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// Point the loader at a new entry, invalidating any in-flight fetch.
    pub fn open(&mut self, target: Pokemon) {
        self.epoch += 1;
        self.state = DetailState {
            target: Some(target),
            ..DetailState::default()
        };
    }

    /// The detail screen became visible.
    ///
    /// No-op when the detail is already loaded or a fetch is in flight;
    /// after a failure it retries.
    pub fn appear(&mut self) {
        if self.state.detail.is_some() || self.state.loading {
            return;
        }
        let Some(target) = self.state.target.clone() else {
            return;
        };

        self.state.loading = true;
        self.state.last_error = None;

        let api = Arc::clone(&self.api);
        let done_tx = self.done_tx.clone();
        let epoch = self.epoch;
        tokio::spawn(async move {
            let outcome = api.detail_by_name(&target.name).await;
            let _ = done_tx.send(DetailDone { epoch, outcome });
        });
    }

    /// Wait for the next completion. Cancel-safe.
    pub async fn recv_done(&mut self) -> Option<DetailDone> {
        self.done_rx.recv().await
    }

    pub fn apply(&mut self, done: DetailDone) {
        if done.epoch != self.epoch {
            tracing::debug!("dropping stale detail completion");
            return;
        }
        self.state.loading = false;
        match done.outcome {
            Ok(detail) => {
                self.state.detail = Some(detail);
                self.state.last_error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "detail fetch failed");
                self.state.last_error = Some(err);
            }
        }
    }
}
