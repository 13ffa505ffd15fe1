//! Async driver for the pagination engine.
//!
//! Owns a [`Paginator`] and the catalog client; triggers spawn fetch tasks
//! and completions come back over an internal channel, so all state
//! mutation stays on the task that owns the loader. Dropping the loader
//! closes that channel and any in-flight completion is discarded, which is
//! what makes teardown mid-fetch safe.

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::api::models::PokemonPage;
use crate::api::{ApiError, CatalogClient};
use crate::traits::HttpClient;

use super::paginator::{FetchTicket, PaginationState, Paginator};

/// A finished fetch, routed back to the owning event loop.
#[derive(Debug)]
pub struct CatalogDone {
    ticket: FetchTicket,
    outcome: Result<PokemonPage, ApiError>,
}

/// Drives the paginator against the catalog API.
pub struct CatalogLoader<C: HttpClient + 'static> {
    api: Arc<CatalogClient<C>>,
    paginator: Paginator,
    done_tx: mpsc::UnboundedSender<CatalogDone>,
    done_rx: mpsc::UnboundedReceiver<CatalogDone>,
    subscribers: Vec<mpsc::UnboundedSender<PaginationState>>,
}

impl<C: HttpClient + 'static> CatalogLoader<C> {
    pub fn new(api: Arc<CatalogClient<C>>, page_size: u32) -> Self {
        let (done_tx, done_rx) = mpsc::unbounded_channel();
        Self {
            api,
            paginator: Paginator::new(page_size),
            done_tx,
            done_rx,
            subscribers: Vec::new(),
        }
    }

    /// Current engine state; the UI reads this every frame.
    pub fn state(&self) -> &PaginationState {
        self.paginator.state()
    }

    /// Observe every state transition, in order.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<PaginationState> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    /// The list screen became visible.
    pub fn appear(&mut self) {
        if let Some(ticket) = self.paginator.appear() {
            self.publish();
            self.dispatch(ticket);
        }
    }

    /// The list scrolled past the trailing threshold.
    pub fn reached_bottom(&mut self) {
        if let Some(ticket) = self.paginator.reached_bottom() {
            self.publish();
            self.dispatch(ticket);
        }
    }

    /// Discard the session and invalidate in-flight fetches.
    pub fn reset(&mut self) {
        self.paginator.reset();
        self.publish();
    }

    /// Wait for the next fetch completion. Cancel-safe; never yields `None`
    /// because the loader keeps its own sender alive.
    pub async fn recv_done(&mut self) -> Option<CatalogDone> {
        self.done_rx.recv().await
    }

    /// Apply a completion received from [`recv_done`](Self::recv_done).
    pub fn apply(&mut self, done: CatalogDone) {
        self.paginator.complete(done.ticket, done.outcome);
        self.publish();
    }

    fn dispatch(&self, ticket: FetchTicket) {
        let api = Arc::clone(&self.api);
        let done_tx = self.done_tx.clone();
        tokio::spawn(async move {
            let outcome = api.list(ticket.request()).await;
            // Receiver gone means the loader was torn down; drop the result.
            let _ = done_tx.send(CatalogDone { ticket, outcome });
        });
    }

    fn publish(&mut self) {
        let snapshot = self.paginator.state().clone();
        self.subscribers
            .retain(|tx| tx.send(snapshot.clone()).is_ok());
    }
}
