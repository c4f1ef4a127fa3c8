//! Pagination state manager
//!
//! Drives a [`PageSource`], owns the [`PaginationState`] and publishes the
//! accumulated id list to observers through a `watch` channel.

use super::types::{LoadOutcome, PagerPhase, PaginationState};
use crate::config::FeedConfig;
use crate::error::Result;
use crate::retrieval::{MediaClient, PageSource};
use crate::types::{Cursor, MediaId};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::{watch, RwLock};
use tracing::debug;

/// Incremental loader for a media id feed
///
/// `load_next` takes `&self` and may be called concurrently. The state lock
/// is not held across the network round trip, so two calls started on the
/// same cursor fetch the same page; deduplication makes the second merge a
/// no-op. Each merge runs under the write lock as a single step.
#[derive(Debug)]
pub struct Pager<S> {
    source: S,
    page_size: u32,
    state: RwLock<PaginationState>,
    publisher: watch::Sender<Vec<MediaId>>,
    initialized: AtomicBool,
    in_flight: AtomicUsize,
}

impl Pager<MediaClient> {
    /// Build a pager over the HTTP media client described by `config`
    pub fn from_config(config: &FeedConfig) -> Result<Self> {
        Ok(Self::new(MediaClient::from_config(config)?, config.page_size))
    }
}

impl<S: PageSource> Pager<S> {
    /// Create a pager; nothing is fetched until `initialize`
    pub fn new(source: S, page_size: u32) -> Self {
        let (publisher, _) = watch::channel(Vec::new());
        Self {
            source,
            page_size,
            state: RwLock::new(PaginationState::new()),
            publisher,
            initialized: AtomicBool::new(false),
            in_flight: AtomicUsize::new(0),
        }
    }

    /// The page source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Reset to an empty list with no cursor and load the first page
    pub async fn initialize(&self) -> LoadOutcome {
        {
            let mut state = self.state.write().await;
            state.clear();
            self.publisher.send_replace(Vec::new());
        }
        self.initialized.store(true, Ordering::SeqCst);
        self.load_next().await
    }

    /// Fetch the page after the current cursor and merge it
    ///
    /// A failed fetch leaves the list and the cursor untouched. A page that
    /// resolves after `initialize` has reset the state belongs to the old
    /// session and is dropped.
    pub async fn load_next(&self) -> LoadOutcome {
        let _guard = InFlight::enter(&self.in_flight);

        let (cursor, generation) = {
            let state = self.state.read().await;
            (state.cursor(), state.generation())
        };
        let Some(page) = self.source.fetch_page(cursor, self.page_size).await else {
            return LoadOutcome::Failed;
        };

        let received = page.len();
        let mut state = self.state.write().await;
        if state.generation() != generation {
            debug!(received, "Discarded media ids page from a previous session");
            return LoadOutcome::Discarded;
        }

        let added = state.merge(page);
        let cursor = state.cursor();

        if added > 0 {
            self.publisher.send_replace(state.ids().to_vec());
        }

        debug!(
            received,
            added,
            total = state.len(),
            cursor = ?cursor,
            "Merged media ids page"
        );
        LoadOutcome::Merged {
            received,
            added,
            cursor,
        }
    }

    /// Observe the accumulated id list
    ///
    /// Receivers are notified whenever the list grows or is reset.
    pub fn subscribe(&self) -> watch::Receiver<Vec<MediaId>> {
        self.publisher.subscribe()
    }

    /// Copy of the accumulated ids
    pub async fn ids(&self) -> Vec<MediaId> {
        self.state.read().await.ids().to_vec()
    }

    /// Cursor of the last successful page
    pub async fn cursor(&self) -> Option<Cursor> {
        self.state.read().await.cursor()
    }

    /// Copy of the full pagination state
    pub async fn snapshot(&self) -> PaginationState {
        self.state.read().await.clone()
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> PagerPhase {
        if !self.initialized.load(Ordering::SeqCst) {
            PagerPhase::Uninitialized
        } else if self.in_flight.load(Ordering::SeqCst) > 0 {
            PagerPhase::Loading
        } else {
            PagerPhase::Idle
        }
    }
}

/// Counts a load as in flight until dropped, including on cancellation
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}
