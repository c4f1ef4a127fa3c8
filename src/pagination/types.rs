//! Pagination types
//!
//! The accumulated id list and the outcome of a single load.

use crate::types::{Cursor, MediaId, Page};
use serde::Serialize;
use std::collections::HashSet;

/// Cumulative view of every id retrieved so far
///
/// Ids are kept in order of first appearance and never repeat. The cursor is
/// the one returned with the last successful page. The generation changes on
/// every `clear`, marking the start of a new session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PaginationState {
    ids: Vec<MediaId>,
    #[serde(skip)]
    seen: HashSet<MediaId>,
    cursor: Option<Cursor>,
    #[serde(skip)]
    generation: u64,
}

impl PaginationState {
    /// Create an empty state with no cursor
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids in order of first appearance
    pub fn ids(&self) -> &[MediaId] {
        &self.ids
    }

    /// Cursor of the last successful page
    pub fn cursor(&self) -> Option<Cursor> {
        self.cursor
    }

    /// Number of distinct ids accumulated
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing has been accumulated yet
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Session counter, bumped by `clear`
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether `id` has already been accumulated
    pub fn contains(&self, id: &MediaId) -> bool {
        self.seen.contains(id)
    }

    /// Merge a page, returning how many ids were new
    ///
    /// Unseen ids are appended in page order, including ids repeated within
    /// the page itself only once. The cursor is replaced by the page cursor;
    /// a page without one (simple contract) leaves the state without a
    /// cursor so the next load starts from the beginning again.
    pub fn merge(&mut self, page: Page) -> usize {
        let before = self.ids.len();
        for id in page.ids {
            if self.seen.insert(id.clone()) {
                self.ids.push(id);
            }
        }
        self.cursor = page.cursor;
        self.ids.len() - before
    }

    /// Drop everything and start a new generation
    pub fn clear(&mut self) {
        self.ids.clear();
        self.seen.clear();
        self.cursor = None;
        self.generation = self.generation.wrapping_add(1);
    }
}

impl PartialEq for PaginationState {
    fn eq(&self, other: &Self) -> bool {
        self.ids == other.ids && self.cursor == other.cursor
    }
}

impl Eq for PaginationState {}

/// Result of one `load_next` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The fetch failed; state is unchanged
    Failed,
    /// The page arrived after `initialize` reset the state and was dropped
    Discarded,
    /// A page was merged
    Merged {
        /// Ids on the page, duplicates included
        received: usize,
        /// Ids that were new to the accumulated list
        added: usize,
        /// Cursor stored after the merge
        cursor: Option<Cursor>,
    },
}

impl LoadOutcome {
    /// Check if the fetch failed
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }

    /// Number of ids appended to the list
    pub fn added(&self) -> usize {
        match self {
            Self::Merged { added, .. } => *added,
            Self::Failed | Self::Discarded => 0,
        }
    }

    /// Whether the server returned a page with no ids
    ///
    /// This is the usual hint that the feed is exhausted. The pager never
    /// acts on it; deciding to stop is up to the caller.
    pub fn is_empty_page(&self) -> bool {
        matches!(self, Self::Merged { received: 0, .. })
    }
}

/// Lifecycle phase of a pager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerPhase {
    /// `initialize` has not been called
    Uninitialized,
    /// At least one fetch is in flight
    Loading,
    /// No fetch in flight
    Idle,
}
