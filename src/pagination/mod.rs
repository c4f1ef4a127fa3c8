//! Pagination module
//!
//! # Overview
//!
//! The pagination module owns the client-side view of the feed:
//! - `PaginationState` - deduplicated, order-preserving id list plus cursor
//! - `Pager` - drives a page source, merges pages and publishes the list
//! - `LoadOutcome` - what a single load did
//!
//! The pager never decides that the feed is finished. Callers typically stop
//! when `LoadOutcome::is_empty_page` reports a page without ids.

mod pager;
mod types;

pub use pager::Pager;
pub use types::{LoadOutcome, PagerPhase, PaginationState};
