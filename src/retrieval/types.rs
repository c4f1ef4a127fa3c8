//! Retrieval types and traits

use crate::http::RequestConfig;
use crate::types::{Cursor, Page};
use async_trait::async_trait;

/// Page size used when none is configured
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Source of id pages
///
/// Implementations perform one round trip per call and report every failure
/// as `None`. They must not retry.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the page that follows `cursor`, or the first page when `None`
    async fn fetch_page(&self, cursor: Option<Cursor>, page_size: u32) -> Option<Page>;
}

/// Query for one `media/ids` request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Resume point; omitted from the query for the first page
    pub cursor: Option<Cursor>,
    /// Number of ids requested
    pub count: u32,
    /// Optional lower bound on the listing
    pub end: Option<Cursor>,
}

impl PageRequest {
    /// Request the page after `cursor`
    pub fn new(cursor: Option<Cursor>, count: u32) -> Self {
        Self {
            cursor,
            count,
            end: None,
        }
    }

    /// Restrict the listing with a lower bound
    #[must_use]
    pub fn with_end(mut self, end: Option<Cursor>) -> Self {
        self.end = end;
        self
    }

    /// Build the query string parameters
    ///
    /// `count` is always sent. `begin` and `end` only when present; an absent
    /// `begin` means "from the start", which is not the same as zero.
    pub fn to_request_config(&self) -> RequestConfig {
        RequestConfig::new()
            .query("count", self.count)
            .query_opt("begin", self.cursor)
            .query_opt("end", self.end)
    }
}
