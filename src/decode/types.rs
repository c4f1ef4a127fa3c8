//! Decoder types and traits
//!
//! Wire shapes of the `media/ids` response and the decoder abstraction.

use crate::error::Result;
use crate::types::{MediaId, Page};
use serde::Deserialize;

/// Trait for decoding a response body into a page
pub trait PageDecoder: Send + Sync {
    /// Decode the body, rejecting anything outside the expected shape
    fn decode(&self, body: &str) -> Result<Page>;
}

/// `{ ids, last }` body of the paginated contract
#[derive(Debug, Deserialize)]
pub(crate) struct PaginatedBody {
    #[serde(default)]
    pub ids: Vec<MediaId>,
    pub last: u64,
}

/// `{ ids }` body of the simple contract
#[derive(Debug, Deserialize)]
pub(crate) struct SimpleBody {
    #[serde(default)]
    pub ids: Vec<MediaId>,
}
