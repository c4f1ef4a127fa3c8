//! Retrieval client module
//!
//! # Overview
//!
//! The retrieval module provides:
//! - `PageSource` - the seam the pager fetches through
//! - `MediaClient` - the HTTP implementation against the media service
//! - `PageRequest` - query construction for `media/ids`

mod client;
mod types;

pub use client::MediaClient;
pub use types::{PageRequest, PageSource, DEFAULT_PAGE_SIZE};
