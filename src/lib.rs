//! # media-pager
//!
//! Incremental, deduplicating client for a media id feed.
//!
//! A media service lists item ids newest first, one page at a time, handing
//! back a cursor with each page. This crate fetches those pages on demand,
//! validates them strictly and folds them into a single ordered list with no
//! repeats, ready for a gallery view to render.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use media_pager::{config::FeedConfig, pagination::Pager};
//!
//! #[tokio::main]
//! async fn main() -> media_pager::Result<()> {
//!     let config = FeedConfig::new("http://localhost:8080");
//!     let pager = Pager::from_config(&config)?;
//!
//!     let mut ids = pager.subscribe();
//!     pager.initialize().await;
//!
//!     // "Load more"
//!     let outcome = pager.load_next().await;
//!     if outcome.is_empty_page() {
//!         // probably the end of the feed
//!     }
//!
//!     println!("{:?}", *ids.borrow_and_update());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  Pager: initialize() / load_next() / subscribe()     │
//! │  PaginationState: ordered, deduplicated ids + cursor │
//! └──────────────────────────┬───────────────────────────┘
//!                            │ PageSource::fetch_page
//! ┌──────────────────────────┴───────────────────────────┐
//! │  MediaClient: GET media/ids?count=N[&begin=cursor]   │
//! ├──────────────┬───────────────────┬───────────────────┤
//! │  HttpClient  │  MediaIdsDecoder  │  MediaPaths       │
//! │  Rate limit  │  Strict schema    │  thumb / origin   │
//! └──────────────┴───────────────────┴───────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Media ids, cursors and pages
pub mod types;

/// HTTP transport
pub mod http;

/// Response schema validation
pub mod decode;

/// Media service URL layout
pub mod paths;

/// Feed configuration
pub mod config;

/// Retrieval client
pub mod retrieval;

/// Pagination state manager
pub mod pagination;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, FailureKind, Result};
pub use types::*;

pub use config::FeedConfig;
pub use pagination::{LoadOutcome, Pager, PaginationState};
pub use retrieval::{MediaClient, PageSource};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
