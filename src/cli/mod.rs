//! CLI module
//!
//! Command-line interface for browsing a media id feed.
//!
//! # Commands
//!
//! - `ids` - Load one or more pages of media ids
//! - `meta` - Show metadata for a media item
//! - `urls` - Print display URLs for a media item

mod commands;
mod runner;

pub use commands::{Cli, Commands, ContractArg, OutputFormat};
pub use runner::{render_ids, render_meta, render_urls, Runner};
