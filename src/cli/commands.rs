//! CLI commands and argument parsing

use crate::types::ResponseContract;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Incremental media id feed client
#[derive(Parser, Debug)]
#[command(name = "media-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Feed configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the media service (overrides the config file)
    #[arg(short, long, global = true)]
    pub base_url: Option<String>,

    /// Ids per page (overrides the config file)
    #[arg(short = 'n', long, global = true)]
    pub page_size: Option<u32>,

    /// Response contract (overrides the config file)
    #[arg(long, global = true)]
    pub contract: Option<ContractArg>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load media ids page by page
    Ids {
        /// Maximum number of pages to load (at least 1); stops early on an empty page
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        pages: u32,
    },

    /// Show metadata for one media item
    Meta {
        /// Media id
        id: String,
    },

    /// Print thumbnail, original and metadata URLs for one media item
    Urls {
        /// Media id
        id: String,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable output
    Pretty,
}

/// Response contract selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ContractArg {
    /// `{ ids, last }`
    Paginated,
    /// `{ ids }`
    Simple,
}

impl From<ContractArg> for ResponseContract {
    fn from(arg: ContractArg) -> Self {
        match arg {
            ContractArg::Paginated => ResponseContract::Paginated,
            ContractArg::Simple => ResponseContract::Simple,
        }
    }
}
