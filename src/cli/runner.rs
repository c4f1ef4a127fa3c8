//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::FeedConfig;
use crate::error::{Error, Result};
use crate::pagination::{LoadOutcome, Pager, PaginationState};
use crate::paths::MediaPaths;
use crate::retrieval::MediaClient;
use crate::types::{MediaId, MediaMeta};
use serde_json::json;
use tracing::{info, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let output = match &self.cli.command {
            Commands::Ids { pages } => self.ids(*pages).await?,
            Commands::Meta { id } => self.meta(id).await?,
            Commands::Urls { id } => self.urls(id)?,
        };
        println!("{output}");
        Ok(())
    }

    /// Resolve the feed config from the file and flag overrides
    pub fn feed_config(&self) -> Result<FeedConfig> {
        let mut config = match (&self.cli.config, &self.cli.base_url) {
            (Some(path), _) => FeedConfig::from_file(path)?,
            (None, Some(base_url)) => FeedConfig::new(base_url),
            (None, None) => {
                return Err(Error::config(
                    "No media service given (use --config or --base-url)",
                ))
            }
        };

        if let (Some(_), Some(base_url)) = (&self.cli.config, &self.cli.base_url) {
            config.base_url.clone_from(base_url);
        }
        if let Some(page_size) = self.cli.page_size {
            config.page_size = page_size;
        }
        if let Some(contract) = self.cli.contract {
            config.contract = contract.into();
        }

        config.validate()?;
        Ok(config)
    }

    /// Load up to `pages` pages, stopping at the first empty or failed one
    async fn ids(&self, pages: u32) -> Result<String> {
        let config = self.feed_config()?;
        let pager = Pager::from_config(&config)?;

        let mut outcome = pager.initialize().await;
        let mut loaded = 1;
        while loaded < pages && should_continue(outcome) {
            outcome = pager.load_next().await;
            loaded += 1;
        }

        let state = pager.snapshot().await;
        if outcome.is_failed() {
            if state.is_empty() {
                return Err(Error::Other(format!(
                    "Failed to load media ids from {}",
                    config.base_url
                )));
            }
            warn!("Stopped after a failed page; showing what was loaded");
        }

        info!(
            pages = loaded,
            total = state.len(),
            cursor = ?state.cursor(),
            "Finished loading media ids"
        );
        render_ids(&state, self.cli.format)
    }

    async fn meta(&self, id: &str) -> Result<String> {
        let config = self.feed_config()?;
        let client = MediaClient::from_config(&config)?;
        let id = MediaId::from(id);

        let meta = client.try_fetch_meta(&id).await?;
        render_meta(&meta, self.cli.format)
    }

    fn urls(&self, id: &str) -> Result<String> {
        let config = self.feed_config()?;
        let paths = MediaPaths::new(&config.base_url)?;
        render_urls(&paths, &MediaId::from(id), self.cli.format)
    }
}

fn should_continue(outcome: LoadOutcome) -> bool {
    !outcome.is_failed() && !outcome.is_empty_page()
}

/// Render the accumulated ids
pub fn render_ids(state: &PaginationState, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(state)?),
        OutputFormat::Pretty => {
            let mut lines: Vec<String> = state.ids().iter().map(ToString::to_string).collect();
            let cursor = match state.cursor() {
                Some(cursor) => match cursor.as_datetime() {
                    Some(at) => format!("{cursor} ({})", at.to_rfc3339()),
                    None => cursor.to_string(),
                },
                None => "none".to_string(),
            };
            lines.push(format!("# {} ids, next cursor: {cursor}", state.len()));
            Ok(lines.join("\n"))
        }
    }
}

/// Render media metadata
pub fn render_meta(meta: &MediaMeta, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(meta)?),
        OutputFormat::Pretty => {
            let mut lines = vec![
                format!("id:      {}", meta.id),
                format!("origin:  {}", meta.origin_name),
                format!("date:    {}", meta.date),
            ];
            if let Some(attributes) = &meta.attributes {
                let mut keys: Vec<&String> = attributes.keys().collect();
                keys.sort();
                for key in keys {
                    lines.push(format!("  {key}: {}", attributes[key]));
                }
            }
            Ok(lines.join("\n"))
        }
    }
}

/// Render display-layer URLs for one id
pub fn render_urls(paths: &MediaPaths, id: &MediaId, format: OutputFormat) -> Result<String> {
    let thumb = paths.thumb(id);
    let origin = paths.origin(id);
    let meta = paths.meta(id);

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "id": id,
            "thumb": thumb.as_str(),
            "origin": origin.as_str(),
            "meta": meta.as_str(),
        }))?),
        OutputFormat::Pretty => Ok(format!(
            "thumb:  {thumb}\norigin: {origin}\nmeta:   {meta}"
        )),
    }
}
