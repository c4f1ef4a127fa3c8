//! Feed configuration
//!
//! A feed is described in YAML:
//!
//! ```yaml
//! base_url: http://localhost:8080
//! page_size: 100
//! contract: paginated
//! timeout_secs: 30
//! headers:
//!   X-Client: gallery
//! rate_limit:
//!   requests_per_second: 2
//!   burst_size: 4
//! ```

use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use crate::retrieval::DEFAULT_PAGE_SIZE;
use crate::types::ResponseContract;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// Configuration for one media id feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Base URL of the media service
    pub base_url: String,

    /// Ids requested per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Response shape served by `media/ids`
    #[serde(default)]
    pub contract: ResponseContract,

    /// Lower bound sent as `end` on every listing request
    #[serde(default)]
    pub end: Option<u64>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Override the default user agent
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Extra headers sent with every request
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Client-side throttling
    #[serde(default)]
    pub rate_limit: Option<RateLimiterConfig>,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_timeout_secs() -> u64 {
    30
}

impl FeedConfig {
    /// Create a config with defaults for everything but the base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            page_size: DEFAULT_PAGE_SIZE,
            contract: ResponseContract::default(),
            end: None,
            timeout_secs: default_timeout_secs(),
            user_agent: None,
            headers: HashMap::new(),
            rate_limit: None,
        }
    }

    /// Load and validate a config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse and validate a YAML config
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the response contract
    #[must_use]
    pub fn with_contract(mut self, contract: ResponseContract) -> Self {
        self.contract = contract;
        self
    }

    /// Check value ranges and the base URL
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::invalid_value("base_url", "must not be empty"));
        }
        let url = url::Url::parse(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "base_url",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }
        if self.page_size == 0 {
            return Err(Error::invalid_value("page_size", "must be positive"));
        }
        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be positive"));
        }
        if let Some(rate_limit) = &self.rate_limit {
            if rate_limit.requests_per_second == 0 {
                return Err(Error::invalid_value(
                    "rate_limit.requests_per_second",
                    "must be positive",
                ));
            }
        }
        Ok(())
    }

    /// Build the HTTP client configuration
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder().timeout(Duration::from_secs(self.timeout_secs));

        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent);
        }
        for (key, value) in &self.headers {
            builder = builder.header(key, value);
        }
        if let Some(rate_limit) = &self.rate_limit {
            builder = builder.rate_limit(rate_limit.clone());
        }

        builder.build()
    }
}
