//! Error types for media-pager
//!
//! Every fallible internal API returns `Result<T, Error>`. The retrieval
//! boundary collapses these errors into an absence of data, so callers of
//! `fetch_page` and `load_next` never see them directly.

use thiserror::Error;

/// The main error type for media-pager
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Schema Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Response does not match schema: {message}")]
    Schema { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Coarse classification of a failed retrieval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Network unreachable, timeout, or a non-2xx status
    Transport,
    /// Body is not JSON or does not have the expected shape
    Schema,
    /// Anything else (configuration, local I/O)
    Other,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport => write!(f, "transport"),
            Self::Schema => write!(f, "schema"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a schema mismatch error
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
        }
    }

    /// Classify this error for logging at the retrieval boundary
    pub fn kind(&self) -> FailureKind {
        match self {
            Error::Http(e) if e.is_decode() => FailureKind::Schema,
            Error::Http(_) | Error::HttpStatus { .. } | Error::InvalidUrl(_) => {
                FailureKind::Transport
            }
            Error::JsonParse(_) | Error::Schema { .. } => FailureKind::Schema,
            _ => FailureKind::Other,
        }
    }
}

/// Result type alias for media-pager
pub type Result<T> = std::result::Result<T, Error>;
