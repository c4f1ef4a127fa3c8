//! HTTP client module
//!
//! Provides the transport used by the retrieval client.
//!
//! # Features
//!
//! - **Absolute URLs**: callers pass full `Url`s built by `MediaPaths`
//! - **Rate Limiting**: optional token bucket limiter using governor
//! - **Status mapping**: non-2xx responses become `Error::HttpStatus`

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig};

#[cfg(test)]
mod tests;
