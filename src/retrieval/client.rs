//! Media service retrieval client
//!
//! One call, one request. Transport failures and schema mismatches are
//! logged and collapsed into `None`; nothing is retried and nothing is cached.

use super::types::{PageRequest, PageSource};
use crate::config::FeedConfig;
use crate::decode::{decode_meta, MediaIdsDecoder, PageDecoder};
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::paths::MediaPaths;
use crate::types::{Cursor, MediaId, MediaMeta, Page, ResponseContract};
use async_trait::async_trait;
use tracing::{debug, warn};

/// HTTP client for the `media/ids` and `media/meta` endpoints
#[derive(Debug)]
pub struct MediaClient {
    http: HttpClient,
    paths: MediaPaths,
    decoder: MediaIdsDecoder,
    end: Option<Cursor>,
}

impl MediaClient {
    /// Create a client from its parts
    pub fn new(http: HttpClient, paths: MediaPaths, contract: ResponseContract) -> Self {
        Self {
            http,
            paths,
            decoder: MediaIdsDecoder::new(contract),
            end: None,
        }
    }

    /// Build a client from a validated feed configuration
    pub fn from_config(config: &FeedConfig) -> Result<Self> {
        config.validate()?;
        let paths = MediaPaths::new(&config.base_url)?;
        let http = HttpClient::with_config(config.http_config())?;
        Ok(Self::new(http, paths, config.contract).with_end(config.end.map(Cursor::new)))
    }

    /// Restrict every listing with a lower bound
    #[must_use]
    pub fn with_end(mut self, end: Option<Cursor>) -> Self {
        self.end = end;
        self
    }

    /// The response contract in use
    pub fn contract(&self) -> ResponseContract {
        self.decoder.contract()
    }

    /// Fetch one page, reporting why it failed
    pub async fn try_fetch_page(&self, cursor: Option<Cursor>, page_size: u32) -> Result<Page> {
        if page_size == 0 {
            return Err(Error::invalid_value("page_size", "must be positive"));
        }

        let request = PageRequest::new(cursor, page_size).with_end(self.end);
        let body = self
            .http
            .get_text(&self.paths.ids(), request.to_request_config())
            .await?;
        let page = self.decoder.decode(&body)?;

        debug!(
            ids = page.len(),
            cursor = ?page.cursor,
            "Fetched media ids page"
        );
        Ok(page)
    }

    /// Fetch metadata for one media item, reporting why it failed
    pub async fn try_fetch_meta(&self, id: &MediaId) -> Result<MediaMeta> {
        let body = self
            .http
            .get_text(&self.paths.meta(id), RequestConfig::new())
            .await?;
        decode_meta(&body)
    }

    /// Fetch metadata for one media item; `None` on any failure
    pub async fn fetch_meta(&self, id: &MediaId) -> Option<MediaMeta> {
        match self.try_fetch_meta(id).await {
            Ok(meta) => Some(meta),
            Err(e) => {
                warn!(id = %id, kind = %e.kind(), "Failed to fetch media meta: {e}");
                None
            }
        }
    }
}

#[async_trait]
impl PageSource for MediaClient {
    async fn fetch_page(&self, cursor: Option<Cursor>, page_size: u32) -> Option<Page> {
        match self.try_fetch_page(cursor, page_size).await {
            Ok(page) => Some(page),
            Err(e) => {
                warn!(
                    cursor = ?cursor,
                    kind = %e.kind(),
                    "Failed to fetch media ids page: {e}"
                );
                None
            }
        }
    }
}
