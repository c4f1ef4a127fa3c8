//! Media service URL layout
//!
//! The retrieval client only ever calls `media/ids` and `media/meta/{id}`.
//! Thumbnail and original URLs are built here for the display layer, which
//! fetches the images itself.

use crate::error::{Error, Result};
use crate::types::MediaId;
use url::Url;

const MEDIA: &str = "media";
const IDS: &str = "ids";
const THUMB: &str = "thumb";
const ORIGIN: &str = "origin";
const META: &str = "meta";

/// URL builder rooted at the media service base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaPaths {
    base: Url,
}

impl MediaPaths {
    /// Create a path builder from a base URL such as `https://host/app`
    pub fn new(base: &str) -> Result<Self> {
        let base = Url::parse(base)?;
        if base.cannot_be_a_base() {
            return Err(Error::invalid_value(
                "base_url",
                format!("'{base}' cannot be used as a base URL"),
            ));
        }
        Ok(Self { base })
    }

    /// `<base>/media/ids`
    pub fn ids(&self) -> Url {
        self.endpoint(&[MEDIA, IDS])
    }

    /// `<base>/media/thumb/{id}`
    pub fn thumb(&self, id: &MediaId) -> Url {
        self.endpoint(&[MEDIA, THUMB, id.as_str()])
    }

    /// `<base>/media/origin/{id}`
    pub fn origin(&self, id: &MediaId) -> Url {
        self.endpoint(&[MEDIA, ORIGIN, id.as_str()])
    }

    /// `<base>/media/meta/{id}`
    pub fn meta(&self, id: &MediaId) -> Url {
        self.endpoint(&[MEDIA, META, id.as_str()])
    }

    /// Append percent-encoded segments to the base path
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        // cannot_be_a_base was rejected in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}
