//! Common types used throughout media-pager
//!
//! The data model shared by the retrieval client and the pagination state
//! manager: media ids, cursors, pages and the response contract selector.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Media Id
// ============================================================================

/// Opaque token identifying one media item
///
/// Equality is exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaId(String);

impl MediaId {
    /// Create a media id from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the id, returning the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for MediaId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for MediaId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for MediaId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Cursor
// ============================================================================

/// Continuation token echoed back to the server as `begin`
///
/// The media service encodes the cursor as the timestamp (in milliseconds)
/// of the last item on the previous page. It is otherwise opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(u64);

impl Cursor {
    /// Wrap a raw cursor value
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw value as sent on the wire
    pub fn value(self) -> u64 {
        self.0
    }

    /// Interpret the cursor as a millisecond timestamp
    pub fn as_datetime(self) -> Option<DateTime<Utc>> {
        i64::try_from(self.0)
            .ok()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Cursor {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

// ============================================================================
// Page
// ============================================================================

/// Decoded result of one retrieval call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Ids in the order the server returned them
    pub ids: Vec<MediaId>,
    /// Cursor for the next request, when the contract carries one
    pub cursor: Option<Cursor>,
}

impl Page {
    /// Create a page
    pub fn new(ids: Vec<MediaId>, cursor: Option<Cursor>) -> Self {
        Self { ids, cursor }
    }

    /// Number of ids on this page
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the page carried no ids
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

// ============================================================================
// Response Contract
// ============================================================================

/// Shape of the `media/ids` response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseContract {
    /// `{ ids, last }` where `last` is the next cursor
    #[default]
    Paginated,
    /// `{ ids }` only, the whole result is a single page
    Simple,
}

impl ResponseContract {
    /// Whether responses under this contract carry a cursor
    pub fn has_cursor(self) -> bool {
        matches!(self, Self::Paginated)
    }
}

// ============================================================================
// Media Meta
// ============================================================================

/// Metadata served by `media/meta/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaMeta {
    /// The media id
    pub id: MediaId,
    /// File name of the original upload
    pub origin_name: String,
    /// Capture date as formatted by the server
    pub date: String,
    /// Free-form attributes (EXIF and similar)
    #[serde(default)]
    pub attributes: Option<HashMap<String, String>>,
}
