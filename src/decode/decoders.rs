//! Decoder implementations

use super::types::{PageDecoder, PaginatedBody, SimpleBody};
use crate::error::{Error, Result};
use crate::types::{Cursor, MediaMeta, Page, ResponseContract};
use serde::de::DeserializeOwned;
use serde_json::Value;

// ============================================================================
// Media Ids Decoder
// ============================================================================

/// Strict decoder for `media/ids` responses
///
/// The body must be a JSON object. `ids` defaults to empty when absent but
/// must otherwise be an array of strings. Under the paginated contract `last`
/// is required and must be a non-negative integer. Unknown fields are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaIdsDecoder {
    contract: ResponseContract,
}

impl MediaIdsDecoder {
    /// Create a decoder for the given contract
    pub fn new(contract: ResponseContract) -> Self {
        Self { contract }
    }

    /// The contract this decoder validates against
    pub fn contract(&self) -> ResponseContract {
        self.contract
    }
}

impl PageDecoder for MediaIdsDecoder {
    fn decode(&self, body: &str) -> Result<Page> {
        let value = parse_object(body)?;
        match self.contract {
            ResponseContract::Paginated => {
                let body: PaginatedBody = from_object(value)?;
                Ok(Page::new(body.ids, Some(Cursor::new(body.last))))
            }
            ResponseContract::Simple => {
                let body: SimpleBody = from_object(value)?;
                Ok(Page::new(body.ids, None))
            }
        }
    }
}

// ============================================================================
// Meta Decoder
// ============================================================================

/// Decode a `media/meta/{id}` response
pub fn decode_meta(body: &str) -> Result<MediaMeta> {
    from_object(parse_object(body)?)
}

// ============================================================================
// Helpers
// ============================================================================

/// Parse the body and require a top-level JSON object
fn parse_object(body: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(body)?;
    if value.is_object() {
        Ok(value)
    } else {
        Err(Error::schema(format!(
            "expected a JSON object, got {}",
            type_name(&value)
        )))
    }
}

fn from_object<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| Error::schema(e.to_string()))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
