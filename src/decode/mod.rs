//! Response decoder module
//!
//! Validates `media/ids` and `media/meta` bodies against their schemas.
//! A body that parses as JSON but has the wrong shape is rejected the same
//! way as a body that is not JSON at all.

mod decoders;
mod types;

pub use decoders::{decode_meta, MediaIdsDecoder};
pub use types::PageDecoder;
