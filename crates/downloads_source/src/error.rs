use thiserror::Error;

use crate::decode::DecodeError;
use crate::types::FetchError;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a JSON array of records, found {found}")]
    NotAnArray { found: &'static str },
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("invalid data url {url:?}: {message}")]
    InvalidUrl { url: String, message: String },
}
