//! Downloads source: decoding, fetching and mounting of raw download
//! collections for the list-view engine.
mod decode;
mod error;
mod fetch;
mod loader;
mod mount;
mod parse;
mod types;

pub use decode::{decode_text, DecodeError};
pub use error::SourceError;
pub use fetch::{fetch_records, fetch_records_lenient, FetchSettings, Fetcher, ReqwestFetcher};
pub use loader::LoaderHandle;
pub use mount::{
    mount, mount_records, resolve_data_url, resolve_records, select_channel, Container,
    DataChannel, HostPage, MountSettings,
};
pub use parse::{parse_records, parse_records_lenient};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput, LoaderEvent, RequestId};
