//! Host-page mount boundary.
//!
//! A host page names a container element and supplies the raw collection
//! through one of three channels, checked in order: records already placed
//! in a page global, a JSON `data-items` attribute on the container, or a
//! `data-url` attribute to fetch from. The first present channel wins.
//! Nothing here ever fails outward: a missing container aborts the mount
//! with a log line, and unusable data becomes an empty collection.

use downloads_core::{ListController, RawRecord};
use downloads_logging::{downloads_error, downloads_info, downloads_warn};
use url::Url;

use crate::fetch::{fetch_records_lenient, Fetcher};
use crate::parse::parse_records_lenient;
use crate::SourceError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountSettings {
    pub container_id: String,
    pub items_attribute: String,
    pub url_attribute: String,
}

impl Default for MountSettings {
    fn default() -> Self {
        Self {
            container_id: "schweigen-downloads-container".to_string(),
            items_attribute: "data-items".to_string(),
            url_attribute: "data-url".to_string(),
        }
    }
}

/// Element the table is mounted into.
pub trait Container {
    fn attribute(&self, name: &str) -> Option<String>;
}

/// The page hosting the table.
pub trait HostPage {
    type Container: Container;

    fn find_container(&self, id: &str) -> Option<Self::Container>;

    /// Records placed in the page's global data slot, if any.
    fn global_records(&self) -> Option<Vec<RawRecord>>;

    /// Address of the page itself, used to resolve relative data URLs.
    fn base_url(&self) -> Option<String> {
        None
    }
}

/// Where the raw collection comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum DataChannel {
    Global(Vec<RawRecord>),
    Inline(String),
    Remote(String),
    Missing,
}

/// Pick the first present channel. Empty attributes count as absent.
pub fn select_channel<C: Container>(
    global: Option<Vec<RawRecord>>,
    container: &C,
    settings: &MountSettings,
) -> DataChannel {
    if let Some(records) = global {
        return DataChannel::Global(records);
    }
    let present = |name: &str| container.attribute(name).filter(|value| !value.is_empty());
    if let Some(json) = present(&settings.items_attribute) {
        return DataChannel::Inline(json);
    }
    if let Some(url) = present(&settings.url_attribute) {
        return DataChannel::Remote(url);
    }
    DataChannel::Missing
}

/// Resolve a possibly relative data URL against the host page address.
pub fn resolve_data_url(base: Option<&str>, raw: &str) -> Result<Url, SourceError> {
    let invalid = |err: url::ParseError| SourceError::InvalidUrl {
        url: raw.to_string(),
        message: err.to_string(),
    };
    match Url::parse(raw) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = base.ok_or_else(|| invalid(url::ParseError::RelativeUrlWithoutBase))?;
            Url::parse(base)
                .and_then(|base| base.join(raw))
                .map_err(invalid)
        }
        Err(err) => Err(invalid(err)),
    }
}

/// Turn a channel into records; failures are logged and yield nothing.
pub async fn resolve_records(
    channel: DataChannel,
    fetcher: &dyn Fetcher,
    base_url: Option<&str>,
) -> Vec<RawRecord> {
    match channel {
        DataChannel::Global(records) => records,
        DataChannel::Inline(json) => parse_records_lenient(&json, "data-items attribute"),
        DataChannel::Remote(raw_url) => match resolve_data_url(base_url, &raw_url) {
            Ok(url) => fetch_records_lenient(fetcher, url.as_str()).await,
            Err(err) => {
                downloads_error!("Failed to fetch downloads data: {}", err);
                Vec::new()
            }
        },
        DataChannel::Missing => {
            downloads_warn!("No data found for the downloads table");
            Vec::new()
        }
    }
}

/// Locate the container, load the collection, and build a controller.
///
/// Returns `None` only when the container does not exist.
pub async fn mount<H: HostPage>(
    host: &H,
    settings: &MountSettings,
    fetcher: &dyn Fetcher,
) -> Option<ListController> {
    let container = find_container(host, &settings.container_id)?;
    let channel = select_channel(host.global_records(), &container, settings);
    let base_url = host.base_url();
    let records = resolve_records(channel, fetcher, base_url.as_deref()).await;
    downloads_info!(
        "Mounted downloads table into {:?} with {} records",
        settings.container_id,
        records.len()
    );
    Some(ListController::new(&records))
}

/// Mount already-available records into a named container.
pub fn mount_records<H: HostPage>(
    host: &H,
    container_id: &str,
    records: &[RawRecord],
) -> Option<ListController> {
    find_container(host, container_id)?;
    Some(ListController::new(records))
}

fn find_container<H: HostPage>(host: &H, id: &str) -> Option<H::Container> {
    let container = host.find_container(id);
    if container.is_none() {
        downloads_error!("Container with id {:?} not found", id);
    }
    container
}
