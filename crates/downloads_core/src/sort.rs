use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::item::{FileSize, Item};

/// Columns the list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Name,
    Filesize,
    FileType,
    PrimaryDownloadCategory,
}

impl SortField {
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Filesize => "filesize",
            SortField::FileType => "fileType",
            SortField::PrimaryDownloadCategory => "primaryDownloadCategory",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "filesize" => Ok(SortField::Filesize),
            "fileType" => Ok(SortField::FileType),
            "primaryDownloadCategory" => Ok(SortField::PrimaryDownloadCategory),
            other => Err(format!("unknown sort field {other:?}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }
}

/// Sort toggle: a new field starts ascending, the active field flips direction.
/// `None` is the unsorted initial state.
pub fn next_sort(current: Option<SortSpec>, field: SortField) -> SortSpec {
    match current {
        Some(active) if active.field == field => SortSpec {
            field,
            direction: active.direction.toggled(),
        },
        _ => SortSpec::asc(field),
    }
}

/// Value a field is compared on. Missing values compare as `""`.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SortKey<'a> {
    Number(u64),
    Text(Cow<'a, str>),
}

impl SortKey<'_> {
    // Empty text first, then byte counts, then labels.
    fn rank(&self) -> u8 {
        match self {
            SortKey::Text(text) if text.is_empty() => 0,
            SortKey::Number(_) => 1,
            SortKey::Text(_) => 2,
        }
    }
}

fn text(value: Option<&str>) -> SortKey<'_> {
    SortKey::Text(Cow::Borrowed(value.unwrap_or("")))
}

fn sort_key(item: &Item, field: SortField) -> SortKey<'_> {
    match field {
        SortField::Name => text(Some(item.name.as_str())),
        SortField::FileType => text(Some(item.file_type.as_str())),
        SortField::PrimaryDownloadCategory => text(item.primary_download_category.as_deref()),
        // Stored values are compared as-is: "100 KB" < "50 KB".
        SortField::Filesize => match &item.filesize {
            Some(FileSize::Bytes(0)) | None => text(None),
            Some(FileSize::Bytes(bytes)) => SortKey::Number(*bytes),
            Some(FileSize::Text(label)) => text(Some(label.as_str())),
        },
    }
}

fn compare_keys(a: &SortKey<'_>, b: &SortKey<'_>) -> Ordering {
    match (a, b) {
        (SortKey::Number(a), SortKey::Number(b)) => a.cmp(b),
        (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
        _ => a.rank().cmp(&b.rank()),
    }
}

/// Compare two items on `spec`. Descending reverses the comparison itself so
/// equal keys keep their prior order in both directions.
pub fn compare_items(a: &Item, b: &Item, spec: SortSpec) -> Ordering {
    let ordering = compare_keys(&sort_key(a, spec.field), &sort_key(b, spec.field));
    match spec.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Stable in-place sort. `None` leaves the order untouched.
pub fn sort_items(items: &mut [&Item], spec: Option<SortSpec>) {
    if let Some(spec) = spec {
        items.sort_by(|a, b| compare_items(a, b, spec));
    }
}
