use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::record::{first_labels, first_present, first_text, KeyPath, RawRecord};

pub const UNTITLED: &str = "Untitled";
pub const PLACEHOLDER_URL: &str = "#";
pub const UNKNOWN_FILE_TYPE: &str = "UNKNOWN";

const ID_KEYS: &[KeyPath] = &[&["id"]];
const NAME_KEYS: &[KeyPath] = &[&["display-name"], &["name"]];
const DOWNLOAD_URL_KEYS: &[KeyPath] = &[
    &["file", "url"],
    &["large-file-download-url"],
    &["primary-asset-url"],
    &["downloadUrl"],
];
const PRIMARY_DOWNLOAD_CATEGORY_KEYS: &[KeyPath] =
    &[&["primary-download-category"], &["primaryDownloadCategory"]];
const PRIMARY_PRODUCT_CATEGORY_KEYS: &[KeyPath] =
    &[&["product-category"], &["primaryRelatedProductCategory"]];
const RELATED_DOWNLOAD_CATEGORY_KEYS: &[KeyPath] = &[
    &["relatedDownloadCategories"],
    &["related-download-categories"],
];
const RELATED_PRODUCT_CATEGORY_KEYS: &[KeyPath] = &[
    &["relatedProductCategories"],
    &["related-product-categories"],
];
const FILESIZE_KEYS: &[KeyPath] = &[&["filesize"]];
const FILE_TYPE_KEYS: &[KeyPath] = &[&["filetype"], &["fileType"]];
const FILENAME_KEYS: &[KeyPath] = &[&["filename"]];

/// Identifier carried over from the upstream record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{n}"),
            ItemId::Text(text) => write!(f, "{text}"),
        }
    }
}

impl ItemId {
    fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Number(n)) => n
                .as_i64()
                .map(ItemId::Number)
                .unwrap_or_else(|| ItemId::Text(n.to_string())),
            Some(Value::String(text)) => ItemId::Text(text.clone()),
            Some(other) => ItemId::Text(other.to_string()),
            None => ItemId::Text(String::new()),
        }
    }

    fn to_value(&self) -> Value {
        match self {
            ItemId::Number(n) => Value::from(*n),
            ItemId::Text(text) => Value::from(text.as_str()),
        }
    }
}

/// File size exactly as stored upstream: either a byte count or a
/// pre-formatted label such as `"1.2 MB"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileSize {
    Bytes(u64),
    Text(String),
}

impl FileSize {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(match n.as_u64() {
                Some(bytes) => FileSize::Bytes(bytes),
                None => match n.as_f64() {
                    Some(f) if f.is_finite() && f >= 0.0 => FileSize::Bytes(f.floor() as u64),
                    _ => FileSize::Text(n.to_string()),
                },
            }),
            Value::String(text) => Some(FileSize::Text(text.clone())),
            _ => None,
        }
    }

    fn to_value(&self) -> Value {
        match self {
            FileSize::Bytes(bytes) => Value::from(*bytes),
            FileSize::Text(text) => Value::from(text.as_str()),
        }
    }
}

/// Canonical downloadable asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub download_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_download_category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_download_categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_related_product_category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_product_categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filesize: Option<FileSize>,
    pub file_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl Item {
    /// Canonical raw shape of this item. Normalizing it yields `self` again.
    pub fn to_raw(&self) -> RawRecord {
        let mut raw = RawRecord::new();
        raw.insert("id".into(), self.id.to_value());
        raw.insert("name".into(), Value::from(self.name.as_str()));
        raw.insert("downloadUrl".into(), Value::from(self.download_url.as_str()));
        if let Some(category) = &self.primary_download_category {
            raw.insert("primaryDownloadCategory".into(), Value::from(category.as_str()));
        }
        if !self.related_download_categories.is_empty() {
            raw.insert(
                "relatedDownloadCategories".into(),
                Value::from(self.related_download_categories.clone()),
            );
        }
        if let Some(category) = &self.primary_related_product_category {
            raw.insert(
                "primaryRelatedProductCategory".into(),
                Value::from(category.as_str()),
            );
        }
        if !self.related_product_categories.is_empty() {
            raw.insert(
                "relatedProductCategories".into(),
                Value::from(self.related_product_categories.clone()),
            );
        }
        if let Some(size) = &self.filesize {
            raw.insert("filesize".into(), size.to_value());
        }
        raw.insert("fileType".into(), Value::from(self.file_type.as_str()));
        if let Some(filename) = &self.filename {
            raw.insert("filename".into(), Value::from(filename.as_str()));
        }
        raw
    }
}

/// Map one upstream record onto the canonical item shape.
///
/// Every field is resolved from an ordered list of candidate keys; the first
/// present, non-null, non-empty value wins. Absent fields fall back to
/// documented defaults so nothing downstream has to handle missing data.
pub fn normalize(raw: &RawRecord) -> Item {
    let file_type = first_text(raw, FILE_TYPE_KEYS)
        .map(|value| value.to_uppercase())
        .unwrap_or_else(|| UNKNOWN_FILE_TYPE.to_string());

    Item {
        id: ItemId::from_value(first_present(raw, ID_KEYS)),
        name: first_text(raw, NAME_KEYS).unwrap_or_else(|| UNTITLED.to_string()),
        download_url: first_text(raw, DOWNLOAD_URL_KEYS)
            .unwrap_or_else(|| PLACEHOLDER_URL.to_string()),
        primary_download_category: first_text(raw, PRIMARY_DOWNLOAD_CATEGORY_KEYS),
        related_download_categories: first_labels(raw, RELATED_DOWNLOAD_CATEGORY_KEYS),
        primary_related_product_category: first_text(raw, PRIMARY_PRODUCT_CATEGORY_KEYS),
        related_product_categories: first_labels(raw, RELATED_PRODUCT_CATEGORY_KEYS),
        filesize: first_present(raw, FILESIZE_KEYS).and_then(FileSize::from_value),
        file_type,
        filename: first_text(raw, FILENAME_KEYS),
    }
}

/// Normalize a whole collection, preserving order.
pub fn normalize_all(records: &[RawRecord]) -> Vec<Item> {
    records.iter().map(normalize).collect()
}
