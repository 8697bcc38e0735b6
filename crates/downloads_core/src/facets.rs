use std::collections::BTreeSet;

use crate::item::Item;

/// Distinct selectable filter values, each sorted lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Facets {
    pub product_categories: Vec<String>,
    pub download_categories: Vec<String>,
    pub file_types: Vec<String>,
}

/// Collect the primary and related categories of every item, plus every
/// file type. Items without categories contribute nothing.
pub fn extract_facets(items: &[Item]) -> Facets {
    let mut product = BTreeSet::new();
    let mut download = BTreeSet::new();
    let mut file_types = BTreeSet::new();

    for item in items {
        product.extend(item.primary_related_product_category.iter().cloned());
        product.extend(item.related_product_categories.iter().cloned());
        download.extend(item.primary_download_category.iter().cloned());
        download.extend(item.related_download_categories.iter().cloned());
        file_types.insert(item.file_type.clone());
    }

    Facets {
        product_categories: product.into_iter().collect(),
        download_categories: download.into_iter().collect(),
        file_types: file_types.into_iter().collect(),
    }
}
