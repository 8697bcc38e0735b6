use crate::item::Item;

/// Sentinel filter value that disables a category or file-type filter.
pub const ALL: &str = "All";

/// Active search text and category filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filters {
    pub search_query: String,
    pub product_category: String,
    pub download_category: String,
    pub file_type: String,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            product_category: ALL.to_string(),
            download_category: ALL.to_string(),
            file_type: ALL.to_string(),
        }
    }
}

/// Keep the items that pass every filter, in their original order.
pub fn filter_items<'a>(items: &'a [Item], filters: &Filters) -> Vec<&'a Item> {
    let query = filters.search_query.to_lowercase();
    items
        .iter()
        .filter(|item| passes(item, filters, &query))
        .collect()
}

/// Check a single item against the filters.
pub fn matches_filters(item: &Item, filters: &Filters) -> bool {
    passes(item, filters, &filters.search_query.to_lowercase())
}

// AND across predicates; `&&` short-circuits on the first failure.
fn passes(item: &Item, filters: &Filters, lowered_query: &str) -> bool {
    matches_search(item, lowered_query)
        && matches_category(
            &filters.product_category,
            item.primary_related_product_category.as_deref(),
            &item.related_product_categories,
        )
        && matches_category(
            &filters.download_category,
            item.primary_download_category.as_deref(),
            &item.related_download_categories,
        )
        && (filters.file_type == ALL || filters.file_type == item.file_type)
}

fn matches_search(item: &Item, lowered_query: &str) -> bool {
    if lowered_query.is_empty() {
        return true;
    }
    item.name.to_lowercase().contains(lowered_query)
        || item
            .filename
            .as_deref()
            .is_some_and(|filename| filename.to_lowercase().contains(lowered_query))
}

fn matches_category(selected: &str, primary: Option<&str>, related: &[String]) -> bool {
    selected == ALL
        || primary == Some(selected)
        || related.iter().any(|category| category == selected)
}
