use crate::facets::Facets;
use crate::filter::Filters;
use crate::item::{Item, ItemId};
use crate::paginate::PageLink;
use crate::sort::{SortDirection, SortField, SortSpec};

/// Read-only snapshot handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListViewModel {
    /// Items on the current page, in display order.
    pub items: Vec<Item>,
    /// Display rows for `items`, same order.
    pub rows: Vec<ItemRowView>,
    /// Size of the whole normalized collection.
    pub total_items: usize,
    /// Items left after filtering, across all pages.
    pub filtered_total: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub page_links: Vec<PageLink>,
    pub facets: Facets,
    pub filters: Filters,
    pub sort: Option<SortSpec>,
}

impl ListViewModel {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Arrow to draw next to a column header, if that column is active.
    pub fn sort_indicator(&self, field: SortField) -> Option<SortDirection> {
        self.sort
            .filter(|spec| spec.field == field)
            .map(|spec| spec.direction)
    }

    pub fn summary(&self) -> String {
        format!("Showing {} of {}", self.filtered_total, self.total_items)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRowView {
    pub id: ItemId,
    pub name: String,
    pub size_label: String,
    pub file_type: String,
    pub download_url: String,
}
