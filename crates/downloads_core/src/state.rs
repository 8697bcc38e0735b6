use std::sync::Arc;

use crate::facets::{extract_facets, Facets};
use crate::filter::{filter_items, Filters, ALL};
use crate::item::{normalize_all, Item};
use crate::paginate::total_pages;
use crate::pipeline::build_view;
use crate::record::RawRecord;
use crate::sort::{next_sort, SortField, SortSpec};
use crate::view_model::ListViewModel;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// User-adjustable parameters controlling what is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub filters: Filters,
    pub sort: Option<SortSpec>,
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            filters: Filters::default(),
            sort: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Normalized collection plus the view state applied to it.
///
/// Items and facets are derived once per loaded collection; everything
/// else is recomputed from them on each call to [`ListState::view`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListState {
    items: Arc<[Item]>,
    facets: Facets,
    view: ViewState,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: &[RawRecord]) -> Self {
        let mut state = Self::new();
        state.load_records(records);
        state
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.view.page_size = page_size.max(1);
        self.view.page = 1;
        self
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn view(&self) -> ListViewModel {
        build_view(&self.items, &self.facets, &self.view)
    }

    pub(crate) fn load_records(&mut self, records: &[RawRecord]) {
        self.items = normalize_all(records).into();
        self.facets = extract_facets(&self.items);
        self.reset_page();
    }

    pub(crate) fn set_search_query(&mut self, query: String) {
        self.view.filters.search_query = query;
        self.reset_page();
    }

    pub(crate) fn set_product_category(&mut self, category: String) {
        self.view.filters.product_category = category;
        self.reset_page();
    }

    pub(crate) fn set_download_category(&mut self, category: String) {
        self.view.filters.download_category = category;
        self.reset_page();
    }

    pub(crate) fn set_file_type(&mut self, file_type: String) {
        self.view.filters.file_type = file_type;
        self.reset_page();
    }

    pub(crate) fn toggle_product_category(&mut self, category: String) {
        let next = toggled(&self.view.filters.product_category, category);
        self.set_product_category(next);
    }

    pub(crate) fn toggle_file_type(&mut self, file_type: String) {
        let next = toggled(&self.view.filters.file_type, file_type);
        self.set_file_type(next);
    }

    pub(crate) fn cycle_sort(&mut self, field: SortField) {
        self.view.sort = Some(next_sort(self.view.sort, field));
    }

    pub(crate) fn set_page(&mut self, page: usize) {
        self.view.page = page;
    }

    pub(crate) fn set_page_size(&mut self, page_size: usize) {
        self.view.page_size = page_size.max(1);
        self.reset_page();
    }

    /// Keep the active page inside `[1, total_pages]`; 1 when nothing matches.
    pub(crate) fn clamp_page(&mut self) {
        let filtered = filter_items(&self.items, &self.view.filters).len();
        let last = total_pages(filtered, self.view.page_size).max(1);
        self.view.page = self.view.page.clamp(1, last);
    }

    fn reset_page(&mut self) {
        self.view.page = 1;
    }
}

// Selecting the active value again switches the filter off.
fn toggled(current: &str, selected: String) -> String {
    if current == selected {
        ALL.to_string()
    } else {
        selected
    }
}
