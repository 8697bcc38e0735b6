//! Downloads core: pure list-view engine for a filterable, sortable,
//! paginated downloads table.
mod controller;
mod facets;
mod filter;
mod format;
mod item;
mod msg;
mod paginate;
mod pipeline;
mod record;
mod sort;
mod state;
mod update;
mod view_model;

pub use controller::ListController;
pub use facets::{extract_facets, Facets};
pub use filter::{filter_items, matches_filters, Filters, ALL};
pub use format::format_bytes;
pub use item::{
    normalize, normalize_all, FileSize, Item, ItemId, PLACEHOLDER_URL, UNKNOWN_FILE_TYPE, UNTITLED,
};
pub use msg::Msg;
pub use paginate::{page_window, paginate, total_pages, Page, PageLink};
pub use pipeline::{render, run_pipeline, PipelineOutput};
pub use record::RawRecord;
pub use sort::{compare_items, next_sort, sort_items, SortDirection, SortField, SortSpec};
pub use state::{ListState, ViewState, DEFAULT_PAGE_SIZE};
pub use update::update;
pub use view_model::{ItemRowView, ListViewModel};
