use crate::facets::{extract_facets, Facets};
use crate::filter::filter_items;
use crate::format::format_bytes;
use crate::item::{normalize_all, Item};
use crate::paginate::{page_window, paginate};
use crate::record::RawRecord;
use crate::sort::sort_items;
use crate::state::ViewState;
use crate::view_model::{ItemRowView, ListViewModel};

/// Result of running filter, sort and paginate over a normalized collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutput<'a> {
    pub page_items: Vec<&'a Item>,
    pub filtered_total: usize,
    pub total_pages: usize,
}

/// Filter, then sort, then paginate.
pub fn run_pipeline<'a>(items: &'a [Item], view: &ViewState) -> PipelineOutput<'a> {
    let mut visible = filter_items(items, &view.filters);
    sort_items(&mut visible, view.sort);
    let page = paginate(&visible, view.page, view.page_size);
    PipelineOutput {
        page_items: page.items,
        filtered_total: visible.len(),
        total_pages: page.total_pages,
    }
}

/// One-shot render from raw records, without a controller.
pub fn render(records: &[RawRecord], view: &ViewState) -> ListViewModel {
    let items = normalize_all(records);
    let facets = extract_facets(&items);
    build_view(&items, &facets, view)
}

pub(crate) fn build_view(items: &[Item], facets: &Facets, view: &ViewState) -> ListViewModel {
    let output = run_pipeline(items, view);
    let rows = output.page_items.iter().map(|item| row_view(item)).collect();
    ListViewModel {
        items: output.page_items.into_iter().cloned().collect(),
        rows,
        total_items: items.len(),
        filtered_total: output.filtered_total,
        current_page: view.page,
        total_pages: output.total_pages,
        page_size: view.page_size,
        page_links: page_window(view.page, output.total_pages),
        facets: facets.clone(),
        filters: view.filters.clone(),
        sort: view.sort,
    }
}

fn row_view(item: &Item) -> ItemRowView {
    ItemRowView {
        id: item.id.clone(),
        name: item.name.clone(),
        size_label: format_bytes(item.filesize.as_ref(), 0),
        file_type: item.file_type.clone(),
        download_url: item.download_url.clone(),
    }
}
