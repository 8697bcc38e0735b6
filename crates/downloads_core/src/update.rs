use crate::{ListState, Msg};

/// Pure update function: applies a message to state.
///
/// Filter and search changes send the list back to page 1. After every
/// message the page is clamped into the range the filtered list supports.
pub fn update(mut state: ListState, msg: Msg) -> ListState {
    match msg {
        Msg::RecordsLoaded(records) => state.load_records(&records),
        Msg::SearchChanged(query) => state.set_search_query(query),
        Msg::ProductCategorySelected(category) => state.set_product_category(category),
        Msg::ProductCategoryToggled(category) => state.toggle_product_category(category),
        Msg::DownloadCategorySelected(category) => state.set_download_category(category),
        Msg::FileTypeSelected(file_type) => state.set_file_type(file_type),
        Msg::FileTypeToggled(file_type) => state.toggle_file_type(file_type),
        Msg::SortRequested(field) => state.cycle_sort(field),
        Msg::PageSelected(page) => state.set_page(page),
        Msg::PreviousPage => {
            let page = state.view_state().page;
            if page > 1 {
                state.set_page(page - 1);
            }
        }
        Msg::NextPage => {
            let page = state.view_state().page;
            state.set_page(page.saturating_add(1));
        }
        Msg::PageSizeChanged(page_size) => state.set_page_size(page_size),
        Msg::NoOp => return state,
    }

    state.clamp_page();
    state
}
