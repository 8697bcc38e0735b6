use crate::record::RawRecord;
use crate::sort::SortField;
use crate::view_model::ListViewModel;
use crate::{update, ListState, Msg};

/// Single owner of the list state.
///
/// Every setter dispatches a [`Msg`] through [`update`] and then rebuilds the
/// snapshot synchronously, so [`ListController::view`] always reflects the
/// latest state.
#[derive(Debug, Clone)]
pub struct ListController {
    state: ListState,
    view: ListViewModel,
}

impl Default for ListController {
    fn default() -> Self {
        Self::from_state(ListState::new())
    }
}

impl ListController {
    pub fn new(records: &[RawRecord]) -> Self {
        Self::from_state(ListState::from_records(records))
    }

    pub fn from_state(state: ListState) -> Self {
        let view = state.view();
        Self { state, view }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn view(&self) -> &ListViewModel {
        &self.view
    }

    pub fn dispatch(&mut self, msg: Msg) -> &ListViewModel {
        if matches!(msg, Msg::NoOp) {
            return &self.view;
        }
        let state = std::mem::take(&mut self.state);
        self.state = update(state, msg);
        self.view = self.state.view();
        &self.view
    }

    pub fn load_records(&mut self, records: Vec<RawRecord>) -> &ListViewModel {
        self.dispatch(Msg::RecordsLoaded(records))
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) -> &ListViewModel {
        self.dispatch(Msg::SearchChanged(query.into()))
    }

    pub fn set_product_category_filter(&mut self, category: impl Into<String>) -> &ListViewModel {
        self.dispatch(Msg::ProductCategorySelected(category.into()))
    }

    pub fn toggle_product_category(&mut self, category: impl Into<String>) -> &ListViewModel {
        self.dispatch(Msg::ProductCategoryToggled(category.into()))
    }

    pub fn set_download_category_filter(&mut self, category: impl Into<String>) -> &ListViewModel {
        self.dispatch(Msg::DownloadCategorySelected(category.into()))
    }

    pub fn set_file_type_filter(&mut self, file_type: impl Into<String>) -> &ListViewModel {
        self.dispatch(Msg::FileTypeSelected(file_type.into()))
    }

    pub fn toggle_file_type(&mut self, file_type: impl Into<String>) -> &ListViewModel {
        self.dispatch(Msg::FileTypeToggled(file_type.into()))
    }

    pub fn handle_sort(&mut self, field: SortField) -> &ListViewModel {
        self.dispatch(Msg::SortRequested(field))
    }

    pub fn set_page(&mut self, page: usize) -> &ListViewModel {
        self.dispatch(Msg::PageSelected(page))
    }

    pub fn previous_page(&mut self) -> &ListViewModel {
        self.dispatch(Msg::PreviousPage)
    }

    pub fn next_page(&mut self) -> &ListViewModel {
        self.dispatch(Msg::NextPage)
    }

    pub fn set_page_size(&mut self, page_size: usize) -> &ListViewModel {
        self.dispatch(Msg::PageSizeChanged(page_size))
    }
}
