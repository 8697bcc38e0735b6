use crate::record::RawRecord;
use crate::sort::SortField;

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// A raw collection became available (initial mount or reload).
    RecordsLoaded(Vec<RawRecord>),
    /// User edited the search box.
    SearchChanged(String),
    /// User picked a product category, or `"All"`.
    ProductCategorySelected(String),
    /// User clicked a product category chip; clicking the active one clears it.
    ProductCategoryToggled(String),
    /// User picked a download category, or `"All"`.
    DownloadCategorySelected(String),
    /// User picked a file type, or `"All"`.
    FileTypeSelected(String),
    /// User clicked a file-type chip; clicking the active one clears it.
    FileTypeToggled(String),
    /// User clicked a sortable column header.
    SortRequested(SortField),
    /// User jumped to a page (1-based).
    PageSelected(usize),
    PreviousPage,
    NextPage,
    PageSizeChanged(usize),
    NoOp,
}
