/// One page of a collection together with the page count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
}

/// Slice out 1-based `page`. Pages outside `[1, total_pages]` are empty.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let total_pages = total_pages(items.len(), page_size);
    if page == 0 || page_size == 0 {
        return Page {
            items: Vec::new(),
            total_pages,
        };
    }
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    Page {
        items: items[start..end].to_vec(),
        total_pages,
    }
}

pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        len.div_ceil(page_size)
    }
}

/// Entry in a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

const FULL_WINDOW_LIMIT: usize = 7;

/// Page links to show around `current`.
///
/// Up to seven pages are listed in full. Beyond that the first and last
/// page plus `current - 1 ..= current + 1` stay visible, and a single
/// ellipsis stands in for each hidden run.
pub fn page_window(current: usize, total: usize) -> Vec<PageLink> {
    let mut links = Vec::new();
    for page in 1..=total {
        let near_current = page + 1 >= current && page <= current.saturating_add(1);
        if total <= FULL_WINDOW_LIMIT || near_current || page == 1 || page == total {
            links.push(PageLink::Page(page));
        } else if page + 2 == current || page == current.saturating_add(2) {
            links.push(PageLink::Ellipsis);
        }
    }
    links
}
