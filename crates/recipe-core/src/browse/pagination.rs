//! Fixed-size, 1-based pagination.

use crate::config::DEFAULT_PAGE_SIZE;

/// Page numbers shown on each side of the current page.
const SIBLING_PAGES: i64 = 2;
/// Page numbers always shown at each end.
const BOUNDARY_PAGES: i64 = 1;

/// One entry of the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageItem {
    Page(usize),
    Gap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// A page size of 0 is treated as 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(total / page_size)`; 0 when there is nothing to show.
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// Bring `page` into `[1, max(1, total_pages)]`.
    pub fn clamp(&self, page: usize, total: usize) -> usize {
        page.clamp(1, self.total_pages(total).max(1))
    }

    /// Items of the 1-based `page`, after clamping.
    pub fn slice<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
        let page = self.clamp(page, items.len());
        let start = (page - 1) * self.page_size;
        let end = (start + self.page_size).min(items.len());
        &items[start.min(end)..end]
    }
}

/// Page numbers to render for `page` of `total_pages`: both ends, the
/// current page with its siblings, and a gap wherever numbers are skipped.
/// A gap never stands in for a single page.
pub fn page_window(page: usize, total_pages: usize) -> Vec<PageItem> {
    let count = total_pages as i64;
    let page = page as i64;
    let span = |from: i64, to: i64| (from..=to).map(|n| PageItem::Page(n as usize));

    let tail_start = (count - BOUNDARY_PAGES + 1).max(BOUNDARY_PAGES + 1);
    let siblings_start = (page - SIBLING_PAGES)
        .min(count - BOUNDARY_PAGES - SIBLING_PAGES * 2 - 1)
        .max(BOUNDARY_PAGES + 2);
    let siblings_end = (page + SIBLING_PAGES)
        .max(BOUNDARY_PAGES + SIBLING_PAGES * 2 + 2)
        .min(if tail_start <= count { tail_start - 2 } else { count - 1 });

    let mut items: Vec<PageItem> = span(1, BOUNDARY_PAGES.min(count)).collect();
    if siblings_start > BOUNDARY_PAGES + 2 {
        items.push(PageItem::Gap);
    } else if BOUNDARY_PAGES + 1 < count - BOUNDARY_PAGES {
        items.push(PageItem::Page((BOUNDARY_PAGES + 1) as usize));
    }
    items.extend(span(siblings_start, siblings_end));
    if siblings_end < count - BOUNDARY_PAGES - 1 {
        items.push(PageItem::Gap);
    } else if count - BOUNDARY_PAGES > BOUNDARY_PAGES {
        items.push(PageItem::Page((count - BOUNDARY_PAGES) as usize));
    }
    items.extend(span(tail_start, count));
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        let pages = Pagination::new(9);
        assert_eq!(pages.total_pages(0), 0);
        assert_eq!(pages.total_pages(1), 1);
        assert_eq!(pages.total_pages(9), 1);
        assert_eq!(pages.total_pages(10), 2);
        assert_eq!(pages.total_pages(25), 3);
    }

    #[test]
    fn test_last_page_holds_remainder() {
        let pages = Pagination::new(9);
        let items: Vec<u32> = (0..25).collect();
        assert_eq!(pages.slice(&items, 3), &[18, 19, 20, 21, 22, 23, 24]);

        let full: Vec<u32> = (0..18).collect();
        assert_eq!(pages.slice(&full, 2).len(), 9);
    }

    #[test]
    fn test_clamp() {
        let pages = Pagination::new(9);
        assert_eq!(pages.clamp(0, 20), 1);
        assert_eq!(pages.clamp(5, 20), 3);
        assert_eq!(pages.clamp(4, 0), 1);
    }

    #[test]
    fn test_slice_empty() {
        let pages = Pagination::default();
        let items: Vec<u32> = Vec::new();
        assert!(pages.slice(&items, 1).is_empty());
    }

    #[test]
    fn test_zero_page_size() {
        assert_eq!(Pagination::new(0).page_size(), 1);
    }

    fn strip(page: usize, total_pages: usize) -> String {
        page_window(page, total_pages)
            .iter()
            .map(|item| match item {
                PageItem::Page(n) => n.to_string(),
                PageItem::Gap => "..".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_page_window_short_runs_show_every_page() {
        assert_eq!(strip(1, 0), "");
        assert_eq!(strip(1, 1), "1");
        assert_eq!(strip(3, 5), "1 2 3 4 5");
        assert_eq!(strip(4, 9), "1 2 3 4 5 6 7 8 9");
    }

    #[test]
    fn test_page_window_gaps() {
        assert_eq!(strip(1, 34), "1 2 3 4 5 6 7 .. 34");
        assert_eq!(strip(17, 34), "1 .. 15 16 17 18 19 .. 34");
        assert_eq!(strip(34, 34), "1 .. 28 29 30 31 32 33 34");
        assert_eq!(strip(10, 10), "1 .. 4 5 6 7 8 9 10");
    }

    #[test]
    fn test_page_window_length_is_bounded() {
        for total in 0..60 {
            for page in 1..=total.max(1) {
                assert!(page_window(page, total).len() <= 9, "page {page} of {total}");
            }
        }
    }
}
