//! Search results and pagination.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Products per page on the storefront grid.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Total number of items.
    pub total: usize,
    /// Total number of pages.
    pub total_pages: usize,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info. `page` is clamped into `1..=total_pages`.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = if total == 0 {
            1
        } else {
            (total + per_page - 1) / per_page
        };
        let page = page.clamp(1, total_pages);

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.per_page
    }

    /// Index range of this page's items, `[(page-1)*size, page*size)`
    /// clipped to the item count.
    pub fn range(&self) -> Range<usize> {
        let start = self.offset().min(self.total);
        let end = (start + self.per_page).min(self.total);
        start..end
    }

    /// Page selector entries.
    ///
    /// Shows the first and last page, the current page and its immediate
    /// neighbours, with one ellipsis for each run of hidden pages. Empty
    /// when everything fits on one page.
    pub fn page_window(&self) -> Vec<PageMarker> {
        if self.total_pages <= 1 {
            return Vec::new();
        }

        let mut markers = Vec::new();
        for i in 1..=self.total_pages {
            let near_current = i + 1 >= self.page && i <= self.page + 1;
            if i == 1 || i == self.total_pages || near_current {
                markers.push(PageMarker::Page(i));
            } else if markers.last() != Some(&PageMarker::Ellipsis) {
                markers.push(PageMarker::Ellipsis);
            }
        }
        markers
    }

    /// Get start item number (1-indexed).
    pub fn start_item(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.offset() + 1
        }
    }

    /// Get end item number.
    pub fn end_item(&self) -> usize {
        self.range().end
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE, 0)
    }
}

/// One entry in the page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

/// One page of results.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults<T> {
    /// The result items.
    pub items: Vec<T>,
    /// Pagination info.
    pub pagination: Pagination,
}

impl<T> SearchResults<T> {
    /// Create new search results.
    pub fn new(items: Vec<T>, pagination: Pagination) -> Self {
        Self { items, pagination }
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get number of items in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Results counter text, e.g. "1 product" or "9 products".
pub fn results_label(total: usize) -> String {
    format!("{} product{}", total, if total == 1 { "" } else { "s" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageMarker::{Ellipsis, Page};

    #[test]
    fn test_pagination_basics() {
        let p = Pagination::new(2, 10, 45);
        assert_eq!(p.total_pages, 5);
        assert!(p.has_next);
        assert!(p.has_prev);
        assert_eq!(p.offset(), 10);
        assert_eq!(p.range(), 10..20);
    }

    #[test]
    fn test_pagination_last_page_partial() {
        let p = Pagination::new(5, 10, 45);
        assert!(!p.has_next);
        assert_eq!(p.range(), 40..45);
        assert_eq!(p.start_item(), 41);
        assert_eq!(p.end_item(), 45);
    }

    #[test]
    fn test_pagination_clamps_page() {
        assert_eq!(Pagination::new(0, 12, 30).page, 1);
        assert_eq!(Pagination::new(9, 12, 30).page, 3);
    }

    #[test]
    fn test_pagination_empty() {
        let p = Pagination::new(1, 12, 0);
        assert_eq!(p.total_pages, 1);
        assert_eq!(p.range(), 0..0);
        assert_eq!(p.start_item(), 0);
        assert!(p.page_window().is_empty());
    }

    #[test]
    fn test_page_window_middle() {
        let p = Pagination::new(5, 10, 100);
        assert_eq!(
            p.page_window(),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_page_window_edges() {
        assert_eq!(
            Pagination::new(1, 10, 100).page_window(),
            vec![Page(1), Page(2), Ellipsis, Page(10)]
        );
        assert_eq!(
            Pagination::new(10, 10, 100).page_window(),
            vec![Page(1), Ellipsis, Page(9), Page(10)]
        );
        assert_eq!(
            Pagination::new(2, 10, 30).page_window(),
            vec![Page(1), Page(2), Page(3)]
        );
    }

    #[test]
    fn test_page_window_single_gap_page() {
        // Page 2 is hidden but still shown as a gap marker.
        assert_eq!(
            Pagination::new(4, 10, 50).page_window(),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn test_results_label() {
        assert_eq!(results_label(0), "0 products");
        assert_eq!(results_label(1), "1 product");
        assert_eq!(results_label(9), "9 products");
    }
}
