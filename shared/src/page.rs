//! Fixed-size page windows over the filtered employee list

use serde::{Deserialize, Serialize};

/// Employees shown per page unless configured otherwise
pub const DEFAULT_ITEMS_PER_PAGE: usize = 8;

/// Pagination state: a 1-based page number and the page size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageState {
    pub current_page: usize,
    pub items_per_page: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl PageState {
    /// First page with the given page size
    ///
    /// A zero page size is bumped to one so slicing stays well defined;
    /// configuration loading rejects zero before it gets here.
    pub fn with_page_size(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    /// `ceil(count / items_per_page)`; zero exactly when `count` is zero
    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.items_per_page.max(1))
    }

    /// The slice of `items` belonging to the current page
    ///
    /// Empty once the current page is past the last one.
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let size = self.items_per_page.max(1);
        let start = self.current_page.saturating_sub(1).saturating_mul(size);
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(size).min(items.len());
        &items[start..end]
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self, total_pages: usize) -> bool {
        self.current_page < total_pages
    }

    pub fn prev(&mut self) {
        if self.has_prev() {
            self.current_page -= 1;
        }
    }

    pub fn next(&mut self, total_pages: usize) {
        if self.has_next(total_pages) {
            self.current_page += 1;
        }
    }

    /// Jump to a page; page numbers below one land on the first page
    pub fn go_to(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// Pull the current page back into `[1, max(total_pages, 1)]`
    pub fn clamp(&mut self, total_pages: usize) {
        self.current_page = self.current_page.clamp(1, total_pages.max(1));
    }
}

/// What happens to the current page when filters change
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageOverflow {
    /// Leave the page untouched, even if it is now out of range
    #[default]
    Preserve,
    /// Clamp the page into the new range
    Clamp,
}

impl PageOverflow {
    /// Reconcile `page` with a freshly filtered result of `filtered_count` items
    pub fn apply(&self, page: &mut PageState, filtered_count: usize) {
        match self {
            PageOverflow::Preserve => {}
            PageOverflow::Clamp => page.clamp(page.total_pages(filtered_count)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        let page = PageState::default();
        assert_eq!(page.total_pages(0), 0);
        assert_eq!(page.total_pages(1), 1);
        assert_eq!(page.total_pages(8), 1);
        assert_eq!(page.total_pages(9), 2);
        assert_eq!(page.total_pages(16), 2);
        assert_eq!(page.total_pages(17), 3);
    }

    #[test]
    fn test_window_slices_by_page() {
        let items: Vec<u32> = (1..=10).collect();
        let mut page = PageState::default();
        assert_eq!(page.window(&items), &[1, 2, 3, 4, 5, 6, 7, 8]);

        page.go_to(2);
        assert_eq!(page.window(&items), &[9, 10]);

        page.go_to(3);
        assert!(page.window(&items).is_empty());
    }

    #[test]
    fn test_window_of_empty_list() {
        let items: Vec<u32> = Vec::new();
        assert!(PageState::default().window(&items).is_empty());
    }

    #[test]
    fn test_prev_next_bounds() {
        let mut page = PageState::default();
        assert!(!page.has_prev());
        page.prev();
        assert_eq!(page.current_page, 1);

        page.next(2);
        assert_eq!(page.current_page, 2);
        assert!(!page.has_next(2));
        page.next(2);
        assert_eq!(page.current_page, 2);

        page.prev();
        assert_eq!(page.current_page, 1);
    }

    #[test]
    fn test_go_to_zero_is_first_page() {
        let mut page = PageState::default();
        page.go_to(0);
        assert_eq!(page.current_page, 1);
    }

    #[test]
    fn test_zero_page_size_is_bumped() {
        let page = PageState::with_page_size(0);
        assert_eq!(page.items_per_page, 1);
        assert_eq!(page.total_pages(3), 3);
    }

    #[test]
    fn test_overflow_policies() {
        let mut page = PageState::default();
        page.go_to(3);

        PageOverflow::Preserve.apply(&mut page, 5);
        assert_eq!(page.current_page, 3);

        PageOverflow::Clamp.apply(&mut page, 9);
        assert_eq!(page.current_page, 2);

        PageOverflow::Clamp.apply(&mut page, 0);
        assert_eq!(page.current_page, 1);
    }
}
