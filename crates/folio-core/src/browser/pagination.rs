//! Fixed-size page windows over the filtered record sequence.

use std::ops::Range;

use serde::Serialize;

/// Records shown per page.
pub const PAGE_SIZE: usize = 8;

/// Position of the current page within a filtered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page, 1-based.
    pub page: usize,
    /// Total pages; never less than 1.
    pub total_pages: usize,
    /// Number of records after filtering.
    pub total_items: usize,
}

impl Pagination {
    /// Compute pagination for `total_items` with the given current page.
    ///
    /// The page is clamped into `1..=total_pages`.
    pub fn new(page: usize, total_items: usize) -> Self {
        let total_pages = Self::total_pages_for(total_items);
        Self {
            page: page.clamp(1, total_pages),
            total_pages,
            total_items,
        }
    }

    /// `ceil(total_items / PAGE_SIZE)`, with a minimum of one page.
    pub const fn total_pages_for(total_items: usize) -> usize {
        if total_items == 0 {
            1
        } else {
            total_items.div_ceil(PAGE_SIZE)
        }
    }

    /// Whether `page` starts past the end of `total_items`.
    pub const fn is_out_of_range(page: usize, total_items: usize) -> bool {
        if page <= 1 {
            return false;
        }
        match (page - 1).checked_mul(PAGE_SIZE) {
            Some(start) => start >= total_items,
            None => true,
        }
    }

    /// Index range of the current page within the filtered sequence.
    pub fn range(&self) -> Range<usize> {
        let start = (self.page - 1)
            .saturating_mul(PAGE_SIZE)
            .min(self.total_items);
        let end = start.saturating_add(PAGE_SIZE).min(self.total_items);
        start..end
    }

    /// Slice the current page out of the filtered sequence.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        &items[range.start.min(items.len())..range.end.min(items.len())]
    }

    /// Controls are only shown when results overflow a single page.
    pub const fn is_visible(&self) -> bool {
        self.total_items > PAGE_SIZE
    }

    /// "Previous" is available on every page but the first.
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// "Next" is available on every page but the last.
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_items_is_one_page() {
        let p = Pagination::new(1, 0);
        assert_eq!(p.total_pages, 1);
        assert_eq!(p.range(), 0..0);
        assert!(!p.is_visible());
        assert!(!p.has_previous());
        assert!(!p.has_next());
    }

    #[test]
    fn test_exactly_one_full_page_hides_controls() {
        let p = Pagination::new(1, 8);
        assert_eq!(p.total_pages, 1);
        assert!(!p.is_visible());
    }

    #[test]
    fn test_nine_items_spill_onto_second_page() {
        let items: Vec<u32> = (0..9).collect();
        let p = Pagination::new(2, items.len());

        assert_eq!(p.total_pages, 2);
        assert!(p.is_visible());
        assert_eq!(p.slice(&items), &[8]);
        assert!(p.has_previous());
        assert!(!p.has_next());
    }

    #[test]
    fn test_page_is_clamped() {
        assert_eq!(Pagination::new(0, 20).page, 1);
        assert_eq!(Pagination::new(9, 20).page, 3);
    }

    #[test]
    fn test_out_of_range_detection() {
        assert!(!Pagination::is_out_of_range(1, 0));
        assert!(!Pagination::is_out_of_range(2, 9));
        assert!(Pagination::is_out_of_range(2, 8));
        assert!(Pagination::is_out_of_range(3, 3));
        assert!(Pagination::is_out_of_range(usize::MAX, 20));
        assert!(Pagination::is_out_of_range(usize::MAX / 2, usize::MAX));
    }

    #[test]
    fn test_huge_page_range_does_not_overflow() {
        let p = Pagination {
            page: usize::MAX,
            total_pages: 3,
            total_items: 20,
        };
        assert_eq!(p.range(), 20..20);
    }
}
