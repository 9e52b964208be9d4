//! Pagination state: page size and requested page.
//!
//! The page size is picked from an enumerated set of options (10/20/50/100
//! by default, configurable). The requested page is stored as-is; the
//! view-model clamps it into range on every computation, so an out-of-range
//! page silently lands on the last valid page instead of erroring.

/// Page-size options offered when the configuration does not override them.
pub const DEFAULT_PAGE_SIZES: &[usize] = &[10, 20, 50, 100];

/// The (page_size, current_page) pair governing which contiguous slice of
/// the sorted dataset is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    /// Rows per page. Always positive.
    pub page_size: usize,
    /// The requested page, 1-based. May exceed the page count; the
    /// view-model clamps on read.
    pub current_page: usize,
}

impl Pagination {
    /// Create pagination state starting on page 1.
    pub fn new(page_size: usize) -> Self {
        debug_assert!(page_size > 0, "page size must be positive");
        Self {
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    /// Jump to a specific page. No-op when already there.
    pub fn set_page(&mut self, page: usize) {
        if page != self.current_page && page >= 1 {
            self.current_page = page;
        }
    }

    /// Change the page size. The current page is intentionally left alone;
    /// the next view computation re-clamps it if the page count shrank.
    pub fn set_page_size(&mut self, size: usize) {
        if size > 0 {
            self.page_size = size;
        }
    }

}

/// The next page size when cycling forward through `sizes`.
///
/// Sizes not present in the list (possible after a CLI override) fall back
/// to the first option.
pub fn next_page_size(sizes: &[usize], current: usize) -> usize {
    match sizes.iter().position(|&s| s == current) {
        Some(i) if i + 1 < sizes.len() => sizes[i + 1],
        Some(_) => current,
        None => sizes.first().copied().unwrap_or(current),
    }
}

/// The previous page size when cycling backward through `sizes`.
pub fn prev_page_size(sizes: &[usize], current: usize) -> usize {
    match sizes.iter().position(|&s| s == current) {
        Some(i) if i > 0 => sizes[i - 1],
        Some(_) => current,
        None => sizes.first().copied().unwrap_or(current),
    }
}
