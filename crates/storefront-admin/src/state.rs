//! Paging state machine for the product listing.

use storefront_core::{DEFAULT_SORT, MAX_PAGE_SIZE, PageRequest, SortSpec};

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Current position in the listing: page index, page size and sort.
///
/// Changing the size or the sort always goes back to the first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingState {
    pub page: u32,
    pub size: u32,
    pub sort: SortSpec,
}

impl Default for PagingState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PagingState {
    /// First page, default sort, `size` clamped into `1..=MAX_PAGE_SIZE`.
    pub fn new(size: u32) -> Self {
        Self {
            page: 0,
            size: size.clamp(1, MAX_PAGE_SIZE),
            sort: DEFAULT_SORT,
        }
    }

    pub fn request(&self) -> PageRequest {
        PageRequest::new(self.page, self.size, self.sort)
    }

    pub const fn can_go_previous(&self) -> bool {
        self.page > 0
    }

    pub const fn can_go_next(&self, total_pages: u32) -> bool {
        self.page + 1 < total_pages
    }

    /// Step back one page. Returns `false` when already on the first page.
    pub const fn previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Step forward one page. Returns `false` when already on the last page.
    pub const fn next(&mut self, total_pages: u32) -> bool {
        if !self.can_go_next(total_pages) {
            return false;
        }
        self.page += 1;
        true
    }

    pub const fn go_to(&mut self, page: u32) {
        self.page = page;
    }

    pub const fn reset_to_first(&mut self) {
        self.page = 0;
    }

    pub fn set_size(&mut self, size: u32) {
        self.size = size.clamp(1, MAX_PAGE_SIZE);
        self.page = 0;
    }

    pub const fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
        self.page = 0;
    }
}
