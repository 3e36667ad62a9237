//! This modules defines the common functionality for paging data.

/// The number of questions on each page of the question list.
pub const QUESTIONS_PER_PAGE: u64 = 10;

/// The config for pagination
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// The page number to default to when not specified in a request.
    pub default_page: u64,
    /// The maximum number of questions on each page.
    pub page_size: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            page_size: QUESTIONS_PER_PAGE,
        }
    }
}

/// The number of pages needed to show `item_count` items, `page_size` at a time.
pub fn page_count(item_count: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }

    item_count.div_ceil(page_size)
}

/// The number of items that come before the 1-indexed `page`.
pub fn page_offset(page: u64, page_size: u64) -> u64 {
    page.saturating_sub(1).saturating_mul(page_size)
}
