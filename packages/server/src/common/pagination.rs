//! Offset pagination over fully materialized result sets.
//!
//! Search pipelines load every matching candidate, filter and sort in memory, then
//! slice a page. Because the whole set is known, `total_count` is always exact.
//!
//! # Usage
//!
//! ```rust,ignore
//! let request = PageRequest::clamped(Some(2), Some(10));
//! let page = paginate(sorted_results, request);
//! assert_eq!(page.current_page, 2);
//! ```

// ============================================================================
// Page request
// ============================================================================

/// Page size used when the caller gives none or an out-of-range value.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: u32 = 50;

/// Validated 1-based page selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    /// Create a page request. Zero values are raised to 1.
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Clamp raw caller input.
    ///
    /// A missing or non-positive page becomes 1. A missing, non-positive or
    /// oversized page size becomes [`DEFAULT_PAGE_SIZE`].
    pub fn clamped(page: Option<i64>, page_size: Option<i64>) -> Self {
        let page = match page {
            Some(p) if p > 0 => u32::try_from(p).unwrap_or(u32::MAX),
            _ => 1,
        };

        let page_size = match page_size {
            Some(s) if s > 0 && s <= i64::from(MAX_PAGE_SIZE) => s as u32,
            _ => DEFAULT_PAGE_SIZE,
        };

        Self { page, page_size }
    }

    /// 1-based page number, never zero.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Items per page, never zero.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Number of items skipped before this page.
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize).saturating_mul(self.page_size as usize)
    }

    /// `ceil(total_count / page_size)`.
    pub fn total_pages(&self, total_count: usize) -> u32 {
        let pages = total_count.div_ceil(self.page_size.max(1) as usize);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

// ============================================================================
// Page
// ============================================================================

/// One page of an ordered result set.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Size of the full result set before slicing.
    pub total_count: usize,
    pub total_pages: u32,
    pub current_page: u32,
}

impl<T> Page<T> {
    /// Transform the items while keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            total_pages: self.total_pages,
            current_page: self.current_page,
        }
    }
}

/// Slice `items` (already sorted) into the requested page.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let total_count = items.len();

    let items = items
        .into_iter()
        .skip(request.offset())
        .take(request.page_size() as usize)
        .collect();

    Page {
        items,
        total_count,
        total_pages: request.total_pages(total_count),
        current_page: request.page(),
    }
}
