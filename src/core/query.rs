//! Page requests, paginated views, and navigation windows

use crate::core::error::PageError;
use serde::{Deserialize, Serialize};

/// Page sizes offered by the page-size selector
pub const PAGE_SIZES: [usize; 4] = [10, 20, 50, 100];

/// At most this many numbered page buttons are visible at once
pub const PAGE_WINDOW: usize = 7;

/// A validated pagination request
///
/// Page numbering starts at 1 and the size must be one of [`PAGE_SIZES`].
/// A page number beyond the last page is deliberately not rejected here:
/// filters can shrink the matched set after the user has navigated, and
/// the engine reproduces that permissive behavior by returning an empty
/// page with accurate totals (clamping, if wanted, belongs to the UI).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    /// Build a request, validating the page number and size
    pub fn new(page: usize, page_size: usize) -> Result<Self, PageError> {
        if page == 0 {
            return Err(PageError::PageNumberZero);
        }
        if !PAGE_SIZES.contains(&page_size) {
            return Err(PageError::UnsupportedPageSize(page_size));
        }
        Ok(Self { page, page_size })
    }

    /// The first page at the given size
    pub fn first(page_size: usize) -> Result<Self, PageError> {
        Self::new(1, page_size)
    }

    /// Current page number (starts at 1)
    pub fn page(&self) -> usize {
        self.page
    }

    /// Number of items per page
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The same size, moved to another page
    pub fn at_page(&self, page: usize) -> Result<Self, PageError> {
        Self::new(page, self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
        }
    }
}

/// One page of matched records plus totals for the pagination footer
#[derive(Debug, Clone, Serialize)]
pub struct ViewResult<T> {
    /// Records on the current page, in original list order
    pub items: Vec<T>,

    /// Count of records matching all criteria and the search term
    pub total_matched: usize,

    /// Total number of pages, at least 1 even for an empty set
    pub total_pages: usize,

    /// 1-based index of the first item slot on this page; 0 when nothing matched
    pub range_start: usize,

    /// 1-based index of the last item on this page, capped at the match count
    pub range_end: usize,

    /// The page number this view was computed for
    pub page: usize,

    /// The page size this view was computed for
    pub page_size: usize,

    /// Whether a later page exists
    pub has_next: bool,

    /// Whether an earlier page exists
    pub has_prev: bool,
}

/// Slice one page out of the matched set
///
/// The matched collection is never mutated; concatenating every page from
/// 1 to `total_pages` reconstructs it exactly. An out-of-range page yields
/// empty `items` with totals still computed from the full matched set.
pub fn paginate<T: Clone>(matched: &[T], request: PageRequest) -> ViewResult<T> {
    let total_matched = matched.len();
    let page = request.page();
    let page_size = request.page_size();
    let total_pages = total_matched.div_ceil(page_size).max(1);

    let start = (page - 1) * page_size;
    let items = if start < total_matched {
        matched[start..(start + page_size).min(total_matched)].to_vec()
    } else {
        Vec::new()
    };

    ViewResult {
        items,
        total_matched,
        total_pages,
        range_start: if total_matched > 0 { start + 1 } else { 0 },
        range_end: (page * page_size).min(total_matched),
        page,
        page_size,
        has_next: page * page_size < total_matched,
        has_prev: page > 1,
    }
}

/// Numbered page buttons visible for the current position
///
/// Shows every page when there are at most [`PAGE_WINDOW`] of them;
/// otherwise the leading block near the start, the trailing block near the
/// end, and a window centered on the current page in between.
pub fn page_window(current: usize, total_pages: usize) -> Vec<usize> {
    if total_pages <= PAGE_WINDOW {
        return (1..=total_pages).collect();
    }
    if current <= 4 {
        (1..=PAGE_WINDOW).collect()
    } else if current + 3 >= total_pages {
        (total_pages - PAGE_WINDOW + 1..=total_pages).collect()
    } else {
        (current - 3..=current + 3).collect()
    }
}
