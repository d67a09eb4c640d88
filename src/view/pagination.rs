//! Page windowing over the derived output.
//!
//! There is always at least one page, even for an empty collection, so
//! renderers can divide by `total_pages` without checking.

use serde::Serialize;
use std::ops::Range;

/// A contiguous slice of the derived output plus its position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_index: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.page_index + 1 < self.total_pages
    }

    /// Positions of this page's items within the derived output.
    pub fn range(&self) -> Range<usize> {
        page_range(self.page_index, self.page_size, self.total_count)
    }

    /// Converts the items while keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page_index: self.page_index,
            page_size: self.page_size,
            total_count: self.total_count,
            total_pages: self.total_pages,
        }
    }
}

// ============================================================================
// PURE FUNCTIONS
// ============================================================================

/// Page size with zero treated as one.
pub fn effective_page_size(page_size: usize) -> usize {
    page_size.max(1)
}

/// Number of pages needed for `total_count` items, never less than one.
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    total_count
        .div_ceil(effective_page_size(page_size))
        .max(1)
}

/// Clamps a page index to `[0, total_pages - 1]`.
pub fn clamp_page_index(page_index: usize, total_pages: usize) -> usize {
    if total_pages == 0 {
        0
    } else {
        page_index.min(total_pages - 1)
    }
}

/// Index range `[page_index * size, (page_index + 1) * size)` clamped to the
/// collection bounds.
pub fn page_range(page_index: usize, page_size: usize, total_count: usize) -> Range<usize> {
    let size = effective_page_size(page_size);
    let start = page_index.saturating_mul(size).min(total_count);
    let end = start.saturating_add(size).min(total_count);
    start..end
}

/// Slices `items` into the page at `page_index`, clamping the index.
pub fn paginate<T>(items: &[T], page_index: usize, page_size: usize) -> Page<&T> {
    let page_size = effective_page_size(page_size);
    let total_count = items.len();
    let total_pages = total_pages(total_count, page_size);
    let page_index = clamp_page_index(page_index, total_pages);
    let range = page_range(page_index, page_size, total_count);

    Page {
        items: items[range].iter().collect(),
        page_index,
        page_size,
        total_count,
        total_pages,
    }
}
