//! Pagination window over question lists
//!
//! Pages are 1-based and hold `QUESTIONS_PER_PAGE` items. A page past the end of
//! the list is empty rather than an error.

use std::ops::Range;

use thiserror::Error;

/// Fixed page size for every paginated listing
pub const QUESTIONS_PER_PAGE: usize = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("page must be at least 1, got {0}")]
    OutOfRange(i64),
}

/// Validated 1-based page number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest(usize);

impl PageRequest {
    pub fn new(page: i64) -> Result<Self, PageError> {
        if page < 1 {
            return Err(PageError::OutOfRange(page));
        }
        usize::try_from(page)
            .map(Self)
            .map_err(|_| PageError::OutOfRange(page))
    }

    pub fn number(&self) -> usize {
        self.0
    }

    /// `[start, end)` item indexes covered by this page, unclamped.
    pub fn window(&self) -> Range<usize> {
        let start = (self.0 - 1).saturating_mul(QUESTIONS_PER_PAGE);
        start..start.saturating_add(QUESTIONS_PER_PAGE)
    }

    /// Keep only the items that fall inside this page.
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        let window = self.window();
        items
            .into_iter()
            .skip(window.start)
            .take(window.end - window.start)
            .collect()
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self(1)
    }
}

/// One page of a list plus the size of the list before slicing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: usize,
}

pub fn paginate<T>(items: Vec<T>, page: PageRequest) -> Paginated<T> {
    let total = items.len();
    Paginated {
        items: page.slice(items),
        total,
    }
}
