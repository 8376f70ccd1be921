//! Page request and page result types shared by listing queries

use serde::{Deserialize, Serialize};

const DEFAULT_PAGE_SIZE: u64 = 20;
const MAX_PAGE_SIZE: u64 = 1000;
// Offsets and limits are bound as SQLite INTEGER (i64)
const MAX_OFFSET: u64 = i64::MAX as u64;

/// Page request: zero-based page index and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pageable {
    pub page: u64,
    pub size: u64,
}

impl Pageable {
    /// Build a page request, see `clamped` for the accepted range.
    pub fn new(page: u64, size: u64) -> Self {
        Self { page, size }.clamped()
    }

    /// Size within `1..=MAX_PAGE_SIZE` and `page * size` within `i64::MAX`.
    /// A page past the last one simply comes back empty.
    pub fn clamped(self) -> Self {
        let size = self.size.clamp(1, MAX_PAGE_SIZE);
        Self {
            page: self.page.min(MAX_OFFSET / size),
            size,
        }
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size).min(MAX_OFFSET)
    }
}

impl Default for Pageable {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

/// One page of results together with the total number of matching rows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, pageable: Pageable, total_elements: u64) -> Self {
        Self {
            content,
            page: pageable.page,
            size: pageable.size,
            total_elements,
        }
    }

    pub fn total_pages(&self) -> u64 {
        self.total_elements.div_ceil(self.size.max(1))
    }

    pub fn is_last(&self) -> bool {
        self.page.saturating_add(1) >= self.total_pages()
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
        }
    }
}
