//! Source page range selection

use crate::types::{BookletError, Result};

/// A half-open range `[first, last)` of 0-based source page indices.
///
/// The range always satisfies `first <= last <= total_pages`. The setters
/// clamp out-of-bounds values and drag the other bound along instead of
/// failing, so a range can be edited one bound at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    first: usize,
    last: usize,
    total_pages: usize,
}

impl PageRange {
    /// Create a validated range
    pub fn new(first: usize, last: usize, total_pages: usize) -> Result<Self> {
        if first > last {
            return Err(BookletError::InvalidConfiguration(format!(
                "First page {} is after last page {}",
                first, last
            )));
        }
        if last > total_pages {
            return Err(BookletError::InvalidConfiguration(format!(
                "Last page {} is beyond the document's {} pages",
                last, total_pages
            )));
        }
        Ok(Self {
            first,
            last,
            total_pages,
        })
    }

    /// Range covering every page of the document
    pub fn full(total_pages: usize) -> Self {
        Self {
            first: 0,
            last: total_pages,
            total_pages,
        }
    }

    pub fn first(&self) -> usize {
        self.first
    }

    pub fn last(&self) -> usize {
        self.last
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Number of pages in the range
    pub fn len(&self) -> usize {
        self.last - self.first
    }

    pub fn is_empty(&self) -> bool {
        self.first == self.last
    }

    pub fn contains(&self, page: usize) -> bool {
        (self.first..self.last).contains(&page)
    }

    /// Move the first bound, pushing `last` forward if it would be passed.
    pub fn set_first(&mut self, page: usize) {
        let page = page.min(self.total_pages);
        if page > self.last {
            self.last = page;
        }
        self.first = page;
    }

    /// Move the last bound, pulling `first` back if it would be passed.
    pub fn set_last(&mut self, page: usize) {
        if page > self.total_pages {
            self.last = self.total_pages;
            return;
        }
        if page < self.first {
            self.first = page;
        }
        self.last = page;
    }
}
