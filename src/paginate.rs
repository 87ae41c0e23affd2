// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Page slicing over any ordered sequence.
//!
//! Page indexes here are 0-based. Front-ends that number pages from 1 go
//! through [`from_one_based`] first.

/// Items `[index * size, index * size + size)`, clipped to the sequence.
/// A start past the end yields an empty slice.
pub fn slice<T>(items: &[T], index: usize, size: usize) -> &[T] {
    let start = index.saturating_mul(size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

/// `ceil(count / size)`. Zero items means zero pages.
pub fn total_pages(count: usize, size: usize) -> usize {
    if size == 0 {
        return 0;
    }
    count.div_ceil(size)
}

/// Converts a 1-based page number to an index. Page 0 does not exist.
pub fn from_one_based(page: usize) -> Option<usize> {
    page.checked_sub(1)
}

/// One page of a result sequence.
#[derive(Debug, Clone, Copy)]
pub struct Page<'a, T> {
    pub index: usize,
    pub size: usize,
    pub items: &'a [T],
    pub total_items: usize,
    pub total_pages: usize,
}

impl<'a, T> Page<'a, T> {
    pub fn new(all: &'a [T], index: usize, size: usize) -> Self {
        Self {
            index,
            size,
            items: slice(all, index, size),
            total_items: all.len(),
            total_pages: total_pages(all.len(), size),
        }
    }

    pub fn has_next(&self) -> bool {
        self.index.saturating_add(1) < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
