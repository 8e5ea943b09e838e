//! Paging over the resolved (filtered + sorted) sequence, with a memoizing
//! page cache.
//!
//! Recomputing a slice on every re-render is wasteful when the user pages back
//! and forth over an unchanged result set, so materialized pages are memoized
//! per page number. The cache is tagged with a [`DatasetVersion`]: any change
//! to the resolved sequence shifts slice boundaries, so a version mismatch
//! clears the whole cache rather than patching it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default number of rows per table page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Opaque marker that changes whenever the filtered+sorted sequence is
/// recomputed from new inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DatasetVersion(u64);

impl DatasetVersion {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// `ceil(len / page_size)`. A zero page size has no pages.
pub fn total_pages(len: usize, page_size: usize) -> u32 {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size) as u32
}

/// Memoized page slices keyed by 1-based page number, valid for exactly one
/// dataset version.
#[derive(Debug)]
pub struct PageCache<R> {
    version: Option<DatasetVersion>,
    pages: HashMap<u32, Vec<R>>,
}

impl<R> Default for PageCache<R> {
    fn default() -> Self {
        Self { version: None, pages: HashMap::new() }
    }
}

impl<R: Clone> PageCache<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the slice for `page`, memoizing it under `version`.
    ///
    /// A version mismatch invalidates every cached page first. The caller is
    /// expected to clamp `page` to `[1, max(total_pages, 1)]`; pages past the
    /// end of `data` come back empty rather than padded.
    pub fn page(
        &mut self,
        data: &[R],
        version: DatasetVersion,
        page: u32,
        page_size: usize,
    ) -> &[R] {
        if self.version != Some(version) {
            self.pages.clear();
            self.version = Some(version);
        }

        self.pages
            .entry(page)
            .or_insert_with(|| {
                let start = (page.saturating_sub(1) as usize).saturating_mul(page_size);
                let end = start.saturating_add(page_size).min(data.len());
                if start >= data.len() {
                    Vec::new()
                } else {
                    data[start..end].to_vec()
                }
            })
            .as_slice()
    }

    pub fn is_cached(&self, version: DatasetVersion, page: u32) -> bool {
        self.version == Some(version) && self.pages.contains_key(&page)
    }

    pub fn cached_page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn clear(&mut self) {
        self.version = None;
        self.pages.clear();
    }
}

/// Current 1-based page, always clamped to `[1, max(total_pages, 1)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pager {
    page: u32,
}

impl Pager {
    pub fn new() -> Self {
        Self { page: 1 }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    fn clamp(page: u32, total: u32) -> u32 {
        page.clamp(1, total.max(1))
    }

    pub fn set_page(&mut self, page: u32, total: u32) {
        self.page = Self::clamp(page, total);
    }

    pub fn next(&mut self, total: u32) {
        self.page = Self::clamp(self.page.saturating_add(1), total);
    }

    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Re-clamp after the result set shrank (e.g. a stricter filter).
    pub fn reclamp(&mut self, total: u32) {
        self.page = Self::clamp(self.page, total);
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}
