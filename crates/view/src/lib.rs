//! `shopfront-view` — presentation-facing state with real invariants:
//! version-tagged page slicing and display column order. No rendering here;
//! collaborators consume slices and descriptors and draw them however they
//! like.

pub mod columns;
pub mod pager;

pub use columns::{Column, ColumnOrder};
pub use pager::{total_pages, DatasetVersion, PageCache, Pager, DEFAULT_PAGE_SIZE};
