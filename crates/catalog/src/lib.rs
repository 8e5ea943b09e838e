//! `shopfront-catalog` — the narrow facade collaborators drive.
//!
//! Owns the product dataset plus all browsing state (criteria, sort spec,
//! pager, page cache, column order) and wires the pipeline:
//! dataset → filter → stable sort → paginate-with-cache. The UI layer calls
//! in with whole-value control updates and reads page slices back out.

pub mod browser;

pub use browser::{CatalogBrowser, ALL_CATEGORIES};
