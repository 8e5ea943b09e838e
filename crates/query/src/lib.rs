//! `shopfront-query` — the filter and sort stages of the browsing pipeline,
//! plus the debounce abstraction that coalesces bursts of search keystrokes.
//!
//! Everything here is deterministic domain logic: no IO, no timers, no hidden
//! state. The debouncer models time through caller-supplied instants so the
//! coalescing contract is testable without a runtime.

pub mod debounce;
pub mod filter;
pub mod sort;

pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use filter::{filter, matches, CategoryFilter, FilterCriteria, PriceRange, StatusFilter, StockFilter};
pub use sort::{sort, SortDirection, SortSpec};
