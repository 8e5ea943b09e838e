//! `shopfront-cart` — the shopping-cart aggregate, independent of the catalog
//! view. Lines are keyed by product identity and own a product snapshot taken
//! at add time; `count` and `total` are pure projections of the current state.

pub mod event;
pub mod store;

pub use event::CartEvent;
pub use store::{CartLine, CartStore};
