//! `shopfront-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model, the schema-agnostic record accessor, and the `Product`
//! entity shared by the query pipeline and the cart.

pub mod error;
pub mod product;
pub mod record;

pub use error::{CoreError, CoreResult};
pub use product::{Product, ProductId, ProductStatus};
pub use record::{FieldValue, Record};
