//! Cart state machine.
//!
//! Every mutation is synchronous and atomic from the caller's point of view:
//! a call fully applies before returning and no partial state is observable.
//! Quantities follow one truncation rule everywhere: a resulting quantity of
//! zero or less removes the line, so `update_qty(id, 0)` and
//! `remove_from_cart(id)` land in the same state.

use chrono::Utc;
use std::collections::BTreeMap;

use shopfront_core::{Product, ProductId};

use crate::event::CartEvent;

/// One cart line. The product is a snapshot captured at add time: `total`
/// deliberately prices against it, not against a possibly-edited catalog.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CartLine {
    pub product: Product,
    /// Invariant: `qty >= 1`. A would-be zero line does not exist.
    pub qty: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> u64 {
        u64::from(self.qty) * self.product.price
    }
}

type Observer = Box<dyn Fn(&CartEvent) + Send>;

/// Product-keyed cart lines plus an optional outbound notification hook.
#[derive(Default)]
pub struct CartStore {
    lines: BTreeMap<ProductId, CartLine>,
    observer: Option<Observer>,
}

impl core::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CartStore")
            .field("lines", &self.lines)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the outbound notification hook. The store works identically
    /// with or without one.
    pub fn set_observer(&mut self, observer: impl Fn(&CartEvent) + Send + 'static) {
        self.observer = Some(Box::new(observer));
    }

    fn emit(&self, event: CartEvent) {
        if let Some(observer) = &self.observer {
            observer(&event);
        }
    }

    /// Add `qty` of `product`. An existing line accumulates; the truncation
    /// rule applies to the result, so adding a negative quantity can shrink
    /// or remove a line, and an initial add of `qty <= 0` stores nothing.
    pub fn add_to_cart(&mut self, product: Product, qty: i64) {
        let id = product.id.clone();
        let current = self.lines.get(&id).map(|l| i64::from(l.qty)).unwrap_or(0);
        let existing = current > 0;
        let new_qty = current.saturating_add(qty);

        if new_qty <= 0 {
            if existing {
                self.lines.remove(&id);
                self.emit(CartEvent::LineRemoved { product_id: id, occurred_at: Utc::now() });
            }
            return;
        }

        let qty = u32::try_from(new_qty).unwrap_or(u32::MAX);
        self.lines.insert(id.clone(), CartLine { product, qty });
        let event = if existing {
            CartEvent::QtyUpdated { product_id: id, qty, occurred_at: Utc::now() }
        } else {
            CartEvent::LineAdded { product_id: id, qty, occurred_at: Utc::now() }
        };
        self.emit(event);
    }

    /// Set a line's quantity. Unknown ids are a no-op; `qty <= 0` removes the
    /// line entirely.
    pub fn update_qty(&mut self, id: &ProductId, qty: i64) {
        if !self.lines.contains_key(id) {
            return;
        }
        if qty <= 0 {
            self.lines.remove(id);
            self.emit(CartEvent::LineRemoved { product_id: id.clone(), occurred_at: Utc::now() });
            return;
        }
        let qty = u32::try_from(qty).unwrap_or(u32::MAX);
        if let Some(line) = self.lines.get_mut(id) {
            line.qty = qty;
        }
        self.emit(CartEvent::QtyUpdated { product_id: id.clone(), qty, occurred_at: Utc::now() });
    }

    /// Delete the line if present; no-op otherwise.
    pub fn remove_from_cart(&mut self, id: &ProductId) {
        if self.lines.remove(id).is_some() {
            self.emit(CartEvent::LineRemoved { product_id: id.clone(), occurred_at: Utc::now() });
        }
    }

    /// Reset to an empty cart.
    pub fn clear_cart(&mut self) {
        if self.lines.is_empty() {
            return;
        }
        self.lines.clear();
        self.emit(CartEvent::Cleared { occurred_at: Utc::now() });
    }

    pub fn line(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.get(id)
    }

    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total item count across lines.
    pub fn count(&self) -> u64 {
        self.lines.values().map(|l| u64::from(l.qty)).sum()
    }

    /// Total price across lines, using each line's snapshot price.
    pub fn total(&self) -> u64 {
        self.lines.values().map(CartLine::subtotal).sum()
    }
}
