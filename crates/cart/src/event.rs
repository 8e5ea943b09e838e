//! Outbound cart notifications.
//!
//! The store may hand these to an observer (a toast layer, a badge updater)
//! after each state change. They are strictly one-way: nothing in the cart's
//! behavior depends on whether anyone listens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shopfront_core::ProductId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CartEvent {
    /// A new line entered the cart.
    LineAdded {
        product_id: ProductId,
        qty: u32,
        occurred_at: DateTime<Utc>,
    },
    /// An existing line's quantity changed (add-on-existing or stepper).
    QtyUpdated {
        product_id: ProductId,
        qty: u32,
        occurred_at: DateTime<Utc>,
    },
    /// A line left the cart (explicit removal or quantity truncated to zero).
    LineRemoved {
        product_id: ProductId,
        occurred_at: DateTime<Utc>,
    },
    /// The whole cart was emptied.
    Cleared { occurred_at: DateTime<Utc> },
}

impl CartEvent {
    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Self::LineAdded { occurred_at, .. }
            | Self::QtyUpdated { occurred_at, .. }
            | Self::LineRemoved { occurred_at, .. }
            | Self::Cleared { occurred_at } => *occurred_at,
        }
    }

    pub fn product_id(&self) -> Option<&ProductId> {
        match self {
            Self::LineAdded { product_id, .. }
            | Self::QtyUpdated { product_id, .. }
            | Self::LineRemoved { product_id, .. } => Some(product_id),
            Self::Cleared { .. } => None,
        }
    }
}
