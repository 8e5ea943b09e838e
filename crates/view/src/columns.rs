//! Display order of table columns, mutable via drag/drop move commands.
//!
//! Pure reordering state: it decides which column a field renders under and
//! nothing else. Row filtering, sorting and pagination are untouched by it.

use serde::{Deserialize, Serialize};

/// A table column descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub key: String,
    pub label: String,
    pub sortable: bool,
}

impl Column {
    pub fn new(key: impl Into<String>, label: impl Into<String>, sortable: bool) -> Self {
        Self { key: key.into(), label: label.into(), sortable }
    }
}

/// Ordered column descriptors with array-move semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnOrder {
    columns: Vec<Column>,
}

impl ColumnOrder {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// The product table's default layout.
    pub fn product_defaults() -> Self {
        Self::new(vec![
            Column::new("id", "ID", true),
            Column::new("img", "Image", false),
            Column::new("name", "Name", true),
            Column::new("category", "Category", false),
            Column::new("price", "Price", true),
            Column::new("stock", "Stock", true),
            Column::new("status", "Status", false),
        ])
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Remove the descriptor at `source` and reinsert it at `target` in the
    /// remaining sequence. An unresolvable `source` is a no-op; `target` past
    /// the end appends (splice semantics).
    pub fn move_column(&mut self, source: usize, target: usize) {
        if source >= self.columns.len() {
            return;
        }
        let moved = self.columns.remove(source);
        let target = target.min(self.columns.len());
        self.columns.insert(target, moved);
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.key == key)
    }
}

impl Default for ColumnOrder {
    fn default() -> Self {
        Self::product_defaults()
    }
}
