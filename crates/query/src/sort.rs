//! Sort stage: stable ordering by a single column key.

use serde::{Deserialize, Serialize};
use shopfront_core::Record;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Sort state. `key: None` means the input order is kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn by(key: impl Into<String>, direction: SortDirection) -> Self {
        Self { key: Some(key.into()), direction }
    }

    pub fn unsorted() -> Self {
        Self::default()
    }

    /// Header-click semantics: re-selecting the current ascending key flips to
    /// descending; anything else starts ascending on the clicked key.
    pub fn toggle(&self, key: impl Into<String>) -> Self {
        let key = key.into();
        let direction = match (&self.key, self.direction) {
            (Some(current), SortDirection::Asc) if *current == key => SortDirection::Desc,
            _ => SortDirection::Asc,
        };
        Self { key: Some(key), direction }
    }
}

/// Produce a new sequence ordered by `spec`. The input is never mutated.
///
/// The sort is stable: records comparing equal under the key (including
/// records missing the field, which compare equal to everything) keep their
/// relative input order. `Desc` reverses the comparator, not the output, so
/// stability is preserved in both directions.
pub fn sort<R: Record + Clone>(records: &[R], spec: &SortSpec) -> Vec<R> {
    let Some(key) = &spec.key else {
        return records.to_vec();
    };

    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = match (a.field(key), b.field(key)) {
            (Some(va), Some(vb)) => va.compare(&vb),
            _ => Ordering::Equal,
        };
        match spec.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}
