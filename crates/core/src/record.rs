//! Schema-agnostic field access for table rows.
//!
//! The query pipeline (filter, sort, paginate) does not depend on the concrete
//! `Product` shape; it reads rows through this `key -> value` accessor. Any
//! record set with a differently shaped schema (e.g. user records with nested
//! address/company fields) can be browsed by implementing [`Record`] and
//! flattening nested fields under their own keys.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A single field value as seen by the query pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn number(value: impl Into<f64>) -> Self {
        Self::Number(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Text(_) => None,
            Self::Number(n) => Some(*n),
        }
    }

    /// Ordering used by the sort engine.
    ///
    /// Text compares case-insensitively with a case-sensitive tiebreak (a
    /// collation stand-in); numbers compare arithmetically. Mixed or missing
    /// kinds compare as equal so such rows keep their relative input order.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => {
                let folded = a
                    .chars()
                    .flat_map(char::to_lowercase)
                    .cmp(b.chars().flat_map(char::to_lowercase));
                folded.then_with(|| a.cmp(b))
            }
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// Row accessor the query pipeline is generic over.
pub trait Record {
    /// Unique identity of the row within its dataset.
    fn record_id(&self) -> &str;

    /// Field lookup by column key. Unknown keys yield `None`.
    fn field(&self, key: &str) -> Option<FieldValue>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_comparison_is_case_insensitive_first() {
        let a = FieldValue::text("apple");
        let b = FieldValue::text("Banana");
        assert_eq!(a.compare(&b), Ordering::Less);
    }

    #[test]
    fn equal_text_up_to_case_breaks_ties_case_sensitively() {
        let a = FieldValue::text("Apple");
        let b = FieldValue::text("apple");
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(a.compare(&a.clone()), Ordering::Equal);
    }

    #[test]
    fn numbers_compare_arithmetically() {
        assert_eq!(
            FieldValue::number(5.0).compare(&FieldValue::number(20.0)),
            Ordering::Less
        );
        assert_eq!(
            FieldValue::number(7.0).compare(&FieldValue::number(7.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn mixed_kinds_compare_equal() {
        let t = FieldValue::text("10");
        let n = FieldValue::number(10.0);
        assert_eq!(t.compare(&n), Ordering::Equal);
        assert_eq!(n.compare(&t), Ordering::Equal);
    }
}
