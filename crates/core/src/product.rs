use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::record::{FieldValue, Record};

/// Product identifier: an opaque string supplied by the catalog source
/// (e.g. `"p42"`). The core never generates ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Product availability status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductStatus {
    Active,
    Inactive,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

/// A catalog entry. Immutable once loaded; edits replace the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    /// Price in smallest currency unit (e.g., cents).
    pub price: u64,
    pub stock: u32,
    pub status: ProductStatus,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub img: String,
}

impl Product {
    /// Validate and build a product record.
    ///
    /// Identity and name must be non-empty; everything else is free-form.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: u64,
        stock: u32,
        status: ProductStatus,
    ) -> CoreResult<Self> {
        let id = id.into();
        let name = name.into();

        if id.trim().is_empty() {
            return Err(CoreError::invalid_id("product id cannot be empty"));
        }
        if name.trim().is_empty() {
            return Err(CoreError::validation("product name cannot be empty"));
        }

        Ok(Self {
            id: ProductId::new(id),
            name,
            category: category.into(),
            price,
            stock,
            status,
            desc: String::new(),
            img: String::new(),
        })
    }

    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }

    pub fn with_img(mut self, img: impl Into<String>) -> Self {
        self.img = img.into();
        self
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

impl Record for Product {
    fn record_id(&self) -> &str {
        self.id.as_str()
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "id" => Some(FieldValue::text(self.id.as_str())),
            "name" => Some(FieldValue::text(self.name.clone())),
            "category" => Some(FieldValue::text(self.category.clone())),
            "price" => Some(FieldValue::number(self.price as f64)),
            "stock" => Some(FieldValue::number(self.stock)),
            "status" => Some(FieldValue::text(self.status.as_str())),
            "desc" => Some(FieldValue::text(self.desc.clone())),
            "img" => Some(FieldValue::text(self.img.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shirt() -> Product {
        Product::new("p1", "Classic T-Shirt", "Clothing", 1999, 12, ProductStatus::Active)
            .unwrap()
            .with_desc("Classic T-Shirt with high quality and great features")
            .with_img("https://picsum.photos/seed/p1/200/140")
    }

    #[test]
    fn new_product_rejects_empty_id() {
        let err = Product::new("  ", "Shirt", "Clothing", 100, 1, ProductStatus::Active)
            .unwrap_err();
        match err {
            CoreError::InvalidId(_) => {}
            other => panic!("expected InvalidId, got {other:?}"),
        }
    }

    #[test]
    fn new_product_rejects_empty_name() {
        let err = Product::new("p1", "   ", "Clothing", 100, 1, ProductStatus::Active)
            .unwrap_err();
        match err {
            CoreError::Validation(_) => {}
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn record_fields_expose_the_known_columns() {
        let p = shirt();
        assert_eq!(p.field("name"), Some(FieldValue::text("Classic T-Shirt")));
        assert_eq!(p.field("price"), Some(FieldValue::number(1999.0)));
        assert_eq!(p.field("stock"), Some(FieldValue::number(12.0)));
        assert_eq!(p.field("status"), Some(FieldValue::text("Active")));
        assert_eq!(p.field("nonexistent"), None);
    }

    #[test]
    fn record_id_matches_product_id() {
        let p = shirt();
        assert_eq!(p.record_id(), p.id.as_str());
    }

    #[test]
    fn zero_stock_is_out_of_stock() {
        let mut p = shirt();
        assert!(p.in_stock());
        p.stock = 0;
        assert!(!p.in_stock());
    }

    #[test]
    fn product_round_trips_through_json() {
        let p = shirt();
        let json = serde_json::to_string(&p).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
