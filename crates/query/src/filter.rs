//! Filter stage: predicate evaluation over the schema-agnostic record view.
//!
//! A record matches when every dimension matches. Absent fields degrade
//! permissively where the dimension itself is permissive (empty search, `All`
//! variants, an unbounded price range) and fail to match where the dimension
//! asserts something about a field the record does not carry.

use serde::{Deserialize, Serialize};
use shopfront_core::Record;

/// Category dimension: the `"All"` sentinel or an exact match.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Is(String),
}

/// Stock dimension. `InStock` means `stock > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StockFilter {
    #[default]
    All,
    InStock,
    OutOfStock,
}

/// Status dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    fn wanted(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Active => Some("Active"),
            Self::Inactive => Some("Inactive"),
        }
    }
}

/// Inclusive price bounds in smallest currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self { min: 0, max: u64::MAX }
    }
}

impl PriceRange {
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// Parse a `"min-max"` input. Each bound that fails to parse falls back to
    /// its permissive default, so an unparsable range filters nothing out.
    pub fn parse(input: &str) -> Self {
        let mut parts = input.splitn(2, '-');
        let min = parts
            .next()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(0);
        let max = parts
            .next()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(u64::MAX);
        Self { min, max }
    }

    fn contains(&self, price: f64) -> bool {
        price >= self.min as f64 && price <= self.max as f64
    }
}

/// Full filter state. Each update from a collaborator is a whole-value
/// replacement, never a delta.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against the `name` field.
    pub search: String,
    pub category: CategoryFilter,
    pub price: PriceRange,
    pub stock: StockFilter,
    pub status: StatusFilter,
}

impl FilterCriteria {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = CategoryFilter::Is(category.into());
        self
    }

    pub fn with_price(mut self, range: PriceRange) -> Self {
        self.price = range;
        self
    }

    pub fn with_stock(mut self, stock: StockFilter) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }
}

/// Evaluate one record against the criteria. Pure, no side effects.
pub fn matches<R: Record>(record: &R, criteria: &FilterCriteria) -> bool {
    let matches_search = criteria.search.is_empty()
        || record
            .field("name")
            .and_then(|v| v.as_text().map(|name| {
                name.to_lowercase().contains(&criteria.search.to_lowercase())
            }))
            .unwrap_or(false);

    let matches_category = match &criteria.category {
        CategoryFilter::All => true,
        CategoryFilter::Is(wanted) => record
            .field("category")
            .and_then(|v| v.as_text().map(|c| c == wanted))
            .unwrap_or(false),
    };

    // Records without a price field pass the price dimension; the range is a
    // constraint on prices, not a requirement that one exists.
    let matches_price = record
        .field("price")
        .and_then(|v| v.as_number())
        .map(|price| criteria.price.contains(price))
        .unwrap_or(true);

    let stock = record.field("stock").and_then(|v| v.as_number());
    let matches_stock = match criteria.stock {
        StockFilter::All => true,
        StockFilter::InStock => stock.map(|s| s > 0.0).unwrap_or(false),
        StockFilter::OutOfStock => stock.map(|s| s == 0.0).unwrap_or(false),
    };

    let matches_status = match criteria.status.wanted() {
        None => true,
        Some(wanted) => record
            .field("status")
            .and_then(|v| v.as_text().map(|s| s == wanted))
            .unwrap_or(false),
    };

    matches_search && matches_category && matches_price && matches_stock && matches_status
}

/// Apply the criteria to a record sequence, preserving relative order.
pub fn filter<R: Record + Clone>(records: &[R], criteria: &FilterCriteria) -> Vec<R> {
    records
        .iter()
        .filter(|r| matches(*r, criteria))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::{Product, ProductStatus};

    fn product(id: &str, name: &str, category: &str, price: u64, stock: u32) -> Product {
        Product::new(id, name, category, price, stock, ProductStatus::Active).unwrap()
    }

    fn sample() -> Vec<Product> {
        vec![
            product("p1", "Premium Hoodie", "Clothing", 450, 3),
            product("p2", "Classic T-Shirt", "Clothing", 220, 0),
            product("p3", "Smart Lamp", "Home", 180, 9),
        ]
    }

    #[test]
    fn empty_criteria_match_everything() {
        let products = sample();
        let out = filter(&products, &FilterCriteria::default());
        assert_eq!(out, products);
    }

    #[test]
    fn search_is_case_insensitive_substring_on_name() {
        let products = sample();
        let criteria = FilterCriteria::default().with_search("shirt");
        let out = filter(&products, &criteria);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Classic T-Shirt");
    }

    #[test]
    fn category_all_passes_and_exact_match_filters() {
        let products = sample();
        let out = filter(&products, &FilterCriteria::default().with_category("Home"));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id.as_str(), "p3");
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let products = sample();
        let criteria = FilterCriteria::default().with_price(PriceRange::new(180, 220));
        let out = filter(&products, &criteria);
        let ids: Vec<&str> = out.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p2", "p3"]);
    }

    #[test]
    fn unparsable_price_range_filters_nothing_out() {
        let products = sample();
        let criteria = FilterCriteria::default().with_price(PriceRange::parse("cheap-ish"));
        assert_eq!(filter(&products, &criteria), products);
    }

    #[test]
    fn parse_handles_partial_ranges() {
        assert_eq!(PriceRange::parse("100-500"), PriceRange::new(100, 500));
        assert_eq!(PriceRange::parse("100-"), PriceRange::new(100, u64::MAX));
        assert_eq!(PriceRange::parse("-500"), PriceRange::new(0, 500));
        assert_eq!(PriceRange::parse(""), PriceRange::default());
        assert_eq!(PriceRange::parse("250"), PriceRange::new(250, u64::MAX));
    }

    #[test]
    fn stock_filter_distinguishes_in_and_out() {
        let products = sample();
        let in_stock = filter(&products, &FilterCriteria::default().with_stock(StockFilter::InStock));
        assert_eq!(in_stock.len(), 2);
        let out_of_stock =
            filter(&products, &FilterCriteria::default().with_stock(StockFilter::OutOfStock));
        assert_eq!(out_of_stock.len(), 1);
        assert_eq!(out_of_stock[0].id.as_str(), "p2");
    }

    #[test]
    fn status_filter_matches_exactly() {
        let mut products = sample();
        products[1].status = ProductStatus::Inactive;
        let active = filter(&products, &FilterCriteria::default().with_status(StatusFilter::Active));
        assert_eq!(active.len(), 2);
        let inactive =
            filter(&products, &FilterCriteria::default().with_status(StatusFilter::Inactive));
        assert_eq!(inactive.len(), 1);
        assert_eq!(inactive[0].id.as_str(), "p2");
    }

    #[test]
    fn dimensions_combine_conjunctively() {
        let products = sample();
        let criteria = FilterCriteria::default()
            .with_search("t-shirt")
            .with_category("Clothing")
            .with_stock(StockFilter::InStock);
        // p2 matches search + category but is out of stock.
        assert!(filter(&products, &criteria).is_empty());
    }

    #[test]
    fn zero_matches_is_a_valid_state() {
        let products = sample();
        let criteria = FilterCriteria::default().with_search("no such product");
        assert!(filter(&products, &criteria).is_empty());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_products() -> impl Strategy<Value = Vec<Product>> {
            prop::collection::vec(("[A-Za-z][A-Za-z ]{0,15}", 0u64..2000, 0u32..50), 0..40)
                .prop_map(|rows| {
                    rows.into_iter()
                        .enumerate()
                        .map(|(i, (name, price, stock))| {
                            Product::new(
                                format!("p{i}"),
                                name,
                                if i % 2 == 0 { "Clothing" } else { "Home" },
                                price,
                                stock,
                                if i % 3 == 0 {
                                    ProductStatus::Inactive
                                } else {
                                    ProductStatus::Active
                                },
                            )
                            .unwrap()
                        })
                        .collect()
                })
        }

        fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
            (
                "[a-z]{0,4}",
                prop_oneof![
                    Just(CategoryFilter::All),
                    Just(CategoryFilter::Is("Clothing".to_string())),
                ],
                0u64..1000,
                1000u64..3000,
                prop_oneof![
                    Just(StockFilter::All),
                    Just(StockFilter::InStock),
                    Just(StockFilter::OutOfStock)
                ],
                prop_oneof![
                    Just(StatusFilter::All),
                    Just(StatusFilter::Active),
                    Just(StatusFilter::Inactive)
                ],
            )
                .prop_map(|(search, category, min, max, stock, status)| FilterCriteria {
                    search,
                    category,
                    price: PriceRange::new(min, max),
                    stock,
                    status,
                })
        }

        proptest! {
            /// Property: the filtered output is an order-preserving subsequence.
            #[test]
            fn filter_yields_an_ordered_subsequence(
                products in arb_products(),
                criteria in arb_criteria(),
            ) {
                let out = filter(&products, &criteria);
                prop_assert!(out.len() <= products.len());

                let mut cursor = 0usize;
                for item in &out {
                    let pos = products[cursor..]
                        .iter()
                        .position(|p| p == item)
                        .map(|offset| cursor + offset);
                    prop_assert!(pos.is_some(), "output item not found in input order");
                    cursor = pos.unwrap() + 1;
                }
            }

            /// Property: every output record satisfies the predicate, and every
            /// dropped record fails it.
            #[test]
            fn filter_agrees_with_matches(
                products in arb_products(),
                criteria in arb_criteria(),
            ) {
                let out = filter(&products, &criteria);
                for p in &out {
                    prop_assert!(matches(p, &criteria));
                }
                prop_assert_eq!(
                    out.len(),
                    products.iter().filter(|p| matches(*p, &criteria)).count()
                );
            }
        }
    }
}
