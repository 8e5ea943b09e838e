//! Demo collaborator: drives a browse-and-shop session against the core the
//! way the dashboard UI would, logging along the way and printing a final
//! JSON summary.

mod sample;

use std::time::{Duration, Instant};

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use shopfront_cart::CartStore;
use shopfront_catalog::CatalogBrowser;
use shopfront_query::{StockFilter, DEFAULT_DEBOUNCE};

#[derive(Serialize)]
struct SessionSummary {
    matched: usize,
    total_pages: u32,
    page: u32,
    page_items: Vec<String>,
    cart_count: u64,
    cart_total: u64,
}

fn main() -> Result<()> {
    shopfront_observability::init();

    let products = sample::sample_products(1000);
    let mut browser = CatalogBrowser::with_defaults(products);
    info!(total = browser.records().len(), "catalog loaded");

    let mut cart = CartStore::new();
    cart.set_observer(|event| info!(?event, "cart changed"));

    // A burst of keystrokes; only the last survives the quiet window.
    let t0 = Instant::now();
    browser.queue_search("sm", t0);
    browser.queue_search("smart", t0 + Duration::from_millis(120));
    browser.poll_search(t0 + Duration::from_millis(120) + DEFAULT_DEBOUNCE);
    info!(matched = browser.result_len(), "search applied");

    browser.set_stock_filter(StockFilter::InStock);
    browser.toggle_sort("price");
    browser.toggle_sort("price"); // price descending

    // Page around; repeated visits hit the cache.
    browser.next_page();
    browser.prev_page();
    let first_page = browser.page().to_vec();

    for product in first_page.iter().take(3) {
        cart.add_to_cart(product.clone(), 1);
    }
    if let Some(p) = first_page.first() {
        cart.add_to_cart(p.clone(), 2);
        cart.update_qty(&p.id, 2);
    }

    let summary = SessionSummary {
        matched: browser.result_len(),
        total_pages: browser.total_pages(),
        page: browser.page_number(),
        page_items: browser.page().iter().map(|p| p.name.clone()).collect(),
        cart_count: cart.count(),
        cart_total: cart.total(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
