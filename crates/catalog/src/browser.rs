//! Browsing facade over one record dataset.

use std::time::Instant;

use tracing::{debug, info};

use shopfront_core::{CoreError, CoreResult, Product, Record};
use shopfront_query::{
    filter, sort, CategoryFilter, Debouncer, FilterCriteria, PriceRange, SortSpec, StatusFilter,
    StockFilter,
};
use shopfront_view::{
    total_pages, ColumnOrder, DatasetVersion, PageCache, Pager, DEFAULT_PAGE_SIZE,
};

/// Category list sentinel meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "All";

/// All browsing state for one dataset, with synchronous run-to-completion
/// operations. Control updates recompute the resolved sequence eagerly, so a
/// read never observes half-applied state; each recompute reads the dataset
/// as a stable snapshot and bumps the dataset version, invalidating the page
/// cache wholesale.
pub struct CatalogBrowser<R: Record + Clone = Product> {
    records: Vec<R>,
    criteria: FilterCriteria,
    sort_spec: SortSpec,
    resolved: Vec<R>,
    version: DatasetVersion,
    page_size: usize,
    pager: Pager,
    cache: PageCache<R>,
    columns: ColumnOrder,
    search_input: Debouncer<String>,
}

impl<R: Record + Clone> CatalogBrowser<R> {
    pub fn new(records: Vec<R>, page_size: usize, columns: ColumnOrder) -> Self {
        let mut browser = Self {
            records,
            criteria: FilterCriteria::default(),
            sort_spec: SortSpec::unsorted(),
            resolved: Vec::new(),
            version: DatasetVersion::default(),
            page_size,
            pager: Pager::new(),
            cache: PageCache::new(),
            columns,
            search_input: Debouncer::default(),
        };
        browser.recompute();
        browser
    }

    /// Rebuild the resolved sequence from the current dataset and controls.
    fn recompute(&mut self) {
        self.resolved = sort(&filter(&self.records, &self.criteria), &self.sort_spec);
        self.version = self.version.next();
        self.pager.reclamp(self.total_pages());
        debug!(
            matched = self.resolved.len(),
            of = self.records.len(),
            page = self.pager.page(),
            "resolved sequence recomputed"
        );
    }

    // ---- dataset input -------------------------------------------------

    /// Wholesale dataset replacement (initial load or a completed external
    /// fetch). Rejects duplicate record ids and leaves the previous dataset
    /// untouched on failure, so a bad refresh cannot corrupt browsing state.
    pub fn load(&mut self, records: Vec<R>) -> CoreResult<()> {
        let mut seen = std::collections::HashSet::new();
        for record in &records {
            if !seen.insert(record.record_id().to_string()) {
                return Err(CoreError::conflict(format!(
                    "duplicate record id: {}",
                    record.record_id()
                )));
            }
        }
        info!(count = records.len(), "catalog dataset replaced");
        self.records = records;
        self.recompute();
        Ok(())
    }

    /// Swap the record with the same id (collaborator edit). Unknown ids
    /// change nothing.
    pub fn replace(&mut self, record: R) {
        let id = record.record_id().to_string();
        if let Some(slot) = self.records.iter_mut().find(|r| r.record_id() == id) {
            *slot = record;
            debug!(%id, "record replaced");
            self.recompute();
        }
    }

    /// Delete the record with this id (collaborator delete). Unknown ids are
    /// a no-op.
    pub fn remove(&mut self, id: &str) {
        let before = self.records.len();
        self.records.retain(|r| r.record_id() != id);
        if self.records.len() != before {
            debug!(%id, "record removed");
            self.recompute();
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    // ---- filter & sort controls ----------------------------------------

    /// Whole-value criteria replacement. Filter changes jump back to page 1.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.pager.reset();
        self.recompute();
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Immediate (undebounced) search update.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.criteria.search = search.into();
        self.pager.reset();
        self.recompute();
    }

    /// Record a keystroke at `now`; supersedes any pending search text.
    pub fn queue_search(&mut self, search: impl Into<String>, now: Instant) {
        self.search_input.submit(search.into(), now);
    }

    /// Apply the pending search text once its quiet window has elapsed.
    /// Returns whether a recomputation happened.
    pub fn poll_search(&mut self, now: Instant) -> bool {
        match self.search_input.poll(now) {
            Some(search) => {
                self.set_search(search);
                true
            }
            None => false,
        }
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        let category = category.into();
        self.criteria.category = if category == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Is(category)
        };
        self.pager.reset();
        self.recompute();
    }

    /// Price range from raw `"min-max"` input; unparsable bounds fall back
    /// to the permissive defaults.
    pub fn set_price_range(&mut self, input: &str) {
        self.criteria.price = PriceRange::parse(input);
        self.pager.reset();
        self.recompute();
    }

    pub fn set_stock_filter(&mut self, stock: StockFilter) {
        self.criteria.stock = stock;
        self.pager.reset();
        self.recompute();
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.criteria.status = status;
        self.pager.reset();
        self.recompute();
    }

    /// Reset every filter dimension and drop any pending search input.
    pub fn clear_filters(&mut self) {
        self.search_input.cancel();
        self.criteria = FilterCriteria::default();
        self.pager.reset();
        self.recompute();
    }

    /// Whole-value sort replacement. Sorting keeps the current page.
    pub fn set_sort(&mut self, spec: SortSpec) {
        self.sort_spec = spec;
        self.recompute();
    }

    /// Header-click semantics (asc, then desc, then asc on another key).
    pub fn toggle_sort(&mut self, key: impl Into<String>) {
        self.sort_spec = self.sort_spec.toggle(key);
        self.recompute();
    }

    pub fn sort_spec(&self) -> &SortSpec {
        &self.sort_spec
    }

    // ---- page navigation -----------------------------------------------

    pub fn set_page(&mut self, page: u32) {
        let total = self.total_pages();
        self.pager.set_page(page, total);
    }

    pub fn next_page(&mut self) {
        let total = self.total_pages();
        self.pager.next(total);
    }

    pub fn prev_page(&mut self) {
        self.pager.prev();
    }

    pub fn page_number(&self) -> u32 {
        self.pager.page()
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.resolved.len(), self.page_size)
    }

    pub fn result_len(&self) -> usize {
        self.resolved.len()
    }

    /// The current page slice of the filtered + sorted sequence.
    pub fn page(&mut self) -> &[R] {
        self.cache
            .page(&self.resolved, self.version, self.pager.page(), self.page_size)
    }

    /// Cached slices currently held for the live dataset version.
    pub fn cached_page_count(&self) -> usize {
        self.cache.cached_page_count()
    }

    // ---- columns & misc ------------------------------------------------

    pub fn move_column(&mut self, source: usize, target: usize) {
        self.columns.move_column(source, target);
    }

    pub fn columns(&self) -> &ColumnOrder {
        &self.columns
    }

    /// Distinct category values in first-seen dataset order, preceded by the
    /// `"All"` sentinel, for a category dropdown.
    pub fn categories(&self) -> Vec<String> {
        let mut out = vec![ALL_CATEGORIES.to_string()];
        for record in &self.records {
            if let Some(category) = record.field("category").and_then(|v| v.as_text().map(String::from)) {
                if !out.contains(&category) {
                    out.push(category);
                }
            }
        }
        out
    }
}

impl CatalogBrowser<Product> {
    /// Product browser with the standard defaults: ten rows per page and the
    /// product table's column layout.
    pub fn with_defaults(products: Vec<Product>) -> Self {
        Self::new(products, DEFAULT_PAGE_SIZE, ColumnOrder::product_defaults())
    }
}
