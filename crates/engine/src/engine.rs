//! # Catalog Engine
//!
//! The single state holder behind the catalog browser. It owns:
//! 1. The raw query and its debounced, applied counterpart
//! 2. The selected category and minimum-rating threshold
//! 3. The focused product pointer for the detail view
//!
//! Every read derives the view from the current state with
//! [`derive_view`]; nothing derived is stored.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::watch;
use tracing::{debug, info};

use catalog::{CatalogIndex, Product, ProductId};
use pipeline::{CategorySelection, FilterPipeline, ProductDetail, category_options};

use crate::config::EngineConfig;
use crate::debounce::Debouncer;
use crate::error::EngineError;
use crate::view::{CatalogView, FilterState, MinRating, derive_view};

pub struct CatalogEngine {
    index: Arc<CatalogIndex>,
    filter_pipeline: Arc<FilterPipeline>,
    raw_query: String,
    query: Debouncer<String>,
    category: CategorySelection,
    min_rating: MinRating,
    focused: Option<ProductId>,
}

impl CatalogEngine {
    /// Create an engine over `index` with the standard filter pipeline.
    pub fn new(index: Arc<CatalogIndex>, config: &EngineConfig) -> Self {
        Self::with_pipeline(index, Arc::new(FilterPipeline::catalog()), config)
    }

    pub fn with_pipeline(
        index: Arc<CatalogIndex>,
        filter_pipeline: Arc<FilterPipeline>,
        config: &EngineConfig,
    ) -> Self {
        info!(
            "Catalog engine ready: {} products, debounce {:?}",
            index.products().len(),
            config.debounce
        );
        Self {
            index,
            filter_pipeline,
            raw_query: String::new(),
            query: Debouncer::new(String::new(), config.debounce),
            category: CategorySelection::All,
            min_rating: MinRating::default(),
            focused: None,
        }
    }

    // =========================================================================
    // Query
    // =========================================================================

    /// Record a query edit. Filtering picks it up once the debounce
    /// interval passes without another edit.
    ///
    /// Must be called from within a tokio runtime.
    pub fn set_query(&mut self, raw: impl Into<String>) {
        self.raw_query = raw.into();
        debug!("Query edited: {:?}", self.raw_query);
        self.query.schedule(self.raw_query.clone());
    }

    /// Apply the raw query immediately, dropping any pending edit.
    pub fn flush_query(&mut self) {
        self.query.flush(self.raw_query.clone());
    }

    /// The query as last typed
    pub fn raw_query(&self) -> &str {
        &self.raw_query
    }

    /// The query filtering currently uses
    pub fn applied_query(&self) -> String {
        self.query.current()
    }

    /// True while a query edit waits for the debounce interval
    pub fn query_pending(&self) -> bool {
        self.query.is_pending()
    }

    /// Receiver notified whenever a query is applied
    pub fn subscribe_query(&self) -> watch::Receiver<String> {
        self.query.subscribe()
    }

    // =========================================================================
    // Category and rating
    // =========================================================================

    pub fn set_category(&mut self, category: CategorySelection) {
        info!("Category selected: {}", category);
        self.category = category;
    }

    /// Select a category from user input, matched against this catalog's
    /// categories. See [`CategorySelection::resolve`].
    pub fn select_category(&mut self, input: &str) {
        let selection = CategorySelection::resolve(input, &self.index.categories());
        self.set_category(selection);
    }

    pub fn category(&self) -> &CategorySelection {
        &self.category
    }

    /// Set the minimum average rating, a whole number from 0 to 4.
    pub fn set_min_rating(&mut self, value: u8) -> Result<(), EngineError> {
        self.min_rating = MinRating::new(value)?;
        info!("Minimum rating set to {}", value);
        Ok(())
    }

    pub fn min_rating(&self) -> u8 {
        self.min_rating.value()
    }

    // =========================================================================
    // Derived view
    // =========================================================================

    /// Snapshot of the inputs filtering runs on
    pub fn state(&self) -> FilterState {
        FilterState {
            query: self.applied_query(),
            category: self.category.clone(),
            min_rating: self.min_rating,
        }
    }

    /// The filtered, ranked catalog for the current state
    pub fn view(&self) -> Result<CatalogView<'_>> {
        derive_view(&self.index, &self.filter_pipeline, &self.state())
    }

    /// Products of the current view, best rated first
    pub fn products(&self) -> Result<Vec<&Product>> {
        Ok(self.view()?.product_list())
    }

    /// "all" followed by each catalog category in first-seen order
    pub fn categories(&self) -> Vec<CategorySelection> {
        category_options(self.index.categories())
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Point the detail view at `id`. Unknown ids are accepted and simply
    /// resolve to no product.
    pub fn focus(&mut self, id: impl Into<ProductId>) {
        let id = id.into();
        if self.index.get_product(&id).is_none() {
            debug!("Focused id {} is not in the catalog", id);
        }
        self.focused = Some(id);
    }

    pub fn clear_focus(&mut self) {
        self.focused = None;
    }

    pub fn focused_id(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// The focused product, if the id is set and known
    pub fn focused_product(&self) -> Option<&Product> {
        self.focused
            .as_deref()
            .and_then(|id| self.index.get_product(id))
    }

    /// Detail view of the focused product
    pub fn focused_detail(&self) -> Option<ProductDetail<'_>> {
        self.focused
            .as_deref()
            .and_then(|id| ProductDetail::lookup(&self.index, id))
    }
}
