//! Filter state and the pure derivation of the visible catalog.
//!
//! `derive_view` is a function of the index and a `FilterState` snapshot
//! only. The engine calls it on every read, so the view can never go stale
//! relative to the inputs.

use anyhow::{Context, Result};
use catalog::{CatalogIndex, Product};
use pipeline::{
    Candidate, CategorySelection, FilterCriteria, FilterPipeline, candidates_from,
    category_options, rank_by_rating,
};

use crate::error::EngineError;

/// Highest selectable minimum-rating threshold
pub const MAX_MIN_RATING: u8 = 4;

/// Whole-star minimum rating threshold, 0 through 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct MinRating(u8);

impl MinRating {
    pub fn new(value: u8) -> Result<Self, EngineError> {
        if value > MAX_MIN_RATING {
            return Err(EngineError::RatingOutOfRange {
                value,
                max: MAX_MIN_RATING,
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for MinRating {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Snapshot of the inputs that drive filtering.
///
/// `query` is the applied (debounced) query, never the raw keystrokes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub query: String,
    pub category: CategorySelection,
    pub min_rating: MinRating,
}

impl FilterState {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(&self.query, self.category.clone(), self.min_rating.value())
    }
}

/// The derived catalog: what the presentation layer renders.
#[derive(Debug, Clone)]
pub struct CatalogView<'a> {
    /// Matching products, best rated first
    pub products: Vec<Candidate<'a>>,
    /// "all" followed by the catalog's categories
    pub categories: Vec<CategorySelection>,
    /// Applied query, trimmed, as the user typed it
    pub query: String,
}

impl<'a> CatalogView<'a> {
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn product_list(&self) -> Vec<&'a Product> {
        self.products.iter().map(|c| c.product).collect()
    }

    pub fn product_ids(&self) -> Vec<&'a str> {
        self.products.iter().map(|c| c.id()).collect()
    }

    /// Message to show instead of the list, if nothing matched.
    pub fn empty_state_message(&self) -> Option<String> {
        if !self.is_empty() {
            return None;
        }
        Some(if self.query.is_empty() {
            "Nenhum produto encontrado com os filtros selecionados.".to_string()
        } else {
            format!("Nenhum produto encontrado para \"{}\".", self.query)
        })
    }
}

/// Filter and rank the catalog for `state`.
pub fn derive_view<'a>(
    index: &'a CatalogIndex,
    pipeline: &FilterPipeline,
    state: &FilterState,
) -> Result<CatalogView<'a>> {
    let criteria = state.criteria();
    let filtered = pipeline
        .apply(candidates_from(index), &criteria)
        .context("Failed to apply catalog filters")?;

    Ok(CatalogView {
        products: rank_by_rating(filtered),
        categories: category_options(index.categories()),
        query: state.query.trim().to_string(),
    })
}
