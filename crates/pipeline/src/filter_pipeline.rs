//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::candidate::Candidate;
use crate::criteria::FilterCriteria;
use crate::filters::{CategoryFilter, MinimumRatingFilter, TextQueryFilter};
use crate::traits::Filter;
use anyhow::{Context, Result};

/// Chains multiple filters together into a processing pipeline.
///
/// A candidate survives only if every filter keeps it, so the pipeline is
/// the conjunction of its filters' predicates.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(TextQueryFilter)
///     .add_filter(CategoryFilter)
///     .add_filter(MinimumRatingFilter);
///
/// let filtered = pipeline.apply(candidates_from(&index), &criteria)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The text, category and rating filters, in that order.
    pub fn catalog() -> Self {
        Self::new()
            .add_filter(TextQueryFilter)
            .add_filter(CategoryFilter)
            .add_filter(MinimumRatingFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the configured filters, in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter
    /// * `criteria` - Query, category and threshold for this derivation
    ///
    /// # Returns
    /// * `Ok(Vec<Candidate>)` - Survivors, in their input order
    /// * `Err` - If any filter fails
    pub fn apply<'a>(
        &self,
        candidates: Vec<Candidate<'a>>,
        criteria: &FilterCriteria,
    ) -> Result<Vec<Candidate<'a>>> {
        let mut current = candidates;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter
                .apply(current, criteria)
                .with_context(|| format!("{} failed", filter.name()))?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::candidates_from;
    use crate::criteria::CategorySelection;
    use catalog::CatalogIndex;

    #[test]
    fn test_empty_pipeline() {
        let index = CatalogIndex::seed().unwrap();
        let pipeline = FilterPipeline::new();
        let criteria = FilterCriteria::new("vitamina", CategorySelection::All, 4);

        let filtered = pipeline.apply(candidates_from(&index), &criteria).unwrap();
        assert_eq!(filtered.len(), 6);
    }

    #[test]
    fn test_single_filter() {
        let index = CatalogIndex::seed().unwrap();
        let pipeline = FilterPipeline::new().add_filter(CategoryFilter);
        let criteria = FilterCriteria::new(
            "",
            CategorySelection::Named("limpeza".to_string()),
            0,
        );

        let filtered = pipeline.apply(candidates_from(&index), &criteria).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id(), "p3");
    }

    #[test]
    fn test_catalog_pipeline_filter_order() {
        assert_eq!(
            FilterPipeline::catalog().filter_names(),
            vec!["TextQueryFilter", "CategoryFilter", "MinimumRatingFilter"]
        );
    }

    #[test]
    fn test_all_predicates_must_hold() {
        let index = CatalogIndex::seed().unwrap();
        // "derma flor" matches p1 (4.5) and p4 (4.0); both clear a threshold of 4
        let criteria = FilterCriteria::new("derma flor", CategorySelection::All, 4);
        let filtered = FilterPipeline::catalog()
            .apply(candidates_from(&index), &criteria)
            .unwrap();
        let ids: Vec<_> = filtered.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec!["p1", "p4"]);

        let criteria = FilterCriteria::new(
            "derma flor",
            CategorySelection::Named("Sérum".to_string()),
            4,
        );
        let filtered = FilterPipeline::catalog()
            .apply(candidates_from(&index), &criteria)
            .unwrap();
        let ids: Vec<_> = filtered.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec!["p4"]);
    }
}
