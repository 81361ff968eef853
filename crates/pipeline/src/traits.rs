//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to candidate sets.

use crate::candidate::Candidate;
use crate::criteria::FilterCriteria;
use anyhow::Result;

/// Core trait for filtering catalog candidates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows a built pipeline to be shared behind an `Arc`
/// - Filters take ownership of the Vec<Candidate> and return a filtered Vec
/// - Filters must keep the relative order of the candidates they retain
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter (takes ownership)
    /// * `criteria` - The active query, category and rating threshold
    fn apply<'a>(
        &self,
        candidates: Vec<Candidate<'a>>,
        criteria: &FilterCriteria,
    ) -> Result<Vec<Candidate<'a>>>;
}
