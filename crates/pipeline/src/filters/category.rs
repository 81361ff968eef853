//! Filter to keep products in the selected category.

use crate::candidate::Candidate;
use crate::criteria::{CategorySelection, FilterCriteria};
use crate::traits::Filter;
use anyhow::Result;

/// Keeps candidates whose category equals the selection, ignoring case.
/// The "all" selection keeps everything.
pub struct CategoryFilter;

impl Filter for CategoryFilter {
    fn name(&self) -> &str {
        "CategoryFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<Candidate<'a>>,
        criteria: &FilterCriteria,
    ) -> Result<Vec<Candidate<'a>>> {
        let category = match &criteria.category {
            CategorySelection::All => return Ok(candidates),
            CategorySelection::Named(category) => category,
        };
        let filtered: Vec<Candidate<'a>> = candidates
            .into_iter()
            .filter(|candidate| candidate.product.in_category(category))
            .collect();
        Ok(filtered)
    }
}
