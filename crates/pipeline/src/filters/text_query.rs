//! Filter to keep products matching the search text.
//!
//! Matching is a case-insensitive substring test against the product's
//! name, brand and category, and against every ingredient name. The query
//! is compared literally: "ácido hialurônico" will not match an INCI name
//! like "Hyaluronic Acid".

use crate::candidate::Candidate;
use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use anyhow::Result;
use catalog::Product;

/// Keeps candidates whose text fields contain the query.
///
/// An empty query (after trimming) keeps everything.
pub struct TextQueryFilter;

impl TextQueryFilter {
    /// True when `needle` (already lowercased) occurs in any searchable
    /// field of `product`.
    pub fn matches(product: &Product, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let in_fields = [&product.name, &product.brand, &product.category]
            .iter()
            .any(|field| field.to_lowercase().contains(needle));

        in_fields
            || product
                .ingredients
                .iter()
                .any(|ingredient| ingredient.name.to_lowercase().contains(needle))
    }
}

impl Filter for TextQueryFilter {
    fn name(&self) -> &str {
        "TextQueryFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<Candidate<'a>>,
        criteria: &FilterCriteria,
    ) -> Result<Vec<Candidate<'a>>> {
        if criteria.query.is_empty() {
            return Ok(candidates);
        }
        let filtered: Vec<Candidate<'a>> = candidates
            .into_iter()
            .filter(|candidate| Self::matches(candidate.product, &criteria.query))
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::candidates_from;
    use crate::criteria::CategorySelection;
    use catalog::CatalogIndex;

    fn ids_matching(index: &CatalogIndex, query: &str) -> Vec<String> {
        let criteria = FilterCriteria::new(query, CategorySelection::All, 0);
        TextQueryFilter
            .apply(candidates_from(index), &criteria)
            .unwrap()
            .iter()
            .map(|c| c.id().to_string())
            .collect()
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let index = CatalogIndex::seed().unwrap();
        assert_eq!(ids_matching(&index, "").len(), 6);
        assert_eq!(ids_matching(&index, "   ").len(), 6);
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        let index = CatalogIndex::seed().unwrap();
        assert_eq!(ids_matching(&index, "VITAMINA C"), vec!["p4"]);
    }

    #[test]
    fn test_matches_brand_and_category() {
        let index = CatalogIndex::seed().unwrap();
        assert_eq!(ids_matching(&index, "derma flor"), vec!["p1", "p4"]);
        assert_eq!(ids_matching(&index, "protetor"), vec!["p2"]);
    }

    #[test]
    fn test_matches_ingredient_name() {
        let index = CatalogIndex::seed().unwrap();
        assert_eq!(ids_matching(&index, "hyaluronic"), vec!["p1"]);
        assert_eq!(ids_matching(&index, "glycerin"), vec!["p1", "p5"]);
    }

    #[test]
    fn test_portuguese_term_matches_literally() {
        let index = CatalogIndex::seed().unwrap();
        // Only p1's product name carries the Portuguese term
        assert_eq!(ids_matching(&index, "ácido hialurônico"), vec!["p1"]);
    }

    #[test]
    fn test_no_match() {
        let index = CatalogIndex::seed().unwrap();
        assert!(ids_matching(&index, "retinol").is_empty());
    }
}
