//! Filter to ensure a minimum average rating.
//!
//! Products without reviews average 0, so any threshold above 0 removes
//! them.

use crate::candidate::Candidate;
use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use anyhow::Result;

/// Removes candidates whose average rating is below the threshold.
///
/// ## Algorithm
/// Keep a candidate when `avg_rating >= criteria.min_rating`. A threshold
/// of 0 never excludes anything on rating grounds.
pub struct MinimumRatingFilter;

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<Candidate<'a>>,
        criteria: &FilterCriteria,
    ) -> Result<Vec<Candidate<'a>>> {
        if criteria.min_rating <= 0.0 {
            return Ok(candidates);
        }
        let filtered: Vec<Candidate<'a>> = candidates
            .into_iter()
            .filter(|candidate| candidate.avg_rating >= criteria.min_rating)
            .collect();

        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::CategorySelection;
    use catalog::{Product, Review};

    fn product(id: &str, ratings: &[f32]) -> Product {
        Product {
            id: id.to_string(),
            name: id.to_string(),
            brand: String::new(),
            category: "Hidratante".to_string(),
            ingredients: vec![],
            how_to_use: String::new(),
            skin_types: vec![],
            reviews: ratings
                .iter()
                .map(|&rating| Review {
                    author: "Ana".to_string(),
                    rating,
                    comment: String::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_minimum_rating_filter() {
        let high = product("high", &[5.0, 4.0]);
        let exact = product("exact", &[4.0, 4.0]);
        let low = product("low", &[3.0, 4.0]);
        let unrated = product("unrated", &[]);

        let candidates = vec![
            Candidate::new(&high, high.average_rating()),
            Candidate::new(&exact, exact.average_rating()),
            Candidate::new(&low, low.average_rating()),
            Candidate::new(&unrated, unrated.average_rating()),
        ];

        let criteria = FilterCriteria::new("", CategorySelection::All, 4);
        let filtered = MinimumRatingFilter.apply(candidates, &criteria).unwrap();

        let ids: Vec<_> = filtered.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec!["high", "exact"]);
    }

    #[test]
    fn test_zero_threshold_keeps_unrated_and_negative() {
        let unrated = product("unrated", &[]);
        let odd = product("odd", &[-2.0]);

        let candidates = vec![
            Candidate::new(&unrated, unrated.average_rating()),
            Candidate::new(&odd, odd.average_rating()),
        ];

        let criteria = FilterCriteria::new("", CategorySelection::All, 0);
        let filtered = MinimumRatingFilter.apply(candidates, &criteria).unwrap();

        assert_eq!(filtered.len(), 2);
    }
}
