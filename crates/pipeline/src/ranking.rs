//! Ordering of filtered candidates.

use crate::candidate::Candidate;

/// Sort candidates by average rating, highest first.
///
/// `sort_by` is stable, so products with equal averages keep their catalog
/// order. `total_cmp` keeps the comparator a total order even when
/// unvalidated ratings produce a NaN mean.
pub fn rank_by_rating(mut candidates: Vec<Candidate<'_>>) -> Vec<Candidate<'_>> {
    candidates.sort_by(|a, b| b.avg_rating.total_cmp(&a.avg_rating));
    candidates
}
