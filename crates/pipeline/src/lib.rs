//! Pipeline for filtering and ranking catalog products.
//!
//! This crate provides:
//! - Filter trait and implementations for candidate filtering
//! - FilterPipeline for composing filters
//! - Stable ranking by average rating
//! - ProductDetail for the single-product view
//!
//! ## Architecture
//! Products are processed in stages:
//! 1. Every catalog product becomes a Candidate carrying its average rating
//! 2. Filters drop candidates failing the text, category or rating predicate
//! 3. Survivors are ranked by average rating, ties in catalog order
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{candidates_from, rank_by_rating, CategorySelection, FilterCriteria, FilterPipeline};
//!
//! let criteria = FilterCriteria::new("hialurônico", CategorySelection::All, 4);
//! let filtered = FilterPipeline::catalog().apply(candidates_from(&index), &criteria)?;
//! let ranked = rank_by_rating(filtered);
//! ```

pub mod traits;
pub mod candidate;
pub mod criteria;
pub mod filters;
pub mod filter_pipeline;
pub mod ranking;
pub mod detail;

// Re-export main types
pub use traits::Filter;
pub use candidate::{Candidate, candidates_from};
pub use criteria::{ALL_CATEGORIES, CategorySelection, FilterCriteria, category_options, normalize_query};
pub use filter_pipeline::FilterPipeline;
pub use ranking::rank_by_rating;
pub use detail::ProductDetail;
