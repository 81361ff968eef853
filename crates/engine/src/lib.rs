//! Engine crate for the cosmetics catalog browser.
//!
//! This crate holds the browsing state (query, category, rating threshold,
//! focused product), debounces query edits, and derives the visible
//! catalog from that state.

pub mod config;
pub mod debounce;
pub mod engine;
pub mod error;
pub mod view;

pub use config::EngineConfig;
pub use debounce::Debouncer;
pub use engine::CatalogEngine;
pub use error::EngineError;
pub use view::{CatalogView, FilterState, MAX_MIN_RATING, MinRating, derive_view};
