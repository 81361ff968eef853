//! # Catalog Crate
//!
//! Loads and indexes the cosmetics product catalog.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Product, Ingredient, Review, CatalogIndex)
//! - **parser**: Parse JSON catalog documents into Rust structs
//! - **index**: Build the index, validate ids, precompute rating stats
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::CatalogIndex;
//!
//! let index = CatalogIndex::seed()?;
//! let product = index.get_product("p1").unwrap();
//! println!("{} rates {:.1}", product.name, index.average_rating("p1"));
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{
    // Type aliases
    ProductId,
    // Core types
    Product,
    Ingredient,
    Review,
    CatalogIndex,
    RatingStats,
    // Enums
    IngredientRole,
    // Helpers
    average_rating,
};
