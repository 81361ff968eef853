//! Error types for the catalog crate.
//!
//! Everything here is a load-time failure: once a `CatalogIndex` is built,
//! lookups return `Option`s and empty slices rather than errors.

use thiserror::Error;

/// Errors that can occur while loading or validating a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading a catalog file
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The catalog document isn't valid JSON or doesn't match the schema
    #[error("Failed to decode catalog from {origin}: {source}")]
    Decode {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// Two products share the same identifier
    #[error("Duplicate product id: {id}")]
    DuplicateProduct { id: String },

    /// A product has a blank identifier
    #[error("Product at position {position} has an empty id")]
    EmptyProductId { position: usize },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
