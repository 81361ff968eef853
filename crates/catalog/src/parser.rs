//! Parser for JSON catalog documents.
//!
//! A catalog is a JSON array of products with camelCase keys:
//!
//! ```json
//! [{ "id": "p1", "name": "...", "brand": "...", "category": "Hidratante",
//!    "ingredients": [{ "name": "Glycerin", "role": "humectant" }],
//!    "howToUse": "...", "skinTypes": ["seca"],
//!    "reviews": [{ "author": "Ana", "rating": 5, "comment": "..." }] }]
//! ```

use crate::error::{CatalogError, Result};
use crate::types::*;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Parse a catalog document held in memory.
///
/// `origin` names where the text came from and only shows up in errors and
/// logs.
pub fn parse_catalog(json: &str, origin: &str) -> Result<Vec<Product>> {
    let products: Vec<Product> =
        serde_json::from_str(json).map_err(|source| CatalogError::Decode {
            origin: origin.to_string(),
            source,
        })?;

    report_undeclared_roles(&products, origin);
    debug!("Parsed {} products from {}", products.len(), origin);
    Ok(products)
}

/// Read and parse a catalog file from disk
pub fn read_catalog_file(path: &Path) -> Result<Vec<Product>> {
    let origin = path.display().to_string();
    let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: origin.clone(),
        source,
    })?;
    parse_catalog(&json, &origin)
}

/// Ingredients tagged with a role outside the declared set are kept, but
/// flagged so the data can be cleaned up.
fn report_undeclared_roles(products: &[Product], origin: &str) {
    for product in products {
        for ingredient in product.ingredients.iter().filter(|i| i.role.is_undeclared()) {
            if let IngredientRole::Other(tag) = &ingredient.role {
                warn!(
                    "{}: product {} ingredient '{}' uses unknown role '{}'",
                    origin, product.id, ingredient.name, tag
                );
            } else {
                debug!(
                    "{}: product {} ingredient '{}' uses undeclared role '{}'",
                    origin, product.id, ingredient.name, ingredient.role
                );
            }
        }
    }
}
