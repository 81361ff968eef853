//! CatalogIndex building and indexing logic.
//!
//! Builds the index from parsed products, checks id uniqueness, and
//! precomputes per-product review statistics.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// The catalog shipped with the crate.
const SEED_CATALOG: &str = include_str!("../data/seed_catalog.json");

impl CatalogIndex {
    /// Build an index from products in catalog order.
    ///
    /// Steps:
    /// 1. Validate ids (non-empty, unique)
    /// 2. Insert products, keeping their order
    /// 3. Compute rating statistics
    pub fn from_products(products: Vec<Product>) -> Result<Self> {
        validate_ids(&products)?;

        let mut index = CatalogIndex::new();
        for product in products {
            index.insert_product(product);
        }
        index.compute_rating_stats();

        let (products, reviews) = index.counts();
        info!("Catalog indexed: {} products, {} reviews", products, reviews);
        Ok(index)
    }

    /// Load the embedded seed catalog
    pub fn seed() -> Result<Self> {
        let products = parser::parse_catalog(SEED_CATALOG, "seed catalog")?;
        Self::from_products(products)
    }

    /// Load a catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading catalog from {:?}", path);
        let products = parser::read_catalog_file(path)?;
        Self::from_products(products)
    }

    /// Compute review statistics for every product.
    pub fn compute_rating_stats(&mut self) {
        let rating_stats = self
            .products
            .par_iter()
            .map(|product| {
                (
                    product.id.clone(),
                    RatingStats::from_reviews(&product.reviews),
                )
            })
            .collect();
        self.rating_stats = rating_stats;
    }

    /// Distinct categories in first-seen catalog order.
    ///
    /// Categories compare case-insensitively, so "Hidratante" and
    /// "hidratante" collapse into the label seen first.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .filter(|product| seen.insert(product.category.to_lowercase()))
            .map(|product| product.category.clone())
            .collect()
    }
}

/// Reject blank and duplicate product ids
fn validate_ids(products: &[Product]) -> Result<()> {
    let mut seen = HashSet::with_capacity(products.len());
    for (position, product) in products.iter().enumerate() {
        if product.id.trim().is_empty() {
            return Err(CatalogError::EmptyProductId { position });
        }
        if !seen.insert(product.id.as_str()) {
            return Err(CatalogError::DuplicateProduct {
                id: product.id.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, category: &str, ratings: &[f32]) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Produto {}", id),
            brand: "Marca".to_string(),
            category: category.to_string(),
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
    fn test_seed_catalog_loads() {
        let index = CatalogIndex::seed().unwrap();
        let (products, reviews) = index.counts();

        assert_eq!(products, 6);
        assert_eq!(reviews, 11);
        assert_eq!(index.products()[0].id, "p1");
    }

    #[test]
    fn test_from_products_rejects_duplicate_ids() {
        let err = CatalogIndex::from_products(vec![
            product("a", "X", &[]),
            product("a", "Y", &[]),
        ])
        .unwrap_err();

        assert!(matches!(err, CatalogError::DuplicateProduct { ref id } if id == "a"));
    }

    #[test]
    fn test_from_products_rejects_blank_id() {
        let err = CatalogIndex::from_products(vec![
            product("a", "X", &[]),
            product("  ", "Y", &[]),
        ])
        .unwrap_err();

        assert!(matches!(err, CatalogError::EmptyProductId { position: 1 }));
    }

    #[test]
    fn test_rating_stats() {
        let index = CatalogIndex::from_products(vec![
            product("a", "X", &[5.0, 4.0]),
            product("b", "X", &[]),
        ])
        .unwrap();

        let stats = index.get_rating_stats("a").unwrap();
        assert_eq!(stats.avg_rating, 4.5);
        assert_eq!(stats.review_count, 2);

        let empty = index.get_rating_stats("b").unwrap();
        assert_eq!(empty.avg_rating, 0.0);
        assert_eq!(empty.review_count, 0);
    }

    #[test]
    fn test_average_rating_without_stats_falls_back() {
        let mut index = CatalogIndex::new();
        index.insert_product(product("a", "X", &[2.0, 3.0]));

        assert!(index.get_rating_stats("a").is_none());
        assert_eq!(index.average_rating("a"), 2.5);
        assert_eq!(index.average_rating("missing"), 0.0);
    }

    #[test]
    fn test_replacing_product_refreshes_rating_stats() {
        let mut index = CatalogIndex::from_products(vec![product("a", "X", &[5.0])]).unwrap();

        let replacement = product("a", "X", &[1.0, 2.0]);
        let expected = replacement.average_rating();
        index.insert_product(replacement);

        assert_eq!(index.products().len(), 1);
        assert_eq!(index.average_rating("a"), expected);
        assert_eq!(index.get_rating_stats("a").unwrap().review_count, 2);
    }

    #[test]
    fn test_categories_first_seen_case_insensitive() {
        let index = CatalogIndex::from_products(vec![
            product("a", "Hidratante", &[]),
            product("b", "Limpeza", &[]),
            product("c", "hidratante", &[]),
            product("d", "Sérum", &[]),
        ])
        .unwrap();

        assert_eq!(index.categories(), vec!["Hidratante", "Limpeza", "Sérum"]);
    }

    #[test]
    fn test_seed_categories() {
        let index = CatalogIndex::seed().unwrap();
        assert_eq!(
            index.categories(),
            vec!["Hidratante", "Protetor Solar", "Limpeza", "Sérum", "Esfoliante"]
        );
    }
}
