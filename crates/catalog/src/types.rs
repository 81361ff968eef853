//! Core domain types for the cosmetics catalog.
//!
//! Products own their ingredient and review lists by value. Nothing here is
//! mutated after load; every filtered view is derived from these structs.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a product (e.g. "p1")
pub type ProductId = String;

// =============================================================================
// Product-related Types
// =============================================================================

/// A cosmetic product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    /// Free-text label, used both for display and as a case-insensitive filter key
    pub category: String,
    pub ingredients: Vec<Ingredient>,
    /// Usage instructions shown in the detail view
    pub how_to_use: String,
    #[serde(default)]
    pub skin_types: Vec<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Product {
    /// Arithmetic mean of the review ratings, 0 when there are no reviews.
    ///
    /// Ratings are not validated, so out-of-range values flow straight
    /// through the mean.
    pub fn average_rating(&self) -> f32 {
        average_rating(&self.reviews)
    }

    /// True when `category` names this product's category, ignoring case.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}

/// One entry of a product's INCI ingredient list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub role: IngredientRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergenic: Option<bool>,
    /// Reasons this ingredient is considered controversial, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controversy: Option<Vec<String>>,
}

impl Ingredient {
    pub fn is_active(&self) -> bool {
        self.active.unwrap_or(false)
    }

    pub fn is_allergenic(&self) -> bool {
        self.allergenic.unwrap_or(false)
    }

    /// Controversy reasons, empty when none were recorded.
    pub fn controversy_reasons(&self) -> &[String] {
        self.controversy.as_deref().unwrap_or(&[])
    }
}

/// Functional role of an ingredient.
///
/// `Solvent` is not part of the declared role set but is used by catalog
/// data, so it gets its own variant. Any other unknown tag is kept verbatim
/// in `Other` rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IngredientRole {
    Moisturizer,
    Antioxidant,
    Preservative,
    Sunscreen,
    Fragrance,
    Humectant,
    Emollient,
    Surfactant,
    Exfoliant,
    Solvent,
    Other(String),
}

impl IngredientRole {
    pub fn as_str(&self) -> &str {
        match self {
            IngredientRole::Moisturizer => "moisturizer",
            IngredientRole::Antioxidant => "antioxidant",
            IngredientRole::Preservative => "preservative",
            IngredientRole::Sunscreen => "sunscreen",
            IngredientRole::Fragrance => "fragrance",
            IngredientRole::Humectant => "humectant",
            IngredientRole::Emollient => "emollient",
            IngredientRole::Surfactant => "surfactant",
            IngredientRole::Exfoliant => "exfoliant",
            IngredientRole::Solvent => "solvent",
            IngredientRole::Other(tag) => tag,
        }
    }

    /// True for tags outside the declared role set (including `Solvent`).
    pub fn is_undeclared(&self) -> bool {
        matches!(self, IngredientRole::Solvent | IngredientRole::Other(_))
    }
}

impl From<String> for IngredientRole {
    fn from(tag: String) -> Self {
        match tag.to_lowercase().as_str() {
            "moisturizer" => IngredientRole::Moisturizer,
            "antioxidant" => IngredientRole::Antioxidant,
            "preservative" => IngredientRole::Preservative,
            "sunscreen" => IngredientRole::Sunscreen,
            "fragrance" => IngredientRole::Fragrance,
            "humectant" => IngredientRole::Humectant,
            "emollient" => IngredientRole::Emollient,
            "surfactant" => IngredientRole::Surfactant,
            "exfoliant" => IngredientRole::Exfoliant,
            "solvent" => IngredientRole::Solvent,
            _ => IngredientRole::Other(tag),
        }
    }
}

impl From<IngredientRole> for String {
    fn from(role: IngredientRole) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for IngredientRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Review Type
// =============================================================================

/// A single customer review of a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    /// Expected 1.0 to 5.0, not validated
    pub rating: f32,
    pub comment: String,
}

/// Mean of `reviews` ratings, 0 for an empty slice.
pub fn average_rating(reviews: &[Review]) -> f32 {
    if reviews.is_empty() {
        return 0.0;
    }
    let total: f32 = reviews.iter().map(|r| r.rating).sum();
    total / reviews.len() as f32
}

// =============================================================================
// Statistics Types
// =============================================================================

/// Precomputed review statistics for a product
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingStats {
    pub avg_rating: f32,
    pub review_count: u32,
}

impl RatingStats {
    pub fn from_reviews(reviews: &[Review]) -> Self {
        Self {
            avg_rating: average_rating(reviews),
            review_count: reviews.len() as u32,
        }
    }
}

// =============================================================================
// CatalogIndex - The In-Memory Catalog
// =============================================================================

/// Holds the immutable product list and lookup indices over it.
///
/// `products` keeps catalog order, which is the tie-breaker for every
/// rating sort downstream.
#[derive(Debug)]
pub struct CatalogIndex {
    pub(crate) products: Vec<Product>,
    /// Position of each product in `products`
    pub(crate) positions: HashMap<ProductId, usize>,
    pub(crate) rating_stats: HashMap<ProductId, RatingStats>,
}

impl CatalogIndex {
    /// Creates a new, empty CatalogIndex
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            positions: HashMap::new(),
            rating_stats: HashMap::new(),
        }
    }

    /// All products in catalog order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Get a product by ID
    pub fn get_product(&self, id: &str) -> Option<&Product> {
        self.positions.get(id).map(|&pos| &self.products[pos])
    }

    /// Position of a product in catalog order
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Get precomputed review statistics for a product
    pub fn get_rating_stats(&self, id: &str) -> Option<&RatingStats> {
        self.rating_stats.get(id)
    }

    /// Average rating of a product, falling back to computing it when stats
    /// haven't been built yet. Unknown ids rate 0.
    pub fn average_rating(&self, id: &str) -> f32 {
        match self.rating_stats.get(id) {
            Some(stats) => stats.avg_rating,
            None => self
                .get_product(id)
                .map(Product::average_rating)
                .unwrap_or(0.0),
        }
    }

    /// Insert a product at the end of the catalog.
    ///
    /// A product whose id is already present replaces the earlier entry in
    /// place; `from_products` is what rejects duplicates in loaded catalogs.
    /// Cached stats for a replaced id are refreshed.
    pub(crate) fn insert_product(&mut self, product: Product) {
        if let Some(stats) = self.rating_stats.get_mut(&product.id) {
            *stats = RatingStats::from_reviews(&product.reviews);
        }
        match self.positions.get(&product.id) {
            Some(&pos) => self.products[pos] = product,
            None => {
                self.positions
                    .insert(product.id.clone(), self.products.len());
                self.products.push(product);
            }
        }
    }

    /// Number of products and total number of reviews
    pub fn counts(&self) -> (usize, usize) {
        let reviews = self.products.iter().map(|p| p.reviews.len()).sum();
        (self.products.len(), reviews)
    }
}

impl Default for CatalogIndex {
    fn default() -> Self {
        Self::new()
    }
}
