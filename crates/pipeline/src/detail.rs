//! Detail view of a single product.
//!
//! Summarizes what the detail modal shows next to the raw product: the
//! rating aggregate and the ingredients worth calling out.

use catalog::{CatalogIndex, Ingredient, Product};

/// A product plus the derived facts its detail view displays.
#[derive(Debug, Clone)]
pub struct ProductDetail<'a> {
    pub product: &'a Product,
    pub avg_rating: f32,
    pub review_count: usize,
    pub active_ingredients: Vec<&'a Ingredient>,
    pub allergens: Vec<&'a Ingredient>,
    /// Ingredients that carry at least one controversy reason
    pub controversial: Vec<&'a Ingredient>,
}

impl<'a> ProductDetail<'a> {
    pub fn new(product: &'a Product, avg_rating: f32) -> Self {
        let pick = |keep: fn(&Ingredient) -> bool| -> Vec<&'a Ingredient> {
            product.ingredients.iter().filter(|i| keep(*i)).collect()
        };

        Self {
            product,
            avg_rating,
            review_count: product.reviews.len(),
            active_ingredients: pick(Ingredient::is_active),
            allergens: pick(Ingredient::is_allergenic),
            controversial: pick(|i| !i.controversy_reasons().is_empty()),
        }
    }

    /// Resolve `id` against the index; unknown ids give `None`.
    pub fn lookup(index: &'a CatalogIndex, id: &str) -> Option<Self> {
        let product = index.get_product(id)?;
        Some(Self::new(product, index.average_rating(id)))
    }

    /// True when any ingredient is allergenic or controversial
    pub fn has_warnings(&self) -> bool {
        !self.allergens.is_empty() || !self.controversial.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_for_p2() {
        let index = CatalogIndex::seed().unwrap();
        let detail = ProductDetail::lookup(&index, "p2").unwrap();

        assert_eq!(detail.review_count, 3);
        assert!((detail.avg_rating - 14.0 / 3.0).abs() < 1e-6);

        let active: Vec<_> = detail.active_ingredients.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(active, vec!["Ethylhexyl Methoxycinnamate", "Titanium Dioxide"]);

        let allergens: Vec<_> = detail.allergens.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(allergens, vec!["Parfum (Fragrance)"]);

        assert_eq!(detail.controversial.len(), 1);
        assert_eq!(detail.controversial[0].controversy_reasons().len(), 2);
        assert!(detail.has_warnings());
    }

    #[test]
    fn test_detail_without_reviews() {
        let index = CatalogIndex::seed().unwrap();
        let detail = ProductDetail::lookup(&index, "p6").unwrap();

        assert_eq!(detail.review_count, 0);
        assert_eq!(detail.avg_rating, 0.0);
    }

    #[test]
    fn test_detail_unknown_id() {
        let index = CatalogIndex::seed().unwrap();
        assert!(ProductDetail::lookup(&index, "p404").is_none());
    }
}
