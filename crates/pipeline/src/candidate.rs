//! Products as they flow through the pipeline.

use catalog::{CatalogIndex, Product};

/// A catalog product paired with its average rating.
///
/// Candidates borrow from the `CatalogIndex`; nothing in the pipeline
/// copies or mutates product data.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub product: &'a Product,
    pub avg_rating: f32,
}

impl<'a> Candidate<'a> {
    pub fn new(product: &'a Product, avg_rating: f32) -> Self {
        Self {
            product,
            avg_rating,
        }
    }

    pub fn id(&self) -> &'a str {
        &self.product.id
    }
}

/// Every product of the index, in catalog order.
pub fn candidates_from(index: &CatalogIndex) -> Vec<Candidate<'_>> {
    index
        .products()
        .iter()
        .map(|product| Candidate::new(product, index.average_rating(&product.id)))
        .collect()
}
