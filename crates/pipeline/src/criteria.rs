//! Per-derivation filter inputs.

use std::fmt;

/// Label of the sentinel that selects every category.
pub const ALL_CATEGORIES: &str = "all";

/// The category a user has selected.
///
/// Category labels are opaque keys compared case-insensitively; there is no
/// closed set beyond what the catalog contains.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategorySelection {
    #[default]
    All,
    Named(String),
}

impl CategorySelection {
    /// Interpret user input: blank or "all" (any case) selects everything.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.is_empty() || input.eq_ignore_ascii_case(ALL_CATEGORIES) {
            CategorySelection::All
        } else {
            CategorySelection::Named(input.to_string())
        }
    }

    /// Like [`parse`](Self::parse), but a catalog category spelled like the
    /// sentinel ("All", "ALL") is selected by name instead of meaning every
    /// category. Blank input still selects everything.
    pub fn resolve(input: &str, categories: &[String]) -> Self {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case(ALL_CATEGORIES) {
            if let Some(category) = categories.iter().find(|c| c.eq_ignore_ascii_case(trimmed)) {
                return CategorySelection::Named(category.clone());
            }
        }
        Self::parse(input)
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategorySelection::All)
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategorySelection::All => f.write_str(ALL_CATEGORIES),
            CategorySelection::Named(label) => f.write_str(label),
        }
    }
}

/// The category list offered to the user: the "all" sentinel first, then
/// each catalog category in first-seen order.
pub fn category_options(categories: Vec<String>) -> Vec<CategorySelection> {
    std::iter::once(CategorySelection::All)
        .chain(categories.into_iter().map(CategorySelection::Named))
        .collect()
}

/// Everything the filters need to decide on a candidate.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    /// Lowercased, trimmed query; empty matches everything
    pub query: String,
    pub category: CategorySelection,
    pub min_rating: f32,
}

impl FilterCriteria {
    pub fn new(query: &str, category: CategorySelection, min_rating: u8) -> Self {
        Self {
            query: normalize_query(query),
            category,
            min_rating: f32::from(min_rating),
        }
    }
}

/// Lowercase and trim a raw query for substring matching
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_selection() {
        assert_eq!(CategorySelection::parse("all"), CategorySelection::All);
        assert_eq!(CategorySelection::parse("ALL"), CategorySelection::All);
        assert_eq!(CategorySelection::parse("  "), CategorySelection::All);
        assert_eq!(
            CategorySelection::parse(" Sérum "),
            CategorySelection::Named("Sérum".to_string())
        );
    }

    #[test]
    fn test_resolve_prefers_catalog_category_named_all() {
        let categories = vec!["Hidratante".to_string(), "All".to_string()];

        assert_eq!(
            CategorySelection::resolve("all", &categories),
            CategorySelection::Named("All".to_string())
        );
        assert_eq!(CategorySelection::resolve("  ", &categories), CategorySelection::All);
        assert_eq!(
            CategorySelection::resolve("hidratante", &categories),
            CategorySelection::Named("hidratante".to_string())
        );
    }

    #[test]
    fn test_resolve_without_clash_is_parse() {
        let categories = vec!["Limpeza".to_string()];
        assert_eq!(CategorySelection::resolve("ALL", &categories), CategorySelection::All);
    }

    #[test]
    fn test_category_options_lead_with_sentinel() {
        let options = category_options(vec!["Hidratante".to_string(), "Limpeza".to_string()]);
        let labels: Vec<_> = options.iter().map(|o| o.to_string()).collect();
        assert_eq!(labels, vec!["all", "Hidratante", "Limpeza"]);
    }

    #[test]
    fn test_criteria_normalizes_query() {
        let criteria = FilterCriteria::new("  Ácido HIALURÔNICO ", CategorySelection::All, 3);
        assert_eq!(criteria.query, "ácido hialurônico");
        assert_eq!(criteria.min_rating, 3.0);
    }
}
