//! Catalog domain types.

use serde::{Deserialize, Serialize};

/// Fixed product categories, in the order they appear in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Traditional,
    Filled,
    Chocolate,
    Coffee,
}

impl ProductCategory {
    /// The lowercase identifier used in URLs and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Traditional => "traditional",
            ProductCategory::Filled => "filled",
            ProductCategory::Chocolate => "chocolate",
            ProductCategory::Coffee => "coffee",
        }
    }

    /// Human-readable label for filter buttons.
    pub fn label(&self) -> &'static str {
        match self {
            ProductCategory::Traditional => "Traditional",
            ProductCategory::Filled => "Filled",
            ProductCategory::Chocolate => "Chocolate",
            ProductCategory::Coffee => "Coffee",
        }
    }

    /// Parses a category slug, ignoring ASCII case.
    pub fn parse(value: &str) -> Option<ProductCategory> {
        match value.trim().to_ascii_lowercase().as_str() {
            "traditional" => Some(ProductCategory::Traditional),
            "filled" => Some(ProductCategory::Filled),
            "chocolate" => Some(ProductCategory::Chocolate),
            "coffee" => Some(ProductCategory::Coffee),
            _ => None,
        }
    }
}

/// A category filter: either everything or one category exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(ProductCategory),
}

impl CategoryFilter {
    /// Parses a filter slug. `"all"` selects everything; any category
    /// slug selects that category. Unknown slugs yield `None`.
    pub fn parse(value: &str) -> Option<CategoryFilter> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Some(CategoryFilter::All);
        }
        ProductCategory::parse(value).map(CategoryFilter::Only)
    }

    pub fn matches(&self, category: ProductCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => *only == category,
        }
    }
}

/// A catalog entry. The catalog is compiled in and read-only, so entries
/// borrow their strings for the life of the program.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub category: ProductCategory,
    pub description: &'static str,
    pub ingredients: &'static str,
    pub allergens: &'static str,
    pub image_urls: &'static [&'static str],
    pub featured: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&ProductCategory::Traditional).unwrap();
        assert_eq!(json, "\"traditional\"");

        let rt: ProductCategory = serde_json::from_str("\"coffee\"").unwrap();
        assert_eq!(rt, ProductCategory::Coffee);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(
            ProductCategory::parse("filled"),
            Some(ProductCategory::Filled)
        );
        assert_eq!(
            ProductCategory::parse("  Chocolate  "),
            Some(ProductCategory::Chocolate)
        );
        assert_eq!(ProductCategory::parse("savory"), None);
        assert_eq!(ProductCategory::parse(""), None);
    }

    #[test]
    fn test_category_as_str_round_trips() {
        for category in [
            ProductCategory::Traditional,
            ProductCategory::Filled,
            ProductCategory::Chocolate,
            ProductCategory::Coffee,
        ] {
            assert_eq!(ProductCategory::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!(CategoryFilter::parse("all"), Some(CategoryFilter::All));
        assert_eq!(CategoryFilter::parse("ALL"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::parse("coffee"),
            Some(CategoryFilter::Only(ProductCategory::Coffee))
        );
        assert_eq!(CategoryFilter::parse("snacks"), None);
    }

    #[test]
    fn test_filter_matches() {
        assert!(CategoryFilter::All.matches(ProductCategory::Filled));
        assert!(CategoryFilter::Only(ProductCategory::Filled).matches(ProductCategory::Filled));
        assert!(!CategoryFilter::Only(ProductCategory::Coffee).matches(ProductCategory::Filled));
    }

    #[test]
    fn test_product_serializes_snake_case_category() {
        let product = Product {
            id: 99,
            name: "Test",
            category: ProductCategory::Chocolate,
            description: "d",
            ingredients: "i",
            allergens: "a",
            image_urls: &["/assets/images/test.png"],
            featured: false,
        };
        let value: serde_json::Value = serde_json::to_value(product).unwrap();
        assert_eq!(value["category"], "chocolate");
        assert_eq!(value["image_urls"][0], "/assets/images/test.png");
        assert_eq!(value["featured"], false);
    }
}
