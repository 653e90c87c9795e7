//! Product catalog module.
//!
//! The catalog is static reference data: products are declared once and
//! never mutated by the UI. Section queries are pure and keep declaration
//! order, so a screen re-reading the catalog always renders the same list.

mod demo;
mod product;

pub use product::{CategoryTag, Product, ProductDetail};

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// The static product catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from a declared product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The fixed demo catalog the app ships with.
    pub fn demo() -> Self {
        Self::new(demo::demo_products())
    }

    /// All products in declaration order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Products in a category, in declaration order.
    pub fn by_category(&self, tag: CategoryTag) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == tag)
            .collect()
    }

    /// Products in a category named by its code. An unknown code yields
    /// an empty list, not an error.
    pub fn by_category_code(&self, code: &str) -> Vec<&Product> {
        match CategoryTag::from_str(code) {
            Some(tag) => self.by_category(tag),
            None => Vec::new(),
        }
    }

    /// All home-screen sections in banner order, with their products.
    pub fn sections(&self) -> impl Iterator<Item = (CategoryTag, Vec<&Product>)> {
        CategoryTag::BANNER_ORDER
            .into_iter()
            .map(move |tag| (tag, self.by_category(tag)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_promo_section() {
        let catalog = Catalog::demo();
        let promo = catalog.by_category(CategoryTag::Promo);
        let ids: Vec<&str> = promo.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "9", "10"]);
    }

    #[test]
    fn test_by_category_code() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.by_category_code("promo").len(), 4);
        assert_eq!(catalog.by_category_code("alimentation").len(), 3);
        assert_eq!(catalog.by_category_code("bijoux").len(), 3);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let catalog = Catalog::demo();
        assert!(catalog.by_category_code("vetements").is_empty());
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::demo();
        let product = catalog.product(&ProductId::new("1")).unwrap();
        assert_eq!(product.name, "iPhone 15 Pro Max");
        assert!(catalog.product(&ProductId::new("99")).is_none());
    }

    #[test]
    fn test_sections_in_banner_order() {
        let catalog = Catalog::demo();
        let tags: Vec<CategoryTag> = catalog.sections().map(|(tag, _)| tag).collect();
        assert_eq!(
            tags,
            [CategoryTag::Promo, CategoryTag::Food, CategoryTag::Jewelry]
        );
    }

    #[test]
    fn test_query_is_stable() {
        let catalog = Catalog::demo();
        let first = catalog.by_category(CategoryTag::Jewelry);
        let second = catalog.by_category(CategoryTag::Jewelry);
        assert_eq!(first, second);
    }
}
