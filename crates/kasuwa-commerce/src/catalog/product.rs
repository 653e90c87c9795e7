//! Product and category section types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Category tag a product is grouped under on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryTag {
    /// Discounted products.
    Promo,
    /// Food and restaurant dishes.
    Food,
    /// Everyday jewelry.
    Jewelry,
}

impl CategoryTag {
    /// Home-screen section banners, top to bottom.
    pub const BANNER_ORDER: [CategoryTag; 3] =
        [CategoryTag::Promo, CategoryTag::Food, CategoryTag::Jewelry];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryTag::Promo => "promo",
            CategoryTag::Food => "alimentation",
            CategoryTag::Jewelry => "bijoux",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "promo" => Some(CategoryTag::Promo),
            "alimentation" => Some(CategoryTag::Food),
            "bijoux" => Some(CategoryTag::Jewelry),
            _ => None,
        }
    }

    /// Section banner title.
    pub fn banner_title(&self) -> &'static str {
        match self {
            CategoryTag::Promo => "EN PROMO",
            CategoryTag::Food => "TOP ALIMENTATION",
            CategoryTag::Jewelry => "BIJOUX DU QUOTIDIEN",
        }
    }
}

/// A product in the catalog.
///
/// Immutable reference data: the UI never mutates a product. The price is
/// the current selling price; for discounted products the pre-discount
/// price is derived, not stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Current selling price.
    pub price: Money,
    /// Percent taken off, when on promotion.
    pub discount_percent: Option<u8>,
    /// Main image URL.
    pub image_url: String,
    /// Home-screen category.
    pub category: CategoryTag,
    /// Rich detail for the product page, when available.
    pub detail: Option<ProductDetail>,
}

impl Product {
    /// Create a new product with no discount or detail.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        image_url: impl Into<String>,
        category: CategoryTag,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            discount_percent: None,
            image_url: image_url.into(),
            category,
            detail: None,
        }
    }

    /// Set the promotion discount.
    pub fn with_discount(mut self, percent: u8) -> Self {
        self.discount_percent = Some(percent);
        self
    }

    /// Attach product-page detail.
    pub fn with_detail(mut self, detail: ProductDetail) -> Self {
        self.detail = Some(detail);
        self
    }

    /// Whether the product is on promotion.
    pub fn is_promo(&self) -> bool {
        self.discount_percent.is_some()
    }

    /// The crossed-out pre-discount price, for promoted products.
    pub fn price_before_discount(&self) -> Option<Money> {
        self.discount_percent
            .and_then(|percent| self.price.before_discount(percent))
    }
}

/// Rich product-page content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProductDetail {
    /// Long-form description.
    pub description: String,
    /// Headline features, shown as a checked list.
    pub features: Vec<String>,
    /// Label/value specification rows, in display order.
    pub specifications: Vec<(String, String)>,
    /// Average review rating out of 5.
    pub rating: f32,
    /// Number of customer reviews.
    pub review_count: u32,
    /// Whether the product is currently in stock.
    pub in_stock: bool,
}
