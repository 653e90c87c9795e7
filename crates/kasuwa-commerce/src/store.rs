//! Store directory and per-store product lists.

use crate::ids::{ProductId, StoreId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A product sold by one store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreProduct {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Selling price.
    pub price: Money,
    /// Image URL.
    pub image_url: String,
    /// Average review rating out of 5.
    pub rating: f32,
}

/// A store in the directory, with its own ordered product list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Store {
    /// Unique store identifier.
    pub id: StoreId,
    /// Store name.
    pub name: String,
    /// Category label (e.g., "Mode", "Restaurant").
    pub category: String,
    /// Short description.
    pub description: String,
    /// Average review rating out of 5.
    pub rating: f32,
    /// Number of customer reviews.
    pub review_count: u32,
    /// Street address.
    pub address: String,
    /// Contact phone number.
    pub phone: String,
    /// Opening hours, as displayed.
    pub hours: String,
    /// Estimated delivery window, as displayed.
    pub delivery_time: String,
    /// Delivery fee; None means free delivery.
    pub delivery_fee: Option<Money>,
    /// Whether the store is currently open.
    pub is_open: bool,
    /// Products in display order.
    pub products: Vec<StoreProduct>,
}

impl Store {
    /// Look up one of this store's products.
    pub fn product(&self, id: &ProductId) -> Option<&StoreProduct> {
        self.products.iter().find(|p| &p.id == id)
    }
}

/// The static store directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StoreDirectory {
    stores: Vec<Store>,
}

impl StoreDirectory {
    /// Create a directory from a declared store list.
    pub fn new(stores: Vec<Store>) -> Self {
        Self { stores }
    }

    /// The fixed demo directory the app ships with.
    pub fn demo() -> Self {
        Self::new(demo_stores())
    }

    /// All stores in declaration order.
    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    /// Look up a store by id.
    pub fn store(&self, id: &StoreId) -> Option<&Store> {
        self.stores.iter().find(|s| &s.id == id)
    }
}

fn xof(amount: f64) -> Money {
    Money::from_decimal(amount, Currency::XOF)
}

fn pexels(photo: &str) -> String {
    format!("https://images.pexels.com/photos/{photo}?auto=compress&cs=tinysrgb&w=400")
}

fn demo_stores() -> Vec<Store> {
    vec![
        Store {
            id: StoreId::new("1"),
            name: "Fashion Factory".to_string(),
            category: "Mode".to_string(),
            description: "Boutique de mode tendance avec les dernières collections \
                pour hommes et femmes."
                .to_string(),
            rating: 4.8,
            review_count: 156,
            address: "Centre commercial Niamey Plaza, Niamey".to_string(),
            phone: "+227 90 12 34 56".to_string(),
            hours: "9h00 - 20h00".to_string(),
            delivery_time: "30-45 min".to_string(),
            delivery_fee: Some(xof(500.0)),
            is_open: true,
            products: vec![
                StoreProduct {
                    id: ProductId::new("p1"),
                    name: "T-shirt Premium".to_string(),
                    price: xof(25.99),
                    image_url: pexels("1040945/pexels-photo-1040945.jpeg"),
                    rating: 4.2,
                },
                StoreProduct {
                    id: ProductId::new("p2"),
                    name: "Jeans Slim".to_string(),
                    price: xof(45.99),
                    image_url: pexels("1598507/pexels-photo-1598507.jpeg"),
                    rating: 4.5,
                },
                StoreProduct {
                    id: ProductId::new("p3"),
                    name: "Robe d'été".to_string(),
                    price: xof(35.99),
                    image_url: pexels("1536619/pexels-photo-1536619.jpeg"),
                    rating: 4.3,
                },
                StoreProduct {
                    id: ProductId::new("p4"),
                    name: "Chemise classique".to_string(),
                    price: xof(29.99),
                    image_url: pexels("1183266/pexels-photo-1183266.jpeg"),
                    rating: 4.1,
                },
            ],
        },
        Store {
            id: StoreId::new("2"),
            name: "Restaurant Le Sahel".to_string(),
            category: "Restaurant".to_string(),
            description: "Restaurant traditionnel nigérien avec des plats \
                authentiques et savoureux."
                .to_string(),
            rating: 4.6,
            review_count: 89,
            address: "Quartier Plateau, Niamey".to_string(),
            phone: "+227 90 98 76 54".to_string(),
            hours: "11h00 - 23h00".to_string(),
            delivery_time: "25-35 min".to_string(),
            delivery_fee: None,
            is_open: true,
            products: vec![
                StoreProduct {
                    id: ProductId::new("p5"),
                    name: "Riz au gras".to_string(),
                    price: xof(8.99),
                    image_url: pexels("1640777/pexels-photo-1640777.jpeg"),
                    rating: 4.7,
                },
                StoreProduct {
                    id: ProductId::new("p6"),
                    name: "Poulet braisé".to_string(),
                    price: xof(12.99),
                    image_url: pexels("2338407/pexels-photo-2338407.jpeg"),
                    rating: 4.8,
                },
            ],
        },
    ]
}
