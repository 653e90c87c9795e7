//! The fixed demo catalog.
//!
//! Ten products across three home-screen sections. Declaration order is
//! display order, so the promo section lists ids "1", "2", "9", "10".

use super::product::{CategoryTag, Product, ProductDetail};
use crate::money::{Currency, Money};

fn xof(amount: f64) -> Money {
    Money::from_decimal(amount, Currency::XOF)
}

fn pexels(photo: &str) -> String {
    format!("https://images.pexels.com/photos/{photo}?auto=compress&cs=tinysrgb&w=400")
}

pub(super) fn demo_products() -> Vec<Product> {
    vec![
        Product::new(
            "1",
            "iPhone 15 Pro Max",
            xof(1299.99),
            pexels("592750/pexels-photo-592750.jpeg"),
            CategoryTag::Promo,
        )
        .with_discount(15)
        .with_detail(ProductDetail {
            description: "Le dernier iPhone avec des performances exceptionnelles \
                et un appareil photo professionnel. Doté de la puce A17 Pro \
                révolutionnaire et d'un système de caméra avancé."
                .to_string(),
            features: vec![
                "128GB de stockage".to_string(),
                "Appareil photo 48MP".to_string(),
                "Écran Super Retina XDR".to_string(),
                "Puce A17 Pro".to_string(),
                "5G".to_string(),
                "Face ID".to_string(),
            ],
            specifications: vec![
                ("Écran".to_string(), "6.7 pouces Super Retina XDR".to_string()),
                ("Processeur".to_string(), "Puce A17 Pro".to_string()),
                ("Stockage".to_string(), "128GB".to_string()),
                ("Caméra".to_string(), "48MP + 12MP + 12MP".to_string()),
                ("Batterie".to_string(), "Jusqu'à 29h de lecture vidéo".to_string()),
                ("Système".to_string(), "iOS 17".to_string()),
            ],
            rating: 4.8,
            review_count: 125,
            in_stock: true,
        }),
        Product::new(
            "2",
            "Samsung Galaxy S24",
            xof(999.99),
            pexels("404280/pexels-photo-404280.jpeg"),
            CategoryTag::Promo,
        )
        .with_discount(20)
        .with_detail(ProductDetail {
            description: "Smartphone Android haut de gamme avec intelligence \
                artificielle intégrée et performances exceptionnelles."
                .to_string(),
            features: vec![
                "256GB de stockage".to_string(),
                "Écran Dynamic AMOLED".to_string(),
                "Batterie 4000mAh".to_string(),
                "5G".to_string(),
                "Triple caméra".to_string(),
                "S Pen".to_string(),
            ],
            specifications: vec![
                ("Écran".to_string(), "6.2 pouces Dynamic AMOLED".to_string()),
                ("Processeur".to_string(), "Snapdragon 8 Gen 3".to_string()),
                ("Stockage".to_string(), "256GB".to_string()),
                ("Caméra".to_string(), "50MP + 12MP + 10MP".to_string()),
                ("Batterie".to_string(), "4000mAh".to_string()),
                ("Système".to_string(), "Android 14".to_string()),
            ],
            rating: 4.6,
            review_count: 89,
            in_stock: true,
        }),
        Product::new(
            "3",
            "Pizza Margherita",
            xof(12.99),
            pexels("315755/pexels-photo-315755.jpeg"),
            CategoryTag::Food,
        )
        .with_detail(ProductDetail {
            description: "Pizza traditionnelle italienne avec sauce tomate, \
                mozzarella fraîche et basilic."
                .to_string(),
            features: vec![
                "Pâte artisanale".to_string(),
                "Mozzarella di Bufala".to_string(),
                "Tomates San Marzano".to_string(),
                "Basilic frais".to_string(),
            ],
            specifications: vec![
                ("Taille".to_string(), "30cm de diamètre".to_string()),
                ("Temps de cuisson".to_string(), "12 minutes".to_string()),
                ("Calories".to_string(), "850 kcal".to_string()),
                ("Allergènes".to_string(), "Gluten, Lactose".to_string()),
            ],
            rating: 4.5,
            review_count: 67,
            in_stock: true,
        }),
        Product::new(
            "4",
            "Burger Premium",
            xof(15.50),
            pexels("1639557/pexels-photo-1639557.jpeg"),
            CategoryTag::Food,
        ),
        Product::new(
            "5",
            "Salade César",
            xof(9.99),
            pexels("1059905/pexels-photo-1059905.jpeg"),
            CategoryTag::Food,
        ),
        Product::new(
            "6",
            "Collier Perles",
            xof(89.99),
            pexels("599643/pexels-photo-599643.jpeg"),
            CategoryTag::Jewelry,
        ),
        Product::new(
            "7",
            "Boucles d'oreilles Or",
            xof(125.0),
            pexels("535632/pexels-photo-535632.jpeg"),
            CategoryTag::Jewelry,
        ),
        Product::new(
            "8",
            "Bracelet Argent",
            xof(65.99),
            pexels("611652/pexels-photo-611652.jpeg"),
            CategoryTag::Jewelry,
        ),
        Product::new(
            "9",
            "Montre Connectée",
            xof(299.99),
            pexels("523275/pexels-photo-523275.jpeg"),
            CategoryTag::Promo,
        )
        .with_discount(10),
        Product::new(
            "10",
            "Casque Audio",
            xof(150.0),
            pexels("505740/pexels-photo-505740.jpeg"),
            CategoryTag::Promo,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_size() {
        assert_eq!(demo_products().len(), 10);
    }

    #[test]
    fn test_demo_ids_are_unique() {
        let products = demo_products();
        for (i, a) in products.iter().enumerate() {
            for b in &products[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_detailed_products_have_specs() {
        let products = demo_products();
        let detailed: Vec<_> = products.iter().filter(|p| p.detail.is_some()).collect();
        assert_eq!(detailed.len(), 3);
        for product in detailed {
            let detail = product.detail.as_ref().unwrap();
            assert!(!detail.features.is_empty());
            assert!(!detail.specifications.is_empty());
        }
    }
}
