//! Shopping cart.
//!
//! The cart is the one collection shared across screens. Adding a product
//! appends one line per call: adding the same product three times yields
//! three lines, never one line with a quantity of three. Any total built
//! on top of the cart must sum over lines, and checkout flows that want
//! per-product quantities have to aggregate lines themselves.
//!
//! There is no removal or quantity-edit operation here; the cart only
//! grows within a session.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::{LineId, ProductId};
use crate::money::{Currency, Money};
use crate::store::StoreProduct;
use serde::{Deserialize, Serialize};

/// One unit of a product intended for purchase.
///
/// Lines snapshot the product at add time, so a later catalog change
/// (none exist today) would not retroactively reprice a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Unique line identifier.
    pub id: LineId,
    /// Product this line references.
    pub product_id: ProductId,
    /// Product name at add time.
    pub name: String,
    /// Selling price at add time.
    pub unit_price: Money,
    /// Promotion discount at add time.
    pub discount_percent: Option<u8>,
}

/// The shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart in the given currency.
    pub fn new(currency: Currency) -> Self {
        Self {
            lines: Vec::new(),
            currency,
        }
    }

    /// Append one line for a catalog product.
    pub fn add(&mut self, product: &Product) -> LineId {
        self.push_line(CartLine {
            id: LineId::generate(),
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            discount_percent: product.discount_percent,
        })
    }

    /// Append one line per unit for a catalog product.
    ///
    /// Refuses quantities below one and performs no mutation for them;
    /// there is no quantity field on a line, so n units are n lines.
    pub fn add_n(
        &mut self,
        product: &Product,
        quantity: i64,
    ) -> Result<Vec<LineId>, CommerceError> {
        if quantity < 1 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        Ok((0..quantity).map(|_| self.add(product)).collect())
    }

    /// Append one line for a store product.
    pub fn add_store_product(&mut self, product: &StoreProduct) -> LineId {
        self.push_line(CartLine {
            id: LineId::generate(),
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            discount_percent: None,
        })
    }

    fn push_line(&mut self, line: CartLine) -> LineId {
        let id = line.id.clone();
        self.lines.push(line);
        id
    }

    /// Current lines in add order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of lines (one per add).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The cart currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Checked sum of all line prices.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        Money::try_sum(self.lines.iter().map(|l| &l.unit_price), self.currency)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Currency::XOF)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_empty_cart() {
        let cart = Cart::default();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert!(cart.subtotal().unwrap().is_zero());
    }

    #[test]
    fn test_repeated_add_duplicates_lines() {
        let catalog = Catalog::demo();
        let product = catalog.product(&ProductId::new("3")).unwrap();

        let mut cart = Cart::default();
        cart.add(product);
        cart.add(product);
        cart.add(product);

        // Three lines all referencing the same product, not one line of three
        assert_eq!(cart.len(), 3);
        assert!(cart
            .lines()
            .iter()
            .all(|l| l.product_id == ProductId::new("3")));

        // Line ids stay distinct even for the same product
        assert_ne!(cart.lines()[0].id, cart.lines()[1].id);
    }

    #[test]
    fn test_subtotal_sums_lines() {
        let catalog = Catalog::demo();
        let pizza = catalog.product(&ProductId::new("3")).unwrap(); // 12.99
        let burger = catalog.product(&ProductId::new("4")).unwrap(); // 15.50

        let mut cart = Cart::default();
        cart.add(pizza);
        cart.add(pizza);
        cart.add(burger);

        let subtotal = cart.subtotal().unwrap();
        assert_eq!(subtotal.amount_cents, 1299 + 1299 + 1550);
    }

    #[test]
    fn test_line_snapshots_product() {
        let catalog = Catalog::demo();
        let phone = catalog.product(&ProductId::new("1")).unwrap();

        let mut cart = Cart::default();
        cart.add(phone);

        let line = &cart.lines()[0];
        assert_eq!(line.name, "iPhone 15 Pro Max");
        assert_eq!(line.unit_price, phone.price);
        assert_eq!(line.discount_percent, Some(15));
    }

    #[test]
    fn test_add_n_appends_one_line_per_unit() {
        let catalog = Catalog::demo();
        let burger = catalog.product(&ProductId::new("4")).unwrap();

        let mut cart = Cart::default();
        let lines = cart.add_n(burger, 3).unwrap();

        assert_eq!(lines.len(), 3);
        assert_eq!(cart.len(), 3);
        assert!(cart
            .lines()
            .iter()
            .all(|l| l.product_id == ProductId::new("4")));
    }

    #[test]
    fn test_add_n_rejects_quantity_below_one() {
        let catalog = Catalog::demo();
        let burger = catalog.product(&ProductId::new("4")).unwrap();

        let mut cart = Cart::default();
        for quantity in [0, -2] {
            let err = cart.add_n(burger, quantity).unwrap_err();
            assert_eq!(err, CommerceError::InvalidQuantity(quantity));
        }
        assert!(cart.is_empty());
    }

    #[test]
    fn test_subtotal_reports_mismatched_line_currency() {
        let catalog = Catalog::demo();
        let pizza = catalog.product(&ProductId::new("3")).unwrap();

        // A USD cart that received an XOF-priced line
        let mut cart = Cart::new(Currency::USD);
        cart.add(pizza);

        let err = cart.subtotal().unwrap_err();
        assert!(matches!(err, CommerceError::CurrencyMismatch { .. }));
    }

    #[test]
    fn test_cart_serializes() {
        let catalog = Catalog::demo();
        let mut cart = Cart::default();
        cart.add(catalog.product(&ProductId::new("6")).unwrap());

        let json = serde_json::to_string(&cart).unwrap();
        let parsed: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cart);
    }

    #[test]
    fn test_add_store_product() {
        use crate::store::StoreDirectory;
        use crate::ids::StoreId;

        let directory = StoreDirectory::demo();
        let store = directory.store(&StoreId::new("2")).unwrap();
        let dish = store.product(&ProductId::new("p5")).unwrap();

        let mut cart = Cart::default();
        cart.add_store_product(dish);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].name, "Riz au gras");
        assert_eq!(cart.lines()[0].discount_percent, None);
    }
}
