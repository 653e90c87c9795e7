//! Session wiring: the one construction point for shared state.
//!
//! The cart is the only state shared across screens. Instead of an
//! ambient context provider, every screen receives a [`CartHandle`]
//! explicitly; [`Session`] creates it once at startup and hands out
//! clones. `Rc` keeps the whole arrangement single-threaded, which is
//! the concurrency model of the app: every mutation runs inside a UI
//! event handler, one at a time.

use crate::addresses::{demo_address_book, AddressBook};
use crate::favorites::Favorites;
use crate::payments::{demo_payment_wallet, PaymentWallet};
use crate::product_view::ProductView;
use crate::profile_view::ProfileEditor;
use crate::store_view::StoreView;
use kasuwa_commerce::cart::{Cart, CartLine};
use kasuwa_commerce::catalog::{Catalog, Product};
use kasuwa_commerce::error::CommerceError;
use kasuwa_commerce::ids::{LineId, ProductId, StoreId};
use kasuwa_commerce::money::{Currency, Money};
use kasuwa_commerce::profile::Profile;
use kasuwa_commerce::store::{StoreDirectory, StoreProduct};
use std::cell::RefCell;
use std::rc::Rc;

/// A cheaply-cloneable handle to the shared cart.
///
/// This is the whole provider contract a screen needs: read the current
/// lines, append a line.
#[derive(Debug, Clone)]
pub struct CartHandle {
    inner: Rc<RefCell<Cart>>,
}

impl CartHandle {
    /// Create a handle over a fresh empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Cart::new(currency))),
        }
    }

    /// Append one line for a catalog product.
    pub fn add(&self, product: &Product) -> LineId {
        let id = self.inner.borrow_mut().add(product);
        tracing::debug!(product = %product.id, line = %id, "cart line added");
        id
    }

    /// Append one line per unit for a catalog product, refusing
    /// quantities below one.
    pub fn add_n(&self, product: &Product, quantity: i64) -> Result<Vec<LineId>, CommerceError> {
        let lines = self.inner.borrow_mut().add_n(product, quantity)?;
        tracing::debug!(product = %product.id, count = lines.len(), "cart lines added");
        Ok(lines)
    }

    /// Append one line for a store product.
    pub fn add_store_product(&self, product: &StoreProduct) -> LineId {
        let id = self.inner.borrow_mut().add_store_product(product);
        tracing::debug!(product = %product.id, line = %id, "cart line added");
        id
    }

    /// Snapshot of the current lines, in add order.
    pub fn lines(&self) -> Vec<CartLine> {
        self.inner.borrow().lines().to_vec()
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// Checked sum of all line prices.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        self.inner.borrow().subtotal()
    }
}

impl Default for CartHandle {
    fn default() -> Self {
        Self::new(Currency::XOF)
    }
}

/// One running app session.
///
/// Owns the reference data and every screen-level collection; screens
/// borrow what they need and get their own clone of the cart handle.
/// Nothing persists: dropping the session drops all of it.
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    stores: StoreDirectory,
    cart: CartHandle,
    addresses: AddressBook,
    payments: PaymentWallet,
    favorites: Favorites,
    profile: ProfileEditor,
}

impl Session {
    /// Start a session over the demo data set.
    pub fn new() -> Self {
        Self {
            catalog: Catalog::demo(),
            stores: StoreDirectory::demo(),
            cart: CartHandle::new(Currency::XOF),
            addresses: demo_address_book(),
            payments: demo_payment_wallet(),
            favorites: Favorites::new(),
            profile: ProfileEditor::new(Profile::default()),
        }
    }

    /// The product catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The store directory.
    pub fn stores(&self) -> &StoreDirectory {
        &self.stores
    }

    /// A clone of the shared cart handle.
    pub fn cart(&self) -> CartHandle {
        self.cart.clone()
    }

    /// The address book screen's collection.
    pub fn addresses_mut(&mut self) -> &mut AddressBook {
        &mut self.addresses
    }

    pub fn addresses(&self) -> &AddressBook {
        &self.addresses
    }

    /// The payment methods screen's collection.
    pub fn payments_mut(&mut self) -> &mut PaymentWallet {
        &mut self.payments
    }

    pub fn payments(&self) -> &PaymentWallet {
        &self.payments
    }

    /// Home-screen favorites.
    pub fn favorites_mut(&mut self) -> &mut Favorites {
        &mut self.favorites
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    /// The profile screen's editor.
    pub fn profile_mut(&mut self) -> &mut ProfileEditor {
        &mut self.profile
    }

    pub fn profile(&self) -> &ProfileEditor {
        &self.profile
    }

    /// Open the product detail screen for a catalog product.
    pub fn open_product(&self, id: &ProductId) -> Option<ProductView> {
        self.catalog.product(id).cloned().map(ProductView::new)
    }

    /// Open the store detail screen for a store.
    pub fn open_store(&self, id: &StoreId) -> Option<StoreView> {
        self.stores.store(id).cloned().map(StoreView::new)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_is_shared_between_handles() {
        let session = Session::new();
        let from_home = session.cart();
        let from_store = session.cart();

        let product = session
            .catalog()
            .product(&ProductId::new("5"))
            .unwrap()
            .clone();
        from_home.add(&product);
        from_store.add(&product);

        // Both handles see the same two lines
        assert_eq!(from_home.len(), 2);
        assert_eq!(from_store.len(), 2);
        assert_eq!(session.cart().lines().len(), 2);
    }

    #[test]
    fn test_session_starts_with_demo_data() {
        let session = Session::new();
        assert_eq!(session.catalog().products().len(), 10);
        assert_eq!(session.stores().stores().len(), 2);
        assert_eq!(session.addresses().len(), 2);
        assert_eq!(session.payments().len(), 2);
        assert!(session.cart().is_empty());
        assert!(session.favorites().is_empty());
    }

    #[test]
    fn test_open_product() {
        let session = Session::new();
        let view = session.open_product(&ProductId::new("1")).unwrap();
        assert_eq!(view.product().name, "iPhone 15 Pro Max");
        assert!(session.open_product(&ProductId::new("404")).is_none());
    }

    #[test]
    fn test_open_store() {
        let session = Session::new();
        let view = session.open_store(&StoreId::new("2")).unwrap();
        assert_eq!(view.store().name, "Restaurant Le Sahel");
        assert!(session.open_store(&StoreId::new("404")).is_none());
    }

    #[test]
    fn test_handle_refuses_bad_quantity() {
        use kasuwa_commerce::error::CommerceError;

        let session = Session::new();
        let cart = session.cart();
        let product = session
            .catalog()
            .product(&ProductId::new("7"))
            .unwrap()
            .clone();

        let err = cart.add_n(&product, 0).unwrap_err();
        assert_eq!(err, CommerceError::InvalidQuantity(0));
        assert!(cart.is_empty());

        assert_eq!(cart.add_n(&product, 2).unwrap().len(), 2);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_handle_subtotal_tracks_adds() {
        let session = Session::new();
        let cart = session.cart();
        let pizza = session
            .catalog()
            .product(&ProductId::new("3"))
            .unwrap()
            .clone();

        cart.add(&pizza);
        cart.add(&pizza);
        assert_eq!(cart.subtotal().unwrap().amount_cents, 2 * 1299);
    }
}
