//! Store detail screen state.

use crate::favorites::Favorites;
use crate::session::CartHandle;
use kasuwa_commerce::error::CommerceError;
use kasuwa_commerce::ids::{LineId, ProductId};
use kasuwa_commerce::store::Store;
use serde::{Deserialize, Serialize};

/// Content tabs on the store page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StoreTab {
    #[default]
    Products,
    About,
}

/// State of one store detail screen.
///
/// Favorites here are screen-local: hearts picked on a store page do
/// not show up on the home screen.
#[derive(Debug, Clone)]
pub struct StoreView {
    store: Store,
    tab: StoreTab,
    favorites: Favorites,
}

impl StoreView {
    /// Open the screen for a resolved store.
    pub fn new(store: Store) -> Self {
        Self {
            store,
            tab: StoreTab::default(),
            favorites: Favorites::new(),
        }
    }

    /// The store being shown.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// The active tab.
    pub fn tab(&self) -> StoreTab {
        self.tab
    }

    /// Switch tabs.
    pub fn select_tab(&mut self, tab: StoreTab) {
        self.tab = tab;
    }

    /// This screen's favorites.
    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    /// Flip a product's favorite state.
    pub fn toggle_favorite(&mut self, id: &ProductId) -> bool {
        self.favorites.toggle(id)
    }

    /// Append one cart line for one of this store's products.
    pub fn add_to_cart(
        &self,
        product_id: &ProductId,
        cart: &CartHandle,
    ) -> Result<LineId, CommerceError> {
        let product = self
            .store
            .product(product_id)
            .ok_or_else(|| CommerceError::not_found("product", product_id.as_str()))?;
        Ok(cart.add_store_product(product))
    }
}
