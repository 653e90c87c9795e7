//! Product detail screen state.
//!
//! Three orthogonal pieces of state: the active content tab, the order
//! quantity, and the selected gallery image. Any tab is reachable from
//! any other; there is no terminal state. The state lives and dies with
//! the screen, nothing survives navigating away.

use crate::session::CartHandle;
use kasuwa_commerce::catalog::Product;
use kasuwa_commerce::error::CommerceError;
use kasuwa_commerce::ids::LineId;
use serde::{Deserialize, Serialize};

/// Number of images in the gallery.
const GALLERY_IMAGE_COUNT: usize = 3;

/// Content tabs below the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DetailTab {
    #[default]
    Description,
    Specifications,
    Reviews,
}

/// State of one product detail screen.
#[derive(Debug, Clone)]
pub struct ProductView {
    product: Product,
    tab: DetailTab,
    quantity: u32,
    selected_image: usize,
    favorite: bool,
}

impl ProductView {
    /// Open the screen for a resolved product.
    pub fn new(product: Product) -> Self {
        Self {
            product,
            tab: DetailTab::default(),
            quantity: 1,
            selected_image: 0,
            favorite: false,
        }
    }

    /// The product being shown.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// The active content tab.
    pub fn tab(&self) -> DetailTab {
        self.tab
    }

    /// Switch content tabs.
    pub fn select_tab(&mut self, tab: DetailTab) {
        self.tab = tab;
    }

    /// The order quantity, always at least 1.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Bump the quantity. No upper bound is enforced.
    pub fn increment_quantity(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Lower the quantity, clamped at 1.
    pub fn decrement_quantity(&mut self) {
        if self.quantity > 1 {
            self.quantity -= 1;
        }
    }

    /// The selected gallery image index.
    pub fn selected_image(&self) -> usize {
        self.selected_image
    }

    /// Number of gallery images.
    pub fn image_count(&self) -> usize {
        GALLERY_IMAGE_COUNT
    }

    /// Derive the selected image from a horizontal scroll position,
    /// clamped to the gallery bounds.
    pub fn set_image_from_scroll(&mut self, offset_px: f64, page_width_px: f64) {
        if page_width_px <= 0.0 {
            return;
        }
        let index = (offset_px / page_width_px).floor().max(0.0) as usize;
        self.selected_image = index.min(GALLERY_IMAGE_COUNT - 1);
    }

    /// Whether the product is favorited on this screen.
    pub fn is_favorite(&self) -> bool {
        self.favorite
    }

    /// Flip the favorite flag.
    pub fn toggle_favorite(&mut self) -> bool {
        self.favorite = !self.favorite;
        self.favorite
    }

    /// Append `quantity` lines to the cart, one per unit.
    ///
    /// Quantity and tab state are left as they are, so "buy two more"
    /// is a second tap away.
    pub fn add_to_cart(&self, cart: &CartHandle) -> Result<Vec<LineId>, CommerceError> {
        cart.add_n(&self.product, i64::from(self.quantity))
    }
}
