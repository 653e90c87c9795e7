//! Favorite products.

use kasuwa_commerce::ids::ProductId;
use serde::{Deserialize, Serialize};

/// An ordered set of favorited product ids.
///
/// Order is first-favorited order; toggling a product off and on again
/// moves it to the end.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Favorites {
    ids: Vec<ProductId>,
}

impl Favorites {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a product's favorite state. Returns true if the product is
    /// a favorite afterwards.
    pub fn toggle(&mut self, id: &ProductId) -> bool {
        if let Some(position) = self.ids.iter().position(|f| f == id) {
            self.ids.remove(position);
            false
        } else {
            self.ids.push(id.clone());
            true
        }
    }

    /// Check whether a product is favorited.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.iter().any(|f| f == id)
    }

    /// Favorited ids in first-favorited order.
    pub fn iter(&self) -> impl Iterator<Item = &ProductId> {
        self.ids.iter()
    }

    /// Number of favorites.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if no product is favorited.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_on_and_off() {
        let mut favorites = Favorites::new();
        let id = ProductId::new("1");

        assert!(favorites.toggle(&id));
        assert!(favorites.contains(&id));
        assert_eq!(favorites.len(), 1);

        assert!(!favorites.toggle(&id));
        assert!(!favorites.contains(&id));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_order_is_first_favorited() {
        let mut favorites = Favorites::new();
        favorites.toggle(&ProductId::new("3"));
        favorites.toggle(&ProductId::new("1"));
        favorites.toggle(&ProductId::new("2"));

        let order: Vec<&str> = favorites.iter().map(|id| id.as_str()).collect();
        assert_eq!(order, ["3", "1", "2"]);
    }
}
