//! E-commerce domain types and reference data for Kasuwa.
//!
//! This crate holds the read side of the Kasuwa client: typed identifiers,
//! money, the static product catalog, the store directory, the shopping
//! cart, and the customer profile. Everything here is plain in-memory data
//! with synchronous operations; there is no network, persistence, or async
//! anywhere in this crate.
//!
//! - **Catalog**: products grouped into category sections
//! - **Stores**: the store directory with per-store product lists
//! - **Cart**: one line appended per add, shared across screens
//! - **Profile**: the editable customer profile
//!
//! Screen-local mutable state (address book, payment wallet, favorites,
//! view states) lives in the companion `kasuwa-screens` crate.

pub mod cart;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod money;
pub mod profile;
pub mod store;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    pub use crate::catalog::{Catalog, CategoryTag, Product, ProductDetail};
    pub use crate::store::{Store, StoreDirectory, StoreProduct};

    pub use crate::cart::{Cart, CartLine};
    pub use crate::profile::Profile;
}
