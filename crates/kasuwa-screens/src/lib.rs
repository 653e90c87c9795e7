//! Screen-local state for Kasuwa.
//!
//! Each screen of the app owns one collection of records and a handful of
//! orthogonal view flags; this crate models that state and nothing else.
//! The central piece is [`collection::CollectionStore`], the ordered record
//! collection with single-default semantics shared by the address book and
//! the payment wallet. On top of it sit the per-screen view states (product
//! detail, store detail, profile editor) and [`session::Session`], the one
//! construction point that wires every screen to the shared cart handle.
//!
//! All mutations run synchronously inside the caller's event handler; the
//! shared cart uses `Rc<RefCell<_>>` and is therefore single-threaded by
//! construction. Rendering is pull-based: a screen re-reads its collection
//! after each mutation, nothing here pushes notifications.

pub mod addresses;
pub mod collection;
pub mod favorites;
pub mod payments;
pub mod product_view;
pub mod profile_view;
pub mod session;
pub mod store_view;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::addresses::{AddressBook, AddressKind, SavedAddress};
    pub use crate::collection::{CollectionStore, Record};
    pub use crate::favorites::Favorites;
    pub use crate::payments::{MobileMoneyProvider, PaymentMethod, PaymentWallet};
    pub use crate::product_view::{DetailTab, ProductView};
    pub use crate::profile_view::ProfileEditor;
    pub use crate::session::{CartHandle, Session};
    pub use crate::store_view::{StoreTab, StoreView};
}
