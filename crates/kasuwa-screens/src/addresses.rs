//! The address book screen's collection.

use crate::collection::{CollectionStore, Record};
use kasuwa_commerce::error::CommerceError;
use kasuwa_commerce::ids::RecordId;
use serde::{Deserialize, Serialize};

/// What kind of place an address points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AddressKind {
    #[default]
    Home,
    Work,
    Other,
}

impl AddressKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressKind::Home => "home",
            AddressKind::Work => "work",
            AddressKind::Other => "other",
        }
    }

    /// Display label for the kind selector.
    pub fn display_name(&self) -> &'static str {
        match self {
            AddressKind::Home => "Domicile",
            AddressKind::Work => "Bureau",
            AddressKind::Other => "Autre",
        }
    }
}

/// A saved delivery address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavedAddress {
    /// Unique id within the address book.
    pub id: RecordId,
    /// Kind of place.
    pub kind: AddressKind,
    /// User-chosen label (required).
    pub label: String,
    /// Full street address (required).
    pub street: String,
    /// City.
    pub city: String,
    /// Whether this is the preferred delivery address.
    pub is_default: bool,
}

impl SavedAddress {
    /// Create an address candidate for `add`; the store assigns the id
    /// and the default flag.
    pub fn new(
        kind: AddressKind,
        label: impl Into<String>,
        street: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            id: RecordId::new(""),
            kind,
            label: label.into(),
            street: street.into(),
            city: city.into(),
            is_default: false,
        }
    }
}

impl Record for SavedAddress {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn is_default(&self) -> bool {
        self.is_default
    }

    fn set_is_default(&mut self, value: bool) {
        self.is_default = value;
    }

    fn validate(&self) -> Result<(), CommerceError> {
        if self.label.trim().is_empty() {
            return Err(CommerceError::required("label"));
        }
        if self.street.trim().is_empty() {
            return Err(CommerceError::required("street"));
        }
        Ok(())
    }
}

/// The address book: an ordered collection of saved addresses.
pub type AddressBook = CollectionStore<SavedAddress>;

/// Create an empty address book.
pub fn address_book() -> AddressBook {
    CollectionStore::new("address")
}

/// The two-address demo book the app starts with.
pub fn demo_address_book() -> AddressBook {
    CollectionStore::with_records(
        "address",
        vec![
            SavedAddress {
                id: RecordId::new("1"),
                kind: AddressKind::Home,
                label: "Domicile".to_string(),
                street: "Quartier Plateau, Rue de la République".to_string(),
                city: "Niamey".to_string(),
                is_default: true,
            },
            SavedAddress {
                id: RecordId::new("2"),
                kind: AddressKind::Work,
                label: "Bureau".to_string(),
                street: "Zone industrielle, Avenue du Niger".to_string(),
                city: "Niamey".to_string(),
                is_default: false,
            },
        ],
    )
}
