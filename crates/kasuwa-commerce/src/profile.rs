//! Customer profile.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// The editable customer profile.
///
/// Name and phone are required; the remaining fields may stay empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Profile {
    /// Full name (required).
    pub name: String,
    /// Phone number (required).
    pub phone: String,
    /// Email address.
    pub email: String,
    /// Home address.
    pub address: String,
    /// Date of birth, as entered.
    pub date_of_birth: String,
    /// Gender, as entered.
    pub gender: String,
}

impl Profile {
    /// Create a profile with the required fields set.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            ..Self::default()
        }
    }

    /// Check the required fields are present and non-blank.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.name.trim().is_empty() {
            return Err(CommerceError::required("name"));
        }
        if self.phone.trim().is_empty() {
            return Err(CommerceError::required("phone"));
        }
        Ok(())
    }
}
