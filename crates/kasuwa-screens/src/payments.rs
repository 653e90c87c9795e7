//! The payment methods screen's collection.
//!
//! Every method is mobile money; the provider set matches the carriers
//! available in Niamey.

use crate::collection::{CollectionStore, Record};
use kasuwa_commerce::error::CommerceError;
use kasuwa_commerce::ids::RecordId;
use serde::{Deserialize, Serialize};

/// Mobile money carriers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MobileMoneyProvider {
    #[default]
    OrangeMoney,
    MoovMoney,
    AirtelMoney,
}

impl MobileMoneyProvider {
    pub const ALL: [MobileMoneyProvider; 3] = [
        MobileMoneyProvider::OrangeMoney,
        MobileMoneyProvider::MoovMoney,
        MobileMoneyProvider::AirtelMoney,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            MobileMoneyProvider::OrangeMoney => "Orange Money",
            MobileMoneyProvider::MoovMoney => "Moov Money",
            MobileMoneyProvider::AirtelMoney => "Airtel Money",
        }
    }
}

/// A saved mobile money account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentMethod {
    /// Unique id within the wallet.
    pub id: RecordId,
    /// Carrier.
    pub provider: MobileMoneyProvider,
    /// Account phone number (required).
    pub number: String,
    /// Whether this is the preferred payment method.
    pub is_default: bool,
}

impl PaymentMethod {
    /// Create a method candidate for `add`; the store assigns the id
    /// and the default flag.
    pub fn new(provider: MobileMoneyProvider, number: impl Into<String>) -> Self {
        Self {
            id: RecordId::new(""),
            provider,
            number: number.into(),
            is_default: false,
        }
    }
}

impl Record for PaymentMethod {
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
        if self.number.trim().is_empty() {
            return Err(CommerceError::required("number"));
        }
        Ok(())
    }
}

/// The payment wallet: an ordered collection of saved methods.
pub type PaymentWallet = CollectionStore<PaymentMethod>;

/// Create an empty wallet.
pub fn payment_wallet() -> PaymentWallet {
    CollectionStore::new("payment method")
}

/// The two-method demo wallet the app starts with.
pub fn demo_payment_wallet() -> PaymentWallet {
    CollectionStore::with_records(
        "payment method",
        vec![
            PaymentMethod {
                id: RecordId::new("1"),
                provider: MobileMoneyProvider::OrangeMoney,
                number: "+227 90 12 34 56".to_string(),
                is_default: true,
            },
            PaymentMethod {
                id: RecordId::new("2"),
                provider: MobileMoneyProvider::MoovMoney,
                number: "+227 96 78 90 12".to_string(),
                is_default: false,
            },
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_seed() {
        let wallet = demo_payment_wallet();
        assert_eq!(wallet.len(), 2);
        assert_eq!(
            wallet.default_record().unwrap().provider,
            MobileMoneyProvider::OrangeMoney
        );
    }

    #[test]
    fn test_add_requires_number() {
        let mut wallet = payment_wallet();
        let err = wallet
            .add(PaymentMethod::new(MobileMoneyProvider::AirtelMoney, ""))
            .unwrap_err();
        assert!(matches!(err, CommerceError::Validation(_)));
        assert!(wallet.is_empty());
    }

    #[test]
    fn test_first_method_is_default() {
        let mut wallet = payment_wallet();
        wallet
            .add(PaymentMethod::new(
                MobileMoneyProvider::AirtelMoney,
                "+227 99 00 11 22",
            ))
            .unwrap();
        assert!(wallet.records()[0].is_default);
    }

    #[test]
    fn test_delete_default_leaves_none_preferred() {
        let mut wallet = demo_payment_wallet();
        wallet.remove(&RecordId::new("1")).unwrap();

        assert_eq!(wallet.len(), 1);
        assert!(wallet.default_record().is_none());
    }

    #[test]
    fn test_provider_names() {
        assert_eq!(MobileMoneyProvider::ALL.len(), 3);
        assert_eq!(
            MobileMoneyProvider::MoovMoney.display_name(),
            "Moov Money"
        );
    }
}
