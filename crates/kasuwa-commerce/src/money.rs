//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// West African CFA franc. Prices are kept with centimes.
    #[default]
    XOF,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "XOF").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::XOF => "XOF",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "FCFA").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::XOF => "FCFA",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }

}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest currency unit (e.g., centimes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use kasuwa_commerce::money::{Currency, Money};
    /// let price = Money::from_decimal(12.99, Currency::XOF);
    /// assert_eq!(price.amount_cents, 1299);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_cents = (amount * multiplier as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_cents as f64 / divisor as f64
    }

    /// Format as a display string (e.g., "1299.99 FCFA" or "$49.99").
    pub fn display(&self) -> String {
        let decimal = self.to_decimal();
        let places = self.currency.decimal_places() as usize;
        match self.currency {
            // FCFA is written after the amount
            Currency::XOF => format!("{:.places$} {}", decimal, self.currency.symbol()),
            _ => format!("{}{:.places$}", self.currency.symbol(), decimal),
        }
    }

    /// Try to add another Money value, returning None if currencies
    /// don't match or the addition overflows.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let amount = self.amount_cents.checked_add(other.amount_cents)?;
        Some(Money::new(amount, self.currency))
    }

    /// Sum an iterator of Money values, reporting which failure occurred:
    /// a currency differing from the expected one, or overflow.
    pub fn try_sum<'a>(
        iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Result<Money, CommerceError> {
        let mut total = Money::zero(currency);
        for m in iter {
            if m.currency != currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: currency.code().to_string(),
                    got: m.currency.code().to_string(),
                });
            }
            total = total.try_add(m).ok_or(CommerceError::Overflow)?;
        }
        Ok(total)
    }

    /// The pre-discount amount this value came from, given the percent
    /// that was taken off (amount / (1 - percent/100)).
    ///
    /// Returns None for a 100% discount.
    pub fn before_discount(&self, percent: u8) -> Option<Money> {
        if percent >= 100 {
            return None;
        }
        let factor = 1.0 - f64::from(percent) / 100.0;
        let amount = (self.amount_cents as f64 / factor).round() as i64;
        Some(Money::new(amount, self.currency))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
