//! Game price

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Non-negative price with two decimal places, at most [`Price::max_amount`].
/// Zero means the game is free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    pub const FREE: Self = Self(Decimal::ZERO);

    /// Largest storable amount (`NUMERIC(10, 2)`)
    pub fn max_amount() -> Decimal {
        Decimal::new(9_999_999_999, 2)
    }

    /// Validate a raw amount, rounding to cents
    pub fn new(amount: Decimal) -> Result<Self, DomainError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::InvalidPrice(amount.to_string()));
        }
        let rounded = amount.round_dp(2);
        if rounded > Self::max_amount() {
            return Err(DomainError::InvalidPrice(amount.to_string()));
        }
        Ok(Self(rounded))
    }

    #[inline]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    #[inline]
    pub fn is_free(self) -> bool {
        self.0.is_zero()
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::FREE
    }
}

impl TryFrom<Decimal> for Price {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
