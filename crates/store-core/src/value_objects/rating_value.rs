//! Star rating value (1-5)

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A validated star rating in the closed range [1, 5]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct RatingValue(u8);

impl RatingValue {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Validate a raw rating
    pub fn new(value: i32) -> Result<Self, DomainError> {
        if (i32::from(Self::MIN)..=i32::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(DomainError::InvalidRating(value))
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i32> for RatingValue {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RatingValue> for i32 {
    fn from(value: RatingValue) -> Self {
        i32::from(value.0)
    }
}

impl fmt::Display for RatingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_range() {
        for v in 1..=5 {
            assert_eq!(i32::from(RatingValue::new(v).unwrap()), v);
        }
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(matches!(RatingValue::new(0), Err(DomainError::InvalidRating(0))));
        assert!(matches!(RatingValue::new(6), Err(DomainError::InvalidRating(6))));
        assert!(RatingValue::new(-3).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: RatingValue = serde_json::from_str("4").unwrap();
        assert_eq!(ok.get(), 4);
        assert!(serde_json::from_str::<RatingValue>("9").is_err());
    }
}
