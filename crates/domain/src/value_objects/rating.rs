//! Player rating value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Highest attainable rating.
pub const MAX_RATING: u8 = 100;

/// A 0-100 player attribute (contact, power, control, speed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// League-average rating; the resolver formulas are centred on it.
    pub const AVERAGE: Rating = Rating(50);

    /// Create a validated rating.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the value exceeds 100.
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if value > MAX_RATING {
            return Err(DomainError::validation(format!(
                "Rating must be between 0 and {}, got {}",
                MAX_RATING, value
            )));
        }
        Ok(Self(value))
    }

    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::AVERAGE
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Rating {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_range() {
        assert_eq!(Rating::new(0).unwrap().value(), 0);
        assert_eq!(Rating::new(100).unwrap().value(), 100);
    }

    #[test]
    fn rejects_above_hundred() {
        assert!(Rating::new(101).is_err());
        assert!(serde_json::from_str::<Rating>("150").is_err());
    }
}
