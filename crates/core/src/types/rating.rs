//! Review star rating.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Rating`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RatingError {
    /// The value is outside the allowed star range.
    #[error("rating must be between {min} and {max} stars (got {value})")]
    OutOfRange {
        /// The rejected value.
        value: u8,
        /// Minimum allowed stars.
        min: u8,
        /// Maximum allowed stars.
        max: u8,
    },
}

/// A 1-5 star review rating.
///
/// ## Examples
///
/// ```
/// use automats_core::Rating;
///
/// assert!(Rating::new(5).is_ok());
/// assert!(Rating::new(0).is_err());
/// assert!(Rating::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Fewest stars a review can carry.
    pub const MIN: u8 = 1;
    /// Most stars a review can carry.
    pub const MAX: u8 = 5;

    /// Create a rating.
    ///
    /// # Errors
    ///
    /// Returns `RatingError::OutOfRange` if `stars` is not within 1..=5.
    pub const fn new(stars: u8) -> Result<Self, RatingError> {
        if stars < Self::MIN || stars > Self::MAX {
            return Err(RatingError::OutOfRange {
                value: stars,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(stars))
    }

    /// Number of stars.
    #[must_use]
    pub const fn stars(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_range() {
        for stars in 1..=5 {
            assert_eq!(Rating::new(stars).unwrap().stars(), stars);
        }
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            Rating::new(0),
            Err(RatingError::OutOfRange {
                value: 0,
                min: 1,
                max: 5
            })
        );
        assert!(Rating::new(6).is_err());
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Rating>("4").is_ok());
        assert!(serde_json::from_str::<Rating>("9").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Rating::new(4).unwrap().to_string(), "4/5");
    }
}
