//! Size figures of a house
//!
//! - **FloorArea**: total square footage, positive and finite
//! - **RoomCount** / **FloorCount**: at least one

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DomainError;

/// Total floor area of a house (validated newtype)
///
/// # Examples
///
/// ```
/// use homestead_domain::value_objects::FloorArea;
///
/// let area = FloorArea::new(75.0).unwrap();
/// assert_eq!(area.value(), 75.0);
///
/// assert!(FloorArea::new(0.0).is_err());
/// assert!(FloorArea::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct FloorArea(f64);

impl FloorArea {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` unless the area is finite and > 0.
    pub fn new(area: f64) -> Result<Self, DomainError> {
        if !area.is_finite() || area <= 0.0 {
            return Err(DomainError::validation(format!(
                "Floor area must be a positive number, got {}",
                area
            )));
        }
        Ok(Self(area))
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for FloorArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl TryFrom<f64> for FloorArea {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FloorArea> for f64 {
    fn from(area: FloorArea) -> f64 {
        area.0
    }
}

macro_rules! define_count {
    ($(#[$meta:meta])* $name:ident, $what:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "u32", into = "u32")]
        pub struct $name(u32);

        impl $name {
            /// # Errors
            ///
            /// Returns `DomainError::Validation` when the count is zero.
            pub fn new(count: u32) -> Result<Self, DomainError> {
                if count == 0 {
                    return Err(DomainError::validation(concat!(
                        "A house needs at least one ", $what
                    )));
                }
                Ok(Self(count))
            }

            #[inline]
            pub fn value(&self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<u32> for $name {
            type Error = DomainError;

            fn try_from(value: u32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for u32 {
            fn from(count: $name) -> u32 {
                count.0
            }
        }
    };
}

define_count!(
    /// Number of rooms in a house
    RoomCount,
    "room"
);

define_count!(
    /// Number of floors in a house
    FloorCount,
    "floor"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_area_rejects_negative_and_infinite() {
        assert!(FloorArea::new(-1.0).is_err());
        assert!(FloorArea::new(f64::INFINITY).is_err());
    }

    #[test]
    fn floor_area_displays_with_fraction() {
        assert_eq!(FloorArea::new(75.0).unwrap().to_string(), "75.0");
        assert_eq!(FloorArea::new(12.5).unwrap().to_string(), "12.5");
    }

    #[test]
    fn counts_reject_zero() {
        let err = RoomCount::new(0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: A house needs at least one room"
        );
        assert!(FloorCount::new(0).is_err());
        assert_eq!(FloorCount::new(2).unwrap().value(), 2);
    }

    #[test]
    fn counts_deserialize_with_validation() {
        let rooms: RoomCount = serde_json::from_str("3").unwrap();
        assert_eq!(rooms.value(), 3);
        assert!(serde_json::from_str::<FloorCount>("0").is_err());
    }
}
