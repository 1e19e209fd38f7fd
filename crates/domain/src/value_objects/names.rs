//! Validated string newtypes for houses and their openings
//!
//! These newtypes ensure that values are valid by construction:
//! - Non-empty after trimming
//! - Within length limits

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for an address
const MAX_ADDRESS_LENGTH: usize = 300;

/// Maximum length for material and color labels
const MAX_LABEL_LENGTH: usize = 100;

// ============================================================================
// Address
// ============================================================================

/// A house address, the identity of a house.
///
/// Unlike the other names the address is kept exactly as given (no trimming),
/// since two houses are the same house only when their addresses match
/// character for character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Create a new validated address.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The address is empty or only whitespace
    /// - The address exceeds 300 characters
    pub fn new(address: impl Into<String>) -> Result<Self, DomainError> {
        let address = address.into();
        if address.trim().is_empty() {
            return Err(DomainError::validation("Address cannot be empty"));
        }
        if address.len() > MAX_ADDRESS_LENGTH {
            return Err(DomainError::validation(format!(
                "Address cannot exceed {} characters",
                MAX_ADDRESS_LENGTH
            )));
        }
        Ok(Self(address))
    }

    /// Returns the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Address {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> String {
        address.0
    }
}

// ============================================================================
// Labels (Material, Color)
// ============================================================================

macro_rules! define_label {
    ($(#[$meta:meta])* $name:ident, $what:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            #[doc = concat!("Create a new validated ", $what, " (non-empty, <=100 chars, trimmed).")]
            ///
            /// # Errors
            ///
            /// Returns `DomainError::Validation` if the value is blank or too long.
            pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
                let value = value.into();
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::validation(concat!(
                        "Opening ", $what, " cannot be empty"
                    )));
                }
                if trimmed.len() > MAX_LABEL_LENGTH {
                    return Err(DomainError::validation(format!(
                        concat!("Opening ", $what, " cannot exceed {} characters"),
                        MAX_LABEL_LENGTH
                    )));
                }
                Ok(Self(trimmed.to_string()))
            }

            /// Built-in defaults are known to be valid.
            pub(crate) fn known(value: &'static str) -> Self {
                Self(value.to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::new(s)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.0
            }
        }
    };
}

define_label!(
    /// What a door or window frame is made of ("Wood", "Metal", ...)
    Material,
    "material"
);

define_label!(
    /// Paint color of a door or window frame
    Color,
    "color"
);

#[cfg(test)]
mod tests {
    use super::*;

    mod address {
        use super::*;

        #[test]
        fn keeps_value_verbatim() {
            let address = Address::new(" Kyiv, Khreschatyk").unwrap();
            assert_eq!(address.as_str(), " Kyiv, Khreschatyk");
        }

        #[test]
        fn rejects_blank() {
            assert!(Address::new("").is_err());
            assert!(Address::new("   ").is_err());
        }

        #[test]
        fn rejects_too_long() {
            assert!(Address::new("a".repeat(301)).is_err());
            assert!(Address::new("a".repeat(300)).is_ok());
        }

        #[test]
        fn comparison_is_case_sensitive() {
            let lower = Address::new("lviv").unwrap();
            let upper = Address::new("Lviv").unwrap();
            assert_ne!(lower, upper);
        }
    }

    mod labels {
        use super::*;

        #[test]
        fn material_is_trimmed() {
            let material = Material::new("  Oak ").unwrap();
            assert_eq!(material.as_str(), "Oak");
        }

        #[test]
        fn color_rejects_blank() {
            let err = Color::new(" ").unwrap_err();
            assert_eq!(
                err.to_string(),
                "Validation failed: Opening color cannot be empty"
            );
        }

        #[test]
        fn deserialization_validates() {
            let ok: Result<Material, _> = serde_json::from_str("\"Metal\"");
            assert_eq!(ok.unwrap().as_str(), "Metal");
            let bad: Result<Color, _> = serde_json::from_str("\"\"");
            assert!(bad.is_err());
        }
    }
}
