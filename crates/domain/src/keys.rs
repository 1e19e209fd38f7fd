//! Entry door keys
//!
//! A [`Key`] is a digest of the pair (house address, door identity). It carries
//! no nonce: every key minted for the same pair is equal to every other, and
//! a key opens nothing but the door of the house it was cut for. This is a
//! toy mechanism, not a security primitive.

use std::fmt;

use sha2::{Digest, Sha256};

use crate::error::DomainError;
use crate::value_objects::Address;
use homestead_domain::DoorId;

/// Opaque token returned when a door is locked.
///
/// Keys cannot be constructed directly; use [`KeyGenerator::generate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    digest: [u8; 32],
}

impl Key {
    /// Checks whether this key belongs to `door` of the house at `address`.
    pub fn is_valid_for(&self, address: &Address, door: DoorId) -> bool {
        !door.is_nil() && self.digest == digest_of(address, door)
    }

    /// Short hex form used for display and logs.
    pub fn fingerprint(&self) -> String {
        hex::encode(&self.digest[..8])
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key[hashKey={}]", self.fingerprint())
    }
}

/// Mints and recomputes keys from (house, door) identities.
pub struct KeyGenerator;

impl KeyGenerator {
    /// Generate the key for `door` of the house at `address`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if either identity is absent: a
    /// blank address or the nil door identity.
    ///
    /// # Example
    ///
    /// ```
    /// use homestead_domain::{Address, DoorId, KeyGenerator};
    ///
    /// let address = Address::new("Lviv, prosp. Svobody").unwrap();
    /// let door = DoorId::new();
    /// let key = KeyGenerator::generate(&address, door).unwrap();
    ///
    /// assert!(key.is_valid_for(&address, door));
    /// assert!(!key.is_valid_for(&address, DoorId::new()));
    /// ```
    pub fn generate(address: &Address, door: DoorId) -> Result<Key, DomainError> {
        if address.as_str().trim().is_empty() {
            return Err(DomainError::validation("Key requires a house address"));
        }
        if door.is_nil() {
            return Err(DomainError::validation("Key requires an assigned door identity"));
        }
        Ok(Key {
            digest: digest_of(address, door),
        })
    }
}

// Door identity first: it is fixed width, so the pair encodes unambiguously.
fn digest_of(address: &Address, door: DoorId) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(door.as_uuid().as_bytes());
    hasher.update(address.as_bytes());
    hasher.finalize().into()
}
