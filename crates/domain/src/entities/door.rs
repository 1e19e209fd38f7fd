//! Doors
//!
//! A [`LockableDoor`] is a [`Door`] plus lock state, composed rather than
//! derived: the lock wraps the door and forwards the openable behaviour.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::capabilities::{Lockable, Openable};
use crate::error::DomainError;
use crate::keys::{Key, KeyGenerator};
use crate::types::OpeningType;
use crate::value_objects::{Address, Color, Material};
use homestead_domain::DoorId;

/// A door, initially closed.
///
/// Equality compares the door's attributes and opened state; the identity
/// is not part of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Door {
    id: DoorId,
    material: Material,
    color: Color,
    opening_type: OpeningType,
    has_glass: bool,
    opened: bool,
}

impl Door {
    pub fn new(material: Material, color: Color, opening_type: OpeningType, has_glass: bool) -> Self {
        Self {
            id: DoorId::new(),
            material,
            color,
            opening_type,
            has_glass,
            opened: false,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> DoorId {
        self.id
    }

    #[inline]
    pub fn material(&self) -> &Material {
        &self.material
    }

    #[inline]
    pub fn color(&self) -> &Color {
        &self.color
    }

    #[inline]
    pub fn opening_type(&self) -> OpeningType {
        self.opening_type
    }

    #[inline]
    pub fn has_glass(&self) -> bool {
        self.has_glass
    }

    // =========================================================================
    // Builder / Mutation Methods
    // =========================================================================

    /// Set the door's ID (used when restoring a known door).
    pub fn with_id(mut self, id: DoorId) -> Self {
        self.id = id;
        self
    }

    /// Repaint the door.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_opened(&mut self, opened: bool) {
        self.opened = opened;
    }
}

impl Default for Door {
    /// A closed, hinged, white wooden door without glass.
    fn default() -> Self {
        Self::new(
            Material::known("Wood"),
            Color::known("White"),
            OpeningType::Casual,
            false,
        )
    }
}

impl Openable for Door {
    fn open(&mut self) {
        self.opened = true;
    }

    fn close(&mut self) {
        self.opened = false;
    }

    fn is_opened(&self) -> bool {
        self.opened
    }
}

impl PartialEq for Door {
    fn eq(&self, other: &Self) -> bool {
        self.material == other.material
            && self.color == other.color
            && self.opening_type == other.opening_type
            && self.has_glass == other.has_glass
            && self.opened == other.opened
    }
}

impl Eq for Door {}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Door[material='{}', color='{}', type={}, has_glass={}, opened={}]",
            self.material, self.color, self.opening_type, self.has_glass, self.opened
        )
    }
}

// ============================================================================
// LockableDoor
// ============================================================================

/// A door with a lock, initially unlocked.
///
/// # Example
///
/// ```
/// use homestead_domain::{Address, LockableDoor, Lockable};
///
/// let address = Address::new("Kyiv, Khreschatyk").unwrap();
/// let mut door = LockableDoor::default();
///
/// let key = door.lock(&address).unwrap();
/// assert!(door.is_locked());
///
/// assert!(door.unlock(&address, &key));
/// assert!(!door.is_locked());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockableDoor {
    door: Door,
    locked: bool,
}

impl LockableDoor {
    pub fn new(material: Material, color: Color, opening_type: OpeningType, has_glass: bool) -> Self {
        Door::new(material, color, opening_type, has_glass).into()
    }

    #[inline]
    pub fn id(&self) -> DoorId {
        self.door.id()
    }

    /// The door the lock is fitted to.
    #[inline]
    pub fn door(&self) -> &Door {
        &self.door
    }

    pub fn set_color(&mut self, color: Color) {
        self.door.set_color(color);
    }
}

impl Default for LockableDoor {
    /// A closed, hinged, black metal door without glass.
    fn default() -> Self {
        Self::new(
            Material::known("Metal"),
            Color::known("Black"),
            OpeningType::Casual,
            false,
        )
    }
}

impl From<Door> for LockableDoor {
    /// Fit a lock to `door`. The lock starts unlocked.
    fn from(door: Door) -> Self {
        Self {
            door,
            locked: false,
        }
    }
}

impl Openable for LockableDoor {
    fn open(&mut self) {
        self.door.open();
    }

    fn close(&mut self) {
        self.door.close();
    }

    fn is_opened(&self) -> bool {
        self.door.is_opened()
    }
}

impl Lockable for LockableDoor {
    fn lock(&mut self, owner: &Address) -> Result<Key, DomainError> {
        let key = KeyGenerator::generate(owner, self.id())?;
        if !self.locked {
            self.locked = true;
            debug!(door_id = %self.id(), address = %owner, "Door locked");
        }
        Ok(key)
    }

    fn unlock(&mut self, owner: &Address, key: &Key) -> bool {
        if !self.locked || !key.is_valid_for(owner, self.id()) {
            return false;
        }
        self.locked = false;
        debug!(door_id = %self.id(), address = %owner, "Door unlocked");
        true
    }

    fn is_locked(&self) -> bool {
        self.locked
    }
}

impl fmt::Display for LockableDoor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LockableDoor[{}, locked={}]", self.door, self.locked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn address(s: &str) -> Address {
        Address::new(s).unwrap()
    }

    mod door {
        use super::*;

        #[test]
        fn default_is_closed_white_wood() {
            let door = Door::default();
            assert_eq!(door.material().as_str(), "Wood");
            assert_eq!(door.color().as_str(), "White");
            assert_eq!(door.opening_type(), OpeningType::Casual);
            assert!(!door.has_glass());
            assert!(!door.is_opened());
        }

        #[test]
        fn open_and_close_toggle_state() {
            let mut door = Door::default();
            door.open();
            assert!(door.is_opened());
            door.close();
            assert!(!door.is_opened());
            door.set_opened(true);
            assert!(door.is_opened());
        }

        #[test]
        fn equality_ignores_identity() {
            let a = Door::default();
            let b = Door::default();
            assert_ne!(a.id(), b.id());
            assert_eq!(a, b);
        }

        #[test]
        fn equality_includes_opened_state_and_color() {
            let a = Door::default();
            let mut b = Door::default();
            b.open();
            assert_ne!(a, b);

            let mut c = Door::default();
            c.set_color(Color::new("Green").unwrap());
            assert_ne!(a, c);
        }

        #[test]
        fn display_lists_fields() {
            let door = Door::default();
            assert_eq!(
                door.to_string(),
                "Door[material='Wood', color='White', type=Casual, has_glass=false, opened=false]"
            );
        }
    }

    mod lockable_door {
        use super::*;

        #[test]
        fn default_is_unlocked_black_metal() {
            let door = LockableDoor::default();
            assert!(!door.is_locked());
            assert!(!door.is_opened());
            assert_eq!(door.door().material().as_str(), "Metal");
            assert_eq!(door.door().color().as_str(), "Black");
        }

        #[test]
        fn lock_then_unlock_with_own_key() {
            let home = address("Kyiv");
            let mut door = LockableDoor::default();
            let key = door.lock(&home).unwrap();
            assert!(door.is_locked());
            assert!(door.unlock(&home, &key));
            assert!(!door.is_locked());
        }

        #[test]
        fn locking_twice_keeps_door_locked_with_same_key() {
            let home = address("Kyiv");
            let mut door = LockableDoor::default();
            let first = door.lock(&home).unwrap();
            let second = door.lock(&home).unwrap();
            assert!(door.is_locked());
            assert_eq!(first, second);
        }

        #[test]
        fn wrong_house_key_fails_and_keeps_lock() {
            let mut door = LockableDoor::default();
            let key = door.lock(&address("Kyiv")).unwrap();
            assert!(!door.unlock(&address("Lviv"), &key));
            assert!(door.is_locked());
        }

        #[test]
        fn key_for_identical_looking_door_fails() {
            let home = address("Kyiv");
            let mut door = LockableDoor::default();
            let mut twin = LockableDoor::default();
            assert_eq!(door, twin);

            let twin_key = twin.lock(&home).unwrap();
            door.lock(&home).unwrap();
            assert!(!door.unlock(&home, &twin_key));
            assert!(door.is_locked());
        }

        #[test]
        fn unlock_on_unlocked_door_fails() {
            let home = address("Kyiv");
            let mut door = LockableDoor::default();
            let key = KeyGenerator::generate(&home, door.id()).unwrap();
            assert!(!door.unlock(&home, &key));
            assert!(!door.is_locked());
        }

        #[test]
        fn lock_with_nil_identity_fails_without_locking() {
            let door = Door::default().with_id(DoorId::from_uuid(Uuid::nil()));
            let mut door = LockableDoor::from(door);
            let err = door.lock(&address("Kyiv")).unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
            assert!(!door.is_locked());
        }

        #[test]
        fn display_wraps_door() {
            let door = LockableDoor::new(
                Material::new("Metal").unwrap(),
                Color::new("Brown").unwrap(),
                OpeningType::Sliding,
                true,
            );
            assert_eq!(
                door.to_string(),
                "LockableDoor[Door[material='Metal', color='Brown', type=Sliding, has_glass=true, opened=false], locked=false]"
            );
        }

        #[test]
        fn serializes_lock_state() {
            let door = LockableDoor::default();
            let json = serde_json::to_value(&door).unwrap();
            assert_eq!(json["locked"], false);
            assert_eq!(json["door"]["material"], "Metal");
        }
    }
}
