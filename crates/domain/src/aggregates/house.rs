//! House aggregate - an address with an entry door, room doors and windows
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: a house can only be assembled through [`HouseBuilder`]
//! - **Newtypes**: `Address`, `FloorArea`, `RoomCount`, `FloorCount`
//! - **Identity**: the address alone; two houses at the same address are
//!   equal whatever their rooms, doors or windows. This is kept as found even
//!   though it lets differently furnished houses compare equal.

use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::{debug, warn};

use crate::capabilities::{Lockable, Openable};
use crate::entities::{Door, LockableDoor, Window};
use crate::error::DomainError;
use crate::events::EntryLockOutcome;
use crate::keys::Key;
use crate::value_objects::{Address, FloorArea, FloorCount, RoomCount};

/// A house
///
/// # Invariants
///
/// - There is exactly one entry door (enforced by `HouseBuilder::build`)
/// - `door_count()` is the number of room doors plus the entry door
///
/// # Example
///
/// ```
/// use homestead_domain::{Address, FloorArea, FloorCount, House, LockableDoor, RoomCount};
///
/// let mut builder = House::builder(
///     Address::new("Kyiv, Khreschatyk").unwrap(),
///     FloorArea::new(75.0).unwrap(),
///     RoomCount::new(3).unwrap(),
///     FloorCount::new(1).unwrap(),
/// );
/// builder.set_entry_door(LockableDoor::default()).unwrap();
/// builder.add_room_doors(5).unwrap().add_windows(12).unwrap();
/// let mut house = builder.build().unwrap();
///
/// assert_eq!(house.door_count(), 6);
/// assert_eq!(house.window_count(), 12);
///
/// let key = house.lock_with_key().unwrap().into_key().unwrap();
/// assert!(house.unlock_with_key(&key));
/// ```
#[derive(Debug, Clone)]
pub struct House {
    // Identity
    address: Address,

    // Dimensions
    floor_area: FloorArea,
    rooms: RoomCount,
    floors: FloorCount,

    // Openings
    entry_door: LockableDoor,
    room_doors: Vec<Door>,
    windows: Vec<Window>,
}

impl House {
    /// Start building a house. Room doors and windows start empty.
    pub fn builder(
        address: Address,
        floor_area: FloorArea,
        rooms: RoomCount,
        floors: FloorCount,
    ) -> HouseBuilder {
        HouseBuilder::new(address, floor_area, rooms, floors)
    }

    /// Hand the house back to a builder to continue construction.
    pub fn into_builder(self) -> HouseBuilder {
        HouseBuilder::from_house(self)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn address(&self) -> &Address {
        &self.address
    }

    #[inline]
    pub fn floor_area(&self) -> FloorArea {
        self.floor_area
    }

    #[inline]
    pub fn rooms(&self) -> RoomCount {
        self.rooms
    }

    #[inline]
    pub fn floors(&self) -> FloorCount {
        self.floors
    }

    #[inline]
    pub fn entry_door(&self) -> &LockableDoor {
        &self.entry_door
    }

    #[inline]
    pub fn room_doors(&self) -> &[Door] {
        &self.room_doors
    }

    #[inline]
    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    #[inline]
    pub fn is_entry_locked(&self) -> bool {
        self.entry_door.is_locked()
    }

    /// Total number of windows.
    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// Room doors plus the entry door.
    pub fn door_count(&self) -> usize {
        self.room_doors.len() + 1
    }

    // =========================================================================
    // Domain Methods
    // =========================================================================

    /// Open the first closed openable window, in insertion order.
    ///
    /// Returns `false` when every openable window is already open.
    pub fn open_some_window(&mut self) -> bool {
        for (position, window) in self.windows.iter_mut().enumerate() {
            if let Some(openable) = window.as_openable_mut() {
                if !openable.is_opened() {
                    openable.open();
                    debug!(address = %self.address, position, "Window opened");
                    return true;
                }
            }
        }
        false
    }

    /// Lock the entry door and return the outcome carrying its key.
    ///
    /// An open entry door is closed first. Windows left open do not prevent
    /// locking; each one is logged as a warning and reported in the outcome.
    /// An already locked door yields [`EntryLockOutcome::AlreadyLocked`].
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if no key can be cut for the entry
    /// door (its identity was never assigned).
    pub fn lock_with_key(&mut self) -> Result<EntryLockOutcome, DomainError> {
        if self.entry_door.is_locked() {
            debug!(address = %self.address, "Entry door already locked");
            return Ok(EntryLockOutcome::AlreadyLocked);
        }

        let closed_entry_door = self.entry_door.is_opened();
        if closed_entry_door {
            self.entry_door.close();
        }

        let mut open_windows = Vec::new();
        for (position, window) in self.windows.iter().enumerate() {
            if window.is_opened() {
                warn!(
                    address = %self.address,
                    position,
                    window = %window,
                    "Window left open while locking entry door"
                );
                open_windows.push(position);
            }
        }

        let key = self.entry_door.lock(&self.address)?;
        Ok(EntryLockOutcome::Locked {
            key,
            closed_entry_door,
            open_windows,
        })
    }

    /// Unlock the entry door with `key`.
    ///
    /// Returns `false` without looking at the key when the door is not locked,
    /// and `false` when the key was cut for another house or door.
    pub fn unlock_with_key(&mut self, key: &Key) -> bool {
        if !self.entry_door.is_locked() {
            return false;
        }
        let unlocked = self.entry_door.unlock(&self.address, key);
        if !unlocked {
            debug!(address = %self.address, key = %key.fingerprint(), "Key rejected by entry door");
        }
        unlocked
    }
}

impl PartialEq for House {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl Eq for House {}

impl Hash for House {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address.hash(state);
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "House[address='{}', square={}, rooms={}, floors={}, entry_door_locked={}, room_doors={}, windows={}]",
            self.address,
            self.floor_area,
            self.rooms,
            self.floors,
            self.entry_door.is_locked(),
            self.room_doors.len(),
            self.windows.len()
        )
    }
}

// ============================================================================
// HouseBuilder
// ============================================================================

/// Staged construction of a [`House`].
///
/// The entry door must be set before [`HouseBuilder::build`]; once a locked
/// entry door is in place it cannot be replaced.
#[derive(Debug, Clone)]
pub struct HouseBuilder {
    address: Address,
    floor_area: FloorArea,
    rooms: RoomCount,
    floors: FloorCount,
    entry_door: Option<LockableDoor>,
    room_doors: Vec<Door>,
    windows: Vec<Window>,
}

impl HouseBuilder {
    pub fn new(address: Address, floor_area: FloorArea, rooms: RoomCount, floors: FloorCount) -> Self {
        Self {
            address,
            floor_area,
            rooms,
            floors,
            entry_door: None,
            room_doors: Vec::new(),
            windows: Vec::new(),
        }
    }

    /// Continue building an existing house, keeping all of its state.
    pub fn from_house(house: House) -> Self {
        Self {
            address: house.address,
            floor_area: house.floor_area,
            rooms: house.rooms,
            floors: house.floors,
            entry_door: Some(house.entry_door),
            room_doors: house.room_doors,
            windows: house.windows,
        }
    }

    pub fn entry_door(&self) -> Option<&LockableDoor> {
        self.entry_door.as_ref()
    }

    /// Set or replace the entry door.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStateTransition` if the current entry door
    /// is locked, whatever the replacement.
    pub fn set_entry_door(&mut self, door: LockableDoor) -> Result<&mut Self, DomainError> {
        if self.entry_door.as_ref().is_some_and(Lockable::is_locked) {
            return Err(DomainError::invalid_state_transition(
                "Entry door is in 'locked' state",
            ));
        }
        self.entry_door = Some(door);
        Ok(self)
    }

    pub fn add_room_door(&mut self, door: Door) -> &mut Self {
        self.room_doors.push(door);
        self
    }

    /// Add `amount` default room doors.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `amount` is negative.
    pub fn add_room_doors(&mut self, amount: i32) -> Result<&mut Self, DomainError> {
        let amount = non_negative(amount, "room doors")?;
        self.room_doors
            .extend(std::iter::repeat_with(Door::default).take(amount));
        Ok(self)
    }

    pub fn add_window(&mut self, window: impl Into<Window>) -> &mut Self {
        self.windows.push(window.into());
        self
    }

    /// Add `amount` default windows, alternating fixed and openable.
    ///
    /// Even positions of the batch (starting at 0) get fixed windows, odd
    /// positions get openable ones.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `amount` is negative.
    pub fn add_windows(&mut self, amount: i32) -> Result<&mut Self, DomainError> {
        let amount = non_negative(amount, "windows")?;
        self.windows.extend((0..amount).map(|i| {
            if i % 2 == 0 {
                Window::fixed()
            } else {
                Window::openable()
            }
        }));
        Ok(self)
    }

    /// Finish construction.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if no entry door was set.
    pub fn build(self) -> Result<House, DomainError> {
        let entry_door = self
            .entry_door
            .ok_or_else(|| DomainError::validation("A house needs an entry door"))?;
        Ok(House {
            address: self.address,
            floor_area: self.floor_area,
            rooms: self.rooms,
            floors: self.floors,
            entry_door,
            room_doors: self.room_doors,
            windows: self.windows,
        })
    }
}

fn non_negative(amount: i32, what: &str) -> Result<usize, DomainError> {
    usize::try_from(amount).map_err(|_| {
        DomainError::validation(format!(
            "Amount of {} cannot be negative, got {}",
            what, amount
        ))
    })
}

// ============================================================================
// Tests
// ============================================================================
