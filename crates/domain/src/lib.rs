//! Homestead domain - houses built from doors and windows
//!
//! A [`House`] owns a lockable entry door, room doors and windows. It is put
//! together with a [`HouseBuilder`]; afterwards it can open windows and lock
//! or unlock its entry door with a [`Key`].

extern crate self as homestead_domain;

pub mod aggregates;
pub mod capabilities;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod keys;
pub mod types;
pub mod value_objects;

pub use aggregates::{House, HouseBuilder};
pub use capabilities::{Lockable, Openable};
pub use entities::{Door, LockableDoor, OpenableWindow, Window, WindowFrame};
pub use error::DomainError;
pub use events::EntryLockOutcome;
pub use ids::DoorId;
pub use keys::{Key, KeyGenerator};
pub use types::{Direction, OpeningType, WindowType};
pub use value_objects::{Address, Color, FloorArea, FloorCount, Material, RoomCount};
