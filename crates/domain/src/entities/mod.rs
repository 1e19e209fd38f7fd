//! Entities - the openings a house is made of
//!
//! Doors carry an identity (`DoorId`) because keys are cut for a specific
//! door. Windows are identified by their position in the house.

pub mod door;
pub mod window;

pub use door::{Door, LockableDoor};
pub use window::{OpenableWindow, Window, WindowFrame};
