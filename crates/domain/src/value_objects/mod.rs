//! Value objects - validated, immutable building blocks of the domain

pub mod dimensions;
pub mod names;

pub use dimensions::{FloorArea, FloorCount, RoomCount};
pub use names::{Address, Color, Material};
