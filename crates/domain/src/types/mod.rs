//! Plain enumerations shared by doors and windows

pub mod openings;

pub use openings::{Direction, OpeningType, WindowType};
