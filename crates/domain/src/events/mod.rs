//! Aggregate mutation outcomes
//!
//! Return types of house mutations, communicating what happened when state
//! was modified.

pub mod house_events;

pub use house_events::*;
