//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Has a unique identity
//! - Owns all its constituent parts (enforced by Rust ownership)
//! - Exposes behavior through methods, not public fields
//! - Returns outcome enums from mutations
//!
//! | Classic pattern | Rustic Equivalent |
//! |------------------|-------------------|
//! | Private fields + getters | Newtypes valid by construction |
//! | Subclass adds state | Wrapper struct or enum variant |
//! | Builder inner class | Standalone builder consumed by `build()` |
//! | Aggregate root guards | `&mut self` methods (borrow checker enforces exclusivity) |

pub mod house;

pub use house::{House, HouseBuilder};
