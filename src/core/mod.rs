//! Core geometry and traversal helpers shared by every system.

pub mod bitset;
pub mod frame;

pub use bitset::SlotSet;
pub use frame::{local_to_world, world_to_local};
