//! Item system: kinds, usage rules, and the inventory container.

pub mod inventory;
pub mod types;

pub use inventory::*;
pub use types::*;
