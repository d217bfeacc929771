//! Shared tuning constants for combat and items.

pub mod constants;

pub use constants::*;
