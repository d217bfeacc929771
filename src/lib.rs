//! Skirmish - Game Entity & Inventory Simulation Library
//!
//! This module exposes the simulation logic for testing and external use.

pub mod combat;
pub mod core;
pub mod grid;
pub mod identity;
pub mod items;
pub mod roster;
pub mod timeline;
