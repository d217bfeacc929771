//! Ordered item container with identity-based lookup.
//!
//! Removal of an absent id is a silent no-op; using an absent id is the one
//! signaled failure, and it leaves every item untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::{Item, UseOutcome};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("item {id} not found in the inventory")]
    ItemNotFound { id: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends the item; always succeeds.
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes every item whose id matches. Absent ids are ignored.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Use the item with the given id. Membership is confirmed first: an
    /// absent id fails with `ItemNotFound` before anything is touched.
    pub fn use_item(&mut self, id: &str) -> Result<UseOutcome, InventoryError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| InventoryError::ItemNotFound { id: id.to_string() })?;
        Ok(item.apply_use())
    }
}
