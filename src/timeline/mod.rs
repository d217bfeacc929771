//! Timed game events with string identities.
//!
//! Generic over the time representation so a driver can stamp events with
//! ticks, rounds, or wall-clock seconds.

use serde::{Deserialize, Serialize};

use crate::identity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEvent<T> {
    pub id: String,
    pub action: String,
    pub time: T,
}

impl<T> GameEvent<T> {
    /// Create an event with a fresh identity.
    pub fn new(action: impl Into<String>, time: T) -> Self {
        Self {
            id: identity::new_id(),
            action: action.into(),
            time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline<T> {
    events: Vec<GameEvent<T>>,
}

impl<T: Copy + PartialEq> Timeline<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn add(&mut self, event: GameEvent<T>) {
        self.events.push(event);
    }

    /// Removes every event whose id matches. Absent ids are ignored.
    pub fn remove(&mut self, id: &str) {
        self.events.retain(|event| event.id != id);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All events stamped with exactly `time`, in insertion order.
    pub fn events_at(&self, time: T) -> Vec<&GameEvent<T>> {
        self.events
            .iter()
            .filter(|event| event.time == time)
            .collect()
    }
}

impl<T: Copy + PartialEq> Default for Timeline<T> {
    fn default() -> Self {
        Self::new()
    }
}
