//! The saved player pool.
//!
//! A reusable list of names the embedder persists between tournaments;
//! selections from it pre-fill the setup slots. The pool keeps itself
//! sorted and free of duplicates — the tournament roster itself does
//! neither.

use serde::{Deserialize, Serialize};

use crate::tournament::models::{DEFAULT_PLAYER_SLOTS, PlayerName};

/// Saved names, sorted and deduplicated.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct PlayerPool {
    names: Vec<PlayerName>,
}

impl PlayerPool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn names(&self) -> &[PlayerName] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Add a trimmed name. Empty input and duplicates are ignored.
    /// Returns whether the pool changed.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        self.names.sort();
        true
    }

    /// Remove a name. Returns whether the pool changed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    /// Turn a selection into a setup slot list, padded with empty slots
    /// up to the default slot count.
    #[must_use]
    pub fn fill_slots(selection: &[PlayerName]) -> Vec<PlayerName> {
        let mut slots = selection.to_vec();
        while slots.len() < DEFAULT_PLAYER_SLOTS {
            slots.push(PlayerName::new());
        }
        slots
    }
}
