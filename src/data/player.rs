//! The state of the player
//!
//! A current position plus a monotonically-growing set of acquired tags.
//! Owned by the game session and mutated only by the navigation state
//! machine; never rolled back.

use crate::data::tag::Tag;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    /// The node the player is currently on.
    pub current: Tag,
    acquired: HashSet<Tag>,
}

impl PlayerState {
    pub fn new(start: Tag) -> Self {
        Self {
            current: start,
            acquired: HashSet::new(),
        }
    }

    /// Add a tag to the acquired set. The sentinel is never acquirable.
    /// Returns true if the tag was newly acquired.
    pub fn acquire(&mut self, tag: Tag) -> bool {
        if tag.is_none() {
            return false;
        }
        self.acquired.insert(tag)
    }

    pub fn has(&self, tag: Tag) -> bool {
        self.acquired.contains(&tag)
    }

    pub fn acquired_count(&self) -> usize {
        self.acquired.len()
    }
}
