//! Tags: the closed identifier vocabulary of a world
//!
//! Every node is named by exactly one tag, and tags double as the keys of
//! the player's acquired-flags set and the vocabulary of gating conditions.
//! The set is closed: all tags are declared while the world is built, and
//! slot 0 is always the "none" sentinel.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An opaque handle naming one node in a world graph.
///
/// Tags are indices into the graph's node arena, which sidesteps any
/// ownership questions for parent back-references: a `Tag` never owns
/// anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag(u16);

impl Tag {
    /// The sentinel tag. Never gates anything and is never acquirable.
    pub const NONE: Tag = Tag(0);

    pub fn is_none(self) -> bool {
        self == Tag::NONE
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }

    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index <= u16::MAX as usize);
        Tag(index as u16)
    }
}

/// The closed, author-declared set of tag names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagRegistry {
    names: Vec<String>,
    by_name: HashMap<String, Tag>,
}

impl TagRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            names: Vec::new(),
            by_name: HashMap::new(),
        };
        registry.declare("NONE");
        registry
    }

    /// Declare a tag, or return the existing handle if the name is known.
    pub fn declare(&mut self, name: &str) -> Tag {
        if let Some(&tag) = self.by_name.get(name) {
            return tag;
        }
        let tag = Tag::from_index(self.names.len());
        self.names.push(name.to_string());
        self.by_name.insert(name.to_string(), tag);
        tag
    }

    /// Look up a declared tag by name.
    pub fn lookup(&self, name: &str) -> Option<Tag> {
        self.by_name.get(name).copied()
    }

    /// The name a tag was declared under.
    pub fn name(&self, tag: Tag) -> &str {
        &self.names[tag.index()]
    }

    /// Number of declared tags, sentinel included.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        false // the sentinel is always present
    }

    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        (0..self.names.len()).map(Tag::from_index)
    }
}

impl Default for TagRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a tag name as a scene id string: upper-case, underscores to
/// dashes (`ODV9_B1_C` becomes `ODV9-B1-C`).
pub fn display_id(name: &str) -> String {
    name.chars()
        .map(|c| if c == '_' { '-' } else { c.to_ascii_uppercase() })
        .collect()
}
