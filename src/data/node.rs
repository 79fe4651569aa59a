//! Nodes: the vertices of the world tree

use crate::data::tag::Tag;
use serde::{Deserialize, Serialize};

/// Fixed capacity of a node's ordered child list.
pub const MAX_CHILDREN: usize = 5;

/// Total option slots in a projected scene: the five structural slots
/// plus the kind-reserved sixth.
pub const MAX_OPTIONS: usize = 6;

/// What a node is, which determines how the player interacts with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// A node that is not used for anything (the root sentinel).
    None,
    /// A physical location with many exits.
    Hall,
    /// A physical location with many objects.
    Room,
    /// Something for the player to look at.
    Prop,
    /// Something for the player to pick up.
    Item,
    /// An item that is abstract: a synthetic milestone.
    Flag,
    /// Something that contains items.
    Case,
    /// A gate that needs a key.
    Lock,
}

impl NodeKind {
    /// Item and Flag share pickup traversal semantics.
    pub fn is_pickup(self) -> bool {
        matches!(self, NodeKind::Item | NodeKind::Flag)
    }

    /// Kinds that cannot be shown as a scene.
    pub fn is_projectable(self) -> bool {
        !matches!(self, NodeKind::None | NodeKind::Item | NodeKind::Flag)
    }

    /// Kinds whose scene is a transient inspection view the player is
    /// expected to back out of.
    pub fn is_inspection(self) -> bool {
        matches!(self, NodeKind::Prop | NodeKind::Case | NodeKind::Lock)
    }

    /// The default option label for a node of this kind.
    pub fn default_option_label(self, label: &str) -> String {
        match self {
            NodeKind::Item | NodeKind::Flag => format!("Pick up the {label}."),
            NodeKind::Room => format!("Enter the {label}."),
            NodeKind::Prop => format!("Look at {label}."),
            NodeKind::Lock => format!("Inspect the {label}."),
            NodeKind::Case => format!("Search the {label}."),
            NodeKind::Hall => format!("Move to the {label}."),
            NodeKind::None => label.to_string(),
        }
    }
}

/// A vertex in the world tree, identified 1:1 by its tag.
///
/// Immutable after graph construction. Empty child slots hold the "none"
/// tag; insertion order is display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub tag: Tag,
    pub kind: NodeKind,
    /// Non-owning back-reference; the sentinel for the root.
    pub parent: Tag,
    pub children: [Tag; MAX_CHILDREN],

    /// Unique id shown as super-text (like `ODV9-B1-C`).
    pub id_string: String,
    /// The name of the node (like "cutting torch" or "storage room").
    pub label: String,
    /// The node's label as an option line, derived from kind and label.
    pub option_label: String,
    /// Title at the top of a scene view (like "Storage Room").
    pub title: String,
    /// Image name for a scene view backdrop; empty means none.
    pub background: String,
    /// Full text shown in a scene view.
    pub prose: String,

    /// If set, the node is hidden until this tag is acquired.
    pub revealed_by: Tag,
    /// If set, the node is locked until this tag is acquired.
    pub unlocked_by: Tag,
    /// If set, the node is hidden once this tag is acquired.
    /// Rehidden overrides revealed.
    pub rehidden_by: Tag,
}

impl Node {
    pub(crate) fn sentinel() -> Self {
        Self::new(Tag::NONE, NodeKind::None, "root of the world tree", "NONE")
    }

    pub(crate) fn new(tag: Tag, kind: NodeKind, label: &str, name: &str) -> Self {
        Self {
            tag,
            kind,
            parent: Tag::NONE,
            children: [Tag::NONE; MAX_CHILDREN],
            id_string: crate::data::tag::display_id(name),
            label: label.to_string(),
            option_label: kind.default_option_label(label),
            title: String::new(),
            background: String::new(),
            prose: String::new(),
            revealed_by: Tag::NONE,
            unlocked_by: Tag::NONE,
            rehidden_by: Tag::NONE,
        }
    }
}
