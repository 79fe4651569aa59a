//! The world graph and its one-time builder
//!
//! Construction is an author-driven build step: declare tags, define one
//! node per tag, wire parent/child edges, fill presentation and gating
//! fields, then call [`WorldBuilder::finish`]. Finishing validates the
//! content and fails loudly on integrity faults; the resulting
//! [`WorldGraph`] is read-only for the rest of the process.

use crate::data::node::{Node, NodeKind, MAX_CHILDREN};
use crate::data::tag::{Tag, TagRegistry};
use crate::EngineError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An immutable, validated world: one node per declared tag, arranged as
/// a tree rooted at the sentinel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldGraph {
    registry: TagRegistry,
    nodes: Vec<Node>,
    start: Tag,
    exits: Vec<Tag>,
}

impl WorldGraph {
    pub fn node(&self, tag: Tag) -> &Node {
        &self.nodes[tag.index()]
    }

    /// The name a tag was declared under.
    pub fn name(&self, tag: Tag) -> &str {
        self.registry.name(tag)
    }

    pub fn lookup(&self, name: &str) -> Option<Tag> {
        self.registry.lookup(name)
    }

    /// The designated start node.
    pub fn start(&self) -> Tag {
        self.start
    }

    /// Whether settling on this node ends the session.
    pub fn is_exit(&self, tag: Tag) -> bool {
        self.exits.contains(&tag)
    }

    /// All tags, sentinel included.
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.registry.tags()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Builder for a [`WorldGraph`].
///
/// Strict mode (the default) enforces the tree invariants; lenient mode is
/// used by the content script loader, where scenes link each other freely
/// and undefined targets become placeholder scenes.
pub struct WorldBuilder {
    registry: TagRegistry,
    nodes: Vec<Option<Node>>,
    /// First node to list each child; later listers are faults in strict
    /// mode and ignored in lenient mode.
    listed_by: HashMap<Tag, Tag>,
    start: Option<Tag>,
    exits: Vec<Tag>,
    lenient: bool,
    faults: Vec<EngineError>,
}

impl WorldBuilder {
    pub fn new() -> Self {
        let registry = TagRegistry::new();
        Self {
            registry,
            nodes: vec![Some(Node::sentinel())],
            listed_by: HashMap::new(),
            start: None,
            exits: Vec::new(),
            lenient: false,
            faults: Vec::new(),
        }
    }

    /// A builder that tolerates free-form linking, for scripted content.
    pub fn lenient() -> Self {
        let mut builder = Self::new();
        builder.lenient = true;
        builder
    }

    /// Declare a tag name, returning its handle. Idempotent.
    pub fn declare(&mut self, name: &str) -> Tag {
        let tag = self.registry.declare(name);
        if tag.index() >= self.nodes.len() {
            self.nodes.push(None);
        }
        tag
    }

    /// Define the node for a declared tag and select it for chaining.
    pub fn define(&mut self, tag: Tag, kind: NodeKind, label: &str) -> NodeEntry<'_> {
        let name = self.registry.name(tag).to_string();
        self.nodes[tag.index()] = Some(Node::new(tag, kind, label, &name));
        NodeEntry { builder: self, tag }
    }

    /// Re-select an already-defined node, e.g. to attach its description
    /// after the links are wired.
    pub fn select(&mut self, tag: Tag) -> NodeEntry<'_> {
        if self.nodes[tag.index()].is_none() {
            self.faults
                .push(EngineError::UndefinedNode(self.registry.name(tag).to_string()));
            let name = self.registry.name(tag).to_string();
            self.nodes[tag.index()] = Some(Node::new(tag, NodeKind::None, &name, &name));
        }
        NodeEntry { builder: self, tag }
    }

    /// Designate the node the player starts on.
    pub fn start(&mut self, tag: Tag) {
        self.start = Some(tag);
    }

    /// Mark a node as a session-ending exit.
    pub fn mark_exit(&mut self, tag: Tag) {
        self.exits.push(tag);
    }

    fn name_of(&self, tag: Tag) -> String {
        self.registry.name(tag).to_string()
    }

    fn record_listing(&mut self, parent: Tag, child: Tag) {
        match self.listed_by.get(&child).copied() {
            None => {
                self.listed_by.insert(child, parent);
                // A child defined later gets its parent applied in finish().
                if let Some(node) = self.nodes[child.index()].as_mut() {
                    node.parent = parent;
                }
            }
            Some(first) if first != parent => {
                if !self.lenient {
                    let fault = EngineError::DuplicateParent {
                        child: self.name_of(child),
                        first: self.name_of(first),
                        second: self.name_of(parent),
                    };
                    self.faults.push(fault);
                }
                // Lenient worlds may reach a scene from many places; the
                // first lister stays the parent.
            }
            Some(_) => {}
        }
    }

    /// Validate and freeze the graph.
    pub fn finish(mut self) -> Result<WorldGraph, EngineError> {
        if let Some(fault) = self.faults.drain(..).next() {
            return Err(fault);
        }

        // Referenced tags must all have nodes. In lenient mode an
        // undefined target becomes a placeholder scene, like the original
        // parser's auto-created entries.
        for index in 0..self.nodes.len() {
            let Some(node) = self.nodes[index].as_ref() else {
                continue;
            };
            let mut referenced: Vec<Tag> = node
                .children
                .iter()
                .copied()
                .filter(|t| !t.is_none())
                .collect();
            for gate in [node.revealed_by, node.unlocked_by, node.rehidden_by] {
                if !gate.is_none() {
                    referenced.push(gate);
                }
            }
            if !node.parent.is_none() {
                referenced.push(node.parent);
            }
            for tag in referenced {
                if self.nodes[tag.index()].is_none() {
                    if self.lenient {
                        let name = self.name_of(tag);
                        let mut placeholder = Node::new(tag, NodeKind::Hall, &name, &name);
                        placeholder.title = name.clone();
                        placeholder.prose = name.clone();
                        placeholder.option_label = name.clone();
                        log::warn!("script references undefined scene '{name}', creating placeholder");
                        self.nodes[tag.index()] = Some(placeholder);
                    } else {
                        return Err(EngineError::UndefinedNode(self.name_of(tag)));
                    }
                }
            }
        }

        let Some(start) = self.start else {
            return Err(EngineError::InvalidStart {
                tag: "(unset)".to_string(),
                kind: NodeKind::None,
            });
        };
        if self.nodes[start.index()].is_none() {
            return Err(EngineError::UndefinedNode(self.name_of(start)));
        }
        for &exit in &self.exits {
            if self.nodes[exit.index()].is_none() {
                return Err(EngineError::UndefinedNode(self.name_of(exit)));
            }
        }

        // Any declared tag without a node at this point was never
        // referenced either; that is still a content fault in strict mode.
        if !self.lenient {
            for index in 0..self.nodes.len() {
                if self.nodes[index].is_none() {
                    return Err(EngineError::UndefinedNode(
                        self.name_of(Tag::from_index(index)),
                    ));
                }
            }
        }

        let taken: Vec<Option<Node>> = std::mem::take(&mut self.nodes);
        let mut nodes: Vec<Node> = Vec::with_capacity(taken.len());
        for (index, slot) in taken.into_iter().enumerate() {
            match slot {
                Some(node) => nodes.push(node),
                // Lenient worlds may leave declared-but-unreferenced tags;
                // give them inert none-kind nodes so the arena stays
                // index-aligned.
                None => {
                    let tag = Tag::from_index(index);
                    let name = self.registry.name(tag).to_string();
                    nodes.push(Node::new(tag, NodeKind::None, &name, &name));
                }
            }
        }

        // Parents recorded before the child was defined.
        for (child, parent) in &self.listed_by {
            if nodes[child.index()].parent.is_none() {
                nodes[child.index()].parent = *parent;
            }
        }

        // Once a player has an Item or Flag's tag, the node disappears
        // from view: it cannot be picked up twice.
        for node in nodes.iter_mut() {
            if node.kind.is_pickup() && node.rehidden_by.is_none() {
                node.rehidden_by = node.tag;
            }
        }

        if !self.lenient {
            // Tree shape: every non-root node is listed exactly once, and
            // parent chains terminate at the root.
            for node in nodes.iter() {
                if node.tag.is_none() {
                    continue;
                }
                if !self.listed_by.contains_key(&node.tag) {
                    return Err(EngineError::UnlistedNode(
                        self.registry.name(node.tag).to_string(),
                    ));
                }
                let mut cursor = node.parent;
                let mut steps = 0usize;
                while !cursor.is_none() {
                    cursor = nodes[cursor.index()].parent;
                    steps += 1;
                    if steps > nodes.len() {
                        return Err(EngineError::ParentCycle(
                            self.registry.name(node.tag).to_string(),
                        ));
                    }
                }
            }
        }

        let start_kind = nodes[start.index()].kind;
        if !start_kind.is_projectable() {
            return Err(EngineError::InvalidStart {
                tag: self.registry.name(start).to_string(),
                kind: start_kind,
            });
        }

        Ok(WorldGraph {
            registry: self.registry,
            nodes,
            start,
            exits: self.exits,
        })
    }
}

impl Default for WorldBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A selected node under construction; methods chain.
pub struct NodeEntry<'a> {
    builder: &'a mut WorldBuilder,
    tag: Tag,
}

impl<'a> NodeEntry<'a> {
    fn node_mut(&mut self) -> &mut Node {
        self.builder.nodes[self.tag.index()]
            .as_mut()
            .expect("entry always targets a defined node")
    }

    /// Title, backdrop image name, and scene prose.
    pub fn describe(mut self, title: &str, background: &str, prose: &str) -> Self {
        let node = self.node_mut();
        node.title = title.to_string();
        node.background = background.to_string();
        node.prose = prose.to_string();
        self
    }

    /// Replace the kind-derived option line with a custom one.
    pub fn option_label(mut self, label: &str) -> Self {
        self.node_mut().option_label = label.to_string();
        self
    }

    /// Fill the child slots in display order. Pass `Tag::NONE` to leave a
    /// gap; gaps are filled first by later [`NodeEntry::child_of`] calls.
    pub fn children(mut self, children: &[Tag]) -> Self {
        if children.len() > MAX_CHILDREN {
            let overflow = children[MAX_CHILDREN];
            let fault = EngineError::ChildOverflow {
                parent: self.builder.name_of(self.tag),
                child: self.builder.name_of(overflow),
            };
            self.builder.faults.push(fault);
        }
        for (slot, &child) in children.iter().take(MAX_CHILDREN).enumerate() {
            self.node_mut().children[slot] = child;
            if !child.is_none() {
                let parent = self.tag;
                self.builder.record_listing(parent, child);
            }
        }
        self
    }

    /// Append this node to the first free child slot of `parent`.
    pub fn child_of(self, parent: Tag) -> Self {
        let child = self.tag;
        let free_slot = match self.builder.nodes[parent.index()].as_ref() {
            Some(parent_node) => parent_node.children.iter().position(|slot| slot.is_none()),
            None => {
                let fault = EngineError::UndefinedNode(self.builder.name_of(parent));
                self.builder.faults.push(fault);
                return self;
            }
        };
        match free_slot {
            Some(slot) => {
                if let Some(parent_node) = self.builder.nodes[parent.index()].as_mut() {
                    parent_node.children[slot] = child;
                }
                self.builder.record_listing(parent, child);
            }
            None => {
                let fault = EngineError::ChildOverflow {
                    parent: self.builder.name_of(parent),
                    child: self.builder.name_of(child),
                };
                self.builder.faults.push(fault);
            }
        }
        self
    }

    /// Override the parent back-reference. Used where a scene's return
    /// path differs from the node that lists it (the intro scene exits
    /// into the world, not back into the menu that listed it).
    pub fn parent(mut self, parent: Tag) -> Self {
        self.node_mut().parent = parent;
        self
    }

    pub fn revealed_by(mut self, key: Tag) -> Self {
        self.node_mut().revealed_by = key;
        self
    }

    pub fn unlocked_by(mut self, key: Tag) -> Self {
        self.node_mut().unlocked_by = key;
        self
    }

    pub fn rehidden_by(mut self, key: Tag) -> Self {
        self.node_mut().rehidden_by = key;
        self
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }
}
