//! Data structures for the world model
//!
//! Defines tags, nodes, the world graph and its builder, player state,
//! and the content script loader. Everything here is built once at
//! startup and read-only afterwards; only [`PlayerState`] mutates during
//! play, and only inside the navigation state machine.

pub mod graph;
pub mod node;
pub mod player;
pub mod script;
pub mod tag;

pub use graph::{WorldBuilder, WorldGraph};
pub use node::{Node, NodeKind, MAX_CHILDREN, MAX_OPTIONS};
pub use player::PlayerState;
pub use script::{load_script, parse_script};
pub use tag::{Tag, TagRegistry};
