//! Outpost DV9 - a gated-node interactive fiction engine
//!
//! A single player explores a fixed, author-defined tree of locations,
//! objects, and abstract flags. Visibility and lock gating are driven by
//! the tags the player has acquired; picking things up reveals, unlocks,
//! or re-hides other parts of the world.
//!
//! # Architecture
//!
//! - `data` - the immutable world model: tags, nodes, the graph builder,
//!   player state, and the line-oriented content script loader
//! - `game` - the engine: gating predicates, scene projection, and the
//!   navigation state machine
//! - `tui` - terminal presentation with ratatui

pub mod data;
pub mod game;
pub mod tui;

pub use data::{Node, NodeKind, PlayerState, Tag, WorldBuilder, WorldGraph};
pub use game::{Game, GameEvent, Scene};

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for app-level code
pub type Result<T> = anyhow::Result<T>;

/// Engine error types
///
/// Content-integrity faults are raised by `WorldBuilder::finish` and abort
/// startup; projection misuse is a programmer error that the navigation
/// rules make unreachable in normal play.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error("node '{0}' is referenced but never defined")]
    UndefinedNode(String),

    #[error("node '{child}' is listed as a child of both '{first}' and '{second}'")]
    DuplicateParent {
        child: String,
        first: String,
        second: String,
    },

    #[error("node '{0}' is defined but no parent lists it as a child")]
    UnlistedNode(String),

    #[error("node '{parent}' has no free child slot for '{child}'")]
    ChildOverflow { parent: String, child: String },

    #[error("parent chain from node '{0}' never reaches the root")]
    ParentCycle(String),

    #[error("start node '{tag}' has kind {kind:?} and cannot be shown as a scene")]
    InvalidStart { tag: String, kind: NodeKind },

    #[error("cannot project a scene from {kind:?} node '{tag}'")]
    Unprojectable { tag: String, kind: NodeKind },

    #[error("script line {line}: {message}")]
    Script { line: usize, message: String },

    #[error("failed to read content script: {0}")]
    ScriptIo(#[from] std::io::Error),
}
