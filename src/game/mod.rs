//! Core engine: navigation state machine and the game session
//!
//! [`advance`] is the transition function for play: pickups
//! bounce the player back to the container, exhausted containers
//! auto-collapse, and everything else just moves the player. [`Game`]
//! wraps a world, a player, and the current projected scene, translating
//! discrete input events into transitions.

pub mod outpost;
pub mod scene;
pub mod visibility;

pub use scene::{Scene, SceneOption};

use crate::data::{NodeKind, PlayerState, Tag, WorldGraph, MAX_OPTIONS};

/// Discrete, edge-triggered input events, already debounced by the input
/// provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    CursorUp,
    CursorDown,
    Confirm,
    Quit,
}

/// The navigation transition function.
///
/// Given a chosen option's target, applies the pickup and auto-collapse
/// rules and returns the node the player settled on. The settled node is
/// always projectable in validated content: pickups re-target their
/// parent, and exhausted Case/Lock views redirect to theirs. Both loops
/// walk parent chains, which construction-time validation keeps acyclic.
pub fn advance(world: &WorldGraph, player: &mut PlayerState, target: Tag) -> Tag {
    let mut target = target;

    // Picking up an item acquires its tag and puts the player right back
    // where the item was found; the rehide default makes the option
    // vanish from the next projection.
    loop {
        let node = world.node(target);
        if node.kind.is_pickup() {
            if player.acquire(target) {
                log::debug!("picked up {}", world.name(target));
            }
            target = node.parent;
        } else {
            break;
        }
    }
    player.current = target;

    // Never show an emptied-out search or lock view.
    loop {
        let node = world.node(player.current);
        if matches!(node.kind, NodeKind::Case | NodeKind::Lock)
            && visibility::all_children_hidden(world, player, player.current)
        {
            log::debug!("auto-collapse past {}", world.name(player.current));
            player.current = node.parent;
        } else {
            break;
        }
    }

    player.current
}

/// A single play session: one world, one player, one projected scene.
pub struct Game {
    world: WorldGraph,
    player: PlayerState,
    scene: Scene,
    over: bool,
}

impl Game {
    /// Start a session on the world's designated start node. Validation
    /// guarantees the start is projectable, so this cannot fail.
    pub fn new(world: WorldGraph) -> Self {
        let start = world.start();
        let mut game = Self {
            player: PlayerState::new(start),
            scene: Scene::empty(),
            over: false,
            world,
        };
        game.navigate(start);
        game
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn world(&self) -> &WorldGraph {
        &self.world
    }

    /// Whether the session has ended (quit requested or an exit node
    /// reached).
    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn handle_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::CursorUp => self.move_cursor(-1),
            GameEvent::CursorDown => self.move_cursor(1),
            GameEvent::Confirm => self.confirm(),
            GameEvent::Quit => self.over = true,
        }
    }

    /// Cursor motion cycles through all six slots with wraparound; it
    /// never changes the player's position by itself.
    fn move_cursor(&mut self, delta: isize) {
        let slots = MAX_OPTIONS as isize;
        let cursor = self.scene.cursor as isize + delta;
        self.scene.cursor = cursor.rem_euclid(slots) as usize;
    }

    /// Confirm the selected option. Slots without a target are inert.
    fn confirm(&mut self) {
        if let Some(target) = self.scene.options[self.scene.cursor].target {
            self.navigate(target);
        }
    }

    fn navigate(&mut self, target: Tag) {
        let settled = advance(&self.world, &mut self.player, target);
        if self.world.is_exit(settled) {
            self.over = true;
            return;
        }
        self.reproject(settled);
    }

    /// Project the settled node. A projection fault means broken content
    /// slipped past validation; rather than strand the player on an
    /// unrenderable scene, retreat up the parent chain to the nearest
    /// stable node.
    fn reproject(&mut self, mut tag: Tag) {
        let mut steps = 0usize;
        loop {
            match scene::project(&self.world, &self.player, tag, self.scene.background.clone()) {
                Ok(scene) => {
                    self.player.current = tag;
                    self.scene = scene;
                    return;
                }
                Err(fault) => {
                    log::error!("projection failed, retreating to parent: {fault}");
                    let parent = self.world.node(tag).parent;
                    steps += 1;
                    if parent == tag || steps > self.world.node_count() {
                        // Nowhere left to retreat; keep the last scene.
                        return;
                    }
                    tag = parent;
                }
            }
        }
    }
}
