//! Node to scene conversion
//!
//! A [`Scene`] is the transient, renderable view of a node: title, prose,
//! backdrop, and up to six numbered options. It is rebuilt from scratch on
//! every navigation and never persisted.

use crate::data::{NodeKind, PlayerState, Tag, WorldGraph, MAX_OPTIONS};
use crate::game::visibility::{is_hidden, is_locked};
use crate::EngineError;
use serde::{Deserialize, Serialize};

/// One selectable row. A row with no target renders dimmed and inert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneOption {
    pub label: String,
    pub target: Option<Tag>,
}

impl SceneOption {
    fn placeholder(slot: usize) -> Self {
        Self {
            label: format!("{}) ...", slot + 1),
            target: None,
        }
    }
}

/// A projected view of the player's current node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Tiny text at the top: the node's id string.
    pub super_text: String,
    /// Large text near the top.
    pub title: String,
    /// The main body of text.
    pub prose: String,
    /// Backdrop image name, if any; inspection views keep the backdrop of
    /// the location beneath them.
    pub background: Option<String>,
    /// The options displayed at the bottom.
    pub options: Vec<SceneOption>,
    /// Index of the option the player's cursor is on.
    pub cursor: usize,
}

impl Scene {
    /// The blank scene shown before the first navigation settles.
    pub fn empty() -> Self {
        Self {
            super_text: String::new(),
            title: String::new(),
            prose: String::new(),
            background: None,
            options: (0..MAX_OPTIONS).map(SceneOption::placeholder).collect(),
            cursor: 0,
        }
    }
}

/// Build the scene for `tag`.
///
/// `inherited_background` is the backdrop already on screen; Prop, Case,
/// and Lock views render over it, while Hall and Room views resolve their
/// own. Item, Flag, and sentinel nodes have no scene; asking for one is a
/// programmer error (the navigation rules make it unreachable) and is
/// rejected rather than rendered as garbage.
pub fn project(
    world: &WorldGraph,
    player: &PlayerState,
    tag: Tag,
    inherited_background: Option<String>,
) -> Result<Scene, EngineError> {
    let node = world.node(tag);
    if !node.kind.is_projectable() {
        return Err(EngineError::Unprojectable {
            tag: world.name(tag).to_string(),
            kind: node.kind,
        });
    }

    let mut options: Vec<SceneOption> =
        (0..MAX_OPTIONS).map(SceneOption::placeholder).collect();

    // Hidden children are invisible, not merely disabled: they do not
    // consume a slot, and the survivors are numbered by display position.
    let mut slot = 0usize;
    for &child_tag in &node.children {
        if is_hidden(world, player, child_tag) {
            continue;
        }
        let child = world.node(child_tag);
        options[slot].label = format!("{}) {}", slot + 1, child.option_label);
        if !is_locked(world, player, child_tag) {
            options[slot].target = Some(child_tag);
        }
        slot += 1;
    }

    // The final slot is reserved by kind. Halls have no return concept;
    // a Room exits to its parent, and inspection views back out of it.
    match node.kind {
        NodeKind::Room => {
            options[MAX_OPTIONS - 1] = return_option(world, player, node.parent, "Exit this room.");
        }
        NodeKind::Prop | NodeKind::Case | NodeKind::Lock => {
            options[MAX_OPTIONS - 1] = return_option(world, player, node.parent, "Return.");
        }
        _ => {}
    }

    let background = match node.kind {
        NodeKind::Hall | NodeKind::Room => {
            if node.background.is_empty() {
                None
            } else {
                Some(node.background.clone())
            }
        }
        _ => inherited_background,
    };

    let cursor = if node.kind.is_inspection() {
        MAX_OPTIONS - 1
    } else {
        0
    };

    Ok(Scene {
        super_text: node.id_string.clone(),
        title: node.title.clone(),
        prose: node.prose.clone(),
        background,
        options,
        cursor,
    })
}

/// The forced return row. It is gated like any other option: a hidden or
/// locked parent leaves it visible but inert.
fn return_option(
    world: &WorldGraph,
    player: &PlayerState,
    parent: Tag,
    label: &str,
) -> SceneOption {
    let target = (!is_hidden(world, player, parent) && !is_locked(world, player, parent))
        .then_some(parent);
    SceneOption {
        label: format!("{}) {label}", MAX_OPTIONS),
        target,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::WorldBuilder;

    /// A room with five prop children, the first and third gated behind a
    /// never-acquired reveal tag.
    fn compaction_world() -> (WorldGraph, Tag, Vec<Tag>) {
        let mut b = WorldBuilder::new();
        let room = b.declare("ROOM");
        let hall = b.declare("HALL");
        let ghost = b.declare("ITEM_GHOST_KEY");
        let props: Vec<Tag> = (0..5).map(|i| b.declare(&format!("PROP_{i}"))).collect();
        b.define(hall, NodeKind::Hall, "hall").children(&[room, ghost]);
        b.define(room, NodeKind::Room, "room")
            .describe("The Room", "", "Five things are here.")
            .children(&props);
        for (i, &prop) in props.iter().enumerate() {
            let entry = b.define(prop, NodeKind::Prop, &format!("prop {i}"));
            if i == 0 || i == 2 {
                entry.revealed_by(ghost);
            }
        }
        b.define(ghost, NodeKind::Item, "ghost key");
        b.select(Tag::NONE).children(&[hall]);
        b.start(hall);
        (b.finish().unwrap(), room, props)
    }

    #[test]
    fn hidden_children_are_compacted() {
        let (world, room, props) = compaction_world();
        let player = PlayerState::new(world.start());
        let scene = project(&world, &player, room, None).unwrap();

        // Children 0 and 2 are hidden; 1, 3, 4 land in slots 0, 1, 2.
        assert_eq!(scene.options[0].target, Some(props[1]));
        assert_eq!(scene.options[1].target, Some(props[3]));
        assert_eq!(scene.options[2].target, Some(props[4]));
        assert_eq!(scene.options[3].target, None);
        assert_eq!(scene.options[4].target, None);

        // Numbered by display position, not raw child index.
        assert_eq!(scene.options[0].label, "1) Look at prop 1.");
        assert_eq!(scene.options[1].label, "2) Look at prop 3.");
        assert_eq!(scene.options[3].label, "4) ...");
    }

    #[test]
    fn room_exit_overwrites_a_full_fifth_slot() {
        let (world, room, props) = compaction_world();
        let hall = world.start();
        let mut player = PlayerState::new(hall);
        // Reveal everything so all five children are visible.
        let ghost = world.lookup("ITEM_GHOST_KEY").unwrap();
        player.acquire(ghost);
        // The ghost key's own rehide hides it from the hall, but the
        // props it revealed stay visible.
        let scene = project(&world, &player, room, None).unwrap();
        assert_eq!(scene.options[4].target, Some(props[4]));
        assert_eq!(scene.options[5].label, "6) Exit this room.");
        assert_eq!(scene.options[5].target, Some(hall));
    }

    #[test]
    fn locked_children_render_without_a_target() {
        let mut b = WorldBuilder::new();
        let room = b.declare("ROOM");
        let door = b.declare("LOCK_DOOR");
        let key = b.declare("ITEM_KEY");
        b.define(room, NodeKind::Room, "room").children(&[door, key]);
        b.define(door, NodeKind::Lock, "heavy door").unlocked_by(key);
        b.define(key, NodeKind::Item, "key");
        b.select(Tag::NONE).children(&[room]);
        b.start(room);
        let world = b.finish().unwrap();

        let player = PlayerState::new(world.start());
        let scene = project(&world, &player, room, None).unwrap();
        assert_eq!(scene.options[0].label, "1) Inspect the heavy door.");
        assert_eq!(scene.options[0].target, None);
        assert_eq!(scene.options[1].target, Some(key));
    }

    #[test]
    fn prop_scenes_cursor_on_the_return_slot() {
        let (world, room, props) = compaction_world();
        let player = PlayerState::new(world.start());
        let scene = project(&world, &player, props[1], None).unwrap();
        assert_eq!(scene.cursor, 5);
        assert_eq!(scene.options[5].label, "6) Return.");
        assert_eq!(scene.options[5].target, Some(room));

        let room_scene = project(&world, &player, room, None).unwrap();
        assert_eq!(room_scene.cursor, 0);
    }

    #[test]
    fn halls_reserve_no_return_slot() {
        let (world, _, _) = compaction_world();
        let player = PlayerState::new(world.start());
        let scene = project(&world, &player, world.start(), None).unwrap();
        assert_eq!(scene.options[5].label, "6) ...");
        assert_eq!(scene.options[5].target, None);
    }

    #[test]
    fn inspection_views_inherit_the_backdrop() {
        let mut b = WorldBuilder::new();
        let room = b.declare("ROOM");
        let prop = b.declare("PROP");
        b.define(room, NodeKind::Room, "room")
            .describe("Room", "room.png", "A room.")
            .children(&[prop]);
        b.define(prop, NodeKind::Prop, "prop");
        b.select(Tag::NONE).children(&[room]);
        b.start(room);
        let world = b.finish().unwrap();

        let player = PlayerState::new(world.start());
        let room_scene = project(&world, &player, room, None).unwrap();
        assert_eq!(room_scene.background.as_deref(), Some("room.png"));

        let prop_scene =
            project(&world, &player, prop, room_scene.background.clone()).unwrap();
        assert_eq!(prop_scene.background.as_deref(), Some("room.png"));
    }

    #[test]
    fn items_and_the_sentinel_cannot_be_projected() {
        let (world, _, _) = compaction_world();
        let player = PlayerState::new(world.start());
        let ghost = world.lookup("ITEM_GHOST_KEY").unwrap();
        assert!(matches!(
            project(&world, &player, ghost, None),
            Err(EngineError::Unprojectable { .. })
        ));
        assert!(matches!(
            project(&world, &player, Tag::NONE, None),
            Err(EngineError::Unprojectable { .. })
        ));
    }
}
