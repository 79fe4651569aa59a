//! Visibility and lock predicates
//!
//! Pure functions over a node and the player's acquired tags. Hiding and
//! locking are independent: a locked node still shows up in the option
//! list (with no target), a hidden node never appears at all.

use crate::data::{PlayerState, Tag, WorldGraph};

/// A node is hidden when it is the unused sentinel, when its reveal gate
/// has not been satisfied, or when its rehide gate has. The rehide check
/// is independent of the reveal check; if both fire, rehide wins.
pub fn is_hidden(world: &WorldGraph, player: &PlayerState, tag: Tag) -> bool {
    let node = world.node(tag);
    node.kind == crate::data::NodeKind::None
        || (!node.revealed_by.is_none() && !player.has(node.revealed_by))
        || (!node.rehidden_by.is_none() && player.has(node.rehidden_by))
}

/// A node is locked until its unlock gate is satisfied. Locked nodes stay
/// visible; their option just has no navigation target.
pub fn is_locked(world: &WorldGraph, player: &PlayerState, tag: Tag) -> bool {
    let node = world.node(tag);
    !node.unlocked_by.is_none() && !player.has(node.unlocked_by)
}

/// True when every child slot is empty or hidden. Drives the Case/Lock
/// auto-collapse rule: an empty container is never shown.
pub fn all_children_hidden(world: &WorldGraph, player: &PlayerState, tag: Tag) -> bool {
    world
        .node(tag)
        .children
        .iter()
        .all(|&child| is_hidden(world, player, child))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{NodeKind, WorldBuilder};

    /// A room holding one gated prop and one item, with a spare key tag.
    fn gated_world(
        revealed_by_key: bool,
        rehidden_by_key: bool,
    ) -> (WorldGraph, Tag, Tag) {
        let mut b = WorldBuilder::new();
        let room = b.declare("ROOM");
        let prop = b.declare("PROP");
        let item = b.declare("ITEM_KEY");
        b.define(room, NodeKind::Room, "room").children(&[prop, item]);
        let mut entry = b.define(prop, NodeKind::Prop, "prop");
        if revealed_by_key {
            entry = entry.revealed_by(item);
        }
        if rehidden_by_key {
            entry = entry.rehidden_by(item);
        }
        drop(entry);
        b.define(item, NodeKind::Item, "key");
        b.select(Tag::NONE).children(&[room]);
        b.start(room);
        (b.finish().unwrap(), prop, item)
    }

    #[test]
    fn unrevealed_nodes_are_hidden() {
        let (world, prop, item) = gated_world(true, false);
        let mut player = PlayerState::new(world.start());
        assert!(is_hidden(&world, &player, prop));
        player.acquire(item);
        assert!(!is_hidden(&world, &player, prop));
    }

    #[test]
    fn rehide_wins_over_reveal_on_the_same_tag() {
        let (world, prop, item) = gated_world(true, true);
        let mut player = PlayerState::new(world.start());
        // Unrevealed: hidden.
        assert!(is_hidden(&world, &player, prop));
        // Revealed and rehidden by the same acquired tag: still hidden.
        player.acquire(item);
        assert!(is_hidden(&world, &player, prop));
    }

    #[test]
    fn locking_is_independent_of_hiding() {
        let mut b = WorldBuilder::new();
        let room = b.declare("ROOM");
        let door = b.declare("LOCK_DOOR");
        let key = b.declare("ITEM_KEY");
        b.define(room, NodeKind::Room, "room").children(&[door, key]);
        b.define(door, NodeKind::Lock, "door").unlocked_by(key);
        b.define(key, NodeKind::Item, "key");
        b.select(Tag::NONE).children(&[room]);
        b.start(room);
        let world = b.finish().unwrap();

        let mut player = PlayerState::new(world.start());
        assert!(is_locked(&world, &player, door));
        assert!(!is_hidden(&world, &player, door));
        player.acquire(key);
        assert!(!is_locked(&world, &player, door));
    }

    #[test]
    fn the_sentinel_is_always_hidden() {
        let (world, _, _) = gated_world(false, false);
        let player = PlayerState::new(world.start());
        assert!(is_hidden(&world, &player, Tag::NONE));
    }

    #[test]
    fn empty_slots_count_as_hidden_children() {
        let (world, _prop, item) = gated_world(false, false);
        let room = world.start();
        let mut player = PlayerState::new(room);
        assert!(!all_children_hidden(&world, &player, room));
        // Taking the item rehides it, but the prop keeps the room populated.
        player.acquire(item);
        assert!(!all_children_hidden(&world, &player, room));
        // A node with no children at all is trivially exhausted.
        assert!(all_children_hidden(&world, &player, item));
    }
}
