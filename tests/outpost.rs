//! End-to-end tests over the shipped world, driven through the same
//! event interface the terminal frontend uses.

use outpost_dv9::game::outpost::outpost_world;
use outpost_dv9::{Game, GameEvent, Tag};
use std::collections::HashMap;

/// Move the cursor to the live option targeting `name` and confirm it.
fn choose(game: &mut Game, name: &str) {
    let tag = game
        .world()
        .lookup(name)
        .unwrap_or_else(|| panic!("unknown tag {name}"));
    let slot = game
        .scene()
        .options
        .iter()
        .position(|o| o.target == Some(tag))
        .unwrap_or_else(|| {
            panic!(
                "no live option targeting {name} in scene {}",
                game.scene().super_text
            )
        });
    while game.scene().cursor != slot {
        game.handle_event(GameEvent::CursorDown);
    }
    game.handle_event(GameEvent::Confirm);
}

fn assert_scene(game: &Game, super_text: &str) {
    assert_eq!(game.scene().super_text, super_text);
}

#[test]
fn every_node_is_listed_exactly_once() {
    let world = outpost_world().unwrap();
    let mut listings: HashMap<Tag, usize> = HashMap::new();
    for parent in world.tags() {
        for &child in &world.node(parent).children {
            if !child.is_none() {
                *listings.entry(child).or_default() += 1;
            }
        }
    }
    for tag in world.tags() {
        if tag.is_none() {
            continue;
        }
        assert_eq!(
            listings.get(&tag).copied().unwrap_or(0),
            1,
            "{} should have exactly one lister",
            world.name(tag)
        );
    }
}

#[test]
fn the_menu_offers_start_and_exit() {
    let world = outpost_world().unwrap();
    let game = Game::new(world);
    assert_scene(&game, "MAIN-MENU");
    assert_eq!(game.scene().options[0].label, "1) [START GAME]");
    assert_eq!(game.scene().options[1].label, "2) [EXIT GAME]");
    // A hall reserves nothing: the last slot stays a placeholder.
    assert_eq!(game.scene().options[5].label, "6) ...");
    assert_eq!(game.scene().cursor, 0);
}

#[test]
fn exiting_from_the_menu_ends_the_session() {
    let world = outpost_world().unwrap();
    let mut game = Game::new(world);
    choose(&mut game, "GAME_EXIT");
    assert!(game.is_over());
}

#[test]
fn the_intro_leads_into_the_cryo_vault() {
    let world = outpost_world().unwrap();
    let mut game = Game::new(world);
    choose(&mut game, "NEW_GAME");
    assert_scene(&game, "NEW-GAME");
    assert_eq!(game.scene().title, "Somewhere Very Cold");
    // The intro is a room whose exit leads into the world.
    assert_eq!(game.scene().options[5].label, "6) Exit this room.");
    choose(&mut game, "ODV9_B1_C");
    assert_scene(&game, "ODV9-B1-C");
}

#[test]
fn the_basement_exit_is_inert_until_the_door_is_cut() {
    let world = outpost_world().unwrap();
    let mut game = Game::new(world);
    choose(&mut game, "NEW_GAME");
    choose(&mut game, "ODV9_B1_C");
    choose(&mut game, "ODV9_B1");

    // Three rooms and the welded door, compacted into the top slots.
    assert_eq!(game.scene().options[3].label, "4) Inspect the 'EXIT' door.");
    assert_eq!(game.scene().options[5].label, "6) Exit this room.");
    assert!(game.scene().options[5].target.is_none());

    // The cut option is visible on the door but locked without the torch.
    choose(&mut game, "LOCK_B1_TO_S1_WELDED");
    assert_eq!(game.scene().options[0].label, "1) Cut the welded seam.");
    assert!(game.scene().options[0].target.is_none());
    assert_eq!(game.scene().cursor, 5);
}

#[test]
fn taking_the_torch_collapses_the_tool_box() {
    let world = outpost_world().unwrap();
    let mut game = Game::new(world);
    choose(&mut game, "NEW_GAME");
    choose(&mut game, "ODV9_B1_C");
    choose(&mut game, "ODV9_B1");
    choose(&mut game, "ODV9_B1_B");
    choose(&mut game, "CASE_B1_B_TOOL_BOX");
    choose(&mut game, "ITEM_B1_B_CUTTING_TORCH");

    // The emptied, rehidden box never shows again; the player is dropped
    // straight back into the reactor room without it.
    assert_scene(&game, "ODV9-B1-B");
    let torch = game.world().lookup("ITEM_B1_B_CUTTING_TORCH").unwrap();
    assert!(game.player().has(torch));
    let case = game.world().lookup("CASE_B1_B_TOOL_BOX").unwrap();
    assert!(game
        .scene()
        .options
        .iter()
        .all(|o| o.target != Some(case)));
}

#[test]
fn escape_walkthrough() {
    let world = outpost_world().unwrap();
    let mut game = Game::new(world);

    choose(&mut game, "NEW_GAME");
    choose(&mut game, "ODV9_B1_C");
    choose(&mut game, "ODV9_B1");

    // Fetch the cutting torch and open the stairwell door.
    choose(&mut game, "ODV9_B1_B");
    choose(&mut game, "CASE_B1_B_TOOL_BOX");
    choose(&mut game, "ITEM_B1_B_CUTTING_TORCH");
    choose(&mut game, "ODV9_B1");
    choose(&mut game, "LOCK_B1_TO_S1_WELDED");
    choose(&mut game, "FLAG_B1_TO_S1_IS_CUT");
    // The cut rehides the door view and unlocks the exit.
    assert_scene(&game, "ODV9-B1");
    let s1 = game.world().lookup("ODV9_S1").unwrap();
    assert_eq!(game.scene().options[5].target, Some(s1));
    choose(&mut game, "ODV9_S1");

    // The command deck is card-locked from the stairwell.
    let f2 = game.world().lookup("ODV9_F2").unwrap();
    assert!(game.scene().options.iter().all(|o| o.target != Some(f2)));

    // The ID card is in the crew lockers on the ground floor.
    choose(&mut game, "ODV9_F1");
    choose(&mut game, "ODV9_F1_B");
    choose(&mut game, "CASE_F1_B_LOCKER");
    choose(&mut game, "ITEM_F1_B_ID_CARD");
    choose(&mut game, "ODV9_F1");
    choose(&mut game, "ODV9_S1");
    choose(&mut game, "LOCK_S1_TO_F2_CARDLOCK");
    choose(&mut game, "FLAG_S1_TO_F2_UNLOCKED");
    assert_scene(&game, "ODV9-S1");

    // The prybar is jammed into the smashed comms console upstairs.
    choose(&mut game, "ODV9_F2");
    choose(&mut game, "ODV9_F2_A");
    choose(&mut game, "CASE_F2_A_CONSOLE");
    choose(&mut game, "ITEM_F2_A_PRYBAR");

    // Pry open the storage crate and suit up.
    choose(&mut game, "ODV9_F2");
    choose(&mut game, "ODV9_S1");
    choose(&mut game, "ODV9_B1");
    choose(&mut game, "ODV9_B1_A");
    choose(&mut game, "LOCK_B1_A_CRATE_SEALED");
    choose(&mut game, "FLAG_B1_A_CRATE_UNSEALED");
    choose(&mut game, "CASE_B1_A_CRATE");
    choose(&mut game, "ITEM_B1_A_SUIT");
    assert_scene(&game, "ODV9-B1-A");

    // With the suit on, the frozen door becomes the maintenance bay.
    choose(&mut game, "ODV9_B1");
    choose(&mut game, "ODV9_S1");
    choose(&mut game, "ODV9_F1");
    let frozen = game.world().lookup("LOCK_F1_C_TOO_COLD").unwrap();
    assert!(game
        .scene()
        .options
        .iter()
        .all(|o| o.target != Some(frozen)));
    choose(&mut game, "ODV9_F1_C");
    choose(&mut game, "CASE_F1_C_FUEL_CELL_RACK");
    choose(&mut game, "ITEM_F1_C_FUEL_CELL");

    // Refuel the reactor; the control panel needs the auth module.
    choose(&mut game, "ODV9_F1");
    choose(&mut game, "ODV9_S1");
    choose(&mut game, "ODV9_B1");
    choose(&mut game, "ODV9_B1_B");
    choose(&mut game, "LOCK_B1_B_REACTOR_NO_FUEL");
    choose(&mut game, "FLAG_B1_B_REACTOR_REFUELED");
    assert_scene(&game, "ODV9-B1-B");

    // The auth module hides in a desk drawer in the computer core.
    choose(&mut game, "ODV9_B1");
    choose(&mut game, "ODV9_S1");
    choose(&mut game, "ODV9_F2");
    choose(&mut game, "ODV9_F2_C");
    choose(&mut game, "CASE_F2_C_DESK_DRAWER");
    choose(&mut game, "ITEM_F2_C_AUTH_MODULE");

    // Bring the reactor online.
    choose(&mut game, "ODV9_F2");
    choose(&mut game, "ODV9_S1");
    choose(&mut game, "ODV9_B1");
    choose(&mut game, "ODV9_B1_B");
    choose(&mut game, "LOCK_B1_B_REACTOR_OFFLINE");
    choose(&mut game, "FLAG_B1_B_REACTOR_ONLINE");

    // Reboot the server, then pull the nav data backup.
    choose(&mut game, "ODV9_B1");
    choose(&mut game, "ODV9_S1");
    choose(&mut game, "ODV9_F2");
    choose(&mut game, "ODV9_F2_C");
    choose(&mut game, "LOCK_F2_C_SERVER_OFFLINE");
    choose(&mut game, "FLAG_F2_C_SERVER_ONLINE");
    choose(&mut game, "ODV9_F2");
    choose(&mut game, "ODV9_F2_B");
    choose(&mut game, "CASE_F2_B_CONSOLE");
    choose(&mut game, "ITEM_F2_B_NAV_DATA");

    // Upload the route and drive away.
    choose(&mut game, "ODV9_F2");
    choose(&mut game, "ODV9_S1");
    choose(&mut game, "ODV9_F1");
    choose(&mut game, "ODV9_F1_C");
    choose(&mut game, "LOCK_F1_C_NO_NAV_DATA");
    choose(&mut game, "FLAG_F1_C_NAV_DATA_UPLOAD");
    assert_scene(&game, "ODV9-F1-C");
    choose(&mut game, "ODV9_ESCAPE_THE_OUTPOST");
    assert_eq!(game.scene().title, "Game Over: Escaped the Outpost");

    // The ending offers a way back; taking the crawler ends the session.
    assert!(!game.is_over());
    choose(&mut game, "GAME_DEPART");
    assert!(game.is_over());
}
