//! Built-in content: Outpost DV9
//!
//! A small survival mystery. The player wakes from cryostasis in the
//! basement of an abandoned arctic outpost and works through a chain of
//! gated discoveries to escape: cut the welded stairwell door, suit up
//! for the frozen maintenance bay, refuel and restart the reactor, boot
//! the computer core, and upload navigation data to the crawler.

use crate::data::{NodeKind, Tag, WorldBuilder, WorldGraph};
use crate::EngineError;

/// Build the shipped world. Only a code change can make this fail
/// validation, so callers treat an error here as fatal.
pub fn outpost_world() -> Result<WorldGraph, EngineError> {
    let mut b = WorldBuilder::new();

    let main_menu = b.declare("MAIN_MENU");
    let game_exit = b.declare("GAME_EXIT");
    let game_depart = b.declare("GAME_DEPART");
    let new_game = b.declare("NEW_GAME");

    let s1 = b.declare("ODV9_S1");
    let b1 = b.declare("ODV9_B1");
    let b1_a = b.declare("ODV9_B1_A");
    let b1_b = b.declare("ODV9_B1_B");
    let b1_c = b.declare("ODV9_B1_C");
    let f1 = b.declare("ODV9_F1");
    let f1_a = b.declare("ODV9_F1_A");
    let f1_b = b.declare("ODV9_F1_B");
    let f1_c = b.declare("ODV9_F1_C");
    let f2 = b.declare("ODV9_F2");
    let f2_a = b.declare("ODV9_F2_A");
    let f2_b = b.declare("ODV9_F2_B");
    let f2_c = b.declare("ODV9_F2_C");

    let lock_welded = b.declare("LOCK_B1_TO_S1_WELDED");
    let case_tool_box = b.declare("CASE_B1_B_TOOL_BOX");
    let item_cutting_torch = b.declare("ITEM_B1_B_CUTTING_TORCH");
    let flag_door_cut = b.declare("FLAG_B1_TO_S1_IS_CUT");

    let lock_cardlock = b.declare("LOCK_S1_TO_F2_CARDLOCK");
    let case_locker = b.declare("CASE_F1_B_LOCKER");
    let item_id_card = b.declare("ITEM_F1_B_ID_CARD");
    let flag_f2_unlocked = b.declare("FLAG_S1_TO_F2_UNLOCKED");

    let lock_crate_sealed = b.declare("LOCK_B1_A_CRATE_SEALED");
    let case_smashed_console = b.declare("CASE_F2_A_CONSOLE");
    let item_prybar = b.declare("ITEM_F2_A_PRYBAR");
    let flag_crate_unsealed = b.declare("FLAG_B1_A_CRATE_UNSEALED");

    let lock_too_cold = b.declare("LOCK_F1_C_TOO_COLD");
    let case_crate = b.declare("CASE_B1_A_CRATE");
    let item_suit = b.declare("ITEM_B1_A_SUIT");

    let lock_reactor_no_fuel = b.declare("LOCK_B1_B_REACTOR_NO_FUEL");
    let case_fuel_rack = b.declare("CASE_F1_C_FUEL_CELL_RACK");
    let item_fuel_cell = b.declare("ITEM_F1_C_FUEL_CELL");
    let flag_reactor_refueled = b.declare("FLAG_B1_B_REACTOR_REFUELED");

    let lock_reactor_offline = b.declare("LOCK_B1_B_REACTOR_OFFLINE");
    let case_desk_drawer = b.declare("CASE_F2_C_DESK_DRAWER");
    let item_auth_module = b.declare("ITEM_F2_C_AUTH_MODULE");
    let flag_reactor_online = b.declare("FLAG_B1_B_REACTOR_ONLINE");

    let lock_server_offline = b.declare("LOCK_F2_C_SERVER_OFFLINE");
    let flag_server_online = b.declare("FLAG_F2_C_SERVER_ONLINE");

    let lock_no_nav_data = b.declare("LOCK_F1_C_NO_NAV_DATA");
    let case_surveillance = b.declare("CASE_F2_B_CONSOLE");
    let item_nav_data = b.declare("ITEM_F2_B_NAV_DATA");
    let flag_nav_upload = b.declare("FLAG_F1_C_NAV_DATA_UPLOAD");

    let escape = b.declare("ODV9_ESCAPE_THE_OUTPOST");

    let prop_lost_label = b.declare("ODV9_PROP_LOST_LABEL");
    let prop_checklist = b.declare("ODV9_PROP_CHECKLIST");
    let prop_cryo_note = b.declare("ODV9_PROP_CRYO_NOTE");
    let prop_cryo_panel = b.declare("ODV9_PROP_CRYO_PANEL");
    let prop_cryo_cabinet = b.declare("ODV9_PROP_CRYO_CABINET");
    let prop_floor_stain = b.declare("ODV9_PROP_FLOOR_STAIN");
    let prop_sameko_player = b.declare("ODV9_PROP_SAMEKO_PLAYER");
    let prop_wanau_energy = b.declare("ODV9_PROP_WANAU_ENERGY");
    let prop_empty_syringe = b.declare("ODV9_PROP_EMPTY_SYRINGE");
    let prop_strange_toy = b.declare("ODV9_PROP_STRANGE_TOY");
    let prop_command_window = b.declare("ODV9_PROP_COMMAND_WINDOW");

    b.select(Tag::NONE).children(&[main_menu, s1]);

    // Menu and endings. Settling on an exit node ends the session, so
    // neither exit is ever projected.

    b.define(main_menu, NodeKind::Hall, "main menu")
        .describe(
            "Outpost DV9 - Main Menu",
            "",
            "You've been in stasis for a very long time. It's impossible \
             to tell how long; only the faintest traces of sensation \
             reach your slumbering mind. You sense that something is \
             beginning... that it's time to wake up...\n\n\n\
             [Use arrow keys to select options.]\n\
             [Press enter to confirm selected option.]",
        )
        .children(&[new_game, game_exit]);

    b.define(game_exit, NodeKind::Hall, "game exit")
        .option_label("[EXIT GAME]");
    b.mark_exit(game_exit);

    // The intro wakes the player inside the cryo vault: its exit leads
    // into the world, not back to the menu that listed it.
    b.define(new_game, NodeKind::Room, "new game")
        .option_label("[START GAME]")
        .describe(
            "Somewhere Very Cold",
            "",
            "You struggle awake, shivering violently as air hisses and \
             latches pop all around you. The fogged glass door of a \
             cryostasis pod lifts up and out of view, releasing you \
             from your icy confines.",
        )
        .parent(b1_c);

    // The stairwell joins all three floors. It reads as locked from the
    // basement until the welded door is cut open.

    b.define(s1, NodeKind::Hall, "stairwell")
        .describe(
            "Stairwell",
            "",
            "This cramped stairwell connects to three floors. The lowest \
             door, to the basement, shows signs of scorching along the \
             seams. The highest door, to the command deck, says 'ACCESS \
             RESTRICTED' and has an electronic lock with card reader. The \
             middle door, to the ground floor, is unlocked and has an \
             'EXIT' sign above it.",
        )
        .unlocked_by(flag_door_cut)
        .children(&[f2, lock_cardlock, f1, prop_floor_stain, b1]);

    b.define(lock_cardlock, NodeKind::Lock, "card reader")
        .describe(
            "Stairwell Door, Card Reader Lock",
            "",
            "A heavy security door blocks the way to the second floor. A \
             small panel beside the frame houses a card reader. The \
             plastic cover is scratched, and the indicator light is red. \
             It says 'COMMAND STAFF ONLY'. You'll need a valid ID Card to \
             unlock this door.",
        )
        .children(&[flag_f2_unlocked])
        .rehidden_by(flag_f2_unlocked);

    b.define(flag_f2_unlocked, NodeKind::Flag, "unlocked door")
        .option_label("Use an ID Card to unlock the door.")
        .unlocked_by(item_id_card);

    // Basement.

    b.define(b1, NodeKind::Room, "basement hallway")
        .option_label("Move to the basement hallway.")
        .describe(
            "Outpost Basement",
            "",
            "The air of this dimly lit corridor is cold and stale. Pipes \
             and conduits obscure the ceiling overhead, and every sound \
             echoes off the bare concrete of the floor and walls. Three \
             doors have spray-painted stencil lettering; 'STORAGE', \
             'REACTOR', and 'CRYO'. A fourth door with an 'EXIT' sign \
             shows visible scorching along the seams.",
        )
        .children(&[b1_a, b1_b, b1_c, Tag::NONE, lock_welded]);

    b.define(lock_welded, NodeKind::Lock, "'EXIT' door")
        .describe(
            "Stairwell Door, Welded Shut",
            "",
            "The door between the basement and the stairwell has been \
             welded shut from the basement side. The welding is crude but \
             more than enough to prevent the door from opening. You'll \
             need some kind of tool to get this door open.",
        )
        .children(&[flag_door_cut])
        .rehidden_by(flag_door_cut);

    b.define(flag_door_cut, NodeKind::Flag, "welded door")
        .option_label("Cut the welded seam.")
        .unlocked_by(item_cutting_torch);

    b.define(b1_a, NodeKind::Room, "storage room")
        .describe(
            "Storage Room",
            "",
            "This crowded storage room is lined with floor-to-ceiling \
             racks full of boxes and crates. Decades worth of supplies \
             and replacement parts in sealed boxes. The only interesting \
             thing you find is a large shipping crate near the back. It's \
             the only thing without a place on the shelves, was it left \
             here for a reason?",
        )
        .children(&[lock_crate_sealed, case_crate]);

    b.define(lock_crate_sealed, NodeKind::Lock, "sealed crate")
        .describe(
            "Sealed Storage Crate",
            "",
            "There is a large shipping crate in the back corner of the \
             room, its surface coated in a fine layer of dust. The lid is \
             fastened shut with thick metal bands and recessed latches \
             that need to be pried open. You can see faint markings on \
             the side; something about emergency gear. With the right \
             tool, you might be able to force it open.",
        )
        .children(&[flag_crate_unsealed])
        .rehidden_by(flag_crate_unsealed);

    b.define(flag_crate_unsealed, NodeKind::Flag, "broken seal")
        .option_label("Pry open the sealed crate.")
        .unlocked_by(item_prybar);

    b.define(case_crate, NodeKind::Case, "unsealed crate")
        .describe(
            "Unsealed Storage Crate",
            "",
            "The lid now hangs loose, bent from the force required to \
             open it. Inside, packed in foam and sealed plastic, you find \
             a full-body environmental suit. The outer shell is dull gray \
             with reinforced seams, clearly built for subzero exposure. A \
             helmet with a polarized visor is tucked beside it, along \
             with a compact heat exchange unit and RTG power cell. \
             Everything inside appears intact and ready for use. This \
             could protect you in nearly any climate; you'll definitely \
             want to be wearing it when you leave the outpost.",
        )
        .children(&[item_suit])
        .revealed_by(flag_crate_unsealed)
        .rehidden_by(item_suit);

    b.define(item_suit, NodeKind::Item, "environmental suit")
        .option_label("Put on the environmental suit.");

    b.define(b1_b, NodeKind::Room, "reactor room")
        .describe(
            "Reactor Room",
            "",
            "A hulking fusion reactor occupies one half of this room. It \
             looks nearly pristine, but requires specialized fuel cells \
             to operate. The other half of the room has a long workbench \
             covered in rusted parts and scrap metal. There aren't any \
             tools on the hooks and shelves above the bench, but there is \
             an old tool box in the corner.",
        )
        .children(&[case_tool_box, lock_reactor_no_fuel, lock_reactor_offline]);

    b.define(case_tool_box, NodeKind::Case, "tool box")
        .describe(
            "Old Tool Box",
            "",
            "The exterior of this tool box is giving way to rust, but it \
             has done an admirable job preserving its contents. The first \
             thing that catches your eye is a powerful cutting torch. It \
             seems out of place here among dirty old hand tools, and you \
             have a strange feeling like you've seen it before. Nothing \
             else seems worth taking right now; screwdrivers, pliers, a \
             ratchet set... nothing that would make a decent weapon, like \
             a wrench or a crowbar.",
        )
        .children(&[item_cutting_torch])
        .rehidden_by(item_cutting_torch);

    b.define(item_cutting_torch, NodeKind::Item, "cutting torch");

    b.define(lock_reactor_no_fuel, NodeKind::Lock, "reactor fueling port")
        .describe(
            "Reactor Fueling Port",
            "",
            "A compartment juts from the reactor's outer casing, ringed \
             with warning labels and instructions. There is a circular \
             slot marked 'MANUAL FUEL INSERTION'. If you had a compatible \
             fuel cell, it looks like it could still accept one.",
        )
        .children(&[flag_reactor_refueled])
        .rehidden_by(flag_reactor_refueled);

    b.define(flag_reactor_refueled, NodeKind::Flag, "refueled reactor")
        .option_label("Refuel the reactor using a fuel cell.")
        .unlocked_by(item_fuel_cell);

    b.define(lock_reactor_offline, NodeKind::Lock, "reactor control panel")
        .describe(
            "Reactor Control Panel",
            "",
            "The control panel is covered in dust, but the indicator \
             lights still glow dimly. A dirty screen displays a prompt: \
             'REACTOR OFFLINE - FUEL LEVEL CRITICAL - AUTH REQUIRED'. \
             Below it, a slot marked 'AUTH MODULE' is set into the panel. \
             The system appears to be waiting for authorization for an \
             automated restart sequence. With the reactor refueled, this \
             should be enough to bring it back online.",
        )
        .children(&[flag_reactor_online])
        .unlocked_by(flag_reactor_refueled)
        .rehidden_by(flag_reactor_online);

    b.define(flag_reactor_online, NodeKind::Flag, "online reactor")
        .option_label("Insert the authentication module.")
        .unlocked_by(item_auth_module);

    b.define(b1_c, NodeKind::Room, "cryo vault").describe(
        "Cryo Vault",
        "",
        "An empty stasis pod dominates the room, its life support \
         systems still softly clicking and humming. A warning light \
         pulses on a control panel and a hand-written note is taped \
         beside it. There is a large metal cabinet in one corner, and a \
         reinforced steel door directly across from it.",
    );

    // Ground floor.

    b.define(f1, NodeKind::Room, "ground floor hallway")
        .option_label("Move to the ground floor hallway.")
        .describe(
            "Ground Floor Hallway",
            "",
            "This traffic-worn hallway has four doors. Block lettering on \
             three read 'COMMON', 'QUARTERS', and 'STAIRS'. A fourth door \
             marked 'MAINTENANCE BAY' is larger, rimed with thick frost, \
             and has an 'EXIT' sign above it.",
        )
        .children(&[f1_a, f1_b, f1_c, lock_too_cold]);

    // Stands in for the maintenance bay until the suit reveals the real
    // room; rehidden by the same tag that reveals it.
    b.define(lock_too_cold, NodeKind::Prop, "maintenance bay door")
        .option_label("Enter the maintenance bay.")
        .describe(
            "Maintenance Bay Door",
            "",
            "Thick frost covers this door, and status indicators show \
             arctic conditions on the other side. You'll need some sort \
             of protection to enter; more than any normal clothing could \
             provide.",
        )
        .rehidden_by(item_suit);

    b.define(f1_a, NodeKind::Room, "common room")
        .describe(
            "Common Room",
            "",
            "With a central round table, wall mounted entertainment \
             center, and a corner kitchenette, this common room is \
             surprisingly comfortable despite its limited size. This is \
             where the crew came to relax and socialize. Where they tried \
             to maintain their sanity together in the face of boredom and \
             isolation, sheltered from the hostile conditions outside. \
             Looking around you get the sense you won't find anything \
             useful here, but it's worth checking.",
        )
        .children(&[
            prop_strange_toy,
            prop_sameko_player,
            prop_wanau_energy,
            prop_lost_label,
        ]);

    b.define(f1_b, NodeKind::Room, "crew quarters")
        .describe(
            "Crew Quarters",
            "",
            "This room is quiet and slightly warmer than the rest of the \
             outpost. It has six recessed cubicles; each has its own bed \
             and locker, with a curtain for privacy. There is a tiny \
             bathroom at the far end, barely larger than a closet.",
        )
        .children(&[case_locker, prop_empty_syringe]);

    b.define(case_locker, NodeKind::Case, "crew lockers")
        .describe(
            "Crew Lockers",
            "",
            "The crew lockers are mostly empty, with only a few forgotten \
             personal items; a ripped jacket, a keychain, a cracked \
             handheld game with no batteries. In the last one, you find a \
             worn ID card dangling from a faded blue lanyard. The name \
             reads 'G. Murin' serial number F-1573-R with a small emblem \
             denoting command clearance. The woman in the photo is \
             smiling. Could she still be alive? How long has this been \
             here?",
        )
        .children(&[item_id_card])
        .rehidden_by(item_id_card);

    b.define(item_id_card, NodeKind::Item, "id card");

    b.define(f1_c, NodeKind::Room, "maintenance bay")
        .describe(
            "Maintenance Bay",
            "",
            "The huge bay door is frozen wide open, leaving this space \
             exposed to arctic conditions. A massive half-tracked vehicle \
             is parked just inside the bay, beside a large rack of \
             nuclear fuel cells.",
        )
        .revealed_by(item_suit)
        .children(&[case_fuel_rack, lock_no_nav_data, escape]);

    b.define(case_fuel_rack, NodeKind::Case, "rack of nuclear fuel cells")
        .describe(
            "Fuel Cell Rack",
            "",
            "A metal rack spans the length of the wall, fully loaded with \
             bright yellow canisters secured in padded brackets. Each one \
             is covered in safety warning surrounding the same label: \
             'TYPE-C MICRO FUSION'. They're warm to the touch despite the \
             arctic conditions of the maintenance bay.",
        )
        .children(&[item_fuel_cell])
        .rehidden_by(item_fuel_cell);

    b.define(item_fuel_cell, NodeKind::Item, "fuel cell")
        .option_label("Take one of the fuel cells.");

    b.define(lock_no_nav_data, NodeKind::Lock, "arctic crawler")
        .describe(
            "Arctic Crawler",
            "",
            "The crawler's control panel comes to life with a muted \
             chime. Engine systems, life support, and environmental seals \
             all check green. It's ready to move, but the navigation \
             system shows no data for some reason. You could try driving \
             blind into the storm, but you won't find a better shelter \
             just by chance. Beneath the dashboard is a small port where \
             you could update the crawler's systems with new data.",
        )
        .children(&[flag_nav_upload])
        .rehidden_by(flag_nav_upload);

    b.define(flag_nav_upload, NodeKind::Flag, "successful upload")
        .option_label("Update the crawler's nav computer.")
        .unlocked_by(item_nav_data);

    b.define(escape, NodeKind::Prop, "escape the outpost")
        .option_label("Escape using the arctic crawler.")
        .describe(
            "Game Over: Escaped the Outpost",
            "",
            "You drive away from the outpost in the Arctic Crawler, \
             headed for the nearby Observatory. Storm clouds gather on \
             the horizon; the drive will be long and difficult, but \
             something in the back of your mind tells you to press on.\
             \n\nGAME OVER: Thank you for playing Outpost DV9! Please \
             look forward to the next chapter. You can end the game \
             here, or return to the outpost if you want to look around.",
        )
        .unlocked_by(flag_nav_upload)
        .children(&[game_depart]);

    b.define(game_depart, NodeKind::Hall, "game departure")
        .option_label("[END GAME]");
    b.mark_exit(game_depart);

    // Command deck.

    b.define(f2, NodeKind::Room, "command deck hallway")
        .option_label("Move to the command deck hallway.")
        .describe(
            "Command Deck Hallway",
            "",
            "This narrow passage is cleaner than the rest of the outpost \
             as if rarely used. There is an 'EXIT' sign above the \
             stairwell door, and three other doors are marked 'COMMAND', \
             'COMPCORE', and 'SURVEILLANCE'.",
        )
        .unlocked_by(flag_f2_unlocked)
        .children(&[f2_a, f2_b, f2_c]);

    b.define(f2_a, NodeKind::Room, "command center")
        .describe(
            "Command Center",
            "",
            "Huge windows with inches-thick glass give a spectacular view \
             of snow covered mountains. There are three stations with \
             various displays and control panels. None seem to be \
             working, and the equipment at the 'COMMS' station has been \
             smashed to pieces.",
        )
        .children(&[case_smashed_console, prop_command_window]);

    b.define(case_smashed_console, NodeKind::Case, "smashed console")
        .describe(
            "Smashed Console",
            "",
            "The communications console has been reduced to a mess of \
             shattered plastic and twisted metal. The screen is cracked \
             in half and components are scattered across the floor. \
             Sticking out of the center is a heavy prybar; the sharp end \
             is buried deep in the guts of the machine. Whoever did this \
             wasn't leaving anything to chance. There's no way to repair \
             it; if this was the only comms unit in the outpost, you're \
             completely cut off.",
        )
        .children(&[item_prybar])
        .rehidden_by(item_prybar);

    b.define(item_prybar, NodeKind::Item, "prybar");

    b.define(f2_b, NodeKind::Room, "surveillance suite")
        .describe(
            "Surveillance Suite",
            "",
            "This room feels out of place in the outpost; the displays \
             and instruments have a sleek militaristic quality that seems \
             slightly sinister. A single chair is surrounded by displays \
             and control panels like the cockpit of some kind of \
             aircraft. You might find some useful information here if the \
             outpost's computer systems are restored.",
        )
        .children(&[case_surveillance]);

    b.define(case_surveillance, NodeKind::Case, "surveillance system")
        .describe(
            "Surveillance Console",
            "",
            "It seems this station was capable of monitoring the entire \
             region. An array of monitors stretches above the controls, \
             each labeled with distant station codes and waypoint IDs. \
             Most of the feeds are offline, but a few flicker with static \
             or distorted images. Some kind of removable drive is \
             blinking a green indicator; the nearest screen shows a \
             progress bar titled 'NAVDATA BACKUP' at 100%. Was this done \
             before the outpost was abandoned? Or did it happen just now?",
        )
        .children(&[item_nav_data])
        .unlocked_by(flag_server_online)
        .rehidden_by(item_nav_data);

    b.define(item_nav_data, NodeKind::Item, "navigation data");

    b.define(f2_c, NodeKind::Room, "computer core")
        .describe(
            "Computer Core",
            "",
            "This claustrophobic room is crammed with more server racks \
             than seems reasonable for this outpost. They must require a \
             massive amount of electricity to operate. There is a single \
             workstation for direct access, perched atop a tiny desk with \
             a drawer stuck open at an odd angle.",
        )
        .children(&[lock_server_offline, case_desk_drawer]);

    b.define(case_desk_drawer, NodeKind::Case, "desk drawer")
        .describe(
            "Desk Drawer",
            "",
            "The drawer scrapes open on its bent tracks. Inside, you find \
             scattered office debris: broken wapens, a notepad with three \
             pages left, a few loose cables and adaptors. Tucked near the \
             back is a compact plastic module with a connector on one end \
             - an authentication unit, still intact. A faint glow tells \
             you it's active. This seems like a poor hiding place for \
             something so important, but security regulations tend to \
             break down with small crews in isolation.",
        )
        .children(&[item_auth_module])
        .rehidden_by(item_auth_module);

    b.define(item_auth_module, NodeKind::Item, "authentication module");

    b.define(lock_server_offline, NodeKind::Lock, "main server")
        .describe(
            "Data Server Core",
            "",
            "The server towers are humming with power, but the system \
             hasn't booted. Cables run in tidy bundles along the floor, \
             and the hum of cooling fans fills the room with a low \
             vibration. The central terminal displays a simple message: \
             'POWER RESTORED - PRESS ANY KEY TO REBOOT'. Why it doesn't \
             just boot on its own is a puzzle for another time.",
        )
        .children(&[flag_server_online])
        .revealed_by(flag_reactor_online)
        .rehidden_by(flag_server_online);

    b.define(flag_server_online, NodeKind::Flag, "rebooted computer")
        .option_label("Reboot the computer core.")
        .unlocked_by(flag_reactor_online);

    // Flavor only beyond this point.

    b.define(prop_cryo_panel, NodeKind::Prop, "the pod's control panel")
        .describe(
            "Cryopod Control Panel",
            "",
            "The pod's diagnostics show zero errors during your stasis. A \
             single warning light pulses next to a key-operated switch \
             marked 'MAINTENANCE OVERRIDE'. The switch is stuck in the on \
             position; the key is snapped off inside the lock.\n\nThere \
             are no logs or biometrics recorded for your stasis cycle... \
             was that deliberate? Safety protocols normally prevent a \
             person putting themself in stasis; there needs to be an \
             operator at the panel, but with the override... it could be \
             done.",
        )
        .child_of(b1_c);

    b.define(prop_cryo_note, NodeKind::Prop, "the note taped to the panel")
        .describe(
            "Taped Note",
            "",
            "A hand-written note is taped to the pod's control panel. It \
             reads:\n\nI won't remember writing this. The stasis will be \
             long. I ne-YOU need to leave. They know you're awake. It \
             will take some time but they WILL find you. Get to the \
             observatory.\n\nIt will still be there... it has to be...",
        )
        .child_of(b1_c);

    b.define(prop_cryo_cabinet, NodeKind::Prop, "the metal cabinet in the corner")
        .describe(
            "Large Metal Cabinet",
            "",
            "This cabinet contains all the specialized parts and \
             chemicals for running the cryopod. Several of the containers \
             have been opened, and the missing supplies account for more \
             than one stasis cycle. Nothing here will help unless you \
             find a reason to put yourself or someone else in stasis.",
        )
        .child_of(b1_c);

    b.define(prop_floor_stain, NodeKind::Prop, "a stain on the floor")
        .describe(
            "Floor Stain",
            "",
            "A brownish-red stain streaks across the floor near the \
             ground floor exit. It looks like it was wiped hastily, but \
             not completely. There's a faint trail leading away that \
             fades before it reaches the stairs upward.",
        );

    b.define(prop_command_window, NodeKind::Prop, "the landscape through the windows")
        .describe(
            "Command Center Windows",
            "",
            "The huge windows in the command center give a panoramic view \
             of the surrounding landscape. It's all rocky slopes and \
             sheer cliff faces between snow-covered peaks as far as you \
             can see. The sky is gray and overcast with storm clouds in \
             the distance. Wind howls against the reinforced glass. You \
             can see the shape of what might be a roadway leading down \
             the slope but it's covered with snow.",
        );

    b.define(prop_checklist, NodeKind::Prop, "a maintenance checklist on the wall")
        .describe(
            "Maintenance Checklist",
            "",
            "A clipboard is hung from a hook on the wall. Half the items \
             are marked 'FAILED', and one line is scribbled out with \
             heavy ink. Someone wrote 'DO NOT TOUCH - ASK CLARKE' at the \
             bottom.",
        )
        .child_of(b1_b);

    b.define(prop_strange_toy, NodeKind::Prop, "the strange toy, still in its box")
        .describe(
            "Strange Toy",
            "",
            "A slightly dented cardboard box with clear plastic front. \
             There's a plastic toy inside, held securely by the \
             packaging. It's a gray ball with cat ears, a single yellow \
             eye, and a tail. The strange creature has a tiny black bow \
             tie below its eye. The box says 'Grimmi Figs' and it's \
             apparently a limited edition.",
        );

    b.define(prop_sameko_player, NodeKind::Prop, "the handheld game console on the table")
        .describe(
            "Handheld Game Console",
            "",
            "A handheld game console is lying on the table. Its screen is \
             cracked and there's no response when you try to turn it on. \
             The brand name says 'SAMEKO' with a blue fish logo. The game \
             cartridge in the slot shows a singing girl with green hair.",
        );

    b.define(prop_wanau_energy, NodeKind::Prop, "the candy bar with a colorful wrapper")
        .describe(
            "WANAU Energy Bar",
            "",
            "Apparently some kind of food, the wrapper says 'WANAU' with \
             a speedy looking ghost silhouette after the 'U'. The bar \
             inside feels rock hard and is surprisingly heavy. It's \
             probably not safe to eat anymore, and based on the \
             ingredients it never really was.",
        );

    b.define(prop_lost_label, NodeKind::Prop, "the smudged label on the floor")
        .describe(
            "Shipping Label",
            "",
            "A loose shipping label on the floor reads: 'LIQUID RATION \
             SH1-K1-D3W QTY 36'. The rest is smudged by a heavy boot \
             print. Someone has drawn a smiley face over the barcode with \
             red marker.",
        );

    b.define(prop_empty_syringe, NodeKind::Prop, "a discarded syringe")
        .describe(
            "Discarded Syringe",
            "",
            "An empty syringe lies on the floor in the bathroom. The \
             plunger is fully depressed, and there's a faint yellowish \
             residue inside. Dried blood on the label obscures all but \
             the letter 'T' and the needle is bent sideways like someone \
             stepped on it.",
        );

    b.start(main_menu);
    b.finish()
}
