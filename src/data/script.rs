//! Line-oriented content script loader
//!
//! The data-driven authoring format: one directive per line.
//!
//! ```text
//! # comment
//! SCENE cryo_vault
//! TITLE Cryo Vault
//! BGIMG cryo-vault.png
//! PROSE
//! | An empty stasis pod dominates the room.
//! | A warning light pulses on a control panel.
//! OPTION basement Step out into the basement.
//! ```
//!
//! Parsing populates the same world-graph abstraction as inline content,
//! without the strict gating fields: every scene is a `Hall`, options
//! carry custom labels, and scene ids referenced before (or never)
//! defined become placeholders. The first `SCENE` is the start node.

use crate::data::graph::{WorldBuilder, WorldGraph};
use crate::data::node::{NodeKind, MAX_CHILDREN};
use crate::data::tag::Tag;
use crate::EngineError;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// Load a world from a content script file.
pub fn load_script(path: &Path) -> Result<WorldGraph, EngineError> {
    parse_script(&fs::read_to_string(path)?)
}

/// The scene currently being parsed; committed to the builder when the
/// next `SCENE` starts or the script ends.
struct SceneDraft {
    tag: Tag,
    title: String,
    background: String,
    prose: Vec<String>,
    options: Vec<Tag>,
}

impl SceneDraft {
    fn new(tag: Tag, id: &str) -> Self {
        Self {
            tag,
            title: id.to_string(),
            background: String::new(),
            prose: Vec::new(),
            options: Vec::new(),
        }
    }

    fn commit(self, builder: &mut WorldBuilder) {
        let prose = self.prose.join(" ");
        builder
            .select(self.tag)
            .describe(&self.title, &self.background, &prose)
            .children(&self.options);
    }
}

/// Parse content script text into a world.
pub fn parse_script(text: &str) -> Result<WorldGraph, EngineError> {
    let mut builder = WorldBuilder::lenient();
    let mut draft: Option<SceneDraft> = None;
    let mut defined: HashSet<Tag> = HashSet::new();
    // Authored option lines, applied after every scene is known; the
    // first label written for a target wins.
    let mut labels: HashMap<Tag, (String, String)> = HashMap::new();
    let mut prose_open = false;

    for (number, raw_line) in text.lines().enumerate() {
        let line = number + 1;
        let trimmed = raw_line.trim_start();
        let (command, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (trimmed, ""),
        };

        match command {
            "" => continue,
            c if c.starts_with('#') => continue,
            "SCENE" => {
                let id = first_word(rest).ok_or_else(|| EngineError::Script {
                    line,
                    message: "SCENE needs an id".to_string(),
                })?;
                if let Some(finished) = draft.take() {
                    finished.commit(&mut builder);
                }
                let tag = builder.declare(id);
                builder.define(tag, NodeKind::Hall, id);
                if defined.is_empty() {
                    builder.start(tag);
                }
                defined.insert(tag);
                draft = Some(SceneDraft::new(tag, id));
                prose_open = false;
            }
            "TITLE" => {
                let draft = open_scene(&mut draft, line, "TITLE")?;
                draft.title = clean_text(rest);
            }
            "BGIMG" => {
                let draft = open_scene(&mut draft, line, "BGIMG")?;
                if let Some(file) = first_word(rest) {
                    draft.background = file.to_string();
                }
            }
            "PROSE" => {
                let draft = open_scene(&mut draft, line, "PROSE")?;
                draft.prose.clear();
                prose_open = true;
            }
            "|" => {
                if !prose_open {
                    log::warn!("script line {line}: prose continuation outside PROSE block");
                    continue;
                }
                let draft = open_scene(&mut draft, line, "|")?;
                let text = clean_text(rest);
                if !text.is_empty() {
                    draft.prose.push(text);
                }
            }
            "OPTION" => {
                let (target_id, label) = match rest.split_once(char::is_whitespace) {
                    Some((target_id, label)) => (target_id, label.trim()),
                    None => (rest, ""),
                };
                if target_id.is_empty() {
                    return Err(EngineError::Script {
                        line,
                        message: "OPTION needs a target id".to_string(),
                    });
                }
                let target = builder.declare(target_id);
                let draft = open_scene(&mut draft, line, "OPTION")?;
                if draft.options.len() >= MAX_CHILDREN {
                    log::warn!(
                        "script line {line}: scene has more than {MAX_CHILDREN} options, dropping '{target_id}'"
                    );
                    continue;
                }
                draft.options.push(target);
                if !label.is_empty() {
                    labels
                        .entry(target)
                        .or_insert_with(|| (target_id.to_string(), clean_text(label)));
                }
            }
            _ => {
                log::warn!("script line {line}: unhandled directive '{command}'");
            }
        }
    }

    if let Some(finished) = draft.take() {
        finished.commit(&mut builder);
    }

    // Option labels land on the target scene. Targets with a label but no
    // SCENE of their own become placeholders that still read well in the
    // option list.
    for (target, (id, label)) in labels {
        if defined.contains(&target) {
            builder.select(target).option_label(&label);
        } else {
            builder
                .define(target, NodeKind::Hall, &id)
                .describe(&id, "", &id)
                .option_label(&label);
        }
    }

    builder.finish()
}

fn open_scene<'a>(
    draft: &'a mut Option<SceneDraft>,
    line: usize,
    directive: &str,
) -> Result<&'a mut SceneDraft, EngineError> {
    draft.as_mut().ok_or_else(|| EngineError::Script {
        line,
        message: format!("{directive} before any SCENE"),
    })
}

fn first_word(text: &str) -> Option<&str> {
    text.split_whitespace().next()
}

/// Normalize whitespace runs to single spaces and strip anything that is
/// neither printable nor whitespace.
fn clean_text(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    let mut pending_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            pending_space = !cleaned.is_empty();
        } else if !c.is_control() {
            if pending_space {
                cleaned.push(' ');
                pending_space = false;
            }
            cleaned.push(c);
        }
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
# a tiny two-scene script
SCENE landing
TITLE The Landing
BGIMG landing.png
PROSE
| Dust hangs in the air.
| A corridor leads north.
OPTION corridor Head down the corridor.
OPTION basement Take the stairs down.

SCENE corridor
TITLE The Corridor
PROSE
| It is dark here.
OPTION landing Go back to the landing.
"#;

    #[test]
    fn parses_scenes_titles_and_prose() {
        let world = parse_script(SAMPLE).unwrap();
        let landing = world.lookup("landing").unwrap();
        let node = world.node(landing);
        assert_eq!(world.start(), landing);
        assert_eq!(node.title, "The Landing");
        assert_eq!(node.background, "landing.png");
        assert_eq!(node.prose, "Dust hangs in the air. A corridor leads north.");
    }

    #[test]
    fn options_become_children_with_custom_labels() {
        let world = parse_script(SAMPLE).unwrap();
        let landing = world.lookup("landing").unwrap();
        let corridor = world.lookup("corridor").unwrap();
        let node = world.node(landing);
        assert_eq!(node.children[0], corridor);
        assert_eq!(
            world.node(corridor).option_label,
            "Head down the corridor."
        );
        // Free-form linking: each scene's first lister becomes its parent,
        // even for the start scene.
        assert_eq!(world.node(corridor).parent, landing);
        assert_eq!(world.node(landing).parent, corridor);
    }

    #[test]
    fn undefined_targets_become_placeholders() {
        let world = parse_script(SAMPLE).unwrap();
        let basement = world.lookup("basement").unwrap();
        let node = world.node(basement);
        assert_eq!(node.title, "basement");
        assert_eq!(node.prose, "basement");
        assert_eq!(node.option_label, "Take the stairs down.");
    }

    #[test]
    fn directives_before_a_scene_fail() {
        let err = parse_script("TITLE Orphan Title\n").unwrap_err();
        assert!(matches!(err, EngineError::Script { line: 1, .. }));
    }

    #[test]
    fn unknown_directives_are_skipped() {
        let script = "SCENE a\nTITLE A\nWIBBLE whatever\nSCENE b\nOPTION a Loop.\n";
        let world = parse_script(script).unwrap();
        assert_eq!(world.node(world.start()).title, "A");
    }

    #[test]
    fn overlong_option_lists_are_truncated() {
        let mut script = String::from("SCENE hub\nTITLE Hub\n");
        for i in 0..7 {
            script.push_str(&format!("OPTION room_{i} Door {i}.\n"));
        }
        let world = parse_script(&script).unwrap();
        let hub = world.lookup("hub").unwrap();
        let children = world.node(hub).children;
        assert!(children.iter().all(|c| !c.is_none()));
        assert!(world.lookup("room_5").is_some());
        // The sixth and seventh options were dropped, so those scenes are
        // never listed and keep the root as parent.
        assert!(world.node(world.lookup("room_5").unwrap()).parent.is_none());
    }
}
