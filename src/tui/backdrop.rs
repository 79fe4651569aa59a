//! Backdrop resolution
//!
//! Scenes name their backdrop as an opaque string; what that means is up
//! to the presentation layer. In the terminal a backdrop resolves to a
//! background tint behind the prose.

use ratatui::style::Color;
use std::collections::HashMap;

/// Maps a scene's backdrop name to a terminal color.
pub trait BackdropProvider {
    fn resolve(&self, name: &str) -> Option<Color>;
}

/// Backdrops from a fixed name-to-color table, with a fallback tint for
/// names the table does not know.
pub struct ThemedBackdrops {
    table: HashMap<String, Color>,
    fallback: Option<Color>,
}

impl ThemedBackdrops {
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
            fallback: None,
        }
    }

    pub fn with(mut self, name: &str, color: Color) -> Self {
        self.table.insert(name.to_string(), color);
        self
    }

    pub fn fallback(mut self, color: Color) -> Self {
        self.fallback = Some(color);
        self
    }
}

impl Default for ThemedBackdrops {
    fn default() -> Self {
        Self::new()
    }
}

impl BackdropProvider for ThemedBackdrops {
    fn resolve(&self, name: &str) -> Option<Color> {
        match self.table.get(name) {
            Some(&color) => Some(color),
            None => {
                if self.fallback.is_none() {
                    log::debug!("no backdrop registered for '{name}'");
                }
                self.fallback
            }
        }
    }
}
