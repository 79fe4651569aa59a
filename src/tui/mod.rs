//! Terminal User Interface
//!
//! Scene rendering for the engine using ratatui: one screen with the
//! current scene's title, prose, and six option rows.

pub mod app;
pub mod backdrop;

pub use app::App;
pub use backdrop::{BackdropProvider, ThemedBackdrops};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

/// Color scheme for the game
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub dim: Color,
    pub selected: Color,
    pub border: Color,
    pub header: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            accent: Color::Cyan,
            dim: Color::DarkGray,
            selected: Color::Yellow,
            border: Color::DarkGray,
            header: Color::Magenta,
        }
    }
}

/// Create a styled border block
pub fn styled_block<'a>(title: &str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
}

/// Header banner
pub const BANNER: &str = " OUTPOST DV9 ";

/// Help text
pub const HELP_TEXT: &str = r#"
╔═══════════════════════════════════════════════════════════════╗
║                       CONTROLS                                ║
╠═══════════════════════════════════════════════════════════════╣
║  ↑/↓   Move between options (wraps around)                    ║
║  Enter Confirm selected option                                ║
║  ?     Toggle this help                                       ║
║  q/Esc Quit game                                              ║
╚═══════════════════════════════════════════════════════════════╝
"#;

/// Create the main layout: header, scene body, option list, key hints.
pub fn create_main_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Title + prose
            Constraint::Length(8), // Options
            Constraint::Length(1), // Key hints
        ])
        .split(area)
        .to_vec()
}
