//! Main application state and rendering

use crate::game::{Game, GameEvent};
use crate::tui::{create_main_layout, styled_block, Theme, BANNER, HELP_TEXT};
use crate::tui::backdrop::BackdropProvider;
use crate::VERSION;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;

/// Application state
pub struct App<B: BackdropProvider> {
    pub game: Game,
    pub theme: Theme,
    pub backdrops: B,
    pub running: bool,
    pub show_help: bool,
}

impl<B: BackdropProvider> App<B> {
    pub fn new(game: Game, backdrops: B) -> Self {
        Self {
            game,
            theme: Theme::default(),
            backdrops,
            running: true,
            show_help: false,
        }
    }

    /// Poll for one input event and apply it. Returns false once the
    /// session is over.
    pub fn handle_input(&mut self) -> std::io::Result<bool> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    return Ok(true);
                }

                if self.show_help {
                    // Any key dismisses the help overlay.
                    self.show_help = false;
                    return Ok(true);
                }

                match key.code {
                    KeyCode::Char('?') => self.show_help = true,
                    KeyCode::Up => self.game.handle_event(GameEvent::CursorUp),
                    KeyCode::Down => self.game.handle_event(GameEvent::CursorDown),
                    KeyCode::Enter => self.game.handle_event(GameEvent::Confirm),
                    KeyCode::Char('q') | KeyCode::Esc => {
                        self.game.handle_event(GameEvent::Quit)
                    }
                    _ => {}
                }
            }
        }

        if self.game.is_over() {
            self.running = false;
        }
        Ok(self.running)
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = create_main_layout(frame.area());
        self.render_header(frame, chunks[0]);
        self.render_scene(frame, chunks[1]);
        self.render_options(frame, chunks[2]);
        self.render_hints(frame, chunks[3]);

        if self.show_help {
            self.render_help_overlay(frame);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let scene = self.game.scene();
        let header = Line::from(vec![
            Span::styled(
                BANNER,
                Style::default()
                    .fg(self.theme.header)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" VER-{} ", VERSION.replace('.', "-")), Style::default().fg(self.theme.dim)),
            Span::raw(" "),
            Span::styled(&scene.super_text, Style::default().fg(self.theme.accent)),
        ]);
        let block = styled_block("", &self.theme);
        frame.render_widget(Paragraph::new(header).block(block), area);
    }

    fn render_scene(&self, frame: &mut Frame, area: Rect) {
        let scene = self.game.scene();
        let mut block = styled_block(&scene.title, &self.theme);
        if let Some(tint) = scene
            .background
            .as_deref()
            .and_then(|name| self.backdrops.resolve(name))
        {
            block = block.style(Style::default().bg(tint));
        }
        let prose = Paragraph::new(scene.prose.as_str())
            .style(Style::default().fg(self.theme.fg))
            .wrap(Wrap { trim: false })
            .block(block);
        frame.render_widget(prose, area);
    }

    fn render_options(&self, frame: &mut Frame, area: Rect) {
        let scene = self.game.scene();
        let lines: Vec<Line> = scene
            .options
            .iter()
            .enumerate()
            .map(|(slot, option)| {
                let selected = slot == scene.cursor;
                let pointer = if selected { "> " } else { "  " };
                let style = if selected {
                    Style::default()
                        .fg(self.theme.selected)
                        .add_modifier(Modifier::BOLD)
                } else if option.target.is_none() {
                    Style::default().fg(self.theme.dim)
                } else {
                    Style::default().fg(self.theme.fg)
                };
                Line::from(Span::styled(format!("{pointer}{}", option.label), style))
            })
            .collect();
        let block = styled_block("Options", &self.theme);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_hints(&self, frame: &mut Frame, area: Rect) {
        let hints = Line::from(Span::styled(
            " ↑/↓ select   Enter confirm   ? help   q quit ",
            Style::default().fg(self.theme.dim),
        ));
        frame.render_widget(
            Paragraph::new(hints).alignment(Alignment::Center),
            area,
        );
    }

    fn render_help_overlay(&self, frame: &mut Frame) {
        let area = centered_rect(65, 12, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(HELP_TEXT)
            .style(Style::default().fg(self.theme.fg))
            .alignment(Alignment::Center);
        frame.render_widget(help, area);
    }
}

/// A fixed-size rectangle centered in `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
