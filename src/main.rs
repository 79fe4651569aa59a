//! Outpost DV9
//!
//! A keyboard-driven text adventure. You wake from cryostasis in an
//! abandoned arctic outpost and have to find a way out.
//!
//! Run with no arguments for the built-in world, or pass the path of a
//! content script file to play authored content instead.

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use outpost_dv9::data::load_script;
use outpost_dv9::game::outpost::outpost_world;
use outpost_dv9::tui::{App, ThemedBackdrops};
use outpost_dv9::Game;
use ratatui::backend::CrosstermBackend;
use ratatui::style::Color;
use ratatui::Terminal;
use std::io::stdout;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let world = match std::env::args().nth(1) {
        Some(path) => load_script(Path::new(&path))?,
        None => outpost_world()?,
    };
    let game = Game::new(world);
    let backdrops = ThemedBackdrops::new().fallback(Color::Black);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(game, backdrops);

    // Main loop
    let result = (|| -> anyhow::Result<()> {
        while app.running {
            terminal.draw(|frame| {
                app.render(frame);
            })?;

            if !app.handle_input()? {
                break;
            }
        }
        Ok(())
    })();

    // Cleanup even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result?;

    println!("\n╔════════════════════════════════════════════════════════╗");
    println!("║  Thanks for playing Outpost DV9!                       ║");
    println!("║                                                        ║");
    println!("║  Get to the observatory.                               ║");
    println!("╚════════════════════════════════════════════════════════╝\n");

    Ok(())
}
