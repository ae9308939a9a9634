//! Full-screen terminal interface.

mod app;
mod keypad;
mod theme;
mod view;

pub use app::App;

use anyhow::{Context, Result};
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use std::io::stdout;

/// Take over the terminal and run the app until it quits.
///
/// The terminal is restored on every exit path.
pub fn run(app: &mut App) -> Result<()> {
    let mut terminal = ratatui::init();

    let result = execute!(stdout(), EnableMouseCapture)
        .context("failed to enable mouse capture")
        .and_then(|()| app.run(&mut terminal));

    if let Err(err) = execute!(stdout(), DisableMouseCapture) {
        tracing::warn!(error = %err, "failed to disable mouse capture");
    }
    ratatui::restore();

    result
}
