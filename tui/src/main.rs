//! Scrambler TUI entry point
//!
//! Sets up the terminal, runs the [`App`] event loop, and restores the
//! terminal on the way out. Logging is opt-in via `SCRAMBLER_LOG=<path>`
//! (plus the usual `RUST_LOG` filter) so the alternate screen stays clean.

mod app;
mod theme;

use std::io;

use anyhow::Result;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use app::App;

fn init_logging() {
    let Ok(path) = std::env::var("SCRAMBLER_LOG") else {
        return;
    };
    match std::fs::File::create(&path) {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::from_default_env())
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        Err(error) => eprintln!("could not open log file {path}: {error}"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new()?;
    let result = app.run(&mut terminal).await;

    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    result
}
