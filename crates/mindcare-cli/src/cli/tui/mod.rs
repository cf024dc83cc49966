//! Full-screen terminal interface.
//!
//! A ratatui rendition of the three screens with a navigation bar. The loop
//! drains fired replies, redraws, then polls for a key for up to 100ms, so a
//! reply shows up within one tick of its delay elapsing.

pub mod draw;
pub mod keys;
pub mod state;

use std::io;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use mindcare_core::reply::PendingReply;
use ratatui::prelude::*;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::state::AppState;
use state::TuiState;

/// Launch the full-screen interface on the landing screen.
pub async fn run(app: &AppState) -> Result<()> {
    let (router, mut replies) = app.router();
    let mut state = TuiState::new(router, app.time_format().to_string());
    tracing::info!(data_dir = %app.data_dir.display(), "interface started");

    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = tokio::task::block_in_place(|| run_tui_loop(&mut terminal, &mut state, &mut replies));

    // Restore terminal
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    state.router.shutdown();
    tracing::info!("interface closed");

    result
}

fn run_tui_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut TuiState,
    replies: &mut UnboundedReceiver<PendingReply>,
) -> Result<()> {
    loop {
        while let Ok(reply) = replies.try_recv() {
            state.deliver(reply);
        }

        terminal.draw(|frame| draw::draw(frame, state))?;

        if state.quit {
            break;
        }

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                keys::handle_key(key, state);
            }
        }
    }

    Ok(())
}
