//! TUI module - Terminal UI for interactive play

use crate::{
    Config, Result,
    game::{DoorChooser, Session},
};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use std::time::Duration;

pub mod app;
pub mod ui;

use app::App;

/// Run the TUI application
pub fn run<C: DoorChooser>(session: Session<C>, config: &Config) -> Result<()> {
    // Setup terminal
    enable_raw_mode().map_err(crate::Error::tui)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(crate::Error::tui)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(crate::Error::tui)?;

    // Create app and run
    let app = App::new(session, config.game.default_trials);
    let res = run_app(&mut terminal, app, config.tui.tick_rate());

    // Restore terminal
    disable_raw_mode().map_err(crate::Error::tui)?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .map_err(crate::Error::tui)?;
    terminal.show_cursor().map_err(crate::Error::tui)?;

    res
}

fn run_app<B: Backend, C: DoorChooser>(
    terminal: &mut Terminal<B>,
    mut app: App<C>,
    tick_rate: Duration,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui::draw(f, &app))
            .map_err(crate::Error::tui)?;

        if event::poll(tick_rate).map_err(crate::Error::tui)?
            && let Event::Key(key) = event::read().map_err(crate::Error::tui)?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }

        if app.should_quit {
            tracing::info!(
                "Leaving TUI after {} recorded trials",
                app.session.stats().trials
            );
            return Ok(());
        }
    }
}
