mod app;
mod input;
mod ui;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use xylene_core::{LocationDirectory, StoredLocation};

pub use app::DialogApp;

use crate::error::XylError;

pub async fn run(
    directory: Arc<dyn LocationDirectory>,
    stored: StoredLocation,
) -> Result<(), XylError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Resolve the stored location (edit mode) and open the dialog
    let mut app = DialogApp::open(directory, stored).await;

    // Run event loop
    let result = run_loop(&mut terminal, &mut app).await;

    // Grab the bound payload before restoring the terminal
    let submitted = app.submitted.take();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Some(payload) = submitted {
        println!("{}", serde_json::to_string(&payload)?);
    }

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut DialogApp,
) -> Result<(), XylError> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Poll for events with timeout to allow checking resolved lookups
        if event::poll(Duration::from_millis(50))? {
            let event = event::read()?;
            input::handle_event(app, event);
        }

        // Apply lookups that resolved since the last tick
        app.poll();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
