//! Terminal setup and the main event loop

use crate::config::Config;
use crate::logger::Logger;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{Component, EventHandler, EventType};
use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, Stdout};

/// Raw mode, alternate screen and mouse capture for the lifetime of the value.
///
/// Dropping the session restores the terminal, so an error anywhere in the
/// loop still releases the mouse subscription.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    mouse_capture: bool,
}

impl TerminalSession {
    pub fn enter(mouse_capture: bool) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        if mouse_capture {
            execute!(stdout, EnableMouseCapture).context("Failed to enable mouse capture")?;
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")?;
        Ok(Self {
            terminal,
            mouse_capture,
        })
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.mouse_capture {
            let _ = execute!(self.terminal.backend_mut(), DisableMouseCapture);
        }
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        let _ = self.terminal.show_cursor();
    }
}

/// Run the TUI application until the user quits
pub async fn run_app(config: &Config, logger: Logger) -> Result<()> {
    let mut session = TerminalSession::enter(config.ui.mouse_enabled)?;

    let mut app = AppComponent::new(&config.ui, logger);
    let mut event_handler = EventHandler::new(config.ui.tick_rate_ms);

    app.mount();
    let result = run_app_loop(session.terminal_mut(), &mut app, &mut event_handler).await;
    app.unmount();

    drop(session);
    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| {
                let area = f.area();
                app.render(f, area);
            })?;
            needs_render = false;
        }

        match event_handler.next_event().await? {
            EventType::Tick => {
                // Only the star field animates between state changes
                needs_render = app.is_dark_mode();
            }
            EventType::Other => {}
            event => {
                app.handle_event(event);
                needs_render = true;
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
