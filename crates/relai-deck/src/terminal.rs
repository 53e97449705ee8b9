//! Terminal session
//!
//! Raw mode, the alternate screen and mouse capture are held by
//! `TerminalSession` and released when it is dropped.

use anyhow::{Context, Result};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io::{self, Stdout};

pub type DeckTerminal = Terminal<CrosstermBackend<Stdout>>;

pub struct TerminalSession {
    terminal: DeckTerminal,
    mouse: bool,
}

impl TerminalSession {
    /// Take over the terminal; `mouse` enables click reporting
    pub fn start(mouse: bool) -> Result<Self> {
        install_panic_hook(mouse);

        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        let entered = if mouse {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        } else {
            execute!(stdout, EnterAlternateScreen)
        };
        if let Err(e) = entered {
            restore(mouse);
            return Err(e).context("Failed to enter alternate screen");
        }

        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                restore(mouse);
                return Err(e).context("Failed to create terminal");
            }
        };

        Ok(Self { terminal, mouse })
    }

    pub fn terminal(&mut self) -> &mut DeckTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore(self.mouse);
        if let Err(e) = self.terminal.show_cursor() {
            log::warn!("Failed to show cursor: {}", e);
        }
    }
}

/// Best-effort terminal restore; failures are only logged
fn restore(mouse: bool) {
    if let Err(e) = disable_raw_mode() {
        log::warn!("Failed to disable raw mode: {}", e);
    }
    let mut stdout = io::stdout();
    let left = if mouse {
        execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)
    } else {
        execute!(stdout, LeaveAlternateScreen)
    };
    if let Err(e) = left {
        log::warn!("Failed to leave alternate screen: {}", e);
    }
}

/// Restore the terminal before the default hook prints the panic message
fn install_panic_hook(mouse: bool) {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore(mouse);
        log::error!("Panic: {}", info);
        default_hook(info);
    }));
}
