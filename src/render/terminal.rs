//! Terminal setup for the demo screen using ratatui
//!
//! Owns the crossterm backend: raw mode, the alternate screen and mouse capture. Drawing is
//! delegated to a closure so screens stay testable against ratatui's `TestBackend`.

use crate::error::{EmptyStateError, Result};
use log::debug;
use ratatui::crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io::{self, Stdout};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Terminal UI implementation with ratatui backend
pub struct TerminalUI {
    terminal: Option<CrosstermTerminal>,
}

impl TerminalUI {
    pub fn new() -> Self {
        Self { terminal: None }
    }

    pub fn is_initialized(&self) -> bool {
        self.terminal.is_some()
    }

    /// Enter raw mode and the alternate screen, with mouse capture for clicks
    pub fn initialize(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        self.terminal = Some(terminal);
        debug!("terminal initialized");

        Ok(())
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn cleanup(&mut self) -> Result<()> {
        if self.terminal.is_some() {
            disable_raw_mode()?;
            execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
            self.terminal = None;
            debug!("terminal restored");
        }
        Ok(())
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        let terminal = self
            .terminal
            .as_mut()
            .ok_or_else(|| EmptyStateError::ui("terminal used before initialize"))?;
        terminal.draw(render)?;
        Ok(())
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalUI {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
