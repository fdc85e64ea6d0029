//! Rendering subsystem.
//!
//! Hosts the overlay widget, its styling, and the terminal setup used by the demo screen.

pub mod overlay;
pub mod terminal;
pub mod theme;

pub use overlay::{OverlayLayout, OverlayView, StackElement};
pub use terminal::TerminalUI;
pub use theme::EmptyStateTheme;

pub use ratatui::style::{Color, Style};
