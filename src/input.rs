//! Terminal input for the demo screen.
//!
//! Translates crossterm events into the handful of actions the list screen understands.
//! Modules outside this crate should import from `crate::input` rather than matching on
//! crossterm events themselves.

use crate::error::Result;
use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use std::time::Duration;

/// High-level actions emitted for the demo screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    AddItem,
    RemoveItem,
    /// Keyboard press of the empty-state action button
    Activate,
    /// Left click at a terminal cell
    Click {
        column: u16,
        row: u16,
    },
    Resize {
        width: u16,
        height: u16,
    },
    Quit,
}

fn map_key(key: KeyEvent) -> Option<InputAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(InputAction::Quit),
        (_, modifiers) if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => None,
        (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => Some(InputAction::Quit),
        (KeyCode::Char('a'), _) | (KeyCode::Char('+'), _) => Some(InputAction::AddItem),
        (KeyCode::Char('d'), _) | (KeyCode::Char('-'), _) | (KeyCode::Delete, _) => {
            Some(InputAction::RemoveItem)
        }
        (KeyCode::Enter, _) | (KeyCode::Char(' '), _) => Some(InputAction::Activate),
        _ => None,
    }
}

/// Map a terminal event to an action, if it means anything to the demo.
pub fn map_event(event: &Event) -> Option<InputAction> {
    match event {
        Event::Key(key) => map_key(*key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(InputAction::Click {
                column: mouse.column,
                row: mouse.row,
            }),
            _ => None,
        },
        Event::Resize(width, height) => Some(InputAction::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

/// Wait up to `timeout` for the next meaningful action.
pub fn poll_action(timeout: Duration) -> Result<Option<InputAction>> {
    if event::poll(timeout)? {
        let event = event::read()?;
        return Ok(map_event(&event));
    }
    Ok(None)
}
