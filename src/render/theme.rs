//! Color and text styles for empty-state overlays using ratatui colors
//!
//! These are the neutral defaults an overlay starts with. Every value can be overridden on a
//! built overlay; the presets only pick a different starting point.

use ratatui::style::{Color, Modifier, Style};

/// Styles applied to the elements of an overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyStateTheme {
    /// Tint for the image glyphs
    pub image_tint: Color,

    /// Message text style (the "font": weight, italics)
    pub message_style: Style,

    /// Message text color
    pub message_color: Color,

    /// Action label style
    pub action_style: Style,

    /// Action label color
    pub action_color: Color,

    /// Fill behind the whole overlay (None leaves the container visible)
    pub background: Option<Color>,
}

impl Default for EmptyStateTheme {
    /// Muted gray image and message, action in the accent color
    fn default() -> Self {
        Self {
            image_tint: Color::Gray,
            message_style: Style::default().add_modifier(Modifier::ITALIC),
            message_color: Color::Gray,
            action_style: Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            action_color: Color::Cyan,
            background: Some(Color::Black),
        }
    }
}

impl EmptyStateTheme {
    /// Theme for terminals without color support
    pub fn monochrome() -> Self {
        Self {
            image_tint: Color::Reset,
            message_style: Style::default(),
            message_color: Color::Reset,
            action_style: Style::default().add_modifier(Modifier::REVERSED),
            action_color: Color::Reset,
            background: None,
        }
    }

    /// High-contrast theme for accessibility
    pub fn high_contrast() -> Self {
        Self {
            image_tint: Color::White,
            message_style: Style::default().add_modifier(Modifier::BOLD),
            message_color: Color::White,
            action_style: Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            action_color: Color::LightYellow,
            background: Some(Color::Black),
        }
    }

    pub fn without_background(mut self) -> Self {
        self.background = None;
        self
    }

    pub fn image(&self) -> Style {
        Style::default().fg(self.image_tint)
    }

    pub fn message(&self) -> Style {
        self.message_style.fg(self.message_color)
    }

    pub fn action(&self) -> Style {
        self.action_style.fg(self.action_color)
    }
}
