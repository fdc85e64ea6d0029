//! Overlay configuration.
//!
//! Covers the knobs that differ between host screens: how the overlay is anchored inside its
//! container, spacing between stacked elements, fade timing, and which style preset to start
//! from. With the `config` feature enabled the same structure can be read from a TOML file.

use crate::render::theme::EmptyStateTheme;
use ratatui::layout::Rect;
use std::time::Duration;

#[cfg(feature = "config")]
use crate::error::{EmptyStateError, Result};
#[cfg(feature = "config")]
use std::path::{Path, PathBuf};

/// Rows between stacked elements.
pub const DEFAULT_SPACING: u16 = 1;

/// Side inset used when the overlay is pinned to content guides.
pub const CONTENT_GUIDES_INSET: u16 = 2;

/// Upper bound accepted for `fade_duration_ms`.
pub const MAX_FADE_DURATION_MS: u64 = 10_000;

/// Where an overlay is pinned inside its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case", tag = "mode"))]
pub enum Anchoring {
    /// Fill the container edge to edge, no background, no side inset.
    #[default]
    FullBounds,
    /// Stay between a reserved header (`top` rows) and footer (`bottom` rows), with a side
    /// inset and the theme background.
    ContentGuides { top: u16, bottom: u16 },
}

impl Anchoring {
    /// Area the overlay occupies inside `container`.
    pub fn resolve(self, container: Rect) -> Rect {
        match self {
            Anchoring::FullBounds => container,
            Anchoring::ContentGuides { top, bottom } => {
                let top = top.min(container.height);
                let height = container.height.saturating_sub(top).saturating_sub(bottom);
                Rect::new(container.x, container.y + top, container.width, height)
            }
        }
    }

    pub fn uses_content_guides(self) -> bool {
        matches!(self, Anchoring::ContentGuides { .. })
    }
}

/// Named starting point for overlay styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum ThemePreset {
    #[default]
    Default,
    Monochrome,
    HighContrast,
}

impl ThemePreset {
    pub fn theme(self) -> EmptyStateTheme {
        match self {
            ThemePreset::Default => EmptyStateTheme::default(),
            ThemePreset::Monochrome => EmptyStateTheme::monochrome(),
            ThemePreset::HighContrast => EmptyStateTheme::high_contrast(),
        }
    }
}

/// Settings a container applies to the overlays it builds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "config", serde(default, deny_unknown_fields))]
pub struct OverlayConfig {
    pub anchoring: Anchoring,
    pub spacing: u16,
    /// Side inset in cells. `None` picks the anchoring's default.
    pub horizontal_inset: Option<u16>,
    pub fade_duration_ms: u64,
    pub theme: ThemePreset,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            anchoring: Anchoring::FullBounds,
            spacing: DEFAULT_SPACING,
            horizontal_inset: None,
            fade_duration_ms: 300,
            theme: ThemePreset::Default,
        }
    }
}

impl OverlayConfig {
    pub fn with_anchoring(mut self, anchoring: Anchoring) -> Self {
        self.anchoring = anchoring;
        self
    }

    pub fn fade_duration(&self) -> Duration {
        Duration::from_millis(self.fade_duration_ms.min(MAX_FADE_DURATION_MS))
    }

    pub fn effective_inset(&self) -> u16 {
        self.horizontal_inset.unwrap_or(if self.anchoring.uses_content_guides() {
            CONTENT_GUIDES_INSET
        } else {
            0
        })
    }

    /// Theme for overlays built under this configuration. Only the content-guides variant
    /// paints a background.
    pub fn theme(&self) -> EmptyStateTheme {
        let theme = self.theme.theme();
        if self.anchoring.uses_content_guides() {
            theme
        } else {
            theme.without_background()
        }
    }

    #[cfg(feature = "config")]
    fn validate(self, path: &Path) -> Result<Self> {
        if self.fade_duration_ms > MAX_FADE_DURATION_MS {
            return Err(EmptyStateError::config(
                path,
                format!(
                    "fade_duration_ms must be at most {MAX_FADE_DURATION_MS}, got {}",
                    self.fade_duration_ms
                ),
            ));
        }
        Ok(self)
    }

    /// Parse configuration from TOML text. `origin` is only used in error messages.
    #[cfg(feature = "config")]
    pub fn from_toml_str(text: &str, origin: impl AsRef<Path>) -> Result<Self> {
        let origin = origin.as_ref();
        let config: Self =
            toml::from_str(text).map_err(|e| EmptyStateError::config(origin, e.to_string()))?;
        config.validate(origin)
    }

    #[cfg(feature = "config")]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            EmptyStateError::io(format!("reading {}", path.display()), e)
        })?;
        Self::from_toml_str(&text, path)
    }

    /// `<config dir>/emptystate/config.toml`, when the platform has a config dir.
    #[cfg(feature = "config")]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("emptystate").join("config.toml"))
    }

    /// Load the default config file if it exists, otherwise fall back to defaults.
    #[cfg(feature = "config")]
    pub fn load_or_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }
}
