//! # emptystate - Empty-State Overlays for Terminal Screens
//!
//! Shows a placeholder (image, message and an optional action button) inside a screen when
//! the collection it displays has nothing to show, and removes it once content arrives.
//!
//! ## Architecture
//!
//! - [`model`] - Immutable values describing what to show
//! - [`render`] - The overlay widget, its theme, and terminal setup
//! - [`container`] - The host region overlays are attached to, with fade animations
//! - [`presenter`] - Trait a screen implements to gain show/hide behavior
//! - [`config`] - Anchoring, spacing and timing options
//! - [`app`] - Demo list screen and event loop
//!
//! ## Example
//!
//! ```
//! use emptystate::{ContainerView, EmptyStateModel, EmptyStatePresenter};
//!
//! struct Inbox {
//!     messages: Vec<String>,
//!     container: ContainerView,
//! }
//!
//! impl EmptyStatePresenter for Inbox {
//!     fn number_of_items(&self) -> usize {
//!         self.messages.len()
//!     }
//!
//!     fn empty_state(&self) -> EmptyStateModel {
//!         EmptyStateModel::default().with_message("Inbox zero")
//!     }
//!
//!     fn container_view(&mut self) -> &mut ContainerView {
//!         &mut self.container
//!     }
//! }
//!
//! let mut inbox = Inbox { messages: Vec::new(), container: ContainerView::default() };
//! inbox.notify_data_changed();
//! assert!(inbox.container.current_overlay().is_some());
//! ```

// Core modules
pub mod animation;
pub mod config;
pub mod error;
pub mod model;

// Presentation
pub mod container;
pub mod presenter;
pub mod render;

// Demo screen
pub mod app;
pub mod input;

// Re-export commonly used types for convenience
pub use error::{EmptyStateError, Result};

// Public API surface for external usage
pub use config::{Anchoring, OverlayConfig, ThemePreset};
pub use container::{ContainerView, OverlayId};
pub use model::{ActionHandler, EmptyStateAction, EmptyStateImage, EmptyStateModel};
pub use presenter::EmptyStatePresenter;
pub use render::{EmptyStateTheme, OverlayView};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
