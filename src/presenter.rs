//! Empty-state behavior for any screen that shows a collection.
//!
//! A screen implements the three required methods of [`EmptyStatePresenter`] and gets
//! show/hide logic for free. Call [`EmptyStatePresenter::notify_data_changed`] whenever the
//! item count may have changed.

use crate::container::{ContainerView, OverlayId};
use crate::model::EmptyStateModel;
use crate::render::overlay::OverlayView;
use log::trace;

pub trait EmptyStatePresenter {
    /// Number of items the screen currently displays.
    fn number_of_items(&self) -> usize;

    /// What to show when there are no items. May be computed on every call.
    fn empty_state(&self) -> EmptyStateModel;

    /// Region the overlay is inserted into.
    fn container_view(&mut self) -> &mut ContainerView;

    /// Show the empty state when there are no items, hide it otherwise.
    fn notify_data_changed(&mut self) {
        let model = self.empty_state();
        if self.number_of_items() == 0 {
            self.show_empty_state(model);
        } else {
            self.hide_empty_state(&model);
        }
    }

    /// Present an overlay for `model` unless an equal one is already shown.
    fn show_empty_state(&mut self, model: EmptyStateModel) -> OverlayId {
        let container = self.container_view();
        if let Some(id) = container.current_overlay_id() {
            if container.current_overlay().map(OverlayView::model) == Some(&model) {
                trace!("overlay {} already shows this empty state", id.get());
                return id;
            }
        }
        let overlay = OverlayView::with_config(model, container.config());
        self.show_overlay(overlay)
    }

    /// Present a pre-built overlay, replacing the current one.
    fn show_overlay(&mut self, overlay: OverlayView) -> OverlayId {
        self.container_view().present(overlay)
    }

    /// Hide the current overlay, but only if it was built from a model equal to `model`.
    fn hide_empty_state(&mut self, model: &EmptyStateModel) {
        let matches = self
            .container_view()
            .current_overlay()
            .map(|view| view.model() == model);
        match matches {
            Some(true) => self.hide_overlay(),
            Some(false) => trace!("current overlay shows a different empty state, leaving it"),
            None => trace!("no overlay to hide"),
        }
    }

    /// Hide whatever overlay is current. No-op when none is attached.
    fn hide_overlay(&mut self) {
        self.container_view().dismiss_current();
    }
}
