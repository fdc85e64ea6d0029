//! The host region overlays are inserted into.
//!
//! A [`ContainerView`] keeps an explicit handle to its current overlay instead of searching
//! its children, plus the overlays that are still fading out after being replaced or hidden.
//! Each attached overlay gets a fresh [`OverlayId`]; a finished fade only ever touches the
//! overlay it was started for, so a stale fade-out can never detach a newer overlay.

use crate::animation::Fade;
use crate::config::OverlayConfig;
use crate::render::overlay::OverlayView;
use log::{debug, trace};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    widgets::Widget,
};
use std::time::Duration;

/// Identity of an overlay for as long as it is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(u64);

impl OverlayId {
    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
struct Attached {
    id: OverlayId,
    view: OverlayView,
    fade: Option<Fade>,
}

impl Attached {
    /// Step the running fade. Returns true once no fade is left.
    fn advance(&mut self, elapsed: Duration) -> bool {
        if let Some(fade) = &mut self.fade {
            let opacity = fade.advance(elapsed);
            self.view.set_opacity(opacity);
            if fade.is_finished() {
                self.fade = None;
            }
        }
        self.fade.is_none()
    }
}

/// Region of a screen that can host one empty-state overlay.
#[derive(Debug, Default)]
pub struct ContainerView {
    config: OverlayConfig,
    current: Option<Attached>,
    dismissing: Vec<Attached>,
    next_id: u64,
    last_area: Option<Rect>,
}

impl ContainerView {
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// The overlay currently presented, if any. Overlays that are fading out do not count.
    pub fn current_overlay(&self) -> Option<&OverlayView> {
        self.current.as_ref().map(|attached| &attached.view)
    }

    /// Mutable access to the current overlay, e.g. to restyle it while shown.
    pub fn current_overlay_mut(&mut self) -> Option<&mut OverlayView> {
        self.current.as_mut().map(|attached| &mut attached.view)
    }

    pub fn current_overlay_id(&self) -> Option<OverlayId> {
        self.current.as_ref().map(|attached| attached.id)
    }

    /// Every attached overlay in paint order: fading-out ones first, the current one last.
    pub fn overlays(&self) -> impl Iterator<Item = &OverlayView> {
        self.dismissing
            .iter()
            .chain(self.current.iter())
            .map(|attached| &attached.view)
    }

    pub fn child_count(&self) -> usize {
        self.dismissing.len() + usize::from(self.current.is_some())
    }

    /// True while any fade is still running.
    pub fn is_animating(&self) -> bool {
        !self.dismissing.is_empty()
            || self
                .current
                .as_ref()
                .is_some_and(|attached| attached.fade.is_some())
    }

    /// Attach `view` as the current overlay, fading it in from transparent. A previously
    /// current overlay starts fading out first.
    pub fn present(&mut self, mut view: OverlayView) -> OverlayId {
        self.dismiss_current();

        let id = OverlayId(self.next_id);
        self.next_id += 1;

        view.set_opacity(0.0);
        let fade = Fade::fade_in(self.config.fade_duration());
        debug!(
            "attaching overlay {} ({} elements, fade {:?})",
            id.get(),
            view.elements().len(),
            fade.duration()
        );
        self.current = Some(Attached {
            id,
            view,
            fade: Some(fade),
        });
        id
    }

    /// Start fading out the current overlay; it is detached once the fade completes.
    /// Returns false when nothing was presented.
    pub fn dismiss_current(&mut self) -> bool {
        let Some(mut attached) = self.current.take() else {
            trace!("no overlay to dismiss");
            return false;
        };

        let fade = Fade::fade_out(attached.view.opacity(), self.config.fade_duration());
        debug!("dismissing overlay {}", attached.id.get());
        attached.fade = Some(fade);
        self.dismissing.push(attached);
        true
    }

    /// Advance every running fade by `elapsed`. Finished fade-outs detach their overlay.
    pub fn advance(&mut self, elapsed: Duration) {
        if let Some(current) = &mut self.current {
            current.advance(elapsed);
        }
        self.dismissing.retain_mut(|attached| {
            if attached.advance(elapsed) {
                debug!("detached overlay {}", attached.id.get());
                false
            } else {
                true
            }
        });
    }

    /// Run every fade to completion.
    pub fn settle(&mut self) {
        self.advance(self.config.fade_duration());
    }

    /// Draw attached overlays over whatever the host already rendered into `area`.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let overlay_area = self.config.anchoring.resolve(area);
        self.last_area = Some(overlay_area);
        for view in self.overlays() {
            view.render(overlay_area, buf);
        }
    }

    /// Keyboard activation of the current overlay's action.
    /// Returns false when there is no visible overlay with an action.
    pub fn activate(&self) -> bool {
        match self.current_overlay() {
            Some(view) if view.is_visible() => view.activate(),
            _ => false,
        }
    }

    /// Mouse click at a terminal cell. Hits only the action label of the current overlay as
    /// laid out in the last render.
    pub fn handle_click(&self, column: u16, row: u16) -> bool {
        let (Some(view), Some(area)) = (self.current_overlay(), self.last_area) else {
            return false;
        };
        if !view.is_visible() || !view.layout(area).action_contains(Position::new(column, row)) {
            return false;
        }
        view.activate()
    }
}
