//! The empty-state overlay widget.
//!
//! An [`OverlayView`] renders its model as a vertically centered stack: image, then message,
//! then the action button. Elements without content are left out of the stack entirely.

use crate::config::{OverlayConfig, DEFAULT_SPACING};
use crate::model::EmptyStateModel;
use crate::render::theme::EmptyStateTheme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Clear, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Below this opacity an overlay is neither drawn nor interactive.
pub const MIN_VISIBLE_OPACITY: f32 = 0.01;

/// One entry of the overlay's vertical stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackElement {
    Image,
    Message,
    Action,
}

/// Where each stacked element lands for a given overlay area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayLayout {
    /// Bounding box of the whole stack
    pub stack: Rect,
    pub image: Option<Rect>,
    pub message: Option<Rect>,
    /// Just the label, so clicks beside it miss
    pub action: Option<Rect>,
}

impl OverlayLayout {
    pub fn element_count(&self) -> usize {
        [self.image, self.message, self.action]
            .iter()
            .filter(|rect| rect.is_some())
            .count()
    }

    pub fn action_contains(&self, position: Position) -> bool {
        self.action.is_some_and(|rect| rect.contains(position))
    }
}

/// Transient view built from an [`EmptyStateModel`].
///
/// Style setters can be called at any time after construction; they take effect on the next
/// render. The model itself never changes once the overlay is built.
#[derive(Debug)]
pub struct OverlayView {
    model: EmptyStateModel,
    theme: EmptyStateTheme,
    spacing: u16,
    horizontal_inset: u16,
    opacity: f32,
}

impl OverlayView {
    /// Overlay with the default theme, no background and no side inset.
    pub fn new(model: EmptyStateModel) -> Self {
        Self {
            model,
            theme: EmptyStateTheme::default().without_background(),
            spacing: DEFAULT_SPACING,
            horizontal_inset: 0,
            opacity: 1.0,
        }
    }

    /// Overlay styled and spaced the way `config` asks for.
    pub fn with_config(model: EmptyStateModel, config: &OverlayConfig) -> Self {
        Self {
            model,
            theme: config.theme(),
            spacing: config.spacing,
            horizontal_inset: config.effective_inset(),
            opacity: 1.0,
        }
    }

    pub fn model(&self) -> &EmptyStateModel {
        &self.model
    }

    pub fn theme(&self) -> &EmptyStateTheme {
        &self.theme
    }

    pub fn image_tint(&self) -> Color {
        self.theme.image_tint
    }

    pub fn set_image_tint(&mut self, color: Color) {
        self.theme.image_tint = color;
    }

    pub fn message_style(&self) -> Style {
        self.theme.message_style
    }

    pub fn set_message_style(&mut self, style: Style) {
        self.theme.message_style = style;
    }

    pub fn message_color(&self) -> Color {
        self.theme.message_color
    }

    pub fn set_message_color(&mut self, color: Color) {
        self.theme.message_color = color;
    }

    pub fn action_style(&self) -> Style {
        self.theme.action_style
    }

    pub fn set_action_style(&mut self, style: Style) {
        self.theme.action_style = style;
    }

    pub fn action_color(&self) -> Color {
        self.theme.action_color
    }

    pub fn set_action_color(&mut self, color: Color) {
        self.theme.action_color = color;
    }

    pub fn background(&self) -> Option<Color> {
        self.theme.background
    }

    pub fn set_background(&mut self, color: Option<Color>) {
        self.theme.background = color;
    }

    pub fn spacing(&self) -> u16 {
        self.spacing
    }

    pub fn set_spacing(&mut self, rows: u16) {
        self.spacing = rows;
    }

    pub fn horizontal_inset(&self) -> u16 {
        self.horizontal_inset
    }

    pub fn set_horizontal_inset(&mut self, cells: u16) {
        self.horizontal_inset = cells;
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub(crate) fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    pub fn is_visible(&self) -> bool {
        self.opacity >= MIN_VISIBLE_OPACITY
    }

    /// Elements that will be stacked, in display order.
    pub fn elements(&self) -> Vec<StackElement> {
        let mut elements = Vec::with_capacity(3);
        if self.model.image().is_some_and(|image| !image.is_empty()) {
            elements.push(StackElement::Image);
        }
        if self.model.message().is_some_and(|message| !message.is_empty()) {
            elements.push(StackElement::Message);
        }
        if self.model.action().is_some_and(|action| !action.title().is_empty()) {
            elements.push(StackElement::Action);
        }
        elements
    }

    /// Run the action's handler. Returns false when the overlay has no action button.
    pub fn activate(&self) -> bool {
        if !self.elements().contains(&StackElement::Action) {
            return false;
        }
        if let Some(action) = self.model.action() {
            action.invoke();
        }
        true
    }

    /// Message text wrapped to `width` columns.
    pub fn message_lines(&self, width: u16) -> Vec<String> {
        self.model
            .message()
            .map(|message| wrap_message(message, width))
            .unwrap_or_default()
    }

    /// Place the stack inside `area`.
    pub fn layout(&self, area: Rect) -> OverlayLayout {
        let inset = self.horizontal_inset.min(area.width / 2);
        let inner = Rect::new(
            area.x + inset,
            area.y,
            area.width - inset * 2,
            area.height,
        );

        let elements = self.elements();
        let heights: Vec<u16> = elements
            .iter()
            .map(|element| self.element_height(*element, inner.width))
            .collect();
        let gaps = u16::try_from(elements.len().saturating_sub(1)).unwrap_or(0);
        let total = heights
            .iter()
            .fold(self.spacing.saturating_mul(gaps), |acc, h| {
                acc.saturating_add(*h)
            });

        let stack_height = total.min(inner.height);
        let stack = Rect::new(
            inner.x,
            inner.y + (inner.height - stack_height) / 2,
            inner.width,
            stack_height,
        );

        let mut layout = OverlayLayout {
            stack,
            ..OverlayLayout::default()
        };
        let bottom = stack.bottom();
        let mut y = stack.y;
        for (index, (element, height)) in elements.iter().zip(heights).enumerate() {
            if index > 0 {
                y = y.saturating_add(self.spacing).min(bottom);
            }
            let height = height.min(bottom - y);
            let rect = match element {
                StackElement::Action => {
                    let label = self.model.action().map_or(0, |action| action.title().width());
                    let width = u16::try_from(label).unwrap_or(u16::MAX).min(inner.width);
                    Rect::new(inner.x + (inner.width - width) / 2, y, width, height)
                }
                _ => Rect::new(inner.x, y, inner.width, height),
            };
            match element {
                StackElement::Image => layout.image = Some(rect),
                StackElement::Message => layout.message = Some(rect),
                StackElement::Action => layout.action = Some(rect),
            }
            y += height;
        }
        layout
    }

    fn element_height(&self, element: StackElement, width: u16) -> u16 {
        match element {
            StackElement::Image => self.model.image().map_or(0, |image| image.height()),
            StackElement::Message => {
                u16::try_from(self.message_lines(width).len()).unwrap_or(u16::MAX)
            }
            StackElement::Action => 1,
        }
    }

    fn faded(&self, style: Style) -> Style {
        if self.opacity < 1.0 {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        }
    }
}

impl Widget for &OverlayView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if !self.is_visible() || area.is_empty() {
            return;
        }

        if let Some(background) = self.theme.background {
            Clear.render(area, buf);
            buf.set_style(area, self.faded(Style::default().bg(background)));
        }

        let layout = self.layout(area);

        if let (Some(rect), Some(image)) = (layout.image, self.model.image()) {
            let rows: Vec<Line> = image.rows().iter().map(|row| Line::raw(row.as_str())).collect();
            Paragraph::new(rows)
                .style(self.faded(self.theme.image()))
                .alignment(Alignment::Center)
                .render(rect, buf);
        }

        if let Some(rect) = layout.message {
            let lines: Vec<Line> = self
                .message_lines(rect.width)
                .into_iter()
                .map(Line::from)
                .collect();
            Paragraph::new(lines)
                .style(self.faded(self.theme.message()))
                .alignment(Alignment::Center)
                .render(rect, buf);
        }

        if let (Some(rect), Some(action)) = (layout.action, self.model.action()) {
            if !rect.is_empty() {
                buf.set_stringn(
                    rect.x,
                    rect.y,
                    action.title(),
                    usize::from(rect.width),
                    self.faded(self.theme.action()),
                );
            }
        }
    }
}

/// Greedy word wrap by display width. Explicit newlines start new lines and words wider than
/// `width` are split.
fn wrap_message(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width);
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            if word_width > width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                current_width = 0;
                for ch in word.chars() {
                    let ch_width = ch.width().unwrap_or(0);
                    if current_width + ch_width > width && !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(ch);
                    current_width += ch_width;
                }
                continue;
            }

            let needed = if current.is_empty() {
                word_width
            } else {
                current_width + 1 + word_width
            };
            if needed > width {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_width;
            } else {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                current_width = needed;
            }
        }
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Anchoring;
    use crate::model::{EmptyStateAction, EmptyStateModel};
    use std::cell::Cell;
    use std::rc::Rc;

    fn rows(buf: &Buffer) -> Vec<String> {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn full_model() -> EmptyStateModel {
        EmptyStateModel::default()
            .with_image("[ ]")
            .with_message("Nothing here")
            .with_action(EmptyStateAction::without_handler("Add"))
    }

    #[test]
    fn test_elements_follow_model() {
        let overlay = OverlayView::new(full_model());
        assert_eq!(
            overlay.elements(),
            vec![
                StackElement::Image,
                StackElement::Message,
                StackElement::Action
            ]
        );

        let message_only = OverlayView::new(EmptyStateModel::default().with_message("Hi"));
        assert_eq!(message_only.elements(), vec![StackElement::Message]);

        let blank_fields = OverlayView::new(
            EmptyStateModel::default()
                .with_message("")
                .with_action(EmptyStateAction::without_handler("")),
        );
        assert!(blank_fields.elements().is_empty());
    }

    #[test]
    fn test_empty_model_builds_and_renders() {
        let overlay = OverlayView::new(EmptyStateModel::default());
        let area = Rect::new(0, 0, 20, 5);
        let layout = overlay.layout(area);
        assert_eq!(layout.element_count(), 0);
        assert_eq!(layout.stack.height, 0);

        let mut buf = Buffer::empty(area);
        (&overlay).render(area, &mut buf);
        assert!(rows(&buf).iter().all(|row| row.trim().is_empty()));
        assert!(!overlay.activate());
    }

    #[test]
    fn test_layout_centers_stack() {
        let overlay = OverlayView::new(full_model());
        let layout = overlay.layout(Rect::new(0, 0, 40, 11));

        assert_eq!(layout.stack, Rect::new(0, 3, 40, 5));
        assert_eq!(layout.image, Some(Rect::new(0, 3, 40, 1)));
        assert_eq!(layout.message, Some(Rect::new(0, 5, 40, 1)));
        assert_eq!(layout.action, Some(Rect::new(18, 7, 3, 1)));
        assert!(layout.action_contains(Position::new(19, 7)));
        assert!(!layout.action_contains(Position::new(10, 7)));
    }

    #[test]
    fn test_layout_applies_inset_and_spacing() {
        let mut overlay = OverlayView::new(full_model());
        overlay.set_horizontal_inset(2);
        overlay.set_spacing(0);
        let layout = overlay.layout(Rect::new(0, 0, 20, 9));

        assert_eq!(layout.stack, Rect::new(2, 3, 16, 3));
        assert_eq!(layout.message.map(|r| r.y), Some(4));
        assert_eq!(layout.action.map(|r| r.y), Some(5));
    }

    #[test]
    fn test_layout_clips_to_small_area() {
        let overlay = OverlayView::new(full_model());
        let layout = overlay.layout(Rect::new(0, 0, 40, 2));
        assert_eq!(layout.stack.height, 2);
        assert_eq!(layout.action.map(|r| r.height), Some(0));
    }

    #[test]
    fn test_render_draws_elements() {
        let overlay = OverlayView::new(full_model());
        let area = Rect::new(0, 0, 30, 7);
        let mut buf = Buffer::empty(area);
        (&overlay).render(area, &mut buf);

        let rendered = rows(&buf);
        assert!(rendered[1].contains("[ ]"));
        assert!(rendered[3].contains("Nothing here"));
        assert!(rendered[5].contains("Add"));
        assert_eq!(buf[(13, 5)].fg, Color::Cyan);
    }

    #[test]
    fn test_render_respects_style_overrides() {
        let mut overlay = OverlayView::new(full_model());
        overlay.set_message_color(Color::Magenta);
        overlay.set_action_color(Color::Green);
        overlay.set_image_tint(Color::Red);
        overlay.set_background(Some(Color::Blue));

        let area = Rect::new(0, 0, 30, 7);
        let mut buf = Buffer::empty(area);
        (&overlay).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].bg, Color::Blue);
        assert_eq!(buf[(14, 1)].fg, Color::Red);
        assert_eq!(buf[(9, 3)].fg, Color::Magenta);
        assert_eq!(buf[(13, 5)].fg, Color::Green);
    }

    #[test]
    fn test_transparent_overlay_draws_nothing() {
        let mut overlay = OverlayView::new(full_model());
        overlay.set_opacity(0.0);
        let area = Rect::new(0, 0, 30, 7);
        let mut buf = Buffer::empty(area);
        (&overlay).render(area, &mut buf);
        assert!(rows(&buf).iter().all(|row| row.trim().is_empty()));

        overlay.set_opacity(0.5);
        (&overlay).render(area, &mut buf);
        assert!(buf[(13, 5)].modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_with_config_uses_anchoring_defaults() {
        let guided = OverlayConfig::default()
            .with_anchoring(Anchoring::ContentGuides { top: 1, bottom: 1 });
        let overlay = OverlayView::with_config(full_model(), &guided);
        assert_eq!(overlay.horizontal_inset(), 2);
        assert_eq!(overlay.background(), Some(Color::Black));

        let plain = OverlayView::with_config(full_model(), &OverlayConfig::default());
        assert_eq!(plain.horizontal_inset(), 0);
        assert_eq!(plain.background(), None);
    }

    #[test]
    fn test_activate_invokes_handler_once() {
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let overlay = OverlayView::new(
            EmptyStateModel::default()
                .with_action(EmptyStateAction::new("Retry", move || counter.set(counter.get() + 1))),
        );

        assert!(overlay.activate());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_wrap_message() {
        assert_eq!(
            wrap_message("no items have been added yet", 12),
            vec!["no items", "have been", "added yet"]
        );
        assert_eq!(wrap_message("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap_message("one\ntwo", 20), vec!["one", "two"]);
        assert!(wrap_message("anything", 0).is_empty());
    }
}
