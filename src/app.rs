//! Demo application: a list screen that adopts the empty-state presenter.
//!
//! The screen starts with no items and shows an empty state offering to add one. Items can be
//! added and removed from the keyboard; the overlay follows the item count through
//! `notify_data_changed`.

pub mod runtime;

use crate::config::OverlayConfig;
use crate::container::ContainerView;
use crate::error::Result;
use crate::input::InputAction;
use crate::model::{EmptyStateAction, EmptyStateImage, EmptyStateModel};
use crate::presenter::EmptyStatePresenter;
use crate::render::terminal::TerminalUI;
use log::{debug, info};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{List, Paragraph, Widget},
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, UnboundedSender};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

const INBOX_ART: &str = r" ________
|        |
|  ____  |
|_|    |_|";

/// A list of items with an empty state.
pub struct ListScreen {
    items: Vec<String>,
    next_item: usize,
    container: ContainerView,
    actions: UnboundedSender<InputAction>,
}

impl ListScreen {
    /// `actions` receives an `AddItem` whenever the empty-state button is pressed.
    pub fn new(config: OverlayConfig, actions: UnboundedSender<InputAction>) -> Self {
        Self {
            items: Vec::new(),
            next_item: 1,
            container: ContainerView::new(config),
            actions,
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn container(&self) -> &ContainerView {
        &self.container
    }

    pub fn add_item(&mut self) {
        self.items.push(format!("Item {}", self.next_item));
        self.next_item += 1;
        self.notify_data_changed();
    }

    pub fn remove_item(&mut self) {
        if self.items.pop().is_some() {
            self.notify_data_changed();
        }
    }

    /// Draw header, items and key hints, then the overlay on top.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        Paragraph::new(Line::from(format!("Items ({})", self.items.len())))
            .style(Style::default().add_modifier(Modifier::BOLD))
            .render(header, buf);

        List::new(self.items.iter().map(|item| format!("  {item}"))).render(body, buf);

        Paragraph::new("a add | d remove | enter activate | q quit")
            .style(Style::default().fg(Color::White).bg(Color::Blue))
            .render(footer, buf);

        self.container.render(area, buf);
    }
}

impl EmptyStatePresenter for ListScreen {
    fn number_of_items(&self) -> usize {
        self.items.len()
    }

    fn empty_state(&self) -> EmptyStateModel {
        let actions = self.actions.clone();
        EmptyStateModel::default()
            .with_image(EmptyStateImage::new(INBOX_ART))
            .with_message("Nothing here yet. Items you add will show up in this list.")
            .with_action(EmptyStateAction::new("Add an item", move || {
                let _ = actions.send(InputAction::AddItem);
            }))
    }

    fn container_view(&mut self) -> &mut ContainerView {
        &mut self.container
    }
}

/// Optional timed show/hide, for watching the fades without touching the keyboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Schedule {
    pub show_after: Option<Duration>,
    pub hide_after: Option<Duration>,
}

impl Schedule {
    pub fn is_empty(&self) -> bool {
        self.show_after.is_none() && self.hide_after.is_none()
    }
}

/// Event loop wiring the list screen to the terminal.
pub struct Application {
    screen: ListScreen,
    schedule: Schedule,
    elapsed: Duration,
    actions: mpsc::UnboundedReceiver<InputAction>,
    sender: UnboundedSender<InputAction>,
}

impl Application {
    pub fn new(config: OverlayConfig, schedule: Schedule) -> Self {
        let (sender, actions) = mpsc::unbounded_channel();
        let mut screen = ListScreen::new(config, sender.clone());
        if schedule.is_empty() {
            screen.notify_data_changed();
        }
        Self {
            screen,
            schedule,
            elapsed: Duration::ZERO,
            actions,
            sender,
        }
    }

    pub fn screen(&self) -> &ListScreen {
        &self.screen
    }

    /// Apply one action. Returns false when the application should quit.
    pub fn handle_action(&mut self, action: InputAction) -> bool {
        debug!("handling {:?}", action);
        match action {
            InputAction::Quit => return false,
            InputAction::AddItem => self.screen.add_item(),
            InputAction::RemoveItem => self.screen.remove_item(),
            InputAction::Activate => {
                self.screen.container.activate();
            }
            InputAction::Click { column, row } => {
                self.screen.container.handle_click(column, row);
            }
            InputAction::Resize { .. } => {}
        }
        true
    }

    /// Drain actions queued by button handlers. Returns false when one of them asked to quit.
    pub fn drain_pending(&mut self) -> bool {
        while let Ok(action) = self.actions.try_recv() {
            if !self.handle_action(action) {
                return false;
            }
        }
        true
    }

    /// Advance animations and fire scheduled show/hide calls.
    pub fn tick(&mut self, elapsed: Duration) {
        self.screen.container.advance(elapsed);
        self.elapsed += elapsed;

        if let Some(at) = self.schedule.show_after {
            if self.elapsed >= at {
                self.schedule.show_after = None;
                let model = self.screen.empty_state();
                self.screen.show_empty_state(model);
            }
        }
        if let Some(at) = self.schedule.hide_after {
            if self.elapsed >= at {
                self.schedule.hide_after = None;
                let model = self.screen.empty_state();
                self.screen.hide_empty_state(&model);
            }
        }
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        self.screen.render(area, buf);
    }

    /// Run until the user quits.
    pub async fn run(&mut self, ui: &mut TerminalUI) -> Result<()> {
        ui.initialize()?;

        let shutdown = Arc::new(AtomicBool::new(false));
        let input_thread = runtime::spawn_input_thread(
            self.sender.clone(),
            Arc::clone(&shutdown),
            INPUT_POLL_INTERVAL,
        );
        info!("demo started");

        let mut frames = tokio::time::interval(FRAME_INTERVAL);
        let mut last_frame = Instant::now();
        let mut running = true;
        while running {
            frames.tick().await;
            running = self.drain_pending();

            let now = Instant::now();
            self.tick(now - last_frame);
            last_frame = now;

            ui.draw(|frame| {
                let area = frame.area();
                self.render(area, frame.buffer_mut());
            })?;
        }

        shutdown.store(true, Ordering::SeqCst);
        let _ = input_thread.join();
        ui.cleanup()?;
        info!("demo finished");
        Ok(())
    }
}
