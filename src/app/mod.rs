// SPDX-License-Identifier: MPL-2.0
//! Demo host application for the toast stack.
//!
//! A minimal screen with a toolbar *show* button over a few placeholder list
//! rows, with the toast overlay layered on top. The app owns the gesture
//! plumbing the library cannot: it tracks the cursor, runs one
//! [`DragSession`](crate::toasts::DragSession) at a time, and feeds the
//! resulting translation/velocity into the stack.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::toasts::{DragSession, Stack};
use crate::ui::theming::ThemeMode;
use iced::{Element, Point, Subscription, Task, Theme};

/// Payload rendered inside each demo toast card.
#[derive(Debug, Clone)]
pub struct SampleToast {
    pub message: String,
}

/// Root application state for the demo host.
pub struct App {
    pub(crate) stack: Stack<SampleToast>,
    /// The single in-flight drag gesture, if any.
    pub(crate) drag: Option<DragSession>,
    /// Last known cursor position, needed when a card is grabbed.
    pub(crate) cursor_position: Option<Point>,
    pub(crate) theme_mode: ThemeMode,
    /// Running count used to label sample toasts.
    pub(crate) shown: usize,
}

impl App {
    /// Builds the initial state from CLI flags, falling back to the persisted
    /// configuration for anything the flags leave unset.
    pub fn boot(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let theme_mode = flags.theme.or(config.theme).unwrap_or_default();

        (
            Self {
                stack: Stack::new(),
                drag: None,
                cursor_position: None,
                theme_mode,
                shown: 0,
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }
}
