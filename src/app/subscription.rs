// SPDX-License-Identifier: MPL-2.0
//! Event subscription for the demo host.
//!
//! Drag tracking needs the raw cursor stream: the grab press itself carries
//! no position, and during a drag the pointer may leave the card's bounds.
//! Mouse events are routed whenever toasts exist; everything else stays with
//! the widgets.

use super::{App, Message};
use iced::{event, mouse, Subscription};

pub fn subscription(app: &App) -> Subscription<Message> {
    if app.stack.is_empty() {
        return Subscription::none();
    }

    event::listen_with(|event, _status, _window| match &event {
        iced::Event::Mouse(
            mouse::Event::CursorMoved { .. }
            | mouse::Event::ButtonReleased(mouse::Button::Left)
            | mouse::Event::CursorLeft,
        ) => Some(Message::RawEvent(event)),
        _ => None,
    })
}
