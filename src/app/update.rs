// SPDX-License-Identifier: MPL-2.0
//! Update logic for the demo host.
//!
//! Toast messages flow into `Stack::update`; raw mouse events feed the
//! active drag session, which is translated back into gesture messages for
//! the stack (live offset while dragging, commit-or-reset on release, and a
//! tap on the stack region when the pointer never really moved).

use super::{App, Message, SampleToast};
use crate::toasts::{self, DragSession, Toast};
use iced::mouse;
use std::time::Instant;

pub fn update(app: &mut App, message: Message) -> iced::Task<Message> {
    match message {
        Message::ShowToast => {
            app.shown += 1;
            let label = format!("Hello World #{}", app.shown);
            app.stack.push(Toast::new(|_id| SampleToast { message: label }));
            iced::Task::none()
        }
        Message::Toasts(message) => {
            apply(app, message);
            iced::Task::none()
        }
        Message::RawEvent(event) => {
            handle_raw_event(app, event);
            iced::Task::none()
        }
    }
}

/// Routes a toast message into the stack and reacts to the surfaced event.
fn apply(app: &mut App, message: toasts::Message) {
    if let Some(event) = app.stack.update(message) {
        match event {
            toasts::Event::Grabbed(id) => {
                if let Some(origin) = app.cursor_position {
                    app.drag = Some(DragSession::begin(id, origin));
                }
            }
            toasts::Event::Dismissed(id) => {
                // A release commit may race a self-dismiss button press; the
                // session for a departed toast is meaningless either way.
                if app.drag.as_ref().is_some_and(|session| session.id() == id) {
                    app.drag = None;
                }
            }
            toasts::Event::ExpansionToggled(_) => {}
        }
    }
}

fn handle_raw_event(app: &mut App, event: iced::Event) {
    let iced::Event::Mouse(mouse_event) = event else {
        return;
    };

    match mouse_event {
        mouse::Event::CursorMoved { position } => {
            app.cursor_position = Some(position);
            if let Some(session) = app.drag.as_mut() {
                let translation = session.movement(position, Instant::now());
                let id = session.id();
                apply(app, toasts::Message::DragChanged { id, translation });
            }
        }
        mouse::Event::ButtonReleased(mouse::Button::Left) => {
            if let Some(session) = app.drag.take() {
                let message = if session.is_tap() {
                    // A sub-slop wiggle still moved the card; settle it
                    // before the tap takes effect.
                    apply(
                        app,
                        toasts::Message::DragChanged {
                            id: session.id(),
                            translation: 0.0,
                        },
                    );
                    toasts::Message::StackPressed
                } else {
                    toasts::Message::DragEnded {
                        id: session.id(),
                        translation: session.translation(),
                        velocity: session.velocity(),
                    }
                };
                apply(app, message);
            }
        }
        mouse::Event::CursorLeft => {
            // Abandon the gesture and snap the card back.
            if let Some(session) = app.drag.take() {
                apply(
                    app,
                    toasts::Message::DragEnded {
                        id: session.id(),
                        translation: 0.0,
                        velocity: 0.0,
                    },
                );
            }
        }
        _ => {}
    }
}
