// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo host.

use crate::toasts;
use crate::ui::theming::ThemeMode;

/// Top-level messages consumed by `App::update`. Toast messages are forwarded
/// into the stack while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// A toast stack state change emitted by the overlay or the host.
    Toasts(toasts::Message),
    /// The toolbar button was pressed; append a sample toast.
    ShowToast,
    /// Raw runtime event routed by the subscription for drag tracking.
    RawEvent(iced::Event),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flags {
    /// Optional theme override (`light`, `dark`, or `system`).
    pub theme: Option<ThemeMode>,
}
