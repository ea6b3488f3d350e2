// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` is an interactive toast notification stack for the Iced GUI
//! toolkit.
//!
//! Toasts pile up in a compact overlapping stack at the bottom of the host
//! view. Tapping the stack expands it into a full vertical list over a dimmed
//! backdrop; dragging a toast toward the leading edge dismisses it, with a
//! velocity-aware threshold so a quick flick works even over a short distance.
//!
//! The crate separates the interaction state machine ([`toasts`]) from its
//! rendering ([`toasts::overlay`]) and ships a small demo application
//! ([`app`]) showing how a host wires both together.

#![doc(html_root_url = "https://docs.rs/iced_toasts/0.2.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod toasts;
pub mod ui;
