// SPDX-License-Identifier: MPL-2.0
//! Interactive toast stack: state machine and rendering.
//!
//! # Components
//!
//! - [`item`] - `Toast` record with its opaque payload and transient drag state
//! - [`stack`] - `Stack` container with append/dismiss semantics and the
//!   message-driven update entrypoint
//! - [`layout`] - pure depth-to-transform functions for collapsed rendering
//! - [`gesture`] - drag clamping, the velocity-projected release decision, and
//!   the `DragSession` tracker a host feeds with raw cursor positions
//! - [`expansion`] - collapsed/expanded toggle with forced collapse on empty
//! - [`overlay`] - Iced view function rendering the stack over the host view
//!
//! # Usage
//!
//! ```ignore
//! use iced_toasts::toasts::{self, Stack, Toast};
//!
//! let mut stack: Stack<String> = Stack::new();
//!
//! // The factory receives the generated id, so the payload can embed a
//! // self-dismiss affordance.
//! stack.push(Toast::new(|id| format!("toast {id}")));
//!
//! // In update(), route toast messages into the stack:
//! let event = stack.update(toasts::Message::StackPressed);
//!
//! // In view(), render the overlay:
//! let overlay = toasts::overlay::view(&stack, |toast| render_card(toast));
//! ```
//!
//! The stack never interprets payload contents; rendering belongs to the host
//! through the closure passed to [`overlay::view`].

pub mod expansion;
pub mod gesture;
pub mod item;
pub mod layout;
pub mod overlay;
pub mod stack;

pub use expansion::Expansion;
pub use gesture::{DragSession, ReleaseOutcome};
pub use item::{Toast, ToastId};
pub use stack::{Event, Message, Stack};
