// SPDX-License-Identifier: MPL-2.0
//! Shared UI infrastructure.
//!
//! - [`design_tokens`] - design system constants (colors, spacing, sizing)
//! - [`styles`] - centralized style functions (cards, buttons, scrim)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod styles;
pub mod theming;
