// SPDX-License-Identifier: MPL-2.0
//! Centralized styling for the toast UI.
//!
//! Style functions for the toast card, the dismiss button, and the backdrop
//! scrim shown behind the expanded stack.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::{button, container};
use iced::{Color, Theme};

/// Style for a toast card: pill-shaped surface with a soft shadow.
#[must_use]
pub fn toast_card(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::SURFACE,
            ..base.color
        })),
        border: iced::Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            },
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        shadow: shadow::SM,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style for the dimmed backdrop behind the expanded stack.
#[must_use]
pub fn backdrop_scrim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::SCRIM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Style function for the dismiss button on a toast card.
#[must_use]
pub fn dismiss_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Style for the toolbar "show" button in the demo host.
#[must_use]
pub fn toolbar_button(_theme: &Theme, status: button::Status) -> button::Style {
    let accent = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        button::Status::Pressed => palette::PRIMARY_600,
        button::Status::Active | button::Status::Disabled => palette::PRIMARY_500,
    };

    button::Style {
        background: Some(iced::Background::Color(accent)),
        text_color: palette::WHITE,
        border: iced::Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
