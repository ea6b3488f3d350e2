// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo host.
//!
//! A toolbar with a *show* button over placeholder list rows, with the toast
//! overlay layered on top of the whole screen.

use super::{App, Message, SampleToast};
use crate::toasts::{self, Toast};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row, Space, Stack as Layers, Text};
use iced::{alignment, Element, Length, Theme};

pub fn view(app: &App) -> Element<'_, Message> {
    let toolbar = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new("Toasts").size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(
            button(text("Show").size(typography::BODY))
                .on_press(Message::ShowToast)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::toolbar_button),
        );

    let mut rows = Column::new().spacing(spacing::XS);
    for _ in 0..6 {
        rows = rows.push(
            Container::new(Text::new("Dummy List Row Views").size(typography::BODY))
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(row_style),
        );
    }

    let screen = Container::new(
        Column::new()
            .spacing(spacing::LG)
            .push(toolbar)
            .push(rows),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::MD);

    let overlay = toasts::overlay::view(&app.stack, toast_card).map(Message::Toasts);

    Layers::new().push(screen).push(overlay).into()
}

/// Renders one toast card: icon glyph, message, self-dismiss button.
fn toast_card(toast: &Toast<SampleToast>) -> Element<'_, toasts::Message> {
    let dismiss = button(text("\u{2715}").size(sizing::ICON_SM))
        .on_press(toasts::Message::Dismiss(toast.id()))
        .padding(spacing::XXS)
        .style(styles::dismiss_button);

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new("\u{2191}").size(sizing::ICON_SM))
        .push(
            Container::new(Text::new(toast.payload().message.as_str()).size(typography::BODY))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss);

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::SM, spacing::MD])
        .style(styles::toast_card)
        .into()
}

fn row_style(theme: &Theme) -> iced::widget::container::Style {
    let pair = theme.extended_palette().background.weak;
    iced::widget::container::Style {
        background: Some(iced::Background::Color(pair.color)),
        text_color: Some(pair.text),
        border: iced::Border {
            radius: crate::ui::design_tokens::radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
