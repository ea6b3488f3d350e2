// SPDX-License-Identifier: MPL-2.0
//! Overlay rendering for the toast stack.
//!
//! Collapsed mode piles the cards bottom-aligned with depth-based recession;
//! expanded mode lays them out as a vertical list over a dimmed,
//! tap-to-collapse backdrop. The payload stays opaque: the host passes a
//! closure that renders one card's content.
//!
//! Iced has no per-widget affine transform outside the canvas API, so the
//! collapsed transforms are projected onto ordinary layout: depth scale
//! shrinks the card width, depth offset becomes bottom padding, and the live
//! drag offset becomes asymmetric horizontal padding. The exit transition
//! (toward the leading edge, regardless of drag direction) and the entrance
//! offset ([`layout::metrics::ENTRANCE_OFFSET`]) are part of the contract for
//! hosts that drive an animation layer; this view renders the settled state.

use super::item::Toast;
use super::layout;
use super::stack::{Message, Stack};
use crate::ui::design_tokens::sizing;
use crate::ui::styles;
use iced::widget::{mouse_area, text, Column, Container, Space, Stack as Layers};
use iced::{alignment, Element, Length, Padding, Theme};

/// Renders the toast overlay for the given stack.
///
/// The returned element fills its bounds; hosts layer it over their own view
/// (e.g. with `iced::widget::Stack`) and map the emitted [`Message`]s into
/// their own message type.
pub fn view<'a, P>(
    stack: &'a Stack<P>,
    render: impl Fn(&'a Toast<P>) -> Element<'a, Message>,
) -> Element<'a, Message> {
    if stack.is_empty() {
        // An empty container that takes no space.
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let region: Element<'a, Message> = if stack.is_expanded() {
        expanded_list(stack, render)
    } else {
        collapsed_pile(stack, render)
    };

    let anchored = Container::new(region)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom)
        .padding(Padding {
            bottom: crate::ui::design_tokens::spacing::MD,
            ..Padding::ZERO
        });

    if stack.is_expanded() {
        let scrim = mouse_area(
            Container::new(Space::new().width(Length::Fill).height(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(|theme: &Theme| styles::backdrop_scrim(theme)),
        )
        .on_press(Message::BackgroundPressed);

        Layers::new().push(scrim).push(anchored).into()
    } else {
        anchored.into()
    }
}

/// Collapsed rendering: a bottom-aligned pile with depth recession.
fn collapsed_pile<'a, P>(
    stack: &'a Stack<P>,
    render: impl Fn(&'a Toast<P>) -> Element<'a, Message>,
) -> Element<'a, Message> {
    let mut layers = Layers::new()
        .width(Length::Fill)
        .height(Length::Fixed(sizing::STACK_REGION_HEIGHT));

    // Arrival order: later layers render on top, so the newest toast is
    // frontmost.
    for toast in stack.iter() {
        let depth = stack.depth_from_top(toast.id()).unwrap_or(0);
        // Full height so the bottom alignment anchors every layer to the
        // region's lower edge before the depth lift applies.
        layers = layers.push(positioned_card(toast, depth, &render).height(Length::Fill));
    }

    layers.into()
}

/// Expanded rendering: one card per row, fixed spacing, oldest on top.
fn expanded_list<'a, P>(
    stack: &'a Stack<P>,
    render: impl Fn(&'a Toast<P>) -> Element<'a, Message>,
) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = stack
        .iter()
        .map(|toast| positioned_card(toast, 0, &render).into())
        .collect();

    Column::with_children(cards)
        .spacing(layout::metrics::EXPANDED_SPACING)
        .align_x(alignment::Horizontal::Center)
        .into()
}

/// Wraps one card with its depth transform, drag shift, and grab handler.
fn positioned_card<'a, P>(
    toast: &'a Toast<P>,
    depth: usize,
    render: &impl Fn(&'a Toast<P>) -> Element<'a, Message>,
) -> Container<'a, Message> {
    let scale = layout::scale(depth);
    let lift = -layout::vertical_offset(depth);

    let card = Container::new(render(toast)).width(Length::Fixed(sizing::TOAST_WIDTH * scale));
    let interactive = mouse_area(card).on_press(Message::Grabbed(toast.id()));

    // The drag offset is non-positive; padding the trailing side by twice its
    // magnitude shifts the centered card left by the offset itself.
    let dragged = -toast.offset();

    Container::new(interactive)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom)
        .padding(Padding {
            bottom: lift,
            right: 2.0 * dragged,
            ..Padding::ZERO
        })
}
