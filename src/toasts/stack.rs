// SPDX-License-Identifier: MPL-2.0
//! Ordered toast container and its message-driven update entrypoint.
//!
//! The `Stack` owns every toast plus the expansion state of the stack region.
//! All mutation goes through [`Stack::push`], [`Stack::dismiss`], or
//! [`Stack::update`]; the host reads back ordered items and depth positions
//! at render time. Interaction follows the Elm pattern: the overlay emits
//! [`Message`]s, `update` applies them and surfaces [`Event`]s the host may
//! react to.

use super::expansion::Expansion;
use super::gesture::{self, ReleaseOutcome};
use super::item::{Toast, ToastId};

/// Messages for toast stack state changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Pointer pressed on a toast card. The host should start a drag session
    /// in response (see [`Event::Grabbed`]).
    Grabbed(ToastId),
    /// Live drag update with the raw horizontal translation since the
    /// gesture started.
    DragChanged { id: ToastId, translation: f32 },
    /// Drag released with the final translation and the horizontal velocity
    /// in units per second.
    DragEnded {
        id: ToastId,
        translation: f32,
        velocity: f32,
    },
    /// Tap on the stack region.
    StackPressed,
    /// Tap on the dimmed backdrop behind the expanded stack.
    BackgroundPressed,
    /// Dismiss a specific toast by ID (self-dismiss button or host call).
    Dismiss(ToastId),
}

/// State changes surfaced to the host after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A toast card was grabbed; the host should begin tracking the drag.
    Grabbed(ToastId),
    /// A toast left the stack.
    Dismissed(ToastId),
    /// The stack region toggled; carries the new expanded flag.
    ExpansionToggled(bool),
}

/// Ordered collection of toasts, newest last.
#[derive(Debug, Clone)]
pub struct Stack<P> {
    items: Vec<Toast<P>>,
    expansion: Expansion,
}

impl<P> Default for Stack<P> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            expansion: Expansion::default(),
        }
    }
}

impl<P> Stack<P> {
    /// Creates an empty, collapsed stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a toast at the end of the sequence (frontmost position).
    ///
    /// Always accepted; ids are unique by construction so collisions are not
    /// defended against here.
    pub fn push(&mut self, toast: Toast<P>) {
        self.items.push(toast);
    }

    /// Dismisses a toast by its ID.
    ///
    /// Idempotent: an absent id is a no-op returning `None`, which tolerates
    /// a gesture-release commit racing with a host-initiated dismiss. When
    /// present, the toast's deleting flag is set strictly before it leaves
    /// the sequence, and the removed record (still flagged) is returned so a
    /// renderer can float it above its siblings during the exit animation.
    ///
    /// Collapses the stack region when the last toast leaves.
    pub fn dismiss(&mut self, id: ToastId) -> Option<Toast<P>> {
        let position = self.items.iter().position(|toast| toast.id() == id)?;
        self.items[position].is_deleting = true;
        let removed = self.items.remove(position);

        if self.items.is_empty() {
            self.expansion.collapse();
        }

        Some(removed)
    }

    /// Applies a state-change message, returning the resulting event if the
    /// host should react.
    pub fn update(&mut self, message: Message) -> Option<Event> {
        match message {
            Message::Grabbed(id) => {
                self.get(id)?;
                Some(Event::Grabbed(id))
            }
            Message::DragChanged { id, translation } => {
                if let Some(toast) = self.get_mut(id) {
                    toast.offset = gesture::clamp_translation(translation);
                }
                None
            }
            Message::DragEnded {
                id,
                translation,
                velocity,
            } => match gesture::release_outcome(translation, velocity) {
                ReleaseOutcome::Dismiss => {
                    self.dismiss(id).map(|toast| Event::Dismissed(toast.id()))
                }
                ReleaseOutcome::Reset => {
                    if let Some(toast) = self.get_mut(id) {
                        toast.offset = 0.0;
                    }
                    None
                }
            },
            Message::StackPressed => {
                self.expansion.toggle();
                Some(Event::ExpansionToggled(self.is_expanded()))
            }
            Message::BackgroundPressed => {
                if self.is_expanded() {
                    self.expansion.collapse();
                    Some(Event::ExpansionToggled(false))
                } else {
                    None
                }
            }
            Message::Dismiss(id) => self.dismiss(id).map(|toast| Event::Dismissed(toast.id())),
        }
    }

    /// Distance of a toast from the most recently appended one (0 = frontmost).
    #[must_use]
    pub fn depth_from_top(&self, id: ToastId) -> Option<usize> {
        let index = self.items.iter().position(|toast| toast.id() == id)?;
        Some(self.items.len() - 1 - index)
    }

    /// Looks up a toast by ID.
    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast<P>> {
        self.items.iter().find(|toast| toast.id() == id)
    }

    fn get_mut(&mut self, id: ToastId) -> Option<&mut Toast<P>> {
        self.items.iter_mut().find(|toast| toast.id() == id)
    }

    /// Iterates toasts in arrival order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Toast<P>> {
        self.items.iter()
    }

    /// Returns the number of toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the stack holds no toasts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns whether the stack region is expanded.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expansion.is_expanded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample_stack(count: usize) -> (Stack<usize>, Vec<ToastId>) {
        let mut stack = Stack::new();
        let mut ids = Vec::new();
        for n in 0..count {
            let toast = Toast::new(|_| n);
            ids.push(toast.id());
            stack.push(toast);
        }
        (stack, ids)
    }

    #[test]
    fn new_stack_is_empty_and_collapsed() {
        let stack: Stack<()> = Stack::new();
        assert!(stack.is_empty());
        assert!(!stack.is_expanded());
    }

    #[test]
    fn push_preserves_arrival_order() {
        let (stack, _) = sample_stack(4);
        let payloads: Vec<usize> = stack.iter().map(|t| *t.payload()).collect();
        assert_eq!(payloads, vec![0, 1, 2, 3]);
    }

    #[test]
    fn length_tracks_pushes_minus_dismissals() {
        let (mut stack, ids) = sample_stack(5);
        stack.dismiss(ids[1]);
        stack.dismiss(ids[3]);
        assert_eq!(stack.len(), 3);

        let payloads: Vec<usize> = stack.iter().map(|t| *t.payload()).collect();
        assert_eq!(payloads, vec![0, 2, 4]);
    }

    #[test]
    fn ids_are_pairwise_distinct() {
        let (stack, _) = sample_stack(16);
        let unique: HashSet<ToastId> = stack.iter().map(Toast::id).collect();
        assert_eq!(unique.len(), stack.len());
    }

    #[test]
    fn dismiss_is_idempotent() {
        let (mut stack, ids) = sample_stack(3);
        assert!(stack.dismiss(ids[0]).is_some());
        assert!(stack.dismiss(ids[0]).is_none());
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn dismissed_toast_carries_the_deleting_flag() {
        let (mut stack, ids) = sample_stack(2);
        let removed = stack.dismiss(ids[0]).unwrap();
        assert!(removed.is_deleting());
        // Remaining toasts are untouched.
        assert!(stack.iter().all(|toast| !toast.is_deleting()));
    }

    #[test]
    fn depth_counts_from_the_newest_toast() {
        let (stack, ids) = sample_stack(3);
        assert_eq!(stack.depth_from_top(ids[2]), Some(0));
        assert_eq!(stack.depth_from_top(ids[1]), Some(1));
        assert_eq!(stack.depth_from_top(ids[0]), Some(2));
    }

    #[test]
    fn depth_of_unknown_id_is_none() {
        let (stack, _) = sample_stack(1);
        let stray = Toast::new(|_| 99usize);
        assert_eq!(stack.depth_from_top(stray.id()), None);
    }

    #[test]
    fn drag_changed_clamps_rightward_movement() {
        let (mut stack, ids) = sample_stack(1);
        stack.update(Message::DragChanged {
            id: ids[0],
            translation: 80.0,
        });
        assert_eq!(stack.get(ids[0]).unwrap().offset(), 0.0);

        stack.update(Message::DragChanged {
            id: ids[0],
            translation: -80.0,
        });
        assert_eq!(stack.get(ids[0]).unwrap().offset(), -80.0);
    }

    #[test]
    fn drag_ended_past_threshold_dismisses() {
        let (mut stack, ids) = sample_stack(1);
        let event = stack.update(Message::DragEnded {
            id: ids[0],
            translation: -150.0,
            velocity: -120.0,
        });
        assert_eq!(event, Some(Event::Dismissed(ids[0])));
        assert!(stack.is_empty());
    }

    #[test]
    fn drag_ended_below_threshold_snaps_back() {
        let (mut stack, ids) = sample_stack(1);
        stack.update(Message::DragChanged {
            id: ids[0],
            translation: -100.0,
        });
        let event = stack.update(Message::DragEnded {
            id: ids[0],
            translation: -100.0,
            velocity: -20.0,
        });
        assert_eq!(event, None);
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.get(ids[0]).unwrap().offset(), 0.0);
    }

    #[test]
    fn drag_ended_on_absent_toast_is_a_no_op() {
        let (mut stack, ids) = sample_stack(1);
        stack.dismiss(ids[0]);
        let event = stack.update(Message::DragEnded {
            id: ids[0],
            translation: -500.0,
            velocity: -500.0,
        });
        assert_eq!(event, None);
    }

    #[test]
    fn stack_press_toggles_expansion() {
        let (mut stack, _) = sample_stack(2);
        assert_eq!(
            stack.update(Message::StackPressed),
            Some(Event::ExpansionToggled(true))
        );
        assert_eq!(
            stack.update(Message::StackPressed),
            Some(Event::ExpansionToggled(false))
        );
    }

    #[test]
    fn background_press_collapses_only_when_expanded() {
        let (mut stack, _) = sample_stack(2);
        assert_eq!(stack.update(Message::BackgroundPressed), None);

        stack.update(Message::StackPressed);
        assert!(stack.is_expanded());
        assert_eq!(
            stack.update(Message::BackgroundPressed),
            Some(Event::ExpansionToggled(false))
        );
    }

    #[test]
    fn emptying_the_stack_forces_collapse() {
        let (mut stack, ids) = sample_stack(1);
        stack.update(Message::StackPressed);
        assert!(stack.is_expanded());

        stack.dismiss(ids[0]);
        assert!(!stack.is_expanded());
    }

    #[test]
    fn grab_on_known_toast_surfaces_the_event() {
        let (mut stack, ids) = sample_stack(1);
        assert_eq!(
            stack.update(Message::Grabbed(ids[0])),
            Some(Event::Grabbed(ids[0]))
        );

        stack.dismiss(ids[0]);
        assert_eq!(stack.update(Message::Grabbed(ids[0])), None);
    }
}
