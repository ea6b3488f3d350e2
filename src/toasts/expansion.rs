// SPDX-License-Identifier: MPL-2.0
//! Expansion toggle for the toast stack region.
//!
//! A tap on the stack region toggles between the compact overlapping pile and
//! the full vertical list; a tap on the dimmed backdrop collapses. The stack
//! forces a collapse whenever it empties so an expanded-but-empty dead state
//! cannot occur.

/// Two-state expansion of the stack region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expansion {
    /// Compact overlapping pile (initial state).
    #[default]
    Collapsed,
    /// Full vertical list over a dimmed backdrop.
    Expanded,
}

impl Expansion {
    /// Flips between collapsed and expanded.
    pub fn toggle(&mut self) {
        *self = match self {
            Expansion::Collapsed => Expansion::Expanded,
            Expansion::Expanded => Expansion::Collapsed,
        };
    }

    /// Forces the collapsed state regardless of the current one.
    pub fn collapse(&mut self) {
        *self = Expansion::Collapsed;
    }

    /// Returns whether the stack region is expanded.
    #[must_use]
    pub fn is_expanded(self) -> bool {
        matches!(self, Expansion::Expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_collapsed() {
        assert!(!Expansion::default().is_expanded());
    }

    #[test]
    fn toggle_flips_both_ways() {
        let mut expansion = Expansion::default();
        expansion.toggle();
        assert!(expansion.is_expanded());
        expansion.toggle();
        assert!(!expansion.is_expanded());
    }

    #[test]
    fn collapse_is_unconditional() {
        let mut expansion = Expansion::Expanded;
        expansion.collapse();
        assert!(!expansion.is_expanded());
        expansion.collapse();
        assert!(!expansion.is_expanded());
    }
}
