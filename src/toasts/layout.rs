// SPDX-License-Identifier: MPL-2.0
//! Collapsed-mode layout: pure functions of stack depth.
//!
//! Depth-from-top is an item's distance from the most recently appended
//! toast (depth 0 = frontmost). In collapsed mode each toast recedes a little
//! per depth step; in expanded mode these functions are not consulted and
//! every toast renders at offset 0 / scale 1.

/// Layout tunables for the collapsed stack.
///
/// These are deliberate constants, not derived values.
pub mod metrics {
    /// Vertical recession per depth step, in layout units.
    pub const OFFSET_STEP: f32 = 15.0;
    /// Cap on total vertical recession, so the stack never grows unboundedly
    /// tall (reached at depth 2).
    pub const OFFSET_MAX: f32 = 30.0;
    /// Scale lost per depth step.
    pub const SCALE_STEP: f32 = 0.1;
    /// Cap on total scale loss (floor at scale 0, reached at depth 10).
    pub const SCALE_RANGE: f32 = 1.0;
    /// Vertical spacing between toasts in expanded mode.
    pub const EXPANDED_SPACING: f32 = 10.0;
    /// Vertical offset a toast appears from on entrance.
    pub const ENTRANCE_OFFSET: f32 = 100.0;
}

/// Vertical offset for a toast at the given depth-from-top.
///
/// Negative values move the toast up behind its successors; saturates at
/// `-OFFSET_MAX` from depth 2 onward.
#[must_use]
pub fn vertical_offset(depth: usize) -> f32 {
    -(depth as f32 * metrics::OFFSET_STEP).min(metrics::OFFSET_MAX)
}

/// Scale factor for a toast at the given depth-from-top.
///
/// The frontmost toast renders at scale 1; each depth step recedes by
/// `SCALE_STEP`, flooring at 0 so the factor is never negative.
#[must_use]
pub fn scale(depth: usize) -> f32 {
    1.0 - (depth as f32 * metrics::SCALE_STEP).min(metrics::SCALE_RANGE)
}
