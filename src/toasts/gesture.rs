// SPDX-License-Identifier: MPL-2.0
//! Drag-to-dismiss gesture interpretation.
//!
//! Two layers live here. The pure decision functions ([`clamp_translation`],
//! [`release_outcome`]) implement the dismissal rule itself: only leftward
//! movement counts, and on release the translation is extrapolated by half
//! the velocity so a fast flick can dismiss even over a short distance.
//!
//! [`DragSession`] is the host-side adapter. Iced reports raw cursor
//! positions rather than per-gesture translation/velocity, so the session
//! tracks both from `CursorMoved` samples and also tells a tap (press and
//! release without meaningful travel) apart from a drag.

use super::item::ToastId;
use iced::Point;
use std::time::Instant;

/// Leftward distance (projected) a drag must exceed to dismiss a toast.
pub const DISMISS_DISTANCE: f32 = 200.0;

/// Divisor blending release velocity into the projected endpoint.
pub const FLING_DIVISOR: f32 = 2.0;

/// Total pointer travel at or below which a press-and-release is a tap.
pub const TAP_SLOP: f32 = 4.0;

/// Smoothing factor for the exponentially blended velocity estimate.
const VELOCITY_SMOOTHING: f32 = 0.25;

/// Decision taken when a drag gesture ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Commit removal of the toast.
    Dismiss,
    /// Snap the toast back to its resting position.
    Reset,
}

/// Clamps a horizontal translation so only leftward movement has effect.
///
/// Rightward (positive) translations yield 0.
#[must_use]
pub fn clamp_translation(translation: f32) -> f32 {
    translation.min(0.0)
}

/// Velocity-extrapolated endpoint of a drag: `translation + velocity / 2`.
#[must_use]
pub fn projected_endpoint(translation: f32, velocity: f32) -> f32 {
    translation + velocity / FLING_DIVISOR
}

/// Decides between dismissal and reset at gesture release.
#[must_use]
pub fn release_outcome(translation: f32, velocity: f32) -> ReleaseOutcome {
    if -projected_endpoint(translation, velocity) > DISMISS_DISTANCE {
        ReleaseOutcome::Dismiss
    } else {
        ReleaseOutcome::Reset
    }
}

/// Tracks one in-flight drag gesture on a toast.
///
/// The host starts a session when the pointer is pressed on a toast card,
/// feeds it every `CursorMoved` position, and reads translation, velocity,
/// and tap status at release.
#[derive(Debug, Clone)]
pub struct DragSession {
    id: ToastId,
    origin: Point,
    current: Point,
    /// Smoothed horizontal velocity in units per second.
    velocity_x: f32,
    last_sample_at: Instant,
    /// Greatest pointer travel seen, for tap detection. A gesture that
    /// wandered and came back is still not a tap.
    max_travel: f32,
}

impl DragSession {
    /// Begins a session for the toast under the pointer.
    #[must_use]
    pub fn begin(id: ToastId, origin: Point) -> Self {
        Self {
            id,
            origin,
            current: origin,
            velocity_x: 0.0,
            last_sample_at: Instant::now(),
            max_travel: 0.0,
        }
    }

    /// Records a cursor sample and returns the raw horizontal translation
    /// since the gesture started (unclamped).
    pub fn movement(&mut self, position: Point, now: Instant) -> f32 {
        let dt = now
            .saturating_duration_since(self.last_sample_at)
            .as_secs_f32();
        if dt > 0.0 {
            let instantaneous = (position.x - self.current.x) / dt;
            self.velocity_x += (instantaneous - self.velocity_x) * VELOCITY_SMOOTHING;
        }

        self.current = position;
        self.last_sample_at = now;

        let dx = position.x - self.origin.x;
        let dy = position.y - self.origin.y;
        self.max_travel = self.max_travel.max((dx * dx + dy * dy).sqrt());

        dx
    }

    /// The toast this session is attached to.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Raw horizontal translation since the gesture started.
    #[must_use]
    pub fn translation(&self) -> f32 {
        self.current.x - self.origin.x
    }

    /// Smoothed horizontal velocity in units per second.
    #[must_use]
    pub fn velocity(&self) -> f32 {
        self.velocity_x
    }

    /// Whether the gesture never travelled beyond the tap slop.
    #[must_use]
    pub fn is_tap(&self) -> bool {
        self.max_travel <= TAP_SLOP
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn rightward_translation_clamps_to_zero() {
        assert_eq!(clamp_translation(42.0), 0.0);
        assert_eq!(clamp_translation(0.1), 0.0);
    }

    #[test]
    fn leftward_translation_passes_through() {
        assert_eq!(clamp_translation(-37.5), -37.5);
        assert_eq!(clamp_translation(0.0), 0.0);
    }

    #[test]
    fn fast_flick_dismisses_despite_short_drag() {
        // projected = -150 + (-120 / 2) = -210; 210 > 200
        assert_eq!(release_outcome(-150.0, -120.0), ReleaseOutcome::Dismiss);
    }

    #[test]
    fn slow_short_drag_resets() {
        // projected = -100 + (-20 / 2) = -110; 110 <= 200
        assert_eq!(release_outcome(-100.0, -20.0), ReleaseOutcome::Reset);
    }

    #[test]
    fn threshold_is_strict() {
        // Exactly the threshold does not dismiss.
        assert_eq!(release_outcome(-200.0, 0.0), ReleaseOutcome::Reset);
        assert_eq!(release_outcome(-200.1, 0.0), ReleaseOutcome::Dismiss);
    }

    #[test]
    fn rightward_fling_never_dismisses() {
        assert_eq!(release_outcome(50.0, 600.0), ReleaseOutcome::Reset);
    }

    #[test]
    fn session_tracks_translation() {
        let start = Instant::now();
        let mut session = DragSession::begin(ToastId::new(), Point::new(100.0, 50.0));
        let dx = session.movement(Point::new(40.0, 52.0), start + Duration::from_millis(16));
        assert_eq!(dx, -60.0);
        assert_eq!(session.translation(), -60.0);
    }

    #[test]
    fn session_velocity_points_leftward_for_leftward_drag() {
        let start = Instant::now();
        let mut session = DragSession::begin(ToastId::new(), Point::new(300.0, 0.0));
        let mut t = start;
        for step in 1..=10 {
            t += Duration::from_millis(16);
            session.movement(Point::new(300.0 - step as f32 * 20.0, 0.0), t);
        }
        assert!(session.velocity() < 0.0);
    }

    #[test]
    fn stationary_release_is_a_tap() {
        let start = Instant::now();
        let mut session = DragSession::begin(ToastId::new(), Point::new(10.0, 10.0));
        session.movement(Point::new(11.0, 11.0), start + Duration::from_millis(8));
        assert!(session.is_tap());
    }

    #[test]
    fn wandering_gesture_is_not_a_tap() {
        let start = Instant::now();
        let mut session = DragSession::begin(ToastId::new(), Point::new(10.0, 10.0));
        session.movement(Point::new(60.0, 10.0), start + Duration::from_millis(16));
        // Back at the origin, but the gesture travelled far in between.
        session.movement(Point::new(10.0, 10.0), start + Duration::from_millis(32));
        assert!(!session.is_tap());
    }
}
