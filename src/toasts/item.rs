// SPDX-License-Identifier: MPL-2.0
//! Toast record and identity.

use std::fmt;

/// Unique identifier for a toast.
///
/// Generated from a process-wide counter; stable for the toast's lifetime and
/// used as the sole key for lookup, dismissal, and gesture correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single toast in the stack.
///
/// The payload `P` is opaque to the stack: the host supplies it at creation
/// time and renders it through the closure given to
/// [`overlay::view`](super::overlay::view). The two remaining fields are
/// transient display state owned by the interaction machinery.
#[derive(Debug, Clone)]
pub struct Toast<P> {
    id: ToastId,
    payload: P,
    /// Signed horizontal drag offset. Zero when no gesture is active; only
    /// leftward (negative) values ever take effect.
    pub(crate) offset: f32,
    /// Set the instant dismissal is committed, strictly before the toast
    /// leaves the sequence, so overlapping exit animations can render the
    /// departing toast above its siblings.
    pub(crate) is_deleting: bool,
}

impl<P> Toast<P> {
    /// Creates a toast, handing the generated id to the payload factory.
    ///
    /// The factory may close over the id, e.g. to wire a self-dismiss button
    /// into the payload it builds.
    pub fn new(factory: impl FnOnce(ToastId) -> P) -> Self {
        let id = ToastId::new();
        Self {
            id,
            payload: factory(id),
            offset: 0.0,
            is_deleting: false,
        }
    }

    /// Returns the toast's unique ID.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Returns the host-supplied payload.
    #[must_use]
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Returns the current horizontal drag offset.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Returns whether dismissal has been committed for this toast.
    #[must_use]
    pub fn is_deleting(&self) -> bool {
        self.is_deleting
    }
}
