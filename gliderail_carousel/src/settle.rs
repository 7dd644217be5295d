// Copyright 2026 the Gliderail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trailing-edge settle timer for debounced geometry rebuilds.

use core::time::Duration;

/// Debounces a burst of resize notifications into one rebuild.
///
/// The timer is host-agnostic: the host supplies `now` as a [`Duration`] from
/// any fixed epoch of its choosing and polls. Each [`note`](Self::note) pushes
/// the deadline out by the full delay, so only the trailing edge of a resize
/// burst fires. Rebuilds are idempotent for a given final geometry, so a host
/// that polls late loses nothing.
///
/// # Example
///
/// ```
/// use core::time::Duration;
/// use gliderail_carousel::ResizeSettle;
///
/// let mut settle = ResizeSettle::new(Duration::from_millis(400));
/// settle.note(Duration::from_millis(0));
/// settle.note(Duration::from_millis(100));
///
/// assert!(!settle.take_due(Duration::from_millis(450)));
/// assert!(settle.take_due(Duration::from_millis(500)));
/// // Fires once per burst.
/// assert!(!settle.take_due(Duration::from_millis(600)));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ResizeSettle {
    delay: Duration,
    deadline: Option<Duration>,
}

impl ResizeSettle {
    /// Creates a settle timer with the given quiet-period delay.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Records a resize at `now`, arming (or pushing back) the deadline.
    pub fn note(&mut self, now: Duration) {
        self.deadline = Some(now + self.delay);
    }

    /// Returns `true` exactly once when the quiet period has elapsed.
    pub fn take_due(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Returns `true` while a rebuild is pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// The configured quiet-period delay.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}
