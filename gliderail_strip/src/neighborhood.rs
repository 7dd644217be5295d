// Copyright 2026 the Gliderail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `{prev, active, next}` index triple for a dense strip.

/// Navigable neighbors of the active slide.
///
/// `prev` and `next` are `None` at the respective ends of the strip; that is
/// the sole sentinel for "no further navigation in that direction". The triple
/// is recomputed whenever the active index changes, never edited in place.
///
/// # Example
///
/// ```
/// use gliderail_strip::Neighborhood;
///
/// let hood = Neighborhood::around(0, 4);
/// assert_eq!(hood.prev, None);
/// assert_eq!(hood.next, Some(1));
///
/// let hood = Neighborhood::around(3, 4);
/// assert_eq!(hood.prev, Some(2));
/// assert_eq!(hood.next, None);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Neighborhood {
    /// Index of the previous slide, or `None` at the start of the strip.
    pub prev: Option<usize>,
    /// Index of the active slide.
    pub active: usize,
    /// Index of the next slide, or `None` at the end of the strip.
    pub next: Option<usize>,
}

impl Neighborhood {
    /// Computes the triple around `active` for a strip of `len` slides.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `active >= len`.
    #[must_use]
    pub fn around(active: usize, len: usize) -> Self {
        debug_assert!(active < len, "active index out of range");
        let last = len.saturating_sub(1);
        Self {
            prev: active.checked_sub(1),
            active,
            next: (active < last).then_some(active + 1),
        }
    }

    /// Returns `true` when a previous slide exists.
    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.prev.is_some()
    }

    /// Returns `true` when a next slide exists.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}
