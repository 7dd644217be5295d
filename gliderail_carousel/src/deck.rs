// Copyright 2026 the Gliderail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability surface navigation controls compose against.

/// Notification that the active slide changed (or re-snapped).
///
/// Emitted by every authoritative index change, including re-snaps after an
/// inconclusive drag; `from == to` distinguishes those from real navigations.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SlideChange {
    /// Index that was active before the change.
    pub from: usize,
    /// Index that is active now.
    pub to: usize,
}

impl SlideChange {
    /// Returns `true` when the change re-snapped to the slide that was
    /// already active.
    #[must_use]
    pub fn is_resnap(&self) -> bool {
        self.from == self.to
    }
}

/// Capability trait for anything that can be navigated like a deck of slides.
///
/// [`Carousel`](crate::Carousel) implements this; controls in
/// `gliderail_controls` consume it. Keeping the surface to a trait lets hosts
/// substitute instrumented or mocked decks in tests.
pub trait SlideDeck {
    /// Jumps directly to `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range; valid indices are a caller contract.
    fn change_slide(&mut self, index: usize) -> SlideChange;

    /// Activates the previous slide, or returns `None` at the start.
    fn activate_prev(&mut self) -> Option<SlideChange>;

    /// Activates the next slide, or returns `None` at the end.
    fn activate_next(&mut self) -> Option<SlideChange>;

    /// Number of slides in the deck.
    fn slide_count(&self) -> usize;

    /// Index of the active slide.
    fn active_index(&self) -> usize;
}
