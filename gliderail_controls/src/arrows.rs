// Copyright 2026 the Gliderail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Previous/next arrow bindings.

use gliderail_carousel::{SlideChange, SlideDeck};

/// Routes a host's previous/next button clicks into a deck.
///
/// The arrows carry no state of their own; the deck decides whether a click
/// does anything. Clicks past either end are no-ops, mirroring the deck's
/// `activate_prev`/`activate_next` contract, so hosts need no end-of-strip
/// guards of their own (though they may use [`SlideDeck`] queries to dim the
/// buttons).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ArrowNav;

impl ArrowNav {
    /// Creates the arrow pair.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Handles a click on the "previous" arrow.
    pub fn click_prev(&self, deck: &mut impl SlideDeck) -> Option<SlideChange> {
        deck.activate_prev()
    }

    /// Handles a click on the "next" arrow.
    pub fn click_next(&self, deck: &mut impl SlideDeck) -> Option<SlideChange> {
        deck.activate_next()
    }
}
