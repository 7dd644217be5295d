// Copyright 2026 the Gliderail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dot/thumbnail rail mirroring the active slide.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use gliderail_carousel::{SlideChange, SlideDeck};

/// An index-aligned list of clickable slide controls.
///
/// Each item corresponds 1:1 to a slide; the rail has no identity beyond that
/// alignment. The active highlight is a single index, so exactly one item is
/// active at all times by construction.
///
/// Hosts that already have control markup adopt its labels with
/// [`adopt`](Self::adopt); otherwise [`numbered`](Self::numbered) synthesizes
/// a `"1"..="len"` rail. Clicking an item calls
/// [`select`](Self::select), which jumps the deck directly — no gesture
/// involved — and mirrors the highlight in one step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DotRail {
    labels: Vec<String>,
    active: usize,
}

impl DotRail {
    /// Adopts an existing, index-aligned list of control labels.
    ///
    /// The rail starts with item 0 highlighted; call [`sync`](Self::sync) to
    /// align it with a deck that is already elsewhere.
    #[must_use]
    pub fn adopt(labels: Vec<String>) -> Self {
        Self { labels, active: 0 }
    }

    /// Synthesizes a numbered rail with one item per slide.
    #[must_use]
    pub fn numbered(len: usize) -> Self {
        Self::adopt((1..=len).map(|n| n.to_string()).collect())
    }

    /// Aligns the highlight with the deck's current active slide.
    pub fn sync(&mut self, deck: &impl SlideDeck) {
        debug_assert_eq!(
            self.labels.len(),
            deck.slide_count(),
            "rail length must match the deck"
        );
        self.active = deck.active_index();
    }

    /// Handles a click on item `index`: jumps the deck directly and mirrors
    /// the highlight.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range for the deck (caller contract, as
    /// with [`SlideDeck::change_slide`]).
    pub fn select(&mut self, deck: &mut impl SlideDeck, index: usize) -> SlideChange {
        debug_assert_eq!(
            self.labels.len(),
            deck.slide_count(),
            "rail length must match the deck"
        );
        let change = deck.change_slide(index);
        self.apply(&change);
        change
    }

    /// Mirrors a deck change onto the rail's highlight.
    ///
    /// Hosts feed this from the deck's change notifications so the rail also
    /// follows swipes and arrow clicks, not just its own selections.
    pub fn apply(&mut self, change: &SlideChange) {
        debug_assert!(change.to < self.labels.len(), "change index out of range");
        self.active = change.to;
    }

    /// Index of the highlighted item.
    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    /// Number of items in the rail.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` for a rail with no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The item labels, in index order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}
