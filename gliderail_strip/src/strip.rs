// Copyright 2026 the Gliderail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide extents and the rest-position strip built from them.

use alloc::vec::Vec;

/// Measured horizontal geometry of one slide, in viewport coordinates.
///
/// Hosts produce one `SlideExtent` per slide after layout. The `left` edge is
/// relative to the untranslated strip origin; `width` is the slide's rendered
/// width.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SlideExtent {
    /// Left edge of the slide, before any strip translation.
    pub left: f64,
    /// Rendered width of the slide.
    pub width: f64,
}

impl SlideExtent {
    /// Creates an extent from a left edge and width.
    #[must_use]
    pub const fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }
}

/// Horizontal translation that centers a slide within the viewport.
///
/// The centering margin is `(viewport_width - extent.width) / 2`; the returned
/// offset shifts the strip so the slide's left edge lands on that margin. This
/// is a pure function of the measured geometry: repeated calls with unchanged
/// inputs return identical positions.
///
/// When a slide exactly fills the viewport and its measured left edge equals
/// the (zero) centering margin, the math collapses to `0.0`.
#[must_use]
pub fn rest_position(viewport_width: f64, extent: SlideExtent) -> f64 {
    let margin = (viewport_width - extent.width) / 2.0;
    -(extent.left - margin)
}

/// An ordered strip of slide rest positions.
///
/// Built once from measurements and rebuilt wholesale whenever geometry
/// changes; individual slides are never inserted or removed in place.
///
/// # Example
///
/// ```
/// use gliderail_strip::{SlideExtent, SlideStrip};
///
/// let strip = SlideStrip::from_extents(
///     800.0,
///     &[SlideExtent::new(0.0, 700.0), SlideExtent::new(700.0, 700.0)],
/// );
/// assert_eq!(strip.len(), 2);
/// assert_eq!(strip.rest_position(0), Some(50.0));
/// assert_eq!(strip.rest_position(2), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SlideStrip {
    positions: Vec<f64>,
}

impl SlideStrip {
    /// Builds a strip by centering every measured extent in the viewport.
    #[must_use]
    pub fn from_extents(viewport_width: f64, extents: &[SlideExtent]) -> Self {
        let positions = extents
            .iter()
            .map(|&extent| rest_position(viewport_width, extent))
            .collect();
        Self { positions }
    }

    /// Number of slides in the strip.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if the strip has no slides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Rest position of the slide at `index`, or `None` when out of range.
    #[must_use]
    pub fn rest_position(&self, index: usize) -> Option<f64> {
        self.positions.get(index).copied()
    }

    /// All rest positions in index order.
    #[must_use]
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Index of the last slide, or `None` for an empty strip.
    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.positions.len().checked_sub(1)
    }
}
