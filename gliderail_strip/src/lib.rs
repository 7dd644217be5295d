// Copyright 2026 the Gliderail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gliderail Strip: slide-strip geometry and index neighborhoods.
//!
//! This crate provides the geometric core shared by carousel implementations:
//! a dense strip of slides indexed `0..len`, each with a *rest position* — the
//! horizontal translation that centers that slide within its viewport — and a
//! *neighborhood* describing which indices are reachable from the active one.
//!
//! The core concepts are:
//!
//! - [`SlideExtent`]: the measured horizontal geometry of one slide (left edge
//!   and width), supplied by the host after layout.
//! - [`rest_position`]: the pure centering computation. For a slide with left
//!   edge `l` and width `w` inside a viewport of width `v`, the rest position
//!   is `-(l - (v - w) / 2)`.
//! - [`SlideStrip`]: an ordered collection of rest positions built once from
//!   measurements and rebuilt wholesale whenever the viewport geometry changes.
//! - [`Neighborhood`]: the `{prev, active, next}` index triple, with `None`
//!   marking the ends of the strip.
//!
//! This crate deliberately does **not** know about widgets, pointer events, or
//! any particular UI framework. Host frameworks are responsible for:
//!
//! - Measuring slide elements and feeding [`SlideExtent`] values in.
//! - Applying returned rest positions as translations in whatever rendering
//!   system they use.
//! - Rebuilding the strip (not editing it) when the viewport resizes.
//!
//! ## Minimal example
//!
//! ```rust
//! use gliderail_strip::{Neighborhood, SlideExtent, SlideStrip};
//!
//! // Three 600px slides laid out flush inside an 800px viewport.
//! let extents = [
//!     SlideExtent::new(0.0, 600.0),
//!     SlideExtent::new(600.0, 600.0),
//!     SlideExtent::new(1200.0, 600.0),
//! ];
//! let strip = SlideStrip::from_extents(800.0, &extents);
//!
//! // Centering the first slide leaves a 100px margin on each side.
//! assert_eq!(strip.rest_position(0), Some(100.0));
//! assert_eq!(strip.rest_position(1), Some(-500.0));
//!
//! let hood = Neighborhood::around(1, strip.len());
//! assert_eq!(hood.prev, Some(0));
//! assert_eq!(hood.next, Some(2));
//! ```
//!
//! All positions live in the host's horizontal coordinate space (typically
//! logical pixels) and are expected to be finite. This crate is `no_std` and
//! uses `alloc`.

#![no_std]

extern crate alloc;

mod neighborhood;
mod strip;

pub use neighborhood::Neighborhood;
pub use strip::{SlideExtent, SlideStrip, rest_position};
