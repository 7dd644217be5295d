// Copyright 2026 the Gliderail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gliderail Controls: arrow and dot-rail navigation for carousel decks.
//!
//! This crate supplies the auxiliary controls that usually accompany a
//! carousel: a previous/next arrow pair and an index-aligned dot (or
//! thumbnail) rail. Both compose a deck through the
//! [`SlideDeck`](gliderail_carousel::SlideDeck) capability trait rather than
//! wrapping or inheriting a concrete controller, so they work against any
//! deck implementation — including mocks in tests.
//!
//! The crate holds control *state*, not control *widgets*: hosts render the
//! arrows and dots however they like and route click events into
//! [`ArrowNav::click_prev`], [`ArrowNav::click_next`], and
//! [`DotRail::select`]. The rail mirrors the deck's active slide through
//! [`DotRail::apply`], fed from the deck's change notifications.
//!
//! ## Minimal example
//!
//! ```rust
//! use gliderail_carousel::Carousel;
//! use gliderail_controls::{ArrowNav, DotRail};
//! use gliderail_strip::{SlideExtent, SlideStrip};
//!
//! let extents = [
//!     SlideExtent::new(0.0, 760.0),
//!     SlideExtent::new(760.0, 760.0),
//!     SlideExtent::new(1520.0, 760.0),
//! ];
//! let mut deck = Carousel::new(SlideStrip::from_extents(800.0, &extents));
//!
//! let arrows = ArrowNav::new();
//! let mut dots = DotRail::numbered(3);
//! dots.sync(&deck);
//!
//! // A click on the host's "next" button.
//! let change = arrows.click_next(&mut deck).unwrap();
//! dots.apply(&change);
//! assert_eq!(dots.active(), 1);
//!
//! // A click on dot 2 jumps directly.
//! dots.select(&mut deck, 2);
//! assert_eq!(deck.active_index(), 2);
//! assert_eq!(dots.active(), 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod arrows;
mod dots;

pub use arrows::ArrowNav;
pub use dots::DotRail;
