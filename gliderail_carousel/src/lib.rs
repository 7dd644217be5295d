// Copyright 2026 the Gliderail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gliderail Carousel: a host-agnostic carousel controller.
//!
//! This crate composes the slide-strip geometry from `gliderail_strip` and the
//! swipe state machine from `gliderail_gesture` into a [`Carousel`] controller
//! that owns:
//!
//! - the current translation [`offset`](Carousel::offset) and its committed
//!   anchor (the rest position of the active slide),
//! - the active index and its [`Neighborhood`](gliderail_strip::Neighborhood),
//! - transition gating (live drags track the pointer with transitions off;
//!   snaps re-enable them),
//! - a [`SlideChange`] notification list for push-style hosts,
//! - a trailing-edge [`ResizeSettle`] timer for debounced rebuilds.
//!
//! The controller never draws and never talks to a windowing system. Hosts
//! normalize pointer input (mouse or touch) to [`kurbo::Point`] values, call
//! [`Carousel::pointer_down`], [`Carousel::pointer_move`], and
//! [`Carousel::pointer_up`], and render the resulting offset as a horizontal
//! translation, animating it over [`TRANSITION_DURATION`] whenever
//! [`Carousel::transition_enabled`] is `true`.
//!
//! ## Minimal example
//!
//! ```rust
//! use gliderail_carousel::Carousel;
//! use gliderail_strip::{SlideExtent, SlideStrip};
//! use kurbo::Point;
//!
//! let extents = [
//!     SlideExtent::new(0.0, 760.0),
//!     SlideExtent::new(760.0, 760.0),
//!     SlideExtent::new(1520.0, 760.0),
//! ];
//! let mut carousel = Carousel::new(SlideStrip::from_extents(800.0, &extents));
//! assert_eq!(carousel.active_index(), 0);
//!
//! // Swipe left far enough to advance.
//! carousel.pointer_down(Point::new(500.0, 200.0));
//! carousel.pointer_move(Point::new(400.0, 205.0));
//! let change = carousel.pointer_up().unwrap();
//! assert_eq!((change.from, change.to), (0, 1));
//! assert_eq!(carousel.offset(), carousel.strip().rest_position(1).unwrap());
//! ```
//!
//! Navigation controls compose the controller through the [`SlideDeck`]
//! capability trait rather than inheriting from it; see `gliderail_controls`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod carousel;
mod deck;
mod settle;

use core::time::Duration;

pub use carousel::{Carousel, CarouselDebugInfo};
pub use deck::{SlideChange, SlideDeck};
pub use settle::ResizeSettle;

/// How long hosts should animate a snap to a rest position.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(300);

/// How long the viewport must hold still before a resize rebuild fires.
pub const RESIZE_SETTLE_DELAY: Duration = Duration::from_millis(400);
