// Copyright 2026 the Gliderail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gliderail Gesture: the press/move/release swipe state machine.
//!
//! This crate tracks one horizontal swipe at a time and turns it into a
//! navigation verdict. It is a small, focused state machine in the spirit of
//! drag trackers found in UI event-state crates:
//!
//! - **Stateful but simple**: an explicit [`SwipePhase`] (idle or dragging),
//!   the press origin, and the latest scaled movement.
//! - **Integration-friendly**: hosts feed raw pointer positions in (mouse or
//!   touch, already normalized to a [`kurbo::Point`]) and apply the returned
//!   movement however they render.
//! - **Tunable**: the movement gain and the release threshold live in
//!   [`SwipeConfig`]; the defaults give the stock carousel feel.
//!
//! Only the X coordinate of incoming points is consumed; carousels swipe
//! horizontally and vertical jitter is ignored.
//!
//! ## Lifecycle
//!
//! 1) [`SwipeTracker::press`] on pointer-down records the origin and enters
//!    [`SwipePhase::Dragging`].
//! 2) [`SwipeTracker::drag_to`] on every pointer-move returns the scaled
//!    movement `(start_x - x) * gain`, positive when swiping toward the next
//!    slide. Moves while idle return `None`.
//! 3) [`SwipeTracker::release`] on pointer-up returns a [`SwipeVerdict`] and
//!    resets to idle.
//!
//! ## Minimal example
//!
//! ```rust
//! use gliderail_gesture::{SwipeTracker, SwipeVerdict};
//! use kurbo::Point;
//!
//! let mut swipe = SwipeTracker::default();
//!
//! swipe.press(Point::new(500.0, 300.0));
//! assert!(swipe.is_dragging());
//!
//! // Dragging 100px left is amplified by the default 1.6 gain.
//! let movement = swipe.drag_to(Point::new(400.0, 310.0)).unwrap();
//! assert_eq!(movement, 160.0);
//!
//! // 160 clears the default 120 threshold: advance.
//! assert_eq!(swipe.release(), Some(SwipeVerdict::Advance));
//! assert!(!swipe.is_dragging());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod swipe;

pub use swipe::{SwipeConfig, SwipePhase, SwipeTracker, SwipeVerdict};
