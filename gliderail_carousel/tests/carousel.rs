// Copyright 2026 the Gliderail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `gliderail_carousel` crate.
//!
//! These exercise the controller end to end: a measured strip, full pointer
//! gestures, change notifications, and the debounced resize path — the way a
//! host event loop would drive it.

use core::time::Duration;
use std::cell::RefCell;
use std::rc::Rc;

use gliderail_carousel::{Carousel, RESIZE_SETTLE_DELAY, SlideChange, TRANSITION_DURATION};
use gliderail_gesture::SwipeConfig;
use gliderail_strip::{SlideExtent, SlideStrip};
use kurbo::Point;

/// Four 760px slides laid out flush in an 800px viewport.
fn four_slide_strip() -> SlideStrip {
    let extents: Vec<SlideExtent> = (0..4)
        .map(|i| SlideExtent::new(f64::from(i) * 760.0, 760.0))
        .collect();
    SlideStrip::from_extents(800.0, &extents)
}

#[test]
fn construction_snapshot() {
    let carousel = Carousel::new(four_slide_strip());
    let info = carousel.debug_info();
    assert_eq!(info.slide_count, 4);
    assert_eq!(info.neighborhood.active, 0);
    assert_eq!(info.neighborhood.prev, None);
    assert_eq!(info.neighborhood.next, Some(1));
    assert_eq!(info.offset, 20.0);
    assert!(info.transition_enabled);
    assert!(!info.dragging);
}

#[test]
fn full_swipe_gesture_advances_and_notifies() {
    let seen: Rc<RefCell<Vec<SlideChange>>> = Rc::default();
    let log = Rc::clone(&seen);

    let mut carousel = Carousel::new(four_slide_strip());
    carousel.on_change(move |change| log.borrow_mut().push(change));

    // Press, drag left through several move events, release.
    carousel.pointer_down(Point::new(500.0, 240.0));
    for x in [480.0, 450.0, 420.0, 400.0] {
        let live = carousel.pointer_move(Point::new(x, 240.0)).unwrap();
        assert_eq!(live, 20.0 - (500.0 - x) * 1.6);
        assert!(!carousel.transition_enabled());
    }
    let change = carousel.pointer_up().unwrap();

    assert_eq!(change, SlideChange { from: 0, to: 1 });
    assert!(carousel.transition_enabled());
    assert_eq!(seen.borrow().as_slice(), &[SlideChange { from: 0, to: 1 }]);

    // The committed anchor is the new slide's rest position.
    let rest = carousel.strip().rest_position(1).unwrap();
    assert_eq!(carousel.final_position(), rest);
    assert_eq!(carousel.offset(), rest);
}

#[test]
fn inconclusive_swipe_snaps_back() {
    let mut carousel = Carousel::new(four_slide_strip());
    carousel.change_slide(1);

    carousel.pointer_down(Point::new(500.0, 0.0));
    carousel.pointer_move(Point::new(470.0, 0.0)); // movement 48, below 120
    let change = carousel.pointer_up().unwrap();

    assert!(change.is_resnap());
    assert_eq!(carousel.active_index(), 1);
    assert_eq!(
        carousel.offset(),
        carousel.strip().rest_position(1).unwrap()
    );
}

#[test]
fn swipe_past_the_last_slide_settles_in_place() {
    let mut carousel = Carousel::new(four_slide_strip());
    carousel.change_slide(3);

    carousel.pointer_down(Point::new(600.0, 0.0));
    carousel.pointer_move(Point::new(200.0, 0.0));
    let change = carousel.pointer_up().unwrap();

    assert_eq!(change, SlideChange { from: 3, to: 3 });
    assert_eq!(carousel.active_index(), 3);
}

#[test]
fn custom_tuning_flows_through_the_controller() {
    let config = SwipeConfig {
        gain: 1.0,
        threshold: 30.0,
    };
    let mut carousel = Carousel::with_config(four_slide_strip(), config);
    assert_eq!(carousel.swipe_config(), config);

    carousel.pointer_down(Point::new(500.0, 0.0));
    carousel.pointer_move(Point::new(460.0, 0.0)); // 40 raw > 30 threshold
    let change = carousel.pointer_up().unwrap();
    assert_eq!((change.from, change.to), (0, 1));
}

#[test]
fn debounced_resize_rebuilds_once() {
    let mut carousel = Carousel::new(four_slide_strip());
    carousel.change_slide(2);

    // A burst of resize events while the user drags the window edge.
    for t in [0_u64, 50, 120, 180] {
        carousel.viewport_resized(Duration::from_millis(t));
    }
    assert!(carousel.debug_info().resize_pending);
    assert!(!carousel.poll_resize(Duration::from_millis(400)));
    assert!(carousel.poll_resize(Duration::from_millis(180) + RESIZE_SETTLE_DELAY));
    assert!(!carousel.poll_resize(Duration::from_millis(10_000)));

    // The host remeasures under the new 1000px viewport.
    let extents: Vec<SlideExtent> = (0..4)
        .map(|i| SlideExtent::new(f64::from(i) * 760.0, 760.0))
        .collect();
    let change = carousel.remeasure(1000.0, &extents);
    assert!(change.is_resnap());
    assert_eq!(carousel.active_index(), 2);
    assert_eq!(
        carousel.offset(),
        -(2.0 * 760.0 - (1000.0 - 760.0) / 2.0)
    );
}

#[test]
fn timing_constants_match_the_stock_feel() {
    assert_eq!(TRANSITION_DURATION, Duration::from_millis(300));
    assert_eq!(RESIZE_SETTLE_DELAY, Duration::from_millis(400));
}

#[test]
fn dragging_then_arrows_keep_state_consistent() {
    let mut carousel = Carousel::new(four_slide_strip());

    carousel.pointer_down(Point::new(500.0, 0.0));
    carousel.pointer_move(Point::new(350.0, 0.0));
    carousel.pointer_up();
    assert_eq!(carousel.active_index(), 1);

    carousel.activate_next();
    carousel.activate_next();
    assert_eq!(carousel.active_index(), 3);
    assert_eq!(carousel.activate_next(), None);

    carousel.activate_prev();
    assert_eq!(carousel.active_index(), 2);
    assert_eq!(
        carousel.final_position(),
        carousel.strip().rest_position(2).unwrap()
    );
}
