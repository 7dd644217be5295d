// Copyright 2026 the Gliderail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walkthrough of the carousel controller driven by a synthetic host.
//!
//! Builds a four-slide strip, replays a swipe gesture, clicks the arrows and
//! the dot rail, and simulates a debounced window resize, printing the state
//! a real host would render at each step.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gliderail_carousel::{Carousel, SlideChange};
use gliderail_controls::{ArrowNav, DotRail};
use gliderail_strip::{SlideExtent, SlideStrip};
use kurbo::Point;

fn measure(viewport_width: f64, slide_width: f64, count: usize) -> Vec<SlideExtent> {
    (0..count)
        .map(|i| SlideExtent::new(i as f64 * slide_width, slide_width))
        .collect()
}

fn report(label: &str, carousel: &Carousel, dots: &DotRail) {
    let info = carousel.debug_info();
    println!(
        "{label:<28} active={} offset={:>8.1} transition={} dots={}",
        info.neighborhood.active,
        info.offset,
        if info.transition_enabled { "on " } else { "off" },
        dots.active(),
    );
}

fn main() {
    let viewport = 800.0;
    let extents = measure(viewport, 760.0, 4);
    let mut carousel = Carousel::new(SlideStrip::from_extents(viewport, &extents));

    // Push-style change log, the seam a rendering host would hang DOM/class
    // updates on.
    let changes: Rc<RefCell<Vec<SlideChange>>> = Rc::default();
    let log = Rc::clone(&changes);
    carousel.on_change(move |change| log.borrow_mut().push(change));

    let arrows = ArrowNav::new();
    let mut dots = DotRail::numbered(carousel.slide_count());
    dots.sync(&carousel);

    report("initial", &carousel, &dots);

    // A swipe: press at x=500, drag left to x=400, release. Movement is
    // (500 - 400) * 1.6 = 160, past the 120 threshold, so it advances.
    carousel.pointer_down(Point::new(500.0, 240.0));
    for x in [480.0, 450.0, 420.0, 400.0] {
        carousel.pointer_move(Point::new(x, 240.0));
        report("  dragging", &carousel, &dots);
    }
    if let Some(change) = carousel.pointer_up() {
        dots.apply(&change);
    }
    report("after swipe", &carousel, &dots);

    // Arrow clicks, including a no-op past the end.
    if let Some(change) = arrows.click_next(&mut carousel) {
        dots.apply(&change);
    }
    if let Some(change) = arrows.click_next(&mut carousel) {
        dots.apply(&change);
    }
    assert!(arrows.click_next(&mut carousel).is_none());
    report("after arrows", &carousel, &dots);

    // A dot click jumps directly, no gesture involved.
    dots.select(&mut carousel, 1);
    report("after dot click", &carousel, &dots);

    // The window resizes in a burst; only the trailing edge triggers a
    // remeasure, and the carousel re-snaps under the new geometry.
    for t in [0_u64, 80, 160] {
        carousel.viewport_resized(Duration::from_millis(t));
    }
    let settled = Duration::from_millis(160) + gliderail_carousel::RESIZE_SETTLE_DELAY;
    if carousel.poll_resize(settled) {
        let resized = measure(1000.0, 760.0, 4);
        let change = carousel.remeasure(1000.0, &resized);
        dots.apply(&change);
    }
    report("after resize", &carousel, &dots);

    println!("\nchange log:");
    for change in changes.borrow().iter() {
        let kind = if change.is_resnap() { "resnap" } else { "change" };
        println!("  {kind}: {} -> {}", change.from, change.to);
    }
}
