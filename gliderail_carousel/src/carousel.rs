// Copyright 2026 the Gliderail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel controller: offset anchoring, index bookkeeping, notification.

use alloc::boxed::Box;
use core::fmt;
use core::time::Duration;

use kurbo::Point;
use smallvec::SmallVec;

use gliderail_gesture::{SwipeConfig, SwipeTracker, SwipeVerdict};
use gliderail_strip::{Neighborhood, SlideExtent, SlideStrip};

use crate::deck::{SlideChange, SlideDeck};
use crate::settle::ResizeSettle;
use crate::RESIZE_SETTLE_DELAY;

type ChangeListener = Box<dyn FnMut(SlideChange)>;

/// Host-agnostic carousel controller.
///
/// Owns the slide strip, the swipe tracker, the committed position anchor,
/// and the active-index neighborhood. All mutating operations return typed
/// [`SlideChange`] values (and also push them to listeners registered with
/// [`on_change`](Self::on_change)) so hosts can choose pull- or push-style
/// integration.
///
/// Two position fields cooperate during a drag:
///
/// - `final_position` is the committed anchor — the rest position of the
///   active slide whenever no drag is in progress.
/// - `offset` is what the host renders. Mid-drag it is
///   `final_position - movement`; at rest it equals `final_position`.
pub struct Carousel {
    strip: SlideStrip,
    hood: Neighborhood,
    swipe: SwipeTracker,
    offset: f64,
    final_position: f64,
    transition_enabled: bool,
    settle: ResizeSettle,
    listeners: SmallVec<[ChangeListener; 2]>,
}

impl Carousel {
    /// Creates a controller over a strip, activating slide 0.
    ///
    /// # Panics
    ///
    /// Panics if the strip is empty; use [`try_new`](Self::try_new) when the
    /// slide count is not statically known.
    #[must_use]
    pub fn new(strip: SlideStrip) -> Self {
        match Self::try_new(strip) {
            Some(carousel) => carousel,
            None => panic!("carousel requires at least one slide"),
        }
    }

    /// Creates a controller over a strip, or `None` if the strip is empty.
    #[must_use]
    pub fn try_new(strip: SlideStrip) -> Option<Self> {
        Self::try_with_config(strip, SwipeConfig::default())
    }

    /// Creates a controller with custom swipe tuning.
    ///
    /// # Panics
    ///
    /// Panics if the strip is empty.
    #[must_use]
    pub fn with_config(strip: SlideStrip, config: SwipeConfig) -> Self {
        match Self::try_with_config(strip, config) {
            Some(carousel) => carousel,
            None => panic!("carousel requires at least one slide"),
        }
    }

    /// Creates a controller with custom swipe tuning, or `None` if the strip
    /// is empty.
    #[must_use]
    pub fn try_with_config(strip: SlideStrip, config: SwipeConfig) -> Option<Self> {
        let rest = strip.rest_position(0)?;
        Some(Self {
            hood: Neighborhood::around(0, strip.len()),
            swipe: SwipeTracker::new(config),
            offset: rest,
            final_position: rest,
            transition_enabled: true,
            settle: ResizeSettle::new(RESIZE_SETTLE_DELAY),
            listeners: SmallVec::new(),
            strip,
        })
    }

    /// Registers a listener invoked after every authoritative index change.
    ///
    /// Listeners run after the controller's state is consistent, so reading
    /// [`active_index`](Self::active_index) from inside one observes the new
    /// index. Re-snaps notify too, with `from == to`.
    pub fn on_change(&mut self, listener: impl FnMut(SlideChange) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Jumps directly to `index`: snaps the offset to its rest position,
    /// recomputes the neighborhood, and notifies listeners.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range; valid indices are a caller
    /// contract.
    pub fn change_slide(&mut self, index: usize) -> SlideChange {
        let rest = match self.strip.rest_position(index) {
            Some(rest) => rest,
            None => panic!(
                "slide index {index} out of range for {} slides",
                self.strip.len()
            ),
        };
        let from = self.hood.active;
        self.offset = rest;
        self.final_position = rest;
        self.hood = Neighborhood::around(index, self.strip.len());
        let change = SlideChange { from, to: index };
        self.notify(change);
        change
    }

    /// Activates the previous slide, or returns `None` at the start.
    pub fn activate_prev(&mut self) -> Option<SlideChange> {
        self.hood.prev.map(|prev| self.change_slide(prev))
    }

    /// Activates the next slide, or returns `None` at the end.
    pub fn activate_next(&mut self) -> Option<SlideChange> {
        self.hood.next.map(|next| self.change_slide(next))
    }

    /// Begins a drag at the given pointer position.
    ///
    /// Disables the transition so subsequent moves track the pointer with no
    /// lag. Hosts should also suppress their platform's default drag behavior
    /// for mouse input.
    pub fn pointer_down(&mut self, pos: Point) {
        self.transition_enabled = false;
        self.swipe.press(pos);
    }

    /// Tracks a drag to a new pointer position.
    ///
    /// Returns the live offset `final_position - movement`, already applied
    /// as the current [`offset`](Self::offset), or `None` when no drag is in
    /// progress. Called unthrottled, once per move event.
    pub fn pointer_move(&mut self, pos: Point) -> Option<f64> {
        let movement = self.swipe.drag_to(pos)?;
        self.offset = self.final_position - movement;
        Some(self.offset)
    }

    /// Ends a drag: commits the live offset, re-enables the transition, and
    /// resolves the release verdict.
    ///
    /// A movement beyond the threshold advances or retreats when a neighbor
    /// exists in that direction; anything else (including a past-the-end
    /// swipe) re-snaps to the active slide. Returns `None` when no drag was
    /// in progress.
    pub fn pointer_up(&mut self) -> Option<SlideChange> {
        let verdict = self.swipe.release()?;
        self.final_position = self.offset;
        self.transition_enabled = true;
        let target = match verdict {
            SwipeVerdict::Advance => self.hood.next.unwrap_or(self.hood.active),
            SwipeVerdict::Retreat => self.hood.prev.unwrap_or(self.hood.active),
            SwipeVerdict::Settle => self.hood.active,
        };
        Some(self.change_slide(target))
    }

    /// Records a viewport resize at `now`, arming the settle timer.
    pub fn viewport_resized(&mut self, now: Duration) {
        self.settle.note(now);
    }

    /// Polls the settle timer. Returns `true` exactly once per resize burst,
    /// after which the host should measure and call
    /// [`remeasure`](Self::remeasure).
    pub fn poll_resize(&mut self, now: Duration) -> bool {
        self.settle.take_due(now)
    }

    /// Rebuilds the strip wholesale from fresh measurements and re-snaps to
    /// the active slide (clamped if the strip shrank past it).
    ///
    /// # Panics
    ///
    /// Panics if `extents` is empty, matching [`new`](Self::new).
    pub fn remeasure(&mut self, viewport_width: f64, extents: &[SlideExtent]) -> SlideChange {
        let strip = SlideStrip::from_extents(viewport_width, extents);
        let last = match strip.last_index() {
            Some(last) => last,
            None => panic!("carousel requires at least one slide"),
        };
        self.strip = strip;
        let active = self.hood.active.min(last);
        self.change_slide(active)
    }

    /// Index of the active slide.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.hood.active
    }

    /// The active slide's `{prev, active, next}` neighborhood.
    #[must_use]
    pub fn neighborhood(&self) -> Neighborhood {
        self.hood
    }

    /// Number of slides.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.strip.len()
    }

    /// The slide strip currently in use.
    #[must_use]
    pub fn strip(&self) -> &SlideStrip {
        &self.strip
    }

    /// Translation the host should render right now.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Committed position anchor; equals the active slide's rest position
    /// except mid-drag.
    #[must_use]
    pub fn final_position(&self) -> f64 {
        self.final_position
    }

    /// Whether the host should animate offset changes.
    #[must_use]
    pub fn transition_enabled(&self) -> bool {
        self.transition_enabled
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.swipe.is_dragging()
    }

    /// The swipe tuning in effect.
    #[must_use]
    pub fn swipe_config(&self) -> SwipeConfig {
        self.swipe.config()
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CarouselDebugInfo {
        CarouselDebugInfo {
            slide_count: self.strip.len(),
            neighborhood: self.hood,
            offset: self.offset,
            final_position: self.final_position,
            transition_enabled: self.transition_enabled,
            dragging: self.swipe.is_dragging(),
            resize_pending: self.settle.is_armed(),
        }
    }

    fn notify(&mut self, change: SlideChange) {
        for listener in &mut self.listeners {
            listener(change);
        }
    }
}

impl fmt::Debug for Carousel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("strip", &self.strip)
            .field("hood", &self.hood)
            .field("swipe", &self.swipe)
            .field("offset", &self.offset)
            .field("final_position", &self.final_position)
            .field("transition_enabled", &self.transition_enabled)
            .field("settle", &self.settle)
            .finish_non_exhaustive()
    }
}

impl SlideDeck for Carousel {
    fn change_slide(&mut self, index: usize) -> SlideChange {
        Self::change_slide(self, index)
    }

    fn activate_prev(&mut self) -> Option<SlideChange> {
        Self::activate_prev(self)
    }

    fn activate_next(&mut self) -> Option<SlideChange> {
        Self::activate_next(self)
    }

    fn slide_count(&self) -> usize {
        Self::slide_count(self)
    }

    fn active_index(&self) -> usize {
        Self::active_index(self)
    }
}

/// Debug snapshot of a [`Carousel`] state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CarouselDebugInfo {
    /// Number of slides in the strip.
    pub slide_count: usize,
    /// Active index and its navigable neighbors.
    pub neighborhood: Neighborhood,
    /// Translation the host renders right now.
    pub offset: f64,
    /// Committed position anchor.
    pub final_position: f64,
    /// Whether offset changes should animate.
    pub transition_enabled: bool,
    /// Whether a drag is in progress.
    pub dragging: bool,
    /// Whether a debounced resize rebuild is pending.
    pub resize_pending: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn strip_of(n: usize) -> SlideStrip {
        // n narrow slides laid out flush in an 800px viewport.
        let extents: Vec<SlideExtent> = (0..n)
            .map(|i| SlideExtent::new(i as f64 * 760.0, 760.0))
            .collect();
        SlideStrip::from_extents(800.0, &extents)
    }

    #[test]
    fn new_activates_slide_zero() {
        let carousel = Carousel::new(strip_of(4));
        assert_eq!(carousel.active_index(), 0);
        assert_eq!(carousel.offset(), 20.0);
        assert_eq!(carousel.final_position(), 20.0);
        assert!(carousel.transition_enabled());
        assert_eq!(carousel.neighborhood(), Neighborhood::around(0, 4));
    }

    #[test]
    fn try_new_rejects_empty_strips() {
        assert!(Carousel::try_new(SlideStrip::default()).is_none());
    }

    #[test]
    #[should_panic(expected = "at least one slide")]
    fn new_panics_on_empty_strip() {
        let _ = Carousel::new(SlideStrip::default());
    }

    #[test]
    fn change_slide_snaps_offset_and_anchor() {
        let mut carousel = Carousel::new(strip_of(4));
        let change = carousel.change_slide(2);
        assert_eq!(change, SlideChange { from: 0, to: 2 });
        let rest = carousel.strip().rest_position(2).unwrap();
        assert_eq!(carousel.offset(), rest);
        assert_eq!(carousel.final_position(), rest);
        assert_eq!(carousel.neighborhood(), Neighborhood::around(2, 4));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn change_slide_out_of_range_panics() {
        let mut carousel = Carousel::new(strip_of(2));
        let _ = carousel.change_slide(2);
    }

    #[test]
    fn activate_next_stops_at_the_end() {
        let mut carousel = Carousel::new(strip_of(3));
        assert!(carousel.activate_next().is_some());
        assert!(carousel.activate_next().is_some());
        assert_eq!(carousel.active_index(), 2);
        assert_eq!(carousel.activate_next(), None);
        assert_eq!(carousel.active_index(), 2);
    }

    #[test]
    fn activate_prev_stops_at_the_start() {
        let mut carousel = Carousel::new(strip_of(3));
        assert_eq!(carousel.activate_prev(), None);
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn drag_tracks_pointer_with_transition_disabled() {
        let mut carousel = Carousel::new(strip_of(4));
        let anchor = carousel.final_position();

        carousel.pointer_down(Point::new(500.0, 0.0));
        assert!(!carousel.transition_enabled());
        assert!(carousel.is_dragging());

        // 50px leftward travel at gain 1.6: live offset = anchor - 80.
        let live = carousel.pointer_move(Point::new(450.0, 0.0)).unwrap();
        assert_eq!(live, anchor - 80.0);
        assert_eq!(carousel.offset(), live);
        // Anchor is untouched mid-drag.
        assert_eq!(carousel.final_position(), anchor);
    }

    #[test]
    fn release_past_threshold_advances() {
        let mut carousel = Carousel::new(strip_of(4));
        carousel.pointer_down(Point::new(500.0, 0.0));
        carousel.pointer_move(Point::new(400.0, 0.0));
        let change = carousel.pointer_up().unwrap();
        assert_eq!(change, SlideChange { from: 0, to: 1 });
        assert!(carousel.transition_enabled());
        assert_eq!(
            carousel.final_position(),
            carousel.strip().rest_position(1).unwrap()
        );
    }

    #[test]
    fn release_at_exact_threshold_resnaps() {
        let mut carousel = Carousel::new(strip_of(4));
        carousel.pointer_down(Point::new(500.0, 0.0));
        // 75px * 1.6 = 120 exactly: strict comparison, so settle.
        carousel.pointer_move(Point::new(425.0, 0.0));
        let change = carousel.pointer_up().unwrap();
        assert!(change.is_resnap());
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn release_past_the_end_resnaps() {
        let mut carousel = Carousel::new(strip_of(2));
        carousel.change_slide(1);
        carousel.pointer_down(Point::new(500.0, 0.0));
        carousel.pointer_move(Point::new(300.0, 0.0));
        let change = carousel.pointer_up().unwrap();
        assert_eq!(change, SlideChange { from: 1, to: 1 });
    }

    #[test]
    fn retreat_before_the_start_resnaps() {
        let mut carousel = Carousel::new(strip_of(2));
        carousel.pointer_down(Point::new(300.0, 0.0));
        carousel.pointer_move(Point::new(500.0, 0.0));
        let change = carousel.pointer_up().unwrap();
        assert!(change.is_resnap());
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn pointer_up_without_drag_is_ignored() {
        let mut carousel = Carousel::new(strip_of(2));
        assert_eq!(carousel.pointer_up(), None);
        assert_eq!(carousel.pointer_move(Point::new(1.0, 1.0)), None);
    }

    #[test]
    fn anchor_equals_active_rest_after_every_release() {
        let mut carousel = Carousel::new(strip_of(4));
        for target_x in [350.0, 650.0, 480.0] {
            carousel.pointer_down(Point::new(500.0, 0.0));
            carousel.pointer_move(Point::new(target_x, 0.0));
            carousel.pointer_up();
            let rest = carousel
                .strip()
                .rest_position(carousel.active_index())
                .unwrap();
            assert_eq!(carousel.final_position(), rest);
            assert_eq!(carousel.offset(), rest);
        }
    }

    #[test]
    fn listeners_observe_consistent_state() {
        use alloc::rc::Rc;
        use core::cell::RefCell;

        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);

        let mut carousel = Carousel::new(strip_of(4));
        carousel.on_change(move |change| log.borrow_mut().push((change.from, change.to)));

        carousel.change_slide(2);
        carousel.activate_next();
        carousel.activate_next(); // no-op at the end
        carousel.change_slide(3); // re-snap

        assert_eq!(&*seen.borrow(), &[(0, 2), (2, 3), (3, 3)]);
    }

    #[test]
    fn resize_rebuild_resnaps_active_slide() {
        let mut carousel = Carousel::new(strip_of(4));
        carousel.change_slide(1);

        carousel.viewport_resized(Duration::from_millis(0));
        carousel.viewport_resized(Duration::from_millis(200));
        assert!(!carousel.poll_resize(Duration::from_millis(500)));
        assert!(carousel.poll_resize(Duration::from_millis(600)));

        // Narrower viewport: same extents, new rest positions.
        let extents: Vec<SlideExtent> = (0..4)
            .map(|i| SlideExtent::new(i as f64 * 760.0, 760.0))
            .collect();
        let change = carousel.remeasure(600.0, &extents);
        assert!(change.is_resnap());
        assert_eq!(carousel.active_index(), 1);
        assert_eq!(carousel.offset(), -(760.0 - (600.0 - 760.0) / 2.0));
    }

    #[test]
    fn remeasure_clamps_a_vanished_active_index() {
        let mut carousel = Carousel::new(strip_of(4));
        carousel.change_slide(3);
        let change = carousel.remeasure(
            800.0,
            &[SlideExtent::new(0.0, 760.0), SlideExtent::new(760.0, 760.0)],
        );
        assert_eq!(change, SlideChange { from: 3, to: 1 });
        assert_eq!(carousel.slide_count(), 2);
    }

    #[test]
    fn debug_info_reflects_state() {
        let mut carousel = Carousel::new(strip_of(3));
        carousel.pointer_down(Point::new(100.0, 0.0));
        let info = carousel.debug_info();
        assert_eq!(info.slide_count, 3);
        assert!(info.dragging);
        assert!(!info.transition_enabled);
        assert!(!info.resize_pending);
    }

    #[test]
    fn deck_trait_mirrors_inherent_methods() {
        fn via_deck(deck: &mut dyn SlideDeck) -> (usize, usize) {
            deck.change_slide(1);
            (deck.active_index(), deck.slide_count())
        }
        let mut carousel = Carousel::new(strip_of(3));
        assert_eq!(via_deck(&mut carousel), (1, 3));
    }
}
