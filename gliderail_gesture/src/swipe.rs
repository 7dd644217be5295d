// Copyright 2026 the Gliderail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe tracking: origin capture, amplified movement, release verdicts.

use kurbo::Point;

/// Tuning parameters for swipe recognition.
///
/// `gain` amplifies raw pointer displacement so a drag feels faster than a
/// 1:1 track; `threshold` is the scaled movement a swipe must *exceed*
/// (strictly) to count as a navigation. The defaults are the stock carousel
/// feel: gain `1.6`, threshold `120.0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Multiplier applied to raw horizontal displacement.
    pub gain: f64,
    /// Scaled movement a release must exceed to advance or retreat.
    pub threshold: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            gain: 1.6,
            threshold: 120.0,
        }
    }
}

impl SwipeConfig {
    /// Classifies a final scaled movement.
    ///
    /// Comparisons are strict: a movement of exactly `threshold` (or
    /// `-threshold`) settles rather than navigating.
    #[must_use]
    pub fn verdict(&self, movement: f64) -> SwipeVerdict {
        if movement > self.threshold {
            SwipeVerdict::Advance
        } else if movement < -self.threshold {
            SwipeVerdict::Retreat
        } else {
            SwipeVerdict::Settle
        }
    }
}

/// Phase of the swipe state machine.
///
/// Transitions are guarded by this enum rather than by implicit handler
/// registration: a move while `Idle` is ignored, a press while `Dragging`
/// restarts the gesture from the new origin.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SwipePhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A pointer is down and movement is being tracked.
    Dragging,
}

/// Outcome of a released swipe.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SwipeVerdict {
    /// Movement exceeded the threshold toward the next slide.
    Advance,
    /// Movement exceeded the threshold toward the previous slide.
    Retreat,
    /// Inconclusive movement; snap back to the current slide.
    Settle,
}

/// Tracks one horizontal swipe from press to release.
///
/// Positive movement means the pointer traveled left, i.e. toward the next
/// slide; the sign convention matches the translation the carousel applies
/// (`anchor - movement`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SwipeTracker {
    config: SwipeConfig,
    phase: SwipePhase,
    start_x: f64,
    movement: f64,
}

impl SwipeTracker {
    /// Creates a tracker with custom tuning.
    #[must_use]
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Begins a gesture at the given pointer position.
    ///
    /// Pressing while already dragging abandons the old gesture and restarts
    /// from the new origin.
    pub fn press(&mut self, pos: Point) {
        self.phase = SwipePhase::Dragging;
        self.start_x = pos.x;
        self.movement = 0.0;
    }

    /// Advances the gesture to a new pointer position.
    ///
    /// Returns the scaled movement `(start_x - x) * gain`, or `None` when no
    /// gesture is in progress (a move without a press is ignored).
    pub fn drag_to(&mut self, pos: Point) -> Option<f64> {
        if self.phase != SwipePhase::Dragging {
            return None;
        }
        self.movement = (self.start_x - pos.x) * self.config.gain;
        Some(self.movement)
    }

    /// Ends the gesture, returning the verdict for its final movement.
    ///
    /// Returns `None` when no gesture was in progress. The tracker is idle
    /// afterwards either way.
    pub fn release(&mut self) -> Option<SwipeVerdict> {
        if self.phase != SwipePhase::Dragging {
            return None;
        }
        self.phase = SwipePhase::Idle;
        Some(self.config.verdict(self.movement))
    }

    /// Returns `true` while a gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase == SwipePhase::Dragging
    }

    /// Current phase of the state machine.
    #[must_use]
    pub fn phase(&self) -> SwipePhase {
        self.phase
    }

    /// Latest scaled movement of the current (or last) gesture.
    #[must_use]
    pub fn movement(&self) -> f64 {
        self.movement
    }

    /// The tracker's tuning parameters.
    #[must_use]
    pub fn config(&self) -> SwipeConfig {
        self.config
    }
}
