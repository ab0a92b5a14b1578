// SPDX-License-Identifier: MPL-2.0
//! One touch-down to touch-up cycle and its classification.

use super::{classify, Swipe, SwipeThresholds};
use crate::domain::gesture::{Direction, HoldDuration, Point};
use crate::seek::ScrubSession;
use std::time::Instant;

/// Classification of the current touch.
///
/// A touch is exactly one of these at any instant; there is no way to be
/// scrubbing and long-tapping at the same time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Finger down, nothing recognized yet.
    Pending,
    /// Held past the long-tap threshold; playback runs fast until release.
    LongTap,
    /// Horizontal swipe driving a scrub.
    Horizontal(ScrubSession),
    /// Vertical swipe; the quick seek already fired.
    Vertical { direction: Direction },
}

impl Gesture {
    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Gesture::Pending => "pending",
            Gesture::LongTap => "long-tap",
            Gesture::Horizontal(_) => "horizontal",
            Gesture::Vertical { .. } => "vertical",
        }
    }
}

/// What a finished touch amounted to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Release {
    /// A short press with no movement.
    Tap,
    /// A press too long for a tap that never became anything else.
    Nothing,
    /// A long-tap ended; normal speed must be restored.
    LongTapEnded,
    /// A scrub ended; the final seek must be issued.
    ScrubEnded(ScrubSession),
    /// A quick-seek swipe ended.
    QuickSeekEnded,
}

/// The single active touch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchSession {
    origin: Point,
    started_at: Instant,
    gesture: Gesture,
}

impl TouchSession {
    #[must_use]
    pub fn new(origin: Point, started_at: Instant) -> Self {
        Self {
            origin,
            started_at,
            gesture: Gesture::Pending,
        }
    }

    #[must_use]
    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.gesture, Gesture::Pending)
    }

    /// Checks a move of a pending touch for a swipe.
    ///
    /// Always `None` once the touch is classified.
    #[must_use]
    pub fn detect_swipe(&self, current: Point, thresholds: &SwipeThresholds) -> Option<Swipe> {
        if !self.is_pending() {
            return None;
        }
        classify(self.origin, current, thresholds)
    }

    /// Turns a pending touch into a long-tap. Returns false if the touch was
    /// already classified.
    pub fn promote_to_long_tap(&mut self) -> bool {
        if !self.is_pending() {
            return false;
        }
        self.gesture = Gesture::LongTap;
        true
    }

    /// Turns a pending touch into a scrub.
    pub fn begin_scrub(&mut self, scrub: ScrubSession) -> bool {
        if !self.is_pending() {
            return false;
        }
        self.gesture = Gesture::Horizontal(scrub);
        true
    }

    /// Turns a pending touch into a quick-seek swipe.
    pub fn begin_quick_seek(&mut self, direction: Direction) -> bool {
        if !self.is_pending() {
            return false;
        }
        self.gesture = Gesture::Vertical { direction };
        true
    }

    /// The running scrub, if this touch is one.
    pub fn scrub_mut(&mut self) -> Option<&mut ScrubSession> {
        match &mut self.gesture {
            Gesture::Horizontal(scrub) => Some(scrub),
            _ => None,
        }
    }

    /// Finishes the touch.
    ///
    /// A pending touch is a tap only if it lasted strictly less than
    /// `tap_max`.
    #[must_use]
    pub fn release(self, now: Instant, tap_max: HoldDuration) -> Release {
        match self.gesture {
            Gesture::LongTap => Release::LongTapEnded,
            Gesture::Horizontal(scrub) => Release::ScrubEnded(scrub),
            Gesture::Vertical { .. } => Release::QuickSeekEnded,
            Gesture::Pending => {
                let held = now.saturating_duration_since(self.started_at);
                if held < tap_max.as_duration() {
                    Release::Tap
                } else {
                    Release::Nothing
                }
            }
        }
    }
}
