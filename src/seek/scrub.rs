// SPDX-License-Identifier: MPL-2.0
//! State of an in-progress scrub, shared by finger swipes and seek bar drags.

use super::ScrubMapping;
use crate::domain::gesture::Direction;

/// What the overlay remembers while a scrub runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrubProgress {
    /// Playback was running when the scrub began and must resume after it.
    pub was_playing: bool,
    /// Latest clamped target in seconds.
    pub target_secs: f64,
    /// Direction indicator, unset until the first move.
    pub direction: Option<Direction>,
}

impl ScrubProgress {
    #[must_use]
    pub fn new(was_playing: bool, start_secs: f64) -> Self {
        Self {
            was_playing,
            target_secs: start_secs,
            direction: None,
        }
    }

    /// Records a new target and its direction.
    pub fn advance(&mut self, target_secs: f64, direction: Direction) {
        self.target_secs = target_secs;
        self.direction = Some(direction);
    }
}

/// A horizontal finger scrub: its mapping plus shared progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrubSession {
    pub mapping: ScrubMapping,
    pub progress: ScrubProgress,
}

impl ScrubSession {
    #[must_use]
    pub fn new(mapping: ScrubMapping, was_playing: bool) -> Self {
        Self {
            progress: ScrubProgress::new(was_playing, mapping.start_secs()),
            mapping,
        }
    }

    /// Moves the scrub to a finger at `x` and returns the new target.
    pub fn track(&mut self, x: f32, duration_secs: f64) -> f64 {
        let target = self.mapping.target(x, duration_secs);
        self.progress.advance(target, self.mapping.direction(x));
        target
    }
}
