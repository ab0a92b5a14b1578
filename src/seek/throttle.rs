// SPDX-License-Identifier: MPL-2.0
//! Rate limiting for seek commands produced by continuous drags.
//!
//! The gate drops commands instead of queueing them: while a drag moves,
//! only the newest position matters, and the final position is always
//! delivered by [`SeekThrottle::force`] when the drag ends.

use crate::application::port::{PlaybackEngine, SeekCommand};
use crate::domain::gesture::ThrottleInterval;
use std::time::Instant;

/// Gate that lets at most one seek through per interval.
#[derive(Debug, Clone)]
pub struct SeekThrottle {
    interval: ThrottleInterval,
    blocked_until: Option<Instant>,
}

impl SeekThrottle {
    #[must_use]
    pub fn new(interval: ThrottleInterval) -> Self {
        Self {
            interval,
            blocked_until: None,
        }
    }

    /// Returns true if a seek offered at `now` would be forwarded.
    #[must_use]
    pub fn is_open(&self, now: Instant) -> bool {
        self.blocked_until.is_none_or(|until| now >= until)
    }

    /// Forwards an exact absolute seek if the gate is open.
    ///
    /// Returns whether the command reached the engine. A refused command is
    /// discarded.
    pub fn offer<E>(&mut self, target_secs: f64, now: Instant, engine: &mut E) -> bool
    where
        E: PlaybackEngine + ?Sized,
    {
        if !self.is_open(now) {
            tracing::trace!(target_secs, "seek dropped by throttle");
            return false;
        }
        self.forward(target_secs, now, engine);
        true
    }

    /// Forwards an exact absolute seek regardless of the gate, then closes it.
    pub fn force<E>(&mut self, target_secs: f64, now: Instant, engine: &mut E)
    where
        E: PlaybackEngine + ?Sized,
    {
        self.forward(target_secs, now, engine);
    }

    fn forward<E>(&mut self, target_secs: f64, now: Instant, engine: &mut E)
    where
        E: PlaybackEngine + ?Sized,
    {
        engine.seek(SeekCommand::Absolute { target_secs });
        self.blocked_until = Some(now + self.interval.as_duration());
    }
}

impl Default for SeekThrottle {
    fn default() -> Self {
        Self::new(ThrottleInterval::default())
    }
}
