// SPDX-License-Identifier: MPL-2.0
//! Named, cancellable deadlines.
//!
//! Every deferred action of the overlay is one of a fixed set of
//! [`TimerKind`]s. Arming a kind replaces its previous deadline, so there is
//! never more than one pending action of each kind.

use std::time::{Duration, Instant};

/// Deferred actions owned by the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// A still press becomes a long-tap.
    LongTap,
    /// End of the short "user is interacting" window.
    InteractionGrace,
    /// Seek bar auto-hide.
    SeekBarHide,
    /// Playback resumes after a final seek.
    ResumePlayback,
    /// Pause/Resume banner expiry.
    PlaybackBanner,
    /// Quick-seek banner expiry.
    QuickSeekBanner,
    /// Volume banner expiry.
    VolumeBanner,
    /// Video info banner expiry.
    VideoInfoBanner,
}

impl TimerKind {
    /// All kinds, in the order simultaneous expiries are reported.
    pub const ALL: [TimerKind; 8] = [
        TimerKind::LongTap,
        TimerKind::InteractionGrace,
        TimerKind::SeekBarHide,
        TimerKind::ResumePlayback,
        TimerKind::PlaybackBanner,
        TimerKind::QuickSeekBanner,
        TimerKind::VolumeBanner,
        TimerKind::VideoInfoBanner,
    ];

    fn index(self) -> usize {
        match self {
            TimerKind::LongTap => 0,
            TimerKind::InteractionGrace => 1,
            TimerKind::SeekBarHide => 2,
            TimerKind::ResumePlayback => 3,
            TimerKind::PlaybackBanner => 4,
            TimerKind::QuickSeekBanner => 5,
            TimerKind::VolumeBanner => 6,
            TimerKind::VideoInfoBanner => 7,
        }
    }
}

/// One optional deadline per [`TimerKind`].
#[derive(Debug, Clone, Default)]
pub struct Timers {
    deadlines: [Option<Instant>; 8],
}

impl Timers {
    /// Arms `kind` to fire `delay` after `now`, replacing any previous deadline.
    pub fn arm(&mut self, kind: TimerKind, now: Instant, delay: Duration) {
        self.deadlines[kind.index()] = Some(now + delay);
    }

    /// Cancels `kind`. Returns true if it was armed.
    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        self.deadlines[kind.index()].take().is_some()
    }

    #[must_use]
    pub fn is_armed(&self, kind: TimerKind) -> bool {
        self.deadlines[kind.index()].is_some()
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.iter().flatten().min().copied()
    }

    /// Disarms and returns every kind whose deadline is at or before `now`,
    /// earliest first.
    pub fn take_expired(&mut self, now: Instant) -> Vec<TimerKind> {
        let mut expired: Vec<(Instant, TimerKind)> = TimerKind::ALL
            .iter()
            .filter_map(|&kind| {
                let at = self.deadlines[kind.index()]?;
                (at <= now).then_some((at, kind))
            })
            .collect();
        // Stable sort keeps ALL order for equal deadlines
        expired.sort_by_key(|&(at, _)| at);

        for &(_, kind) in &expired {
            self.deadlines[kind.index()] = None;
        }
        expired.into_iter().map(|(_, kind)| kind).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn armed_timer_fires_once() {
        let start = Instant::now();
        let mut timers = Timers::default();
        timers.arm(TimerKind::LongTap, start, 300 * MS);

        assert!(timers.take_expired(start + 299 * MS).is_empty());
        assert_eq!(
            timers.take_expired(start + 300 * MS),
            vec![TimerKind::LongTap]
        );
        assert!(timers.take_expired(start + 900 * MS).is_empty());
    }

    #[test]
    fn rearming_replaces_deadline() {
        let start = Instant::now();
        let mut timers = Timers::default();
        timers.arm(TimerKind::VolumeBanner, start, 1000 * MS);
        timers.arm(TimerKind::VolumeBanner, start + 500 * MS, 1000 * MS);

        assert!(timers.take_expired(start + 1200 * MS).is_empty());
        assert_eq!(timers.next_deadline(), Some(start + 1500 * MS));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let start = Instant::now();
        let mut timers = Timers::default();
        timers.arm(TimerKind::SeekBarHide, start, 10 * MS);

        assert!(timers.cancel(TimerKind::SeekBarHide));
        assert!(!timers.cancel(TimerKind::SeekBarHide));
        assert!(timers.take_expired(start + 20 * MS).is_empty());
    }

    #[test]
    fn expiries_are_ordered_by_deadline() {
        let start = Instant::now();
        let mut timers = Timers::default();
        timers.arm(TimerKind::VideoInfoBanner, start, 5 * MS);
        timers.arm(TimerKind::ResumePlayback, start, 10 * MS);
        timers.arm(TimerKind::LongTap, start, 10 * MS);

        assert_eq!(
            timers.take_expired(start + 10 * MS),
            vec![
                TimerKind::VideoInfoBanner,
                TimerKind::LongTap,
                TimerKind::ResumePlayback
            ]
        );
    }

    #[test]
    fn next_deadline_is_earliest() {
        let start = Instant::now();
        let mut timers = Timers::default();
        assert!(timers.next_deadline().is_none());

        timers.arm(TimerKind::SeekBarHide, start, 4000 * MS);
        timers.arm(TimerKind::PlaybackBanner, start, 1000 * MS);
        assert_eq!(timers.next_deadline(), Some(start + 1000 * MS));
        assert!(timers.is_armed(TimerKind::SeekBarHide));
    }
}
