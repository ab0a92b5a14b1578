// SPDX-License-Identifier: MPL-2.0
//! Playback clock formatting.

/// Formats a media position as `MM:SS`, or `HH:MM:SS` once it reaches an hour.
///
/// Fractional seconds are truncated. Negative and non-finite values format
/// as `00:00`.
///
/// # Example
///
/// ```
/// use seek_overlay::domain::video::format_clock;
///
/// assert_eq!(format_clock(120.0), "02:00");
/// assert_eq!(format_clock(3725.9), "01:02:05");
/// ```
#[must_use]
pub fn format_clock(seconds: f64) -> String {
    let total = whole_seconds(seconds);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}

/// Truncates a position to whole seconds, mapping invalid input to zero.
#[must_use]
pub fn whole_seconds(seconds: f64) -> u64 {
    if seconds.is_finite() && seconds > 0.0 {
        // Saturating float-to-int cast
        seconds as u64
    } else {
        0
    }
}
