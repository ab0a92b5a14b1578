// SPDX-License-Identifier: MPL-2.0
//! Current/total time labels.

use crate::domain::video::{format_clock, whole_seconds};

/// Formatted time labels, rebuilt only when the visible text would change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockDisplay {
    current: String,
    total: String,
    last_whole_second: Option<u64>,
}

impl Default for ClockDisplay {
    fn default() -> Self {
        Self {
            current: format_clock(0.0),
            total: format_clock(0.0),
            last_whole_second: None,
        }
    }
}

impl ClockDisplay {
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    #[must_use]
    pub fn total(&self) -> &str {
        &self.total
    }

    /// Updates the labels from the engine.
    ///
    /// While a scrub runs the current label mirrors `scrub_target` instead of
    /// the playback position.
    pub fn refresh(&mut self, position_secs: f64, duration_secs: f64, scrub_target: Option<f64>) {
        self.total = format_clock(duration_secs);

        if let Some(target) = scrub_target {
            self.show_target(target);
            return;
        }

        let second = whole_seconds(position_secs);
        if self.last_whole_second != Some(second) {
            self.last_whole_second = Some(second);
            self.current = format_clock(position_secs);
        }
    }

    /// Shows a seek target immediately.
    pub fn show_target(&mut self, target_secs: f64) {
        self.current = format_clock(target_secs);
        // Next refresh from the engine must redraw
        self.last_whole_second = None;
    }
}
