// SPDX-License-Identifier: MPL-2.0
//! Video playback domain types.
//!
//! This module contains playback-related value objects that are
//! independent of any presentation or infrastructure concerns.

pub mod clock;
pub mod newtypes;

// Re-export commonly used types
pub use clock::{format_clock, whole_seconds};
pub use newtypes::{BannerDuration, PlaybackSpeed, QuickSeekStep};
