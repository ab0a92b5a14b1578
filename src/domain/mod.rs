// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value objects with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`gesture`]: Touch geometry and tuning ([`Point`](gesture::Point),
//!   [`SwipeDistance`](gesture::SwipeDistance), [`ScrubRate`](gesture::ScrubRate))
//! - [`media`]: Media types ([`PreviewImage`](media::PreviewImage),
//!   [`display_name`](media::display_name))
//! - [`video`]: Playback types ([`PlaybackSpeed`](video::PlaybackSpeed),
//!   [`QuickSeekStep`](video::QuickSeekStep), [`format_clock`](video::format_clock))

pub mod gesture;
pub mod media;
pub mod video;
