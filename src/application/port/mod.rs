// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the overlay remains
//! independent of concrete playback engines and decoders.
//!
//! # Available Ports
//!
//! - [`engine`]: The playback engine the overlay drives (seek, pause, speed)
//! - [`preview`]: Seek preview frame extraction
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no `FFmpeg` types)
//! - Engine queries return `Option`: a missing value is normal while media loads
//! - Engine commands are fire-and-forget, the overlay never waits on them
//! - No `async fn`: slow adapters are moved off the UI loop by a worker
//!
//! # Example
//!
//! ```ignore
//! use seek_overlay::application::port::{PlaybackEngine, SeekCommand};
//!
//! fn skip_intro(engine: &mut impl PlaybackEngine) {
//!     engine.seek(SeekCommand::Relative { offset_secs: 90.0 });
//! }
//! ```

pub mod engine;
pub mod preview;

// Re-export main types for convenience
pub use engine::{PlaybackEngine, SeekCommand};
pub use preview::PreviewSource;
