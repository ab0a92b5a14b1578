// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`simulated`]: In-memory engine and synthetic preview source, used by the
//!   demo binary and the tests
//! - `ffmpeg` (feature `ffmpeg`): Seek previews via `FFmpeg` (implements [`PreviewSource`])
//!
//! [`PreviewSource`]: crate::application::port::PreviewSource

#[cfg(feature = "ffmpeg")]
pub mod ffmpeg;
pub mod simulated;

// Re-export main types for convenience
#[cfg(feature = "ffmpeg")]
pub use ffmpeg::FfmpegPreviewSource;
pub use simulated::{EngineCall, SimulatedEngine, SimulatedPreviewSource};
