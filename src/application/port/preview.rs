// SPDX-License-Identifier: MPL-2.0
//! Seek preview port definition.
//!
//! This module defines the [`PreviewSource`] trait for extracting a small
//! frame at an arbitrary timestamp while the user scrubs. Infrastructure
//! adapters (like `FFmpeg`) implement this trait.
//!
//! # Design Notes
//!
//! - The source is **stateful**: it keeps the media open between requests
//! - Implementations may be slow; callers that must not block wrap the
//!   source in a worker
//! - `Ok(None)` means "no frame for this timestamp" and is not a failure

use crate::domain::media::PreviewImage;
use crate::error::PreviewError;
use std::path::Path;
use std::time::Duration;

/// Port for seek preview extraction.
///
/// # Lifecycle
///
/// 1. Create the source
/// 2. Call `open()` with the media path
/// 3. Call `frame_at()` for every scrub target
/// 4. Call `release()` when the media closes (also safe to call twice)
///
/// # Thread Safety
///
/// Implementations must be `Send` so a worker thread can own them.
pub trait PreviewSource: Send {
    /// Opens the media for preview extraction.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::OpenFailed`] if the media cannot be opened.
    fn open(&mut self, path: &Path) -> Result<(), PreviewError>;

    /// Returns the frame nearest to `timestamp`.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::NotOpened`] before a successful `open`, or
    /// [`PreviewError::DecodeFailed`] when the frame cannot be produced.
    fn frame_at(&mut self, timestamp: Duration) -> Result<Option<PreviewImage>, PreviewError>;

    /// Media duration, when known.
    fn duration(&self) -> Option<Duration>;

    /// Frees decoder resources.
    fn release(&mut self);

    /// Collects a frame finished in the background since the last call.
    ///
    /// Synchronous sources have nothing pending and keep the default.
    ///
    /// # Errors
    ///
    /// Returns the failure reported by the background decoder.
    fn poll_ready(&mut self) -> Result<Option<PreviewImage>, PreviewError> {
        Ok(None)
    }

    /// Forgets frames requested so far that have not been collected yet.
    ///
    /// Later `poll_ready` calls only return frames requested after this call.
    fn discard_pending(&mut self) {}
}
