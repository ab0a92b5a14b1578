// SPDX-License-Identifier: MPL-2.0
//! Thumbnail previews while scrubbing.
//!
//! [`PreviewBridge`] sits between the overlay and a [`PreviewSource`]. It asks
//! for a frame at every scrub target and keeps the newest one for display.
//! Previews are a nicety: the first failure of any kind turns them off for
//! the rest of the session and scrubbing carries on without them.

mod worker;

pub use worker::{latest_wins, PreviewWorker, WorkerCommand, WorkerEvent};

use crate::application::port::PreviewSource;
use crate::domain::media::PreviewImage;
use crate::error::PreviewError;
use std::path::Path;
use std::time::Duration;

/// Latest preview frame plus the source it comes from.
pub struct PreviewBridge {
    source: Option<Box<dyn PreviewSource>>,
    enabled: bool,
    image: Option<PreviewImage>,
}

impl std::fmt::Debug for PreviewBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewBridge")
            .field("has_source", &self.source.is_some())
            .field("enabled", &self.enabled)
            .field("has_image", &self.image.is_some())
            .finish()
    }
}

impl Default for PreviewBridge {
    fn default() -> Self {
        Self::disabled()
    }
}

impl PreviewBridge {
    /// Bridge backed by `source`. Nothing is requested until [`open`](Self::open).
    #[must_use]
    pub fn new(source: Box<dyn PreviewSource>) -> Self {
        Self {
            source: Some(source),
            enabled: false,
            image: None,
        }
    }

    /// Bridge that never produces previews.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            source: None,
            enabled: false,
            image: None,
        }
    }

    /// Opens `path` on the source and enables previews if that succeeds.
    pub fn open(&mut self, path: &Path) {
        self.image = None;
        let Some(source) = self.source.as_mut() else {
            return;
        };
        match source.open(path) {
            Ok(()) => {
                self.enabled = true;
                tracing::debug!(path = %path.display(), "seek preview enabled");
            }
            Err(e) => self.disable(&e),
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Frame to show, if any.
    #[must_use]
    pub fn image(&self) -> Option<&PreviewImage> {
        self.image.as_ref()
    }

    /// Asks for the frame at `target_secs`.
    ///
    /// A synchronous source answers at once; a worker answers on a later
    /// [`poll`](Self::poll). `Ok(None)` keeps the previous frame.
    pub fn request(&mut self, target_secs: f64) {
        if !self.enabled {
            return;
        }
        let Some(source) = self.source.as_mut() else {
            return;
        };
        let timestamp = Duration::try_from_secs_f64(target_secs.max(0.0)).unwrap_or_default();
        let result = source.frame_at(timestamp);
        self.accept(result);
    }

    /// Collects frames finished in the background. Returns true if the
    /// displayed frame changed.
    pub fn poll(&mut self) -> bool {
        if !self.enabled {
            return false;
        }
        let Some(source) = self.source.as_mut() else {
            return false;
        };
        let result = source.poll_ready();
        self.accept(result)
    }

    /// Drops the displayed frame along with any still being decoded.
    pub fn clear(&mut self) {
        self.image = None;
        if let Some(source) = self.source.as_mut() {
            source.discard_pending();
        }
    }

    fn accept(&mut self, result: Result<Option<PreviewImage>, PreviewError>) -> bool {
        match result {
            Ok(Some(image)) => {
                self.image = Some(image);
                true
            }
            Ok(None) => false,
            Err(e) => {
                self.disable(&e);
                false
            }
        }
    }

    fn disable(&mut self, error: &PreviewError) {
        if self.enabled || self.source.is_some() {
            tracing::warn!(error = %error, "seek preview failed, disabled for this session");
        }
        self.enabled = false;
        if let Some(mut source) = self.source.take() {
            source.release();
        }
    }
}

impl Drop for PreviewBridge {
    fn drop(&mut self) {
        if let Some(source) = self.source.as_mut() {
            source.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::simulated::SimulatedPreviewSource;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Source that fails after a number of good frames and counts calls.
    struct FlakySource {
        good_frames: usize,
        calls: Arc<AtomicUsize>,
        releases: Arc<AtomicUsize>,
    }

    impl PreviewSource for FlakySource {
        fn open(&mut self, _path: &Path) -> Result<(), PreviewError> {
            Ok(())
        }

        fn frame_at(&mut self, _timestamp: Duration) -> Result<Option<PreviewImage>, PreviewError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if n < self.good_frames {
                Ok(PreviewImage::from_rgba(1, 1, vec![0, 0, 0, 255]))
            } else {
                Err(PreviewError::DecodeFailed("corrupt packet".to_string()))
            }
        }

        fn duration(&self) -> Option<Duration> {
            None
        }

        fn release(&mut self) {
            self.releases.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn flaky(good_frames: usize) -> (PreviewBridge, Arc<AtomicUsize>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let releases = Arc::new(AtomicUsize::new(0));
        let bridge = PreviewBridge::new(Box::new(FlakySource {
            good_frames,
            calls: Arc::clone(&calls),
            releases: Arc::clone(&releases),
        }));
        (bridge, calls, releases)
    }

    /// Answers requests on the next poll, like a worker would.
    #[derive(Default)]
    struct DeferredSource {
        queued: Vec<Duration>,
    }

    impl PreviewSource for DeferredSource {
        fn open(&mut self, _path: &Path) -> Result<(), PreviewError> {
            Ok(())
        }

        fn frame_at(&mut self, timestamp: Duration) -> Result<Option<PreviewImage>, PreviewError> {
            self.queued.push(timestamp);
            Ok(None)
        }

        fn duration(&self) -> Option<Duration> {
            None
        }

        fn release(&mut self) {}

        fn poll_ready(&mut self) -> Result<Option<PreviewImage>, PreviewError> {
            Ok(self
                .queued
                .drain(..)
                .last()
                .and_then(|_| PreviewImage::from_rgba(1, 1, vec![9, 9, 9, 255])))
        }

        fn discard_pending(&mut self) {
            self.queued.clear();
        }
    }

    #[test]
    fn clear_drops_frames_still_in_flight() {
        let mut bridge = PreviewBridge::new(Box::new(DeferredSource::default()));
        bridge.open(Path::new("clip.mp4"));

        bridge.request(3.0);
        assert!(bridge.image().is_none());
        assert!(bridge.poll());
        assert!(bridge.image().is_some());

        bridge.request(6.0);
        bridge.clear();
        assert!(!bridge.poll());
        assert!(bridge.image().is_none());
    }

    #[test]
    fn nothing_is_requested_before_open() {
        let (mut bridge, calls, _) = flaky(10);
        bridge.request(5.0);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(bridge.image().is_none());
    }

    #[test]
    fn frames_are_stored_after_open() {
        let mut bridge = PreviewBridge::new(Box::new(SimulatedPreviewSource::new(
            Duration::from_secs(60),
        )));
        bridge.open(Path::new("clip.mp4"));
        assert!(bridge.is_enabled());

        bridge.request(12.0);
        assert!(bridge.image().is_some());

        bridge.clear();
        assert!(bridge.image().is_none());
    }

    #[test]
    fn missing_frame_keeps_previous_one() {
        let mut bridge = PreviewBridge::new(Box::new(SimulatedPreviewSource::new(
            Duration::from_secs(10),
        )));
        bridge.open(Path::new("clip.mp4"));
        bridge.request(5.0);
        let shown = bridge.image().cloned();

        bridge.request(50.0);
        assert_eq!(bridge.image().cloned(), shown);
        assert!(bridge.is_enabled());
    }

    #[test]
    fn first_failure_disables_for_good() {
        let (mut bridge, calls, releases) = flaky(1);
        bridge.open(Path::new("clip.mp4"));

        bridge.request(1.0);
        bridge.request(2.0);
        assert!(!bridge.is_enabled());
        assert_eq!(releases.load(Ordering::SeqCst), 1);

        bridge.request(3.0);
        bridge.open(Path::new("clip.mp4"));
        bridge.request(4.0);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(!bridge.is_enabled());
    }

    #[test]
    fn disabled_bridge_is_inert() {
        let mut bridge = PreviewBridge::disabled();
        bridge.open(Path::new("clip.mp4"));
        bridge.request(1.0);
        assert!(!bridge.poll());
        assert!(!bridge.is_enabled());
        assert!(bridge.image().is_none());
    }

    #[test]
    fn drop_releases_source() {
        let (mut bridge, _, releases) = flaky(5);
        bridge.open(Path::new("clip.mp4"));
        drop(bridge);
        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn negative_target_requests_first_frame() {
        let mut bridge = PreviewBridge::new(Box::new(SimulatedPreviewSource::new(
            Duration::from_secs(10),
        )));
        bridge.open(Path::new("clip.mp4"));
        bridge.request(-4.0);
        assert!(bridge.image().is_some());
    }
}
