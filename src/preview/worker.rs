// SPDX-License-Identifier: MPL-2.0
//! Background preview decoding.
//!
//! [`PreviewWorker`] moves any [`PreviewSource`] onto a blocking thread and
//! talks to it through Tokio channels. Frame requests that pile up while the
//! decoder is busy collapse to the newest one, so a slow decoder never lags
//! behind the finger.

use crate::application::port::PreviewSource;
use crate::domain::media::PreviewImage;
use crate::error::PreviewError;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;

/// Commands sent to the worker thread.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerCommand {
    Open(PathBuf),
    Frame(Duration),
    /// Marks the point after which earlier frame results are unwanted.
    Flush,
    Release,
}

/// Events sent from the worker thread back to the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerEvent {
    /// The media opened; carries its duration if known.
    Opened(Option<Duration>),
    /// A requested frame finished decoding (`None` if there was no frame).
    Frame(Option<PreviewImage>),
    /// Every command sent before the matching [`WorkerCommand::Flush`] is done.
    Flushed,
    /// The source reported a failure.
    Failed(PreviewError),
}

/// Keeps only the newest of each run of consecutive frame requests.
#[must_use]
pub fn latest_wins(batch: Vec<WorkerCommand>) -> Vec<WorkerCommand> {
    let mut kept: Vec<WorkerCommand> = Vec::with_capacity(batch.len());
    for command in batch {
        if matches!(command, WorkerCommand::Frame(_))
            && matches!(kept.last(), Some(WorkerCommand::Frame(_)))
        {
            kept.pop();
        }
        kept.push(command);
    }
    kept
}

/// A [`PreviewSource`] that decodes on a background thread.
///
/// `frame_at` only queues a request and returns `Ok(None)`; finished frames
/// and failures are collected with [`PreviewSource::poll_ready`].
pub struct PreviewWorker {
    command_tx: mpsc::UnboundedSender<WorkerCommand>,
    event_rx: mpsc::Receiver<WorkerEvent>,
    opened: bool,
    duration: Option<Duration>,
    flushes_in_flight: usize,
}

impl PreviewWorker {
    /// Spawns the worker thread owning `source`.
    ///
    /// Uses the ambient Tokio runtime's blocking pool when there is one,
    /// otherwise a dedicated OS thread.
    pub fn spawn<S>(source: S) -> Self
    where
        S: PreviewSource + 'static,
    {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel(4);

        let run = move || Self::worker_loop(source, command_rx, event_tx);
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn_blocking(run);
            }
            Err(_) => {
                if let Err(e) = std::thread::Builder::new()
                    .name("seek-preview".to_string())
                    .spawn(run)
                {
                    tracing::warn!(error = %e, "could not start preview thread");
                }
            }
        }

        Self {
            command_tx,
            event_rx,
            opened: false,
            duration: None,
            flushes_in_flight: 0,
        }
    }

    /// Waits for the next event from the worker.
    ///
    /// Returns `None` once the worker has exited.
    pub async fn recv_event(&mut self) -> Option<WorkerEvent> {
        self.event_rx.recv().await
    }

    fn send(&self, command: WorkerCommand) -> Result<(), PreviewError> {
        self.command_tx
            .send(command)
            .map_err(|_| PreviewError::from_message("preview worker not running"))
    }

    fn worker_loop<S: PreviewSource>(
        mut source: S,
        mut command_rx: mpsc::UnboundedReceiver<WorkerCommand>,
        event_tx: mpsc::Sender<WorkerEvent>,
    ) {
        while let Some(first) = command_rx.blocking_recv() {
            let mut batch = vec![first];
            while let Ok(next) = command_rx.try_recv() {
                batch.push(next);
            }

            for command in latest_wins(batch) {
                let event = match command {
                    WorkerCommand::Open(path) => match source.open(&path) {
                        Ok(()) => WorkerEvent::Opened(source.duration()),
                        Err(e) => WorkerEvent::Failed(e),
                    },
                    WorkerCommand::Frame(timestamp) => match source.frame_at(timestamp) {
                        Ok(frame) => WorkerEvent::Frame(frame),
                        Err(e) => WorkerEvent::Failed(e),
                    },
                    WorkerCommand::Flush => WorkerEvent::Flushed,
                    WorkerCommand::Release => {
                        source.release();
                        continue;
                    }
                };

                if event_tx.blocking_send(event).is_err() {
                    // UI side is gone
                    source.release();
                    return;
                }
            }
        }
        source.release();
    }
}

impl PreviewSource for PreviewWorker {
    fn open(&mut self, path: &Path) -> Result<(), PreviewError> {
        self.send(WorkerCommand::Open(path.to_path_buf()))?;
        self.opened = true;
        Ok(())
    }

    fn frame_at(&mut self, timestamp: Duration) -> Result<Option<PreviewImage>, PreviewError> {
        if !self.opened {
            return Err(PreviewError::NotOpened);
        }
        self.send(WorkerCommand::Frame(timestamp))?;
        Ok(None)
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn release(&mut self) {
        if self.opened {
            // A dead worker has nothing left to release.
            let _ = self.send(WorkerCommand::Release);
        }
        self.opened = false;
        self.duration = None;
    }

    fn discard_pending(&mut self) {
        if self.opened && self.send(WorkerCommand::Flush).is_ok() {
            self.flushes_in_flight += 1;
        }
    }

    fn poll_ready(&mut self) -> Result<Option<PreviewImage>, PreviewError> {
        let mut latest = None;
        loop {
            match self.event_rx.try_recv() {
                Ok(WorkerEvent::Opened(duration)) => self.duration = duration,
                Ok(WorkerEvent::Frame(Some(frame))) if self.flushes_in_flight == 0 => {
                    latest = Some(frame);
                }
                Ok(WorkerEvent::Frame(_)) => {}
                Ok(WorkerEvent::Flushed) => {
                    self.flushes_in_flight = self.flushes_in_flight.saturating_sub(1);
                }
                Ok(WorkerEvent::Failed(e)) => return Err(e),
                Err(mpsc::error::TryRecvError::Empty) => return Ok(latest),
                Err(mpsc::error::TryRecvError::Disconnected) => {
                    if self.opened {
                        return Err(PreviewError::Unavailable);
                    }
                    return Ok(latest);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::simulated::SimulatedPreviewSource;
    use std::time::Duration;
    use tokio::time::timeout;

    const WAIT: Duration = Duration::from_secs(5);

    struct BrokenSource;

    impl PreviewSource for BrokenSource {
        fn open(&mut self, _path: &Path) -> Result<(), PreviewError> {
            Err(PreviewError::OpenFailed("no such file".to_string()))
        }

        fn frame_at(&mut self, _timestamp: Duration) -> Result<Option<PreviewImage>, PreviewError> {
            Err(PreviewError::NotOpened)
        }

        fn duration(&self) -> Option<Duration> {
            None
        }

        fn release(&mut self) {}
    }

    #[test]
    fn latest_wins_collapses_consecutive_frames() {
        let batch = vec![
            WorkerCommand::Frame(Duration::from_secs(1)),
            WorkerCommand::Frame(Duration::from_secs(2)),
            WorkerCommand::Frame(Duration::from_secs(3)),
        ];
        assert_eq!(
            latest_wins(batch),
            vec![WorkerCommand::Frame(Duration::from_secs(3))]
        );
    }

    #[test]
    fn latest_wins_keeps_order_around_other_commands() {
        let open = WorkerCommand::Open(PathBuf::from("a.mp4"));
        let batch = vec![
            open.clone(),
            WorkerCommand::Frame(Duration::from_secs(1)),
            WorkerCommand::Frame(Duration::from_secs(2)),
            WorkerCommand::Release,
            WorkerCommand::Frame(Duration::from_secs(4)),
        ];
        assert_eq!(
            latest_wins(batch),
            vec![
                open,
                WorkerCommand::Frame(Duration::from_secs(2)),
                WorkerCommand::Release,
                WorkerCommand::Frame(Duration::from_secs(4)),
            ]
        );
    }

    #[test]
    fn flush_separates_frame_runs() {
        let batch = vec![
            WorkerCommand::Frame(Duration::from_secs(1)),
            WorkerCommand::Flush,
            WorkerCommand::Frame(Duration::from_secs(2)),
        ];
        assert_eq!(latest_wins(batch.clone()), batch);
    }

    #[test]
    fn frame_before_open_is_rejected() {
        let mut worker = PreviewWorker::spawn(SimulatedPreviewSource::new(WAIT));
        assert_eq!(
            worker.frame_at(Duration::ZERO),
            Err(PreviewError::NotOpened)
        );
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn frames_arrive_in_background() {
        let mut worker = PreviewWorker::spawn(SimulatedPreviewSource::new(Duration::from_secs(60)));
        worker.open(Path::new("clip.mp4")).unwrap();
        assert_eq!(worker.frame_at(Duration::from_secs(30)), Ok(None));

        let opened = timeout(WAIT, worker.recv_event()).await.unwrap();
        assert_eq!(
            opened,
            Some(WorkerEvent::Opened(Some(Duration::from_secs(60))))
        );

        match timeout(WAIT, worker.recv_event()).await.unwrap() {
            Some(WorkerEvent::Frame(Some(frame))) => assert!(frame.width() > 0),
            other => panic!("expected a frame, got {other:?}"),
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn open_failure_is_reported() {
        let mut worker = PreviewWorker::spawn(BrokenSource);
        worker.open(Path::new("missing.mp4")).unwrap();

        let event = timeout(WAIT, worker.recv_event()).await.unwrap();
        assert!(matches!(
            event,
            Some(WorkerEvent::Failed(PreviewError::OpenFailed(_)))
        ));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn poll_ready_surfaces_failures() {
        let mut worker = PreviewWorker::spawn(BrokenSource);
        worker.open(Path::new("missing.mp4")).unwrap();

        let result = timeout(WAIT, async {
            loop {
                match worker.poll_ready() {
                    Ok(None) => tokio::time::sleep(Duration::from_millis(5)).await,
                    other => return other,
                }
            }
        })
        .await
        .unwrap();
        assert!(matches!(result, Err(PreviewError::OpenFailed(_))));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn discarded_frames_never_surface() {
        let mut worker = PreviewWorker::spawn(SimulatedPreviewSource::new(Duration::from_secs(60)));
        worker.open(Path::new("clip.mp4")).unwrap();
        worker.frame_at(Duration::from_secs(10)).unwrap();
        worker.discard_pending();

        // Once the flush has gone round trip the old frame is long decoded.
        let drained = timeout(WAIT, async {
            loop {
                assert_eq!(worker.poll_ready(), Ok(None));
                if worker.flushes_in_flight == 0 {
                    return;
                }
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await;
        assert!(drained.is_ok());

        worker.frame_at(Duration::from_secs(20)).unwrap();
        let fresh = timeout(WAIT, async {
            loop {
                if let Some(frame) = worker.poll_ready().unwrap() {
                    return frame;
                }
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .unwrap();
        assert!(fresh.width() > 0);
    }
}
