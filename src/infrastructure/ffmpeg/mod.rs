// SPDX-License-Identifier: MPL-2.0
//! `FFmpeg` adapter implementing the [`PreviewSource`] port trait.
//!
//! This module provides [`FfmpegPreviewSource`], a synchronous decoder that
//! seeks to a timestamp, decodes the first frame at or after it and scales
//! it down to the preview size.
//!
//! # Design Notes
//!
//! - Seeks land on the keyframe before the target, then decode forward
//! - The scaler is recreated per request for Send safety
//! - Wrap the source in a [`PreviewWorker`] to keep it off the UI loop
//!
//! [`PreviewSource`]: crate::application::port::PreviewSource
//! [`PreviewWorker`]: crate::preview::PreviewWorker

use std::path::Path;
use std::sync::Once;
use std::time::Duration;

use crate::application::port::PreviewSource;
use crate::config::defaults::{PREVIEW_HEIGHT, PREVIEW_WIDTH};
use crate::domain::media::PreviewImage;
use crate::error::PreviewError;

/// Upper bound on frames decoded forward from the keyframe per request.
const MAX_FRAMES_AFTER_SEEK: usize = 240;

static FFMPEG_INIT: Once = Once::new();

/// Initialize `FFmpeg` with a quiet log level.
///
/// Safe to call multiple times; initialization only happens once.
fn init_ffmpeg() -> Result<(), PreviewError> {
    let mut init_result = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(PreviewError::OpenFailed(format!(
                "FFmpeg initialization failed: {e}"
            )));
            return;
        }

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}

/// `FFmpeg`-based preview source.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync` due to internal mutable state.
///
/// # Example
///
/// ```ignore
/// use seek_overlay::infrastructure::ffmpeg::FfmpegPreviewSource;
/// use seek_overlay::application::port::PreviewSource;
///
/// let mut source = FfmpegPreviewSource::new();
/// source.open(Path::new("video.mp4"))?;
/// let frame = source.frame_at(Duration::from_secs(42))?;
/// ```
#[derive(Default)]
pub struct FfmpegPreviewSource {
    state: Option<DecoderState>,
    duration: Option<Duration>,
}

/// Internal decoder state that holds `FFmpeg` contexts.
struct DecoderState {
    input_context: ffmpeg_next::format::context::Input,
    decoder: ffmpeg_next::decoder::Video,
    video_stream_index: usize,
    time_base_f64: f64,
}

// SAFETY: DecoderState contains FFmpeg types with internal raw pointers.
// The contexts are owned exclusively by one source, which is only ever used
// from one thread at a time (move semantics).
unsafe impl Send for DecoderState {}

impl FfmpegPreviewSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn create_scaler(
        decoder: &ffmpeg_next::decoder::Video,
    ) -> Result<ffmpeg_next::software::scaling::Context, PreviewError> {
        ffmpeg_next::software::scaling::Context::get(
            decoder.format(),
            decoder.width(),
            decoder.height(),
            ffmpeg_next::format::Pixel::RGBA,
            PREVIEW_WIDTH,
            PREVIEW_HEIGHT,
            ffmpeg_next::software::scaling::Flags::BILINEAR,
        )
        .map_err(|e| PreviewError::DecodeFailed(format!("Failed to create scaler: {e}")))
    }

    /// Extracts RGBA data from a scaled frame, dropping row padding.
    fn extract_rgba_data(frame: &ffmpeg_next::frame::Video) -> Vec<u8> {
        let width = frame.width() as usize;
        let height = frame.height() as usize;
        let data = frame.data(0);
        let stride = frame.stride(0);

        let mut rgba_bytes = Vec::with_capacity(width * height * 4);
        for y in 0..height {
            let row_start = y * stride;
            rgba_bytes.extend_from_slice(&data[row_start..row_start + width * 4]);
        }
        rgba_bytes
    }

    /// Decodes forward until a frame at or after `target_secs` appears.
    fn decode_from_keyframe(
        state: &mut DecoderState,
        target_secs: f64,
    ) -> Result<Option<ffmpeg_next::frame::Video>, PreviewError> {
        let mut decoded = ffmpeg_next::frame::Video::empty();
        let mut last: Option<ffmpeg_next::frame::Video> = None;
        let mut frames = 0;

        for (stream, packet) in state.input_context.packets() {
            if stream.index() != state.video_stream_index {
                continue;
            }
            state
                .decoder
                .send_packet(&packet)
                .map_err(|e| PreviewError::DecodeFailed(format!("Packet send failed: {e}")))?;

            while state.decoder.receive_frame(&mut decoded).is_ok() {
                frames += 1;
                #[allow(clippy::cast_precision_loss)]
                let frame_secs = decoded
                    .timestamp()
                    .map_or(target_secs, |pts| pts as f64 * state.time_base_f64);
                let reached = frame_secs >= target_secs || frames >= MAX_FRAMES_AFTER_SEEK;
                last = Some(decoded.clone());
                if reached {
                    return Ok(last);
                }
            }
        }

        // End of stream: the last decoded frame is the closest one.
        Ok(last)
    }
}

impl PreviewSource for FfmpegPreviewSource {
    fn open(&mut self, path: &Path) -> Result<(), PreviewError> {
        init_ffmpeg()?;

        let input_context = ffmpeg_next::format::input(path)
            .map_err(|e| PreviewError::OpenFailed(format!("Failed to open video: {e}")))?;

        let video_stream = input_context
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .ok_or_else(|| PreviewError::OpenFailed("No video stream".to_string()))?;
        let video_stream_index = video_stream.index();

        let time_base = video_stream.time_base();
        let time_base_f64 = f64::from(time_base.numerator()) / f64::from(time_base.denominator());

        let context_decoder =
            ffmpeg_next::codec::context::Context::from_parameters(video_stream.parameters())
                .map_err(|e| {
                    PreviewError::OpenFailed(format!("Failed to create codec context: {e}"))
                })?;
        let decoder = context_decoder.decoder().video().map_err(|e| {
            PreviewError::OpenFailed(format!("Failed to create video decoder: {e}"))
        })?;

        #[allow(clippy::cast_precision_loss, clippy::cast_sign_loss)]
        let duration = (input_context.duration() > 0).then(|| {
            Duration::from_secs_f64(
                input_context.duration() as f64 / f64::from(ffmpeg_next::ffi::AV_TIME_BASE),
            )
        });

        tracing::debug!(path = %path.display(), ?duration, "preview decoder opened");

        self.state = Some(DecoderState {
            input_context,
            decoder,
            video_stream_index,
            time_base_f64,
        });
        self.duration = duration;
        Ok(())
    }

    fn frame_at(&mut self, timestamp: Duration) -> Result<Option<PreviewImage>, PreviewError> {
        let state = self.state.as_mut().ok_or(PreviewError::NotOpened)?;
        let target_secs = timestamp.as_secs_f64();

        #[allow(clippy::cast_possible_truncation)]
        let ts = (target_secs * f64::from(ffmpeg_next::ffi::AV_TIME_BASE)) as i64;
        state
            .input_context
            .seek(ts, ..ts)
            .map_err(|e| PreviewError::DecodeFailed(format!("Seek failed: {e}")))?;
        state.decoder.flush();

        let Some(frame) = Self::decode_from_keyframe(state, target_secs)? else {
            return Ok(None);
        };

        let mut scaler = Self::create_scaler(&state.decoder)?;
        let mut rgba_frame = ffmpeg_next::frame::Video::empty();
        scaler
            .run(&frame, &mut rgba_frame)
            .map_err(|e| PreviewError::DecodeFailed(format!("Scaling failed: {e}")))?;

        Ok(PreviewImage::from_rgba(
            PREVIEW_WIDTH,
            PREVIEW_HEIGHT,
            Self::extract_rgba_data(&rgba_frame),
        ))
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn release(&mut self) {
        if self.state.take().is_some() {
            tracing::debug!("preview decoder released");
        }
        self.duration = None;
    }
}
