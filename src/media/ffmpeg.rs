// SPDX-License-Identifier: MPL-2.0
//! FFmpeg-backed media playback.
//!
//! Timing is owned by a [`PlaybackClock`]; FFmpeg supplies duration and
//! display frames. Frames are decoded incrementally from the UI tick via
//! [`FfmpegBackend::poll_frame`], which steps the demuxer until it reaches
//! the clock position. Audio output is intentionally absent from this
//! surface.

use super::clock::PlaybackClock;
use super::{MediaBackend, MediaError, RgbaFrame};
use crate::subtitle::TimeMs;
use std::path::Path;
use std::sync::Once;

/// Static flag to ensure FFmpeg is initialized only once.
static FFMPEG_INIT: Once = Once::new();

/// Initialize FFmpeg with the log level lowered to ERROR.
///
/// Safe to call multiple times thanks to `std::sync::Once`.
pub fn init_ffmpeg() -> Result<(), MediaError> {
    let mut init_result: Result<(), MediaError> = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(MediaError::DecodeFailed(format!(
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

/// Upper bound on packets demuxed per `poll_frame` call so a slow decode
/// cannot stall the 100 ms tick indefinitely; the next tick resumes where
/// this one left off.
const MAX_PACKETS_PER_POLL: u32 = 256;

struct LoadedMedia {
    ictx: ffmpeg_next::format::context::Input,
    decoder: ffmpeg_next::decoder::Video,
    scaler: ffmpeg_next::software::scaling::Context,
    stream_index: usize,
    /// Stream time base as (numerator, denominator).
    time_base: (i32, i32),
    duration_ms: TimeMs,
}

impl LoadedMedia {
    fn timestamp_to_ms(&self, ts: i64) -> TimeMs {
        let (num, den) = self.time_base;
        if den == 0 {
            return 0;
        }
        ts * 1000 * i64::from(num) / i64::from(den)
    }
}

/// Real [`MediaBackend`] built on `ffmpeg-next` plus a monotonic clock.
pub struct FfmpegBackend {
    media: Option<LoadedMedia>,
    clock: PlaybackClock,
    /// Set after load/seek so a poster frame is decoded even while paused.
    wants_frame: bool,
}

impl FfmpegBackend {
    /// Creates the backend, initializing FFmpeg on first use.
    pub fn new() -> Result<Self, MediaError> {
        init_ffmpeg()?;
        Ok(Self {
            media: None,
            clock: PlaybackClock::new(),
            wants_frame: false,
        })
    }

    /// Decodes forward until the stream catches up with the clock position
    /// and returns the frame to display, if a new one was produced.
    ///
    /// Call once per tick. Between cues of a paused video this is a cheap
    /// no-op.
    fn poll_frame_impl(&mut self) -> Option<RgbaFrame> {
        let playing = self.clock.is_playing();
        if !playing && !self.wants_frame {
            return None;
        }

        let target_ms = self.clock.position();
        let media = self.media.as_mut()?;
        let mut produced: Option<RgbaFrame> = None;

        let mut budget = MAX_PACKETS_PER_POLL;
        'demux: while budget > 0 {
            budget -= 1;
            let Some((stream, packet)) = media.ictx.packets().next() else {
                break; // end of stream; keep whatever we decoded
            };
            if stream.index() != media.stream_index {
                continue;
            }
            if media.decoder.send_packet(&packet).is_err() {
                continue; // skip damaged packets
            }

            let mut decoded = ffmpeg_next::frame::Video::empty();
            while media.decoder.receive_frame(&mut decoded).is_ok() {
                let frame_ms = decoded
                    .timestamp()
                    .map(|ts| media.timestamp_to_ms(ts))
                    .unwrap_or(target_ms);

                let mut rgba = ffmpeg_next::frame::Video::empty();
                if media.scaler.run(&decoded, &mut rgba).is_err() {
                    continue;
                }
                produced = Some(frame_to_rgba(&rgba));

                if frame_ms >= target_ms {
                    break 'demux;
                }
            }
        }

        if produced.is_some() {
            self.wants_frame = false;
        }
        produced
    }
}

impl MediaBackend for FfmpegBackend {
    fn load(&mut self, path: &Path) -> Result<(), MediaError> {
        if !path.exists() {
            return Err(MediaError::NotFound(path.to_path_buf()));
        }

        let ictx = ffmpeg_next::format::input(&path)
            .map_err(|e| MediaError::DecodeFailed(format!("failed to open media: {e}")))?;

        let stream = ictx
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .ok_or_else(|| MediaError::DecodeFailed("no video stream found".to_string()))?;
        let stream_index = stream.index();
        let time_base = stream.time_base();
        let time_base = (time_base.numerator(), time_base.denominator());

        // Prefer the stream duration, fall back to the container's.
        let duration_ms = if stream.duration() > 0 {
            stream.duration() * 1000 * i64::from(time_base.0) / i64::from(time_base.1)
        } else if ictx.duration() > 0 {
            ictx.duration() * 1000 / i64::from(ffmpeg_next::ffi::AV_TIME_BASE)
        } else {
            0
        };

        let context_decoder =
            ffmpeg_next::codec::context::Context::from_parameters(stream.parameters())
                .map_err(|e| MediaError::DecodeFailed(format!("failed to create codec: {e}")))?;
        let decoder = context_decoder
            .decoder()
            .video()
            .map_err(|e| MediaError::DecodeFailed(format!("failed to create decoder: {e}")))?;

        let width = decoder.width();
        let height = decoder.height();
        if width == 0 || height == 0 {
            return Err(MediaError::DecodeFailed(format!(
                "invalid video dimensions: {width}x{height}"
            )));
        }

        let scaler = ffmpeg_next::software::scaling::Context::get(
            decoder.format(),
            width,
            height,
            ffmpeg_next::format::Pixel::RGBA,
            width,
            height,
            ffmpeg_next::software::scaling::Flags::BILINEAR,
        )
        .map_err(|e| MediaError::DecodeFailed(format!("failed to create scaler: {e}")))?;

        self.media = Some(LoadedMedia {
            ictx,
            decoder,
            scaler,
            stream_index,
            time_base,
            duration_ms,
        });
        self.clock.reset();
        self.wants_frame = true;
        Ok(())
    }

    fn play(&mut self) {
        if self.media.is_some() {
            self.clock.play();
        }
    }

    fn pause(&mut self) {
        self.clock.pause();
    }

    fn set_position(&mut self, position: TimeMs) {
        let Some(media) = self.media.as_mut() else {
            return;
        };
        let position = position.max(0).min(media.duration_ms.max(0));

        // AV_TIME_BASE is microseconds.
        let ts = position * 1000;
        if let Err(e) = media.ictx.seek(ts, ..ts) {
            eprintln!("Seek failed: {e}");
        }
        media.decoder.flush();

        self.clock.seek(position);
        self.wants_frame = true;
    }

    fn position(&self) -> TimeMs {
        let Some(media) = self.media.as_ref() else {
            return -1;
        };
        let position = self.clock.position();
        if media.duration_ms > 0 {
            position.min(media.duration_ms)
        } else {
            position
        }
    }

    fn duration_ms(&self) -> TimeMs {
        self.media.as_ref().map_or(0, |m| m.duration_ms)
    }

    fn is_playing(&self) -> bool {
        self.media.is_some() && self.clock.is_playing()
    }

    fn poll_frame(&mut self) -> Option<RgbaFrame> {
        self.poll_frame_impl()
    }
}

/// Copies a scaled RGBA frame out of FFmpeg's stride-padded buffer.
fn frame_to_rgba(frame: &ffmpeg_next::frame::Video) -> RgbaFrame {
    let width = frame.width();
    let height = frame.height();
    let data = frame.data(0);
    let stride = frame.stride(0);

    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        let row_start = y as usize * stride;
        let row_end = row_start + (width * 4) as usize;
        pixels.extend_from_slice(&data[row_start..row_end]);
    }

    RgbaFrame {
        width,
        height,
        pixels,
    }
}
