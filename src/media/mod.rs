// SPDX-License-Identifier: MPL-2.0
//! Media backend contract and implementations.
//!
//! The playback controller only ever talks to [`MediaBackend`]: a small,
//! synchronous transport surface (load, play, pause, seek, report position).
//! Decode details live behind it. [`FfmpegBackend`] is the real
//! implementation; [`NullBackend`] keeps the application alive in a
//! degraded, video-less mode when FFmpeg fails to initialize.

pub mod clock;
pub mod ffmpeg;

pub use ffmpeg::FfmpegBackend;

use crate::subtitle::TimeMs;
use std::fmt;
use std::path::{Path, PathBuf};

/// Errors surfaced by a media backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    /// The media path does not exist. Commands hitting this are dropped
    /// without touching session state.
    NotFound(PathBuf),
    /// The file exists but could not be opened or decoded.
    DecodeFailed(String),
    /// The backend itself is missing or failed to initialize.
    Unavailable,
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::NotFound(path) => write!(f, "media not found: {}", path.display()),
            MediaError::DecodeFailed(msg) => write!(f, "decode failed: {}", msg),
            MediaError::Unavailable => write!(f, "media backend unavailable"),
        }
    }
}

impl std::error::Error for MediaError {}

/// One decoded RGBA frame ready for display.
#[derive(Debug, Clone)]
pub struct RgbaFrame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Synchronous transport control over a loaded piece of media.
///
/// All calls are expected to be fast; the 100 ms polling tick invokes
/// `position()` and `is_playing()` on the UI thread.
pub trait MediaBackend {
    /// Opens `path` and leaves it paused at position 0.
    fn load(&mut self, path: &Path) -> Result<(), MediaError>;

    fn play(&mut self);

    fn pause(&mut self);

    /// Seeks to an absolute position in milliseconds.
    fn set_position(&mut self, position: TimeMs);

    /// Current position in milliseconds. Negative means "not ready yet";
    /// callers treat that as a no-op tick.
    fn position(&self) -> TimeMs;

    /// Total duration in milliseconds, 0 when nothing is loaded.
    fn duration_ms(&self) -> TimeMs;

    fn is_playing(&self) -> bool;

    /// Steps decoding toward the current position and hands out a new
    /// display frame when one is ready. Backends without video output keep
    /// the default no-op.
    fn poll_frame(&mut self) -> Option<RgbaFrame> {
        None
    }
}

/// Backend used when FFmpeg is unavailable: every load fails and the
/// position is never ready, so the rest of the application degrades to
/// no-ops instead of crashing.
#[derive(Debug, Default)]
pub struct NullBackend;

impl MediaBackend for NullBackend {
    fn load(&mut self, _path: &Path) -> Result<(), MediaError> {
        Err(MediaError::Unavailable)
    }

    fn play(&mut self) {}

    fn pause(&mut self) {}

    fn set_position(&mut self, _position: TimeMs) {}

    fn position(&self) -> TimeMs {
        -1
    }

    fn duration_ms(&self) -> TimeMs {
        0
    }

    fn is_playing(&self) -> bool {
        false
    }
}
