// SPDX-License-Identifier: MPL-2.0
//! Monotonic playback clock.
//!
//! Tracks the media position as an anchor plus wall-clock elapsed time.
//! Pausing folds the elapsed span back into the anchor, seeking replaces
//! it. Single-threaded by design: the clock is only touched from the UI
//! tick, so no atomics are needed.

use crate::subtitle::TimeMs;
use std::time::Instant;

#[derive(Debug, Default)]
pub struct PlaybackClock {
    /// Position at the moment playback last started, in milliseconds.
    anchor_ms: TimeMs,
    /// Set while playing; `None` while paused.
    started_at: Option<Instant>,
}

impl PlaybackClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets to position 0, paused.
    pub fn reset(&mut self) {
        self.anchor_ms = 0;
        self.started_at = None;
    }

    pub fn play_at(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    pub fn pause_at(&mut self, now: Instant) {
        if let Some(started) = self.started_at.take() {
            self.anchor_ms += now.duration_since(started).as_millis() as TimeMs;
        }
    }

    /// Seeks to an absolute position, preserving the play/pause state.
    pub fn seek_at(&mut self, position: TimeMs, now: Instant) {
        self.anchor_ms = position.max(0);
        if self.started_at.is_some() {
            self.started_at = Some(now);
        }
    }

    pub fn is_playing(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn position_at(&self, now: Instant) -> TimeMs {
        match self.started_at {
            Some(started) => self.anchor_ms + now.duration_since(started).as_millis() as TimeMs,
            None => self.anchor_ms,
        }
    }

    pub fn play(&mut self) {
        self.play_at(Instant::now());
    }

    pub fn pause(&mut self) {
        self.pause_at(Instant::now());
    }

    pub fn seek(&mut self, position: TimeMs) {
        self.seek_at(position, Instant::now());
    }

    pub fn position(&self) -> TimeMs {
        self.position_at(Instant::now())
    }
}
