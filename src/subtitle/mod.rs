// SPDX-License-Identifier: MPL-2.0
//! Timed subtitle tracks and lookups.
//!
//! A [`SubtitleTrack`] is an immutable-after-load, time-ordered sequence of
//! entries for one language. Source file order is trusted as-is: entries are
//! never re-sorted and overlapping cues are never merged, so malformed files
//! behave the same here as in any other player that trusts the file.

pub mod lookup;
pub mod srt;

use std::fmt;

/// Millisecond offset from the start of the video.
///
/// Negative values are reserved for "position unavailable" reports from the
/// media backend and never appear inside a parsed track.
pub type TimeMs = i64;

/// One timed caption. `start <= end` is guaranteed by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleEntry {
    pub start: TimeMs,
    pub end: TimeMs,
    pub text: String,
}

/// An ordered sequence of [`SubtitleEntry`] values for one language track.
///
/// Replaced wholesale on reload; there is no incremental mutation.
#[derive(Debug, Clone, Default)]
pub struct SubtitleTrack {
    entries: Vec<SubtitleEntry>,
}

impl SubtitleTrack {
    /// Wraps a parsed sequence of entries as-is (no sorting, no overlap
    /// resolution).
    pub fn new(entries: Vec<SubtitleEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SubtitleEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[SubtitleEntry] {
        &self.entries
    }
}

/// Errors produced while parsing subtitle content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubtitleError {
    /// A timing line could not be parsed (`HH:MM:SS,mmm --> HH:MM:SS,mmm`).
    InvalidTimestamp(String),
    /// A block was structurally broken (missing timing line, etc.).
    Malformed(String),
}

impl fmt::Display for SubtitleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubtitleError::InvalidTimestamp(s) => write!(f, "invalid timestamp: {}", s),
            SubtitleError::Malformed(s) => write!(f, "malformed subtitle block: {}", s),
        }
    }
}

impl std::error::Error for SubtitleError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(start: TimeMs, end: TimeMs, text: &str) -> SubtitleEntry {
        SubtitleEntry {
            start,
            end,
            text: text.to_string(),
        }
    }

    #[test]
    fn track_preserves_source_order() {
        // Deliberately unsorted: the track must not re-order.
        let track = SubtitleTrack::new(vec![entry(5000, 6000, "b"), entry(0, 1000, "a")]);
        assert_eq!(track.len(), 2);
        assert_eq!(track.get(0).unwrap().text, "b");
        assert_eq!(track.get(1).unwrap().text, "a");
    }

    #[test]
    fn get_out_of_range_is_none() {
        let track = SubtitleTrack::new(vec![entry(0, 1000, "a")]);
        assert!(track.get(1).is_none());
    }

    #[test]
    fn empty_track_reports_empty() {
        let track = SubtitleTrack::default();
        assert!(track.is_empty());
        assert_eq!(track.len(), 0);
    }
}
