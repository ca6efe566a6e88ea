// SPDX-License-Identifier: MPL-2.0
//! Commands consumed and effects emitted by the playback core.

use crate::subtitle::TimeMs;
use std::path::PathBuf;

/// Which of the two subtitle lanes a command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    /// Drives the caption cursor and all auto-pause logic.
    Primary,
    /// Purely time-queried translation lane.
    Secondary,
}

/// Discrete commands from the UI shell.
///
/// Every variant is forgiving: when its preconditions are unmet (no video,
/// no primary track, cursor at a boundary) it degrades to a no-op instead
/// of an error, matching the keyboard-driven UX.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    OpenVideo(PathBuf),
    OpenSubtitle(TrackKind, PathBuf),
    /// Space.
    TogglePlayPause,
    /// Left arrow: jump back one caption and auto-pause at its end.
    Previous,
    /// Right arrow: keep playing until the end of the next caption;
    /// repeated presses extend the hold one caption at a time.
    PlayUntilNext,
    /// Ctrl+Right: seek to the start of the next caption.
    StartFromNext,
    /// Down arrow: replay the current caption.
    Repeat,
    /// Up arrow: advance the 4-step practice drill.
    Practice,
    /// Fixed-interval poll carrying the backend's reported position.
    Tick(TimeMs),
}

/// What the UI shell must reflect after handling a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Replace the subtitle label contents (empty string clears a label).
    DisplayText { primary: String, secondary: String },
    /// Show or hide the subtitle labels.
    Visibility { primary: bool, secondary: bool },
    /// Mirror the play/pause state in the UI.
    PlaybackState { playing: bool },
    /// A load failed in a way the user should hear about.
    LoadFailed { message: String },
}
