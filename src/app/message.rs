// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::playback::TrackKind;
use iced::{keyboard, window};
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. Keyboard input arrives as
/// a single `KeyPressed` variant and is translated into playback commands
/// there, so the command mapping stays in one place.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open the video file picker.
    OpenVideoDialog,
    /// Result from the video file picker.
    VideoDialogResult(Option<PathBuf>),
    /// Open the subtitle picker for one lane.
    OpenSubtitleDialog(TrackKind),
    /// Result from the subtitle picker.
    SubtitleDialogResult(TrackKind, Option<PathBuf>),
    /// A key press that no widget captured. Carries the window id so
    /// fullscreen toggles know which window to change.
    KeyPressed {
        key: keyboard::Key,
        modifiers: keyboard::Modifiers,
        window: window::Id,
    },
    /// Periodic 100 ms position poll.
    Tick,
    /// Show the shortcuts screen.
    ShowHelp,
    /// Return from the shortcuts screen.
    CloseHelp,
    /// Dismiss the notice banner.
    DismissNotice,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional video path to preload on startup.
    pub video_path: Option<String>,
}
