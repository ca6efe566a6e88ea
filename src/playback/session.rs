// SPDX-License-Identifier: MPL-2.0
//! Mutable per-video session state.

use super::practice::PracticeStep;
use super::visibility::VisibilityState;
use crate::subtitle::{SubtitleTrack, TimeMs};

/// Aggregate state for one loaded video.
///
/// There is exactly one instance, owned by the playback core and mutated
/// only on the UI/tick thread. Switching videos resets everything
/// atomically via [`PlaybackSession::reset_for_new_video`] so a tick never
/// observes a mix of old and new state.
#[derive(Debug, Default)]
pub struct PlaybackSession {
    /// Whether a video is currently loaded in the backend.
    pub video_loaded: bool,
    /// Caption track driving the cursor and auto-pause logic.
    pub primary: Option<SubtitleTrack>,
    /// Translation track, purely time-queried.
    pub secondary: Option<SubtitleTrack>,
    /// Cursor into the primary track. Only meaningful while a non-empty
    /// primary track is loaded.
    pub current_index: usize,
    /// When set, playback auto-pauses once the reported position reaches
    /// this timestamp.
    pub pending_pause_deadline: Option<TimeMs>,
    /// Staged visibility applied on the next auto-pause.
    pub visibility: VisibilityState,
    /// Cached mirror of the backend's play state for the UI.
    pub is_playing: bool,
    /// Position within the guided practice drill.
    pub practice_step: PracticeStep,
    /// `(start, end)` captured for the drill's replay steps.
    pub practice_times: Option<(TimeMs, TimeMs)>,
}

impl PlaybackSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wholesale reset when a new video is loaded: both tracks are
    /// dropped, the cursor and deadline cleared, and the drill abandoned.
    /// Nothing survives from the previous video.
    pub fn reset_for_new_video(&mut self) {
        *self = Self {
            video_loaded: true,
            ..Self::default()
        };
    }

    /// Whether a non-empty primary track is available to navigate.
    pub fn has_primary(&self) -> bool {
        self.primary.as_ref().is_some_and(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subtitle::SubtitleEntry;

    #[test]
    fn new_session_is_empty() {
        let session = PlaybackSession::new();
        assert!(!session.video_loaded);
        assert!(session.primary.is_none());
        assert!(session.secondary.is_none());
        assert_eq!(session.current_index, 0);
        assert!(session.pending_pause_deadline.is_none());
        assert_eq!(session.practice_step, PracticeStep::Idle);
    }

    #[test]
    fn reset_for_new_video_clears_everything_but_marks_loaded() {
        let mut session = PlaybackSession::new();
        session.primary = Some(SubtitleTrack::new(vec![SubtitleEntry {
            start: 0,
            end: 1000,
            text: "a".into(),
        }]));
        session.current_index = 7;
        session.pending_pause_deadline = Some(5000);
        session.visibility = VisibilityState::Both;
        session.is_playing = true;
        session.practice_step = PracticeStep::Step2;
        session.practice_times = Some((0, 1000));

        session.reset_for_new_video();

        assert!(session.video_loaded);
        assert!(session.primary.is_none());
        assert_eq!(session.current_index, 0);
        assert!(session.pending_pause_deadline.is_none());
        assert_eq!(session.visibility, VisibilityState::Hidden);
        assert!(!session.is_playing);
        assert_eq!(session.practice_step, PracticeStep::Idle);
        assert!(session.practice_times.is_none());
    }

    #[test]
    fn empty_primary_track_does_not_count() {
        let mut session = PlaybackSession::new();
        session.primary = Some(SubtitleTrack::default());
        assert!(!session.has_primary());
    }
}
