// SPDX-License-Identifier: MPL-2.0
//! Playback intent controller.
//!
//! Owns the [`PlaybackSession`] and translates [`Command`]s into backend
//! calls (seek, play, pause) plus UI [`Effect`]s. The 100 ms tick is just
//! another command: it re-resolves the caption cursor against the reported
//! position and fires pending auto-pauses.
//!
//! Two distinct auto-pause paths share identical pause/visibility handling:
//! the *deadline* pause armed by navigation commands ("hold until the end
//! of caption N"), and the *natural* pause when the current caption's own
//! end passes with nothing armed.

use super::command::{Command, Effect, TrackKind};
use super::practice;
use super::practice::PracticeStep;
use super::session::PlaybackSession;
use super::visibility::VisibilityState;
use crate::media::MediaBackend;
use crate::subtitle::lookup::{containing_index, nearest_index};
use crate::subtitle::{srt, SubtitleTrack, TimeMs};
use std::fs;
use std::path::Path;

/// The playback core: one session, one entry point.
#[derive(Debug, Default)]
pub struct PlayerCore {
    session: PlaybackSession,
}

impl PlayerCore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the session for the UI shell and tests.
    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    /// Single command entry point.
    pub fn handle(&mut self, command: Command, backend: &mut dyn MediaBackend) -> Vec<Effect> {
        match command {
            Command::OpenVideo(path) => self.open_video(&path, backend),
            Command::OpenSubtitle(kind, path) => self.open_subtitle(kind, &path, backend),
            Command::TogglePlayPause => self.toggle_play_pause(backend),
            Command::Previous => self.previous(backend),
            Command::PlayUntilNext => self.play_until_next(backend),
            Command::StartFromNext => self.start_from_next(backend),
            Command::Repeat => self.repeat_current(backend),
            Command::Practice => self.practice(backend),
            Command::Tick(time) => self.on_tick(time, backend),
        }
    }

    fn open_video(&mut self, path: &Path, backend: &mut dyn MediaBackend) -> Vec<Effect> {
        match backend.load(path) {
            Ok(()) => {
                self.session.reset_for_new_video();
                vec![
                    Effect::DisplayText {
                        primary: String::new(),
                        secondary: String::new(),
                    },
                    Effect::PlaybackState { playing: false },
                ]
            }
            Err(crate::media::MediaError::NotFound(path)) => {
                // Dropped without touching session state.
                eprintln!("Video not found: {}", path.display());
                Vec::new()
            }
            Err(err) => {
                eprintln!("Failed to load video: {err}");
                vec![Effect::LoadFailed {
                    message: err.to_string(),
                }]
            }
        }
    }

    fn open_subtitle(
        &mut self,
        kind: TrackKind,
        path: &Path,
        backend: &mut dyn MediaBackend,
    ) -> Vec<Effect> {
        if !self.session.video_loaded {
            return Vec::new();
        }
        if !path.exists() {
            eprintln!("Subtitle not found: {}", path.display());
            return Vec::new();
        }

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                eprintln!("Failed to read subtitle: {err}");
                return Vec::new();
            }
        };
        // Tolerant of stray bytes the way `utf-8-sig` readers are; the
        // parser strips the BOM itself.
        let content = String::from_utf8_lossy(&bytes);

        match srt::parse(&content) {
            Ok(entries) => {
                let track = SubtitleTrack::new(entries);
                match kind {
                    TrackKind::Primary => {
                        self.session.primary = Some(track);
                        self.resolve_cursor(backend.position());
                    }
                    TrackKind::Secondary => self.session.secondary = Some(track),
                }
                vec![self.display_at(backend.position())]
            }
            Err(err) => {
                // Only the affected lane is reset; the other track and the
                // rest of the session stay untouched.
                eprintln!("Failed to parse subtitle: {err}");
                match kind {
                    TrackKind::Primary => self.session.primary = None,
                    TrackKind::Secondary => self.session.secondary = None,
                }
                vec![Effect::LoadFailed {
                    message: format!("Could not load subtitle: {err}"),
                }]
            }
        }
    }

    fn toggle_play_pause(&mut self, backend: &mut dyn MediaBackend) -> Vec<Effect> {
        if !self.session.video_loaded {
            return Vec::new();
        }

        if backend.is_playing() {
            backend.pause();
            self.session.is_playing = false;
            vec![Effect::PlaybackState { playing: false }]
        } else if backend.duration_ms() > 0 {
            backend.play();
            self.session.is_playing = true;
            // Resuming cancels any pending hold.
            self.session.pending_pause_deadline = None;
            let mut effects = Vec::new();
            if self.session.has_primary() {
                self.resolve_cursor(backend.position());
                effects.push(self.display_at(backend.position()));
            }
            effects.push(Effect::PlaybackState { playing: true });
            effects
        } else {
            Vec::new()
        }
    }

    fn previous(&mut self, backend: &mut dyn MediaBackend) -> Vec<Effect> {
        if !self.session.video_loaded {
            return Vec::new();
        }
        self.session.practice_step = PracticeStep::Idle;
        if !self.session.has_primary() || self.session.current_index == 0 {
            return Vec::new();
        }

        let mut effects = Vec::new();
        self.set_visibility(VisibilityState::Both, &mut effects);

        self.session.current_index -= 1;
        let (start, end) = self.entry_span(self.session.current_index);
        backend.set_position(start);
        effects.push(self.display_at(start));
        backend.play();
        self.session.is_playing = true;
        effects.push(Effect::PlaybackState { playing: true });
        self.session.pending_pause_deadline = Some(end);
        effects
    }

    fn play_until_next(&mut self, backend: &mut dyn MediaBackend) -> Vec<Effect> {
        if !self.session.video_loaded {
            return Vec::new();
        }
        self.session.practice_step = PracticeStep::Idle;
        if !self.session.has_primary() {
            return Vec::new();
        }

        let mut effects = Vec::new();
        self.set_visibility(VisibilityState::Both, &mut effects);

        let len = self.primary_len();

        // Already holding toward a caption and still playing: extend the
        // hold to the caption after the targeted one instead of re-arming.
        if self.session.pending_pause_deadline.is_some() && backend.is_playing() {
            let next = self.session.current_index + 1;
            if next < len {
                let (_, end) = self.entry_span(next);
                self.session.pending_pause_deadline = Some(end);
                self.session.current_index = next;
            }
            return effects;
        }

        if self.session.current_index < len - 1 {
            let next = self.session.current_index + 1;
            let (_, end) = self.entry_span(next);
            self.session.pending_pause_deadline = Some(end);
            self.session.current_index = next;

            if !backend.is_playing() {
                backend.play();
                self.session.is_playing = true;
                effects.push(Effect::PlaybackState { playing: true });
            }
        }
        effects
    }

    fn start_from_next(&mut self, backend: &mut dyn MediaBackend) -> Vec<Effect> {
        if !self.session.video_loaded {
            return Vec::new();
        }
        self.session.practice_step = PracticeStep::Idle;
        if !self.session.has_primary() {
            return Vec::new();
        }

        let mut effects = Vec::new();
        self.set_visibility(VisibilityState::Both, &mut effects);

        if self.session.current_index < self.primary_len() - 1 {
            self.session.current_index += 1;
            let (start, end) = self.entry_span(self.session.current_index);
            backend.set_position(start);
            effects.push(self.display_at(start));
            backend.play();
            self.session.is_playing = true;
            effects.push(Effect::PlaybackState { playing: true });
            self.session.pending_pause_deadline = Some(end);
        }
        effects
    }

    fn repeat_current(&mut self, backend: &mut dyn MediaBackend) -> Vec<Effect> {
        if !self.session.video_loaded || !self.session.has_primary() {
            return Vec::new();
        }
        if self.session.current_index >= self.primary_len() {
            return Vec::new();
        }

        let mut effects = Vec::new();
        let (start, end) = self.entry_span(self.session.current_index);
        backend.set_position(start);
        effects.push(self.display_at(start));
        backend.play();
        self.session.is_playing = true;
        effects.push(Effect::PlaybackState { playing: true });
        self.session.pending_pause_deadline = Some(end);
        effects
    }

    fn practice(&mut self, backend: &mut dyn MediaBackend) -> Vec<Effect> {
        if !self.session.video_loaded || !self.session.has_primary() {
            return Vec::new();
        }
        let mut effects = Vec::new();
        practice::advance(&mut self.session, backend, &mut effects);
        effects
    }

    fn on_tick(&mut self, time: TimeMs, backend: &mut dyn MediaBackend) -> Vec<Effect> {
        if !self.session.video_loaded || time < 0 {
            return Vec::new();
        }

        // Armed hold reached: pause and reveal per the staged visibility.
        // This preempts cursor advancement; the caption on screen stays.
        if let Some(deadline) = self.session.pending_pause_deadline {
            if time >= deadline {
                self.session.pending_pause_deadline = None;
                return self.auto_pause(backend);
            }
        }

        let playing = backend.is_playing();
        let unheld = self.session.pending_pause_deadline.is_none();

        if playing && unheld && self.session.has_primary() {
            self.resolve_cursor(time);
        }

        let mut effects = Vec::new();

        // Natural end of the current caption, with no hold armed: same
        // pause/visibility handling as the deadline path.
        if let Some(track) = self.session.primary.as_ref() {
            if let Some(entry) = track.get(self.session.current_index) {
                if playing && unheld && time >= entry.end {
                    effects.extend(self.auto_pause(backend));
                }
            }
        }

        effects.push(self.display_at(time));
        effects
    }

    /// Pause playback and apply the staged visibility. Shared by both
    /// auto-pause paths.
    fn auto_pause(&mut self, backend: &mut dyn MediaBackend) -> Vec<Effect> {
        backend.pause();
        self.session.is_playing = false;
        let flags = self.session.visibility.flags();
        vec![
            Effect::PlaybackState { playing: false },
            Effect::Visibility {
                primary: flags.primary,
                secondary: flags.secondary,
            },
        ]
    }

    fn set_visibility(&mut self, visibility: VisibilityState, effects: &mut Vec<Effect>) {
        self.session.visibility = visibility;
        let flags = visibility.flags();
        effects.push(Effect::Visibility {
            primary: flags.primary,
            secondary: flags.secondary,
        });
    }

    /// Re-resolves the cursor against `time`. A negative (not ready)
    /// position resets to the first caption rather than being fed to the
    /// lookup.
    fn resolve_cursor(&mut self, time: TimeMs) {
        let Some(track) = self.session.primary.as_ref() else {
            return;
        };
        if track.is_empty() {
            return;
        }
        self.session.current_index = if time < 0 {
            0
        } else {
            nearest_index(track, time)
        };
    }

    /// Builds the display effect: primary text from the cursor, secondary
    /// from a stateless time query (empty between cues).
    fn display_at(&self, time: TimeMs) -> Effect {
        let primary = self
            .session
            .primary
            .as_ref()
            .and_then(|t| t.get(self.session.current_index))
            .map(|e| e.text.clone())
            .unwrap_or_default();

        let secondary = self
            .session
            .secondary
            .as_ref()
            .and_then(|t| containing_index(t, time).and_then(|i| t.get(i)))
            .map(|e| e.text.clone())
            .unwrap_or_default();

        Effect::DisplayText { primary, secondary }
    }

    fn primary_len(&self) -> usize {
        self.session.primary.as_ref().map_or(0, SubtitleTrack::len)
    }

    /// `(start, end)` of the primary entry at `index`. Only called with
    /// indices the guards above have validated.
    fn entry_span(&self, index: usize) -> (TimeMs, TimeMs) {
        self.session
            .primary
            .as_ref()
            .and_then(|t| t.get(index))
            .map(|e| (e.start, e.end))
            .unwrap_or((0, 0))
    }
}
