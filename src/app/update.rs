// SPDX-License-Identifier: MPL-2.0
//! Message handling: translates UI messages into playback commands and
//! folds the resulting effects back into presentation state.

use super::{App, Message, Screen};
use crate::config;
use crate::playback::{Command, Effect, TrackKind};
use iced::widget::image;
use iced::{keyboard, window, Task};
use std::path::{Path, PathBuf};

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::OpenVideoDialog => pick_video(app),
        Message::VideoDialogResult(Some(path)) => {
            remember_video_dir(app, &path);
            open_video(app, path);
            Task::none()
        }
        Message::VideoDialogResult(None) => Task::none(),
        Message::OpenSubtitleDialog(kind) => pick_subtitle(app, kind),
        Message::SubtitleDialogResult(kind, Some(path)) => {
            remember_subtitle_dir(app, &path);
            apply(app, Command::OpenSubtitle(kind, path));
            Task::none()
        }
        Message::SubtitleDialogResult(_, None) => Task::none(),
        Message::KeyPressed {
            key,
            modifiers,
            window,
        } => handle_key(app, key, modifiers, window),
        Message::Tick => {
            let position = app.backend.position();
            apply(app, Command::Tick(position));
            if let Some(frame) = app.backend.poll_frame() {
                app.current_frame = Some(image::Handle::from_rgba(
                    frame.width,
                    frame.height,
                    frame.pixels,
                ));
            }
            Task::none()
        }
        Message::ShowHelp => {
            app.screen = Screen::Help;
            Task::none()
        }
        Message::CloseHelp => {
            app.screen = Screen::Player;
            Task::none()
        }
        Message::DismissNotice => {
            app.notice = None;
            Task::none()
        }
    }
}

/// Runs one command through the playback core and applies its effects.
fn apply(app: &mut App, command: Command) {
    let effects = app.core.handle(command, app.backend.as_mut());
    apply_effects(app, effects);
}

fn apply_effects(app: &mut App, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::DisplayText { primary, secondary } => {
                app.primary_text = primary;
                app.secondary_text = secondary;
            }
            Effect::Visibility { primary, secondary } => {
                app.primary_visible = primary;
                app.secondary_visible = secondary;
            }
            Effect::PlaybackState { playing } => app.playing = playing,
            Effect::LoadFailed { message } => app.notice = Some(message),
        }
    }
}

/// Loads a video and, on success, resets the presentation state that belongs
/// to the previous one. A failed load leaves whatever was playing untouched.
pub(super) fn open_video(app: &mut App, path: PathBuf) {
    let effects = app
        .core
        .handle(Command::OpenVideo(path.clone()), app.backend.as_mut());
    // Only a successful load produces a display reset.
    let loaded = effects
        .iter()
        .any(|e| matches!(e, Effect::DisplayText { .. }));
    apply_effects(app, effects);

    if loaded {
        app.video_path = Some(path);
        app.current_frame = None;
        app.primary_visible = true;
        app.secondary_visible = true;
        app.notice = None;
    }
}

fn handle_key(
    app: &mut App,
    key: keyboard::Key,
    modifiers: keyboard::Modifiers,
    window_id: window::Id,
) -> Task<Message> {
    use keyboard::key::Named;

    app.window_id = Some(window_id);

    if app.screen == Screen::Help {
        if matches!(key, keyboard::Key::Named(Named::Escape)) {
            app.screen = Screen::Player;
        }
        return Task::none();
    }

    match key {
        keyboard::Key::Named(Named::Space) => {
            apply(app, Command::TogglePlayPause);
            Task::none()
        }
        keyboard::Key::Named(Named::ArrowRight) if modifiers.control() => {
            apply(app, Command::StartFromNext);
            Task::none()
        }
        keyboard::Key::Named(Named::ArrowRight) => {
            apply(app, Command::PlayUntilNext);
            Task::none()
        }
        keyboard::Key::Named(Named::ArrowLeft) => {
            apply(app, Command::Previous);
            Task::none()
        }
        keyboard::Key::Named(Named::ArrowDown) => {
            apply(app, Command::Repeat);
            Task::none()
        }
        keyboard::Key::Named(Named::ArrowUp) => {
            apply(app, Command::Practice);
            Task::none()
        }
        keyboard::Key::Named(Named::Escape) => set_fullscreen(app, false),
        keyboard::Key::Character(ref c) if c.eq_ignore_ascii_case("f") => toggle_fullscreen(app),
        _ => Task::none(),
    }
}

fn pick_video(app: &App) -> Task<Message> {
    let start_dir = app.config.last_video_dir.clone();
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_title("Open Video")
                .add_filter("Video Files", &["mp4", "mkv", "avi"]);
            if let Some(dir) = start_dir.filter(|d| d.is_dir()) {
                dialog = dialog.set_directory(dir);
            }
            dialog
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::VideoDialogResult,
    )
}

fn pick_subtitle(app: &mut App, kind: TrackKind) -> Task<Message> {
    if !app.core.session().video_loaded {
        app.notice = Some("Open a video before loading subtitles.".to_string());
        return Task::none();
    }

    let title = match kind {
        TrackKind::Primary => "Open Subtitles",
        TrackKind::Secondary => "Open Translation Subtitles",
    };
    let start_dir = app.config.last_subtitle_dir.clone();
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_title(title)
                .add_filter("Subtitle Files", &["srt"]);
            if let Some(dir) = start_dir.filter(|d| d.is_dir()) {
                dialog = dialog.set_directory(dir);
            }
            dialog
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        move |path| Message::SubtitleDialogResult(kind, path),
    )
}

fn remember_video_dir(app: &mut App, path: &Path) {
    if let Some(parent) = path.parent() {
        app.config.last_video_dir = Some(parent.to_path_buf());
        persist_config(app);
    }
}

fn remember_subtitle_dir(app: &mut App, path: &Path) {
    if let Some(parent) = path.parent() {
        app.config.last_subtitle_dir = Some(parent.to_path_buf());
        persist_config(app);
    }
}

/// Persists preferences to disk.
///
/// Guarded during tests to keep isolation: unit tests exercise the logic by
/// calling the handlers directly rather than through a real config dir.
fn persist_config(app: &App) {
    if cfg!(test) {
        return;
    }
    if let Err(err) = config::save(&app.config) {
        eprintln!("Failed to save config: {err}");
    }
}

fn toggle_fullscreen(app: &mut App) -> Task<Message> {
    set_fullscreen(app, !app.fullscreen)
}

fn set_fullscreen(app: &mut App, desired: bool) -> Task<Message> {
    if app.fullscreen == desired {
        return Task::none();
    }
    let Some(window_id) = app.window_id else {
        return Task::none();
    };

    app.fullscreen = desired;
    let mode = if desired {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };
    window::change_mode::<Message>(window_id, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{MediaBackend, MediaError};
    use crate::subtitle::TimeMs;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    /// Backend that loads anything and tracks transport state in memory.
    #[derive(Debug, Default)]
    struct FakeBackend {
        loaded: bool,
        playing: bool,
        position: TimeMs,
    }

    impl MediaBackend for FakeBackend {
        fn load(&mut self, _path: &Path) -> Result<(), MediaError> {
            self.loaded = true;
            self.playing = false;
            self.position = 0;
            Ok(())
        }

        fn play(&mut self) {
            self.playing = true;
        }

        fn pause(&mut self) {
            self.playing = false;
        }

        fn set_position(&mut self, position: TimeMs) {
            self.position = position;
        }

        fn position(&self) -> TimeMs {
            if self.loaded {
                self.position
            } else {
                -1
            }
        }

        fn duration_ms(&self) -> TimeMs {
            if self.loaded {
                60_000
            } else {
                0
            }
        }

        fn is_playing(&self) -> bool {
            self.playing
        }
    }

    fn app_with_fake_backend() -> App {
        App {
            backend: Box::new(FakeBackend::default()),
            ..App::default()
        }
    }

    fn press(app: &mut App, key: keyboard::Key) {
        let _ = update(
            app,
            Message::KeyPressed {
                key,
                modifiers: keyboard::Modifiers::default(),
                window: window::Id::unique(),
            },
        );
    }

    #[test]
    fn subtitle_picker_requires_a_loaded_video() {
        let mut app = app_with_fake_backend();
        let _ = update(&mut app, Message::OpenSubtitleDialog(TrackKind::Primary));
        assert!(app.notice.is_some());
    }

    #[test]
    fn video_load_resets_presentation_state() {
        let mut app = app_with_fake_backend();
        app.primary_text = "stale".to_string();
        app.primary_visible = false;
        app.notice = Some("old".to_string());

        open_video(&mut app, PathBuf::from("/media/film.mkv"));

        assert!(app.core.session().video_loaded);
        assert_eq!(app.primary_text, "");
        assert!(app.primary_visible);
        assert!(app.notice.is_none());
        assert!(app.video_path.is_some());
    }

    #[test]
    fn space_toggles_playback_once_video_is_loaded() {
        let mut app = app_with_fake_backend();
        open_video(&mut app, PathBuf::from("/media/film.mkv"));

        press(&mut app, keyboard::Key::Named(keyboard::key::Named::Space));
        assert!(app.playing);
        press(&mut app, keyboard::Key::Named(keyboard::key::Named::Space));
        assert!(!app.playing);
    }

    #[test]
    fn space_without_video_is_a_no_op() {
        let mut app = app_with_fake_backend();
        press(&mut app, keyboard::Key::Named(keyboard::key::Named::Space));
        assert!(!app.playing);
    }

    #[test]
    fn tick_updates_caption_from_backend_position() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let srt = dir.path().join("film.srt");
        fs::write(&srt, "1\n00:00:00,000 --> 00:00:02,000\nHello\n").unwrap();

        let mut app = app_with_fake_backend();
        open_video(&mut app, PathBuf::from("/media/film.mkv"));
        apply(&mut app, Command::OpenSubtitle(TrackKind::Primary, srt));
        press(&mut app, keyboard::Key::Named(keyboard::key::Named::Space));

        let _ = update(&mut app, Message::Tick);
        assert_eq!(app.primary_text, "Hello");
    }

    #[test]
    fn escape_closes_the_help_screen() {
        let mut app = app_with_fake_backend();
        let _ = update(&mut app, Message::ShowHelp);
        assert_eq!(app.screen, Screen::Help);

        press(&mut app, keyboard::Key::Named(keyboard::key::Named::Escape));
        assert_eq!(app.screen, Screen::Player);
    }

    #[test]
    fn dismiss_clears_the_notice() {
        let mut app = app_with_fake_backend();
        app.notice = Some("something went wrong".to_string());
        let _ = update(&mut app, Message::DismissNotice);
        assert!(app.notice.is_none());
    }
}
