// SPDX-License-Identifier: MPL-2.0
//! Application root state and the Iced run loop.
//!
//! `App` is a thin shell: it owns the playback core, the media backend and
//! the bits of presentation state the view needs (caption texts, visibility,
//! the latest decoded frame). All playback decisions live in
//! [`crate::playback::PlayerCore`]; the update loop only translates UI
//! messages into commands and folds the resulting effects back into fields.

pub mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::media::{FfmpegBackend, MediaBackend, NullBackend};
use crate::playback::PlayerCore;
use iced::widget::image;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state bridging the playback core and the widgets.
pub struct App {
    core: PlayerCore,
    backend: Box<dyn MediaBackend>,
    config: Config,
    screen: Screen,
    fullscreen: bool,
    window_id: Option<window::Id>,
    /// Path of the currently loaded video, used for the window title.
    video_path: Option<PathBuf>,
    /// Latest decoded frame, if any.
    current_frame: Option<image::Handle>,
    primary_text: String,
    secondary_text: String,
    primary_visible: bool,
    secondary_visible: bool,
    playing: bool,
    /// One-line banner for load failures and degraded-mode warnings.
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("video_path", &self.video_path)
            .field("playing", &self.playing)
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            core: PlayerCore::new(),
            backend: Box::new(NullBackend),
            config: Config::default(),
            screen: Screen::Player,
            fullscreen: false,
            window_id: None,
            video_path: None,
            current_frame: None,
            primary_text: String::new(),
            secondary_text: String::new(),
            primary_visible: true,
            secondary_visible: true,
            playing: false,
            notice: None,
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(|state: &App| state.title(), App::update, App::view)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run_with(move || App::new(flags))
}

impl App {
    /// Initializes application state and optionally preloads the video named
    /// on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let mut app = App {
            config,
            ..Self::default()
        };

        match FfmpegBackend::new() {
            Ok(backend) => app.backend = Box::new(backend),
            Err(err) => {
                // Degraded mode: the UI stays alive but every load fails.
                eprintln!("Media backend unavailable: {err}");
                app.notice = Some(
                    "Video playback is unavailable: the media backend failed to initialize."
                        .to_string(),
                );
            }
        }

        if let Some(path) = flags.video_path {
            update::open_video(&mut app, PathBuf::from(path));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        match self
            .video_path
            .as_deref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
        {
            Some(name) => format!("{name} - Iced Echo"),
            None => String::from("Iced Echo"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.core.session().video_loaded),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}
