// SPDX-License-Identifier: MPL-2.0
//! Shared styling for the player chrome.
//!
//! One dark palette used everywhere: black video surface, dark gray
//! panels, white captions.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

pub mod palette {
    use super::Color;

    pub const VIDEO_SURFACE: Color = Color::BLACK;
    pub const PANEL: Color = Color::from_rgb(0.165, 0.165, 0.165); // #2A2A2A
    pub const PANEL_DEEP: Color = Color::from_rgb(0.102, 0.102, 0.102); // #1A1A1A
    pub const BUTTON_HOVER: Color = Color::from_rgb(0.25, 0.25, 0.25);
    pub const BUTTON_PRESSED: Color = Color::from_rgb(0.31, 0.31, 0.31);
    pub const TEXT: Color = Color::WHITE;
    pub const TEXT_MUTED: Color = Color::from_rgb(0.5, 0.5, 0.5);
    pub const NOTICE: Color = Color::from_rgb(0.85, 0.55, 0.25);
}

pub const SUBTITLE_CORNER_RADIUS: f32 = 8.0;
pub const BUTTON_CORNER_RADIUS: f32 = 3.0;

/// Black surface behind the video frame.
pub fn video_surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::VIDEO_SURFACE)),
        text_color: Some(palette::TEXT_MUTED),
        ..container::Style::default()
    }
}

/// Dark panel holding the subtitle labels and the button row.
pub fn panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PANEL)),
        text_color: Some(palette::TEXT),
        ..container::Style::default()
    }
}

/// Semi-opaque rounded backdrop behind one subtitle label.
pub fn subtitle_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.7,
            ..palette::PANEL
        })),
        text_color: Some(palette::TEXT),
        border: Border {
            radius: SUBTITLE_CORNER_RADIUS.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Deep-dark full-screen panel (help screen).
pub fn screen(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PANEL_DEEP)),
        text_color: Some(palette::TEXT),
        ..container::Style::default()
    }
}

/// Flat dark button matching the panel chrome.
pub fn control_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::BUTTON_HOVER,
        button::Status::Pressed => palette::BUTTON_PRESSED,
        _ => palette::PANEL,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::TEXT,
        border: Border {
            radius: BUTTON_CORNER_RADIUS.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}
