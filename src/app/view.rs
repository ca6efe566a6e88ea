// SPDX-License-Identifier: MPL-2.0
//! Widget tree for the player screen.

use super::{App, Message, Screen};
use crate::playback::TrackKind;
use crate::ui::{help, styles};
use iced::font::Weight;
use iced::widget::{button, column, container, image, row, text, Space};
use iced::{Alignment, ContentFit, Element, Font, Length};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    match app.screen {
        Screen::Help => help::view(Message::CloseHelp),
        Screen::Player => player(app),
    }
}

fn player(app: &App) -> Element<'_, Message> {
    let mut layout = column![video_area(app), subtitle_panel(app)];

    // The chrome disappears in fullscreen; captions stay.
    if !app.fullscreen {
        if let Some(notice) = &app.notice {
            layout = layout.push(notice_bar(notice));
        }
        layout = layout.push(button_row());
    }

    container(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::panel)
        .into()
}

fn video_area(app: &App) -> Element<'_, Message> {
    let content: Element<'_, Message> = if let Some(handle) = &app.current_frame {
        image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    } else if app.core.session().video_loaded {
        Space::new(Length::Fill, Length::Fill).into()
    } else {
        welcome()
    };

    container(content)
        .width(Length::Fill)
        .height(Length::FillPortion(5))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(styles::video_surface)
        .into()
}

/// Empty-state instructions shown before any video is opened.
fn welcome() -> Element<'static, Message> {
    column![
        text("Iced Echo").size(28),
        text("1. Open a video file").size(16),
        text("2. Load the subtitles you are studying, and optionally a translation").size(16),
        text("3. Press Space to play; the arrow keys move caption by caption").size(16),
        text("The Shortcuts button lists every key.").size(14),
    ]
    .spacing(10)
    .align_x(Alignment::Center)
    .into()
}

fn subtitle_panel(app: &App) -> Element<'_, Message> {
    let size = app.config.subtitle_font_size();
    let primary = caption_line(&app.primary_text, app.primary_visible, size, true);
    let secondary = caption_line(&app.secondary_text, app.secondary_visible, size, false);

    container(column![primary, secondary].spacing(6))
        .width(Length::Fill)
        .padding(10)
        .style(styles::panel)
        .into()
}

/// One caption lane. Hidden or empty lanes keep their height so the layout
/// does not jump when text appears.
fn caption_line(content: &str, visible: bool, size: u32, bold: bool) -> Element<'_, Message> {
    let size = size as f32;
    if !visible || content.is_empty() {
        return Space::new(Length::Fill, Length::Fixed(size * 1.5)).into();
    }

    let mut label = text(content).size(size);
    if bold {
        label = label.font(Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        });
    }

    container(
        container(label)
            .padding([4, 12])
            .style(styles::subtitle_backdrop),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .into()
}

fn notice_bar(notice: &str) -> Element<'_, Message> {
    container(
        row![
            text(notice).size(14).color(styles::palette::NOTICE).width(Length::Fill),
            button(text("Dismiss").size(12))
                .style(styles::control_button)
                .padding([2, 8])
                .on_press(Message::DismissNotice),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([4, 10])
    .style(styles::panel)
    .into()
}

fn button_row() -> Element<'static, Message> {
    row![
        button(text("Open Video").size(14))
            .style(styles::control_button)
            .padding([5, 15])
            .on_press(Message::OpenVideoDialog),
        button(text("Subtitles").size(14))
            .style(styles::control_button)
            .padding([5, 15])
            .on_press(Message::OpenSubtitleDialog(TrackKind::Primary)),
        button(text("Translation").size(14))
            .style(styles::control_button)
            .padding([5, 15])
            .on_press(Message::OpenSubtitleDialog(TrackKind::Secondary)),
        Space::new(Length::Fill, Length::Shrink),
        button(text("Shortcuts").size(14))
            .style(styles::control_button)
            .padding([5, 15])
            .on_press(Message::ShowHelp),
    ]
    .spacing(8)
    .padding(8)
    .align_y(Alignment::Center)
    .into()
}
