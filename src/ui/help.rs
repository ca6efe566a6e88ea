// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcuts screen.

use crate::ui::styles;
use iced::widget::{button, column, container, row, scrollable, text, Column};
use iced::{Element, Length};

const SHORTCUTS: &[(&str, &str)] = &[
    ("Space", "Play / pause"),
    (
        "Up Arrow",
        "Practice drill: no subtitles, primary only, both, then next caption",
    ),
    ("Right Arrow", "Play until the end of the next caption"),
    ("Ctrl + Right", "Skip to the start of the next caption"),
    ("Left Arrow", "Go back to the previous caption"),
    ("Down Arrow", "Repeat the current caption"),
    ("F", "Toggle fullscreen"),
    ("Escape", "Exit fullscreen"),
];

const TIPS: &[&str] = &[
    "Press Right repeatedly to keep playing through several captions in one go.",
    "Press Ctrl+Right repeatedly to fast-track through the video caption by caption.",
    "Press Up once to hide the subtitles, then Down to replay the caption while it stays hidden: a listening comprehension check.",
];

/// Renders the shortcuts screen. `on_close` is emitted by the close button.
pub fn view<Message: Clone + 'static>(on_close: Message) -> Element<'static, Message> {
    let mut rows = Column::new().spacing(8);
    for (key, action) in SHORTCUTS {
        rows = rows.push(
            row![
                text(*key).width(Length::Fixed(120.0)).size(16),
                text(*action).size(16),
            ]
            .spacing(12),
        );
    }

    let mut tips = Column::new().spacing(6);
    for tip in TIPS {
        tips = tips.push(text(format!("• {tip}")).size(14));
    }

    let content = column![
        text("How to use").size(24),
        text("Open a video, load your subtitles, then drive everything from the keyboard.").size(14),
        text("Keyboard shortcuts").size(20),
        rows,
        text("Practical tips").size(20),
        tips,
        button(text("Close"))
            .style(styles::control_button)
            .padding([5, 15])
            .on_press(on_close),
    ]
    .spacing(16)
    .padding(24)
    .max_width(640);

    container(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .style(styles::screen)
        .into()
}
