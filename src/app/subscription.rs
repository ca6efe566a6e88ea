// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Polling period for the subtitle synchronization tick.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Routes uncaptured key presses to the update loop.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(iced::keyboard::Event::KeyPressed {
                key, modifiers, ..
            }) => Some(Message::KeyPressed {
                key,
                modifiers,
                window,
            }),
            _ => None,
        }
    })
}

/// Fixed-interval poll driving subtitle sync; only runs while a video is
/// loaded.
pub fn create_tick_subscription(video_loaded: bool) -> Subscription<Message> {
    if video_loaded {
        time::every(TICK_INTERVAL).map(|_| Message::Tick)
    } else {
        Subscription::none()
    }
}
