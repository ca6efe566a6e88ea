// SPDX-License-Identifier: MPL-2.0
//! Subtitle-time synchronization and playback-control state machine.
//!
//! The UI shell translates input events into [`Command`] values and feeds
//! them, together with the media backend, to [`PlayerCore::handle`]; the
//! returned [`Effect`] list tells the shell what to show. All timing intent
//! (current caption cursor, pending auto-pause deadline, visibility staging,
//! practice drill) lives in one [`PlaybackSession`] owned by the core, with
//! no ambient state.

pub mod command;
pub mod controller;
pub mod practice;
pub mod session;
pub mod visibility;

pub use command::{Command, Effect, TrackKind};
pub use controller::PlayerCore;
pub use practice::PracticeStep;
pub use session::PlaybackSession;
pub use visibility::{VisibilityFlags, VisibilityState};
