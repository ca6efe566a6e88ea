// SPDX-License-Identifier: MPL-2.0
//! `iced_echo` is a video player for language learners built with the Iced
//! GUI framework.
//!
//! It plays a video alongside two independently-timed subtitle tracks and
//! offers caption-granular playback control: jump to a caption, play until
//! the next one, repeat, and a guided hide/reveal practice drill. The
//! synchronization core lives in [`playback`]; decoding is delegated to
//! the [`media`] backend.

pub mod app;
pub mod config;
pub mod error;
pub mod media;
pub mod playback;
pub mod subtitle;
pub mod ui;
