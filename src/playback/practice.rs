// SPDX-License-Identifier: MPL-2.0
//! The guided 4-step practice drill.
//!
//! One repeated command walks the current caption through:
//!
//! 1. play it with all subtitles hidden (pure listening),
//! 2. replay with the primary caption shown,
//! 3. replay with both captions shown,
//! 4. continue into the *next* caption, hidden again: playback starts where
//!    the current caption ends so the learner hears the gap, and the drill
//!    is primed to continue at step 2 on the new caption.
//!
//! Any directional navigation abandons the drill.

use super::command::Effect;
use super::session::PlaybackSession;
use super::visibility::VisibilityState;
use crate::media::MediaBackend;

/// Position within the drill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PracticeStep {
    #[default]
    Idle,
    Step1,
    Step2,
    Step3,
}

/// Advances the drill by one step.
///
/// Callers have already checked that a video and a primary track are
/// loaded. Each step issues exactly one seek and one play.
pub(super) fn advance(
    session: &mut PlaybackSession,
    backend: &mut dyn MediaBackend,
    effects: &mut Vec<Effect>,
) {
    let Some(track) = session.primary.as_ref() else {
        return;
    };
    let Some(entry) = track.get(session.current_index) else {
        return;
    };
    let (start, end) = (entry.start, entry.end);

    match session.practice_step {
        PracticeStep::Idle => {
            session.practice_times = Some((start, end));
            session.practice_step = PracticeStep::Step1;
            stage(
                session,
                backend,
                effects,
                VisibilityState::Hidden,
                start,
                end,
            );
        }
        PracticeStep::Step1 => {
            // Recomputed from the current entry, not the stored times: the
            // cursor may have moved since the drill started.
            session.practice_times = Some((start, end));
            session.practice_step = PracticeStep::Step2;
            stage(
                session,
                backend,
                effects,
                VisibilityState::PrimaryOnly,
                start,
                end,
            );
        }
        PracticeStep::Step2 => {
            let Some((stored_start, stored_end)) = session.practice_times else {
                return;
            };
            session.practice_step = PracticeStep::Step3;
            stage(
                session,
                backend,
                effects,
                VisibilityState::Both,
                stored_start,
                stored_end,
            );
        }
        PracticeStep::Step3 => {
            let next_index = session.current_index + 1;
            let Some(next) = track.get(next_index) else {
                // No caption to continue into; leave the drill where it is.
                return;
            };
            let (next_start, next_end) = (next.start, next.end);

            session.current_index = next_index;
            session.practice_step = PracticeStep::Step1;
            // Primed so the next press behaves like step 2 on this caption.
            session.practice_times = Some((next_start, next_end));
            // Playback starts at the *end* of the caption just drilled: the
            // learner hears the lead-in gap before the new caption.
            stage(
                session,
                backend,
                effects,
                VisibilityState::Hidden,
                end,
                next_end,
            );
        }
    }
}

/// Shared step plumbing: stage visibility, seek, arm the deadline, play.
fn stage(
    session: &mut PlaybackSession,
    backend: &mut dyn MediaBackend,
    effects: &mut Vec<Effect>,
    visibility: VisibilityState,
    seek_to: crate::subtitle::TimeMs,
    deadline: crate::subtitle::TimeMs,
) {
    session.visibility = visibility;
    let flags = visibility.flags();
    effects.push(Effect::Visibility {
        primary: flags.primary,
        secondary: flags.secondary,
    });

    backend.set_position(seek_to);
    session.pending_pause_deadline = Some(deadline);
    backend.play();
    session.is_playing = true;
    effects.push(Effect::PlaybackState { playing: true });
}
