// SPDX-License-Identifier: MPL-2.0
//! Index resolution over a track for a given playback time.
//!
//! Two deliberately asymmetric lookup modes:
//!
//! - [`nearest_index`] scans in file order and is biased toward the nearest
//!   *preceding* entry. The primary track uses it so the player can "hold"
//!   the last caption between cues.
//! - [`containing_index`] is a stateless binary search with no
//!   nearest-neighbor fallback. The secondary track uses it and shows
//!   nothing between cues.
//!
//! Callers must not feed negative times here; "position unavailable" is
//! handled upstream as a no-op.

use super::{SubtitleTrack, TimeMs};

/// Returns the index of the entry active at `time`, or the nearest
/// preceding one.
///
/// Scan rules, in file order:
/// - first entry with `start <= time <= end` wins;
/// - if `time` falls strictly before an entry's `start` without a match so
///   far, the entry *before* it wins (clamped to 0);
/// - if the scan runs out, the last entry wins.
///
/// The track must be non-empty; callers guard on that.
pub fn nearest_index(track: &SubtitleTrack, time: TimeMs) -> usize {
    debug_assert!(!track.is_empty(), "nearest_index on empty track");

    for (i, entry) in track.entries().iter().enumerate() {
        if entry.start <= time && time <= entry.end {
            return i;
        }
        if time < entry.start {
            return i.saturating_sub(1);
        }
    }
    track.len() - 1
}

/// Binary-searches for an entry whose `[start, end]` range contains `time`.
///
/// Returns `None` between cues and on an empty track. With overlapping
/// entries this returns whichever containing entry the search lands on
/// first, same as any player that trusts file timing.
pub fn containing_index(track: &SubtitleTrack, time: TimeMs) -> Option<usize> {
    let entries = track.entries();
    let mut left = 0isize;
    let mut right = entries.len() as isize - 1;

    while left <= right {
        let mid = ((left + right) / 2) as usize;
        let entry = &entries[mid];
        if entry.start <= time && time <= entry.end {
            return Some(mid);
        } else if time < entry.start {
            right = mid as isize - 1;
        } else {
            left = mid as isize + 1;
        }
    }
    None
}
