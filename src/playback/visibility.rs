// SPDX-License-Identifier: MPL-2.0
//! Subtitle visibility staging.

/// Which subtitle lanes are shown once playback auto-pauses.
///
/// The state is *staged*: commands set it, but the labels are only
/// re-resolved through [`VisibilityState::flags`] when an auto-pause fires
/// or a command forces a change. This is what lets the practice drill hide
/// a caption while it plays and reveal it on the pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisibilityState {
    #[default]
    Hidden,
    PrimaryOnly,
    Both,
}

/// Per-lane show/hide decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityFlags {
    pub primary: bool,
    pub secondary: bool,
}

impl VisibilityState {
    /// Pure mapping from staged state to per-lane flags.
    pub fn flags(self) -> VisibilityFlags {
        match self {
            VisibilityState::Hidden => VisibilityFlags {
                primary: false,
                secondary: false,
            },
            VisibilityState::PrimaryOnly => VisibilityFlags {
                primary: true,
                secondary: false,
            },
            VisibilityState::Both => VisibilityFlags {
                primary: true,
                secondary: true,
            },
        }
    }
}
