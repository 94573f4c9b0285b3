use serde::{Deserialize, Serialize};

/// The fixed timeline lanes. Tracks are not created or removed at runtime;
/// clips refer to them by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Track {
    /// Main media track - holds video and image clips
    Main,
    /// Overlay track - holds text and anything drawn above the main track
    Overlay,
}

impl Track {
    pub const ALL: [Track; 2] = [Track::Main, Track::Overlay];

    pub fn index(self) -> usize {
        match self {
            Track::Main => 0,
            Track::Overlay => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|track| track.index() == index)
    }

    /// Label drawn in the track header.
    pub fn label(self) -> &'static str {
        match self {
            Track::Main => "VIDEO TRACK",
            Track::Overlay => "OVERLAY TRACK",
        }
    }
}
