use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::DEFAULT_PROJECT_DURATION_SECONDS;
use crate::state::MediaAsset;
use super::{Clip, Marker, TextStyle};

/// One immutable snapshot of the editable project.
///
/// Edits never mutate a snapshot in place: every derivation method borrows the
/// current state and returns a new one, which the caller commits to
/// [`History`](crate::history::History).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectState {
    /// All clips, in insertion order
    pub clips: Vec<Clip>,
    /// All markers, in creation order (not sorted by time)
    pub markers: Vec<Marker>,
    /// Total timeline length in seconds. Grows to fit content, never shrinks.
    pub duration: f64,
}

impl Default for ProjectState {
    fn default() -> Self {
        Self::with_duration(DEFAULT_PROJECT_DURATION_SECONDS)
    }
}

impl ProjectState {
    /// Create an empty project with the given timeline length.
    pub fn with_duration(duration: f64) -> Self {
        Self {
            clips: Vec::new(),
            markers: Vec::new(),
            duration: duration.max(0.0),
        }
    }

    /// End of the last clip, or 0 for an empty timeline.
    pub fn content_end(&self) -> f64 {
        self.clips.iter().map(|c| c.end_time()).fold(0.0, f64::max)
    }

    pub fn find_clip(&self, id: Uuid) -> Option<&Clip> {
        self.clips.iter().find(|c| c.id == id)
    }

    pub fn find_marker(&self, id: Uuid) -> Option<&Marker> {
        self.markers.iter().find(|m| m.id == id)
    }

    /// Get all clips on a specific track, in insertion order
    pub fn clips_on_track(&self, track_index: usize) -> impl Iterator<Item = &Clip> {
        self.clips.iter().filter(move |c| c.track_index == track_index)
    }

    /// The clip drawn on `track_index` at `time`.
    ///
    /// Overlap is allowed, and the first matching clip in insertion order wins,
    /// regardless of start time. A later clip that covers the same instant is
    /// hidden until the earlier one ends.
    pub fn active_clip(&self, track_index: usize, time: f64) -> Option<&Clip> {
        self.clips_on_track(track_index).find(|c| c.contains(time))
    }

    /// Place a media asset on a track at `time`.
    pub fn drop_asset(&self, asset: &MediaAsset, time: f64, track_index: usize) -> Self {
        self.with_clip(Clip::from_asset(asset, time, track_index))
    }

    /// Add a text overlay starting at `at_time`.
    pub fn add_text_clip(
        &self,
        text: impl Into<String>,
        color: impl Into<String>,
        background: Option<String>,
        at_time: f64,
    ) -> Self {
        let style = TextStyle::centered(color, background);
        self.with_clip(Clip::text(text, style, at_time))
    }

    /// Remove a clip. Missing ids leave the clips untouched; the duration is
    /// kept either way.
    pub fn delete_clip(&self, clip_id: Uuid) -> Self {
        Self {
            clips: self.clips.iter().filter(|c| c.id != clip_id).cloned().collect(),
            markers: self.markers.clone(),
            duration: self.duration,
        }
    }

    /// Add a marker labelled after the number of markers that exist so far.
    pub fn add_marker(&self, time: f64) -> Self {
        let mut markers = self.markers.clone();
        markers.push(Marker::numbered(time, self.markers.len() + 1));
        Self {
            clips: self.clips.clone(),
            markers,
            duration: self.duration,
        }
    }

    pub fn delete_marker(&self, marker_id: Uuid) -> Self {
        Self {
            clips: self.clips.clone(),
            markers: self
                .markers
                .iter()
                .filter(|m| m.id != marker_id)
                .cloned()
                .collect(),
            duration: self.duration,
        }
    }

    fn with_clip(&self, clip: Clip) -> Self {
        let duration = self.duration.max(clip.end_time());
        let mut clips = self.clips.clone();
        clips.push(clip);
        Self {
            clips,
            markers: self.markers.clone(),
            duration,
        }
    }
}
