use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{
    DEFAULT_TEXT_CLIP_SECONDS, DEFAULT_TEXT_FONT_FAMILY, DEFAULT_TEXT_FONT_SIZE,
    DEFAULT_TEXT_POSITION,
};
use crate::state::{MediaAsset, MediaKind};
use super::track::Track;

/// What a clip shows when it is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClipKind {
    Video,
    Image,
    Text,
    Audio,
}

impl From<MediaKind> for ClipKind {
    fn from(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Video => ClipKind::Video,
            MediaKind::Image => ClipKind::Image,
        }
    }
}

/// Rendering style for text clips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_size: f32,
    /// CSS-style color string, e.g. "#ffffff".
    pub color: String,
    /// Box color behind the text; `None` draws no box.
    #[serde(default)]
    pub background_color: Option<String>,
    pub font_family: String,
    /// Horizontal anchor in percent of the canvas width (0-100).
    pub x: f32,
    /// Vertical anchor in percent of the canvas height (0-100).
    pub y: f32,
}

impl TextStyle {
    /// Default centered style with the given colors.
    pub fn centered(color: impl Into<String>, background_color: Option<String>) -> Self {
        Self {
            font_size: DEFAULT_TEXT_FONT_SIZE,
            color: color.into(),
            background_color,
            font_family: DEFAULT_TEXT_FONT_FAMILY.to_string(),
            x: DEFAULT_TEXT_POSITION,
            y: DEFAULT_TEXT_POSITION,
        }
    }
}

/// A clip placed on a track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    /// Unique identifier
    pub id: Uuid,
    /// Asset shown by this clip. Lookup only; the asset may no longer exist.
    #[serde(default)]
    pub asset_id: Option<Uuid>,
    pub kind: ClipKind,
    /// Start time on the timeline in seconds
    pub start_offset: f64,
    /// Duration in seconds
    pub duration: f64,
    /// 0 = main media track, 1 = overlay track
    pub track_index: usize,
    /// Text payload for text clips
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub style: Option<TextStyle>,
}

impl Clip {
    /// Create a clip for a media asset with the default length for its kind.
    pub fn from_asset(asset: &MediaAsset, start_offset: f64, track_index: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            asset_id: Some(asset.id),
            kind: asset.kind.into(),
            start_offset,
            duration: asset.kind.default_clip_duration(),
            track_index,
            content: Some(String::new()),
            style: None,
        }
    }

    /// Create a text clip on the overlay track.
    pub fn text(content: impl Into<String>, style: TextStyle, start_offset: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            asset_id: None,
            kind: ClipKind::Text,
            start_offset,
            duration: DEFAULT_TEXT_CLIP_SECONDS,
            track_index: Track::Overlay.index(),
            content: Some(content.into()),
            style: Some(style),
        }
    }

    /// Get the end time of this clip
    pub fn end_time(&self) -> f64 {
        self.start_offset + self.duration
    }

    /// Whether `time` falls inside `[start_offset, end_time)`.
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start_offset && time < self.end_time()
    }

    pub fn is_text(&self) -> bool {
        self.kind == ClipKind::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_half_open() {
        let asset = MediaAsset::new(MediaKind::Image, "data:image/png;base64,AAAA");
        let clip = Clip::from_asset(&asset, 2.0, 0);
        assert_eq!(clip.duration, 3.0);
        assert!(!clip.contains(1.99));
        assert!(clip.contains(2.0));
        assert!(clip.contains(4.99));
        assert!(!clip.contains(5.0));
    }

    #[test]
    fn test_video_asset_maps_to_video_clip() {
        let asset = MediaAsset::new(MediaKind::Video, "blob:video");
        let clip = Clip::from_asset(&asset, 0.0, 1);
        assert_eq!(clip.kind, ClipKind::Video);
        assert_eq!(clip.duration, 5.0);
        assert_eq!(clip.track_index, 1);
        assert_eq!(clip.asset_id, Some(asset.id));
    }

    #[test]
    fn test_text_clip_defaults() {
        let clip = Clip::text("Hello", TextStyle::centered("#fff", None), 1.5);
        assert!(clip.is_text());
        assert_eq!(clip.track_index, 1);
        assert_eq!(clip.duration, 3.0);
        let style = clip.style.unwrap();
        assert_eq!(style.font_family, "Inter");
        assert_eq!(style.font_size, 24.0);
        assert_eq!((style.x, style.y), (50.0, 50.0));
    }

    #[test]
    fn test_clip_kind_serializes_uppercase() {
        let json = serde_json::to_string(&ClipKind::Text).unwrap();
        assert_eq!(json, "\"TEXT\"");
    }
}
