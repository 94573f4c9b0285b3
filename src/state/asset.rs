//! Asset types
//!
//! Assets are generated or uploaded media. They live in the library, outside
//! the undo history: clips only hold an asset id, and removing an asset leaves
//! those clips pointing at nothing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

use crate::constants::{DEFAULT_IMAGE_CLIP_SECONDS, DEFAULT_VIDEO_CLIP_SECONDS};

/// The kind of media an asset holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify an upload by its MIME type. Anything that is not video is
    /// treated as an image.
    pub fn from_mime(mime: &str) -> Self {
        if mime.trim().to_ascii_lowercase().starts_with("video") {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }

    /// Classify a file by its extension.
    pub fn from_path(path: &Path) -> Self {
        mime_guess::from_path(path)
            .first()
            .map(|mime| Self::from_mime(mime.essence_str()))
            .unwrap_or(MediaKind::Image)
    }

    /// Timeline length given to a freshly dropped clip of this kind.
    pub fn default_clip_duration(self) -> f64 {
        match self {
            MediaKind::Video => DEFAULT_VIDEO_CLIP_SECONDS,
            MediaKind::Image => DEFAULT_IMAGE_CLIP_SECONDS,
        }
    }
}

/// A generated or uploaded piece of media
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaAsset {
    /// Unique identifier
    pub id: Uuid,
    pub kind: MediaKind,
    /// Opaque content reference (data URL, blob URL, remote URL...)
    pub url: String,
    /// Prompt the asset was generated from, if any
    #[serde(default)]
    pub prompt: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl MediaAsset {
    pub fn new(kind: MediaKind, url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            url: url.into(),
            prompt: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

/// All assets available to the session, newest first.
#[derive(Debug, Clone, Default)]
pub struct AssetLibrary {
    assets: Vec<MediaAsset>,
}

impl AssetLibrary {
    /// Add an asset to the top of the library
    pub fn add(&mut self, asset: MediaAsset) -> Uuid {
        let id = asset.id;
        self.assets.insert(0, asset);
        id
    }

    /// Find an asset by ID
    pub fn find(&self, id: Uuid) -> Option<&MediaAsset> {
        self.assets.iter().find(|a| a.id == id)
    }

    /// Remove an asset by ID. Clips referring to it are left alone.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let len = self.assets.len();
        self.assets.retain(|a| a.id != id);
        self.assets.len() < len
    }

    pub fn iter(&self) -> impl Iterator<Item = &MediaAsset> {
        self.assets.iter()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_kind_from_mime() {
        assert_eq!(MediaKind::from_mime("video/mp4"), MediaKind::Video);
        assert_eq!(MediaKind::from_mime("Video/webm"), MediaKind::Video);
        assert_eq!(MediaKind::from_mime("image/png"), MediaKind::Image);
        assert_eq!(MediaKind::from_mime("application/octet-stream"), MediaKind::Image);
    }

    #[test]
    fn test_kind_from_path() {
        assert_eq!(MediaKind::from_path(&PathBuf::from("clip.mp4")), MediaKind::Video);
        assert_eq!(MediaKind::from_path(&PathBuf::from("still.jpg")), MediaKind::Image);
        assert_eq!(MediaKind::from_path(&PathBuf::from("no_extension")), MediaKind::Image);
    }

    #[test]
    fn test_library_is_newest_first() {
        let mut library = AssetLibrary::default();
        let first = library.add(MediaAsset::new(MediaKind::Image, "a"));
        let second = library.add(MediaAsset::new(MediaKind::Video, "b"));

        let ids: Vec<Uuid> = library.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![second, first]);
        assert!(library.find(first).is_some());
    }

    #[test]
    fn test_library_remove() {
        let mut library = AssetLibrary::default();
        let id = library.add(MediaAsset::new(MediaKind::Image, "a"));
        assert!(library.remove(id));
        assert!(!library.remove(id));
        assert!(library.is_empty());
    }

    #[test]
    fn test_asset_serialization() {
        let asset = MediaAsset::new(MediaKind::Video, "blob:x").with_prompt("a cat surfing");
        let json = serde_json::to_string_pretty(&asset).unwrap();
        let parsed: MediaAsset = serde_json::from_str(&json).unwrap();
        assert_eq!(asset, parsed);
    }
}
