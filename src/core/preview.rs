//! Resolve what the preview canvas shows at a point in time.
//!
//! The canvas has two layers: the main track (video or image) and a text
//! overlay. Each layer shows the active clip for its track, if any.

use uuid::Uuid;

use crate::state::{AssetLibrary, MediaKind, ProjectState, Track};

/// What to draw on the main layer.
#[derive(Debug, Clone, PartialEq)]
pub enum MainLayer {
    /// No clip covers this time.
    Empty { time: f64 },
    /// A clip is active but its asset is gone from the library.
    MissingAsset { clip_id: Uuid },
    Media {
        clip_id: Uuid,
        asset_id: Uuid,
        kind: MediaKind,
        url: String,
        /// Offset into the media, `time - clip.start_offset`.
        source_time: f64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextOverlay {
    pub clip_id: Uuid,
    pub text: String,
    pub color: Option<String>,
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewFrame {
    pub main: MainLayer,
    pub overlay: Option<TextOverlay>,
}

pub fn resolve_frame(project: &ProjectState, assets: &AssetLibrary, time: f64) -> PreviewFrame {
    PreviewFrame {
        main: resolve_main_layer(project, assets, time),
        overlay: resolve_overlay(project, time),
    }
}

fn resolve_main_layer(project: &ProjectState, assets: &AssetLibrary, time: f64) -> MainLayer {
    let Some(clip) = project.active_clip(Track::Main.index(), time) else {
        return MainLayer::Empty { time };
    };
    match clip.asset_id.and_then(|id| assets.find(id)) {
        Some(asset) => MainLayer::Media {
            clip_id: clip.id,
            asset_id: asset.id,
            kind: asset.kind,
            url: asset.url.clone(),
            source_time: time - clip.start_offset,
        },
        None => MainLayer::MissingAsset { clip_id: clip.id },
    }
}

fn resolve_overlay(project: &ProjectState, time: f64) -> Option<TextOverlay> {
    let clip = project
        .active_clip(Track::Overlay.index(), time)
        .filter(|clip| clip.is_text())?;
    let style = clip.style.as_ref();
    Some(TextOverlay {
        clip_id: clip.id,
        text: clip.content.clone().unwrap_or_default(),
        color: style.map(|s| s.color.clone()),
        background_color: style
            .and_then(|s| s.background_color.clone())
            .filter(|bg| bg != "transparent"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MediaAsset;

    #[test]
    fn test_empty_timeline() {
        let frame = resolve_frame(&ProjectState::default(), &AssetLibrary::default(), 1.5);
        assert_eq!(frame.main, MainLayer::Empty { time: 1.5 });
        assert!(frame.overlay.is_none());
    }

    #[test]
    fn test_media_layer_reports_source_time() {
        let mut assets = AssetLibrary::default();
        let asset = MediaAsset::new(MediaKind::Video, "blob:video");
        assets.add(asset.clone());
        let project = ProjectState::default().drop_asset(&asset, 2.0, 0);

        match resolve_frame(&project, &assets, 3.5).main {
            MainLayer::Media { asset_id, source_time, kind, .. } => {
                assert_eq!(asset_id, asset.id);
                assert_eq!(kind, MediaKind::Video);
                assert!((source_time - 1.5).abs() < 1e-9);
            }
            other => panic!("unexpected layer: {:?}", other),
        }
    }

    #[test]
    fn test_removed_asset_renders_missing() {
        let mut assets = AssetLibrary::default();
        let asset = MediaAsset::new(MediaKind::Image, "blob:image");
        let id = assets.add(asset.clone());
        let project = ProjectState::default().drop_asset(&asset, 0.0, 0);
        assets.remove(id);

        let frame = resolve_frame(&project, &assets, 1.0);
        assert_eq!(
            frame.main,
            MainLayer::MissingAsset { clip_id: project.clips[0].id }
        );
    }

    #[test]
    fn test_text_overlay_drops_transparent_background() {
        let project = ProjectState::default().add_text_clip(
            "Title",
            "#ffffff",
            Some("transparent".to_string()),
            0.0,
        );
        let overlay = resolve_frame(&project, &AssetLibrary::default(), 1.0)
            .overlay
            .unwrap();
        assert_eq!(overlay.text, "Title");
        assert_eq!(overlay.color.as_deref(), Some("#ffffff"));
        assert!(overlay.background_color.is_none());
    }

    #[test]
    fn test_media_on_overlay_track_is_not_text() {
        let asset = MediaAsset::new(MediaKind::Image, "blob:image");
        let project = ProjectState::default().drop_asset(&asset, 0.0, 1);
        let frame = resolve_frame(&project, &AssetLibrary::default(), 1.0);
        assert!(frame.overlay.is_none());
    }
}
