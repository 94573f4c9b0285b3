//! Editing policy constants shared by the model, timeline and preview.

/// Timeline length of a fresh project, in seconds.
pub const DEFAULT_PROJECT_DURATION_SECONDS: f64 = 10.0;

/// Clip length used when a video asset is dropped. Real media length is
/// unknown to the model.
pub const DEFAULT_VIDEO_CLIP_SECONDS: f64 = 5.0;
pub const DEFAULT_IMAGE_CLIP_SECONDS: f64 = 3.0;
pub const DEFAULT_TEXT_CLIP_SECONDS: f64 = 3.0;

pub const DEFAULT_MARKER_COLOR: &str = "#6366f1";

pub const DEFAULT_TEXT_FONT_SIZE: f32 = 24.0;
pub const DEFAULT_TEXT_FONT_FAMILY: &str = "Inter";
/// Normalized text anchor, in percent of the canvas.
pub const DEFAULT_TEXT_POSITION: f32 = 50.0;

/// Pixels per second on the timeline.
pub const TIMELINE_DEFAULT_ZOOM: f64 = 20.0;
/// Height of the ruler strip; clicks above it add markers.
pub const TIMELINE_RULER_HEIGHT: f64 = 24.0;
/// Empty space shown after the last second of the project.
pub const TIMELINE_TRAILING_SECONDS: f64 = 10.0;
pub const TIMELINE_MIN_EXTENT_SECONDS: f64 = 60.0;

pub const PLAYBACK_DEFAULT_FPS: u32 = 60;
