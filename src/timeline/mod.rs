//! Timeline module
//!
//! Geometry and gesture helpers for the timeline view: converting pointer
//! positions to times, deciding what a click means, and formatting the
//! time readout. Drawing itself belongs to the view layer.

use crate::constants::{
    TIMELINE_MIN_EXTENT_SECONDS, TIMELINE_RULER_HEIGHT, TIMELINE_TRAILING_SECONDS,
};

/// What a click on the timeline area asks for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimelineClick {
    /// Click on the ruler strip.
    AddMarker(f64),
    /// Click anywhere below the ruler.
    Seek(f64),
}

/// Time under a horizontal pointer position, before clamping.
pub fn raw_time_at(x: f64, scroll_left: f64, zoom: f64) -> f64 {
    (x + scroll_left) / zoom.max(f64::EPSILON)
}

/// Time under a horizontal pointer position, never negative.
pub fn time_at(x: f64, scroll_left: f64, zoom: f64) -> f64 {
    raw_time_at(x, scroll_left, zoom).max(0.0)
}

/// Classify a click at `(x, y)` relative to the timeline's top-left corner.
///
/// The ruler strip adds a marker at the raw pointer time; the rest of the area
/// seeks, clamped to 0.
pub fn classify_click(x: f64, y: f64, scroll_left: f64, zoom: f64) -> TimelineClick {
    let time = raw_time_at(x, scroll_left, zoom);
    if y < TIMELINE_RULER_HEIGHT {
        TimelineClick::AddMarker(time)
    } else {
        TimelineClick::Seek(time.max(0.0))
    }
}

/// Seconds of scrollable content for a project of `duration` seconds.
pub fn content_extent(duration: f64) -> f64 {
    (duration + TIMELINE_TRAILING_SECONDS).max(TIMELINE_MIN_EXTENT_SECONDS)
}

/// Horizontal position and width of a clip, in pixels.
pub fn clip_span_px(start_offset: f64, duration: f64, zoom: f64) -> (f64, f64) {
    (start_offset * zoom, duration * zoom)
}

/// Format seconds as `MM:SS:CC` (centiseconds).
pub fn format_time(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    let mins = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    let centis = ((seconds % 1.0) * 100.0).floor() as u64;
    format!("{:02}:{:02}:{:02}", mins, secs, centis)
}
