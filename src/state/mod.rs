//! State management module
//!
//! This module contains all the core data structures for the editor:
//! - ProjectState: The undoable timeline snapshot
//! - Track: The fixed timeline lanes
//! - Clip: Media and text clips placed on tracks
//! - Marker: Point-in-time annotations
//! - MediaAsset: Generated or uploaded media, kept outside the undo history
//! - PlaybackClock: The playhead, also kept outside the undo history

mod project;
mod asset;
mod playback;

pub use project::*;
pub use asset::*;
pub use playback::*;
