//! Project data model
//!
//! This module contains the timeline snapshot and the pieces it is made of.

mod project;
mod track;
mod clip;
mod marker;

pub use project::ProjectState;
pub use track::Track;
pub use clip::{Clip, ClipKind, TextStyle};
pub use marker::Marker;
