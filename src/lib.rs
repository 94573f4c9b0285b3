//! PhotoMotion editor core
//!
//! Timeline model and undo/redo history for an editor that assembles
//! AI-generated and uploaded media into a two-track timeline.

pub mod config;
pub mod constants;
pub mod core;
pub mod editor;
pub mod history;
pub mod hotkeys;
pub mod state;
pub mod timeline;

pub use config::{ConfigError, EditorSettings};
pub use editor::Editor;
pub use history::History;
