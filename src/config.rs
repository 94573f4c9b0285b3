//! Editor settings loaded from an optional JSON file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_PROJECT_DURATION_SECONDS, PLAYBACK_DEFAULT_FPS, TIMELINE_DEFAULT_ZOOM,
};

/// Environment variable naming the settings file.
pub const CONFIG_ENV_VAR: &str = "PHOTOMOTION_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read settings file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid settings file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Session-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Timeline length of a new project, in seconds
    #[serde(default = "default_initial_duration")]
    pub initial_duration_seconds: f64,
    /// Maximum undo steps kept; unbounded when absent. 0 turns undo off.
    #[serde(default)]
    pub history_limit: Option<usize>,
    /// Timeline zoom in pixels per second
    #[serde(default = "default_timeline_zoom")]
    pub timeline_zoom: f64,
    /// Tick rate of the playback driver
    #[serde(default = "default_playback_fps")]
    pub playback_fps: u32,
}

fn default_initial_duration() -> f64 {
    DEFAULT_PROJECT_DURATION_SECONDS
}

fn default_timeline_zoom() -> f64 {
    TIMELINE_DEFAULT_ZOOM
}

fn default_playback_fps() -> u32 {
    PLAYBACK_DEFAULT_FPS
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            initial_duration_seconds: default_initial_duration(),
            history_limit: None,
            timeline_zoom: default_timeline_zoom(),
            playback_fps: default_playback_fps(),
        }
    }
}

impl EditorSettings {
    /// Load settings from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings if a file is given and readable, otherwise use defaults.
    ///
    /// A missing file is normal. A broken one is logged and ignored.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {:?}", path);
                if settings.undo_disabled() {
                    tracing::warn!("history_limit is 0 in {:?}; undo is disabled", path);
                }
                settings
            }
            Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No settings file at {:?}, using defaults", path);
                Self::default()
            }
            Err(err) => {
                tracing::warn!("{}; using defaults", err);
                Self::default()
            }
        }
    }

    /// Settings file named by `PHOTOMOTION_CONFIG`, if set.
    pub fn path_from_env() -> Option<PathBuf> {
        std::env::var_os(CONFIG_ENV_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }

    /// Whether `history_limit` keeps no undo steps at all.
    pub fn undo_disabled(&self) -> bool {
        self.history_limit == Some(0)
    }

    /// Time between playback ticks.
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / f64::from(self.playback_fps.max(1)))
    }
}
