use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::DEFAULT_MARKER_COLOR;

/// A marker (point-in-time annotation)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Marker {
    /// Unique identifier
    pub id: Uuid,
    /// Time position in seconds
    pub time: f64,
    pub label: String,
    /// Hex color string, e.g. "#6366f1"
    pub color: String,
}

impl Marker {
    /// Create the `ordinal`-th marker (1-based) at the given time.
    pub fn numbered(time: f64, ordinal: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            time,
            label: format!("Marker {}", ordinal),
            color: DEFAULT_MARKER_COLOR.to_string(),
        }
    }
}
