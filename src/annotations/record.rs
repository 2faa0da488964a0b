//! The per-frame annotation record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Phase label the analyzer uses for frames outside any biomechanical phase.
pub const GENERAL_PHASE: &str = "General";

/// One upstream annotation for a single analyzed video frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    /// Index of the analyzed frame in the source video
    #[serde(alias = "frameIndex")]
    pub frame_index: u32,
    /// Shot this frame belongs to, if any
    #[serde(rename = "shot", alias = "shotId", default)]
    pub shot_id: Option<i64>,
    /// Phase label (`"General"` or null means no meaningful phase)
    #[serde(default)]
    pub phase: Option<String>,
    /// Everything else the analyzer attached (keypoints, scores, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FrameRecord {
    /// Create a record with no pass-through attributes.
    pub fn new(frame_index: u32, shot_id: Option<i64>, phase: Option<&str>) -> Self {
        Self {
            frame_index,
            shot_id,
            phase: phase.map(str::to_string),
            extra: Map::new(),
        }
    }

    /// The phase label if it names a real phase.
    pub fn meaningful_phase(&self) -> Option<&str> {
        match self.phase.as_deref() {
            Some(GENERAL_PHASE) | None => None,
            Some(label) => Some(label),
        }
    }

    /// Look up an opaque pass-through attribute.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}
