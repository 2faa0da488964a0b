//! Shot segmentation.
//!
//! A shot is the bounding frame range of every record carrying the same
//! shot id. Records without a shot id never close or split a shot, so the
//! range may contain gaps.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::annotations::FrameRecord;

/// Pass-through attribute the analyzer uses for a make/miss verdict.
const RESULT_ATTRIBUTE: &str = "result";

/// Outcome of a shot attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShotOutcome {
    Made,
    Missed,
    Unknown,
}

impl ShotOutcome {
    /// Interpret the analyzer's numeric verdict (1 made, 0 missed).
    fn from_value(value: &Value) -> Self {
        match value.as_i64() {
            Some(1) => Self::Made,
            Some(0) => Self::Missed,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Made => "made",
            Self::Missed => "missed",
            Self::Unknown => "unknown",
        }
    }
}

/// A bounded frame span attributed to one shot attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shot {
    pub id: i64,
    pub start_frame: u32,
    pub end_frame: u32,
    pub result: ShotOutcome,
    pub label: String,
}

impl Shot {
    fn open(id: i64, frame_index: u32) -> Self {
        Self {
            id,
            start_frame: frame_index,
            end_frame: frame_index,
            result: ShotOutcome::Unknown,
            label: format!("Shot {}", id),
        }
    }

    /// Whether `frame` lies inside the shot's bounding range.
    pub fn contains(&self, frame: u32) -> bool {
        (self.start_frame..=self.end_frame).contains(&frame)
    }
}

/// Partition frame records into shots, sorted ascending by id.
///
/// # Arguments
/// * `frames` - Records ordered by `frame_index`
///
/// # Returns
/// One `Shot` per distinct non-null shot id. Empty when no record has a shot id.
pub fn segment_shots(frames: &[FrameRecord]) -> Vec<Shot> {
    let mut shots: BTreeMap<i64, Shot> = BTreeMap::new();

    for frame in frames {
        let Some(id) = frame.shot_id else {
            continue;
        };

        let shot = shots
            .entry(id)
            .or_insert_with(|| Shot::open(id, frame.frame_index));
        shot.start_frame = shot.start_frame.min(frame.frame_index);
        shot.end_frame = shot.end_frame.max(frame.frame_index);

        if shot.result == ShotOutcome::Unknown {
            if let Some(value) = frame.attribute(RESULT_ATTRIBUTE) {
                shot.result = ShotOutcome::from_value(value);
            }
        }
    }

    shots.into_values().collect()
}

/// The frames belonging to one shot id, in frame order.
pub fn shot_frames(frames: &[FrameRecord], shot_id: i64) -> Vec<&FrameRecord> {
    frames
        .iter()
        .filter(|f| f.shot_id == Some(shot_id))
        .collect()
}
