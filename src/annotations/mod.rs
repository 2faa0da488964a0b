//! Per-frame annotations produced by the upstream analysis service.
//!
//! The analyzer hands over one ordered array of [`FrameRecord`]s per review
//! session. Records are immutable once loaded and are shared behind an `Arc`
//! so derivations can key their memoization on the allocation identity.

mod error;
mod record;

pub use error::AnnotationError;
pub use record::{FrameRecord, GENERAL_PHASE};

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

/// Accepted top-level payload shapes.
///
/// The analysis response nests the frame array under `normalized_data`;
/// exported fixtures are usually the bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Bare(Vec<FrameRecord>),
    Envelope { normalized_data: Vec<FrameRecord> },
}

/// Parse a frame annotation payload from JSON text.
///
/// Records are sorted by `frame_index` (stable) so downstream segmenters can
/// assume frame order even if the producer emitted them out of order.
pub fn parse_frames(json: &str) -> Result<Arc<[FrameRecord]>, AnnotationError> {
    let payload: Payload = serde_json::from_str(json)?;
    let mut frames = match payload {
        Payload::Bare(frames) => frames,
        Payload::Envelope { normalized_data } => normalized_data,
    };
    frames.sort_by_key(|f| f.frame_index);
    tracing::debug!(count = frames.len(), "parsed frame annotations");
    Ok(frames.into())
}

/// Read and parse a frame annotation payload from a file.
pub fn load_frames(path: impl AsRef<Path>) -> Result<Arc<[FrameRecord]>, AnnotationError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(AnnotationError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    parse_frames(&content)
}
