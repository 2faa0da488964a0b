//! Shot and phase derivation over an immutable frame annotation sequence.
//!
//! - `shots`: groups records into [`Shot`] bounding ranges
//! - `phases`: splits one shot into named [`Phase`] intervals
//!
//! [`Segmentation`] ties the two together for a review session. Shots are
//! derived once per input; phases are memoized by
//! `(input identity, selected shot index)` and recomputed only when either
//! changes.

mod phases;
mod shots;

pub use phases::{phase_at, segment_phases, Phase, PhaseBoundaryConvention};
pub use shots::{segment_shots, shot_frames, Shot, ShotOutcome};

use std::sync::Arc;

use crate::annotations::FrameRecord;

/// Memo key: allocation address of the frame slice plus the shot index.
type PhaseKey = (usize, usize);

/// Shot list and per-shot phase cache for one annotation input.
#[derive(Debug)]
pub struct Segmentation {
    frames: Arc<[FrameRecord]>,
    shots: Arc<[Shot]>,
    convention: PhaseBoundaryConvention,
    phase_memo: Option<(PhaseKey, Arc<[Phase]>)>,
}

impl Segmentation {
    /// Derive the shot list for `frames`.
    pub fn new(frames: Arc<[FrameRecord]>) -> Self {
        Self::with_convention(frames, PhaseBoundaryConvention::default())
    }

    /// Derive the shot list, using `convention` for later phase derivations.
    pub fn with_convention(frames: Arc<[FrameRecord]>, convention: PhaseBoundaryConvention) -> Self {
        let shots: Arc<[Shot]> = segment_shots(&frames).into();
        tracing::debug!(
            frames = frames.len(),
            shots = shots.len(),
            "derived shot segmentation"
        );
        Self {
            frames,
            shots,
            convention,
            phase_memo: None,
        }
    }

    /// The annotation input.
    pub fn frames(&self) -> &Arc<[FrameRecord]> {
        &self.frames
    }

    /// All shots, ascending by id.
    pub fn shots(&self) -> &Arc<[Shot]> {
        &self.shots
    }

    /// The shot at `index`, if it exists.
    pub fn shot(&self, index: usize) -> Option<&Shot> {
        self.shots.get(index)
    }

    /// Phase intervals for the shot at `shot_index`.
    ///
    /// Returns the cached list when neither the input nor the index changed.
    /// An index with no shot (including the implicit whole-clip shot used
    /// when the input has no shots) has no phases.
    pub fn phases(&mut self, shot_index: usize) -> Arc<[Phase]> {
        let key = (Arc::as_ptr(&self.frames) as *const u8 as usize, shot_index);
        if let Some((cached_key, phases)) = &self.phase_memo {
            if *cached_key == key {
                return Arc::clone(phases);
            }
        }

        let phases: Arc<[Phase]> = match self.shots.get(shot_index) {
            Some(shot) => {
                let subsequence = shot_frames(&self.frames, shot.id);
                segment_phases(&subsequence, shot.end_frame, self.convention).into()
            }
            None => Arc::from(Vec::new()),
        };
        tracing::debug!(shot_index, phases = phases.len(), "derived phase segmentation");
        self.phase_memo = Some((key, Arc::clone(&phases)));
        phases
    }

    /// The record annotating exactly `frame_index`, if any.
    pub fn frame_at(&self, frame_index: u32) -> Option<&FrameRecord> {
        self.frames
            .binary_search_by_key(&frame_index, |f| f.frame_index)
            .ok()
            .map(|i| &self.frames[i])
    }
}
