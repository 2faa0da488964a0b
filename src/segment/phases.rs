//! Phase segmentation within a single shot.
//!
//! Runs of same-labelled frames become [`Phase`] intervals. `"General"` and
//! unlabelled frames close the open phase and never produce an interval.
//! Same-named phases separated by a gap stay separate intervals.

use serde::Serialize;

use crate::annotations::FrameRecord;

/// A named biomechanical sub-stage of a shot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Phase {
    pub phase: String,
    pub start_frame: u32,
    pub end_frame: u32,
}

impl Phase {
    /// Whether `frame` lies inside the interval.
    ///
    /// Always false for the inverted single-frame intervals the legacy
    /// convention can produce (`start_frame > end_frame`).
    pub fn contains(&self, frame: u32) -> bool {
        (self.start_frame..=self.end_frame).contains(&frame)
    }
}

/// How interval start frames are chosen when a phase is closed.
///
/// The analyzer-facing screens have always shifted the start frame by one
/// when a phase is closed by a `"General"` frame, but not when it is closed
/// by another phase or by the end of the shot. Whether the shift compensates
/// for the labeller or is a bug is unknown, so it is kept as the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PhaseBoundaryConvention {
    /// `start + 1` when closed by a `"General"`/unlabelled frame.
    #[default]
    Legacy,
    /// Start frame is never adjusted.
    Symmetric,
}

impl PhaseBoundaryConvention {
    fn start_on_general_close(self, start_frame: u32) -> u32 {
        match self {
            Self::Legacy => start_frame.saturating_add(1),
            Self::Symmetric => start_frame,
        }
    }
}

/// Open phase tracked during the scan.
struct OpenPhase<'a> {
    name: &'a str,
    start_frame: u32,
}

/// Partition one shot's frame subsequence into phase intervals.
///
/// # Arguments
/// * `frames` - The shot's records in frame order
/// * `shot_end_frame` - End frame of the shot, used to close a trailing phase
/// * `convention` - Start-frame rule for phases closed by `"General"`
///
/// # Returns
/// Phase intervals in encounter order
pub fn segment_phases(
    frames: &[&FrameRecord],
    shot_end_frame: u32,
    convention: PhaseBoundaryConvention,
) -> Vec<Phase> {
    let mut phases = Vec::new();
    let mut open: Option<OpenPhase<'_>> = None;

    for (i, frame) in frames.iter().enumerate() {
        let prev_frame_index = |start: u32| {
            if i > 0 {
                frames[i - 1].frame_index
            } else {
                start
            }
        };

        match frame.meaningful_phase() {
            Some(label) => {
                if open.as_ref().is_some_and(|p| p.name == label) {
                    continue;
                }
                if let Some(prev) = open.take() {
                    phases.push(Phase {
                        phase: prev.name.to_string(),
                        start_frame: prev.start_frame,
                        end_frame: prev_frame_index(prev.start_frame),
                    });
                }
                open = Some(OpenPhase {
                    name: label,
                    start_frame: frame.frame_index,
                });
            }
            None => {
                if let Some(prev) = open.take() {
                    phases.push(Phase {
                        phase: prev.name.to_string(),
                        start_frame: convention.start_on_general_close(prev.start_frame),
                        end_frame: prev_frame_index(prev.start_frame),
                    });
                }
            }
        }
    }

    if let Some(last) = open {
        phases.push(Phase {
            phase: last.name.to_string(),
            start_frame: last.start_frame,
            end_frame: shot_end_frame,
        });
    }

    phases
}

/// The first phase interval containing `frame`.
pub fn phase_at(phases: &[Phase], frame: u32) -> Option<&Phase> {
    phases.iter().find(|p| p.contains(frame))
}
