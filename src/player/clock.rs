//! Conversion between playback seconds and analyzed-frame indices.
//!
//! Note the two directions are not inverses: seconds → frame multiplies by
//! `fps`, frame → seconds divides by `fps - 1`. Both match what the analyzer
//! screens have always done; do not "fix" one without the other.

use crate::player::media::LoadMetadata;

/// Frame rate the upstream analyzer assumes when the media reports none.
pub const DEFAULT_FPS: f64 = 29.952681388012618;

/// Rate used when a video track is present but reports no nominal rate.
pub const TRACK_FALLBACK_FPS: f64 = 30.0;

/// Whether `fps` can drive both conversion directions.
///
/// Frame → seconds divides by `fps - 1`, so rates at or below 1 are rejected.
pub fn is_usable_fps(fps: f64) -> bool {
    fps.is_finite() && fps > 1.0
}

/// Pick the frame rate for loaded media.
///
/// Order: container frame rate, then the first video track's nominal rate
/// (or [`TRACK_FALLBACK_FPS`] if it reports none), then `default_fps`.
/// Unusable rates at any step fall through to the next.
pub fn resolve_fps(metadata: &LoadMetadata, default_fps: f64) -> f64 {
    if let Some(fps) = metadata.frame_rate.filter(|f| is_usable_fps(*f)) {
        return fps;
    }
    if let Some(track) = metadata.video_tracks.first() {
        let fps = track.nominal_frame_rate.unwrap_or(TRACK_FALLBACK_FPS);
        if is_usable_fps(fps) {
            return fps;
        }
    }
    default_fps
}

/// Seconds/frame conversions for one loaded clip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    fps: f64,
    duration: f64,
    total_frames: u32,
}

impl FrameClock {
    /// Create a clock for a clip of `duration` seconds at `fps`.
    pub fn new(duration: f64, fps: f64) -> Self {
        let duration = if duration.is_finite() { duration.max(0.0) } else { 0.0 };
        let total_frames = (duration * fps).floor() as u32;
        Self {
            fps,
            duration,
            total_frames,
        }
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// `floor(duration * fps)`
    pub fn total_frames(&self) -> u32 {
        self.total_frames
    }

    /// Highest valid frame index (0 for an empty clip).
    pub fn last_frame(&self) -> u32 {
        self.total_frames.saturating_sub(1)
    }

    /// Frame shown at `time` seconds, clamped to `[0, total_frames - 1]`.
    pub fn frame_index(&self, time: f64) -> u32 {
        if self.total_frames == 0 || !time.is_finite() || time <= 0.0 {
            return 0;
        }
        let frame = (time * self.fps).floor();
        if frame >= self.last_frame() as f64 {
            self.last_frame()
        } else {
            frame as u32
        }
    }

    /// Seek target for `frame`, using the `fps - 1` denominator.
    pub fn time_of_frame(&self, frame: u32) -> f64 {
        frame as f64 / (self.fps - 1.0)
    }

    /// Clamp `time` into `[0, duration]`.
    pub fn clamp_time(&self, time: f64) -> f64 {
        if time.is_nan() {
            return 0.0;
        }
        time.clamp(0.0, self.duration)
    }

    /// Clamp `frame` into `[0, total_frames - 1]`.
    pub fn clamp_frame(&self, frame: u32) -> u32 {
        frame.min(self.last_frame())
    }
}
