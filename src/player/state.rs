//! Player state management
//!
//! Contains the central `PlaybackState` struct that holds all playback state,
//! as well as the load/selection enums shared across player modules.

/// Where the clip is in its load lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Load issued, metadata not yet received
    Loading,
    /// Metadata received; time/frame conversions are valid
    Ready,
    /// The media player reported a load failure
    Failed(String),
}

/// Whether the highlighted shot/phase follows the playhead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Derived from the current frame
    Automatic,
    /// Pinned by an explicit shot or phase selection until the next scrub
    Manual,
}

/// Central playback state for a review session.
///
/// Owned by the `PlaybackController`; presentation reads it, never writes.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    // === Load lifecycle ===
    pub status: LoadStatus,

    // === Playback timing ===
    /// Current playback time in seconds, within `[0, duration]` once ready
    pub current_time: f64,
    /// Clip length in seconds (0 until loaded)
    pub duration: f64,
    /// Frame under the playhead, within `[0, total_frames - 1]` once ready
    pub current_frame_index: u32,
    /// Frames per second used for conversions
    pub fps: f64,
    /// `floor(duration * fps)` (0 until loaded)
    pub total_frames: u32,
    /// Whether playback is paused
    pub paused: bool,
    /// True while a scrub gesture is in progress
    pub is_seeking: bool,

    // === Selection ===
    pub selected_shot_index: usize,
    pub selected_phase: Option<String>,
    pub selection_mode: SelectionMode,
}

impl PlaybackState {
    /// State for a session whose media has not loaded yet.
    pub fn new(default_fps: f64) -> Self {
        Self {
            status: LoadStatus::Loading,
            current_time: 0.0,
            duration: 0.0,
            current_frame_index: 0,
            fps: default_fps,
            total_frames: 0,
            paused: true,
            is_seeking: false,
            selected_shot_index: 0,
            selected_phase: None,
            selection_mode: SelectionMode::Automatic,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == LoadStatus::Ready
    }

    pub fn is_playing(&self) -> bool {
        self.is_ready() && !self.paused
    }
}
