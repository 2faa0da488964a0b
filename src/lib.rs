//! shotsync - frame-accurate playback and segmentation for reviewing
//! annotated basketball shot recordings.
//!
//! - [`annotations`]: per-frame records from the analysis service
//! - [`segment`]: shot and phase derivation
//! - [`player`]: frame clock, playback controller, review session
//! - [`config`]: user configuration
//! - [`report`]: plain-text listings

pub mod annotations;
pub mod cli;
pub mod config;
pub mod player;
pub mod report;
pub mod segment;

pub use annotations::{load_frames, parse_frames, AnnotationError, FrameRecord};
pub use config::{Config, ConfigError};
pub use player::{PlaybackController, PlaybackState, ReviewSession, SessionError};
pub use segment::{Phase, Segmentation, Shot, ShotOutcome};
