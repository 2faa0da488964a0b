//! Frame-accurate playback for reviewing an annotated shot recording.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `clock`: FrameClock seconds/frame conversions and frame-rate resolution
//! - `state`: PlaybackState struct and shared enums (LoadStatus, SelectionMode)
//! - `media`: the media player seam (commands out, events in)
//! - `controller`: PlaybackController, the play/pause/seek state machine
//! - `selection`: derived shot/phase highlighting
//! - `controls`: auto-hide timer for on-screen controls
//! - `session`: ReviewSession, which owns all of the above for one review
//! - `simulated`: a headless media player for replays without a decoder
//!
//! # Usage
//!
//! ```
//! use shotsync::annotations::FrameRecord;
//! use shotsync::player::{LoadMetadata, MediaEvent, RecordingMedia, ReviewSession, UserGesture};
//! use shotsync::Config;
//! use std::sync::Arc;
//! use std::time::Instant;
//!
//! let frames: Arc<[FrameRecord]> = vec![
//!     FrameRecord::new(0, Some(0), Some("Loading")),
//!     FrameRecord::new(1, Some(0), Some("Release")),
//! ]
//! .into();
//!
//! let mut session =
//!     ReviewSession::open(RecordingMedia::new(), "file:///shot.mp4", frames, &Config::default())
//!         .unwrap();
//! let now = Instant::now();
//! session.handle_media_event(MediaEvent::Loaded(LoadMetadata::new(2.0, Some(30.0))), now);
//! session.handle_gesture(UserGesture::Tap, now);
//! assert!(session.state().is_playing());
//! ```

pub mod clock;
mod controller;
mod controls;
mod error;
mod media;
mod selection;
mod session;
mod simulated;
pub mod state;

pub use clock::{FrameClock, DEFAULT_FPS};
pub use controller::{PlaybackController, ShotSpan};
pub use controls::ControlsVisibility;
pub use error::SessionError;
pub use media::{LoadMetadata, MediaCommand, MediaEvent, MediaPlayer, RecordingMedia, VideoTrack};
pub use selection::{active_selection, ActiveSelection};
pub use session::{ReviewSession, UserGesture};
pub use simulated::SimulatedMedia;
pub use state::{LoadStatus, PlaybackState, SelectionMode};
