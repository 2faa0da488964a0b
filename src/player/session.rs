//! A review session: one clip, one annotation set, one controller.
//!
//! The session is the only way to start playback. It checks the
//! preconditions up front (no partially built controller ever exists),
//! routes media events and user gestures, and owns the controls timer.
//! Dropping the session releases the media player exactly once.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::annotations::FrameRecord;
use crate::config::Config;
use crate::player::controller::PlaybackController;
use crate::player::controls::ControlsVisibility;
use crate::player::error::SessionError;
use crate::player::media::{MediaEvent, MediaPlayer};
use crate::player::selection::{active_selection, ActiveSelection};
use crate::player::state::PlaybackState;
use crate::segment::{Phase, Shot};

/// Discrete user gestures the presentation layer forwards.
#[derive(Debug, Clone, PartialEq)]
pub enum UserGesture {
    Tap,
    ScrubBegin,
    ScrubMove(f64),
    ScrubEnd(f64),
    SelectPhase { phase: String, start_frame: u32 },
    SelectShot(usize),
    ToggleShotSelector,
    ToggleControls,
}

pub struct ReviewSession<M: MediaPlayer> {
    controller: PlaybackController<M>,
    controls: ControlsVisibility,
    shot_selector_open: bool,
    released: bool,
}

impl<M: MediaPlayer> ReviewSession<M> {
    /// Start a session and issue the media load.
    ///
    /// # Errors
    /// `SessionError::MissingMedia` for a blank `media_uri`,
    /// `SessionError::NoFrames` for an empty annotation set.
    pub fn open(
        mut media: M,
        media_uri: &str,
        frames: Arc<[FrameRecord]>,
        config: &Config,
    ) -> Result<Self, SessionError> {
        if media_uri.trim().is_empty() {
            return Err(SessionError::MissingMedia);
        }
        if frames.is_empty() {
            return Err(SessionError::NoFrames);
        }

        media.load(media_uri);
        let controller = PlaybackController::new(media, frames, config.playback.clone())?;
        tracing::info!(media_uri, "review session opened");

        Ok(Self {
            controller,
            controls: ControlsVisibility::new(Duration::from_millis(config.controls.auto_hide_ms)),
            shot_selector_open: false,
            released: false,
        })
    }

    pub fn state(&self) -> &PlaybackState {
        self.controller.state()
    }

    pub fn controller(&self) -> &PlaybackController<M> {
        &self.controller
    }

    pub fn media(&self) -> &M {
        self.controller.media()
    }

    pub fn media_mut(&mut self) -> &mut M {
        self.controller.media_mut()
    }

    pub fn shots(&self) -> &Arc<[Shot]> {
        self.controller.shots()
    }

    /// Phase intervals of the selected shot.
    pub fn phases(&mut self) -> Arc<[Phase]> {
        self.controller.phases()
    }

    /// The shot and phase to highlight right now.
    pub fn selection(&mut self) -> ActiveSelection {
        let phases = self.controller.phases();
        active_selection(self.controller.state(), self.controller.shots(), &phases)
    }

    pub fn controls_visible(&self) -> bool {
        self.controls.is_visible()
    }

    pub fn shot_selector_open(&self) -> bool {
        self.shot_selector_open
    }

    /// Route a media player event to the controller.
    pub fn handle_media_event(&mut self, event: MediaEvent, now: Instant) {
        let was_playing = self.state().is_playing();
        match event {
            MediaEvent::Loaded(metadata) => self.controller.on_media_loaded(&metadata),
            MediaEvent::LoadFailed { reason } => self.controller.on_media_load_failed(reason),
            MediaEvent::Progress { current_time } => self.controller.on_progress_tick(current_time),
            MediaEvent::Ended => self.controller.on_media_ended(),
        }
        self.sync_controls(was_playing, now);
    }

    /// Route a user gesture to the controller or the session chrome.
    pub fn handle_gesture(&mut self, gesture: UserGesture, now: Instant) {
        let was_playing = self.state().is_playing();
        match gesture {
            UserGesture::Tap => {
                self.controller.on_tap_toggle();
                let playing = self.state().is_playing();
                self.controls.show(now, playing);
            }
            UserGesture::ScrubBegin => self.controller.on_scrub_begin(),
            UserGesture::ScrubMove(value) => self.controller.on_scrub_move(value),
            UserGesture::ScrubEnd(value) => self.controller.on_scrub_end(value),
            UserGesture::SelectPhase { phase, start_frame } => {
                self.controller.on_select_phase(&phase, start_frame)
            }
            UserGesture::SelectShot(index) => {
                self.controller.on_select_shot(index);
                self.shot_selector_open = false;
            }
            UserGesture::ToggleShotSelector => {
                self.shot_selector_open = !self.shot_selector_open;
            }
            UserGesture::ToggleControls => {
                let playing = self.state().is_playing();
                self.controls.toggle(now, playing);
            }
        }
        self.sync_controls(was_playing, now);
    }

    /// Advance session timers. Returns true if the controls just hid.
    pub fn tick_timers(&mut self, now: Instant) -> bool {
        self.controls.tick(now)
    }

    /// End the session, releasing the media player.
    pub fn close(mut self) {
        self.release();
    }

    fn sync_controls(&mut self, was_playing: bool, now: Instant) {
        let playing = self.state().is_playing();
        if playing != was_playing {
            self.controls.on_playback_changed(now, playing);
        }
    }

    fn release(&mut self) {
        if !self.released {
            self.released = true;
            self.controller.media_mut().release();
            tracing::debug!("review session released media");
        }
    }
}

impl<M: MediaPlayer> Drop for ReviewSession<M> {
    fn drop(&mut self) {
        self.release();
    }
}
