//! Playback controller: the single source of truth for time, frame, and
//! play/pause/seek state of a review session.
//!
//! Every handler runs synchronously and returns immediately. Seeks and pause
//! changes are forwarded to the [`MediaPlayer`] as fire-and-forget commands;
//! their effects come back later as progress events.
//!
//! Before the media loads, conversions are undefined: the frame index stays
//! at 0 and gesture handlers are ignored. After a load failure every handler
//! is a no-op.

use std::sync::Arc;

use crate::annotations::FrameRecord;
use crate::config::PlaybackConfig;
use crate::player::clock::{resolve_fps, FrameClock};
use crate::player::error::SessionError;
use crate::player::media::{LoadMetadata, MediaPlayer};
use crate::player::state::{LoadStatus, PlaybackState, SelectionMode};
use crate::segment::{phase_at, Phase, Segmentation, Shot};

/// Frame span of the shot playback is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotSpan {
    pub start_frame: u32,
    pub end_frame: u32,
}

pub struct PlaybackController<M: MediaPlayer> {
    media: M,
    segmentation: Segmentation,
    clock: Option<FrameClock>,
    state: PlaybackState,
    config: PlaybackConfig,
}

impl<M: MediaPlayer> PlaybackController<M> {
    /// Create a controller for `frames`, waiting for the media to load.
    ///
    /// # Errors
    /// `SessionError::NoFrames` if `frames` is empty.
    pub fn new(
        media: M,
        frames: Arc<[FrameRecord]>,
        config: PlaybackConfig,
    ) -> Result<Self, SessionError> {
        if frames.is_empty() {
            return Err(SessionError::NoFrames);
        }
        Ok(Self {
            media,
            segmentation: Segmentation::new(frames),
            clock: None,
            state: PlaybackState::new(config.default_fps),
            config,
        })
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn clock(&self) -> Option<&FrameClock> {
        self.clock.as_ref()
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    /// All shots, ascending by id.
    pub fn shots(&self) -> &Arc<[Shot]> {
        self.segmentation.shots()
    }

    /// Phase intervals of the selected shot.
    pub fn phases(&mut self) -> Arc<[Phase]> {
        let index = self.selected_shot_position();
        self.segmentation.phases(index)
    }

    /// The annotation for the frame under the playhead, if any.
    pub fn current_frame_data(&self) -> Option<&FrameRecord> {
        self.segmentation.frame_at(self.state.current_frame_index)
    }

    /// Index into `shots()` actually in effect: the selected one if it exists,
    /// otherwise the first.
    fn selected_shot_position(&self) -> usize {
        if self.state.selected_shot_index < self.shots().len() {
            self.state.selected_shot_index
        } else {
            0
        }
    }

    /// Span of the selected shot.
    ///
    /// With no shots at all, the whole clip acts as one implicit shot.
    pub fn selected_shot_span(&self) -> ShotSpan {
        match self.segmentation.shot(self.selected_shot_position()) {
            Some(shot) => ShotSpan {
                start_frame: shot.start_frame,
                end_frame: shot.end_frame,
            },
            None => ShotSpan {
                start_frame: 0,
                end_frame: self.clock.map(|c| c.last_frame()).unwrap_or(0),
            },
        }
    }

    fn ready_clock(&self) -> Option<FrameClock> {
        match self.state.status {
            LoadStatus::Ready => self.clock,
            _ => None,
        }
    }

    fn set_paused(&mut self, paused: bool) {
        self.state.paused = paused;
        self.media.set_paused(paused);
    }

    /// Move the playhead to `frame` using the frame → time conversion.
    fn jump_to_frame(&mut self, clock: FrameClock, frame: u32) {
        let time = clock.clamp_time(clock.time_of_frame(frame));
        self.state.current_time = time;
        self.state.current_frame_index = clock.clamp_frame(frame);
        self.media.seek(time);
    }

    /// Media finished loading.
    ///
    /// Resolves the frame rate, parks the playhead paused at the selected
    /// shot's start. A non-positive or non-finite duration is treated as a
    /// load failure.
    pub fn on_media_loaded(&mut self, metadata: &LoadMetadata) {
        if let LoadStatus::Failed(reason) = &self.state.status {
            tracing::debug!(%reason, "ignoring load event after failure");
            return;
        }
        if !(metadata.duration.is_finite() && metadata.duration > 0.0) {
            self.on_media_load_failed(format!(
                "media reported an unplayable duration ({})",
                metadata.duration
            ));
            return;
        }

        let fps = resolve_fps(metadata, self.config.default_fps);
        let clock = FrameClock::new(metadata.duration, fps);
        self.clock = Some(clock);
        self.state.status = LoadStatus::Ready;
        self.state.duration = clock.duration();
        self.state.fps = fps;
        self.state.total_frames = clock.total_frames();

        let start = self.selected_shot_span().start_frame;
        let time = clock.clamp_time(start as f64 / fps);
        self.state.current_time = time;
        self.state.current_frame_index = clock.clamp_frame(start);
        self.media.seek(time);
        self.set_paused(true);

        tracing::info!(
            duration = clock.duration(),
            fps,
            total_frames = clock.total_frames(),
            start_frame = start,
            "media loaded"
        );
    }

    /// Media could not be loaded. Terminal for this session.
    pub fn on_media_load_failed(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        tracing::warn!(%reason, "media load failed");
        self.clock = None;
        self.state.status = LoadStatus::Failed(reason);
        self.state.paused = true;
        self.state.is_seeking = false;
    }

    /// Media reached the end of the clip.
    pub fn on_media_ended(&mut self) {
        let Some(clock) = self.ready_clock() else {
            return;
        };
        self.state.current_time = clock.duration();
        self.state.current_frame_index = clock.last_frame();
        self.set_paused(true);
        tracing::debug!("media ended");
    }

    /// Tap on the video: toggle play/pause, or replay the shot when paused
    /// at the end of the clip.
    pub fn on_tap_toggle(&mut self) {
        let Some(clock) = self.ready_clock() else {
            return;
        };

        if self.state.paused
            && self.state.current_time >= clock.duration() - self.config.end_epsilon_secs
        {
            let start = self.selected_shot_span().start_frame;
            tracing::debug!(start_frame = start, "replaying shot from start");
            self.jump_to_frame(clock, start);
            self.set_paused(false);
        } else {
            let paused = !self.state.paused;
            self.set_paused(paused);
        }
    }

    /// A scrub gesture started. Ends any manual phase selection.
    pub fn on_scrub_begin(&mut self) {
        if self.ready_clock().is_some() {
            self.state.is_seeking = true;
            self.state.selected_phase = None;
            self.state.selection_mode = SelectionMode::Automatic;
        }
    }

    /// The scrub handle moved to `value` seconds.
    ///
    /// Clears any phase selection and returns highlighting to automatic.
    pub fn on_scrub_move(&mut self, value: f64) {
        let Some(clock) = self.ready_clock() else {
            return;
        };
        self.state.is_seeking = true;
        let time = clock.clamp_time(value);
        self.state.current_time = time;
        self.state.current_frame_index = clock.frame_index(time);
        self.state.selected_phase = None;
        self.state.selection_mode = SelectionMode::Automatic;
        self.media.seek(time);
    }

    /// The scrub gesture ended at `value` seconds.
    pub fn on_scrub_end(&mut self, value: f64) {
        let Some(clock) = self.ready_clock() else {
            return;
        };
        self.state.is_seeking = false;
        let time = clock.clamp_time(value);
        self.state.current_time = time;
        self.state.current_frame_index = clock.frame_index(time);
        self.media.seek(time);
    }

    /// Periodic playback position from the media player.
    ///
    /// Discarded while scrubbing. Within `end_epsilon_secs` of the end the
    /// playhead is pinned to the end and playback pauses.
    pub fn on_progress_tick(&mut self, time: f64) {
        let Some(clock) = self.ready_clock() else {
            return;
        };
        if self.state.is_seeking {
            tracing::trace!(time, "progress discarded while seeking");
            return;
        }

        if time >= clock.duration() - self.config.end_epsilon_secs {
            if !self.state.paused {
                tracing::debug!(time, "reached end of clip, pausing");
            }
            self.state.current_time = clock.duration();
            self.state.current_frame_index = clock.last_frame();
            if !self.state.paused {
                self.set_paused(true);
            }
            return;
        }

        let time = clock.clamp_time(time);
        self.state.current_time = time;
        self.state.current_frame_index = clock.frame_index(time);

        if self.state.selected_phase.is_none() {
            let frame = self.state.current_frame_index;
            let phases = self.phases();
            if let Some(phase) = phase_at(&phases, frame) {
                self.state.selected_phase = Some(phase.phase.clone());
            }
        }
    }

    /// Explicit phase selection: pause and jump to the phase start.
    pub fn on_select_phase(&mut self, phase: &str, start_frame: u32) {
        let Some(clock) = self.ready_clock() else {
            return;
        };
        tracing::debug!(phase, start_frame, "phase selected");
        self.state.selected_phase = Some(phase.to_string());
        self.state.selection_mode = SelectionMode::Manual;
        self.set_paused(true);
        self.jump_to_frame(clock, start_frame);
    }

    /// Explicit shot selection: clear the phase, pause, and jump to the
    /// shot start.
    ///
    /// Before load only the selection changes; the load handler positions
    /// the playhead. Returns false (and changes nothing) if `index` names
    /// no shot.
    pub fn on_select_shot(&mut self, index: usize) -> bool {
        if self.state.status != LoadStatus::Loading && self.ready_clock().is_none() {
            return false;
        }
        let shot_count = self.shots().len();
        if index >= shot_count.max(1) {
            tracing::warn!(index, shot_count, "ignoring selection of unknown shot");
            return false;
        }

        tracing::debug!(index, "shot selected");
        self.state.selected_shot_index = index;
        self.state.selected_phase = None;
        self.state.selection_mode = SelectionMode::Manual;

        if let Some(clock) = self.ready_clock() {
            self.set_paused(true);
            let start = self.selected_shot_span().start_frame;
            self.jump_to_frame(clock, start);
        }
        true
    }
}
