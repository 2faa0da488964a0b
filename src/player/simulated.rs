//! Headless media player driven by an explicit clock.
//!
//! Used by the `replay` command to run a review session without a video
//! decoder. It honours the latest seek and emits progress the way a real
//! player does: one event per `advance` while playing, then `Ended`.

use crate::player::media::{LoadMetadata, MediaEvent, MediaPlayer};

#[derive(Debug)]
pub struct SimulatedMedia {
    metadata: LoadMetadata,
    position: f64,
    paused: bool,
    loaded: bool,
    released: bool,
    pending: Vec<MediaEvent>,
}

impl SimulatedMedia {
    /// A clip of `metadata.duration` seconds that starts paused at zero.
    pub fn new(metadata: LoadMetadata) -> Self {
        Self {
            metadata,
            position: 0.0,
            paused: true,
            loaded: false,
            released: false,
            pending: Vec::new(),
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advance the clock by `step` seconds and drain emitted events.
    pub fn advance(&mut self, step: f64) -> Vec<MediaEvent> {
        let mut events = std::mem::take(&mut self.pending);
        if !self.loaded || self.paused || self.released {
            return events;
        }

        let duration = self.metadata.duration;
        self.position = (self.position + step).min(duration);
        events.push(MediaEvent::Progress {
            current_time: self.position,
        });
        if self.position >= duration {
            self.paused = true;
            events.push(MediaEvent::Ended);
        }
        events
    }
}

impl MediaPlayer for SimulatedMedia {
    fn load(&mut self, source_uri: &str) {
        tracing::debug!(source_uri, "simulated load");
        if self.metadata.duration.is_finite() && self.metadata.duration > 0.0 {
            self.loaded = true;
            self.pending.push(MediaEvent::Loaded(self.metadata.clone()));
        } else {
            self.pending.push(MediaEvent::LoadFailed {
                reason: format!("unplayable duration {}", self.metadata.duration),
            });
        }
    }

    fn seek(&mut self, time_secs: f64) {
        self.position = time_secs.clamp(0.0, self.metadata.duration.max(0.0));
    }

    fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    fn release(&mut self) {
        self.released = true;
        self.pending.clear();
    }
}
