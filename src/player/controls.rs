//! Auto-hiding on-screen controls.
//!
//! An independent timer state machine: shown on tap, hidden after a delay
//! while playing, kept up while paused. It never touches playback state;
//! the session feeds it the play/pause flag and the current instant.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct ControlsVisibility {
    visible: bool,
    hide_at: Option<Instant>,
    auto_hide: Duration,
}

impl ControlsVisibility {
    /// Controls start visible with no pending hide.
    pub fn new(auto_hide: Duration) -> Self {
        Self {
            visible: true,
            hide_at: None,
            auto_hide,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Deadline of the pending hide, if armed.
    pub fn hide_at(&self) -> Option<Instant> {
        self.hide_at
    }

    /// Show the controls and re-arm the hide timer if playing.
    pub fn show(&mut self, now: Instant, playing: bool) {
        self.visible = true;
        self.arm(now, playing);
    }

    /// Hide the controls immediately.
    pub fn hide(&mut self) {
        self.visible = false;
        self.hide_at = None;
    }

    /// Flip visibility.
    pub fn toggle(&mut self, now: Instant, playing: bool) {
        if self.visible {
            self.hide();
        } else {
            self.show(now, playing);
        }
    }

    /// Play/pause changed: arm the timer when playing, cancel it when paused.
    pub fn on_playback_changed(&mut self, now: Instant, playing: bool) {
        if self.visible {
            self.arm(now, playing);
        }
    }

    /// Advance to `now`. Returns true if the controls were hidden by this call.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(deadline) if now >= deadline => {
                self.hide();
                true
            }
            _ => false,
        }
    }

    fn arm(&mut self, now: Instant, playing: bool) {
        self.hide_at = playing.then(|| now + self.auto_hide);
    }
}
