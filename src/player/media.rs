//! The media playback collaborator.
//!
//! The core never waits on the player: commands are fire-and-forget and
//! results come back later as [`MediaEvent`]s. A newer seek always
//! supersedes one still in flight, so there is no cancel primitive.

/// Commands the core issues to the media player.
pub trait MediaPlayer {
    /// Start loading the clip at `source_uri`. Completion arrives as
    /// [`MediaEvent::Loaded`] or [`MediaEvent::LoadFailed`].
    fn load(&mut self, source_uri: &str);

    /// Reposition playback to `time_secs`.
    fn seek(&mut self, time_secs: f64);

    /// Pause or resume playback.
    fn set_paused(&mut self, paused: bool);

    /// Release listeners and decoder resources. Called once when the
    /// review session ends.
    fn release(&mut self) {}
}

/// Per-track metadata reported on load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoTrack {
    pub nominal_frame_rate: Option<f64>,
}

/// Metadata reported when a clip finishes loading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadMetadata {
    /// Clip length in seconds
    pub duration: f64,
    /// Container-level frame rate, if the platform exposes one
    pub frame_rate: Option<f64>,
    /// Video tracks, in container order
    pub video_tracks: Vec<VideoTrack>,
}

impl LoadMetadata {
    /// Metadata with only a duration and optional frame-rate hint.
    pub fn new(duration: f64, frame_rate: Option<f64>) -> Self {
        Self {
            duration,
            frame_rate,
            video_tracks: Vec::new(),
        }
    }
}

/// Events the media player emits back to the core.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// The clip loaded and its metadata is known
    Loaded(LoadMetadata),
    /// The clip could not be loaded
    LoadFailed { reason: String },
    /// Periodic playback position (display-refresh cadence)
    Progress { current_time: f64 },
    /// Playback reached the end of the clip
    Ended,
}

/// A command as observed by [`RecordingMedia`].
#[derive(Debug, Clone, PartialEq)]
pub enum MediaCommand {
    Load(String),
    Seek(f64),
    SetPaused(bool),
    Release,
}

/// Media player that only records the commands it receives.
#[derive(Debug, Default)]
pub struct RecordingMedia {
    pub commands: Vec<MediaCommand>,
}

impl RecordingMedia {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent seek target, if any seek was issued.
    pub fn last_seek(&self) -> Option<f64> {
        self.commands.iter().rev().find_map(|c| match c {
            MediaCommand::Seek(t) => Some(*t),
            _ => None,
        })
    }

    /// Most recent pause state requested, if any.
    pub fn last_paused(&self) -> Option<bool> {
        self.commands.iter().rev().find_map(|c| match c {
            MediaCommand::SetPaused(p) => Some(*p),
            _ => None,
        })
    }
}

impl MediaPlayer for RecordingMedia {
    fn load(&mut self, source_uri: &str) {
        self.commands.push(MediaCommand::Load(source_uri.to_string()));
    }

    fn seek(&mut self, time_secs: f64) {
        self.commands.push(MediaCommand::Seek(time_secs));
    }

    fn set_paused(&mut self, paused: bool) {
        self.commands.push(MediaCommand::SetPaused(paused));
    }

    fn release(&mut self) {
        self.commands.push(MediaCommand::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_media_tracks_latest_commands() {
        let mut media = RecordingMedia::new();
        media.load("file:///shot.mp4");
        media.seek(1.0);
        media.set_paused(false);
        media.seek(2.5);

        assert_eq!(media.commands.len(), 4);
        assert_eq!(media.last_seek(), Some(2.5));
        assert_eq!(media.last_paused(), Some(false));
    }

    #[test]
    fn recording_media_starts_empty() {
        let media = RecordingMedia::new();
        assert!(media.last_seek().is_none());
        assert!(media.last_paused().is_none());
    }
}
