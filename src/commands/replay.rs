//! `replay` subcommand handler.
//!
//! Drives a review session against the simulated player, one progress tick
//! per configured interval, and prints each phase the playhead enters.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};

use shotsync::player::{LoadMetadata, LoadStatus, ReviewSession, SimulatedMedia, UserGesture};
use shotsync::report::{format_duration, format_frame_range, format_timestamp};
use shotsync::segment::phase_at;
use shotsync::{load_frames, Config};

/// Pump the simulated player once and route everything it emitted.
fn pump(session: &mut ReviewSession<SimulatedMedia>, step: f64, now: Instant) {
    let events = session.media_mut().advance(step);
    for event in events {
        session.handle_media_event(event, now);
    }
}

pub fn handle_replay(
    file: &Path,
    duration: f64,
    fps: Option<f64>,
    shot_index: usize,
    config: &Config,
) -> Result<()> {
    let frames = load_frames(file)
        .with_context(|| format!("Failed to load annotations from {}", file.display()))?;
    let media = SimulatedMedia::new(LoadMetadata::new(duration, fps));
    let uri = format!("sim://{}", file.display());
    let mut session = ReviewSession::open(media, &uri, frames, config)?;

    let shot_count = session.shots().len();
    if shot_index >= shot_count.max(1) {
        bail!(
            "Shot index {} is out of range ({} shots available)",
            shot_index,
            shot_count
        );
    }

    let started = Instant::now();
    pump(&mut session, 0.0, started);
    if let LoadStatus::Failed(reason) = &session.state().status {
        bail!("Simulated media failed to load: {}", reason);
    }
    if shot_index > 0 {
        session.handle_gesture(UserGesture::SelectShot(shot_index), started);
    }

    let span = session.controller().selected_shot_span();
    let label = session
        .shots()
        .get(shot_index)
        .map(|s| s.label.clone())
        .unwrap_or_else(|| "Whole clip".to_string());
    let state = session.state();
    println!(
        "Replaying {} ({}) at {:.3} fps, {} frames, {} long",
        label,
        format_frame_range(span.start_frame, span.end_frame),
        state.fps,
        state.total_frames,
        format_duration(state.duration)
    );

    session.handle_gesture(UserGesture::Tap, started);

    let step = config.playback.progress_interval_ms / 1000.0;
    let max_steps = (duration / step).ceil() as usize + 2;
    let mut elapsed = 0.0;
    let mut last_phase: Option<String> = None;

    for _ in 0..max_steps {
        elapsed += step;
        pump(&mut session, step, started + Duration::from_secs_f64(elapsed));

        let frame = session.state().current_frame_index;
        let phases = session.phases();
        let phase = phase_at(&phases, frame).map(|p| p.phase.clone());
        if phase.is_some() && phase != last_phase {
            println!(
                "{}  frame {:>5}  {}",
                format_timestamp(session.state().current_time),
                frame,
                phase.as_deref().unwrap_or_default()
            );
        }
        last_phase = phase;

        if session.state().paused {
            break;
        }
    }

    let state = session.state();
    if state.paused {
        println!(
            "{}  frame {:>5}  paused at end",
            format_timestamp(state.current_time),
            state.current_frame_index
        );
    }
    session.close();
    Ok(())
}
