//! End-to-end review session tests through the public API

use std::time::Instant;

use shotsync::player::{
    LoadMetadata, LoadStatus, MediaEvent, RecordingMedia, ReviewSession, SelectionMode,
    UserGesture, DEFAULT_FPS,
};
use shotsync::{load_frames, Config};

use crate::helpers::fixture;

fn open_fixture() -> ReviewSession<RecordingMedia> {
    let frames = load_frames(fixture("two_shots.json")).expect("fixture loads");
    ReviewSession::open(
        RecordingMedia::new(),
        "file:///clips/two_shots.mp4",
        frames,
        &Config::default(),
    )
    .expect("session opens")
}

#[test]
fn default_rate_for_ten_second_clip() {
    let mut session = open_fixture();
    session.handle_media_event(MediaEvent::Loaded(LoadMetadata::new(10.0, None)), Instant::now());

    let state = session.state();
    assert_eq!(state.status, LoadStatus::Ready);
    assert_eq!(state.fps, DEFAULT_FPS);
    assert_eq!(state.total_frames, 299);
}

#[test]
fn end_of_clip_then_tap_replays_selected_shot() {
    let now = Instant::now();
    let mut session = open_fixture();
    session.handle_media_event(MediaEvent::Loaded(LoadMetadata::new(1.0, Some(30.0))), now);
    session.handle_gesture(UserGesture::Tap, now);

    session.handle_media_event(MediaEvent::Progress { current_time: 0.95 }, now);
    assert!(session.state().paused);
    assert_eq!(session.state().current_time, 1.0);

    session.handle_gesture(UserGesture::Tap, now);
    assert!(!session.state().paused);
    assert_eq!(session.state().current_frame_index, 2);
}

#[test]
fn selecting_second_shot_resets_phase_and_pauses() {
    let now = Instant::now();
    let mut session = open_fixture();
    session.handle_media_event(MediaEvent::Loaded(LoadMetadata::new(1.0, Some(30.0))), now);
    session.handle_gesture(UserGesture::Tap, now);
    session.handle_media_event(MediaEvent::Progress { current_time: 0.11 }, now);
    assert_eq!(session.state().selected_phase.as_deref(), Some("Loading"));

    session.handle_gesture(UserGesture::SelectShot(1), now);
    let start = session.shots()[1].start_frame;
    let state = session.state();
    assert_eq!(state.selected_phase, None);
    assert_eq!(state.current_frame_index, start);
    assert!(state.paused);
    assert_eq!(state.selection_mode, SelectionMode::Manual);
}

#[test]
fn progress_during_scrub_leaves_state_untouched() {
    let now = Instant::now();
    let mut session = open_fixture();
    session.handle_media_event(MediaEvent::Loaded(LoadMetadata::new(1.0, Some(30.0))), now);
    session.handle_gesture(UserGesture::ScrubBegin, now);
    session.handle_gesture(UserGesture::ScrubMove(0.5), now);

    let time = session.state().current_time;
    let frame = session.state().current_frame_index;
    session.handle_media_event(MediaEvent::Progress { current_time: 0.2 }, now);

    assert_eq!(session.state().current_time, time);
    assert_eq!(session.state().current_frame_index, frame);
}
