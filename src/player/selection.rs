//! Derived highlighting: which shot and phase the presentation shows as
//! active.
//!
//! Pure function of the playback state and the precomputed shot/phase
//! lists. An explicit shot or phase selection pins the highlight until the
//! next scrub returns it to [`SelectionMode::Automatic`].

use crate::player::state::{PlaybackState, SelectionMode};
use crate::segment::{phase_at, Phase, Shot};

/// The shot and phase to highlight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSelection {
    /// Index into the shot list, `None` when there are no shots
    pub shot_index: Option<usize>,
    /// Highlighted phase name
    pub phase: Option<String>,
    pub mode: SelectionMode,
}

/// Derive the active shot and phase.
///
/// # Arguments
/// * `state` - Current playback state
/// * `shots` - All shots, ascending by id
/// * `phases` - Phase intervals of the selected shot
pub fn active_selection(
    state: &PlaybackState,
    shots: &[Shot],
    phases: &[Phase],
) -> ActiveSelection {
    let selected_shot = if shots.is_empty() {
        None
    } else if state.selected_shot_index < shots.len() {
        Some(state.selected_shot_index)
    } else {
        Some(0)
    };

    match state.selection_mode {
        SelectionMode::Manual => ActiveSelection {
            shot_index: selected_shot,
            phase: state.selected_phase.clone(),
            mode: SelectionMode::Manual,
        },
        SelectionMode::Automatic => {
            let frame = state.current_frame_index;
            let shot_index = shots
                .iter()
                .position(|s| s.contains(frame))
                .or(selected_shot);
            // `phases` belong to the selected shot only.
            let phase = if shot_index == selected_shot {
                phase_at(phases, frame).map(|p| p.phase.clone())
            } else {
                None
            };
            ActiveSelection {
                shot_index,
                phase,
                mode: SelectionMode::Automatic,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::state::LoadStatus;
    use crate::segment::ShotOutcome;

    fn shot(id: i64, start: u32, end: u32) -> Shot {
        Shot {
            id,
            start_frame: start,
            end_frame: end,
            result: ShotOutcome::Unknown,
            label: format!("Shot {}", id),
        }
    }

    fn phase(name: &str, start: u32, end: u32) -> Phase {
        Phase {
            phase: name.to_string(),
            start_frame: start,
            end_frame: end,
        }
    }

    fn state_at(frame: u32) -> PlaybackState {
        let mut state = PlaybackState::new(30.0);
        state.status = LoadStatus::Ready;
        state.current_frame_index = frame;
        state
    }

    #[test]
    fn automatic_mode_follows_the_playhead() {
        let shots = vec![shot(0, 10, 40), shot(1, 60, 90)];
        let phases = vec![phase("Loading", 12, 20), phase("Release", 21, 30)];

        let active = active_selection(&state_at(25), &shots, &phases);
        assert_eq!(active.shot_index, Some(0));
        assert_eq!(active.phase.as_deref(), Some("Release"));
        assert_eq!(active.mode, SelectionMode::Automatic);

        let active = active_selection(&state_at(70), &shots, &phases);
        assert_eq!(active.shot_index, Some(1));
        assert_eq!(active.phase, None);
    }

    #[test]
    fn automatic_mode_skips_phases_of_another_shot() {
        let shots = vec![shot(0, 10, 40), shot(1, 60, 90)];
        // Overlaps shot 1 but belongs to the selected shot 0.
        let phases = vec![phase("Release", 30, 70)];

        let active = active_selection(&state_at(65), &shots, &phases);
        assert_eq!(active.shot_index, Some(1));
        assert_eq!(active.phase, None);

        let active = active_selection(&state_at(35), &shots, &phases);
        assert_eq!(active.phase.as_deref(), Some("Release"));
    }

    #[test]
    fn automatic_mode_outside_any_shot_keeps_selected_shot() {
        let shots = vec![shot(0, 10, 40), shot(1, 60, 90)];
        let mut state = state_at(50);
        state.selected_shot_index = 1;

        let active = active_selection(&state, &shots, &[]);
        assert_eq!(active.shot_index, Some(1));
    }

    #[test]
    fn manual_mode_ignores_the_playhead() {
        let shots = vec![shot(0, 10, 40), shot(1, 60, 90)];
        let phases = vec![phase("Loading", 12, 20)];
        let mut state = state_at(15);
        state.selection_mode = SelectionMode::Manual;
        state.selected_shot_index = 1;
        state.selected_phase = Some("Release".into());

        let active = active_selection(&state, &shots, &phases);
        assert_eq!(active.shot_index, Some(1));
        assert_eq!(active.phase.as_deref(), Some("Release"));
        assert_eq!(active.mode, SelectionMode::Manual);
    }

    #[test]
    fn no_shots_has_no_active_shot() {
        let active = active_selection(&state_at(3), &[], &[]);
        assert_eq!(active.shot_index, None);
        assert_eq!(active.phase, None);
    }
}
