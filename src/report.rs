//! Plain-text formatting for shot/phase listings and replay output.

use crate::segment::{Phase, Shot};

/// Format seconds as `MM:SS`.
pub fn format_duration(seconds: f64) -> String {
    let total_secs = seconds.max(0.0) as u64;
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Format seconds as `MM:SS.mmm`.
pub fn format_timestamp(seconds: f64) -> String {
    let millis = (seconds.max(0.0) * 1000.0).round() as u64;
    format!(
        "{:02}:{:02}.{:03}",
        millis / 60_000,
        (millis / 1000) % 60,
        millis % 1000
    )
}

/// One-based, inclusive frame range as shown to users.
pub fn format_frame_range(start_frame: u32, end_frame: u32) -> String {
    format!("Frames {}-{}", start_frame + 1, end_frame + 1)
}

/// One line per shot: label, frame range, outcome.
pub fn render_shot_list(shots: &[Shot]) -> String {
    if shots.is_empty() {
        return "No shots found; the whole clip is reviewed as one shot.\n".to_string();
    }
    shots
        .iter()
        .map(|shot| {
            format!(
                "{}: {} ({})\n",
                shot.label,
                format_frame_range(shot.start_frame, shot.end_frame),
                shot.result.as_str()
            )
        })
        .collect()
}

/// Heading for the shot followed by one indented line per phase.
pub fn render_phase_list(shot: &Shot, phases: &[Phase]) -> String {
    let mut out = format!("{} phases:\n", shot.label);
    if phases.is_empty() {
        out.push_str("  (none)\n");
    }
    for phase in phases {
        out.push_str(&format!(
            "  {}: {}\n",
            phase.phase,
            format_frame_range(phase.start_frame, phase.end_frame)
        ));
    }
    out
}
