//! `shots` and `phases` subcommand handlers.

use std::path::Path;

use anyhow::{bail, Context, Result};

use shotsync::load_frames;
use shotsync::report::{render_phase_list, render_shot_list};
use shotsync::segment::{PhaseBoundaryConvention, Segmentation};

fn load_segmentation(file: &Path) -> Result<Segmentation> {
    let frames = load_frames(file)
        .with_context(|| format!("Failed to load annotations from {}", file.display()))?;
    Ok(Segmentation::with_convention(frames, PhaseBoundaryConvention::default()))
}

/// List all shots in the annotation file.
pub fn handle_shots(file: &Path) -> Result<()> {
    let segmentation = load_segmentation(file)?;
    print!("{}", render_shot_list(segmentation.shots()));
    Ok(())
}

/// List the phases of the shot at `shot_index`.
pub fn handle_phases(file: &Path, shot_index: usize) -> Result<()> {
    let mut segmentation = load_segmentation(file)?;
    let shot_count = segmentation.shots().len();
    let Some(shot) = segmentation.shot(shot_index).cloned() else {
        if shot_count == 0 {
            bail!("{} contains no shots", file.display());
        }
        bail!(
            "Shot index {} is out of range ({} shots available)",
            shot_index,
            shot_count
        );
    };
    let phases = segmentation.phases(shot_index);
    print!("{}", render_phase_list(&shot, &phases));
    Ok(())
}
