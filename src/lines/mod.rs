//! Line pipeline: raw Hough lines → merged edges → tape paths.
//!
//! Stages, in order:
//! - [`merge_lines`] collapses near-duplicate detections. Similarity is
//!   measured in image space (frame-border endpoints) so that lines reported
//!   on both sides of the `θ = 0 / π` seam still merge.
//! - [`extract_tape_boundaries`] samples boxes along each merged line against
//!   the edge map and keeps the stretches where the line really borders tape.
//! - [`parallel_centerlines`] pairs parallel merged lines (the two edges of
//!   one strip) and returns each pair's centerline.
//! - [`assemble_paths`] turns centerlines into [`TapePaths`]: one corridor,
//!   or the branches leaving an intersection that do not cross tape.
//!
//! Everything here is a pure function of the frame; the only cross-frame
//! state lives in [`crate::navigation::DirectionCalculator`].

mod boundary;
mod markers;
mod merge;
mod parallel;
mod params;
mod paths;

pub use boundary::{
    box_centers, extract_line_boundary, extract_tape_boundaries, TapeBoundary, TapeBoundarySet,
};
pub use markers::{clean_markers, fill_gaps, filter_small_runs, true_runs};
pub use merge::{median_line, merge_lines};
pub use parallel::{center_line, parallel_centerlines};
pub use params::LineParams;
pub use paths::{assemble_paths, TapePath, TapePaths};

use crate::geometry::{FrameSize, Line};
use crate::image::ImageU8;
use log::debug;

/// Intermediate products of the line pipeline for one frame.
#[derive(Clone, Debug, Default)]
pub struct LineStageOutput {
    pub merged: Vec<Line>,
    pub boundaries: TapeBoundarySet,
    pub centerlines: Vec<Line>,
    pub paths: TapePaths,
}

/// Run every line stage on one frame.
pub fn process_lines(raw: &[Line], edges: &ImageU8<'_>, params: &LineParams) -> LineStageOutput {
    let frame = FrameSize::new(edges.w, edges.h);
    let merged = merge_lines(
        raw,
        frame,
        params.endpoint_distance_px,
        params.angle_tolerance_rad,
    );
    let boundaries = extract_tape_boundaries(&merged, edges, params);
    let centerlines = parallel_centerlines(&merged, params.angle_tolerance_rad);
    let paths = assemble_paths(&centerlines, &boundaries.flattened(), frame);
    debug!(
        "process_lines: raw={} merged={} boundary_segments={} centerlines={} paths={}",
        raw.len(),
        merged.len(),
        boundaries.segment_count(),
        centerlines.len(),
        paths.len()
    );
    LineStageOutput {
        merged,
        boundaries,
        centerlines,
        paths,
    }
}
