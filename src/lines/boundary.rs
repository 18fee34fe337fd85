use super::markers::{clean_markers, true_runs};
use super::params::LineParams;
use crate::geometry::{Line, LineSegment, PixelPoint};
use crate::image::ImageU8;
use serde::Serialize;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Portions of one merged line that actually lie on tape.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TapeBoundary {
    pub line: Line,
    pub segments: Vec<LineSegment>,
}

/// Boundary segments for every merged line of a frame.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct TapeBoundarySet {
    pub boundaries: Vec<TapeBoundary>,
}

impl TapeBoundarySet {
    pub fn segments_for(&self, line: &Line) -> Option<&[LineSegment]> {
        self.boundaries
            .iter()
            .find(|b| b.line == *line)
            .map(|b| b.segments.as_slice())
    }

    /// All boundary segments regardless of the line they came from.
    pub fn flattened(&self) -> Vec<LineSegment> {
        self.boundaries
            .iter()
            .flat_map(|b| b.segments.iter().copied())
            .collect()
    }

    pub fn segment_count(&self) -> usize {
        self.boundaries.iter().map(|b| b.segments.len()).sum()
    }
}

/// Sample every merged line against the edge map.
pub fn extract_tape_boundaries(
    merged: &[Line],
    edges: &ImageU8<'_>,
    params: &LineParams,
) -> TapeBoundarySet {
    #[cfg(feature = "parallel")]
    let boundaries = merged
        .par_iter()
        .map(|line| extract_line_boundary(line, edges, params))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let boundaries = merged
        .iter()
        .map(|line| extract_line_boundary(line, edges, params))
        .collect();
    TapeBoundarySet { boundaries }
}

/// Walk boxes along `line`, mark the ones dense in edge pixels, clean the
/// markers and turn each surviving run into a segment between the first and
/// last box centers of the run.
pub fn extract_line_boundary(line: &Line, edges: &ImageU8<'_>, params: &LineParams) -> TapeBoundary {
    let centers = box_centers(line, edges.w, edges.h, params.box_size);
    let markers: Vec<bool> = centers
        .iter()
        .map(|&c| edge_pixels_in_box(edges, c, params.box_size) > params.min_edge_pixels)
        .collect();
    let cleaned = clean_markers(
        &markers,
        params.min_gap_fill_boxes,
        params.min_segment_boxes,
    );
    let segments = true_runs(&cleaned)
        .into_iter()
        .map(|run| LineSegment::new(centers[*run.start()], centers[*run.end()]))
        .collect();
    TapeBoundary {
        line: *line,
        segments,
    }
}

/// Box centers spaced `box_size` apart along the axis the line is closer to,
/// keeping only centers inside the image.
pub fn box_centers(line: &Line, width: usize, height: usize, box_size: usize) -> Vec<PixelPoint> {
    if box_size == 0 {
        return Vec::new();
    }
    let along_x = line.is_more_horizontal();
    let count = if along_x { width / box_size } else { height / box_size };
    let mut centers = Vec::with_capacity(count);
    for i in 0..count {
        let step = (i * box_size) as f32;
        let point = if along_x {
            line.y_at(step).map(|y| (step, y))
        } else {
            line.x_at(step).map(|x| (x, step))
        };
        let Some((x, y)) = point else {
            continue;
        };
        if !x.is_finite() || !y.is_finite() {
            continue;
        }
        let p = PixelPoint::new(x.round() as i32, y.round() as i32);
        if p.x >= 0 && p.y >= 0 && (p.x as usize) < width && (p.y as usize) < height {
            centers.push(p);
        }
    }
    centers
}

fn edge_pixels_in_box(edges: &ImageU8<'_>, center: PixelPoint, box_size: usize) -> usize {
    let half = (box_size / 2) as i32;
    edges.count_edges(
        center.x - half..center.x + half,
        center.y - half..center.y + half,
    )
}
