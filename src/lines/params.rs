use serde::{Deserialize, Serialize};

/// Knobs for the line pipeline (merging, tape sampling, pairing).
///
/// - Sampling works on square boxes of `box_size` pixels walked along each
///   merged line; a box counts as tape when it holds more than
///   `min_edge_pixels` edge pixels.
/// - `min_segment_boxes` and `min_gap_fill_boxes` are expressed in boxes,
///   not pixels.
/// - `angle_tolerance_rad` is shared by the merger (wrap detection) and the
///   parallel pair resolver (bucketing).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineParams {
    /// Side length (and step) of the sampling boxes in pixels.
    pub box_size: usize,
    /// A box is tape when its edge-pixel count exceeds this value.
    pub min_edge_pixels: usize,
    /// Shortest run of tape boxes kept as a boundary segment.
    pub min_segment_boxes: usize,
    /// Evidence (run + lookahead hits + 1) required before a gap is filled.
    pub min_gap_fill_boxes: usize,
    /// Maximum frame-border endpoint distance for two lines to merge.
    pub endpoint_distance_px: f32,
    /// Orientation tolerance for wrap detection and parallel bucketing.
    pub angle_tolerance_rad: f32,
}

impl Default for LineParams {
    fn default() -> Self {
        let box_size = 20;
        Self {
            box_size,
            min_edge_pixels: box_size,
            min_segment_boxes: 4,
            min_gap_fill_boxes: 4,
            endpoint_distance_px: 50.0,
            angle_tolerance_rad: 0.3,
        }
    }
}
