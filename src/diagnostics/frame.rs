use super::TimingBreakdown;
use crate::geometry::Line;
use crate::lines::{TapeBoundarySet, TapePaths};
use crate::navigation::NavigationState;
use crate::types::SteeringResult;
use serde::Serialize;

/// Result of [`LineFollower::process_with_diagnostics`](crate::LineFollower).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameReport {
    pub result: SteeringResult,
    pub trace: FrameTrace,
}

/// Intermediate products and timings of one frame.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub merged: Vec<Line>,
    pub boundaries: TapeBoundarySet,
    pub centerlines: Vec<Line>,
    pub paths: TapePaths,
    pub state_before: NavigationState,
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub raw_lines: usize,
}
