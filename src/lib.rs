#![doc = include_str!("../README.md")]

// Public modules
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod follower;
pub mod image;
pub mod types;

// Building blocks – public for tools and tests, driven by `follower`.
pub mod angle;
pub mod geometry;
pub mod lines;
pub mod navigation;

// --- High-level re-exports -------------------------------------------------

// Main entry points: follower + results.
pub use crate::follower::{FollowerParams, FrameInput, FrameWorker, LineFollower, OwnedFrame};
pub use crate::types::{SteeringResult, SteeringVector, WheelIntensities};

// Diagnostics returned by the follower.
pub use crate::diagnostics::{FrameMetrics, FrameReport, FrameTrace};

pub use crate::error::{IoError, NavError};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use tape_navigator::prelude::*;
///
/// # fn main() {
/// let (w, h) = (640usize, 480usize);
/// let edges = vec![0u8; w * h];
/// let lines = [Line::new(300.0, 0.0), Line::new(340.0, 0.0)];
///
/// let mut follower = LineFollower::new(FollowerParams::default());
/// let input = FrameInput {
///     lines: &lines,
///     edges: ImageU8 { w, h, stride: w, data: &edges },
/// };
/// if let Ok(out) = follower.process(input) {
///     println!("{} steer=({:.2}, {:.2})", out.state, out.steering.x, out.steering.y);
/// }
/// # }
/// ```
pub mod prelude {
    pub use crate::geometry::Line;
    pub use crate::image::ImageU8;
    pub use crate::navigation::{NavigationState, NodeId, PlanStep, TurnDirection};
    pub use crate::{FollowerParams, FrameInput, LineFollower, SteeringResult, SteeringVector};
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    // Stage runners.
    pub use crate::lines::{
        assemble_paths, extract_tape_boundaries, merge_lines, parallel_centerlines,
        process_lines, LineStageOutput,
    };
    pub use crate::navigation::{candidate_state, steering_vector, DirectionCalculator};

    // Structured diagnostics types.
    pub use crate::diagnostics::{InputDescriptor, MetricsSummary, StageTiming, TimingBreakdown};
}
