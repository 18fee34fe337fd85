//! Per-frame pipeline driving the follower end-to-end.
//!
//! Typical usage:
//! ```no_run
//! use tape_navigator::{FollowerParams, FrameInput, LineFollower};
//! use tape_navigator::geometry::Line;
//! use tape_navigator::image::ImageU8;
//!
//! # fn example(edges: ImageU8, lines: &[Line]) {
//! let mut follower = LineFollower::new(FollowerParams::default());
//! match follower.process(FrameInput { lines, edges }) {
//!     Ok(out) => println!("{} steer=({:.2}, {:.2})", out.state, out.steering.x, out.steering.y),
//!     Err(err) => eprintln!("frame failed: {err}"),
//! }
//! # }
//! ```
use super::params::FollowerParams;
use crate::diagnostics::{
    elapsed_ms, FrameMetrics, FrameReport, FrameTrace, InputDescriptor, TimingBreakdown,
};
use crate::error::Result;
use crate::geometry::Line;
use crate::image::ImageU8;
use crate::lines::{
    assemble_paths, extract_tape_boundaries, merge_lines, parallel_centerlines, process_lines,
};
use crate::navigation::{
    DirectionCalculator, NavigationOutput, NavigationState, NavigatorSnapshot, PlanStep,
};
use crate::types::SteeringResult;
use log::debug;
use std::time::Instant;

/// One camera frame as seen by the core: raw Hough lines plus the binary
/// edge map they were detected on.
#[derive(Clone, Debug)]
pub struct FrameInput<'a> {
    pub lines: &'a [Line],
    pub edges: ImageU8<'a>,
}

/// Line pipeline and navigation state machine behind a single entry point.
pub struct LineFollower {
    params: FollowerParams,
    navigator: DirectionCalculator,
}

impl LineFollower {
    pub fn new(params: FollowerParams) -> Self {
        let navigator = DirectionCalculator::new(params.navigation.clone());
        Self { params, navigator }
    }

    pub fn params(&self) -> &FollowerParams {
        &self.params
    }

    pub fn navigator(&self) -> &DirectionCalculator {
        &self.navigator
    }

    pub fn state(&self) -> NavigationState {
        self.navigator.state()
    }

    /// Replaces the turn plan; see [`DirectionCalculator::set_plan`].
    pub fn set_plan<I: IntoIterator<Item = PlanStep>>(&mut self, steps: I) {
        self.navigator.set_plan(steps);
    }

    pub fn snapshot(&self) -> NavigatorSnapshot {
        self.navigator.snapshot()
    }

    pub fn restore(&mut self, snapshot: NavigatorSnapshot) {
        self.navigator.restore(snapshot);
    }

    /// Process one frame and return the steering decision.
    pub fn process(&mut self, input: FrameInput<'_>) -> Result<SteeringResult> {
        let start = Instant::now();
        let frame = input.edges.frame_size();
        let stage = process_lines(input.lines, &input.edges, &self.params.lines);
        let nav = self.navigator.update(&stage.paths, frame)?;
        Ok(into_result(nav, elapsed_ms(start)))
    }

    /// Like [`process`](Self::process), additionally recording the frame in
    /// `metrics`.
    pub fn process_timed(
        &mut self,
        input: FrameInput<'_>,
        metrics: &mut FrameMetrics,
    ) -> Result<SteeringResult> {
        let result = self.process(input)?;
        metrics.record(result.latency_ms);
        Ok(result)
    }

    /// Process one frame and return the decision with a full trace.
    pub fn process_with_diagnostics(&mut self, input: FrameInput<'_>) -> Result<FrameReport> {
        let total_start = Instant::now();
        let frame = input.edges.frame_size();
        let params = &self.params.lines;
        let mut timings = TimingBreakdown::default();

        let merged = timings.measure("merge", || {
            merge_lines(
                input.lines,
                frame,
                params.endpoint_distance_px,
                params.angle_tolerance_rad,
            )
        });
        let boundaries = timings.measure("boundaries", || {
            extract_tape_boundaries(&merged, &input.edges, params)
        });
        let centerlines = timings.measure("centerlines", || {
            parallel_centerlines(&merged, params.angle_tolerance_rad)
        });
        let paths = timings.measure("paths", || {
            assemble_paths(&centerlines, &boundaries.flattened(), frame)
        });

        let state_before = self.navigator.state();
        let nav_start = Instant::now();
        let nav = self.navigator.update(&paths, frame)?;
        timings.record("navigate", elapsed_ms(nav_start));
        timings.total_ms = elapsed_ms(total_start);

        debug!(
            "LineFollower::process_with_diagnostics merged={} centerlines={} paths={} state={} total_ms={:.3}",
            merged.len(),
            centerlines.len(),
            paths.len(),
            nav.state,
            timings.total_ms
        );

        let result = into_result(nav, timings.total_ms);
        Ok(FrameReport {
            result,
            trace: FrameTrace {
                input: InputDescriptor {
                    width: frame.width,
                    height: frame.height,
                    raw_lines: input.lines.len(),
                },
                timings,
                merged,
                boundaries,
                centerlines,
                paths,
                state_before,
            },
        })
    }
}

fn into_result(nav: NavigationOutput, latency_ms: f64) -> SteeringResult {
    SteeringResult {
        steering: nav.steering,
        state: nav.state,
        node: nav.node,
        target: nav.target,
        latency_ms,
    }
}
