//! Diagnostics exposed by the follower and the replay tool.
//!
//! [`FrameReport`] is what [`LineFollower::process_with_diagnostics`]
//! returns: the steering decision plus a [`FrameTrace`] with every
//! intermediate product of the line pipeline and per-stage timings.
//! [`FrameMetrics`] aggregates latency and frame rate across frames.
//!
//! [`LineFollower::process_with_diagnostics`]: crate::LineFollower::process_with_diagnostics

pub mod frame;
pub mod metrics;
pub mod timing;

pub use frame::{FrameReport, FrameTrace, InputDescriptor};
pub use metrics::{FrameMetrics, MetricsSummary};
pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};
