//! Follower orchestrating the line pipeline and the navigator per frame.
//!
//! Modules
//! - [`params`] – configuration shared by the library and the replay tool.
//! - `pipeline` – the [`LineFollower`] entry point.
//! - `worker` – [`FrameWorker`], a single-slot worker thread around a
//!   follower.

pub mod params;
mod pipeline;
mod worker;

pub use params::FollowerParams;
pub use pipeline::{FrameInput, LineFollower};
pub use worker::{FrameWorker, OwnedFrame, PendingFrame};
