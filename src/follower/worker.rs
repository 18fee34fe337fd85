//! Frame worker: owns a [`LineFollower`] on its own thread.
//!
//! The job queue holds at most one frame; a producer submitting faster than
//! the worker processes blocks on [`FrameWorker::submit`] instead of dropping
//! frames. Plan and snapshot commands travel through the same queue, so they
//! always apply between two frames.

use super::pipeline::{FrameInput, LineFollower};
use crate::diagnostics::{FrameMetrics, MetricsSummary};
use crate::error::{NavError, Result};
use crate::geometry::Line;
use crate::image::GrayImageU8;
use crate::navigation::{NavigatorSnapshot, PlanStep};
use crate::types::SteeringResult;
use log::{debug, info};
use std::sync::mpsc::{self, Receiver, Sender, SyncSender};
use std::thread::{self, JoinHandle};

/// Owned frame that can be moved to the worker thread.
#[derive(Clone, Debug)]
pub struct OwnedFrame {
    pub lines: Vec<Line>,
    pub edges: GrayImageU8,
}

impl OwnedFrame {
    pub fn as_input(&self) -> FrameInput<'_> {
        FrameInput {
            lines: &self.lines,
            edges: self.edges.as_view(),
        }
    }
}

enum Command {
    Frame {
        frame: OwnedFrame,
        reply: Sender<Result<SteeringResult>>,
    },
    SetPlan(Vec<PlanStep>),
    Snapshot(Sender<NavigatorSnapshot>),
    Restore(NavigatorSnapshot),
    Metrics(Sender<MetricsSummary>),
}

/// Result slot of a submitted frame.
pub struct PendingFrame {
    reply: Receiver<Result<SteeringResult>>,
}

impl PendingFrame {
    /// Blocks until the worker has processed the frame.
    pub fn wait(self) -> Result<SteeringResult> {
        self.reply.recv().map_err(|_| NavError::WorkerDisconnected)?
    }
}

pub struct FrameWorker {
    jobs: SyncSender<Command>,
    handle: JoinHandle<LineFollower>,
}

impl FrameWorker {
    /// Moves `follower` onto a new worker thread.
    pub fn spawn(follower: LineFollower) -> Result<Self> {
        let (jobs, queue) = mpsc::sync_channel::<Command>(1);
        let handle = thread::Builder::new()
            .name("frame-worker".into())
            .spawn(move || run_worker(follower, queue))
            .map_err(|err| NavError::WorkerSpawn {
                reason: err.to_string(),
            })?;
        Ok(Self { jobs, handle })
    }

    /// Queues a frame, blocking while another frame is waiting.
    pub fn submit(&self, frame: OwnedFrame) -> Result<PendingFrame> {
        let (reply, rx) = mpsc::channel();
        self.send(Command::Frame { frame, reply })?;
        Ok(PendingFrame { reply: rx })
    }

    /// Submits a frame and waits for its result.
    pub fn process(&self, frame: OwnedFrame) -> Result<SteeringResult> {
        self.submit(frame)?.wait()
    }

    /// Replaces the plan once the frames queued before this call are done.
    pub fn set_plan(&self, steps: Vec<PlanStep>) -> Result<()> {
        self.send(Command::SetPlan(steps))
    }

    pub fn snapshot(&self) -> Result<NavigatorSnapshot> {
        let (reply, rx) = mpsc::channel();
        self.send(Command::Snapshot(reply))?;
        rx.recv().map_err(|_| NavError::WorkerDisconnected)
    }

    pub fn restore(&self, snapshot: NavigatorSnapshot) -> Result<()> {
        self.send(Command::Restore(snapshot))
    }

    pub fn metrics(&self) -> Result<MetricsSummary> {
        let (reply, rx) = mpsc::channel();
        self.send(Command::Metrics(reply))?;
        rx.recv().map_err(|_| NavError::WorkerDisconnected)
    }

    /// Drains the queue, stops the thread and hands the follower back.
    pub fn shutdown(self) -> Result<LineFollower> {
        let FrameWorker { jobs, handle } = self;
        drop(jobs);
        handle.join().map_err(|_| NavError::WorkerDisconnected)
    }

    fn send(&self, command: Command) -> Result<()> {
        self.jobs
            .send(command)
            .map_err(|_| NavError::WorkerDisconnected)
    }
}

fn run_worker(mut follower: LineFollower, queue: Receiver<Command>) -> LineFollower {
    info!("frame worker started");
    let mut metrics = FrameMetrics::new();
    for command in queue {
        match command {
            Command::Frame { frame, reply } => {
                let result = follower.process_timed(frame.as_input(), &mut metrics);
                // The submitter may have dropped its pending slot.
                let _ = reply.send(result);
            }
            Command::SetPlan(steps) => {
                debug!("frame worker: plan replaced ({} steps)", steps.len());
                follower.set_plan(steps);
            }
            Command::Snapshot(reply) => {
                let _ = reply.send(follower.snapshot());
            }
            Command::Restore(snapshot) => follower.restore(snapshot),
            Command::Metrics(reply) => {
                let _ = reply.send(metrics.summary());
            }
        }
    }
    info!("frame worker stopped after {} frames", metrics.frames());
    follower
}
