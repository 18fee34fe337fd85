use serde::Serialize;
use std::env;
use std::path::Path;
use tape_navigator::config::replay::{self, load_recording};
use tape_navigator::diagnostics::{FrameMetrics, MetricsSummary};
use tape_navigator::image::io::write_json_file;
use tape_navigator::navigation::{NavigationState, NodeId};
use tape_navigator::{LineFollower, SteeringVector, WheelIntensities};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = replay::load_config(Path::new(&config_path)).map_err(|e| e.to_string())?;
    let (recording, base) = load_recording(&config.recording).map_err(|e| e.to_string())?;

    let mut follower = LineFollower::new(config.params.clone());
    if let Some(plan) = config.plan.clone() {
        follower.set_plan(plan);
    }

    let mut metrics = FrameMetrics::new();
    let mut frames = Vec::with_capacity(recording.frames.len());
    for (index, recorded) in recording.frames.iter().enumerate() {
        if let Some(plan) = recorded.plan.clone() {
            follower.set_plan(plan);
        }
        let frame = recording
            .load_frame(recorded, &base)
            .map_err(|e| e.to_string())?;
        let entry = match follower.process_timed(frame.as_input(), &mut metrics) {
            Ok(res) => ReplayFrame {
                index,
                state: res.state,
                steering: res.steering,
                wheels: res.steering.wheel_intensities(),
                node: res.node,
                error: None,
            },
            Err(err) => ReplayFrame {
                index,
                state: follower.state(),
                steering: SteeringVector::ZERO,
                wheels: WheelIntensities::default(),
                node: None,
                error: Some(err.to_string()),
            },
        };
        frames.push(entry);
    }

    let report = ReplayReport {
        metrics: metrics.summary(),
        frames,
    };
    write_json_file(&config.output.report, &report).map_err(|e| e.to_string())?;

    let errors = report.frames.iter().filter(|f| f.error.is_some()).count();
    println!(
        "Replayed {} frames ({} errors, mean {:.3} ms/frame) -> {}",
        report.metrics.frames,
        errors,
        report.metrics.mean_latency_ms,
        config.output.report.display()
    );
    Ok(())
}

fn usage() -> String {
    "Usage: replay <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplayReport {
    metrics: MetricsSummary,
    frames: Vec<ReplayFrame>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplayFrame {
    index: usize,
    state: NavigationState,
    steering: SteeringVector,
    wheels: WheelIntensities,
    #[serde(skip_serializing_if = "Option::is_none")]
    node: Option<NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}
