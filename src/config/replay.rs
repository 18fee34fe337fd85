use crate::error::IoError;
use crate::follower::{FollowerParams, OwnedFrame};
use crate::geometry::Line;
use crate::image::io::{load_grayscale_image, read_json_file};
use crate::image::GrayImageU8;
use crate::navigation::PlanStep;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config of the `replay` tool.
#[derive(Debug, Deserialize)]
pub struct ReplayConfig {
    /// Recording to replay (JSON, see [`Recording`]).
    pub recording: PathBuf,
    #[serde(default)]
    pub params: FollowerParams,
    /// Plan installed before the first frame.
    #[serde(default)]
    pub plan: Option<Vec<PlanStep>>,
    pub output: ReplayOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct ReplayOutputConfig {
    pub report: PathBuf,
}

/// Recorded frame sequence.
#[derive(Debug, Deserialize)]
pub struct Recording {
    pub width: usize,
    pub height: usize,
    pub frames: Vec<RecordedFrame>,
}

/// One recorded frame: raw `[rho, theta]` lines, an optional edge map
/// (relative paths resolve against the recording's directory) and an
/// optional plan event delivered before the frame.
#[derive(Debug, Default, Deserialize)]
pub struct RecordedFrame {
    #[serde(default)]
    pub lines: Vec<[f32; 2]>,
    #[serde(default)]
    pub edges: Option<PathBuf>,
    #[serde(default)]
    pub plan: Option<Vec<PlanStep>>,
}

pub fn load_config(path: &Path) -> Result<ReplayConfig, IoError> {
    read_json_file(path)
}

/// Loads a recording and keeps its directory for resolving edge maps.
pub fn load_recording(path: &Path) -> Result<(Recording, PathBuf), IoError> {
    let recording: Recording = read_json_file(path)?;
    let base = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    Ok((recording, base))
}

impl Recording {
    /// Materializes a recorded frame with its edge map; frames without one get
    /// an empty map of the recording's size.
    pub fn load_frame(&self, frame: &RecordedFrame, base: &Path) -> Result<OwnedFrame, IoError> {
        let edges = match &frame.edges {
            Some(rel) => load_grayscale_image(&base.join(rel))?,
            None => GrayImageU8::blank(self.width, self.height),
        };
        Ok(OwnedFrame {
            lines: Line::from_hough(&frame.lines),
            edges,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{NodeId, TurnDirection};

    #[test]
    fn config_parses_with_defaults_and_plan() {
        let json = r#"{
            "recording": "run1/recording.json",
            "plan": [
                {"kind": "turn", "direction": "right", "node": 1},
                {"kind": "stop", "node": 2}
            ],
            "output": {"report": "out/report.json"}
        }"#;
        let cfg: ReplayConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.params, FollowerParams::default());
        let plan = cfg.plan.unwrap();
        assert_eq!(
            plan[0],
            PlanStep::Turn {
                direction: TurnDirection::Right,
                node: NodeId(1)
            }
        );
        assert!(plan[1].is_stop());
    }

    #[test]
    fn frames_without_edges_get_a_blank_map() {
        let recording: Recording = serde_json::from_str(
            r#"{"width": 64, "height": 48, "frames": [{"lines": [[32.0, 0.0]]}]}"#,
        )
        .unwrap();
        let frame = recording
            .load_frame(&recording.frames[0], Path::new(""))
            .unwrap();
        assert_eq!(frame.lines, vec![Line::new(32.0, 0.0)]);
        assert_eq!(frame.edges.width(), 64);
        assert_eq!(frame.as_input().edges.count_edges(0..64, 0..48), 0);
    }

    #[test]
    fn missing_config_reports_the_path() {
        let err = load_config(Path::new("/nonexistent/replay.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/replay.json"));
    }
}
