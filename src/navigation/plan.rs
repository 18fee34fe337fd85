use crate::angle::direction_difference;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use std::fmt;

/// Turn instruction vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnDirection {
    Left,
    Right,
    Straight,
    Back,
}

/// 90°-wide angular window of image-space path headings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sector {
    pub center: f32,
    pub half_width: f32,
}

impl Sector {
    /// Boundaries are inclusive; a heading on the seam belongs to both
    /// neighbours.
    pub fn contains(&self, heading: f32) -> bool {
        direction_difference(heading, self.center) <= self.half_width + 1e-6
    }

    pub fn offset(&self, heading: f32) -> f32 {
        direction_difference(heading, self.center)
    }
}

impl TurnDirection {
    pub const ALL: [TurnDirection; 4] = [
        TurnDirection::Back,
        TurnDirection::Right,
        TurnDirection::Straight,
        TurnDirection::Left,
    ];

    /// Sector of `atan2(dy, dx)` headings in image coordinates (y down):
    /// straight ahead points up the image, back points towards the robot.
    pub fn sector(&self) -> Sector {
        let center = match self {
            TurnDirection::Back => FRAC_PI_2,
            TurnDirection::Right => 0.0,
            TurnDirection::Straight => -FRAC_PI_2,
            TurnDirection::Left => PI,
        };
        Sector {
            center,
            half_width: FRAC_PI_4,
        }
    }

    /// Classifies a heading; seam headings go to the first matching entry of
    /// [`TurnDirection::ALL`].
    pub fn of_heading(heading: f32) -> TurnDirection {
        Self::ALL
            .into_iter()
            .find(|d| d.sector().contains(heading))
            .unwrap_or(TurnDirection::Left)
    }
}

impl fmt::Display for TurnDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TurnDirection::Left => "left",
            TurnDirection::Right => "right",
            TurnDirection::Straight => "straight",
            TurnDirection::Back => "back",
        };
        f.write_str(name)
    }
}

/// Opaque node identifier from the planner, only echoed back for telemetry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PlanStep {
    Turn { direction: TurnDirection, node: NodeId },
    Stop { node: NodeId },
}

impl PlanStep {
    pub fn node(&self) -> NodeId {
        match self {
            PlanStep::Turn { node, .. } | PlanStep::Stop { node } => *node,
        }
    }

    pub fn is_stop(&self) -> bool {
        matches!(self, PlanStep::Stop { .. })
    }
}

/// FIFO of plan steps, drained one per initiated turn.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathPlan {
    steps: VecDeque<PlanStep>,
}

impl PathPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step: PlanStep) {
        self.steps.push_back(step);
    }

    pub fn pop(&mut self) -> Option<PlanStep> {
        self.steps.pop_front()
    }

    pub fn peek(&self) -> Option<&PlanStep> {
        self.steps.front()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Nothing left to drive to: empty, or the next step is a stop marker.
    pub fn is_exhausted(&self) -> bool {
        self.peek().map_or(true, PlanStep::is_stop)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlanStep> {
        self.steps.iter()
    }
}

impl FromIterator<PlanStep> for PathPlan {
    fn from_iter<I: IntoIterator<Item = PlanStep>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}
