use crate::geometry::Vector2D;
use crate::lines::TapePath;
use crate::navigation::{NavigationState, NodeId};
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_1_SQRT_2;

/// Steering command in the robot frame (x to the right, y forward).
///
/// Unit length while a target is tracked, zero when there is nothing to
/// follow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SteeringVector {
    pub x: f32,
    pub y: f32,
}

/// Signed drive intensities in [-1, 1]; the sign selects the wheel's
/// rotation direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct WheelIntensities {
    pub left: f32,
    pub right: f32,
}

impl SteeringVector {
    pub const ZERO: SteeringVector = SteeringVector { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn from_vector(v: &Vector2D) -> Self {
        Self::new(v.x, v.y)
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Differential-drive mapping: the vector rotated by 45° so that straight
    /// ahead drives both wheels equally and a pure sideways vector spins the
    /// robot in place.
    pub fn wheel_intensities(&self) -> WheelIntensities {
        WheelIntensities {
            left: (self.y + self.x) * FRAC_1_SQRT_2,
            right: (self.y - self.x) * FRAC_1_SQRT_2,
        }
    }
}

/// Everything the follower decided for one frame.
#[derive(Clone, Debug, Serialize)]
pub struct SteeringResult {
    pub steering: SteeringVector,
    pub state: NavigationState,
    /// Node id of the plan step consumed on this frame, if a turn started.
    pub node: Option<NodeId>,
    pub target: Option<TapePath>,
    pub latency_ms: f64,
}
