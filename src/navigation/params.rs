use serde::{Deserialize, Serialize};

/// Knobs for the navigation state machine and steering synthesis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationParams {
    /// Consecutive frames a candidate state must persist before adoption.
    pub state_change_threshold: u32,
    /// An intersection is "near" once its row passes this fraction of the
    /// frame height (rows grow towards the robot).
    pub intersection_react_fraction: f32,
    /// Gain `k` applied to the displacement term of the steering vector.
    pub displacement_gain: f32,
}

impl Default for NavigationParams {
    fn default() -> Self {
        Self {
            state_change_threshold: 10,
            intersection_react_fraction: 0.3,
            displacement_gain: 1.0,
        }
    }
}
