use crate::lines::LineParams;
use crate::navigation::NavigationParams;
use serde::{Deserialize, Serialize};

/// Follower-wide parameters: the line pipeline and the state machine.
///
/// Deserializes from partial JSON; missing sections and fields keep their
/// defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowerParams {
    pub lines: LineParams,
    pub navigation: NavigationParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let params: FollowerParams =
            serde_json::from_str(r#"{"navigation":{"state_change_threshold":3}}"#).unwrap();
        assert_eq!(params.navigation.state_change_threshold, 3);
        assert_eq!(params.navigation.displacement_gain, 1.0);
        assert_eq!(params.lines, LineParams::default());
    }
}
