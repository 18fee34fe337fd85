use super::state::NavigationState;
use serde::{Deserialize, Serialize};

/// Hysteresis on state changes.
///
/// A candidate becomes the stable state only after it has been proposed on
/// `threshold` consecutive frames. Any other proposal, the stable state
/// included, restarts the run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateDebouncer {
    threshold: u32,
    stable: NavigationState,
    last_candidate: NavigationState,
    count: u32,
}

impl StateDebouncer {
    pub fn new(initial: NavigationState, threshold: u32) -> Self {
        let threshold = threshold.max(1);
        Self {
            threshold,
            stable: initial,
            last_candidate: initial,
            count: threshold,
        }
    }

    pub fn stable(&self) -> NavigationState {
        self.stable
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Feeds one frame's candidate. Returns `(from, to)` when the stable
    /// state changes.
    pub fn observe(
        &mut self,
        candidate: NavigationState,
    ) -> Option<(NavigationState, NavigationState)> {
        if candidate == self.last_candidate {
            self.count = self.count.saturating_add(1);
        } else {
            self.last_candidate = candidate;
            self.count = 1;
        }
        if candidate != self.stable && self.count >= self.threshold {
            let from = self.stable;
            self.stable = candidate;
            return Some((from, candidate));
        }
        None
    }

    /// Adopts `state` immediately, bypassing hysteresis.
    pub fn force(&mut self, state: NavigationState) {
        self.stable = state;
        self.last_candidate = state;
        self.count = self.threshold;
    }
}
