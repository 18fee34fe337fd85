use serde::{Deserialize, Serialize};
use std::fmt;

/// Navigation modes of the follower.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavigationState {
    FollowingLine,
    SeeingIntersection,
    Turning,
    Stopped,
    Turning180,
    Lost,
}

impl NavigationState {
    pub fn label(&self) -> &'static str {
        match self {
            NavigationState::FollowingLine => "Following line",
            NavigationState::SeeingIntersection => "Intersection noticed, following line",
            NavigationState::Turning => "Turning",
            NavigationState::Stopped => "Stopped",
            NavigationState::Turning180 => "Turning 180",
            NavigationState::Lost => "Line lost",
        }
    }
}

impl fmt::Display for NavigationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the state machine sees on one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameObservation {
    /// Number of tape paths visible.
    pub paths: usize,
    /// Whether the intersection point (if any) is past the reaction row.
    pub intersection_near: bool,
    /// The about-face latch set by a fresh plan.
    pub keep_turning: bool,
    /// Plan is empty or its next step is a stop marker.
    pub plan_exhausted: bool,
}

/// Effect of a candidate on the pending-turn flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingTurn {
    Unchanged,
    Set,
    Clear,
}

/// Candidate state for one frame plus its side effects on the flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub state: NavigationState,
    pub pending: PendingTurn,
    /// Votes to release the about-face latch; the calculator debounces it.
    pub release_latch: bool,
}

impl Candidate {
    fn plain(state: NavigationState) -> Self {
        Self {
            state,
            pending: PendingTurn::Unchanged,
            release_latch: false,
        }
    }
}

/// Transition table: the state the frame votes for given the current
/// stable state. Adoption is left to the debouncer.
pub fn candidate_state(current: NavigationState, obs: &FrameObservation) -> Candidate {
    use NavigationState::*;
    let n = obs.paths;
    match current {
        FollowingLine | SeeingIntersection => match n {
            0 => Candidate::plain(Lost),
            1 => Candidate::plain(FollowingLine),
            _ if obs.intersection_near => Candidate {
                state: Turning,
                pending: PendingTurn::Set,
                release_latch: false,
            },
            _ => Candidate::plain(SeeingIntersection),
        },
        Turning => match n {
            0 => Candidate::plain(Lost),
            1 => Candidate::plain(FollowingLine),
            _ => Candidate {
                state: Turning,
                pending: PendingTurn::Clear,
                release_latch: false,
            },
        },
        Stopped => Candidate::plain(Stopped),
        Turning180 => match n {
            0 => Candidate {
                state: Turning180,
                pending: PendingTurn::Unchanged,
                release_latch: true,
            },
            1 if !obs.keep_turning => Candidate::plain(FollowingLine),
            _ => Candidate::plain(Turning180),
        },
        Lost => match n {
            0 if obs.plan_exhausted => Candidate::plain(Stopped),
            0 => Candidate::plain(Lost),
            1 => Candidate::plain(FollowingLine),
            _ => Candidate::plain(SeeingIntersection),
        },
    }
}
