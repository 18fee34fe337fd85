//! Navigation state machine: which path to follow and how to steer.
//!
//! Per frame, the [`DirectionCalculator`]:
//! 1. derives a candidate state from the path count and the intersection row
//!    ([`candidate_state`]);
//! 2. feeds it through the [`StateDebouncer`] so a state only changes after
//!    it has been seen on enough consecutive frames;
//! 3. picks a target path for the stable state, consuming a [`PlanStep`]
//!    when a turn starts;
//! 4. turns the target into a unit steering vector ([`steering_vector`]).

mod calculator;
mod debounce;
mod params;
mod plan;
mod state;
mod steering;
mod target;

pub use calculator::{DirectionCalculator, NavigationOutput, NavigatorSnapshot};
pub use debounce::StateDebouncer;
pub use params::NavigationParams;
pub use plan::{NodeId, PathPlan, PlanStep, Sector, TurnDirection};
pub use state::{candidate_state, Candidate, FrameObservation, NavigationState, PendingTurn};
pub use steering::{direction, displacement, steering_vector};
pub use target::{about_face_target, closest_heading, incoming_path, path_in_sector};
