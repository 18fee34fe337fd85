use super::debounce::StateDebouncer;
use super::params::NavigationParams;
use super::plan::{NodeId, PathPlan, PlanStep, TurnDirection};
use super::state::{candidate_state, FrameObservation, NavigationState, PendingTurn};
use super::steering::steering_vector;
use super::target::{about_face_target, closest_heading, incoming_path, path_in_sector};
use crate::error::{NavError, Result};
use crate::geometry::FrameSize;
use crate::lines::{TapePath, TapePaths};
use crate::types::SteeringVector;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Decision for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationOutput {
    pub steering: SteeringVector,
    pub state: NavigationState,
    pub node: Option<NodeId>,
    pub target: Option<TapePath>,
}

/// Serializable copy of the cross-frame memory of a [`DirectionCalculator`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigatorSnapshot {
    pub debouncer: StateDebouncer,
    pub plan: PathPlan,
    pub last_target: Option<TapePath>,
    pub turn_pending: bool,
    pub keep_turning: bool,
    #[serde(default)]
    pub empty_frames: u32,
}

/// Navigation state machine.
///
/// Owns the only state that survives between frames: the debounced
/// navigation state, the plan, the last followed path and two flags
/// (a turn waiting to pick its branch, and the about-face latch).
///
/// The latch is debounced like the state: it releases only after
/// `state_change_threshold` consecutive about-face frames without a path.
#[derive(Clone, Debug)]
pub struct DirectionCalculator {
    params: NavigationParams,
    debouncer: StateDebouncer,
    plan: PathPlan,
    last_target: Option<TapePath>,
    turn_pending: bool,
    keep_turning: bool,
    empty_frames: u32,
}

impl DirectionCalculator {
    pub fn new(params: NavigationParams) -> Self {
        let debouncer =
            StateDebouncer::new(NavigationState::FollowingLine, params.state_change_threshold);
        Self {
            params,
            debouncer,
            plan: PathPlan::new(),
            last_target: None,
            turn_pending: false,
            keep_turning: false,
            empty_frames: 0,
        }
    }

    pub fn from_snapshot(params: NavigationParams, snapshot: NavigatorSnapshot) -> Self {
        let mut calc = Self::new(params);
        calc.restore(snapshot);
        calc
    }

    pub fn params(&self) -> &NavigationParams {
        &self.params
    }

    pub fn state(&self) -> NavigationState {
        self.debouncer.stable()
    }

    pub fn plan(&self) -> &PathPlan {
        &self.plan
    }

    pub fn last_target(&self) -> Option<&TapePath> {
        self.last_target.as_ref()
    }

    pub fn turn_pending(&self) -> bool {
        self.turn_pending
    }

    pub fn keep_turning(&self) -> bool {
        self.keep_turning
    }

    /// Replaces the plan and starts an about-face on the current line.
    pub fn set_plan<I: IntoIterator<Item = PlanStep>>(&mut self, steps: I) {
        self.plan = steps.into_iter().collect();
        self.turn_pending = false;
        self.keep_turning = true;
        self.empty_frames = 0;
        self.debouncer.force(NavigationState::Turning180);
        debug!("navigation: new plan with {} steps", self.plan.len());
    }

    pub fn snapshot(&self) -> NavigatorSnapshot {
        NavigatorSnapshot {
            debouncer: self.debouncer.clone(),
            plan: self.plan.clone(),
            last_target: self.last_target,
            turn_pending: self.turn_pending,
            keep_turning: self.keep_turning,
            empty_frames: self.empty_frames,
        }
    }

    pub fn restore(&mut self, snapshot: NavigatorSnapshot) {
        self.debouncer = snapshot.debouncer;
        self.plan = snapshot.plan;
        self.last_target = snapshot.last_target;
        self.turn_pending = snapshot.turn_pending;
        self.keep_turning = snapshot.keep_turning;
        self.empty_frames = snapshot.empty_frames;
    }

    /// Advances the state machine by one frame and synthesizes steering.
    ///
    /// Returns [`NavError::EmptyPlan`] when a turn starts with nothing left
    /// in the plan; the state change of that frame is kept.
    pub fn update(&mut self, paths: &TapePaths, frame: FrameSize) -> Result<NavigationOutput> {
        let reaction_row = self.params.intersection_react_fraction * frame.height as f32;
        let obs = FrameObservation {
            paths: paths.len(),
            intersection_near: paths
                .intersection()
                .map_or(false, |p| p.y as f32 > reaction_row),
            keep_turning: self.keep_turning,
            plan_exhausted: self.plan.is_exhausted(),
        };
        let candidate = candidate_state(self.debouncer.stable(), &obs);
        match candidate.pending {
            PendingTurn::Set => self.turn_pending = true,
            PendingTurn::Clear => self.turn_pending = false,
            PendingTurn::Unchanged => {}
        }
        self.vote_latch_release(candidate.release_latch);
        if let Some((from, to)) = self.debouncer.observe(candidate.state) {
            debug!("navigation: {} -> {} ({} paths)", from, to, obs.paths);
        }

        let (target, node) = self.select_target(paths, frame)?;
        let steering = match &target {
            Some(t) => SteeringVector::from_vector(&steering_vector(
                t,
                frame,
                self.params.displacement_gain,
            )?),
            None => SteeringVector::ZERO,
        };
        Ok(NavigationOutput {
            steering,
            state: self.debouncer.stable(),
            node,
            target,
        })
    }

    fn vote_latch_release(&mut self, release: bool) {
        if !release {
            self.empty_frames = 0;
            return;
        }
        self.empty_frames = self.empty_frames.saturating_add(1);
        if self.keep_turning && self.empty_frames >= self.debouncer.threshold() {
            self.keep_turning = false;
            debug!(
                "navigation: about-face latch released after {} empty frames",
                self.empty_frames
            );
        }
    }

    fn select_target(
        &mut self,
        paths: &TapePaths,
        frame: FrameSize,
    ) -> Result<(Option<TapePath>, Option<NodeId>)> {
        let n = paths.len();
        let (target, node) = match self.debouncer.stable() {
            NavigationState::FollowingLine => match n {
                0 => (self.last_target, None),
                1 => (paths.iter().next().copied(), None),
                _ => (self.incoming_or_last(paths), None),
            },
            NavigationState::SeeingIntersection if n > 1 => (self.incoming_or_last(paths), None),
            NavigationState::SeeingIntersection => (self.last_target, None),
            NavigationState::Turning if n > 1 && self.turn_pending => self.start_turn(paths)?,
            NavigationState::Turning if n > 0 => {
                let tracked = match &self.last_target {
                    Some(prev) => closest_heading(paths, prev),
                    None => paths.iter().next().copied(),
                };
                (tracked, None)
            }
            NavigationState::Turning => (self.last_target, None),
            NavigationState::Stopped | NavigationState::Lost => (None, None),
            NavigationState::Turning180 => return Ok((Some(about_face_target(frame)), None)),
        };
        if target.is_some() {
            self.last_target = target;
        }
        Ok((target, node))
    }

    fn incoming_or_last(&self, paths: &TapePaths) -> Option<TapePath> {
        incoming_path(paths).or_else(|| {
            warn!("navigation: no branch leads back to the robot, keeping last target");
            self.last_target
        })
    }

    fn start_turn(&mut self, paths: &TapePaths) -> Result<(Option<TapePath>, Option<NodeId>)> {
        self.turn_pending = false;
        let step = self
            .plan
            .pop()
            .ok_or(NavError::EmptyPlan { paths: paths.len() })?;
        match step {
            PlanStep::Turn { direction, node } => {
                let branch = path_in_sector(paths, direction);
                if branch.is_none() {
                    let seen: Vec<TurnDirection> = paths
                        .iter()
                        .map(|p| TurnDirection::of_heading(p.segment.direction_angle()))
                        .collect();
                    warn!(
                        "navigation: no {} branch at node {}, visible: {:?}",
                        direction, node, seen
                    );
                }
                debug!("navigation: turning {} at node {}", direction, node);
                Ok((branch, Some(node)))
            }
            PlanStep::Stop { node } => {
                debug!("navigation: stop marker at node {}", node);
                self.debouncer.force(NavigationState::Stopped);
                Ok((None, Some(node)))
            }
        }
    }
}
