mod common;

use common::synthetic_image::{corridor, crossing};
use std::f32::consts::FRAC_PI_2;
use tape_navigator::geometry::{FrameSize, Line, LineSegment, PixelPoint};
use tape_navigator::lines::TapePaths;
use tape_navigator::navigation::{
    DirectionCalculator, NavigationParams, NavigationState, NodeId, PlanStep, TurnDirection,
};
use tape_navigator::{FollowerParams, FrameWorker, LineFollower, NavError, OwnedFrame};
use tape_navigator::image::GrayImageU8;

const VGA: FrameSize = FrameSize {
    width: 640,
    height: 480,
};

fn single_path() -> TapePaths {
    let mut paths = TapePaths::new();
    paths.insert(
        LineSegment::new(PixelPoint::new(320, 479), PixelPoint::new(320, 0)),
        Line::new(320.0, 0.0),
    );
    paths
}

fn four_way(row: i32) -> TapePaths {
    let center = PixelPoint::new(320, row);
    let mut paths = TapePaths::new().with_intersection(center);
    for (end, line) in [
        (PixelPoint::new(320, 0), Line::new(320.0, 0.0)),
        (PixelPoint::new(320, 479), Line::new(320.0, 0.0)),
        (PixelPoint::new(0, row), Line::new(row as f32, FRAC_PI_2)),
        (PixelPoint::new(639, row), Line::new(row as f32, FRAC_PI_2)),
    ] {
        paths.insert(LineSegment::new(center, end), line);
    }
    paths
}

fn turn(direction: TurnDirection, node: u32) -> PlanStep {
    PlanStep::Turn {
        direction,
        node: NodeId(node),
    }
}

/// Calculator out of the about-face and following the line.
fn following(threshold: u32, plan: Vec<PlanStep>) -> DirectionCalculator {
    let mut calc = DirectionCalculator::new(NavigationParams {
        state_change_threshold: threshold,
        ..Default::default()
    });
    calc.set_plan(plan);
    for _ in 0..threshold {
        calc.update(&TapePaths::new(), VGA).unwrap();
    }
    for _ in 0..threshold {
        calc.update(&single_path(), VGA).unwrap();
    }
    assert_eq!(calc.state(), NavigationState::FollowingLine);
    calc
}

#[test]
fn plan_is_consumed_in_order_over_three_turns() {
    let mut calc = following(
        2,
        vec![
            turn(TurnDirection::Right, 1),
            turn(TurnDirection::Straight, 2),
            turn(TurnDirection::Left, 3),
        ],
    );

    let mut events = Vec::new();
    for _ in 0..3 {
        for _ in 0..3 {
            let out = calc.update(&four_way(300), VGA).unwrap();
            if let Some(node) = out.node {
                let end = out.target.map(|t| t.segment.end_point);
                events.push((node, end));
            }
        }
        // Back on a single corridor before the next intersection.
        for _ in 0..2 {
            calc.update(&single_path(), VGA).unwrap();
        }
        assert_eq!(calc.state(), NavigationState::FollowingLine);
    }

    assert_eq!(
        events,
        vec![
            (NodeId(1), Some(PixelPoint::new(639, 300))),
            (NodeId(2), Some(PixelPoint::new(320, 0))),
            (NodeId(3), Some(PixelPoint::new(0, 300))),
        ]
    );
    assert!(calc.plan().is_empty());
}

#[test]
fn short_glitches_do_not_change_state() {
    let mut calc = following(3, vec![turn(TurnDirection::Left, 1)]);
    let empty = TapePaths::new();
    calc.update(&empty, VGA).unwrap();
    calc.update(&empty, VGA).unwrap();
    calc.update(&single_path(), VGA).unwrap();
    assert_eq!(calc.state(), NavigationState::FollowingLine);

    calc.update(&empty, VGA).unwrap();
    calc.update(&empty, VGA).unwrap();
    let out = calc.update(&empty, VGA).unwrap();
    assert_eq!(out.state, NavigationState::Lost);
    assert!(out.steering.is_zero());
}

#[test]
fn turning_without_plan_reports_empty_plan() {
    let mut calc = following(1, Vec::new());
    let err = calc.update(&four_way(300), VGA).unwrap_err();
    assert!(matches!(err, NavError::EmptyPlan { paths: 4 }));
}

#[test]
fn worker_processes_frames_and_applies_plans_between_them() {
    let params = FollowerParams {
        navigation: NavigationParams {
            state_change_threshold: 1,
            ..Default::default()
        },
        ..Default::default()
    };
    let worker = FrameWorker::spawn(LineFollower::new(params)).unwrap();

    let owned = |scene: common::synthetic_image::TapeScene| OwnedFrame {
        lines: scene.lines.clone(),
        edges: GrayImageU8::new(scene.width, scene.height, scene.data),
    };

    let out = worker.process(owned(corridor(320))).unwrap();
    assert_eq!(out.state, NavigationState::FollowingLine);

    worker.set_plan(vec![turn(TurnDirection::Right, 5)]).unwrap();
    let snap = worker.snapshot().unwrap();
    assert_eq!(snap.plan.len(), 1);
    assert!(snap.keep_turning);

    let pending = worker.submit(owned(crossing(240))).unwrap();
    let out = pending.wait().unwrap();
    assert_eq!(out.state, NavigationState::Turning180);

    assert_eq!(worker.metrics().unwrap().frames, 2);

    worker.restore(snap.clone()).unwrap();
    let follower = worker.shutdown().unwrap();
    assert_eq!(follower.snapshot(), snap);
}
