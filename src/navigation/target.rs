//! Target selection helpers over the paths of one frame.

use super::plan::TurnDirection;
use crate::angle::direction_difference;
use crate::geometry::{FrameSize, Line, LineSegment, PixelPoint};
use crate::lines::{TapePath, TapePaths};
use std::cmp::Ordering;
use std::f32::consts::FRAC_PI_2;

fn by_key(a: f32, b: f32) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Path whose heading falls in `direction`'s sector, closest to the sector
/// center. Ties keep the earlier path.
pub fn path_in_sector(paths: &TapePaths, direction: TurnDirection) -> Option<TapePath> {
    let sector = direction.sector();
    paths
        .iter()
        .filter(|p| !p.segment.is_degenerate())
        .map(|p| (p, sector.offset(p.segment.direction_angle())))
        .filter(|(p, _)| sector.contains(p.segment.direction_angle()))
        .min_by(|a, b| by_key(a.1, b.1))
        .map(|(p, _)| *p)
}

/// The branch leading back towards the robot, reversed so that it points
/// at the intersection. This is the line the robot is currently on.
pub fn incoming_path(paths: &TapePaths) -> Option<TapePath> {
    path_in_sector(paths, TurnDirection::Back).map(|p| p.flipped())
}

/// Path whose heading is closest (wrap-aware) to `previous`.
pub fn closest_heading(paths: &TapePaths, previous: &TapePath) -> Option<TapePath> {
    let heading = previous.segment.direction_angle();
    paths
        .iter()
        .filter(|p| !p.segment.is_degenerate())
        .min_by(|a, b| {
            by_key(
                direction_difference(a.segment.direction_angle(), heading),
                direction_difference(b.segment.direction_angle(), heading),
            )
        })
        .copied()
}

/// Scripted target for the about-face: a horizontal line through the frame
/// center, driven to the right. Steering on it spins the robot in place.
pub fn about_face_target(frame: FrameSize) -> TapePath {
    let [_, cy] = frame.center();
    let row = cy.round() as i32;
    TapePath {
        segment: LineSegment::new(PixelPoint::new(0, row), PixelPoint::new(frame.max_x(), row)),
        line: Line::new(cy, FRAC_PI_2),
    }
}
