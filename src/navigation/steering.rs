//! Steering synthesis from a target path.
//!
//! All vectors returned here are in the robot frame (x right, y forward).
//! The result blends two unit vectors:
//! - the direction of the target's centerline, oriented along the path;
//! - the direction from the frame center to the centerline.
//!
//! The blend weight of the displacement grows linearly with the distance
//! from the center, reaching 1 at the half-diagonal.

use crate::error::Result;
use crate::geometry::{image_to_robot, unit_vector, FrameSize, Line, Vector2D};
use crate::lines::TapePath;
use std::f32::consts::FRAC_PI_2;

/// Offsets below this are treated as "already centred".
const MIN_DISPLACEMENT_PX: f32 = 1e-3;

/// Vector from the frame center to the closest point of `line`.
pub fn displacement(line: &Line, frame: FrameSize) -> Vector2D {
    let half_diagonal = frame.half_diagonal();
    let gamma = (frame.height as f32 * 0.5 / half_diagonal).asin();
    let offset = half_diagonal * (FRAC_PI_2 - line.theta + gamma).sin() - line.rho;
    Vector2D::new(-offset * line.theta.cos(), offset * line.theta.sin())
}

/// Unit direction of `line`, flipped to agree with `heading` (robot frame).
pub fn direction(line: &Line, heading: &Vector2D) -> Vector2D {
    let dir = Vector2D::new(line.theta.sin(), line.theta.cos());
    if dir.dot(heading) < 0.0 {
        -dir
    } else {
        dir
    }
}

/// Unit steering vector towards and along `target`.
pub fn steering_vector(target: &TapePath, frame: FrameSize, gain: f32) -> Result<Vector2D> {
    let heading = image_to_robot(&target.segment.direction_vector());
    let dir = direction(&target.line, &heading);
    let d = displacement(&target.line, frame);
    let distance = d.norm();
    let w_disp = distance / frame.half_diagonal();
    let w_dir = 1.0 - w_disp;

    let mut steer = dir * w_dir;
    if distance > MIN_DISPLACEMENT_PX {
        steer += unit_vector(&d)? * (gain * w_disp);
    }
    unit_vector(&steer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{LineSegment, PixelPoint};
    use approx::assert_abs_diff_eq;

    const VGA: FrameSize = FrameSize {
        width: 640,
        height: 480,
    };

    fn corridor(line: Line) -> TapePath {
        let [a, b] = line.frame_intersections(VGA).unwrap();
        let (start, end) = if a.y >= b.y { (a, b) } else { (b, a) };
        TapePath {
            segment: LineSegment::new(start, end),
            line,
        }
    }

    #[test]
    fn centred_vertical_line_has_no_displacement() {
        let d = displacement(&Line::new(320.0, 0.0), VGA);
        assert_abs_diff_eq!(d.norm(), 0.0, epsilon = 1e-3);
    }

    #[test]
    fn displacement_points_towards_the_line() {
        let left = displacement(&Line::new(300.0, 0.0), VGA);
        assert_abs_diff_eq!(left.x, -20.0, epsilon = 1e-3);
        assert_abs_diff_eq!(left.y, 0.0, epsilon = 1e-3);

        // Horizontal line 40 rows above the center.
        let ahead = displacement(&Line::new(200.0, FRAC_PI_2), VGA);
        assert_abs_diff_eq!(ahead.x, 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(ahead.y, 40.0, epsilon = 1e-3);
    }

    #[test]
    fn direction_follows_the_path_orientation() {
        let line = Line::new(320.0, 0.0);
        let up = direction(&line, &Vector2D::new(0.0, 5.0));
        let down = direction(&line, &Vector2D::new(0.0, -5.0));
        assert_abs_diff_eq!(up.y, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(down.y, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn centred_corridor_steers_straight_ahead() {
        let steer = steering_vector(&corridor(Line::new(320.0, 0.0)), VGA, 1.0).unwrap();
        assert_abs_diff_eq!(steer.x, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(steer.y, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn zero_displacement_gives_the_pure_direction() {
        let theta: f32 = 0.4;
        let through_center = Line::new(320.0 * theta.cos() + 240.0 * theta.sin(), theta);
        let target = corridor(through_center);
        let steer = steering_vector(&target, VGA, 1.0).unwrap();
        let heading = image_to_robot(&target.segment.direction_vector());
        let expected = direction(&through_center, &heading);
        assert_abs_diff_eq!(steer.x, expected.x, epsilon = 1e-4);
        assert_abs_diff_eq!(steer.y, expected.y, epsilon = 1e-4);
    }

    #[test]
    fn offset_corridor_steers_back_towards_the_tape() {
        let steer = steering_vector(&corridor(Line::new(200.0, 0.0)), VGA, 1.0).unwrap();
        assert!(steer.x < 0.0);
        assert!(steer.y > 0.0);
        assert_abs_diff_eq!(steer.norm(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn about_face_line_steers_sideways() {
        let target = TapePath {
            segment: LineSegment::new(PixelPoint::new(0, 240), PixelPoint::new(639, 240)),
            line: Line::new(240.0, FRAC_PI_2),
        };
        let steer = steering_vector(&target, VGA, 1.0).unwrap();
        assert_abs_diff_eq!(steer.x, 1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(steer.y, 0.0, epsilon = 1e-4);
    }
}
