use super::Vector2D;
use serde::{Deserialize, Serialize};

/// Integer pixel location in image coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &PixelPoint) -> f32 {
        let dx = (other.x - self.x) as f32;
        let dy = (other.y - self.y) as f32;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Finite segment between two pixels.
///
/// Used both for tape boundaries and for drivable tape paths; for paths the
/// orientation matters (`start_point` is where the robot comes from).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineSegment {
    pub start_point: PixelPoint,
    pub end_point: PixelPoint,
}

impl LineSegment {
    pub const fn new(start_point: PixelPoint, end_point: PixelPoint) -> Self {
        Self {
            start_point,
            end_point,
        }
    }

    pub fn length(&self) -> f32 {
        self.start_point.distance(&self.end_point)
    }

    pub fn is_degenerate(&self) -> bool {
        self.start_point == self.end_point
    }

    /// `end − start` in image coordinates.
    pub fn direction_vector(&self) -> Vector2D {
        Vector2D::new(
            (self.end_point.x - self.start_point.x) as f32,
            (self.end_point.y - self.start_point.y) as f32,
        )
    }

    /// Image-space heading `atan2(dy, dx)` in (-π, π]; positive angles point
    /// down the image, i.e. back towards the robot.
    pub fn direction_angle(&self) -> f32 {
        let d = self.direction_vector();
        d.y.atan2(d.x)
    }

    /// Same segment with the endpoints swapped.
    pub fn flipped(&self) -> Self {
        Self::new(self.end_point, self.start_point)
    }

    /// Proper intersection test based on orientation predicates.
    ///
    /// Collinear overlaps and touching endpoints are not reported, matching
    /// the strict predicate: a path that merely ends on a boundary is kept.
    pub fn intersects(&self, other: &LineSegment) -> bool {
        let (a, b) = (self.start_point, self.end_point);
        let (c, d) = (other.start_point, other.end_point);
        ccw(a, c, d) != ccw(b, c, d) && ccw(a, b, c) != ccw(a, b, d)
    }
}

#[inline]
fn ccw(a: PixelPoint, b: PixelPoint, c: PixelPoint) -> bool {
    let lhs = (c.y as i64 - a.y as i64) * (b.x as i64 - a.x as i64);
    let rhs = (b.y as i64 - a.y as i64) * (c.x as i64 - a.x as i64);
    lhs > rhs
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn seg(x0: i32, y0: i32, x1: i32, y1: i32) -> LineSegment {
        LineSegment::new(PixelPoint::new(x0, y0), PixelPoint::new(x1, y1))
    }

    #[test]
    fn length_and_direction() {
        let s = seg(0, 0, 3, 4);
        assert_abs_diff_eq!(s.length(), 5.0, epsilon = 1e-6);
        assert_eq!(s.direction_vector(), Vector2D::new(3.0, 4.0));
        assert_eq!(s.flipped().direction_vector(), Vector2D::new(-3.0, -4.0));
    }

    #[test]
    fn crossing_segments_intersect() {
        assert!(seg(0, 0, 10, 10).intersects(&seg(0, 10, 10, 0)));
        assert!(!seg(0, 0, 10, 0).intersects(&seg(0, 5, 10, 5)));
    }

    #[test]
    fn disjoint_collinear_segments_do_not_intersect() {
        assert!(!seg(0, 0, 5, 0).intersects(&seg(6, 0, 10, 0)));
    }

    #[test]
    fn heading_points_down_for_backward_segments() {
        let back = seg(100, 100, 100, 200);
        let quarter_turn = std::f32::consts::FRAC_PI_2;
        assert_abs_diff_eq!(back.direction_angle(), quarter_turn, epsilon = 1e-6);
        assert_abs_diff_eq!(back.flipped().direction_angle(), -quarter_turn, epsilon = 1e-6);
    }
}
