use super::{FrameSize, PixelPoint, Vector2D};
use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_4, PI};

const EPS: f32 = 1e-6;
/// Frame-border hits closer than this are treated as the same point (corners).
const SAME_POINT_PX: f32 = 1.5;
/// Intersections further out than this are treated as "parallel".
const MAX_INTERSECTION_PX: f32 = 1.0e6;

/// Infinite line in Hesse normal form: `x·cos θ + y·sin θ = ρ`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub rho: f32,
    pub theta: f32,
}

impl Line {
    pub const fn new(rho: f32, theta: f32) -> Self {
        Self { rho, theta }
    }

    /// Builds lines from raw `[rho, theta]` pairs as emitted by a Hough
    /// transform.
    pub fn from_hough(raw: &[[f32; 2]]) -> Vec<Line> {
        raw.iter().map(|&[rho, theta]| Line::new(rho, theta)).collect()
    }

    /// Unit normal `(cos θ, sin θ)` in image coordinates.
    #[inline]
    pub fn normal(&self) -> Vector2D {
        Vector2D::new(self.theta.cos(), self.theta.sin())
    }

    /// Representation with non-negative `ρ` (`θ` may become negative).
    pub fn comparable_form(&self) -> Line {
        if self.rho < 0.0 {
            Line::new(-self.rho, self.theta - PI)
        } else {
            *self
        }
    }

    /// Representation with non-negative `θ` (`ρ` may become negative).
    pub fn conventional_form(&self) -> Line {
        if self.theta < 0.0 {
            Line::new(-self.rho, self.theta + PI)
        } else {
            *self
        }
    }

    /// Same line expressed with `θ` shifted by −π so that it can be averaged
    /// with a line whose `θ` sits on the other side of the wrap.
    pub fn unwrapped(&self) -> Line {
        Line::new(-self.rho, self.theta - PI)
    }

    /// True when sampling along x gives denser coverage than along y.
    #[inline]
    pub fn is_more_horizontal(&self) -> bool {
        self.theta >= FRAC_PI_4 && self.theta <= 3.0 * FRAC_PI_4
    }

    /// Row at column `x`, if the line is not vertical.
    pub fn y_at(&self, x: f32) -> Option<f32> {
        let (sin, cos) = self.theta.sin_cos();
        (sin.abs() > EPS).then(|| (self.rho - x * cos) / sin)
    }

    /// Column at row `y`, if the line is not horizontal.
    pub fn x_at(&self, y: f32) -> Option<f32> {
        let (sin, cos) = self.theta.sin_cos();
        (cos.abs() > EPS).then(|| (self.rho - y * sin) / cos)
    }

    /// The two points where the line crosses the frame border, or `None`
    /// when it misses the frame (or only grazes a corner).
    pub fn frame_intersections(&self, frame: FrameSize) -> Option<[PixelPoint; 2]> {
        let max_x = frame.max_x() as f32;
        let max_y = frame.max_y() as f32;
        let candidates = [
            self.y_at(0.0).map(|y| (0.0, y)),
            self.y_at(max_x).map(|y| (max_x, y)),
            self.x_at(0.0).map(|x| (x, 0.0)),
            self.x_at(max_y).map(|x| (x, max_y)),
        ];

        let mut hits: Vec<PixelPoint> = Vec::with_capacity(2);
        for (x, y) in candidates.into_iter().flatten() {
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            let p = PixelPoint::new(x.round() as i32, y.round() as i32);
            if !frame.contains(p) {
                continue;
            }
            if hits.iter().any(|h| h.distance(&p) <= SAME_POINT_PX) {
                continue;
            }
            hits.push(p);
            if hits.len() == 2 {
                return Some([hits[0], hits[1]]);
            }
        }
        None
    }

    /// Intersection of two lines rounded to the nearest pixel, `None` when
    /// they are (nearly) parallel.
    pub fn intersection(&self, other: &Line) -> Option<PixelPoint> {
        let a = Matrix2::new(
            self.theta.cos(),
            self.theta.sin(),
            other.theta.cos(),
            other.theta.sin(),
        );
        if a.determinant().abs() < EPS {
            return None;
        }
        let b = Vector2::new(self.rho, other.rho);
        let p = a.lu().solve(&b)?;
        if !p.x.is_finite() || !p.y.is_finite() {
            return None;
        }
        if p.x.abs() > MAX_INTERSECTION_PX || p.y.abs() > MAX_INTERSECTION_PX {
            return None;
        }
        Some(PixelPoint::new(p.x.round() as i32, p.y.round() as i32))
    }

    /// Image-space similarity: both lines cross the frame border at points
    /// that pair up within `max_endpoint_distance` pixels.
    pub fn is_similar(&self, other: &Line, frame: FrameSize, max_endpoint_distance: f32) -> bool {
        let (Some([a, b]), Some([c, d])) = (
            self.frame_intersections(frame),
            other.frame_intersections(frame),
        ) else {
            return false;
        };
        let (ac, bd) = (a.distance(&c), b.distance(&d));
        let (ad, bc) = (a.distance(&d), b.distance(&c));
        let (first, second) = if ac + bd <= ad + bc { (ac, bd) } else { (bc, ad) };
        first < max_endpoint_distance && second < max_endpoint_distance
    }
}
