//! Geometry primitives shared by the line pipeline and the navigator.
//!
//! Conventions
//! - Image coordinates: x to the right, y down, origin at the top-left pixel.
//! - [`Line`] uses the Hesse normal form `x·cos θ + y·sin θ = ρ` with
//!   `θ ∈ [0, π)` in its conventional form (as produced by a Hough transform).
//! - [`LineSegment`] endpoints are integer pixels; its direction vector is
//!   `end − start` in image coordinates.
//! - Steering vectors live in the robot frame (x right, y forward); see
//!   [`image_to_robot`].

mod frame;
mod line;
mod segment;
mod vector;

pub use frame::FrameSize;
pub use line::Line;
pub use segment::{LineSegment, PixelPoint};
pub use vector::{image_to_robot, unit_vector, Vector2D};
