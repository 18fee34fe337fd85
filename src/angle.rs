//! Angle utilities shared by the line pipeline and the navigator.
//!
//! Two flavours of angles show up in the crate:
//! - line orientations (Hesse `theta`), which are ambiguous modulo π;
//! - path directions (`atan2` of a segment vector), which live on the full
//!   circle and are compared modulo 2π.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Wraps an angle into (-π, π].
#[inline]
pub fn wrap_pi(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Smallest unsigned difference between two line orientations, treating
/// antipodal directions as equivalent (π apart → 0). Result in [0, π/2].
#[inline]
pub fn angular_difference(a: f32, b: f32) -> f32 {
    let mut diff = (a - b).abs();
    if diff > PI {
        diff = diff.rem_euclid(PI);
    }
    if diff > FRAC_PI_2 {
        PI - diff
    } else {
        diff
    }
}

/// Smallest unsigned difference between two directed angles. Result in [0, π].
#[inline]
pub fn direction_difference(a: f32, b: f32) -> f32 {
    wrap_pi(a - b).abs()
}
