use crate::angle::angular_difference;
use crate::geometry::Line;
use log::debug;
use std::f32::consts::FRAC_PI_2;

/// Centerlines of every pair of parallel merged lines.
///
/// Lines are bucketed by orientation against each bucket's first member
/// (wrap-aware, see [`angular_difference`]). A bucket with exactly two lines
/// is one tape strip; single lines are dropped, and buckets with three or
/// more lines are ambiguous and dropped as well.
pub fn parallel_centerlines(lines: &[Line], angle_tolerance_rad: f32) -> Vec<Line> {
    let mut buckets: Vec<Vec<Line>> = Vec::new();
    for &line in lines {
        let bucket = buckets
            .iter_mut()
            .find(|b| angular_difference(b[0].theta, line.theta) < angle_tolerance_rad);
        match bucket {
            Some(bucket) => bucket.push(line),
            None => buckets.push(vec![line]),
        }
    }

    let mut centers = Vec::new();
    for bucket in &buckets {
        match bucket.len() {
            2 => centers.push(center_line(&bucket[0], &bucket[1])),
            n if n >= 3 => debug!(
                "parallel_centerlines: dropping ambiguous bucket of {} lines near theta={:.3}",
                n, bucket[0].theta
            ),
            _ => {}
        }
    }
    centers
}

/// Mean of two parallel lines after aligning their representations across
/// the `θ` seam.
pub fn center_line(a: &Line, b: &Line) -> Line {
    let (mut a, mut b) = (*a, *b);
    if (a.theta - b.theta).abs() > FRAC_PI_2 {
        if a.theta > b.theta {
            a = a.unwrapped();
        } else {
            b = b.unwrapped();
        }
    }
    Line::new(0.5 * (a.rho + b.rho), 0.5 * (a.theta + b.theta)).conventional_form()
}
