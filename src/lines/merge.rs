use crate::geometry::{FrameSize, Line};
use log::debug;
use std::cmp::Ordering;

/// Group of raw lines believed to describe the same tape edge.
#[derive(Clone, Debug)]
struct Cluster {
    leader: Line,
    members: Vec<Line>,
}

/// Collapse near-duplicate detections into one line per physical edge.
///
/// Greedy single pass: each raw line joins the first cluster whose leading
/// line is similar in image space (see [`Line::is_similar`]), otherwise it
/// starts a new cluster. Clusters collapse to their median `(ρ, θ)`.
pub fn merge_lines(
    lines: &[Line],
    frame: FrameSize,
    endpoint_distance_px: f32,
    angle_tolerance_rad: f32,
) -> Vec<Line> {
    let mut clusters: Vec<Cluster> = Vec::new();
    for &line in lines {
        let mut placed = false;
        for cluster in clusters.iter_mut() {
            if line.is_similar(&cluster.leader, frame, endpoint_distance_px) {
                cluster.members.push(line);
                placed = true;
                break;
            }
        }
        if !placed {
            clusters.push(Cluster {
                leader: line,
                members: vec![line],
            });
        }
    }
    debug!(
        "merge_lines: {} raw lines -> {} clusters",
        lines.len(),
        clusters.len()
    );
    clusters
        .iter()
        .map(|c| median_line(&c.members, angle_tolerance_rad))
        .collect()
}

/// Median `(ρ, θ)` of a cluster, unwrapping members first when they straddle
/// the `θ = 0 / π` seam.
pub fn median_line(members: &[Line], angle_tolerance_rad: f32) -> Line {
    debug_assert!(!members.is_empty());
    let straddles = max_theta_spread(members) > 2.0 * angle_tolerance_rad;
    let prepared: Vec<Line> = if straddles {
        members.iter().map(Line::comparable_form).collect()
    } else {
        members.to_vec()
    };
    let rho = median(prepared.iter().map(|l| l.rho).collect());
    let theta = median(prepared.iter().map(|l| l.theta).collect());
    let merged = Line::new(rho, theta);
    if straddles {
        merged.conventional_form()
    } else {
        merged
    }
}

fn max_theta_spread(members: &[Line]) -> f32 {
    let (min, max) = members
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), l| {
            (lo.min(l.theta), hi.max(l.theta))
        });
    if min.is_finite() && max.is_finite() {
        max - min
    } else {
        0.0
    }
}

/// Median with the usual even-length convention (mean of the middle pair).
fn median(mut values: Vec<f32>) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let m = values.len();
    if m % 2 == 1 {
        values[m / 2]
    } else {
        0.5 * (values[m / 2 - 1] + values[m / 2])
    }
}
