use crate::geometry::{FrameSize, Line, LineSegment, PixelPoint};
use log::debug;
use serde::{Deserialize, Serialize};

/// A drivable direction: a segment riding on a tape centerline.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TapePath {
    pub segment: LineSegment,
    pub line: Line,
}

impl TapePath {
    /// Same path driven the other way.
    pub fn flipped(&self) -> TapePath {
        TapePath {
            segment: self.segment.flipped(),
            line: self.line,
        }
    }
}

/// Paths visible in one frame, keyed by segment.
///
/// Insertion order is preserved so that ties resolve deterministically.
/// `intersection` holds the crossing point of the two centerlines when the
/// paths come from an intersection.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TapePaths {
    paths: Vec<TapePath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    intersection: Option<PixelPoint>,
}

impl TapePaths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the path stored under `segment`.
    pub fn insert(&mut self, segment: LineSegment, line: Line) {
        match self.paths.iter_mut().find(|p| p.segment == segment) {
            Some(existing) => existing.line = line,
            None => self.paths.push(TapePath { segment, line }),
        }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TapePath> {
        self.paths.iter()
    }

    pub fn intersection(&self) -> Option<PixelPoint> {
        self.intersection
    }

    pub fn with_intersection(mut self, point: PixelPoint) -> Self {
        self.intersection = Some(point);
        self
    }
}

impl FromIterator<TapePath> for TapePaths {
    fn from_iter<I: IntoIterator<Item = TapePath>>(iter: I) -> Self {
        let mut paths = TapePaths::new();
        for p in iter {
            paths.insert(p.segment, p.line);
        }
        paths
    }
}

/// Turn centerlines into drivable paths.
///
/// - one centerline: a single corridor from the bottom frame-border point to
///   the other border point;
/// - two centerlines: branches from their intersection to each border point,
///   minus zero-length branches and branches that cross a tape boundary;
/// - anything else: no paths.
pub fn assemble_paths(
    centerlines: &[Line],
    boundaries: &[LineSegment],
    frame: FrameSize,
) -> TapePaths {
    match centerlines {
        [single] => single_corridor(single, frame),
        [first, second] => intersection_branches(first, second, boundaries, frame),
        [] => TapePaths::new(),
        many => {
            debug!("assemble_paths: {} centerlines, expected at most two", many.len());
            TapePaths::new()
        }
    }
}

fn single_corridor(line: &Line, frame: FrameSize) -> TapePaths {
    let mut paths = TapePaths::new();
    let Some([a, b]) = line.frame_intersections(frame) else {
        debug!("assemble_paths: centerline {:?} misses the frame", line);
        return paths;
    };
    let (start, end) = if a.y >= b.y { (a, b) } else { (b, a) };
    paths.insert(LineSegment::new(start, end), *line);
    paths
}

fn intersection_branches(
    first: &Line,
    second: &Line,
    boundaries: &[LineSegment],
    frame: FrameSize,
) -> TapePaths {
    let Some(crossing) = first.intersection(second) else {
        debug!("assemble_paths: centerlines are parallel, no intersection");
        return TapePaths::new();
    };
    let mut paths = TapePaths::new().with_intersection(crossing);
    for line in [first, second] {
        let Some(ends) = line.frame_intersections(frame) else {
            continue;
        };
        for end in ends {
            let segment = LineSegment::new(crossing, end);
            if segment.is_degenerate() {
                continue;
            }
            if boundaries.iter().any(|b| segment.intersects(b)) {
                continue;
            }
            paths.insert(segment, *line);
        }
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const VGA: FrameSize = FrameSize {
        width: 640,
        height: 480,
    };

    #[test]
    fn single_centerline_starts_at_the_bottom() {
        let paths = assemble_paths(&[Line::new(320.0, 0.0)], &[], VGA);
        assert_eq!(paths.len(), 1);
        let path = paths.iter().next().unwrap();
        assert_eq!(path.segment.start_point, PixelPoint::new(320, 479));
        assert_eq!(path.segment.end_point, PixelPoint::new(320, 0));
        assert!(paths.intersection().is_none());
    }

    #[test]
    fn crossing_centerlines_give_four_branches() {
        let paths = assemble_paths(
            &[Line::new(320.0, 0.0), Line::new(200.0, FRAC_PI_2)],
            &[],
            VGA,
        );
        assert_eq!(paths.len(), 4);
        assert_eq!(paths.intersection(), Some(PixelPoint::new(320, 200)));
        assert!(paths
            .iter()
            .all(|p| p.segment.start_point == PixelPoint::new(320, 200)));
    }

    #[test]
    fn branches_crossing_tape_are_dropped() {
        // A T-junction: the strip above the crossing is closed off by tape.
        let wall = LineSegment::new(PixelPoint::new(250, 100), PixelPoint::new(390, 100));
        let paths = assemble_paths(
            &[Line::new(320.0, 0.0), Line::new(200.0, FRAC_PI_2)],
            &[wall],
            VGA,
        );
        assert_eq!(paths.len(), 3);
        assert!(paths.iter().all(|p| p.segment.end_point.y >= 200));
    }

    #[test]
    fn insert_replaces_existing_key() {
        let seg = LineSegment::new(PixelPoint::new(0, 0), PixelPoint::new(1, 1));
        let mut paths = TapePaths::new();
        paths.insert(seg, Line::new(1.0, 0.0));
        paths.insert(seg, Line::new(2.0, 0.0));
        assert_eq!(paths.len(), 1);
        assert_eq!(paths.iter().next().map(|p| p.line), Some(Line::new(2.0, 0.0)));
    }

    #[test]
    fn three_centerlines_yield_nothing() {
        let lines = [
            Line::new(100.0, 0.0),
            Line::new(200.0, 1.0),
            Line::new(300.0, 2.0),
        ];
        assert!(assemble_paths(&lines, &[], VGA).is_empty());
    }
}
