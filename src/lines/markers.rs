//! Boolean marker post-processing for the tape boundary sampler.
//!
//! Markers are per-box "this box sits on tape" flags along one line. Two
//! passes clean them up: gap filling bridges short dropouts inside a tape
//! run, then the small-run filter removes isolated noise.

use std::ops::RangeInclusive;

/// Fill short `false` gaps that sit between a tape run and a nearby tape box.
///
/// The lookahead window is `min_gap_fill - 1` boxes. A gap is filled up to
/// the last `true` inside the window when `run + hits + 1 >= min_gap_fill`,
/// where `run` is the current tape run length and `hits` the number of
/// `true` boxes inside the window. A window without any `true` ends the run
/// and skips the window. Decisions read the unfilled input.
pub fn fill_gaps(markers: &[bool], min_gap_fill: usize) -> Vec<bool> {
    let lookahead = min_gap_fill.saturating_sub(1);
    let mut filled = markers.to_vec();
    let mut recording = false;
    let mut run = 0usize;
    let mut i = 0usize;
    while i < markers.len() {
        if markers[i] {
            recording = true;
            run += 1;
            i += 1;
            continue;
        }
        if !recording {
            i += 1;
            continue;
        }

        let window_end = (i + lookahead).min(markers.len() - 1);
        let mut hits = 0usize;
        let mut last_hit = i;
        for j in (i + 1)..=window_end {
            if markers[j] {
                hits += 1;
                last_hit = j;
            }
        }

        if hits == 0 {
            recording = false;
            run = 0;
            i += lookahead + 1;
        } else if run + hits + 1 >= min_gap_fill {
            for m in &mut filled[i..=last_hit] {
                *m = true;
            }
            run += last_hit - i;
            // `markers[last_hit]` is true and gets counted on the next pass.
            i = last_hit;
        } else {
            i += 1;
        }
    }
    filled
}

/// Remove `true` runs shorter than `min_run` boxes.
pub fn filter_small_runs(markers: &[bool], min_run: usize) -> Vec<bool> {
    let mut filtered = markers.to_vec();
    for run in true_runs(markers) {
        if run.end() - run.start() + 1 < min_run {
            for m in &mut filtered[run] {
                *m = false;
            }
        }
    }
    filtered
}

/// Both passes in order.
pub fn clean_markers(markers: &[bool], min_gap_fill: usize, min_run: usize) -> Vec<bool> {
    let filled = fill_gaps(markers, min_gap_fill);
    filter_small_runs(&filled, min_run)
}

/// Maximal runs of `true`, as inclusive index ranges.
pub fn true_runs(markers: &[bool]) -> Vec<RangeInclusive<usize>> {
    let mut runs = Vec::new();
    let mut start: Option<usize> = None;
    for (i, &m) in markers.iter().enumerate() {
        match (m, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                runs.push(s..=i - 1);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        runs.push(s..=markers.len() - 1);
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Vec<bool> {
        s.chars().map(|c| c == '#').collect()
    }

    fn render(m: &[bool]) -> String {
        m.iter().map(|&b| if b { '#' } else { '.' }).collect()
    }

    #[test]
    fn fills_short_gap_inside_long_run() {
        let out = fill_gaps(&parse("####.####"), 4);
        assert_eq!(render(&out), "#########");
    }

    #[test]
    fn does_not_bridge_wide_gap() {
        let out = fill_gaps(&parse("####....####"), 4);
        assert_eq!(render(&out), "####....####");
    }

    #[test]
    fn weak_evidence_is_not_filled() {
        // run=1, one hit in the window: 1 + 1 + 1 < 4
        let out = fill_gaps(&parse("#.#......"), 4);
        assert_eq!(render(&out), "#.#......");
    }

    #[test]
    fn small_runs_are_removed() {
        let out = filter_small_runs(&parse("##..#####..#"), 4);
        assert_eq!(render(&out), "....#####...");
    }

    #[test]
    fn run_reaching_the_end_is_measured_fully() {
        let out = filter_small_runs(&parse("....####"), 4);
        assert_eq!(render(&out), "....####");
    }

    #[test]
    fn true_runs_are_inclusive() {
        assert_eq!(true_runs(&parse(".##..#")), vec![1..=2, 5..=5]);
        assert!(true_runs(&parse("....")).is_empty());
    }

    #[test]
    fn clean_markers_bridges_then_filters() {
        let out = clean_markers(&parse("###.###....#."), 4, 4);
        assert_eq!(render(&out), "#######......");
    }
}
