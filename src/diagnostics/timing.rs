use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Milliseconds elapsed since `start`.
#[inline]
pub fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Wall-clock cost of one stage of a frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub stage: String,
    pub elapsed_ms: f64,
}

/// Per-stage timings of one processed frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    /// Runs `f` and records its duration under `stage`.
    pub fn measure<T>(&mut self, stage: &str, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        self.record(stage, elapsed_ms(start));
        out
    }

    pub fn record(&mut self, stage: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming {
            stage: stage.into(),
            elapsed_ms,
        });
    }

    pub fn stage_ms(&self, stage: &str) -> Option<f64> {
        self.stages
            .iter()
            .find(|s| s.stage == stage)
            .map(|s| s.elapsed_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_records_stages_in_order() {
        let mut t = TimingBreakdown::default();
        let v = t.measure("merge", || 2 + 2);
        t.record("navigate", 0.5);
        assert_eq!(v, 4);
        assert_eq!(t.stages.len(), 2);
        assert_eq!(t.stages[0].stage, "merge");
        assert_eq!(t.stage_ms("navigate"), Some(0.5));
        assert_eq!(t.stage_ms("missing"), None);
    }
}
