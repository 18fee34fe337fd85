use serde::Serialize;
use std::time::Instant;

/// Running frame statistics, owned by the caller and passed in by `&mut`.
#[derive(Clone, Debug, Default)]
pub struct FrameMetrics {
    frames: u64,
    total_latency_ms: f64,
    last_latency_ms: f64,
    first_frame: Option<Instant>,
    last_frame: Option<Instant>,
}

/// Serializable view of [`FrameMetrics`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummary {
    pub frames: u64,
    pub last_latency_ms: f64,
    pub mean_latency_ms: f64,
    pub fps: f64,
}

impl FrameMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, latency_ms: f64) {
        self.record_at(Instant::now(), latency_ms);
    }

    /// Records a frame that finished at `at`.
    pub fn record_at(&mut self, at: Instant, latency_ms: f64) {
        self.frames += 1;
        self.total_latency_ms += latency_ms;
        self.last_latency_ms = latency_ms;
        self.first_frame.get_or_insert(at);
        self.last_frame = Some(at);
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_latency_ms(&self) -> f64 {
        self.last_latency_ms
    }

    pub fn mean_latency_ms(&self) -> f64 {
        if self.frames == 0 {
            0.0
        } else {
            self.total_latency_ms / self.frames as f64
        }
    }

    /// Frame rate over the recorded span; 0 until two frames are in.
    pub fn fps(&self) -> f64 {
        let (Some(first), Some(last)) = (self.first_frame, self.last_frame) else {
            return 0.0;
        };
        let span = last.saturating_duration_since(first).as_secs_f64();
        if self.frames < 2 || span <= 0.0 {
            0.0
        } else {
            (self.frames - 1) as f64 / span
        }
    }

    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            frames: self.frames,
            last_latency_ms: self.last_latency_ms,
            mean_latency_ms: self.mean_latency_ms(),
            fps: self.fps(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::time::Duration;

    #[test]
    fn empty_metrics_are_zero() {
        let m = FrameMetrics::new();
        assert_eq!(m.summary(), MetricsSummary::default());
    }

    #[test]
    fn fps_counts_intervals_between_frames() {
        let mut m = FrameMetrics::new();
        let t0 = Instant::now();
        for i in 0..5u32 {
            m.record_at(t0 + Duration::from_millis(100 * i as u64), 2.0 + i as f64);
        }
        assert_eq!(m.frames(), 5);
        assert_abs_diff_eq!(m.fps(), 10.0, epsilon = 1e-6);
        assert_abs_diff_eq!(m.mean_latency_ms(), 4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(m.last_latency_ms(), 6.0, epsilon = 1e-9);
    }
}
