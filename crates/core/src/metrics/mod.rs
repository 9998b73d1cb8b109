use std::{
    fmt,
    time::{Duration, Instant},
};

use serde::{Deserialize, Serialize};

use crate::AlgorithmVariant;

/// Step counter and wall-clock timing for a single run.
#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    steps: u64,
    started: Option<Instant>,
    finished: Option<Instant>,
}

impl RunMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Counts one significant mutation and returns the new total.
    pub fn increment_step(&mut self) -> u64 {
        self.steps += 1;
        self.steps
    }

    pub fn current_step(&self) -> u64 {
        self.steps
    }

    pub fn start(&mut self) {
        self.started = Some(Instant::now());
        self.finished = None;
    }

    pub fn stop(&mut self) {
        self.finished = Some(Instant::now());
    }

    /// Time between `start` and `stop`, or up to now while the run is live.
    pub fn elapsed(&self) -> Duration {
        match (self.started, self.finished) {
            (Some(start), Some(end)) => end.saturating_duration_since(start),
            (Some(start), None) => start.elapsed(),
            _ => Duration::ZERO,
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1_000.0
    }
}

/// Final figures published once a run completes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub algorithm: AlgorithmVariant,
    pub elapsed_ms: f64,
    pub total_steps: u64,
}

impl RunReport {
    /// Elapsed time rendered with two decimal places, e.g. `12.34 ms`.
    pub fn runtime_label(&self) -> String {
        format!("{:.2} ms", self.elapsed_ms)
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} in {} steps",
            self.algorithm,
            self.runtime_label(),
            self.total_steps
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_steps_monotonically() {
        let mut metrics = RunMetrics::new();
        assert_eq!(metrics.increment_step(), 1);
        assert_eq!(metrics.increment_step(), 2);
        assert_eq!(metrics.current_step(), 2);

        metrics.reset();
        assert_eq!(metrics.current_step(), 0);
    }

    #[test]
    fn elapsed_is_zero_before_start_and_frozen_after_stop() {
        let mut metrics = RunMetrics::new();
        assert_eq!(metrics.elapsed(), Duration::ZERO);

        metrics.start();
        std::thread::sleep(Duration::from_millis(2));
        metrics.stop();
        let frozen = metrics.elapsed();
        assert!(frozen >= Duration::from_millis(2));
        assert_eq!(metrics.elapsed(), frozen);
    }

    #[test]
    fn report_formats_two_decimals() {
        let report = RunReport {
            algorithm: AlgorithmVariant::Merge,
            elapsed_ms: 3.14159,
            total_steps: 12,
        };
        assert_eq!(report.runtime_label(), "3.14 ms");
        assert_eq!(report.to_string(), "merge: 3.14 ms in 12 steps");
    }
}
