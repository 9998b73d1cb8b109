use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Result, Value};

/// Chart collaborator. Receives one data point per counted mutation and keeps
/// history for the duration of a run.
pub trait ChartAdapter {
    fn plot(&mut self, snapshot: &[Value], step: u64);

    /// Clears the accumulated history ahead of a new run.
    fn reset(&mut self);
}

/// Line-chart model: an x-axis label per plotted step and the latest series of
/// values.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartHistory {
    steps: Vec<u64>,
    series: Vec<Value>,
}

impl ChartHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &[u64] {
        &self.steps
    }

    pub fn series(&self) -> &[Value] {
        &self.series
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Persists the chart as pretty-printed JSON.
    pub fn export_json(&self, path: &Path) -> Result<()> {
        let mut buf = self.to_json()?;
        buf.push('\n');
        fs::write(path, buf)?;
        Ok(())
    }
}

impl ChartAdapter for ChartHistory {
    fn plot(&mut self, snapshot: &[Value], step: u64) {
        self.steps.push(step);
        self.series.clear();
        self.series.extend_from_slice(snapshot);
    }

    fn reset(&mut self) {
        self.steps.clear();
        self.series.clear();
    }
}

/// Ignores every data point.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullChart;

impl ChartAdapter for NullChart {
    fn plot(&mut self, _snapshot: &[Value], _step: u64) {}

    fn reset(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_steps_and_keeps_latest_series() {
        let mut chart = ChartHistory::new();
        chart.plot(&[3, 1, 2], 1);
        chart.plot(&[1, 3, 2], 2);

        assert_eq!(chart.steps(), &[1, 2]);
        assert_eq!(chart.series(), &[1, 3, 2]);

        chart.reset();
        assert!(chart.is_empty());
        assert!(chart.series().is_empty());
    }

    #[test]
    fn exports_json_to_disk() {
        let mut chart = ChartHistory::new();
        chart.plot(&[5, 6], 1);

        let path = std::env::temp_dir().join(format!(
            "sort-visualiser-chart-{}.json",
            std::process::id()
        ));
        chart.export_json(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let _ = fs::remove_file(&path);
        let parsed: ChartHistory = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed, chart);
    }
}
