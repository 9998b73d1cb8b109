use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{AnimationScheduler, ChartAdapter, RenderAdapter, RunMetrics, Sequence, Value};

/// Positions involved in the current mutation. Holds at most two indices and
/// is rebuilt for every event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HighlightSet {
    slots: [Option<usize>; 2],
}

impl HighlightSet {
    pub const fn none() -> Self {
        Self { slots: [None, None] }
    }

    pub const fn single(index: usize) -> Self {
        Self {
            slots: [Some(index), None],
        }
    }

    /// Two positions. A pair of equal indices collapses into one.
    pub const fn pair(a: usize, b: usize) -> Self {
        if a == b {
            Self::single(a)
        } else {
            Self {
                slots: [Some(a), Some(b)],
            }
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.slots.contains(&Some(index))
    }

    pub fn is_empty(&self) -> bool {
        self.slots[0].is_none()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots.iter().flatten().copied()
    }
}

/// Everything one run is allowed to touch: the sequence, its metrics, the two
/// collaborators and the pacing configuration.
///
/// Algorithms read and write the sequence through this context and call
/// [`report_mutation`](Self::report_mutation) or
/// [`yield_for_comparison`](Self::yield_for_comparison) at their yield points.
/// Those two methods are the only places a run suspends.
pub struct RunContext<'a, S: AnimationScheduler> {
    sequence: &'a mut Sequence,
    metrics: &'a mut RunMetrics,
    renderer: &'a mut dyn RenderAdapter,
    chart: &'a mut dyn ChartAdapter,
    scheduler: &'a S,
    delay: Duration,
    visual_parity: bool,
}

impl<'a, S: AnimationScheduler> RunContext<'a, S> {
    pub fn new(
        sequence: &'a mut Sequence,
        metrics: &'a mut RunMetrics,
        renderer: &'a mut dyn RenderAdapter,
        chart: &'a mut dyn ChartAdapter,
        scheduler: &'a S,
        delay: Duration,
    ) -> Self {
        Self {
            sequence,
            metrics,
            renderer,
            chart,
            scheduler,
            delay,
            visual_parity: false,
        }
    }

    /// Lets the bulk distribution sorts emit events as well.
    pub fn with_visual_parity(mut self, enabled: bool) -> Self {
        self.visual_parity = enabled;
        self
    }

    pub fn visual_parity(&self) -> bool {
        self.visual_parity
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn get(&self, index: usize) -> Value {
        self.sequence.get(index)
    }

    pub fn set(&mut self, index: usize, value: Value) {
        self.sequence.set(index, value);
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.sequence.swap(a, b);
    }

    pub fn values(&self) -> &[Value] {
        self.sequence.values()
    }

    pub(crate) fn values_mut(&mut self) -> &mut [Value] {
        self.sequence.values_mut()
    }

    pub fn max_value(&self) -> Option<Value> {
        self.sequence.max_value()
    }

    /// Counts one significant mutation, publishes it to both collaborators and
    /// suspends for the configured delay.
    pub async fn report_mutation(&mut self, highlight: HighlightSet) {
        let step = self.metrics.increment_step();
        tracing::trace!(step, ?highlight, "mutation");

        let snapshot = self.sequence.values();
        self.renderer.render(snapshot, highlight);
        self.chart.plot(snapshot, step);
        self.scheduler.suspend(self.delay).await;
    }

    /// Shows a comparison without counting it.
    pub async fn yield_for_comparison(&mut self, highlight: HighlightSet) {
        tracing::trace!(?highlight, "comparison");

        self.renderer.render(self.sequence.values(), highlight);
        self.scheduler.suspend(self.delay).await;
    }
}
