use std::{
    cell::{Cell, RefCell},
    ops::RangeInclusive,
    time::Duration,
};

use rand::Rng;
use tracing::{debug, info};

use crate::{
    AlgorithmVariant, AnimationScheduler, ChartAdapter, HighlightSet, RenderAdapter, Result,
    RunContext, RunMetrics, RunReport, Sequence, SortVizError, Value, DEFAULT_VALUE_RANGE,
};

/// Whether a run currently holds mutation rights over the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunLock {
    Idle,
    Running,
}

/// State handed to a run for its whole duration.
#[derive(Debug)]
struct Stage<R, C> {
    sequence: Sequence,
    metrics: RunMetrics,
    renderer: R,
    chart: C,
}

/// Owns the sequence and collaborators, and drives one sorting run at a time.
///
/// All methods take `&self` so the controller can be shared between tasks on a
/// single-threaded runtime. While a run is in flight the stage is moved out
/// and the lock reads [`RunLock::Running`]; every other mutating call is
/// refused with [`SortVizError::ConcurrentRun`].
#[derive(Debug)]
pub struct RunController<S, R, C> {
    scheduler: S,
    delay: Cell<Duration>,
    visual_parity: Cell<bool>,
    value_range: RangeInclusive<Value>,
    lock: Cell<RunLock>,
    stage: RefCell<Option<Stage<R, C>>>,
    last_report: Cell<Option<RunReport>>,
}

impl<S, R, C> RunController<S, R, C>
where
    S: AnimationScheduler,
    R: RenderAdapter,
    C: ChartAdapter,
{
    pub fn new(scheduler: S, renderer: R, chart: C, sequence: Sequence) -> Self {
        Self {
            scheduler,
            delay: Cell::new(Duration::ZERO),
            visual_parity: Cell::new(false),
            value_range: DEFAULT_VALUE_RANGE,
            lock: Cell::new(RunLock::Idle),
            stage: RefCell::new(Some(Stage {
                sequence,
                metrics: RunMetrics::new(),
                renderer,
                chart,
            })),
            last_report: Cell::new(None),
        }
    }

    /// Range used by [`regenerate`](Self::regenerate).
    pub fn with_value_range(mut self, range: RangeInclusive<Value>) -> Self {
        self.value_range = range;
        self
    }

    /// Per-mutation delay. Takes effect from the next run.
    pub fn set_delay(&self, delay: Duration) {
        self.delay.set(delay);
    }

    /// Enables events from counting and radix sort. Takes effect from the next run.
    pub fn set_visual_parity(&self, enabled: bool) {
        self.visual_parity.set(enabled);
    }

    pub fn lock_state(&self) -> RunLock {
        self.lock.get()
    }

    pub fn last_report(&self) -> Option<RunReport> {
        self.last_report.get()
    }

    /// Copy of the current sequence.
    pub fn snapshot(&self) -> Result<Vec<Value>> {
        self.with_stage(|stage| stage.sequence.values().to_vec())
    }

    /// Gives read access to both collaborators while idle.
    pub fn with_collaborators<T>(&self, f: impl FnOnce(&R, &C) -> T) -> Result<T> {
        self.with_stage(|stage| f(&stage.renderer, &stage.chart))
    }

    /// Replaces the sequence with `size` fresh random values.
    pub fn regenerate<G: Rng + ?Sized>(&self, size: usize, rng: &mut G) -> Result<()> {
        self.with_stage_mut(|stage| {
            stage.sequence = Sequence::random(size, self.value_range.clone(), rng)?;
            stage.present();
            Ok(())
        })?
    }

    /// Shuffles the existing values in place.
    pub fn shuffle<G: Rng + ?Sized>(&self, rng: &mut G) -> Result<()> {
        self.with_stage_mut(|stage| {
            stage.sequence.shuffle(rng);
            stage.present();
        })
    }

    /// Replaces the sequence with caller-provided values.
    pub fn load(&self, values: Vec<Value>) -> Result<()> {
        if values.is_empty() {
            return Err(SortVizError::InvalidSize { requested: 0 });
        }
        self.with_stage_mut(|stage| {
            stage.sequence = Sequence::from(values);
            stage.present();
        })
    }

    /// Sorts the sequence with `variant`, pacing every reported mutation.
    ///
    /// Fails with [`SortVizError::ConcurrentRun`] if another run is active
    /// and with [`SortVizError::NegativeValue`] or
    /// [`SortVizError::ValueTooLarge`] if `variant` cannot accept the current
    /// values. None of these failures touches the sequence.
    pub async fn start_run(&self, variant: AlgorithmVariant) -> Result<RunReport> {
        if self.lock.get() == RunLock::Running {
            debug!(%variant, "refusing overlapping run");
            return Err(SortVizError::ConcurrentRun);
        }

        self.with_stage(|stage| variant.check_preconditions(&stage.sequence))?
            .inspect_err(|err| debug!(%variant, %err, "precondition failed"))?;

        let mut guard = RunGuard::acquire(self)?;
        let delay = self.delay.get();
        let stage = guard.stage();

        stage.metrics.reset();
        stage.renderer.reset();
        stage.chart.reset();
        info!(
            %variant,
            size = stage.sequence.len(),
            delay_ms = delay.as_millis() as u64,
            "starting run"
        );

        stage.metrics.start();
        {
            let mut ctx = RunContext::new(
                &mut stage.sequence,
                &mut stage.metrics,
                &mut stage.renderer,
                &mut stage.chart,
                &self.scheduler,
                delay,
            )
            .with_visual_parity(self.visual_parity.get());
            variant.run(&mut ctx).await;
        }
        stage.metrics.stop();

        let report = RunReport {
            algorithm: variant,
            elapsed_ms: stage.metrics.elapsed_ms(),
            total_steps: stage.metrics.current_step(),
        };
        debug_assert!(stage.sequence.is_sorted());
        info!(
            %variant,
            steps = report.total_steps,
            elapsed = %report.runtime_label(),
            "run finished"
        );

        self.last_report.set(Some(report));
        Ok(report)
    }

    fn with_stage<T>(&self, f: impl FnOnce(&Stage<R, C>) -> T) -> Result<T> {
        let slot = self.stage.borrow();
        let stage = slot.as_ref().ok_or(SortVizError::ConcurrentRun)?;
        Ok(f(stage))
    }

    fn with_stage_mut<T>(&self, f: impl FnOnce(&mut Stage<R, C>) -> T) -> Result<T> {
        let mut slot = self.stage.borrow_mut();
        let stage = slot.as_mut().ok_or(SortVizError::ConcurrentRun)?;
        Ok(f(stage))
    }
}

impl<R: RenderAdapter, C: ChartAdapter> Stage<R, C> {
    /// Shows a freshly prepared sequence and clears stale chart history.
    fn present(&mut self) {
        self.renderer.render(self.sequence.values(), HighlightSet::none());
        self.chart.reset();
    }
}

/// Holds the stage for the duration of a run. Dropping it, including when the
/// run future is dropped mid-flight, hands the stage back and unlocks.
struct RunGuard<'a, R, C> {
    lock: &'a Cell<RunLock>,
    slot: &'a RefCell<Option<Stage<R, C>>>,
    stage: Option<Stage<R, C>>,
}

impl<'a, R, C> RunGuard<'a, R, C> {
    fn acquire<S>(controller: &'a RunController<S, R, C>) -> Result<Self> {
        let stage = controller
            .stage
            .borrow_mut()
            .take()
            .ok_or(SortVizError::ConcurrentRun)?;
        controller.lock.set(RunLock::Running);

        Ok(Self {
            lock: &controller.lock,
            slot: &controller.stage,
            stage: Some(stage),
        })
    }

    fn stage(&mut self) -> &mut Stage<R, C> {
        self.stage
            .as_mut()
            .expect("stage is held until the guard drops")
    }
}

impl<R, C> Drop for RunGuard<'_, R, C> {
    fn drop(&mut self) {
        if let Some(stage) = self.stage.take() {
            *self.slot.borrow_mut() = Some(stage);
        }
        self.lock.set(RunLock::Idle);
    }
}
