use std::{cell::Cell, future::Future, time::Duration};

/// Cooperative pacing primitive used between instrumentation events.
///
/// Implementations run on a single thread. A pacing `suspend` resolves no
/// earlier than `delay` and may let other pending tasks run meanwhile; test
/// schedulers are free to skip the wait.
pub trait AnimationScheduler {
    fn suspend(&self, delay: Duration) -> impl Future<Output = ()>;
}

/// Wall-clock scheduler backed by the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct PacedScheduler;

impl AnimationScheduler for PacedScheduler {
    async fn suspend(&self, delay: Duration) {
        if delay.is_zero() {
            // Still hand control back so concurrent tasks observe the yield point.
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Resolves immediately. Useful for exercising algorithms without real waits.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImmediateScheduler;

impl AnimationScheduler for ImmediateScheduler {
    async fn suspend(&self, _delay: Duration) {}
}

/// Records every suspension without waiting.
#[derive(Debug, Default)]
pub struct CountingScheduler {
    suspensions: Cell<u64>,
    requested: Cell<Duration>,
}

impl CountingScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn suspensions(&self) -> u64 {
        self.suspensions.get()
    }

    /// Sum of every delay that was asked for.
    pub fn requested(&self) -> Duration {
        self.requested.get()
    }
}

impl AnimationScheduler for CountingScheduler {
    async fn suspend(&self, delay: Duration) {
        self.suspensions.set(self.suspensions.get() + 1);
        self.requested.set(self.requested.get() + delay);
    }
}

impl<S: AnimationScheduler + ?Sized> AnimationScheduler for &S {
    async fn suspend(&self, delay: Duration) {
        (**self).suspend(delay).await;
    }
}
