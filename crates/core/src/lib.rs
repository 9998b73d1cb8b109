//! Core library for the Sort Visualiser application.
//!
//! The crate runs classical sorting algorithms step by step so they can be
//! animated. Each algorithm mutates a [`Sequence`] through a [`RunContext`]
//! and reports significant mutations to two collaborators, a
//! [`RenderAdapter`] and a [`ChartAdapter`], pausing between events via an
//! [`AnimationScheduler`]. The [`RunController`] owns the sequence, enforces
//! that only one run is active, and publishes a [`RunReport`] once the sort
//! completes.

pub mod algorithms;
pub mod config;
pub mod controller;
pub mod error;
pub mod instrument;
pub mod metrics;
pub mod record;
pub mod render;
pub mod scheduler;
pub mod sequence;

pub use algorithms::{AlgorithmVariant, MAX_COUNTING_VALUE};
pub use config::{AnimationConfig, AppConfig, SequenceConfig};
pub use controller::{RunController, RunLock};
pub use error::{Result, SortVizError};
pub use instrument::{HighlightSet, RunContext};
pub use metrics::{RunMetrics, RunReport};
pub use record::{ChartAdapter, ChartHistory, NullChart};
pub use render::{Frame, FrameRecorder, NullRenderer, RenderAdapter, TerminalRenderer};
pub use scheduler::{AnimationScheduler, CountingScheduler, ImmediateScheduler, PacedScheduler};
pub use sequence::{Sequence, Value, DEFAULT_VALUE_RANGE};
