//! Sorting routines instrumented for animation.
//!
//! Every routine sorts the [`RunContext`] sequence ascending in place and
//! assumes its preconditions were checked by the caller. Divide-and-conquer
//! variants drive an explicit work stack instead of recursing, so stack depth
//! stays constant regardless of input size.

mod distribution;
mod exchange;
mod heap;
mod merge;
mod quick;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{AnimationScheduler, Result, RunContext, Sequence, SortVizError, Value};

/// Largest value counting sort accepts. Its bucket array holds `max + 1`
/// counters.
pub const MAX_COUNTING_VALUE: Value = 1_000_000;

/// Closed set of selectable sorting routines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmVariant {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Counting,
    Radix,
}

impl AlgorithmVariant {
    pub const ALL: [AlgorithmVariant; 8] = [
        Self::Bubble,
        Self::Selection,
        Self::Insertion,
        Self::Merge,
        Self::Quick,
        Self::Heap,
        Self::Counting,
        Self::Radix,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Merge => "merge",
            Self::Quick => "quick",
            Self::Heap => "heap",
            Self::Counting => "counting",
            Self::Radix => "radix",
        }
    }

    /// Counting and radix index buckets by value.
    pub fn requires_non_negative(self) -> bool {
        matches!(self, Self::Counting | Self::Radix)
    }

    /// Upper bound on values, for variants that allocate per value.
    pub fn value_limit(self) -> Option<Value> {
        match self {
            Self::Counting => Some(MAX_COUNTING_VALUE),
            _ => None,
        }
    }

    /// Rejects input this variant cannot structurally handle.
    pub fn check_preconditions(self, sequence: &Sequence) -> Result<()> {
        if self.requires_non_negative() {
            if let Some((index, value)) = sequence.first_negative() {
                return Err(SortVizError::NegativeValue {
                    algorithm: self,
                    index,
                    value,
                });
            }
        }
        if let Some(limit) = self.value_limit() {
            if let Some((index, value)) = sequence.first_above(limit) {
                return Err(SortVizError::ValueTooLarge {
                    algorithm: self,
                    index,
                    value,
                    limit,
                });
            }
        }
        Ok(())
    }

    /// Runs the routine bound to this variant to completion.
    pub async fn run<S: AnimationScheduler>(self, ctx: &mut RunContext<'_, S>) {
        match self {
            Self::Bubble => exchange::bubble(ctx).await,
            Self::Selection => exchange::selection(ctx).await,
            Self::Insertion => exchange::insertion(ctx).await,
            Self::Merge => merge::merge_sort(ctx).await,
            Self::Quick => quick::quick_sort(ctx).await,
            Self::Heap => heap::heap_sort(ctx).await,
            Self::Counting => distribution::counting(ctx).await,
            Self::Radix => distribution::radix(ctx).await,
        }
    }
}

impl fmt::Display for AlgorithmVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmVariant {
    type Err = SortVizError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_ascii_lowercase();
        let needle = needle.strip_suffix("sort").unwrap_or(&needle).trim_end();
        Self::ALL
            .into_iter()
            .find(|variant| variant.name() == needle)
            .ok_or_else(|| SortVizError::msg(format!("unknown sorting algorithm `{s}`")))
    }
}
