use std::ops::Range;

use crate::{AnimationScheduler, HighlightSet, RunContext};

/// Quick sort with Lomuto partitioning, pivot = last element of the range.
/// Ranges are processed left before right, matching the recursive order.
pub(super) async fn quick_sort<S: AnimationScheduler>(ctx: &mut RunContext<'_, S>) {
    let mut stack: Vec<Range<usize>> = vec![0..ctx.len()];

    while let Some(range) = stack.pop() {
        if range.len() < 2 {
            continue;
        }
        let pivot = partition(ctx, range.clone()).await;
        stack.push(pivot + 1..range.end);
        stack.push(range.start..pivot);
    }
}

/// Returns the final resting index of the pivot. Every swap is reported,
/// including swaps of an element with itself.
async fn partition<S: AnimationScheduler>(ctx: &mut RunContext<'_, S>, range: Range<usize>) -> usize {
    let high = range.end - 1;
    let pivot = ctx.get(high);
    let mut store = range.start;

    for j in range.start..high {
        if ctx.get(j) < pivot {
            ctx.swap(store, j);
            ctx.report_mutation(HighlightSet::pair(store, j)).await;
            store += 1;
        }
    }

    ctx.swap(store, high);
    ctx.report_mutation(HighlightSet::pair(store, high)).await;
    store
}
