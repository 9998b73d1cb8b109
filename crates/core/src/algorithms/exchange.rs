//! Quadratic exchange sorts.

use crate::{AnimationScheduler, HighlightSet, RunContext};

/// Reports after each adjacent swap. Comparisons stay silent.
pub(super) async fn bubble<S: AnimationScheduler>(ctx: &mut RunContext<'_, S>) {
    let n = ctx.len();
    for pass in 0..n.saturating_sub(1) {
        for j in 0..n - pass - 1 {
            if ctx.get(j) > ctx.get(j + 1) {
                ctx.swap(j, j + 1);
                ctx.report_mutation(HighlightSet::pair(j, j + 1)).await;
            }
        }
    }
}

/// Reports once per pass, after the minimum is swapped into place.
pub(super) async fn selection<S: AnimationScheduler>(ctx: &mut RunContext<'_, S>) {
    let n = ctx.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            if ctx.get(j) < ctx.get(min) {
                min = j;
            }
        }

        if min != i {
            ctx.swap(i, min);
            ctx.report_mutation(HighlightSet::pair(i, min)).await;
        }
    }
}

/// Reports every one-slot shift to the right, then the key landing in its
/// final slot. A key already in place is never rewritten, so it produces no
/// event and sorted input reports zero steps.
pub(super) async fn insertion<S: AnimationScheduler>(ctx: &mut RunContext<'_, S>) {
    for i in 1..ctx.len() {
        let key = ctx.get(i);
        let mut j = i;
        while j > 0 && ctx.get(j - 1) > key {
            let shifted = ctx.get(j - 1);
            ctx.set(j, shifted);
            ctx.report_mutation(HighlightSet::pair(j - 1, j)).await;
            j -= 1;
        }

        if j != i {
            ctx.set(j, key);
            ctx.report_mutation(HighlightSet::single(j)).await;
        }
    }
}
