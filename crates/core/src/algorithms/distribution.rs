//! Non-comparison sorts over non-negative integers.
//!
//! Both run as bulk passes and stay silent unless the context enables visual
//! parity, in which case counting sort reports each placement and radix sort
//! reports each completed digit pass.

use crate::{AnimationScheduler, HighlightSet, RunContext, Value};

const RADIX: usize = 10;

fn bucket(value: Value) -> usize {
    usize::try_from(value).expect("distribution sorts require non-negative values")
}

fn digit(value: Value, exp: Value) -> usize {
    bucket((value / exp) % RADIX as Value)
}

/// Counting sort with one bucket per value in `0..=max`. The caller keeps
/// `max` within [`MAX_COUNTING_VALUE`](super::MAX_COUNTING_VALUE).
pub(super) async fn counting<S: AnimationScheduler>(ctx: &mut RunContext<'_, S>) {
    let Some(max) = ctx.max_value().filter(|_| ctx.len() >= 2) else {
        return;
    };

    let mut counts = vec![0usize; bucket(max) + 1];
    for &value in ctx.values() {
        counts[bucket(value)] += 1;
    }

    let mut k = 0;
    for (value, &count) in counts.iter().enumerate() {
        for _ in 0..count {
            ctx.set(k, value as Value);
            if ctx.visual_parity() {
                ctx.report_mutation(HighlightSet::single(k)).await;
            }
            k += 1;
        }
    }
}

/// LSD radix sort in base ten. Each pass is a stable counting sort on one
/// digit, filled back-to-front from prefix sums.
pub(super) async fn radix<S: AnimationScheduler>(ctx: &mut RunContext<'_, S>) {
    let Some(max) = ctx.max_value().filter(|_| ctx.len() >= 2) else {
        return;
    };

    let mut output: Vec<Value> = vec![0; ctx.len()];
    let mut exp: Value = 1;

    while max / exp > 0 {
        let mut counts = [0usize; RADIX];
        for &value in ctx.values() {
            counts[digit(value, exp)] += 1;
        }
        for d in 1..RADIX {
            counts[d] += counts[d - 1];
        }
        for &value in ctx.values().iter().rev() {
            let d = digit(value, exp);
            counts[d] -= 1;
            output[counts[d]] = value;
        }
        ctx.values_mut().copy_from_slice(&output);

        if ctx.visual_parity() {
            ctx.report_mutation(HighlightSet::none()).await;
        }

        exp = match exp.checked_mul(RADIX as Value) {
            Some(next) => next,
            None => break,
        };
    }
}

#[cfg(test)]
mod tests {
    use crate::algorithms::test_support::{trace, trace_with};
    use crate::AlgorithmVariant;

    #[tokio::test]
    async fn counting_sort_is_silent_by_default() {
        let result = trace(AlgorithmVariant::Counting, &[3, 0, 2, 0, 1]).await;

        assert_eq!(result.sorted, vec![0, 0, 1, 2, 3]);
        assert_eq!(result.steps, 0);
        assert!(result.frames.frames().is_empty());
        assert!(result.chart.is_empty());
    }

    #[tokio::test]
    async fn counting_sort_reports_placements_with_parity() {
        let result = trace_with(AlgorithmVariant::Counting, &[3, 0, 2, 0, 1], true).await;

        assert_eq!(result.steps, 5);
        assert_eq!(result.frames.frames()[0].values, vec![0, 0, 2, 0, 1]);
        assert_eq!(result.frames.frames()[4].values, vec![0, 0, 1, 2, 3]);
    }

    #[tokio::test]
    async fn radix_sort_runs_one_pass_per_digit() {
        let input = [170, 45, 75, 90, 802, 24, 2, 66];

        let silent = trace(AlgorithmVariant::Radix, &input).await;
        assert_eq!(silent.sorted, vec![2, 24, 45, 66, 75, 90, 170, 802]);
        assert_eq!(silent.steps, 0);

        let visible = trace_with(AlgorithmVariant::Radix, &input, true).await;
        let frames = visible.frames.frames();
        assert_eq!(visible.steps, 3);
        // ones digit pass keeps 170 ahead of 90 and 802 ahead of 2
        assert_eq!(frames[0].values, vec![170, 90, 802, 2, 24, 45, 75, 66]);
        assert_eq!(frames[1].values, vec![802, 2, 24, 45, 66, 170, 75, 90]);
    }

    #[tokio::test]
    async fn radix_sort_of_all_zeroes_makes_no_pass() {
        let result = trace_with(AlgorithmVariant::Radix, &[0, 0, 0], true).await;
        assert_eq!(result.sorted, vec![0, 0, 0]);
        assert_eq!(result.steps, 0);
    }
}
