use crate::{AnimationScheduler, HighlightSet, RunContext, Value};

/// Pending work for the top-down merge sort. Ranges are inclusive.
enum Task {
    Split { lo: usize, hi: usize },
    Merge { lo: usize, mid: usize, hi: usize },
}

/// Top-down merge sort. The explicit stack replays the recursive order: left
/// half, right half, then the merge of both.
pub(super) async fn merge_sort<S: AnimationScheduler>(ctx: &mut RunContext<'_, S>) {
    if ctx.len() < 2 {
        return;
    }

    let mut stack = vec![Task::Split {
        lo: 0,
        hi: ctx.len() - 1,
    }];

    while let Some(task) = stack.pop() {
        match task {
            Task::Split { lo, hi } => {
                if lo >= hi {
                    continue;
                }
                let mid = lo + (hi - lo) / 2;
                stack.push(Task::Merge { lo, mid, hi });
                stack.push(Task::Split { lo: mid + 1, hi });
                stack.push(Task::Split { lo, hi: mid });
            }
            Task::Merge { lo, mid, hi } => merge(ctx, lo, mid, hi).await,
        }
    }
}

/// Stable merge of `[lo, mid]` and `[mid + 1, hi]`. Ties take the left value.
/// Every placement is reported, including the drained tails.
async fn merge<S: AnimationScheduler>(ctx: &mut RunContext<'_, S>, lo: usize, mid: usize, hi: usize) {
    let left: Vec<Value> = ctx.values()[lo..=mid].to_vec();
    let right: Vec<Value> = ctx.values()[mid + 1..=hi].to_vec();

    let (mut i, mut j, mut k) = (0, 0, lo);

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            ctx.set(k, left[i]);
            i += 1;
        } else {
            ctx.set(k, right[j]);
            j += 1;
        }
        ctx.report_mutation(HighlightSet::single(k)).await;
        k += 1;
    }

    for &value in left[i..].iter().chain(&right[j..]) {
        ctx.set(k, value);
        ctx.report_mutation(HighlightSet::single(k)).await;
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use crate::algorithms::test_support::trace;
    use crate::{AlgorithmVariant, HighlightSet};

    /// Placements performed by a top-down merge over `n` elements.
    fn placements(n: usize) -> u64 {
        if n < 2 {
            return 0;
        }
        let left = (n - 1) / 2 + 1;
        placements(left) + placements(n - left) + n as u64
    }

    #[tokio::test]
    async fn sorted_input_still_reports_every_placement() {
        for n in [2usize, 3, 7, 16, 33] {
            let input: Vec<i64> = (0..n as i64).collect();
            let result = trace(AlgorithmVariant::Merge, &input).await;

            assert_eq!(result.sorted, input);
            assert!(result.steps > 0);
            assert_eq!(result.steps, placements(n), "n = {n}");
        }
    }

    #[tokio::test]
    async fn merges_follow_recursive_order() {
        let result = trace(AlgorithmVariant::Merge, &[4, 3, 2, 1]).await;
        let highlights: Vec<HighlightSet> = result
            .frames
            .frames()
            .iter()
            .map(|frame| frame.highlight)
            .collect();

        // merge [0,1], merge [2,3], then merge [0,3]
        assert_eq!(result.frames.frames()[1].values, vec![3, 4, 2, 1]);
        assert_eq!(result.frames.frames()[3].values, vec![3, 4, 1, 2]);
        assert_eq!(
            highlights,
            [0, 1, 2, 3, 0, 1, 2, 3].map(HighlightSet::single).to_vec()
        );
        assert_eq!(result.sorted, vec![1, 2, 3, 4]);
    }
}
