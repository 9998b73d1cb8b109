use crate::{AnimationScheduler, HighlightSet, RunContext};

/// Max-heap sort. Builds the heap from parent `n / 2 - 1` down to the root,
/// then repeatedly swaps the root behind the shrinking heap.
pub(super) async fn heap_sort<S: AnimationScheduler>(ctx: &mut RunContext<'_, S>) {
    let n = ctx.len();
    if n < 2 {
        return;
    }

    for root in (0..n / 2).rev() {
        sift_down(ctx, n, root).await;
    }

    for end in (1..n).rev() {
        ctx.swap(0, end);
        ctx.report_mutation(HighlightSet::pair(0, end)).await;
        sift_down(ctx, end, 0).await;
    }
}

/// Sinks `node` within the first `heap_len` slots, reporting each swap.
async fn sift_down<S: AnimationScheduler>(ctx: &mut RunContext<'_, S>, heap_len: usize, node: usize) {
    let mut node = node;
    loop {
        let mut largest = node;
        let left = 2 * node + 1;
        let right = left + 1;

        if left < heap_len && ctx.get(left) > ctx.get(largest) {
            largest = left;
        }
        if right < heap_len && ctx.get(right) > ctx.get(largest) {
            largest = right;
        }
        if largest == node {
            return;
        }

        ctx.swap(node, largest);
        ctx.report_mutation(HighlightSet::pair(node, largest)).await;
        node = largest;
    }
}
