// Ant Stack, weights up to 1000.
//
// A 0-1 knapsack where every ant is worth one and the capacity is the total stack weight.
// The heaviest possible stack is an ant of WEIGHT_LIMIT carrying SUPPORT_FACTOR times that.
use super::{Arrangement, SUPPORT_FACTOR, run_cases};
use crate::{InputError, Scanner, Writer};

pub const WEIGHT_LIMIT: u64 = 1000;
pub const MAX_WEIGHT: usize = ((SUPPORT_FACTOR + 1) * WEIGHT_LIMIT) as usize;

pub fn solve(input: &mut Scanner, out: &mut Writer, arrangement: Arrangement) -> Result<(), InputError> {
    run_cases(input, out, WEIGHT_LIMIT, |weights| match arrangement {
        Arrangement::Subset => max_stack_size(weights),
        Arrangement::LineOrder => max_stack_size_in_line_order(weights),
    })
}

/// Largest stack from any subset of `weights`, in any order.
///
/// Only valid for weights up to WEIGHT_LIMIT: heavier ants would need more capacity than
/// the tally line has. Use `large::max_stack_size` for those.
pub fn max_stack_size(weights: &[u64]) -> usize {
    let mut sorted = weights.to_vec();
    sorted.sort_unstable();
    max_stack_size_in_line_order(&sorted)
}

/// Same as `max_stack_size`, keeping every ant below the ants before it in `weights`.
pub fn max_stack_size_in_line_order(weights: &[u64]) -> usize {
    debug_assert!(
        weights.iter().all(|&w| w <= WEIGHT_LIMIT),
        "small solver only supports weights up to {WEIGHT_LIMIT}"
    );

    // a tally line of the tallest stack weighing at most each capacity.
    let mut tally = vec![0usize; MAX_WEIGHT + 1];

    for &weight in weights {
        let weight = match usize::try_from(weight) {
            Ok(weight) if weight <= MAX_WEIGHT => weight,
            _ => continue,
        };
        let support = SUPPORT_FACTOR as usize * weight;

        // the new ant goes at the bottom: whatever sits above it may weigh no more than
        // what it carries nor more than the capacity left. Going back to front ensures
        // each ant is only counted once.
        for capacity in (weight..=MAX_WEIGHT).rev() {
            let above = support.min(capacity - weight);
            tally[capacity] = tally[capacity].max(tally[above] + 1);
        }
    }

    tally[MAX_WEIGHT]
}
