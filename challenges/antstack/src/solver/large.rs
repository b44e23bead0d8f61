// Ant Stack, unbounded weights.
//
// No valid stack of ants weighing at most WEIGHT_LIMIT can hold more than MAX_ANTS ants
// (see `generator::lightest_stack`), so the table is keyed by stack size instead of weight.
use super::{Arrangement, SUPPORT_FACTOR, run_cases};
use crate::{InputError, Scanner, Writer};

pub const MAX_ANTS: usize = 139;
pub const WEIGHT_LIMIT: u64 = 1_000_000_000;

pub fn solve(input: &mut Scanner, out: &mut Writer, arrangement: Arrangement) -> Result<(), InputError> {
    run_cases(input, out, WEIGHT_LIMIT, |weights| match arrangement {
        Arrangement::Subset => max_stack_size(weights),
        Arrangement::LineOrder => max_stack_size_in_line_order(weights),
    })
}

/// Largest stack that can be built from any subset of `weights`, in any order.
///
/// Putting the lighter of two neighbouring ants on top never breaks a valid stack,
/// so offering the candidates lightest first covers every useful order.
pub fn max_stack_size(weights: &[u64]) -> usize {
    let mut sorted = weights.to_vec();
    sorted.sort_unstable();
    max_stack_size_in_line_order(&sorted)
}

/// Largest stack where every ant sits below all the ants that precede it in `weights`.
pub fn max_stack_size_in_line_order(weights: &[u64]) -> usize {
    // lightest[size] is the minimum total weight of a stack of exactly `size` ants built
    // from the candidates seen so far, None while no such stack exists.
    let mut lightest: [Option<u64>; MAX_ANTS + 1] = [None; MAX_ANTS + 1];
    lightest[0] = Some(0);

    for &weight in weights {
        let support = weight.saturating_mul(SUPPORT_FACTOR);

        // back to front, so `lightest[size - 1]` still excludes the current ant.
        for size in (1..=MAX_ANTS).rev() {
            let Some(above) = lightest[size - 1] else {
                continue;
            };
            if above <= support {
                let candidate = above.saturating_add(weight);
                lightest[size] = Some(lightest[size].map_or(candidate, |best| best.min(candidate)));
            }
        }
    }

    lightest.iter().rposition(Option::is_some).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::lightest_stack;
    use crate::testing;
    use rstest::rstest;
    use std::path::Path;

    #[rstest]
    #[case(&[1, 1, 1, 1, 1, 1, 1], 7)]
    #[case(&[1, 100], 2)]
    #[case(&[100, 1], 2)]
    #[case(&[100], 1)]
    #[case(&[], 0)]
    #[case(&[9, 1], 2)]
    #[case(&[1, 1, 1, 1, 1, 1, 1, 1], 7)]
    #[case(&[5, 3, 1, 2, 4], 5)]
    #[case(&[1000, 1, 1, 1, 1, 1, 1, 1, 1], 8)]
    fn test_subset(#[case] weights: &[u64], #[case] expected: usize) {
        assert_eq!(max_stack_size(weights), expected);
    }

    // samples from the contest statement
    #[rstest]
    #[case(&[9, 1], 1)]
    #[case(&[8, 4, 100], 3)]
    #[case(&[10, 10, 10, 10, 10, 10, 10, 10, 100], 8)]
    #[case(&[100, 1], 1)]
    #[case(&[5, 3, 1, 2, 4], 4)]
    fn test_line_order(#[case] weights: &[u64], #[case] expected: usize) {
        assert_eq!(max_stack_size_in_line_order(weights), expected);
    }

    #[test]
    fn test_single_ant() {
        for weight in [1, 6, 7, 999, WEIGHT_LIMIT] {
            assert_eq!(max_stack_size(&[weight]), 1);
        }
    }

    #[test]
    fn test_permutation_invariant() {
        let weights: Vec<u64> = (1..=40u64).map(|i| (i * 7919) % 251 + 1).collect();
        let expected = max_stack_size(&weights);

        let mut reversed = weights.clone();
        reversed.reverse();
        assert_eq!(max_stack_size(&reversed), expected);

        for shift in [1, 13, 29] {
            let mut rotated = weights.clone();
            rotated.rotate_left(shift);
            assert_eq!(max_stack_size(&rotated), expected);
        }
    }

    #[test]
    fn test_appending_never_shrinks() {
        let weights: Vec<u64> = (1..=60u64).map(|i| (i * 104_729) % 997 + 1).collect();
        let mut previous = 0;
        for end in 0..=weights.len() {
            let current = max_stack_size(&weights[..end]);
            assert!(current >= previous, "prefix of {end} shrank to {current}");
            assert!(current <= MAX_ANTS);
            previous = current;
        }
        assert!(previous >= 1);
    }

    #[test]
    fn test_lightest_stack_reaches_bound() {
        let stack = lightest_stack(WEIGHT_LIMIT);
        assert_eq!(max_stack_size_in_line_order(&stack), MAX_ANTS);

        // heaviest first in line: only the seven weight-1 ants at the end can stack
        let mut upside_down = stack.clone();
        upside_down.reverse();
        assert_eq!(max_stack_size_in_line_order(&upside_down), 7);
        assert_eq!(max_stack_size(&upside_down), MAX_ANTS);
    }

    #[test]
    fn test_fixtures() {
        testing::verify_all_tests(Path::new("data"), "ant_stack", solve);
    }
}
