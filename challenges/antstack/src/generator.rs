// Lightest possible ant stack, given an unlimited supply of every weight.
//
// Each new ant goes under the stack built so far and is as light as it may be while still
// carrying it. The length of the result for the contest weight limit is `large::MAX_ANTS`.
use crate::solver::SUPPORT_FACTOR;

/// Weights of the lightest stack from top to bottom, stopping before an ant would outweigh `max_weight`.
pub fn lightest_stack(max_weight: u64) -> Vec<u64> {
    let mut stack = Vec::new();
    let mut total: u64 = 0;

    loop {
        let next = total.div_ceil(SUPPORT_FACTOR).max(1);
        if next > max_weight {
            break;
        }
        let Some(new_total) = total.checked_add(next) else {
            break;
        };
        stack.push(next);
        total = new_total;
    }

    stack
}
