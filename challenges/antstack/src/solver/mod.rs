// Ant Stack solvers
//
// An ant can carry at most SUPPORT_FACTOR times its own weight in ants stacked above it.

pub mod large;
pub mod small;

use std::time::Instant;

use log::debug;

use crate::{InputError, Scanner, TaskGroup, Writer};

pub const SUPPORT_FACTOR: u64 = 6;

/// How the candidate ants may be ordered inside a stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Arrangement {
    /// Any subset in any order: the input is a multiset of weights.
    #[default]
    Subset,
    /// Contest rules: an ant can only sit below ants that appear before it in the input line.
    LineOrder,
}

impl Arrangement {
    pub fn fixture_name(self) -> &'static str {
        match self {
            Arrangement::Subset => "subset",
            Arrangement::LineOrder => "ordered",
        }
    }
}

pub fn tasks() -> TaskGroup {
    TaskGroup::new("ant_stack")
        .add("large", large::solve)
        .add("small", small::solve)
}

/// Reads `T` test cases of the form `N` / `w1 .. wN` and prints `Case #n: result` for each.
///
/// Weights above `weight_limit` are rejected before `solve` sees them.
pub(crate) fn run_cases<F>(
    input: &mut Scanner,
    out: &mut Writer,
    weight_limit: u64,
    mut solve: F,
) -> Result<(), InputError>
where
    F: FnMut(&[u64]) -> usize,
{
    let test_count: usize = input.parse()?;

    for case in 1..=test_count {
        let weights = read_weights(input, case, weight_limit)?;

        let start = Instant::now();
        let result = solve(&weights);
        debug!(
            "case #{case}: {} ants, stack of {result} ({:?})",
            weights.len(),
            start.elapsed()
        );

        out.println(format_args!("Case #{case}: {result}"));
    }

    Ok(())
}

fn read_weights(input: &mut Scanner, case: usize, limit: u64) -> Result<Vec<u64>, InputError> {
    let expected: usize = input.parse()?;
    if expected == 0 {
        return Ok(Vec::new());
    }

    // wide and signed, so negative or oversized weights are reported as such rather than as bad tokens
    let raw: Vec<i128> = input.parse_vec()?;
    if raw.len() != expected {
        return Err(InputError::CountMismatch {
            case,
            expected,
            found: raw.len(),
        });
    }

    raw.into_iter()
        .map(|weight| {
            if weight <= 0 {
                return Err(InputError::NonPositiveWeight { case });
            }
            match u64::try_from(weight) {
                Ok(weight) if weight <= limit => Ok(weight),
                _ => Err(InputError::WeightOutOfRange {
                    case,
                    weight: weight.unsigned_abs(),
                    limit,
                }),
            }
        })
        .collect()
}
