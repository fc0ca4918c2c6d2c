use std::collections::BTreeSet;

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 2, tags = ["ranges", "number-theory"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<(u64, u64)>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .split(',')
            .map(str::trim)
            .filter(|range| !range.is_empty())
            .map(|range| -> Result<(u64, u64), anyhow::Error> {
                let (start, end) = range
                    .split_once('-')
                    .ok_or_else(|| anyhow!("expected 'start-end', found {range:?}"))?;
                let start = start.parse().with_context(|| format!("bad start {start:?}"))?;
                let end = end.parse().with_context(|| format!("bad end {end:?}"))?;
                Ok((start, end))
            })
            .enumerate()
            .map(|(idx, res)| res.map_err(|e| anyhow!("(range {}) {:#}", idx + 1, e)))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_repeated(shared, |digits| {
            (digits % 2 == 0).then_some(digits / 2).into_iter().collect()
        })
        .to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_repeated(shared, |digits| {
            (1..digits).filter(|block| digits % block == 0).collect()
        })
        .to_string())
    }
}

/// Sum of every ID in the ranges that is a digit block repeated.
///
/// `block_lengths` gives, for an ID with that many digits, the block lengths
/// to try. An ID is counted once per range even when several block lengths
/// produce it (`1111` is both `1` x 4 and `11` x 2).
fn sum_repeated(ranges: &[(u64, u64)], block_lengths: impl Fn(u32) -> Vec<u32>) -> u64 {
    ranges
        .iter()
        .map(|&(start, end)| {
            let mut found = BTreeSet::new();
            for digits in digit_count(start)..=digit_count(end) {
                // Clip the range to IDs with exactly `digits` digits
                let lo = start.max(pow10(digits - 1));
                let hi = end.min(pow10(digits).saturating_sub(1));
                if lo > hi {
                    continue;
                }
                for block in block_lengths(digits) {
                    found.extend(repeats_in(lo, hi, digits, block));
                }
            }
            found.into_iter().sum::<u64>()
        })
        .sum()
}

/// IDs in `lo..=hi` (all `digits` long) made of one `block`-digit chunk
/// repeated `digits / block` times.
///
/// Such an ID is `chunk * (1 + 10^block + 10^(2 * block) + ...)`, so the
/// candidate chunks form a contiguous range.
fn repeats_in(lo: u64, hi: u64, digits: u32, block: u32) -> impl Iterator<Item = u64> {
    let multiplier = (0..digits / block).fold(0u64, |acc, _| acc * pow10(block) + 1);
    let first = lo.div_ceil(multiplier).max(pow10(block - 1));
    let last = (hi / multiplier).min(pow10(block) - 1);
    (first..=last).map(move |chunk| chunk * multiplier)
}

fn digit_count(n: u64) -> u32 {
    n.checked_ilog10().map_or(1, |log| log + 1)
}

fn pow10(exp: u32) -> u64 {
    10u64.saturating_pow(exp)
}
