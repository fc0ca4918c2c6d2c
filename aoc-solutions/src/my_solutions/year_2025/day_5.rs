use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 5, tags = ["ranges"])]
pub struct Solver;

#[derive(Debug)]
pub struct Inventory {
    /// Fresh ranges, sorted and merged so no two overlap or touch.
    fresh: Vec<(u64, u64)>,
    available: Vec<u64>,
}

impl Inventory {
    fn is_fresh(&self, id: u64) -> bool {
        // First range that ends at or after `id`
        let idx = self.fresh.partition_point(|&(_, end)| end < id);
        self.fresh.get(idx).is_some_and(|&(start, _)| start <= id)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Inventory;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines = input.lines().map(str::trim).enumerate();

        let mut ranges = Vec::new();
        for (idx, line) in lines.by_ref() {
            if line.is_empty() {
                break;
            }
            let range = parse_range(line)
                .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {:#}", idx + 1, e)))?;
            ranges.push(range);
        }

        let available = lines
            .filter(|(_, line)| !line.is_empty())
            .map(|(idx, line)| {
                line.parse::<u64>()
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", idx + 1, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Inventory {
            fresh: merge_ranges(ranges),
            available,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let fresh = shared
            .available
            .iter()
            .filter(|&&id| shared.is_fresh(id))
            .count();
        Ok(fresh.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared.fresh.iter().map(|&(start, end)| end - start + 1).sum();
        Ok(total.to_string())
    }
}

fn parse_range(line: &str) -> Result<(u64, u64), anyhow::Error> {
    let (start, end) = line
        .split_once('-')
        .ok_or_else(|| anyhow!("expected 'start-end', found {line:?}"))?;
    let start: u64 = start.parse().with_context(|| format!("bad start {start:?}"))?;
    let end: u64 = end.parse().with_context(|| format!("bad end {end:?}"))?;
    if start > end {
        return Err(anyhow!("range {start}-{end} is reversed"));
    }
    Ok((start, end))
}

/// Sort, then fold overlapping or adjacent ranges together.
fn merge_ranges(mut ranges: Vec<(u64, u64)>) -> Vec<(u64, u64)> {
    ranges.sort_unstable();
    let mut merged: Vec<(u64, u64)> = Vec::with_capacity(ranges.len());
    for (start, end) in ranges {
        match merged.last_mut() {
            Some((_, last_end)) if start <= last_end.saturating_add(1) => {
                *last_end = (*last_end).max(end);
            }
            _ => merged.push((start, end)),
        }
    }
    merged
}
