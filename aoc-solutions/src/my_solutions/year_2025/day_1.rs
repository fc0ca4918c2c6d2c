use std::str::FromStr;

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

const DIAL_SIZE: i32 = 100;
const DIAL_START: i32 = 50;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 1, tags = ["dial", "simulation"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    rotations: Vec<i32>,
    common_result: Option<CommonResult>,
}

#[derive(Debug)]
pub struct CommonResult {
    zero_counts: u32,
    pass_zero_counts: u32,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .map(|line| -> Result<i32, anyhow::Error> {
                let line = line.trim();
                let negative = match line.as_bytes().first() {
                    Some(b'L') => true,
                    Some(b'R') => false,
                    _ => return Err(anyhow!("first character need to be 'L' or 'R'")),
                };

                let distance = <u32 as FromStr>::from_str(&line[1..])?;
                let distance = i32::try_from(distance)?;
                Ok(if negative { -distance } else { distance })
            })
            .enumerate()
            .map(|(line_idx, res)| res.map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e)))
            .collect::<Result<Vec<_>, _>>()
            .map(|rotations| SharedData {
                rotations,
                common_result: None,
            })
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_once_for_both(shared).zero_counts.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_once_for_both(shared).pass_zero_counts.to_string())
    }
}

/// Both parts come out of one pass over the rotations.
fn solve_once_for_both(shared: &mut SharedData) -> &CommonResult {
    shared.common_result.get_or_insert_with(|| {
        let (_, zero_counts, pass_zero_counts) = shared.rotations.iter().fold(
            (DIAL_START, 0u32, 0u32),
            |(mut dial, mut zero_counts, mut pass_zero_counts), rotation| {
                let old_dial = dial;
                dial += rotation;
                // Turning left onto or past 0 from a non-zero position
                if dial <= 0 && old_dial != 0 {
                    pass_zero_counts += 1;
                }
                pass_zero_counts += (dial / DIAL_SIZE).unsigned_abs();
                dial = dial.rem_euclid(DIAL_SIZE);
                if dial == 0 {
                    zero_counts += 1;
                }
                (dial, zero_counts, pass_zero_counts)
            },
        );

        CommonResult {
            zero_counts,
            pass_zero_counts,
        }
    })
}
