use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::debug;

use crate::utils::grid::Grid;

const ROLL: u8 = b'@';
const EMPTY: u8 = b'.';
/// A roll is reachable by forklift with fewer neighbouring rolls than this.
const CROWDED: usize = 4;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 4, tags = ["grid", "simulation"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        if let Some((row, col)) = grid
            .positions()
            .find(|&(row, col)| !matches!(grid.get(row, col), Some(ROLL | EMPTY)))
        {
            return Err(ParseError::InvalidFormat(format!(
                "(line {}) unexpected cell at column {}",
                row + 1,
                col + 1
            )));
        }
        Ok(grid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(accessible_rolls(shared).len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut grid = shared.clone();
        let mut removed = 0;
        // Each round removes every roll accessible at its start
        for round in 1.. {
            let accessible = accessible_rolls(&grid);
            if accessible.is_empty() {
                break;
            }
            debug!(round, count = accessible.len(), "removing rolls");
            removed += accessible.len();
            for (row, col) in accessible {
                grid.set(row, col, EMPTY);
            }
        }
        Ok(removed.to_string())
    }
}

fn accessible_rolls(grid: &Grid) -> Vec<(usize, usize)> {
    grid.positions()
        .filter(|&(row, col)| grid.get(row, col) == Some(ROLL))
        .filter(|&(row, col)| {
            grid.neighbours_8(row, col)
                .filter(|&(r, c)| grid.get(r, c) == Some(ROLL))
                .count()
                < CROWDED
        })
        .collect()
}
