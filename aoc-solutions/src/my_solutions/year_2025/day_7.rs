use std::collections::HashSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::debug;

use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
use crate::utils::grid::Grid;

const SOURCE: u8 = b'S';
const SPLITTER: u8 = b'^';

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 7, tags = ["grid", "dp"])]
pub struct Solver;

#[derive(Debug)]
pub struct Manifold {
    grid: Grid,
    source: (usize, usize),
}

impl Manifold {
    /// Row of the first splitter at or below `row` in `col`.
    fn splitter_below(&self, row: usize, col: usize) -> Option<usize> {
        (row..self.grid.height()).find(|&r| self.grid.get(r, col) == Some(SPLITTER))
    }

    /// The two beams leaving a splitter, dropping any that leave the grid.
    fn split(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
        let width = self.grid.width();
        [col.checked_sub(1), Some(col + 1).filter(|&c| c < width)]
            .into_iter()
            .flatten()
            .map(move |c| (row, c))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Manifold;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        let source = grid
            .find(SOURCE)
            .ok_or_else(|| ParseError::MissingData("no beam source 'S'".into()))?;
        Ok(Manifold { grid, source })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Beams are identified by where they start travelling down
        let mut beams = vec![shared.source];
        let mut seen_beams = HashSet::from([shared.source]);
        let mut hit = HashSet::new();

        while let Some((row, col)) = beams.pop() {
            let Some(splitter_row) = shared.splitter_below(row, col) else {
                continue;
            };
            if !hit.insert((splitter_row, col)) {
                continue;
            }
            for beam in shared.split(splitter_row, col) {
                if seen_beams.insert(beam) {
                    beams.push(beam);
                }
            }
        }

        debug!(splitters = hit.len(), beams = seen_beams.len(), "beam traced");
        Ok(hit.len().to_string())
    }
}

/// Number of timelines a beam starting at `(row, col)` ends up in.
///
/// Columns are signed so a beam split off the edge of the grid is still an
/// index: it leaves immediately and counts as one timeline.
struct Timelines<'m> {
    manifold: &'m Manifold,
}

impl DpProblem<(usize, isize), u64> for Timelines<'_> {
    fn deps(&self, &(row, col): &(usize, isize)) -> Vec<(usize, isize)> {
        let Ok(c) = usize::try_from(col) else {
            return vec![];
        };
        if c >= self.manifold.grid.width() {
            return vec![];
        }
        match self.manifold.splitter_below(row, c) {
            Some(splitter_row) => vec![(splitter_row, col - 1), (splitter_row, col + 1)],
            None => vec![],
        }
    }

    fn compute(&self, _index: &(usize, isize), deps: Vec<u64>) -> u64 {
        if deps.is_empty() { 1 } else { deps.iter().sum() }
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let cache = DpCache::builder()
            .backend(HashMapBackend::new())
            .problem(Timelines { manifold: shared })
            .build();
        let (row, col) = shared.source;
        let col = isize::try_from(col).map_err(SolveError::failed)?;
        cache
            .get(&(row, col))
            .map(|timelines| timelines.to_string())
            .map_err(SolveError::failed)
    }
}
