use std::ops::Range;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 6, tags = ["parsing", "columns"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Mul,
}

impl Op {
    fn apply(self, numbers: impl Iterator<Item = u64>) -> u64 {
        match self {
            Op::Add => numbers.sum(),
            Op::Mul => numbers.product(),
        }
    }
}

/// One problem on the worksheet: a block of columns between blank columns.
///
/// `rows` borrows the block's slice of every number row, padded rows
/// included, so the text can be read either across or down.
#[derive(Debug)]
pub struct Problem<'a> {
    op: Op,
    rows: Vec<&'a [u8]>,
}

impl Problem<'_> {
    /// Each row holds one number.
    fn by_rows(&self) -> u64 {
        self.op.apply(self.rows.iter().filter_map(|row| digits_to_number(row.iter())))
    }

    /// Each column holds one number, most significant digit at the top.
    fn by_columns(&self) -> u64 {
        let width = self.rows.iter().map(|row| row.len()).max().unwrap_or(0);
        self.op.apply(
            (0..width).filter_map(|col| digits_to_number(self.rows.iter().filter_map(|row| row.get(col)))),
        )
    }
}

/// Digits in order, spaces ignored. `None` if there are no digits at all.
fn digits_to_number<'b>(cells: impl Iterator<Item = &'b u8>) -> Option<u64> {
    cells
        .filter(|cell| cell.is_ascii_digit())
        .fold(None, |acc, cell| Some(acc.unwrap_or(0) * 10 + u64::from(cell - b'0')))
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Problem<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let lines: Vec<&[u8]> = input
            .lines()
            .map(|line| line.trim_end_matches('\r').as_bytes())
            .filter(|line| !line.iter().all(u8::is_ascii_whitespace))
            .collect();
        let Some((ops, numbers)) = lines.split_last() else {
            return Err(ParseError::MissingData("worksheet is empty".into()));
        };

        for (idx, line) in numbers.iter().enumerate() {
            if let Some(bad) = line.iter().find(|&&b| b != b' ' && !b.is_ascii_digit()) {
                return Err(ParseError::InvalidFormat(format!(
                    "(line {}) unexpected character {:?}",
                    idx + 1,
                    *bad as char
                )));
            }
        }

        column_blocks(&lines)
            .into_iter()
            .map(|block| {
                let op = match ops.get(block.clone()).unwrap_or_default().iter().find(|&&b| b != b' ') {
                    Some(b'+') => Op::Add,
                    Some(b'*') => Op::Mul,
                    Some(&other) => {
                        return Err(ParseError::InvalidFormat(format!(
                            "unknown operator {:?} at column {}",
                            other as char,
                            block.start + 1
                        )));
                    }
                    None => {
                        return Err(ParseError::MissingData(format!(
                            "no operator under column {}",
                            block.start + 1
                        )));
                    }
                };
                let rows = numbers
                    .iter()
                    .map(|line| &line[block.start.min(line.len())..block.end.min(line.len())])
                    .collect();
                Ok(Problem { op, rows })
            })
            .collect()
    }
}

/// Maximal runs of columns that are not blank in every line.
fn column_blocks(lines: &[&[u8]]) -> Vec<Range<usize>> {
    let width = lines.iter().map(|line| line.len()).max().unwrap_or(0);
    let blank = |col: usize| lines.iter().all(|line| line.get(col).is_none_or(|&b| b == b' '));

    let mut blocks = Vec::new();
    let mut start = None;
    for col in 0..=width {
        match (start, col == width || blank(col)) {
            (None, false) => start = Some(col),
            (Some(s), true) => {
                blocks.push(s..col);
                start = None;
            }
            _ => {}
        }
    }
    blocks
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(Problem::by_rows).sum::<u64>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(Problem::by_columns).sum::<u64>().to_string())
    }
}
