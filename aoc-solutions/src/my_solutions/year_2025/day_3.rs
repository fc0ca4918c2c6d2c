use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 3, tags = ["greedy"])]
pub struct Solver;

impl AocParser for Solver {
    /// One bank of battery digits per line.
    type SharedData<'a> = Vec<Vec<u8>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(idx, line)| {
                line.bytes()
                    .map(|b| match b {
                        b'0'..=b'9' => Ok(b - b'0'),
                        _ => Err(ParseError::InvalidFormat(format!(
                            "(line {}) unexpected character {:?}",
                            idx + 1,
                            b as char
                        ))),
                    })
                    .collect::<Result<Vec<u8>, _>>()
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total_joltage(shared, 2).map(|total| total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total_joltage(shared, 12).map(|total| total.to_string())
    }
}

fn total_joltage(banks: &[Vec<u8>], picks: usize) -> Result<u64, SolveError> {
    banks.iter().enumerate().try_fold(0, |total, (idx, bank)| {
        max_joltage(bank, picks)
            .map(|joltage| total + joltage)
            .ok_or_else(|| {
                SolveError::failed(format!(
                    "bank {} has {} batteries, need {picks}",
                    idx + 1,
                    bank.len()
                ))
            })
    })
}

/// Largest number formed by keeping `picks` digits of `bank` in order.
///
/// Each pick takes the leftmost maximum digit that still leaves room for the
/// remaining picks. `None` if the bank is too short.
fn max_joltage(bank: &[u8], picks: usize) -> Option<u64> {
    if bank.len() < picks {
        return None;
    }
    let mut start = 0;
    let mut joltage = 0u64;
    for remaining in (0..picks).rev() {
        let window = &bank[start..bank.len() - remaining];
        // `max_by_key` keeps the last maximum, so search right to left
        let (offset, &digit) = window
            .iter()
            .enumerate()
            .rev()
            .max_by_key(|(_, digit)| **digit)?;
        joltage = joltage * 10 + u64::from(digit);
        start += offset + 1;
    }
    Some(joltage)
}

#[cfg(test)]
mod tests {
    use aoc_solver::SolverExt;

    use super::*;

    const EXAMPLE: &str = "\
987654321111111
811111111111119
234234234234278
818181911112111
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part_checked_range(&mut shared, 1).unwrap(), "357");
        assert_eq!(Solver::solve_part_checked_range(&mut shared, 2).unwrap(), "3121910778619");
    }

    #[test]
    fn test_per_bank() {
        let banks = Solver::parse(EXAMPLE).unwrap();
        let two: Vec<_> = banks.iter().map(|b| max_joltage(b, 2).unwrap()).collect();
        assert_eq!(two, vec![98, 89, 78, 92]);
        assert_eq!(max_joltage(&banks[0], 12), Some(987654321111));
        assert_eq!(max_joltage(&banks[2], 12), Some(434234234278));
    }

    #[test]
    fn test_short_bank() {
        assert_eq!(max_joltage(&[1, 2, 3], 3), Some(123));
        assert_eq!(max_joltage(&[1, 2], 3), None);

        let mut shared = Solver::parse("12345\n9").unwrap();
        let err = Solver::solve_part_checked_range(&mut shared, 1).unwrap_err();
        assert_eq!(err.to_string(), "Solve failed: bank 2 has 1 batteries, need 2");
    }

    #[test]
    fn test_rejects_non_digits() {
        assert_eq!(
            Solver::parse("123\n4a5"),
            Err(ParseError::InvalidFormat("(line 2) unexpected character 'a'".into()))
        );
    }
}
