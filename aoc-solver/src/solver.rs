//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Parses a puzzle input into the data every part of the solver works on.
///
/// `SharedData` is a generic associated type so a solver can either own its
/// parsed representation or borrow straight from the input string.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Rotations;
///
/// impl AocParser for Rotations {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|line| {
///                 let (dir, clicks) = line
///                     .split_at_checked(1)
///                     .ok_or_else(|| ParseError::MissingData(line.to_string()))?;
///                 let clicks: i32 = clicks
///                     .parse()
///                     .map_err(|_| ParseError::InvalidFormat(line.to_string()))?;
///                 match dir {
///                     "L" => Ok(-clicks),
///                     "R" => Ok(clicks),
///                     _ => Err(ParseError::InvalidFormat(line.to_string())),
///                 }
///             })
///             .collect()
///     }
/// }
///
/// assert_eq!(Rotations::parse("L5\nR7").unwrap(), vec![-5, 7]);
/// ```
pub trait AocParser {
    /// Parsed input plus any intermediate results the parts want to share.
    ///
    /// Owned types (`Vec<T>`, custom structs) are the simplest choice; borrow
    /// as `&'a str` or `Vec<&'a str>` when the raw text is all a part needs.
    type SharedData<'a>: 'a;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle.
///
/// Implementing one `PartSolver<N>` per part and deriving
/// [`AocSolver`](crate::AocSolver) produces the [`Solver`] dispatch for you.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
///
/// struct Ranges;
///
/// impl AocParser for Ranges {
///     type SharedData<'a> = Vec<(u64, u64)>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .split(',')
///             .map(|range| {
///                 let (lo, hi) = range
///                     .split_once('-')
///                     .ok_or_else(|| ParseError::InvalidFormat(range.to_string()))?;
///                 lo.parse()
///                     .and_then(|lo| hi.parse().map(|hi| (lo, hi)))
///                     .map_err(|_| ParseError::InvalidFormat(range.to_string()))
///             })
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Ranges {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.iter().map(|(lo, hi)| hi - lo + 1).sum::<u64>().to_string())
///     }
/// }
///
/// let mut ranges = Ranges::parse("1-3,10-10").unwrap();
/// assert_eq!(<Ranges as PartSolver<1>>::solve(&mut ranges).unwrap(), "4");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve this part of the puzzle.
    ///
    /// Parts receive mutable access so that work done by one part (a sorted
    /// edge list, a simulation result) can be reused by the next.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Core trait every registered solver implements.
///
/// Usually generated by `#[derive(AocSolver)]`; implement it by hand when the
/// parts share a single code path.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Banks;
///
/// impl AocParser for Banks {
///     type SharedData<'a> = Vec<&'a str>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.lines().collect())
///     }
/// }
///
/// impl Solver for Banks {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.len().to_string()),
///             2 => Ok(shared.iter().map(|l| l.len()).sum::<usize>().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut banks = Banks::parse("987\n81").unwrap();
/// assert_eq!(Banks::solve_part(&mut banks, 2).unwrap(), "5");
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::SolveFailed)` - An error occurred while solving
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked part dispatch, implemented for every [`Solver`].
pub trait SolverExt: Solver {
    /// Solve `part` only if it lies in `1..=PARTS`.
    ///
    /// Returns [`SolveError::PartOutOfRange`] for part 0 or anything above `PARTS`.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
