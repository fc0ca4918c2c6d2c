//! Errors raised while parsing, solving and registering

use thiserror::Error;

use crate::registry::{BASE_YEAR, DAYS_PER_YEAR, LAST_YEAR};

/// Why `AocParser::parse` rejected an input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A line or token does not have the expected shape
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Something the puzzle needs never appears in the input
    #[error("Missing data: {0}")]
    MissingData(String),
    #[error("Parse error: {0}")]
    Other(String),
}

/// Why a single part produced no answer
#[derive(Debug, Error)]
pub enum SolveError {
    /// The solver has no `PartSolver` for this part
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// Part 0, or a part above the solver's `PARTS`
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The part ran and failed; see [`SolveError::failed`]
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Wrap any error as a [`SolveError::SolveFailed`]
    pub fn failed<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::SolveFailed(error.into())
    }
}

/// Failure of `SolverRegistry::create_solver` or a later solve
#[derive(Debug, Error)]
pub enum SolverError {
    /// The year/day has a storage slot but nothing registered in it
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    /// The year/day has no storage slot at all
    #[error(
        "Invalid year {0} day {1}: supported years are {base}-{last}, days 1-{days}",
        base = BASE_YEAR,
        last = LAST_YEAR,
        days = DAYS_PER_YEAR
    )]
    InvalidYearDay(u16, u8),
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Why `SolverRegistryBuilder` refused a solver
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A solver already occupies this year/day
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    /// Outside the registry's storage: years `BASE_YEAR..=LAST_YEAR`, days 1-25
    #[error(
        "Invalid year {0} day {1}: supported years are {base}-{last}, days 1-{days}",
        base = BASE_YEAR,
        last = LAST_YEAR,
        days = DAYS_PER_YEAR
    )]
    InvalidYearDay(u16, u8),
}
