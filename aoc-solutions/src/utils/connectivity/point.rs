//! Integer points in 3-D space and their line-oriented input format.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

/// A point with signed integer coordinates.
///
/// Points are identified downstream by their position in the input, not by
/// value; two equal points on different lines are different vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point3 {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Point3 {
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Exact squared Euclidean distance.
    ///
    /// Computed in `i128`, exact for coordinates up to about 2^62 apart.
    pub fn squared_distance(&self, other: &Self) -> i128 {
        let d = |a: i64, b: i64| i128::from(a) - i128::from(b);
        let (dx, dy, dz) = (d(self.x, other.x), d(self.y, other.y), d(self.z, other.z));
        dx * dx + dy * dy + dz * dz
    }

    /// Euclidean distance, a single rounding of the exact squared distance.
    pub fn distance(&self, other: &Self) -> f64 {
        (self.squared_distance(other) as f64).sqrt()
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

/// Why a single `x,y,z` token failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PointParseError {
    #[error("expected 3 comma-separated coordinates, found {0}")]
    WrongArity(usize),
    #[error("invalid coordinate {token:?}: {source}")]
    BadCoordinate {
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<PointParseError>,
    },
}

impl FromStr for Point3 {
    type Err = PointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.trim().split(',').collect();
        let [x, y, z] = tokens[..] else {
            return Err(PointParseError::WrongArity(tokens.len()));
        };
        let coord = |token: &str| {
            token
                .trim()
                .parse::<i64>()
                .map_err(|source| PointParseError::BadCoordinate {
                    token: token.to_string(),
                    source,
                })
        };
        Ok(Self::new(coord(x)?, coord(y)?, coord(z)?))
    }
}

/// Parse one point per line, in order. Blank lines are skipped.
///
/// Errors carry the 1-based line number of the first bad line.
pub fn parse_points(input: &str) -> Result<Vec<Point3>, PointParseError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            line.parse().map_err(|e| PointParseError::AtLine {
                line: idx + 1,
                source: Box::new(e),
            })
        })
        .collect()
}
