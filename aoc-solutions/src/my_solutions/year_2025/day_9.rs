use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 9, tags = ["geometry"])]
pub struct Solver;

type Tile = (i64, i64);

/// Axis-aligned bounds `(x1, y1, x2, y2)` with `x1 <= x2` and `y1 <= y2`.
type Bounds = (i64, i64, i64, i64);

fn bounds((ax, ay): Tile, (bx, by): Tile) -> Bounds {
    (ax.min(bx), ay.min(by), ax.max(bx), ay.max(by))
}

/// Tiles covered by a rectangle, corners included.
fn area((x1, y1, x2, y2): Bounds) -> u64 {
    (x2.abs_diff(x1) + 1) * (y2.abs_diff(y1) + 1)
}

impl AocParser for Solver {
    /// Red tiles in loop order; consecutive tiles share a row or column.
    type SharedData<'a> = Vec<Tile>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(idx, line)| {
                parse_tile(line)
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {:#}", idx + 1, e)))
            })
            .collect()
    }
}

fn parse_tile(line: &str) -> Result<Tile, anyhow::Error> {
    let (x, y) = line
        .split_once(',')
        .ok_or_else(|| anyhow!("expected 'x,y', found {line:?}"))?;
    let x = x.trim().parse().with_context(|| format!("bad x {x:?}"))?;
    let y = y.trim().parse().with_context(|| format!("bad y {y:?}"))?;
    Ok((x, y))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let best = corner_pairs(shared).map(area).max().unwrap_or(0);
        Ok(best.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let edges: Vec<Bounds> = loop_edges(shared).collect();
        let best = corner_pairs(shared)
            .filter(|&rect| inside_loop(rect, &edges))
            .map(area)
            .max()
            .unwrap_or(0);
        Ok(best.to_string())
    }
}

fn corner_pairs(tiles: &[Tile]) -> impl Iterator<Item = Bounds> + '_ {
    tiles
        .iter()
        .enumerate()
        .flat_map(move |(i, &a)| tiles[i + 1..].iter().map(move |&b| bounds(a, b)))
}

/// The loop's edges as degenerate bounds, closing back to the first tile.
fn loop_edges(tiles: &[Tile]) -> impl Iterator<Item = Bounds> + '_ {
    tiles
        .iter()
        .zip(tiles.iter().cycle().skip(1))
        .map(|(&a, &b)| bounds(a, b))
}

/// Whether a rectangle lies entirely on or inside the loop.
///
/// No loop edge may pass through the rectangle's open interior. The interior
/// is then wholly inside or wholly outside, and its centre decides which.
fn inside_loop(rect: Bounds, edges: &[Bounds]) -> bool {
    let (x1, y1, x2, y2) = rect;
    let crosses = edges
        .iter()
        .any(|&(ex1, ey1, ex2, ey2)| ex1 < x2 && ex2 > x1 && ey1 < y2 && ey2 > y1);
    // Doubled so the centre of an even-sized rectangle stays integral
    !crosses && point_in_loop((x1 + x2, y1 + y2), edges)
}

/// Ray casting on doubled coordinates; points on an edge count as inside.
fn point_in_loop((px, py): Tile, edges: &[Bounds]) -> bool {
    let mut inside = false;
    for &(x1, y1, x2, y2) in edges {
        let (x1, y1, x2, y2) = (2 * x1, 2 * y1, 2 * x2, 2 * y2);
        if (x1..=x2).contains(&px) && (y1..=y2).contains(&py) {
            return true;
        }
        // Vertical edges crossing the ray to the right, half-open in y
        if x1 == x2 && x1 > px && y1 <= py && py < y2 {
            inside = !inside;
        }
    }
    inside
}
