use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::debug;

use crate::utils::connectivity::{
    Edge, Point3, circuit_sizes_from_edges, final_edge, parse_points, product_of_largest,
    rank_edges,
};

/// Shortest connections made before the circuits are measured.
const CONNECTIONS: usize = 1000;
/// How many of the largest circuits are multiplied together.
const LARGEST: usize = 3;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 8, tags = ["graph", "union-find"])]
pub struct Solver;

#[derive(Debug)]
pub struct Playground {
    boxes: Vec<Point3>,
    /// Ranked on first use and shared by both parts.
    edges: Option<Vec<Edge>>,
}

impl Playground {
    fn edges(&mut self) -> &[Edge] {
        self.edges.get_or_insert_with(|| {
            let edges = rank_edges(&self.boxes);
            debug!(boxes = self.boxes.len(), edges = edges.len(), "ranked edges");
            edges
        })
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Playground;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let boxes = parse_points(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        Ok(Playground { boxes, edges: None })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = shared.boxes.len();
        let sizes = circuit_sizes_from_edges(count, shared.edges(), CONNECTIONS);
        debug!(circuits = sizes.len(), largest = ?sizes.get(..LARGEST), "circuits measured");
        Ok(product_of_largest(&sizes, LARGEST).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = shared.boxes.len();
        let Some(last) = final_edge(count, shared.edges()) else {
            debug!(boxes = count, "nothing left to connect");
            return Ok("0".to_string());
        };
        let (a, b) = last.endpoints(&shared.boxes);
        debug!(%a, %b, distance = last.distance, "final connection");
        Ok((i128::from(a.x) * i128::from(b.x)).to_string())
    }
}

#[cfg(test)]
mod tests {
    use aoc_solver::SolverExt;

    use super::*;

    const EXAMPLE: &str = "\
162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689
";

    #[test]
    fn test_example_ten_connections() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        let sizes = circuit_sizes_from_edges(shared.boxes.len(), shared.edges(), 10);
        assert_eq!(product_of_largest(&sizes, LARGEST), 40);
    }

    #[test]
    fn test_example_parts() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        // 190 edges are fewer than the budget, so everything ends up connected
        assert_eq!(Solver::solve_part_checked_range(&mut shared, 1).unwrap(), "0");
        assert_eq!(Solver::solve_part_checked_range(&mut shared, 2).unwrap(), "25272");
        assert_eq!(shared.edges.as_ref().map(Vec::len), Some(190));
    }

    #[test]
    fn test_parts_are_independent_of_order() {
        let mut first = Solver::parse(EXAMPLE).unwrap();
        let mut second = Solver::parse(EXAMPLE).unwrap();
        let a = (
            Solver::solve_part_checked_range(&mut first, 1).unwrap(),
            Solver::solve_part_checked_range(&mut first, 2).unwrap(),
        );
        let b2 = Solver::solve_part_checked_range(&mut second, 2).unwrap();
        let b1 = Solver::solve_part_checked_range(&mut second, 1).unwrap();
        assert_eq!(a, (b1, b2));
    }

    #[test]
    fn test_tiny_inputs() {
        let mut single = Solver::parse("1,2,3").unwrap();
        assert_eq!(Solver::solve_part_checked_range(&mut single, 1).unwrap(), "0");
        assert_eq!(Solver::solve_part_checked_range(&mut single, 2).unwrap(), "0");

        // A single circuit of three is not three circuits
        let mut trio = Solver::parse("1,0,0\n2,0,0\n-7,0,0").unwrap();
        assert_eq!(Solver::solve_part_checked_range(&mut trio, 1).unwrap(), "0");
        assert_eq!(Solver::solve_part_checked_range(&mut trio, 2).unwrap(), "-7");
    }

    #[test]
    fn test_parse_error_names_line() {
        let err = Solver::parse("1,2,3\n4,5\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidFormat(
                "line 2: expected 3 comma-separated coordinates, found 2".into()
            )
        );
    }
}
