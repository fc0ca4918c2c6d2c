//! Property-based tests for the AocSolver derive macro

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};
use proptest::prelude::*;

/// Parses comma-separated integers; part 1 sums, part 2 takes the product
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct CsvSolver;

impl AocParser for CsvSolver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim()
            .split(',')
            .map(|token| {
                token
                    .trim()
                    .parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("bad int: {token:?}")))
            })
            .collect()
    }
}

impl PartSolver<1> for CsvSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for CsvSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i64>().to_string())
    }
}

fn csv(numbers: &[i64]) -> String {
    numbers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

mod dispatch {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// `solve_part(shared, N)` is exactly `<Self as PartSolver<N>>::solve(shared)`.
        #[test]
        fn solve_part_dispatches_to_correct_part_solver(
            numbers in prop::collection::vec(1i64..10, 1..6),
            part in 1u8..=2
        ) {
            let input = csv(&numbers);
            let mut via_solver = CsvSolver::parse(&input).unwrap();
            let mut direct = CsvSolver::parse(&input).unwrap();

            let solver_result = CsvSolver::solve_part(&mut via_solver, part).unwrap();
            let direct_result = match part {
                1 => <CsvSolver as PartSolver<1>>::solve(&mut direct),
                _ => <CsvSolver as PartSolver<2>>::solve(&mut direct),
            }
            .unwrap();

            prop_assert_eq!(solver_result, direct_result);
        }

        /// Parts outside `1..=max_parts` fall through to `PartNotImplemented`.
        #[test]
        fn invalid_part_returns_not_implemented(invalid_part in prop_oneof![Just(0u8), 3u8..=255]) {
            let mut shared = CsvSolver::parse("1,2,3").unwrap();

            match CsvSolver::solve_part(&mut shared, invalid_part) {
                Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, invalid_part),
                other => prop_assert!(false, "Expected PartNotImplemented, got {:?}", other),
            }
        }
    }

    #[test]
    fn parts_constant_matches_attribute() {
        assert_eq!(<CsvSolver as Solver>::PARTS, 2);
    }
}

mod shared_state {
    use super::*;

    /// Part 1 sorts and remembers the median; part 2 reuses it when present
    #[derive(Debug)]
    struct Sorted {
        values: Vec<i64>,
        median: Option<i64>,
    }

    #[derive(AocSolver)]
    #[aoc_solver(max_parts = 2)]
    struct MedianSolver;

    impl AocParser for MedianSolver {
        type SharedData<'a> = Sorted;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            Ok(Sorted {
                values: CsvSolver::parse(input)?,
                median: None,
            })
        }
    }

    fn median(shared: &mut Sorted) -> i64 {
        *shared.median.get_or_insert_with(|| {
            shared.values.sort_unstable();
            shared.values[shared.values.len() / 2]
        })
    }

    impl PartSolver<1> for MedianSolver {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            Ok(median(shared).to_string())
        }
    }

    impl PartSolver<2> for MedianSolver {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            let m = median(shared);
            Ok(shared.values.iter().map(|v| (v - m).abs()).sum::<i64>().to_string())
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Whatever part 1 stores in the shared data is what part 2 sees.
        #[test]
        fn mutation_is_visible_to_later_parts(numbers in prop::collection::vec(-50i64..50, 1..9)) {
            let input = csv(&numbers);
            let mut sorted = numbers.clone();
            sorted.sort_unstable();
            let expected_median = sorted[sorted.len() / 2];

            let mut shared = MedianSolver::parse(&input).unwrap();
            let part1 = MedianSolver::solve_part(&mut shared, 1).unwrap();
            prop_assert_eq!(part1, expected_median.to_string());
            prop_assert_eq!(shared.median, Some(expected_median));

            let part2 = MedianSolver::solve_part(&mut shared, 2).unwrap();
            let expected: i64 = numbers.iter().map(|v| (v - expected_median).abs()).sum();
            prop_assert_eq!(part2, expected.to_string());
        }
    }

    #[test]
    fn part_two_works_without_part_one() {
        let mut shared = MedianSolver::parse("5,1,3").unwrap();
        assert_eq!(MedianSolver::solve_part(&mut shared, 2).unwrap(), "4");
    }
}
