//! Registry, plugin and timing behaviour

use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, FactoryInfo, ParseError, PartSolver,
    RegistrationError, SolveError, SolverError, SolverRegistryBuilder,
};

/// Counts words (part 1) and distinct words (part 2), borrowing from the input
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 4, tags = ["registry-test", "words"])]
struct Words;

impl AocParser for Words {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        if input.trim().is_empty() {
            return Err(ParseError::MissingData("no words".into()));
        }
        Ok(input.split_whitespace().collect())
    }
}

impl PartSolver<1> for Words {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

impl PartSolver<2> for Words {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.sort_unstable();
        shared.dedup();
        Ok(shared.len().to_string())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2016, day = 5, tags = ["registry-test"])]
struct Lines;

impl AocParser for Lines {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input)
    }
}

impl PartSolver<1> for Lines {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.lines().count().to_string())
    }
}

#[test]
fn test_manual_registration_and_solve() {
    let registry = SolverRegistryBuilder::new()
        .register::<Words>(2023, 7)
        .unwrap()
        .build();

    let mut solver = registry.create_solver(2023, 7, "a b a c").unwrap();
    assert_eq!(solver.year(), 2023);
    assert_eq!(solver.day(), 7);
    assert_eq!(solver.parts(), 2);
    assert_eq!(solver.solve(1).unwrap().answer, "4");
    assert_eq!(solver.solve(2).unwrap().answer, "3");
    assert!(solver.parse_duration() >= chrono::TimeDelta::zero());
}

#[test]
fn test_solve_rejects_out_of_range_part() {
    let registry = SolverRegistryBuilder::new()
        .register::<Lines>(2023, 1)
        .unwrap()
        .build();

    let mut solver = registry.create_solver(2023, 1, "x").unwrap();
    assert!(matches!(solver.solve(2), Err(SolveError::PartOutOfRange(2))));
}

#[test]
fn test_duplicate_registration_rejected() {
    let result = SolverRegistryBuilder::new()
        .register::<Words>(2023, 1)
        .unwrap()
        .register::<Lines>(2023, 1);

    assert!(matches!(result, Err(RegistrationError::DuplicateSolver(2023, 1))));
}

#[test]
fn test_out_of_range_registration_rejected() {
    let result = SolverRegistryBuilder::new().register::<Words>(2014, 1);
    assert!(matches!(result, Err(RegistrationError::InvalidYearDay(2014, 1))));

    let result = SolverRegistryBuilder::new().register::<Words>(2020, 26);
    assert!(matches!(result, Err(RegistrationError::InvalidYearDay(2020, 26))));
}

#[test]
fn test_create_solver_errors() {
    let registry = SolverRegistryBuilder::new()
        .register::<Words>(2023, 1)
        .unwrap()
        .build();

    assert!(matches!(
        registry.create_solver(2023, 2, "a"),
        Err(SolverError::NotFound(2023, 2))
    ));
    assert!(matches!(
        registry.create_solver(1999, 2, "a"),
        Err(SolverError::InvalidYearDay(1999, 2))
    ));
    assert!(matches!(
        registry.create_solver(2023, 1, "   "),
        Err(SolverError::ParseError(ParseError::MissingData(_)))
    ));
}

#[test]
fn test_plugins_filtered_by_tag() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"words"))
        .unwrap()
        .build();

    let infos: Vec<FactoryInfo> = registry.storage().iter_info().collect();
    assert_eq!(
        infos,
        vec![FactoryInfo {
            year: 2016,
            day: 4,
            parts: 2
        }]
    );
}

#[test]
fn test_plugins_iterate_in_year_day_order() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"registry-test"))
        .unwrap()
        .build();

    let storage = registry.storage();
    assert_eq!(storage.len(), 2);
    assert!(!storage.is_empty());
    assert!(storage.contains(2016, 5));
    assert_eq!(storage.get_info(2016, 5).map(|i| i.parts), Some(1));

    let keys: Vec<(u16, u8)> = storage.iter_info().map(|i| (i.year, i.day)).collect();
    assert_eq!(keys, vec![(2016, 4), (2016, 5)]);
}

#[test]
fn test_solve_result_timing_is_ordered() {
    let registry = SolverRegistryBuilder::new()
        .register::<Lines>(2023, 1)
        .unwrap()
        .build();

    let mut solver = registry.create_solver(2023, 1, "a\nb\nc").unwrap();
    let result = solver.solve(1).unwrap();
    assert_eq!(result.answer, "3");
    assert!(result.solve_end >= result.solve_start);
    assert!(solver.parse_end() >= solver.parse_start());
}
