//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::InputStore;
use aoc_solver::{DynSolver, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;
use tracing::{debug, info_span, warn};

/// Result from a single solver execution
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ArcExecutorError>,
    /// Set on the first part solved by each parsed instance
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    sync_executor_config: SyncExecutorConfig,
    thread_pool: rayon::ThreadPool,
}

pub struct SyncExecutorConfig {
    registry: SolverRegistry,
    inputs: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            sync_executor_config: SyncExecutorConfig {
                registry,
                inputs: InputStore::new(config.input_dir.clone()),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    pub fn inputs(&self) -> &InputStore {
        &self.sync_executor_config.inputs
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.sync_executor_config;
        cfg.registry
            .storage()
            .iter_info()
            .filter(|info| cfg.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: filter_parts(cfg.part_filter, info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Execute all work items and send results to channel
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        debug!(
            items = work_items.len(),
            parallelize_by = ?self.sync_executor_config.parallelize_by,
            "executing"
        );

        match self.sync_executor_config.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in work_items {
                    if let Err(e) = run_work_item(&work, &tx, &self.sync_executor_config) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Year => {
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.execute_parallel_grouped(by_year, &tx)
            }
            // Part differs from Day only inside run_work_item
            ParallelizeBy::Day | ParallelizeBy::Part => {
                let singles = work_items.into_iter().map(|w| vec![w]).collect();
                self.execute_parallel_grouped(singles, &tx)
            }
        }
    }

    /// Run groups in parallel; items within a group run in order
    fn execute_parallel_grouped(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let sync_executor_config = &self.sync_executor_config;

        self.thread_pool.install(|| {
            groups
                .into_par_iter()
                .map(|items| {
                    let mut err = None;
                    for work in items {
                        if let Err(e) = run_work_item(&work, tx, sync_executor_config) {
                            err = Some(ArcExecutorError::combine_opt(err, e))
                        }
                    }
                    err
                })
                .reduce_with(|err1, err2| match (err1, err2) {
                    (Some(a), Some(b)) => Some(ArcExecutorError::combine(a, b)),
                    (a, b) => a.or(b),
                })
                .flatten()
                .map_or(Ok(()), Err)
        })
    }
}

/// Parts to run for a solver, narrowed by the part filter
#[allow(clippy::reversed_empty_ranges)]
fn filter_parts(part_filter: Option<u8>, max_parts: u8) -> RangeInclusive<u8> {
    match part_filter {
        Some(p) if p <= max_parts => p..=p,
        Some(_) => 1..=0,
        None => 1..=max_parts,
    }
}

/// Result carrying an error for a part that never ran
fn error_result(year: u16, day: u8, part: u8, error: ArcExecutorError) -> SolverResult {
    SolverResult {
        year,
        day,
        part,
        answer: Err(error),
        parse_duration: None,
        solve_duration: TimeDelta::zero(),
    }
}

fn send(tx: &Sender<SolverResult>, result: SolverResult) -> Result<(), ArcExecutorError> {
    tx.send(result)
        .map_err(|_| ExecutorError::ChannelSend.into())
}

/// Read the input and solve every part of one work item
fn run_work_item(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    sync_executor_config: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let _span = info_span!("solver", year = work.year, day = work.day).entered();

    let input = match sync_executor_config.inputs.get(work.year, work.day) {
        Ok(input) => input,
        Err(e) => {
            warn!(error = %e, "input unavailable");
            let error = ArcExecutorError::from(e);
            for part in work.parts.clone() {
                send(tx, error_result(work.year, work.day, part, error.clone()))?;
            }
            return Ok(());
        }
    };

    if matches!(sync_executor_config.parallelize_by, ParallelizeBy::Part) {
        run_parts_parallel(work, &input, tx, &sync_executor_config.registry)
    } else {
        run_parts_sequential(work, &input, tx, &sync_executor_config.registry)
    }
}

/// Each part gets its own parsed instance; results are emitted in part order
fn run_parts_parallel(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    registry: &SolverRegistry,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);
    let mut results: Vec<SolverResult> = work
        .parts
        .clone()
        .into_par_iter()
        .map(|part| match registry.create_solver(year, day, input) {
            Ok(mut solver) => {
                let mut result = solve_part(part, &mut *solver);
                result.parse_duration = Some(solver.parse_duration());
                result
            }
            Err(e) => error_result(year, day, part, ExecutorError::from(e).into()),
        })
        .collect();

    results.sort_by_key(|r| r.part);
    results.into_iter().try_for_each(|result| send(tx, result))
}

/// Parse once, then solve parts in order against the shared data
fn run_parts_sequential(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    registry: &SolverRegistry,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);
    let mut solver = match registry.create_solver(year, day, input) {
        Ok(solver) => solver,
        Err(e) => {
            let error = ArcExecutorError::from(ExecutorError::from(e));
            for part in work.parts.clone() {
                send(tx, error_result(year, day, part, error.clone()))?;
            }
            return Ok(());
        }
    };

    let mut parse_duration = Some(solver.parse_duration());
    for part in work.parts.clone() {
        let mut result = solve_part(part, &mut *solver);
        result.parse_duration = parse_duration.take();
        send(tx, result)?;
    }
    Ok(())
}

/// Solve a single part on an already parsed solver
fn solve_part(part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    let (year, day) = (solver.year(), solver.day());
    match solver.solve(part) {
        Ok(solved) => SolverResult {
            year,
            day,
            part,
            solve_duration: solved.duration(),
            answer: Ok(solved.answer),
            parse_duration: None,
        },
        Err(e) => {
            debug!(part, error = %e, "part failed");
            let error = ExecutorError::Solver(aoc_solver::SolverError::SolveError(e));
            error_result(year, day, part, error.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::SolverRegistryBuilder;
    use std::fs;
    use std::path::Path;
    use std::sync::mpsc;
    use tempfile::TempDir;


    const DAY_5: &str = "3-5\n10-14\n16-20\n12-18\n\n1\n5\n8\n11\n17\n32\n";

    fn config(dir: &Path, parallelize_by: ParallelizeBy) -> Config {
        Config {
            year_filter: Some(2025),
            day_filter: None,
            part_filter: None,
            tags: Vec::new(),
            input_dir: dir.to_path_buf(),
            thread_count: 2,
            parallelize_by,
            quiet: true,
        }
    }

    fn registry() -> SolverRegistry {
        SolverRegistryBuilder::new()
            .register_solver_plugins(|plugin| plugin.year == 2025 && plugin.day == 5)
            .unwrap()
            .build()
    }

    fn run(executor: &Executor) -> Vec<SolverResult> {
        let (tx, rx) = mpsc::channel();
        executor.execute(tx).unwrap();
        let mut results: Vec<_> = rx.into_iter().collect();
        results.sort_by_key(|r| (r.year, r.day, r.part));
        results
    }

    #[test]
    fn test_filter_parts() {
        assert_eq!(filter_parts(None, 2), 1..=2);
        assert_eq!(filter_parts(Some(2), 2), 2..=2);
        assert!(filter_parts(Some(2), 1).is_empty());
    }

    #[test]
    fn test_work_items_follow_filters() {
        let temp = TempDir::new().unwrap();
        let mut cfg = config(temp.path(), ParallelizeBy::Day);
        cfg.part_filter = Some(2);
        let executor = Executor::new(registry(), &cfg).unwrap();
        assert_eq!(
            executor.collect_work_items(),
            vec![WorkItem {
                year: 2025,
                day: 5,
                parts: 2..=2
            }]
        );

        cfg.day_filter = Some(6);
        let executor = Executor::new(registry(), &cfg).unwrap();
        assert!(executor.collect_work_items().is_empty());
    }

    #[test]
    fn test_every_mode_produces_the_same_answers() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("2025_day05.txt"), DAY_5).unwrap();

        for mode in [
            ParallelizeBy::Sequential,
            ParallelizeBy::Year,
            ParallelizeBy::Day,
            ParallelizeBy::Part,
        ] {
            let executor = Executor::new(registry(), &config(temp.path(), mode)).unwrap();
            let results = run(&executor);
            let answers: Vec<_> = results
                .iter()
                .map(|r| r.answer.as_ref().unwrap().as_str())
                .collect();
            assert_eq!(answers, vec!["3", "14"], "{mode:?}");
            assert!(results[0].parse_duration.is_some(), "{mode:?}");
        }
    }

    #[test]
    fn test_parse_time_reported_once_when_sharing_parse() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("2025_day05.txt"), DAY_5).unwrap();
        let executor =
            Executor::new(registry(), &config(temp.path(), ParallelizeBy::Sequential)).unwrap();
        let results = run(&executor);
        assert!(results[0].parse_duration.is_some());
        assert!(results[1].parse_duration.is_none());
    }

    #[test]
    fn test_missing_input_becomes_part_errors() {
        let temp = TempDir::new().unwrap();
        let executor = Executor::new(registry(), &config(temp.path(), ParallelizeBy::Day)).unwrap();
        let results = run(&executor);
        assert_eq!(results.len(), 2);
        for result in results {
            let error = result.answer.unwrap_err();
            assert!(matches!(error.inner(), ExecutorError::MissingInput { day: 5, .. }));
        }
    }

    #[test]
    fn test_parse_error_becomes_part_errors() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("2025_day05.txt"), "5-1\n\n3\n").unwrap();
        for mode in [ParallelizeBy::Sequential, ParallelizeBy::Part] {
            let executor = Executor::new(registry(), &config(temp.path(), mode)).unwrap();
            let results = run(&executor);
            assert_eq!(results.len(), 2);
            assert!(results.iter().all(|r| matches!(
                r.answer.as_ref().map_err(|e| e.inner()),
                Err(ExecutorError::Solver(aoc_solver::SolverError::ParseError(_)))
            )));
        }
    }
}
