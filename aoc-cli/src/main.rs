//! AOC CLI - runs registered Advent of Code solvers against local inputs

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod logging;
mod output;

// Linking aoc-solutions is what submits its solver plugins
use aoc_solutions as _;

use aggregator::{ResultAggregator, ResultKey};
use aoc_solver::{SolverRegistry, SolverRegistryBuilder};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::{Executor, WorkItem};
use inputs::InputStore;
use output::OutputFormatter;
use tracing::{error, info, warn};

fn main() {
    let args = Args::parse();

    if let Err(e) = logging::init_logging().map_err(CliError::from).and_then(|()| run(args)) {
        error!(error = %e, "run failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    info!(input_dir = %config.input_dir.display(), threads = config.thread_count, "configured");

    let registry = build_registry(&config.tags)?;
    let executor = Executor::new(registry, &config).map_err(|e| CliError::Executor(e.into()))?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    let missing = missing_inputs(&work_items, executor.inputs());
    if !missing.is_empty() && !config.quiet {
        println!("Missing {} input file(s):", missing.len());
        for (year, day) in &missing {
            println!("  - {}", executor.inputs().path(*year, *day).display());
        }
        println!();
    }

    run_executor(executor, work_items, config.quiet)
}

/// Puzzles selected to run that have no input file
fn missing_inputs(work_items: &[WorkItem], inputs: &InputStore) -> Vec<(u16, u8)> {
    work_items
        .iter()
        .filter(|w| !inputs.contains(w.year, w.day))
        .map(|w| (w.year, w.day))
        .collect()
}

/// Run the executor on a background thread and print results in order
fn run_executor(executor: Executor, work_items: Vec<WorkItem>, quiet: bool) -> Result<(), CliError> {
    if !quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    let (tx, rx) = std::sync::mpsc::channel();
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let formatter = OutputFormatter::new(quiet);
    let mut aggregator = ResultAggregator::new(ResultKey::expected(&work_items));
    let mut results = Vec::new();

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }

    if !aggregator.is_complete() {
        warn!("not all expected results were received");
    }

    executor_handle
        .join()
        .map_err(|_| CliError::Config("Executor thread panicked".to_string()))??;

    formatter.print_summary(&results);
    Ok(())
}

/// Registry of every linked solver carrying all of `tags`
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_build_registry_requires_every_tag() {
        let all = build_registry(&[]).unwrap();
        assert!(all.storage().contains(2025, 8));

        let grid = build_registry(&["grid".to_string()]).unwrap();
        assert!(grid.storage().contains(2025, 4));
        assert!(!grid.storage().contains(2025, 8));

        let both = build_registry(&["graph".to_string(), "union-find".to_string()]).unwrap();
        let days: Vec<_> = both.storage().iter_info().map(|info| info.day).collect();
        assert_eq!(days, vec![8]);

        assert!(build_registry(&["no-such-tag".to_string()]).unwrap().storage().is_empty());
    }

    #[test]
    fn test_missing_inputs_listed() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("2025_day07.txt"), "S\n").unwrap();
        let inputs = InputStore::new(temp.path().to_path_buf());
        let items = [
            WorkItem { year: 2025, day: 7, parts: 1..=2 },
            WorkItem { year: 2025, day: 8, parts: 1..=2 },
        ];
        assert_eq!(missing_inputs(&items, &inputs), vec![(2025, 8)]);
    }
}
