//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;
use std::time::{Duration, Instant};

/// Prints results as they become ready and a closing summary
pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    pub fn print_result(&self, result: &SolverResult) {
        match (&result.answer, self.quiet) {
            (Ok(answer), true) => println!("{}", answer),
            (Ok(_), false) => println!("{}", format_line(result)),
            (Err(e), true) => eprintln!("Error: {}", e),
            (Err(_), false) => eprintln!("{}", format_line(result)),
        }
    }

    /// Print totals; nothing in quiet mode
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }
        println!();
        for line in summary_lines(results, self.start_time.elapsed()) {
            println!("{}", line);
        }
    }
}

/// `YYYY/DD Part P: answer (parse: …, solve: …)` or the error in its place
fn format_line(result: &SolverResult) -> String {
    let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);
    match &result.answer {
        Ok(answer) => {
            let parse_timing = result
                .parse_duration
                .map(|d| format!("parse: {}, ", format_duration(d)))
                .unwrap_or_default();
            format!(
                "{}: {} ({}solve: {})",
                prefix,
                answer,
                parse_timing,
                format_duration(result.solve_duration)
            )
        }
        Err(e) => format!("{}: Error - {}", prefix, e),
    }
}

fn summary_lines(results: &[SolverResult], elapsed: Duration) -> Vec<String> {
    let solved: Vec<_> = results.iter().filter(|r| r.answer.is_ok()).collect();
    let failed = results.len() - solved.len();

    let parse_time: TimeDelta = solved.iter().filter_map(|r| r.parse_duration).sum();
    let solve_time: TimeDelta = solved.iter().map(|r| r.solve_duration).sum();

    let mut lines = vec![
        "--- Summary ---".to_string(),
        format!("Solvers: {} solved, {} failed", solved.len(), failed),
        format!("Total parse time: {}", format_duration(parse_time)),
        format!("Total solve time: {}", format_duration(solve_time)),
        format!("Elapsed wall-clock time: {}", format_std_duration(elapsed)),
    ];
    if !elapsed.is_zero() {
        let compute_secs =
            (parse_time + solve_time).num_microseconds().unwrap_or(0) as f64 / 1_000_000.0;
        lines.push(format!(
            "Speedup factor: {:.2}x",
            compute_secs / elapsed.as_secs_f64()
        ));
    }
    lines
}

fn format_micros(micros: u128) -> String {
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

fn format_duration(d: TimeDelta) -> String {
    match d.num_microseconds() {
        None => "N/A".to_string(),
        Some(micros) if micros < 0 => format!("-{}", format_micros(micros.unsigned_abs().into())),
        Some(micros) => format_micros(micros.unsigned_abs().into()),
    }
}

/// Wall-clock time comes from `Instant`, not chrono
fn format_std_duration(d: Duration) -> String {
    format_micros(d.as_micros())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ArcExecutorError, ExecutorError};
    use std::path::PathBuf;

    fn solved(part: u8, answer: &str, parse_ms: Option<i64>, solve_us: i64) -> SolverResult {
        SolverResult {
            year: 2025,
            day: 8,
            part,
            answer: Ok(answer.to_string()),
            parse_duration: parse_ms.map(TimeDelta::milliseconds),
            solve_duration: TimeDelta::microseconds(solve_us),
        }
    }

    fn missing(part: u8) -> SolverResult {
        let error: ArcExecutorError = ExecutorError::MissingInput {
            year: 2025,
            day: 8,
            path: PathBuf::from("in/2025_day08.txt"),
        }
        .into();
        SolverResult {
            year: 2025,
            day: 8,
            part,
            answer: Err(error),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-20)), "-20µs");
        assert_eq!(format_std_duration(Duration::from_micros(12_340)), "12.34ms");
    }

    #[test]
    fn test_result_lines() {
        assert_eq!(
            format_line(&solved(1, "40", Some(3), 250)),
            "2025/08 Part 1: 40 (parse: 3.00ms, solve: 250µs)"
        );
        assert_eq!(
            format_line(&solved(2, "25272", None, 1200)),
            "2025/08 Part 2: 25272 (solve: 1.20ms)"
        );
        assert_eq!(
            format_line(&missing(1)),
            "2025/08 Part 1: Error - Missing input for 2025/08: in/2025_day08.txt not found"
        );
    }

    #[test]
    fn test_summary_counts_only_solved_parts() {
        let results = [solved(1, "40", Some(2), 1000), solved(2, "25272", None, 1000), missing(1)];
        let lines = summary_lines(&results, Duration::from_millis(2));
        assert_eq!(
            lines,
            vec![
                "--- Summary ---",
                "Solvers: 2 solved, 1 failed",
                "Total parse time: 2.00ms",
                "Total solve time: 2.00ms",
                "Elapsed wall-clock time: 2.00ms",
                "Speedup factor: 2.00x",
            ]
        );
    }
}
