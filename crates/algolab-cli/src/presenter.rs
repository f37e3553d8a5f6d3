//! CLI result presenter.

use algolab_orchestration::benchmark::Timing;
use algolab_orchestration::interfaces::{CalculationResult, ResultPresenter};

use crate::output::{format_duration, format_number};
use crate::ui::print_error;

/// CLI result presenter.
pub struct CliResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CliResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Lines for a single result. Failures yield one `algorithm: error` line.
    #[must_use]
    pub fn result_lines(&self, n: i64, result: &CalculationResult) -> Vec<String> {
        let value = match &result.outcome {
            Ok(value) => *value,
            Err(e) => return vec![format!("{}: {e}", result.algorithm)],
        };

        if self.quiet {
            return vec![value.to_string()];
        }

        let mut lines = vec![format!("F({n}) = {}", format_number(value))];
        if self.verbose {
            lines.push(format!("  algorithm:  {}", result.algorithm));
            lines.push(format!("  complexity: {}", result.complexity));
            lines.push(format!("  duration:   {}", format_duration(result.duration)));
        }
        lines
    }

    /// Lines for the comparison table.
    #[must_use]
    pub fn comparison_lines(&self, results: &[CalculationResult]) -> Vec<String> {
        if self.quiet {
            return Vec::new();
        }
        let mut lines = vec![format!("{:-<60}", "")];
        for result in results {
            let status = if result.outcome.is_err() {
                "ERROR"
            } else {
                "OK"
            };
            lines.push(format!(
                "  {:<12} {:<10} {:>12} [{}]",
                result.algorithm,
                result.complexity.notation(),
                format_duration(result.duration),
                status,
            ));
        }
        lines
    }

    /// Lines for benchmark timings.
    #[must_use]
    pub fn timing_lines(&self, size: usize, timings: &[Timing]) -> Vec<String> {
        if self.quiet {
            return Vec::new();
        }
        let mut lines = vec![format!("{} elements:", format_number(size as u64))];
        for timing in timings {
            lines.push(format!(
                "  {:<14} {:<11} {:>12}",
                timing.algorithm,
                timing.complexity.notation(),
                format_duration(timing.duration),
            ));
        }
        lines
    }
}

impl ResultPresenter for CliResultPresenter {
    fn present_result(&self, n: i64, result: &CalculationResult) {
        if result.outcome.is_err() {
            for line in self.result_lines(n, result) {
                print_error(&line);
            }
            return;
        }
        for line in self.result_lines(n, result) {
            println!("{line}");
        }
    }

    fn present_comparison(&self, results: &[CalculationResult]) {
        for line in self.comparison_lines(results) {
            println!("{line}");
        }
    }

    fn present_timings(&self, size: usize, timings: &[Timing]) {
        for line in self.timing_lines(size, timings) {
            println!("{line}");
        }
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use algolab_core::calculator::FibError;
    use algolab_core::complexity::Complexity;

    fn ok(algorithm: &str, value: u64) -> CalculationResult {
        CalculationResult {
            algorithm: algorithm.into(),
            complexity: Complexity::Linear,
            outcome: Ok(value),
            duration: Duration::from_millis(5),
        }
    }

    #[test]
    fn quiet_prints_only_the_number() {
        let presenter = CliResultPresenter::new(false, true);
        assert_eq!(presenter.result_lines(10, &ok("Memoized", 55)), vec!["55"]);
    }

    #[test]
    fn normal_formats_with_separators() {
        let presenter = CliResultPresenter::new(false, false);
        assert_eq!(
            presenter.result_lines(30, &ok("Memoized", 832_040)),
            vec!["F(30) = 832,040"]
        );
    }

    #[test]
    fn verbose_adds_details() {
        let presenter = CliResultPresenter::new(true, false);
        let lines = presenter.result_lines(10, &ok("Iterative", 55));
        assert_eq!(lines.len(), 4);
        assert!(lines[1].contains("Iterative"));
        assert!(lines[2].contains("O(n)"));
    }

    #[test]
    fn errors_name_the_algorithm() {
        let presenter = CliResultPresenter::new(false, true);
        let result = CalculationResult {
            outcome: Err(FibError::InvalidArgument(-1)),
            ..ok("Memoized", 0)
        };
        let lines = presenter.result_lines(-1, &result);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Memoized: invalid argument"));
    }

    #[test]
    fn comparison_quiet_is_empty() {
        let presenter = CliResultPresenter::new(false, true);
        assert!(presenter.comparison_lines(&[ok("A", 1)]).is_empty());
    }

    #[test]
    fn comparison_marks_errors() {
        let presenter = CliResultPresenter::new(false, false);
        let failed = CalculationResult {
            outcome: Err(FibError::Calculation("boom".into())),
            ..ok("Recursive", 0)
        };
        let lines = presenter.comparison_lines(&[ok("Memoized", 55), failed]);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].ends_with("[OK]"));
        assert!(lines[2].ends_with("[ERROR]"));
    }

    #[test]
    fn timing_lines_list_each_algorithm() {
        let presenter = CliResultPresenter::new(false, false);
        let timings = vec![Timing {
            algorithm: "QuickSort",
            complexity: Complexity::Linearithmic,
            duration: Duration::from_micros(300),
        }];
        let lines = presenter.timing_lines(10_000, &timings);
        assert_eq!(lines[0], "10,000 elements:");
        assert!(lines[1].contains("QuickSort"));
        assert!(lines[1].contains("O(n log n)"));
    }

    #[test]
    fn present_does_not_panic() {
        let presenter = CliResultPresenter::new(false, false);
        presenter.present_result(10, &ok("Memoized", 55));
        presenter.present_comparison(&[]);
        presenter.present_timings(0, &[]);
        presenter.present_error("test error message");
    }
}
