//! Core orchestration: timed execution and result analysis.

use std::sync::Arc;
use std::time::{Duration, Instant};

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::{info, warn};

use algolab_core::calculator::{Calculator, FibError};

use crate::interfaces::CalculationResult;

/// Run `f` and return its result along with the elapsed wall time.
pub fn time_it<R>(f: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

fn run_one(calc: &dyn Calculator, n: i64) -> CalculationResult {
    let (outcome, duration) = time_it(|| calc.calculate(n));
    CalculationResult {
        algorithm: calc.name().to_string(),
        complexity: calc.complexity(),
        outcome,
        duration,
    }
}

/// Execute calculations with all given calculators.
///
/// A single calculator runs on the calling thread; several run in parallel
/// on the rayon pool. Results keep the order of `calculators`.
pub fn execute_calculations(calculators: &[Arc<dyn Calculator>], n: i64) -> Vec<CalculationResult> {
    if let [calc] = calculators {
        return vec![run_one(calc.as_ref(), n)];
    }

    calculators
        .par_iter()
        .map(|calc| run_one(calc.as_ref(), n))
        .collect()
}

/// Analyze comparison results for mismatches.
pub fn analyze_comparison_results(results: &[CalculationResult]) -> Result<(), FibError> {
    let mut values = results.iter().filter_map(|r| r.value().map(|v| (r, v)));

    let Some((first, expected)) = values.next() else {
        return Err(FibError::Calculation("no valid results".into()));
    };

    for (result, value) in values {
        if value != expected {
            warn!(
                expected_from = %first.algorithm,
                expected,
                got_from = %result.algorithm,
                got = value,
                "fibonacci results disagree"
            );
            return Err(FibError::Mismatch);
        }
    }

    info!(count = results.len(), value = expected, "all results agree");
    Ok(())
}
