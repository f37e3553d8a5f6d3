//! Orchestration interfaces.

use std::time::Duration;

use algolab_core::calculator::FibError;
use algolab_core::complexity::Complexity;

use crate::benchmark::Timing;

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a single Fibonacci result.
    fn present_result(&self, n: i64, result: &CalculationResult);

    /// Present a side-by-side comparison.
    fn present_comparison(&self, results: &[CalculationResult]);

    /// Present benchmark timings over `size` elements.
    fn present_timings(&self, size: usize, timings: &[Timing]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single calculation.
#[derive(Debug, Clone)]
pub struct CalculationResult {
    /// Algorithm name.
    pub algorithm: String,
    /// Time complexity of the algorithm.
    pub complexity: Complexity,
    /// The computed value or a structured error.
    pub outcome: Result<u64, FibError>,
    /// Computation duration.
    pub duration: Duration,
}

impl CalculationResult {
    /// The computed value, if the calculation succeeded.
    #[must_use]
    pub fn value(&self) -> Option<u64> {
        self.outcome.as_ref().ok().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculation_result_value() {
        let ok = CalculationResult {
            algorithm: "Memoized".into(),
            complexity: Complexity::Linear,
            outcome: Ok(55),
            duration: Duration::from_millis(1),
        };
        assert_eq!(ok.value(), Some(55));

        let err = CalculationResult {
            outcome: Err(FibError::InvalidArgument(-1)),
            ..ok
        };
        assert_eq!(err.value(), None);
    }
}
