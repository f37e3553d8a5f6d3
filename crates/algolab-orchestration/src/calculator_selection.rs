//! Calculator selection logic.

use std::sync::Arc;

use tracing::warn;

use algolab_core::calculator::{Calculator, FibError};
use algolab_core::constants::MAX_NAIVE_FIB_N;
use algolab_core::registry::CalculatorFactory;

const NAIVE: &str = "recursive";

/// Get calculators to run based on algorithm selection.
///
/// The naive recursion is exponential, so it is left out of `all` when `n`
/// exceeds `MAX_NAIVE_FIB_N` and refused when requested explicitly.
pub fn get_calculators_to_run(
    algo: &str,
    n: i64,
    factory: &dyn CalculatorFactory,
) -> Result<Vec<Arc<dyn Calculator>>, FibError> {
    let naive_too_slow = u64::try_from(n).is_ok_and(|n| n > MAX_NAIVE_FIB_N);
    match algo {
        "all" => {
            let mut calcs = Vec::new();
            for name in factory.available() {
                if name == NAIVE && naive_too_slow {
                    warn!(n, "skipping naive recursion above F({MAX_NAIVE_FIB_N})");
                    continue;
                }
                calcs.push(factory.get(name)?);
            }
            Ok(calcs)
        }
        "recursive" | "naive" if naive_too_slow => Err(FibError::Config(format!(
            "naive recursion is limited to n <= {MAX_NAIVE_FIB_N}, got {n}"
        ))),
        name => {
            let calc = factory.get(name)?;
            Ok(vec![calc])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algolab_core::registry::DefaultFactory;

    #[test]
    fn select_all() {
        let factory = DefaultFactory::new();
        let calcs = get_calculators_to_run("all", 20, &factory).unwrap();
        assert_eq!(calcs.len(), 3);
    }

    #[test]
    fn select_all_skips_naive_for_large_n() {
        let factory = DefaultFactory::new();
        let calcs = get_calculators_to_run("all", 60, &factory).unwrap();
        assert_eq!(calcs.len(), 2);
        assert!(calcs.iter().all(|c| c.name() != "Recursive"));
    }

    #[test]
    fn select_single() {
        let factory = DefaultFactory::new();
        let calcs = get_calculators_to_run("memo", 20, &factory).unwrap();
        assert_eq!(calcs.len(), 1);
        assert_eq!(calcs[0].name(), "Memoized");
    }

    #[test]
    fn select_naive_too_large() {
        let factory = DefaultFactory::new();
        assert!(matches!(
            get_calculators_to_run("recursive", 41, &factory),
            Err(FibError::Config(_))
        ));
        assert!(get_calculators_to_run("recursive", 40, &factory).is_ok());
    }

    #[test]
    fn negative_n_still_selects() {
        // Validation of n is the calculator's job.
        let factory = DefaultFactory::new();
        assert_eq!(get_calculators_to_run("all", -3, &factory).unwrap().len(), 3);
    }

    #[test]
    fn select_unknown() {
        let factory = DefaultFactory::new();
        let result = get_calculators_to_run("unknown", 20, &factory);
        assert!(result.is_err());
    }
}
