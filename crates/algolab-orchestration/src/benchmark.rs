//! Search and sort benchmark over seeded random data.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use algolab_core::complexity::Complexity;
use algolab_core::constants::BENCH_VALUE_RANGE;
use algolab_core::quicksort::quicksort_slice;
use algolab_core::search::{binary_search_iterative, linear_search};
use algolab_core::sorting::{bubble_sort, is_sorted, merge_sort};

use crate::orchestrator::time_it;

/// Bubble sort is only timed up to this many elements.
pub const MAX_BUBBLE_SIZE: usize = 5_000;

/// Value searched for by the search benchmarks.
pub const SEARCH_TARGET: i64 = 500;

/// Benchmark failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BenchError {
    /// A sort produced out-of-order output.
    #[error("{0} produced unsorted output")]
    Unsorted(&'static str),

    /// A sort disagreed with the standard library.
    #[error("{0} disagrees with the standard library sort")]
    Disagreement(&'static str),

    /// Searches disagreed on whether the target is present.
    #[error("searches disagree on presence of {0}")]
    SearchMismatch(i64),
}

/// One timed benchmark step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timing {
    /// Algorithm name.
    pub algorithm: &'static str,
    /// Time complexity of the algorithm.
    pub complexity: Complexity,
    /// Elapsed wall time.
    pub duration: Duration,
}

/// `size` values in `0..BENCH_VALUE_RANGE`, reproducible for a given seed.
#[must_use]
pub fn random_values(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.gen_range(0..BENCH_VALUE_RANGE)).collect()
}

/// Time the searches and sorts over the same random input, checking that
/// every sort produces the same ordered output.
pub fn run_benchmark(size: usize, seed: u64) -> Result<Vec<Timing>, BenchError> {
    let data = random_values(size, seed);
    debug!(size, seed, "generated benchmark input");
    let mut timings = Vec::new();

    let (linear, duration) = time_it(|| linear_search(&data, &SEARCH_TARGET));
    timings.push(Timing {
        algorithm: "LinearSearch",
        complexity: Complexity::Linear,
        duration,
    });

    let mut reference = data.clone();
    let ((), duration) = time_it(|| reference.sort_unstable());
    timings.push(Timing {
        algorithm: "StdSort",
        complexity: Complexity::Linearithmic,
        duration,
    });

    let (binary, duration) = time_it(|| binary_search_iterative(&reference, &SEARCH_TARGET));
    timings.push(Timing {
        algorithm: "BinarySearch",
        complexity: Complexity::Logarithmic,
        duration,
    });
    if linear.is_some() != binary.is_some() {
        return Err(BenchError::SearchMismatch(SEARCH_TARGET));
    }

    let mut quick = data.clone();
    let ((), duration) = time_it(|| quicksort_slice(&mut quick));
    verify("QuickSort", &quick, &reference)?;
    timings.push(Timing {
        algorithm: "QuickSort",
        complexity: Complexity::Linearithmic,
        duration,
    });

    let (merged, duration) = time_it(|| merge_sort(&data));
    verify("MergeSort", &merged, &reference)?;
    timings.push(Timing {
        algorithm: "MergeSort",
        complexity: Complexity::Linearithmic,
        duration,
    });

    if size <= MAX_BUBBLE_SIZE {
        let ((bubbled, _), duration) = time_it(|| bubble_sort(&data));
        verify("BubbleSort", &bubbled, &reference)?;
        timings.push(Timing {
            algorithm: "BubbleSort",
            complexity: Complexity::Quadratic,
            duration,
        });
    } else {
        debug!(size, "skipping bubble sort");
    }

    Ok(timings)
}

fn verify(algorithm: &'static str, output: &[i64], reference: &[i64]) -> Result<(), BenchError> {
    if !is_sorted(output) {
        return Err(BenchError::Unsorted(algorithm));
    }
    if output != reference {
        return Err(BenchError::Disagreement(algorithm));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_values_are_reproducible() {
        assert_eq!(random_values(100, 7), random_values(100, 7));
        assert_ne!(random_values(100, 7), random_values(100, 8));
    }

    #[test]
    fn random_values_in_range() {
        assert!(random_values(1000, 1)
            .iter()
            .all(|&v| (0..BENCH_VALUE_RANGE).contains(&v)));
    }

    #[test]
    fn small_benchmark_includes_bubble() {
        let timings = run_benchmark(200, 42).unwrap();
        let names: Vec<_> = timings.iter().map(|t| t.algorithm).collect();
        assert_eq!(
            names,
            vec![
                "LinearSearch",
                "StdSort",
                "BinarySearch",
                "QuickSort",
                "MergeSort",
                "BubbleSort"
            ]
        );
    }

    #[test]
    fn large_benchmark_skips_bubble() {
        let timings = run_benchmark(MAX_BUBBLE_SIZE + 1, 42).unwrap();
        assert!(timings.iter().all(|t| t.algorithm != "BubbleSort"));
    }

    #[test]
    fn empty_benchmark() {
        assert!(run_benchmark(0, 0).is_ok());
    }

    #[test]
    fn verify_detects_problems() {
        assert_eq!(
            verify("X", &[2, 1], &[1, 2]),
            Err(BenchError::Unsorted("X"))
        );
        assert_eq!(
            verify("X", &[1, 3], &[1, 2]),
            Err(BenchError::Disagreement("X"))
        );
    }
}
