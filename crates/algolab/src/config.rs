//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use algolab_core::constants::{DEFAULT_BENCH_SIZE, DEFAULT_FIB_N};

/// AlgoLab: classic algorithms with Big-O commentary and timing.
#[derive(Parser, Debug)]
#[command(name = "algolab", version, about)]
pub struct AppConfig {
    /// Demonstration to run.
    #[arg(long, value_enum, default_value_t = Demo::All)]
    pub demo: Demo,

    /// Fibonacci index to compute.
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_FIB_N,
        env = "ALGOLAB_N",
        allow_negative_numbers = true
    )]
    pub n: i64,

    /// Fibonacci algorithm: memo, iterative, recursive, or all.
    #[arg(long, default_value = "all")]
    pub algo: String,

    /// Number of random elements in the sort benchmark.
    #[arg(long, default_value_t = DEFAULT_BENCH_SIZE)]
    pub size: usize,

    /// Seed for the benchmark's random input.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Verbose output.
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Quiet mode (only print results).
    #[arg(short, long)]
    pub quiet: bool,

    /// Write a JSON report to this path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

/// Which demonstration to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    /// Memoized Fibonacci and calculator comparison.
    Fib,
    /// QuickSort on the demo array plus the sort benchmark.
    Sort,
    /// Fixed-capacity array operations.
    Arrays,
    /// Linear and binary search.
    Search,
    /// Factorial, Tower of Hanoi, permutations and subsets.
    Recursion,
    /// Matrix traversal and multiplication.
    Matrix,
    /// Singly linked list.
    List,
    /// Every demonstration in order.
    All,
}

impl Demo {
    /// Demos run for this selection, in display order.
    #[must_use]
    pub fn expand(self) -> Vec<Demo> {
        match self {
            Demo::All => vec![
                Demo::Arrays,
                Demo::Search,
                Demo::Sort,
                Demo::Recursion,
                Demo::Fib,
                Demo::Matrix,
                Demo::List,
            ],
            single => vec![single],
        }
    }
}
