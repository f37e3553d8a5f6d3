//! Constants shared by the algorithms and the demo driver.

/// Maximum Fibonacci index that fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = 93;

/// Largest n for which n! fits in a u64 (20! = 2432902008176640000).
pub const MAX_FACTORIAL_U64: u64 = 20;

/// Default Fibonacci index used by the demos.
pub const DEFAULT_FIB_N: i64 = 20;

/// Above this index the naive recursive Fibonacci is refused by the demo
/// driver; F(40) already takes hundreds of millions of calls.
pub const MAX_NAIVE_FIB_N: u64 = 40;

/// Default element count for the sort benchmark.
pub const DEFAULT_BENCH_SIZE: usize = 10_000;

/// Upper bound (exclusive) for randomly generated benchmark values.
pub const BENCH_VALUE_RANGE: i64 = 1000;

/// The ten-element array every demo starts from.
pub const DEMO_ARRAY: [i64; 10] = [50, 10, 40, 20, 30, 15, 25, 35, 45, 5];

/// Capacity of the fixed-size array used by the insertion demo.
pub const DEMO_ARRAY_CAPACITY: usize = 20;

/// Precomputed Fibonacci values for n = 0..=93.
///
/// Used as the reference table when validating calculators.
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Algorithm results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid argument or configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
