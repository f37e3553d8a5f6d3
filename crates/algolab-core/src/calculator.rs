//! Calculator traits and the `CheckedCalculator` decorator.
//!
//! `Calculator` is the public trait consumed by orchestration.
//! `CoreCalculator` is the internal trait implemented by algorithms.
//! `CheckedCalculator` is a decorator that validates the index before
//! handing an in-range `u64` to the algorithm.

use std::sync::Arc;

use tracing::debug;

use crate::complexity::Complexity;
use crate::constants::MAX_FIB_U64;

/// Error type for Fibonacci calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// The requested index is negative.
    #[error("invalid argument: fibonacci index must be non-negative, got {0}")]
    InvalidArgument(i64),

    /// The memo table could not be allocated.
    #[error("allocation failure: could not allocate {0} memo slots")]
    AllocationFailure(usize),

    /// F(n) does not fit in a u64.
    #[error("F({0}) overflows u64 (maximum index is {max})", max = MAX_FIB_U64)]
    Overflow(u64),

    /// A calculation error occurred.
    #[error("calculation error: {0}")]
    Calculation(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Results from different algorithms don't match.
    #[error("result mismatch between algorithms")]
    Mismatch,
}

/// Validate a signed Fibonacci index and convert it to `u64`.
pub fn validate_index(n: i64) -> Result<u64, FibError> {
    let n = u64::try_from(n).map_err(|_| FibError::InvalidArgument(n))?;
    if n > MAX_FIB_U64 {
        return Err(FibError::Overflow(n));
    }
    Ok(n)
}

/// Public trait for Fibonacci calculators, consumed by orchestration.
pub trait Calculator: Send + Sync {
    /// Calculate F(n).
    fn calculate(&self, n: i64) -> Result<u64, FibError>;

    /// Get the name of this calculator.
    fn name(&self) -> &str;

    /// Time complexity of this calculator.
    fn complexity(&self) -> Complexity;
}

/// Internal trait for algorithm implementations.
/// Wrapped by `CheckedCalculator` which adds index validation.
pub trait CoreCalculator: Send + Sync {
    /// Compute F(n) for an index already known to be in range.
    fn calculate_core(&self, n: u64) -> Result<u64, FibError>;

    /// Get the name of this algorithm.
    fn name(&self) -> &'static str;

    /// Time complexity of this algorithm.
    fn complexity(&self) -> Complexity;
}

/// Decorator that wraps a `CoreCalculator` with index validation.
pub struct CheckedCalculator {
    inner: Arc<dyn CoreCalculator>,
}

impl CheckedCalculator {
    /// Create a new `CheckedCalculator` wrapping the given core calculator.
    #[must_use]
    pub fn new(inner: Arc<dyn CoreCalculator>) -> Self {
        Self { inner }
    }
}

impl Calculator for CheckedCalculator {
    fn calculate(&self, n: i64) -> Result<u64, FibError> {
        let n = validate_index(n)?;
        debug!(algorithm = self.inner.name(), n, "computing fibonacci");
        self.inner.calculate_core(n)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn complexity(&self) -> Complexity {
        self.inner.complexity()
    }
}
