//! Fibonacci algorithms: memoized, naive recursive and iterative.

use crate::calculator::{CoreCalculator, FibError};
use crate::complexity::Complexity;
use crate::memo::memoized_unchecked;

/// Top-down recursion backed by a per-call memo table.
pub struct MemoizedFibonacci;

impl MemoizedFibonacci {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for MemoizedFibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for MemoizedFibonacci {
    fn calculate_core(&self, n: u64) -> Result<u64, FibError> {
        memoized_unchecked(n).map(|(value, _)| value)
    }

    fn name(&self) -> &'static str {
        "Memoized"
    }

    fn complexity(&self) -> Complexity {
        Complexity::Linear
    }
}

/// Naive double recursion. Exponential: F(n) makes about 2 * F(n+1) calls.
pub struct RecursiveFibonacci;

impl RecursiveFibonacci {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn fib(n: u64) -> u64 {
        if n <= 1 {
            return n;
        }
        Self::fib(n - 1) + Self::fib(n - 2)
    }
}

impl Default for RecursiveFibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for RecursiveFibonacci {
    fn calculate_core(&self, n: u64) -> Result<u64, FibError> {
        Ok(Self::fib(n))
    }

    fn name(&self) -> &'static str {
        "Recursive"
    }

    fn complexity(&self) -> Complexity {
        Complexity::Exponential
    }
}

/// Bottom-up loop keeping only the last two values.
pub struct IterativeFibonacci;

impl IterativeFibonacci {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for IterativeFibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for IterativeFibonacci {
    fn calculate_core(&self, n: u64) -> Result<u64, FibError> {
        if n == 0 {
            return Ok(0);
        }
        let (mut a, mut b) = (0u64, 1u64);
        for _ in 1..n {
            let next = a.checked_add(b).ok_or(FibError::Overflow(n))?;
            a = std::mem::replace(&mut b, next);
        }
        Ok(b)
    }

    fn name(&self) -> &'static str {
        "Iterative"
    }

    fn complexity(&self) -> Complexity {
        Complexity::Linear
    }
}

/// Number of calls the naive recursion makes for F(n), which is
/// 2 * F(n+1) - 1. Saturates at `u64::MAX`.
#[must_use]
pub fn naive_call_count(n: u64) -> u64 {
    let (mut prev, mut curr) = (1u64, 1u64);
    for _ in 1..n {
        let next = prev.saturating_add(curr).saturating_add(1);
        prev = std::mem::replace(&mut curr, next);
    }
    curr
}
