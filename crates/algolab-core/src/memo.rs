//! Top-down memoized Fibonacci.
//!
//! A `MemoTable` caches F(i) for i in `0..=n`. Each slot is written at most
//! once, which turns the exponential naive recursion into O(n) time and
//! O(n) space. The table is owned by a single top-level query and dropped
//! when the query returns.

use tracing::debug;

use crate::calculator::{validate_index, FibError};
use crate::constants::MAX_FIB_U64;

/// Lazily populated cache of Fibonacci values.
#[derive(Debug)]
pub struct MemoTable {
    slots: Vec<Option<u64>>,
    computations: Vec<u32>,
    hits: u64,
}

impl MemoTable {
    /// Allocate a table covering indices `0..=n` (at least one slot).
    ///
    /// Slots 0 and 1 are seeded with the base cases; every other slot
    /// starts unset. `n` above `MAX_FIB_U64` is refused, which keeps every
    /// stored value in `u64` and the recursion in [`MemoTable::fib`] at most
    /// 94 frames deep.
    pub fn new(n: u64) -> Result<Self, FibError> {
        if n > MAX_FIB_U64 {
            return Err(FibError::Overflow(n));
        }
        let size = usize::try_from(n)
            .ok()
            .and_then(|n| n.checked_add(1))
            .ok_or(FibError::AllocationFailure(usize::MAX))?;

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(size)
            .map_err(|_| FibError::AllocationFailure(size))?;
        slots.resize(size, None);

        let mut computations = Vec::new();
        computations
            .try_reserve_exact(size)
            .map_err(|_| FibError::AllocationFailure(size))?;
        computations.resize(size, 0);

        debug!(size, "allocated memo table");

        let mut table = Self {
            slots,
            computations,
            hits: 0,
        };
        table.store(0, 0);
        if size > 1 {
            table.store(1, 1);
        }
        Ok(table)
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false: a table holds at least F(0).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Cached value for index `i`, if computed.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<u64> {
        self.slots.get(i).copied().flatten()
    }

    /// Compute F(i), filling the table on the way down.
    ///
    /// Panics if `i` is outside the table.
    pub fn fib(&mut self, i: usize) -> u64 {
        if let Some(value) = self.slots[i] {
            self.hits += 1;
            return value;
        }
        // Slots 0 and 1 are always seeded, so i >= 2 here.
        let value = self.fib(i - 1) + self.fib(i - 2);
        self.store(i, value);
        value
    }

    /// Consume the table and return its instrumentation.
    #[must_use]
    pub fn into_stats(self) -> MemoStats {
        MemoStats {
            computations: self.computations,
            hits: self.hits,
        }
    }

    fn store(&mut self, i: usize, value: u64) {
        debug_assert!(self.slots[i].is_none(), "memo slot {i} written twice");
        self.slots[i] = Some(value);
        self.computations[i] += 1;
    }
}

/// Instrumentation captured from one memoized computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoStats {
    /// How many times each index was computed (rather than read back).
    pub computations: Vec<u32>,
    /// Number of cache hits.
    pub hits: u64,
}

impl MemoStats {
    /// True when every index was computed exactly once.
    #[must_use]
    pub fn each_index_once(&self) -> bool {
        self.computations.iter().all(|&c| c == 1)
    }

    /// Total number of computed (non-cached) values.
    #[must_use]
    pub fn total_computations(&self) -> u64 {
        self.computations.iter().map(|&c| u64::from(c)).sum()
    }
}

/// Compute F(n) with a fresh memo table.
///
/// # Errors
///
/// `InvalidArgument` for negative `n`, `Overflow` when F(n) exceeds `u64`,
/// `AllocationFailure` if the table cannot be allocated.
///
/// # Example
/// ```
/// assert_eq!(algolab_core::memo::fibonacci_memoized(10), Ok(55));
/// ```
pub fn fibonacci_memoized(n: i64) -> Result<u64, FibError> {
    fibonacci_memoized_counted(n).map(|(value, _)| value)
}

/// Like [`fibonacci_memoized`], also returning the table's instrumentation.
pub fn fibonacci_memoized_counted(n: i64) -> Result<(u64, MemoStats), FibError> {
    let n = validate_index(n)?;
    memoized_unchecked(n)
}

/// Compute F(n) for an index already validated against `MAX_FIB_U64`.
pub(crate) fn memoized_unchecked(n: u64) -> Result<(u64, MemoStats), FibError> {
    let mut table = MemoTable::new(n)?;
    let index = usize::try_from(n).map_err(|_| FibError::AllocationFailure(usize::MAX))?;
    let value = table.fib(index);
    Ok((value, table.into_stats()))
}
