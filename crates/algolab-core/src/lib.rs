//! # algolab-core
//!
//! Core library for AlgoLab, a collection of classic algorithms annotated
//! with their Big-O behavior. The two centerpieces are top-down memoized
//! Fibonacci and in-place QuickSort with Lomuto partitioning; the remaining
//! modules provide the searches, sorts and recursive demos they are compared
//! against.

pub mod array_ops;
pub mod calculator;
pub mod complexity;
pub mod constants;
pub mod error;
pub mod fibonacci;
pub mod linked_list;
pub mod matrix;
pub mod memo;
pub mod quicksort;
pub mod recursion;
pub mod registry;
pub mod search;
pub mod sorting;

// Re-exports
pub use calculator::{Calculator, CheckedCalculator, CoreCalculator, FibError};
pub use complexity::{Commentary, Complexity};
pub use constants::{exit_codes, DEMO_ARRAY, FIB_TABLE, MAX_FIB_U64};
pub use error::AlgoError;
pub use memo::{fibonacci_memoized, fibonacci_memoized_counted, MemoStats, MemoTable};
pub use quicksort::{partition, quicksort, quicksort_slice, SortStats};
pub use registry::{CalculatorFactory, DefaultFactory};
