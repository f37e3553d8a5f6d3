//! # algolab-orchestration
//!
//! Timed execution, calculator selection, parallel comparison and the sort
//! benchmark.

pub mod benchmark;
pub mod calculator_selection;
pub mod interfaces;
pub mod orchestrator;

pub use interfaces::{CalculationResult, ResultPresenter};
pub use orchestrator::{analyze_comparison_results, execute_calculations, time_it};
