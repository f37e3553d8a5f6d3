//! Errors raised by the non-Fibonacci algorithms.

/// Error type for array, matrix and recursion demos.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlgoError {
    /// A fixed-capacity container is full.
    #[error("capacity exceeded: cannot hold more than {0} elements")]
    CapacityExceeded(usize),

    /// Operand shapes are incompatible.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// The result does not fit in the target integer type.
    #[error("{operation}({n}) overflows u64")]
    Overflow {
        /// Name of the operation.
        operation: &'static str,
        /// The offending input.
        n: u64,
    },
}
