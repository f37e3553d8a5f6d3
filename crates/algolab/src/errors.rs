//! Error handling and exit codes.

use algolab_core::calculator::FibError;
use algolab_core::constants::exit_codes;

/// Map a calculation error to its exit code.
#[must_use]
pub fn handle_error(err: &FibError) -> i32 {
    match err {
        FibError::InvalidArgument(_) | FibError::Config(_) => exit_codes::ERROR_CONFIG,
        FibError::Mismatch => exit_codes::ERROR_MISMATCH,
        FibError::AllocationFailure(_) | FibError::Overflow(_) | FibError::Calculation(_) => {
            exit_codes::ERROR_GENERIC
        }
    }
}

/// Exit code for an error surfaced from [`crate::app::run`].
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<FibError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use algolab_core::error::AlgoError;

    #[test]
    fn error_codes() {
        assert_eq!(handle_error(&FibError::InvalidArgument(-1)), 4);
        assert_eq!(handle_error(&FibError::Config("bad".into())), 4);
        assert_eq!(handle_error(&FibError::Mismatch), 3);
        assert_eq!(handle_error(&FibError::Overflow(94)), 1);
        assert_eq!(handle_error(&FibError::AllocationFailure(8)), 1);
    }

    #[test]
    fn exit_code_downcasts_through_anyhow() {
        let err = anyhow::Error::new(FibError::InvalidArgument(-5));
        assert_eq!(exit_code(&err), exit_codes::ERROR_CONFIG);

        let err = anyhow::Error::new(FibError::Mismatch).context("comparing calculators");
        assert_eq!(exit_code(&err), exit_codes::ERROR_MISMATCH);
    }

    #[test]
    fn other_errors_are_generic() {
        let err = anyhow::Error::new(AlgoError::CapacityExceeded(20));
        assert_eq!(exit_code(&err), exit_codes::ERROR_GENERIC);
        assert_eq!(exit_code(&anyhow::anyhow!("io")), exit_codes::ERROR_GENERIC);
    }
}
