//! Error handling and exit codes.

use fib_core::calculator::FibError;
use fib_core::constants::exit_codes;

/// Map a calculation error to its process exit code.
#[must_use]
pub fn handle_error(err: &FibError) -> i32 {
    match err {
        FibError::InvalidIndex(_) | FibError::IndexTooLarge { .. } | FibError::Config(_) => {
            exit_codes::ERROR_CONFIG
        }
        FibError::ResourceExhausted(_) => exit_codes::ERROR_RESOURCE,
        FibError::Mismatch => exit_codes::ERROR_MISMATCH,
        FibError::OutOfRange { .. } => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any application error: `FibError`s map through
/// [`handle_error`], everything else is a generic failure.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<FibError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
