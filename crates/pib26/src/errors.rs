//! Error handling and exit codes.

use pib26_core::exit_codes;
use pib26_core::ArithError;

/// Settings that parse but cannot run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("small threshold {small} must be below FFT threshold {fft}")]
    ThresholdOrder { small: usize, fft: usize },

    #[error("{name} threshold {threshold} exceeds the strategy capacity of {capacity}")]
    ThresholdAboveCapacity {
        name: &'static str,
        threshold: usize,
        capacity: usize,
    },
}

/// Exit code for an arithmetic error.
#[must_use]
pub fn handle_error(err: &ArithError) -> i32 {
    match err {
        ArithError::CapacityExceeded { .. } => exit_codes::ERROR_CAPACITY,
        ArithError::UnsupportedTransformLength { .. } => exit_codes::ERROR_TRANSFORM,
        ArithError::ZeroOperand | ArithError::DivisionByZero => exit_codes::ERROR_ZERO_OPERAND,
        ArithError::InsufficientStorage { .. } => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for whatever ended the run.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(arith) = err.downcast_ref::<ArithError>() {
        handle_error(arith)
    } else if err.downcast_ref::<ConfigError>().is_some() {
        exit_codes::ERROR_CONFIG
    } else {
        exit_codes::ERROR_GENERIC
    }
}
