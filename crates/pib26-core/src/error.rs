//! Arithmetic errors.

use pib26_fft::FftError;

/// Errors surfaced by the arithmetic engine.
///
/// Undersized destinations are not errors: they truncate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArithError {
    /// A strategy was asked for a product longer than it was built for.
    #[error("product of {requested} digits exceeds strategy capacity of {capacity}")]
    CapacityExceeded { requested: usize, capacity: usize },

    /// No transform length fits the requested product.
    #[error("unsupported transform length {length} (root table has {table_size} entries)")]
    UnsupportedTransformLength { length: usize, table_size: usize },

    /// Reciprocal or inverse square root of zero.
    #[error("operand is zero")]
    ZeroOperand,

    /// Division by a zero small operand.
    #[error("division by zero")]
    DivisionByZero,

    /// A view constructor was handed less storage than the number needs.
    #[error("storage of {available} digits is too small, {needed} required")]
    InsufficientStorage { needed: usize, available: usize },
}

impl From<FftError> for ArithError {
    fn from(err: FftError) -> Self {
        match err {
            FftError::UnsupportedLength { length, table_size } => {
                Self::UnsupportedTransformLength { length, table_size }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fft_errors_convert() {
        let err: ArithError = FftError::UnsupportedLength {
            length: 10,
            table_size: 96,
        }
        .into();
        assert_eq!(
            err,
            ArithError::UnsupportedTransformLength {
                length: 10,
                table_size: 96
            }
        );
    }

    #[test]
    fn messages_name_the_numbers() {
        let err = ArithError::CapacityExceeded {
            requested: 2048,
            capacity: 1024,
        };
        assert_eq!(
            err.to_string(),
            "product of 2048 digits exceeds strategy capacity of 1024"
        );
    }
}
