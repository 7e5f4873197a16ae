//! Radix, precision and threshold constants.

/// One place-value cell.
pub type Digit = u32;

/// Wide enough for `BASE^2 - 1` and for a small operand times `BASE`.
pub type TwoDigit = u64;

/// Radix of the printed output.
pub const BASE_MINOR: Digit = 26;

/// Output digits packed into one [`Digit`].
pub const DIGS_PER_DIG: usize = 4;

/// Radix of a [`Digit`]: `26^4`.
pub const BASE: Digit = 456_976;

/// Digits in the widest small operand (`u32`).
pub const DIGS_PER_SMALL: usize = 2;

/// Extra digits a float carries beneath its nominal precision.
pub const GUARD_PREC: usize = 1;

/// Refinement steps run at the starting precision of a Newton iteration.
pub const NEWTON_SEED_ITERATIONS: usize = 8;

/// Digits the FFT strategy may shave off an operand to stay below a
/// power-of-two transform length.
pub const THRESHOLD_SMOOTHING: usize = 4;

/// Bits of each double's mantissa held back from the exactness bound to
/// absorb rounding error in the transforms.
pub const ROUNDING_MARGIN_BITS: u32 = 8;

/// Default capacities and switch-over points used by the driver.
pub mod defaults {
    /// Product capacity of the schoolbook strategy.
    pub const CLASSICAL_MAX_PRODUCT: usize = 1024;
    /// Product capacity of the Karatsuba strategy.
    pub const KARATSUBA_MAX_PRODUCT: usize = 16_384;
    /// Minimum product capacity of the FFT strategy.
    pub const FFT_MIN_PRODUCT: usize = 16_384;
    /// Headroom added to the FFT capacity.
    pub const FFT_HEADROOM: usize = 16;
    /// Product length from which Karatsuba takes over from schoolbook.
    pub const SMALL_THRESHOLD: usize = 128;
    /// Product length from which FFT takes over from Karatsuba.
    pub const FFT_THRESHOLD: usize = 2048;
}

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// A multiplication strategy was asked for more than its capacity.
    pub const ERROR_CAPACITY: i32 = 2;
    /// No transform length fits the requested product.
    pub const ERROR_TRANSFORM: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// A zero operand where a nonzero one is required.
    pub const ERROR_ZERO_OPERAND: i32 = 5;
}
