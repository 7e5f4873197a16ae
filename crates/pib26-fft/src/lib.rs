//! # pib26-fft
//!
//! Complex floating-point transforms for FFT multiplication of digit strings.
//!
//! Every transform reads its twiddle factors from one [`RootTable`] built for
//! the largest length a run needs, so a transform of length `n` is available
//! whenever `n` divides the table length. Forward transforms are
//! decimation-in-frequency and leave their output in digit-reversed order;
//! inverse transforms consume that order and are unscaled, so
//! `inverse(forward(x)) == n * x`. Pointwise products do not care about the
//! permutation, which is all multiplication needs.

pub mod complex;
pub mod error;
pub mod rad2_itr;
pub mod rad2_rec;
pub mod rad3_rec;
pub mod rad4_itr;
pub mod rad4_rec;
pub mod roots;
pub mod transform;

pub use complex::Complex;
pub use error::FftError;
pub use rad2_itr::Rad2Itr;
pub use rad2_rec::Rad2Rec;
pub use rad3_rec::Rad3Rec;
pub use rad4_itr::Rad4Itr;
pub use rad4_rec::Rad4Rec;
pub use roots::RootTable;
pub use transform::{ComplexFft, ITERATIVE_THRESHOLD};
