#[macro_use]
mod macros;

pub mod accumulator;
pub mod cinterval;
pub mod constants;
pub mod cpzero;
pub mod error;
pub mod imath;
pub mod interval;
/// The `stagger_core` crate provides verified interval arithmetic over doubles and
/// over staggered multi-precision numbers (unevaluated sums of doubles).
///
/// Key components:
/// - **Accumulators**: exact dot-product accumulation, the basis of every rounded readout.
/// - **Staggered types**: `LReal`, `LInterval`, `LComplex`, `LCInterval`, working at the
///   thread-local limb count managed by `precision`.
/// - **Elementary functions**: `l_imath` (real) and `l_cimath` (complex) return
///   enclosures of the exact ranges.
/// - **Root solver**: `cpzero` encloses a root of a complex polynomial and the deflated
///   polynomial.
pub mod l_cimath;
pub mod l_cinterval;
pub mod l_complex;
pub mod l_imath;
pub mod l_interval;
pub mod l_real;
pub mod precision;
pub mod rounding;

pub use cinterval::CInterval;
pub use error::{ArithResult, ArithmeticError};
pub use interval::Interval;
pub use l_cinterval::LCInterval;
pub use l_complex::LComplex;
pub use l_interval::LInterval;
pub use l_real::LReal;
pub use precision::{stagprec, PrecisionGuard};
