//! Elementary functions (square root, exponential, natural logarithm, linear interpolation) and
//! trigonometric functions on [`FixedPoint`].
//!
//! Everything here is built exclusively from `FixedPoint` arithmetic, with a fixed number of steps
//! per function, so that results are bit-for-bit reproducible. Consequently, results are only as
//! accurate as 8 decimal digits with truncating arithmetic allow; see each function for details.

use crate::{FixedPoint, MathError};

/// Mathematical constants
mod consts;

/// Square root
mod sqrt;

/// Exponential
mod exp;

/// Natural logarithm
mod log;

/// Linear interpolation
mod lerp;

/// Reduction of angles into `[-π, π]`
mod normalize;

/// The CORDIC engine and the trigonometric functions built on it
mod cordic;

pub use cordic::{CordicEntry, CosSin, TrigContext, CORDIC_TABLE};
