//! This crate provides a deterministic, platform-independent software implementation of
//! *decimal fixed-point* arithmetic, plus the elementary functions (square root, exponential,
//! natural logarithm) and trigonometric functions (via [CORDIC]) built entirely on top of it.
//!
//! # Introduction
//!
//! Native floating point is fast, but it is not reproducible: the same program may produce
//! slightly different results on different CPUs, compilers, or optimisation levels. That is fatal
//! for lockstep networking, deterministic simulation, or replays, where every machine must reach a
//! bit-identical state.
//!
//! A [`FixedPoint`] is a sign, an integer magnitude, and a fraction magnitude with exactly
//! [`DIGITS`] = 8 decimal digits (i.e. the fraction is scaled by [`SCALE`] = 10⁸). Every operation
//! is pure integer arithmetic with a fixed number of steps, so identical inputs give identical
//! outputs everywhere.
//!
//! The representable range is `[-10⁸, 10⁸)`. Values outside it *wrap around*, exactly like
//! fixed-width integers do, and the result records that it [overflowed](FixedPoint::overflowed).
//!
//! # Usage
//!
//! ```
//! use soft_fixed::FixedPoint;
//!
//! // Create values from ints, decimal text, or a raw (integer, fraction) pair.
//! let a = FixedPoint::from(3);
//! let b: FixedPoint = "-0.25".parse().unwrap();
//! let c = FixedPoint::from_parts(1, 50_000_000);
//!
//! // Basic arithmetic and comparisons with the usual operators.
//! assert_eq!(a * b + c, FixedPoint::from_parts(0, 75_000_000));
//! assert!(b < FixedPoint::ZERO);
//!
//! // The canonical text form always has 8 fractional digits.
//! assert_eq!((a / FixedPoint::from(8)).to_string(), "0.37500000");
//!
//! // Elementary and trigonometric functions.
//! assert_eq!(FixedPoint::from(4).sqrt(), Ok(FixedPoint::from(2)));
//! assert_eq!(FixedPoint::ZERO.sin(), Ok(FixedPoint::ZERO));
//! assert!(FixedPoint::from(-1).ln().is_err());
//! ```
//!
//! # Errors and saturation
//!
//! Functions with a restricted domain (square root of a negative, logarithm of a non-positive,
//! arcsine outside `[-1, 1]`, …) return a [`MathError`]. Division by zero and the tangent at a
//! zero cosine are *not* errors: they saturate to a sentinel close to [`FixedPoint::MAX`] or
//! [`FixedPoint::MIN`].
//!
//! [CORDIC]: https://en.wikipedia.org/wiki/CORDIC

mod error;
mod fixed;
mod math;

pub use error::MathError;
pub use fixed::{FixedPoint, ParseFixedError, DIGITS, SCALE};
pub use math::{CordicEntry, CosSin, TrigContext, CORDIC_TABLE};

/// Re-export some internals for benchmarking purposes, only on `feature = "bench"`.
#[cfg(feature = "bench")]
mod bench;

#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x4000} else {0x10_0000};
