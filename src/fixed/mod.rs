//! This module and its submodules contain the decimal fixed-point value type itself: its
//! representation and normalisation rules, the four arithmetic operators, comparisons,
//! conversions, and formatting.
//!
//! Some notation used in the comments:
//!
//!   - **`S`**: the scale, [`SCALE`] = 10⁸.
//!   - **Integer part / fraction part**: a value `x` is stored as `sign × (int + frac ÷ S)`, with
//!     `0 ≤ frac < S`.
//!   - **Units**: multiples of the smallest representable step, `1 ÷ S` = 10⁻⁸. A value measured
//!     in units is what [`FixedPoint::to_scaled`] returns.
//!   - **Ring**: the number line `[-S, S)` with its ends glued together; out-of-range results are
//!     reduced onto it, exactly like two's complement integers wrap.

/// Number of decimal digits after the decimal point.
pub const DIGITS: u32 = 8;

/// The fixed denominator of the fraction part, `10^DIGITS`.
pub const SCALE: i64 = 10_i64.pow(DIGITS);

/// A deterministic decimal fixed-point number with [`DIGITS`] fractional digits.
///
/// Conceptually the value is `sign × (integer + fraction ÷ SCALE)`, where a *single* sign governs
/// both magnitudes. The valid range is `[-SCALE, SCALE)`, i.e. from `-100000000.00000000` up to
/// `99999999.99999999`; anything else wraps around (see [`FixedPoint::from_parts`]).
///
/// Values are immutable; every operation returns a new one. Besides the number itself, each value
/// carries an informational [overflow flag](FixedPoint::overflowed), recording whether the
/// operation that produced it had to wrap. The flag takes no part in comparisons or hashing.
///
/// Examples:
///
/// ```
/// # use soft_fixed::FixedPoint;
/// let x = FixedPoint::from_parts(-3, -14_159_265);
/// assert_eq!(x.to_string(), "-3.14159265");
/// assert_eq!(x.integer(), -3);
/// assert_eq!(x.fraction(), -14_159_265);
/// ```
#[derive(Clone, Copy)]
pub struct FixedPoint {
  /// Whether the value is negative. Zero is never negative.
  negative: bool,
  /// Magnitude of the integer part, `≤ SCALE` (equality only for [`FixedPoint::MIN`]).
  int: u32,
  /// Magnitude of the fraction part, `< SCALE`.
  frac: u32,
  /// Whether producing this value wrapped around the ring.
  overflow: bool,
}

/// Basics
mod basics;

/// Constants (zero, one, max, min, epsilon)
mod consts;

/// Manual impls of `Eq`, `Ord`, `Hash`, etc.
mod traits;

/// Arithmetic operators
mod ops;

/// Negation, absolute value, sign
mod unary;

/// The normalised scientific notation that division works in
mod scientific;

/// Conversions to and from ints, floats, and decimal text
mod convert;

/// Display and Debug
mod fmt;

/// Serialisation through the canonical text form
#[cfg(feature = "serde")]
mod serde;

/// Test utilities
#[cfg(test)]
mod test;

/// Exact rational oracle used by tests
#[cfg(test)]
mod rational;

pub use convert::ParseFixedError;
pub(crate) use basics::decimal_digits;
