use crate::FixedPoint;

/// A domain error from one of the elementary or trigonometric functions.
///
/// Arithmetic itself never fails: division by zero saturates and out-of-range results wrap (see
/// [`FixedPoint`]). Only the functions that are undefined for part of their input return this.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
  /// [`FixedPoint::sqrt`] of a negative number.
  #[error("square root of negative number {0}")]
  SqrtOfNegative(FixedPoint),

  /// [`FixedPoint::ln`] of zero or a negative number.
  #[error("logarithm of non-positive number {0}")]
  LogOfNonPositive(FixedPoint),

  /// [`FixedPoint::asin`] or [`FixedPoint::acos`] of a number outside `[-1, 1]`.
  #[error("{function} of {value}, which is outside [-1, 1]")]
  OutsideUnitInterval {
    function: &'static str,
    value: FixedPoint,
  },

  /// [`FixedPoint::arg`] of the origin, whose angle is undefined.
  #[error("angle of the zero vector is undefined")]
  ArgOfOrigin,

  /// A CORDIC table whose very first entry is already zero at this precision, so no rotation can be
  /// performed at all.
  #[error("CORDIC table has no usable entries at {} fractional digits", crate::DIGITS)]
  DegenerateCordicTable,
}
