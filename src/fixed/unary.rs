use super::*;

impl FixedPoint {
  const fn neg(self) -> Self {
    Self::from_parts(-self.integer(), -self.fraction())
  }

  /// Return the absolute value of `self`.
  ///
  /// As with negation, `MIN.abs()` wraps back to `MIN` (and is flagged as
  /// [overflowed](Self::overflowed)), since `-MIN` is not representable.
  #[inline]
  pub const fn abs(self) -> Self {
    if self.negative {self.neg()} else {self}
  }

  /// Return `-1`, `0`, or `1`, according to the sign of `self`.
  #[inline]
  pub const fn signum(self) -> Self {
    if self.negative {Self::MINUS_ONE}
    else if self.is_zero() {Self::ZERO}
    else {Self::ONE}
  }
}

impl core::ops::Neg for FixedPoint {
  type Output = FixedPoint;

  #[inline]
  fn neg(self) -> Self::Output {
    FixedPoint::neg(self)
  }
}

impl core::ops::Neg for &FixedPoint {
  type Output = FixedPoint;

  #[inline]
  fn neg(self) -> Self::Output {
    FixedPoint::neg(*self)
  }
}
