use super::*;

/// Number of Newton–Raphson steps. Fixed, not a convergence test, so every input costs the same.
const NEWTON_STEPS: usize = 8;

/// Inputs from here on are scaled down by 100 first: the initial guess for an 8-digit integer part
/// is `10⁴`, whose square is already out of range.
const LARGE: FixedPoint = FixedPoint::from_int(10_000_000);

/// Rough base-10 magnitude of a positive `x`: the number of digits of the integer part if there is
/// one, otherwise the (negative) position of the leading fraction digit, so that `10^(result - 1) ≤
/// x < 10^result`.
fn estimate_log10(x: FixedPoint) -> i32 {
  let integer = x.integer().unsigned_abs();
  if integer != 0 {
    crate::fixed::decimal_digits(integer as u128) as i32
  } else {
    crate::fixed::decimal_digits(x.fraction().unsigned_abs() as u128) as i32 - crate::DIGITS as i32
  }
}

/// Newton's iteration `t ← (t² + x) ÷ 2t` from a power-of-ten initial guess, for `0 < x < LARGE`.
fn newton(x: FixedPoint) -> FixedPoint {
  // The square root halves the exponent. Integer division rounds towards zero, so the guess
  // errs on the large side for big `x` and on the small side for tiny `x`.
  let half_log = estimate_log10(x) / 2;
  let mut t = if half_log >= 0 {
    FixedPoint::from_int(10_i64.pow(half_log as u32))
  } else {
    FixedPoint::from_parts(0, 10_i64.pow((crate::DIGITS as i32 + half_log) as u32))
  };
  let two = FixedPoint::from(2);
  for _ in 0 .. NEWTON_STEPS {
    t = (t * t + x) / (two * t);
  }
  t
}

impl FixedPoint {
  /// Returns the square root of `self`, or [`MathError::SqrtOfNegative`] if `self` is negative.
  ///
  /// For inputs from 1 up, the relative error is of the order of 10⁻⁸; for tiny inputs, where `t²`
  /// underflows, results are much coarser.
  ///
  /// # Example
  ///
  /// ```
  /// # use soft_fixed::{FixedPoint, MathError};
  /// assert_eq!(FixedPoint::from(4).sqrt(), Ok(FixedPoint::from(2)));
  /// assert_eq!(FixedPoint::from(2).sqrt(), Ok(FixedPoint::SQRT_2));
  /// assert_eq!(FixedPoint::MINUS_ONE.sqrt(), Err(MathError::SqrtOfNegative(FixedPoint::MINUS_ONE)));
  /// ```
  pub fn sqrt(self) -> Result<Self, MathError> {
    if self.is_negative() {
      tracing::trace!(function = "sqrt", value = %self, "argument is negative");
      Err(MathError::SqrtOfNegative(self))
    } else if self.is_zero() {
      Ok(Self::ZERO)
    } else if self >= LARGE {
      // √x = √(x ÷ 100) × 10
      let hundred = Self::from(100);
      let ten = Self::from(10);
      Ok(newton(self / hundred) * ten)
    } else {
      Ok(newton(self))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{DIGITS, SCALE};
  use malachite::rational::Rational;
  use malachite::base::num::arithmetic::traits::Abs;
  use proptest::prelude::*;

  #[test]
  fn exact_squares() {
    assert_eq!(FixedPoint::from(4).sqrt(), Ok(FixedPoint::from(2)));
    assert_eq!(FixedPoint::from(9).sqrt(), Ok(FixedPoint::from(3)));
    assert_eq!(FixedPoint::ONE.sqrt(), Ok(FixedPoint::ONE));
    assert_eq!(FixedPoint::from_parts(0, 25_000_000).sqrt(), Ok(FixedPoint::from_parts(0, 50_000_000)));
    assert_eq!(FixedPoint::from_int(1_000_000).sqrt(), Ok(FixedPoint::from(1_000)));
  }

  #[test]
  fn sqrt_2() {
    assert_eq!(FixedPoint::from(2).sqrt(), Ok(FixedPoint::from_parts(1, 41_421_356)));
  }

  #[test]
  fn zero() {
    assert_eq!(FixedPoint::ZERO.sqrt(), Ok(FixedPoint::ZERO));
  }

  #[test]
  fn negative() {
    assert_eq!(FixedPoint::from_parts(0, -1).sqrt(), Err(MathError::SqrtOfNegative(FixedPoint::from_parts(0, -1))));
    assert!(FixedPoint::MIN.sqrt().is_err());
  }

  #[test]
  fn large() {
    assert_eq!(FixedPoint::from_int(10_000_000).sqrt(), Ok(FixedPoint::from_parts(3_162, 27_766_350)));
    assert_eq!(FixedPoint::from_int(50_000_000).sqrt(), Ok(FixedPoint::from_parts(7_071, 6_782_360)));
    let max = FixedPoint::MAX.sqrt().unwrap();
    assert!(!max.overflowed());
    assert!((max - FixedPoint::from(10_000)).abs() < FixedPoint::from_parts(0, 10_000));
  }

  #[test]
  fn below_large() {
    let x = FixedPoint::from_parts(9_999_999, 99_999_999);
    assert_eq!(x.sqrt(), Ok(FixedPoint::from_parts(3_162, 27_766_160)));
  }

  #[test]
  fn estimate() {
    assert_eq!(estimate_log10(FixedPoint::from(1)), 1);
    assert_eq!(estimate_log10(FixedPoint::from(99)), 2);
    assert_eq!(estimate_log10(FixedPoint::MAX), 8);
    assert_eq!(estimate_log10(FixedPoint::from_parts(0, 50_000_000)), 0);
    assert_eq!(estimate_log10(FixedPoint::from_parts(0, 1_000)), -4);
    assert_eq!(estimate_log10(FixedPoint::EPSILON), -7);
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
    #[test]
    fn squares_back(units in SCALE .. SCALE * SCALE, shift in 0_u32 ..= DIGITS) {
      // Spread over all magnitudes from 1 up.
      let x = FixedPoint::from_scaled((units / 10_i64.pow(shift)).max(SCALE));
      let root = x.sqrt().unwrap();
      let x = Rational::from(x);
      let error = (Rational::from(root) * Rational::from(root) - &x).abs();
      let bound = &x * Rational::from_signeds(5, SCALE) + Rational::from_signeds(10, SCALE);
      prop_assert!(error <= bound, "√{:?} = {:?}", x, root);
    }
  }
}
