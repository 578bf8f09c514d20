use super::*;

// Coefficients of the rational approximation of `ln((1 + s) / (1 - s))`, as in the classic
// floating-point `log` (fdlibm's `Lg1` … `Lg7`), at 8 digits.
const L1: FixedPoint = FixedPoint::with_fraction_digits(0, 666_666_666_666);
const L2: FixedPoint = FixedPoint::with_fraction_digits(0, 399_999_999_999);
const L3: FixedPoint = FixedPoint::with_fraction_digits(0, 285_714_287_436);
const L4: FixedPoint = FixedPoint::with_fraction_digits(0, 222_221_984_321);
const L5: FixedPoint = FixedPoint::with_fraction_digits(0, 181_835_721_616);
const L6: FixedPoint = FixedPoint::with_fraction_digits(0, 153_138_376_992);
const L7: FixedPoint = FixedPoint::with_fraction_digits(0, 147_981_986_051);

/// Reduce a positive `x` to `x' ∈ [√2/2, √2]` and `k` such that `x = x' × 2^k`.
fn reduce(x: FixedPoint) -> (FixedPoint, i64) {
  let two = FixedPoint::from(2);
  if x > FixedPoint::SQRT_2 {
    // Find the largest `k` with `√2 × 2^(k-1) ≤ x`, then divide by `2^k` in one go.
    let mut bound = FixedPoint::SQRT_2;
    let mut k = 1;
    loop {
      let next = bound * two;
      if next > x || next.overflowed() {
        break
      }
      bound = next;
      k += 1;
    }
    // For the largest inputs, `2^27` is itself out of range; divide by it in two steps then.
    let factor = 1_i64 << k;
    let reduced = if factor < crate::SCALE {
      x / FixedPoint::from_int(factor)
    } else {
      x / FixedPoint::from_int(factor / 2) / two
    };
    (reduced, k)
  } else if x < FixedPoint::FRAC_1_SQRT_2 {
    let mut x = x;
    let mut k = 0;
    loop {
      x = x * two;
      k -= 1;
      if x > FixedPoint::FRAC_1_SQRT_2 {
        break (x, k)
      }
    }
  } else {
    (x, 0)
  }
}

impl FixedPoint {
  /// Returns the natural logarithm of `self`, or [`MathError::LogOfNonPositive`] if `self` is
  /// zero or negative.
  ///
  /// The argument is first reduced to `x' ∈ [√2/2, √2]` with `x = x' × 2^k`, so that
  /// `ln(x) = k × ln(2) + ln(x')`, and `ln(x')` is evaluated with a fixed polynomial in
  /// `s = (x' - 1) / (x' + 1)`. Results are within a few units of the last digit across the whole
  /// range.
  ///
  /// # Example
  ///
  /// ```
  /// # use soft_fixed::{FixedPoint, MathError};
  /// assert_eq!(FixedPoint::ONE.ln(), Ok(FixedPoint::ZERO));
  /// assert_eq!(FixedPoint::from(10).ln().unwrap().to_string(), "2.30258508");
  /// assert_eq!(FixedPoint::ZERO.ln(), Err(MathError::LogOfNonPositive(FixedPoint::ZERO)));
  /// ```
  pub fn ln(self) -> Result<Self, MathError> {
    if self <= Self::ZERO {
      tracing::trace!(function = "ln", value = %self, "argument is not positive");
      return Err(MathError::LogOfNonPositive(self))
    }
    let (x, k) = reduce(self);

    // The evaluation order below is part of the result: with truncating arithmetic, regrouping
    // these terms changes the last digits.
    let two = Self::from(2);
    let half = Self::from_parts(0, 50_000_000);
    let f = x - Self::ONE;
    let s = f / (two + f);
    let s2 = s * s;
    let s4 = s2 * s2;
    let t1 = s2 * (L1 + s4 * (L3 + s4 * (L5 + s4 * L7)));
    let t2 = s4 * (L2 + s4 * (L4 + s4 * L6));
    let r = t1 + t2;
    let hfsq = half * f * f;
    Ok(Self::from_int(k) * Self::LN_2 - ((hfsq - (s * (hfsq + r))) - f))
  }
}
