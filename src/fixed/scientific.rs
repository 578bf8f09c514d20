use super::*;
use super::basics::decimal_digits;

impl FixedPoint {
  /// Number of significant digits in the mantissa returned by [`Self::to_scientific`].
  pub(crate) const MANTISSA_DIGITS: u32 = 2 * DIGITS;

  /// Decompose `|self|` into `(mantissa, exponent)` with `|self| = mantissa × 10^exponent`, where
  /// the mantissa is normalised to [`Self::MANTISSA_DIGITS`] significant digits (except for `0`,
  /// which decomposes into a zero mantissa).
  ///
  /// Scaling both operands of a division to the same number of significant digits is what lets it
  /// be carried out as a single integer division without overflowing.
  pub(crate) const fn to_scientific(self) -> (u64, i32) {
    const S: u64 = SCALE as u64;
    let int = self.int_magnitude();
    let frac = self.frac_magnitude();

    // The leading digits are in the integer part if there is one, else in the fraction. Their
    // count is capped at 8, so that the one 9-digit integer part (that of `MIN`) keeps 17 digits
    // rather than overflowing the normalisation.
    let has_int = int > 0;
    let leading = if has_int {int} else {frac};
    let log = {
      let digits = decimal_digits(leading as u128);
      if digits < DIGITS {digits} else {DIGITS}
    };

    // Shift left so the leading digit sits at position `MANTISSA_DIGITS - 1`.
    let mut mantissa = if has_int {int * S + frac} else {frac};
    mantissa *= 10_u64.pow(DIGITS - log);
    let mut exponent = log as i32 - Self::MANTISSA_DIGITS as i32;
    if !has_int {
      mantissa *= S;
      exponent -= DIGITS as i32;
    }

    (mantissa, exponent)
  }
}
