use super::*;

impl FixedPoint {
  /// What dividing a non-negative number by zero returns: [`Self::MAX`] minus one unit.
  pub(crate) const DIV_BY_ZERO: Self = Self::from_parts(SCALE - 1, SCALE - 2);

  pub(crate) const fn div(self, other: Self) -> Self {
    // Division by zero saturates instead of failing: to just below `MAX` if the dividend is
    // non-negative (including `0 ÷ 0`), and to `MIN` if it is negative.
    if other.is_zero() {
      return if self.negative {Self::MIN} else {Self::DIV_BY_ZERO}
    }

    // Bring both operands into scientific notation, with 16-digit mantissas `m1`, `m2`. Cutting
    // `m2` down to 9 significant digits leaves `m1 ÷ m2` with 8 integer digits (at most), and
    // leaves room to multiply the remainder by `S` without overflowing a `u64`.
    const S: u64 = SCALE as u64;
    let (m1, e1) = self.to_scientific();
    let (m2, e2) = other.to_scientific();
    let m2 = m2 / (S / 10);
    let mut int = m1 / m2;
    let mut frac = (m1 - int * m2) * S / m2;

    // The quotient is now `(int + frac ÷ S) × 10^exp`; shift the decimal point back into place.
    // Since the mantissas are normalised, `exp` is at most `DIGITS`.
    let exp = (1 - DIGITS as i32) + e1 - e2;
    if exp > 0 {
      // Move the `exp` leading digits of `frac` into `int`.
      let exp = exp as u32;
      let up = 10_u64.pow(exp);
      let down = 10_u64.pow(DIGITS.saturating_sub(exp));
      let moved = frac / down;
      frac = (frac - moved * down) * up;
      int = int * up + moved;
    } else if exp < 0 && exp >= -(DIGITS as i32) {
      // Move the `-exp` trailing digits of `int` into `frac`; the same number of trailing digits of
      // `frac` are dropped.
      let exp = -exp as u32;
      let down = 10_u64.pow(exp);
      let up = 10_u64.pow(DIGITS - exp);
      let kept = int / down;
      frac = frac / down + up * (int - kept * down);
      int = kept;
    } else if exp < 0 && exp >= -2 * (DIGITS as i32) {
      // Only (some of) the digits of `int` survive, all of them in the fraction.
      let down = 10_u64.pow((-exp) as u32 - DIGITS);
      frac = int / down;
      int = 0;
    } else if exp < 0 {
      // Underflow.
      int = 0;
      frac = 0;
    }

    let sign = self.sign() * other.sign();
    Self::from_parts(int as i64 * sign, frac as i64 * sign)
  }
}

use core::ops::{Div, DivAssign};
super::mk_ops!{Div, DivAssign, div, div_assign}
