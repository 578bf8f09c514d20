use super::*;

impl FixedPoint {
  pub(crate) const fn mul(self, other: Self) -> Self {
    // Multiply the magnitudes as polynomials in `1 ÷ S`:
    //
    //   (i1 + f1 ÷ S) × (i2 + f2 ÷ S) = i1 × i2  +  (f1 × i2 + i1 × f2) ÷ S  +  f1 × f2 ÷ S²
    //
    // The first term is the integer part, the second is already in units of 10⁻⁸, and the last one
    // has 8 digits too many: these are truncated, which makes the whole product truncate towards
    // zero. This precision loss is deliberate; it is not compensated anywhere.
    //
    // Every term fits an `i64`: magnitudes are at most `S` = 10⁸, so no product exceeds 10¹⁶.
    let (i1, f1) = (self.int_magnitude() as i64, self.frac_magnitude() as i64);
    let (i2, f2) = (other.int_magnitude() as i64, other.frac_magnitude() as i64);
    let int = i1 * i2;
    let frac = f1 * i2 + i1 * f2 + f1 * f2 / SCALE;

    // The sign is applied once, at the end.
    let sign = self.sign() * other.sign();
    Self::from_parts(int * sign, frac * sign)
  }
}

use core::ops::{Mul, MulAssign};
super::mk_ops!{Mul, MulAssign, mul, mul_assign}
