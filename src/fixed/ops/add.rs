use super::*;

impl FixedPoint {
  pub(crate) const fn add(self, other: Self) -> Self {
    // Each part fits comfortably in an `i64` (|int| ≤ 2S, |frac| < 2S), and `from_parts` takes care
    // of carrying between them and of wrapping the result.
    Self::from_parts(self.integer() + other.integer(), self.fraction() + other.fraction())
  }

  pub(crate) const fn sub(self, other: Self) -> Self {
    Self::from_parts(self.integer() - other.integer(), self.fraction() - other.fraction())
  }
}

use core::ops::{Add, AddAssign, Sub, SubAssign};
super::mk_ops!{Add, AddAssign, add, add_assign}
super::mk_ops!{Sub, SubAssign, sub, sub_assign}
