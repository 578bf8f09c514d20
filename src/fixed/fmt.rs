use super::*;

use core::fmt::{Debug, Display};

impl Display for FixedPoint {
  /// The canonical form `[-]<integer>.<fraction>`, with exactly 8 fraction digits.
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    // At most 9 integer digits, the point, and the fraction digits; filled from the right.
    let mut buf = [0_u8; 10 + DIGITS as usize];
    let mut pos = buf.len();
    let mut frac = self.frac;
    for _ in 0 .. DIGITS {
      pos -= 1;
      buf[pos] = b'0' + (frac % 10) as u8;
      frac /= 10;
    }
    pos -= 1;
    buf[pos] = b'.';
    let mut int = self.int;
    loop {
      pos -= 1;
      buf[pos] = b'0' + (int % 10) as u8;
      int /= 10;
      if int == 0 {
        break
      }
    }
    let digits = core::str::from_utf8(&buf[pos ..]).map_err(|_| core::fmt::Error)?;
    f.pad_integral(!self.negative, "", digits)
  }
}

impl Debug for FixedPoint {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("FixedPoint")
      .field("value", &format_args!("{self}"))
      .field("overflow", &self.overflow)
      .finish()
  }
}
