use super::*;

/// `exp(x)` is computed as `(1 + x ÷ 2^SQUARINGS)^(2^SQUARINGS)`.
const SQUARINGS: u32 = 12;

impl FixedPoint {
  /// Returns e<sup>`self`</sup>.
  ///
  /// This is computed as the limit `(1 + x/n)^n` with `n = 4096`, i.e. `1 + x/4096` squared 12
  /// times. It always takes the same number of steps, but it is an approximation even before
  /// truncation: the relative error grows like `x² / 8192`, which is about `5e-4` at `x = 2`, on
  /// top of a relative error of up to about `1e-4` from truncating the intermediate results.
  /// Results above `MAX` (for `x` beyond about 18) wrap around.
  ///
  /// # Example
  ///
  /// ```
  /// # use soft_fixed::FixedPoint;
  /// assert_eq!(FixedPoint::ZERO.exp(), FixedPoint::ONE);
  /// assert_eq!(FixedPoint::ONE.exp().to_string(), "2.71785686");
  /// ```
  pub fn exp(self) -> Self {
    let n = Self::from_int(1 << SQUARINGS);
    let mut result = Self::ONE + self / n;
    for _ in 0 .. SQUARINGS {
      result = result * result;
    }
    result
  }
}
