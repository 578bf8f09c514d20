use super::*;

impl FixedPoint {
  /// Zero (`0`), the additive identity element.
  pub const ZERO: Self = Self::from_parts(0, 0);

  /// One (`1`), the multiplicative identity element.
  pub const ONE: Self = Self::from_parts(1, 0);

  /// Negative one (`-1`).
  pub const MINUS_ONE: Self = Self::from_parts(-1, 0);

  /// Largest representable value, `99999999.99999999`.
  pub const MAX: Self = Self::from_parts(SCALE - 1, SCALE - 1);

  /// Smallest representable value, `-100000000.00000000`.
  ///
  /// Note that, as with two's complement integers, this is *not* `-MAX`: the range is asymmetric
  /// and `-MIN` wraps back to `MIN`.
  pub const MIN: Self = Self::from_parts(-SCALE, 0);

  /// Smallest positive value, `0.00000001`; also the step between consecutive values.
  pub const EPSILON: Self = Self::from_parts(0, 1);
}
