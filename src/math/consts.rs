use super::*;

impl FixedPoint {
  /// π, `3.14159265`.
  pub const PI: Self = Self::with_fraction_digits(3, 14159265359);

  /// π/2, `1.57079632`.
  pub const FRAC_PI_2: Self = Self::with_fraction_digits(1, 57079632679);

  /// 2π, `6.28318530`, the period of the trigonometric functions.
  pub const TAU: Self = Self::PI.add(Self::PI);

  /// Euler's number e, `2.71828182`.
  pub const E: Self = Self::with_fraction_digits(2, 71828182846);

  /// √2, `1.41421356`.
  pub const SQRT_2: Self = Self::with_fraction_digits(1, 41421356237);

  /// 1/√2 = √2/2, `0.70710678`.
  pub const FRAC_1_SQRT_2: Self = Self::with_fraction_digits(0, 70710678118);

  /// ln(2), `0.69314718`.
  pub const LN_2: Self = Self::with_fraction_digits(0, 693147180369);
}
