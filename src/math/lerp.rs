use super::*;

impl FixedPoint {
  /// Linear interpolation between `a` and `b`: `(b - a) × t + a`.
  ///
  /// `t` is not clamped, so values outside `[0, 1]` extrapolate.
  ///
  /// ```
  /// # use soft_fixed::FixedPoint;
  /// let a = FixedPoint::from(10);
  /// let b = FixedPoint::from(20);
  /// assert_eq!(FixedPoint::lerp(a, b, "0.25".parse().unwrap()), FixedPoint::from_parts(12, 50_000_000));
  /// ```
  pub fn lerp(a: Self, b: Self, t: Self) -> Self {
    (b - a) * t + a
  }
}
