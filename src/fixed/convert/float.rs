use super::*;

impl FixedPoint {
  /// Convert an `f64` to the nearest value towards zero, wrapping if out of range (`NaN` becomes
  /// zero, infinities saturate before wrapping).
  ///
  /// Since the conversion goes through the binary value of `value`, it is not always the decimal
  /// number one would expect: `1.15` is really `1.149999999…` and becomes `1.14999999`. For exact
  /// literals use [`FixedPoint::from_parts`] or parse a string. This is meant for diagnostics and
  /// bootstrapping only; no computation in this crate goes through floats.
  pub fn from_f64_lossy(value: f64) -> Self {
    // `as` truncates towards zero, maps NaN to 0, and saturates at the ends of `i128`.
    let units = (value * SCALE as f64) as i128;
    Self::from_parts_wide(units / SCALE as i128, units % SCALE as i128)
  }

  /// Convert to the nearest `f64`. Like [`Self::from_f64_lossy`], for diagnostics only.
  pub fn to_f64_lossy(self) -> f64 {
    self.integer() as f64 + self.fraction() as f64 / SCALE as f64
  }
}
