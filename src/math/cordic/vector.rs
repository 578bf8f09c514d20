use super::*;

/// `|x| < bound`, for a positive `bound`. Unlike comparing [`FixedPoint::abs`], this also holds up
/// for [`FixedPoint::MIN`], which has no positive counterpart.
fn within(x: FixedPoint, bound: FixedPoint) -> bool {
  x < bound && x > -bound
}

impl TrigContext<'_> {
  /// Rotate the unit vector `(cos, sin)` onto the positive x axis and return the angle it was
  /// rotated by.
  fn vector(&self, cos: FixedPoint, sin: FixedPoint) -> FixedPoint {
    // Reflect the left half-plane through the origin first; the table only reaches about ±1.74.
    let (mut cos, mut sin, offset) = if cos.is_negative() {
      let offset = if sin.is_negative() {-FixedPoint::PI} else {FixedPoint::PI};
      (-cos, -sin, offset)
    } else {
      (cos, sin, FixedPoint::ZERO)
    };

    let mut angle = FixedPoint::ZERO;
    for entry in self.table {
      // Rotate towards the x axis.
      let (tangent, step) = if sin.is_negative() {
        (-entry.tangent, -entry.angle)
      } else {
        (entry.tangent, entry.angle)
      };
      angle += step;
      (cos, sin) = (cos + tangent * sin, sin - tangent * cos);
      if within(entry.gain * sin, self.threshold) {
        break
      }
    }
    angle + offset
  }

  /// Returns the arcsine of `x`, or [`MathError::OutsideUnitInterval`] if `x` is not in `[-1, 1]`.
  ///
  /// Accuracy is limited by the smallest table angle: results are within about `5e-5` of the true
  /// values, and `asin(0)` is not exactly zero.
  ///
  /// ```
  /// # use soft_fixed::{FixedPoint, TrigContext};
  /// let context = TrigContext::builtin().unwrap();
  /// let half = "0.5".parse::<FixedPoint>().unwrap();
  /// assert_eq!(context.asin(half).unwrap().to_string(), "0.52361344");
  /// assert!(context.asin(FixedPoint::from(2)).is_err());
  /// ```
  pub fn asin(&self, x: FixedPoint) -> Result<FixedPoint, MathError> {
    check_unit_interval("asin", x)?;
    let cos = (FixedPoint::ONE - x * x).sqrt()?;
    Ok(self.vector(cos, x))
  }

  /// Returns the arccosine of `x`, or [`MathError::OutsideUnitInterval`] if `x` is not in
  /// `[-1, 1]`. Accuracy is as for [`Self::asin`].
  pub fn acos(&self, x: FixedPoint) -> Result<FixedPoint, MathError> {
    check_unit_interval("acos", x)?;
    let sin = (FixedPoint::ONE - x * x).sqrt()?;
    Ok(self.vector(x, sin))
  }

  /// Returns the angle of the point `(x, y)`, i.e. `atan2(y, x)`, or [`MathError::ArgOfOrigin`] if
  /// both are zero.
  ///
  /// The point is scaled by powers of 100 until its norm can be computed without leaving the range
  /// or losing all digits, then normalised and vectored.
  pub fn arg(&self, y: FixedPoint, x: FixedPoint) -> Result<FixedPoint, MathError> {
    if x.is_zero() && y.is_zero() {
      tracing::trace!(function = "arg", "argument is the origin");
      return Err(MathError::ArgOfOrigin)
    }
    let big = FixedPoint::from_int(5_000);
    let small = FixedPoint::from_parts(0, 1_000_000);
    let hundred = FixedPoint::from(100);
    let (mut x, mut y) = (x, y);
    while !within(x, big) || !within(y, big) {
      (x, y) = (x / hundred, y / hundred);
    }
    while within(x, small) && within(y, small) {
      (x, y) = (x * hundred, y * hundred);
    }
    let norm = (x * x + y * y).sqrt()?;
    Ok(self.vector(x / norm, y / norm))
  }
}

fn check_unit_interval(function: &'static str, value: FixedPoint) -> Result<(), MathError> {
  if value > FixedPoint::ONE || value < FixedPoint::MINUS_ONE {
    tracing::trace!(function, value = %value, "argument is outside [-1, 1]");
    return Err(MathError::OutsideUnitInterval { function, value })
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn context() -> &'static TrigContext<'static> {
    TrigContext::builtin().unwrap()
  }

  fn fp(integer: i64, fraction: i64) -> FixedPoint {
    FixedPoint::from_parts(integer, fraction)
  }

  #[test]
  fn asin_examples() {
    let c = context();
    assert_eq!(c.asin(FixedPoint::ONE), Ok(fp(1, 57_078_334)));
    assert_eq!(c.asin(fp(0, 50_000_000)), Ok(fp(0, 52_361_344)));
    assert_eq!(c.asin(fp(0, -50_000_000)), Ok(fp(0, -52_361_344)));
    assert_eq!(c.asin(FixedPoint::MINUS_ONE), Ok(fp(-1, -57_078_334)));
    // The last table angle is the resolution.
    assert_eq!(c.asin(FixedPoint::ZERO), Ok(fp(0, 1_298)));
  }

  #[test]
  fn acos_examples() {
    let c = context();
    assert_eq!(c.acos(FixedPoint::ZERO), Ok(fp(1, 57_078_334)));
    assert_eq!(c.acos(FixedPoint::ONE), Ok(fp(0, 1_298)));
    assert_eq!(c.acos(FixedPoint::MINUS_ONE), Ok(fp(3, 14_160_563)));
    assert_eq!(c.acos(fp(0, 50_000_000)), Ok(fp(1, 4_718_288)));
    assert_eq!(c.acos(fp(0, -50_000_000)), Ok(fp(2, 9_440_977)));
  }

  #[test]
  fn outside_unit_interval() {
    let c = context();
    let above = fp(1, 1);
    assert_eq!(c.asin(above), Err(MathError::OutsideUnitInterval { function: "asin", value: above }));
    assert_eq!(c.acos(-above), Err(MathError::OutsideUnitInterval { function: "acos", value: -above }));
    assert!(c.asin(FixedPoint::MAX).is_err());
    assert!(c.acos(FixedPoint::MIN).is_err());
  }

  #[test]
  fn arg_examples() {
    let c = context();
    let one = FixedPoint::ONE;
    assert_eq!(c.arg(one, one), Ok(fp(0, 78_539_816)));
    assert_eq!(c.arg(-one, -one), Ok(fp(-2, -35_619_449)));
    assert_eq!(c.arg(one, -one), Ok(fp(2, 35_619_449)));
    assert_eq!(c.arg(FixedPoint::from(3), FixedPoint::from(4)), Ok(fp(0, 64_348_814)));
    assert_eq!(c.arg(FixedPoint::ZERO, -one), Ok(fp(3, 14_160_563)));
    assert_eq!(c.arg(FixedPoint::ZERO, one), Ok(fp(0, 1_298)));
    assert_eq!(c.arg(-one, FixedPoint::ZERO), Ok(fp(-1, -57_078_334)));
  }

  #[test]
  fn arg_scales() {
    let c = context();
    let eps = FixedPoint::EPSILON;
    assert_eq!(c.arg(FixedPoint::from(30_000), FixedPoint::from(40_000)), Ok(fp(0, 64_348_814)));
    assert_eq!(c.arg(fp(0, -3), fp(0, 4)), Ok(fp(0, -64_348_814)));
    assert_eq!(c.arg(eps, eps), Ok(fp(0, 78_539_816)));
    assert_eq!(c.arg(-eps, -eps), Ok(fp(-2, -35_619_449)));
    assert_eq!(c.arg(FixedPoint::ZERO, FixedPoint::from(-5)), Ok(fp(3, 14_160_563)));
    assert_eq!(c.arg(fp(99_999_999, 0), eps), Ok(fp(1, 57_078_334)));
    assert_eq!(c.arg(FixedPoint::MAX, FixedPoint::MAX), Ok(fp(0, 78_539_816)));
    assert_eq!(c.arg(FixedPoint::MIN, FixedPoint::MIN), Ok(fp(-2, -35_619_449)));
  }

  #[test]
  fn arg_of_origin() {
    assert_eq!(context().arg(FixedPoint::ZERO, FixedPoint::ZERO), Err(MathError::ArgOfOrigin));
  }

  #[test]
  fn asin_undoes_sin() {
    let c = context();
    let tolerance = fp(0, 5_000);
    for i in 0 ..= 1000 {
      let x = FixedPoint::from_scaled(-157_000_000 + i * 314_000);
      let back = c.asin(c.sin(x)).unwrap();
      assert!((back - x).abs() <= tolerance, "asin(sin({x:?})) = {back:?}");
    }
  }

  #[test]
  fn acos_undoes_cos() {
    let c = context();
    let tolerance = fp(0, 5_000);
    for i in 0 ..= 1000 {
      let x = FixedPoint::from_scaled(i * 314_000);
      let back = c.acos(c.cos(x)).unwrap();
      assert!((back - x).abs() <= tolerance, "acos(cos({x:?})) = {back:?}");
    }
  }

  #[test]
  fn within_handles_min() {
    let bound = FixedPoint::ONE;
    assert!(within(FixedPoint::ZERO, bound));
    assert!(!within(bound, bound));
    assert!(!within(-bound, bound));
    assert!(!within(FixedPoint::MIN, bound));
  }
}
