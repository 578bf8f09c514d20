use super::*;

/// Which quadrant an angle in `[-π, π]` falls in; the rotation itself is only ever done for the
/// mirrored angle in the first quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quadrant {
  /// `(0, π/2]`
  First,
  /// `(π/2, π)`
  Second,
  /// `(-π, -π/2]`
  Third,
  /// `(-π/2, 0)`
  Fourth,
}

impl Quadrant {
  /// Split a normalised angle into its quadrant and its mirror image in `[0, π/2]`.
  fn reduce(radians: FixedPoint) -> (Self, FixedPoint) {
    if radians > FixedPoint::FRAC_PI_2 {
      (Self::Second, FixedPoint::PI - radians)
    } else if radians > FixedPoint::ZERO {
      (Self::First, radians)
    } else if radians > -FixedPoint::FRAC_PI_2 {
      (Self::Fourth, -radians)
    } else {
      (Self::Third, FixedPoint::PI + radians)
    }
  }

  /// Map `(cos, sin)` of the first-quadrant mirror back to this quadrant.
  fn restore(self, CosSin { cos, sin }: CosSin) -> CosSin {
    match self {
      Self::First => CosSin { cos, sin },
      Self::Second => CosSin { cos: -cos, sin },
      Self::Third => CosSin { cos: -cos, sin: -sin },
      Self::Fourth => CosSin { cos, sin: -sin },
    }
  }
}

impl TrigContext<'_> {
  /// Returns the cosine and the sine of `radians`.
  ///
  /// The angle is first [normalised](FixedPoint::normalize_pi) to `[-π, π]`. Multiples of π/2 are
  /// exact; other angles are mirrored into the first quadrant and rotated to by CORDIC, giving
  /// results within about `1e-7` of the true values.
  ///
  /// ```
  /// # use soft_fixed::{CosSin, FixedPoint, TrigContext};
  /// let context = TrigContext::builtin().unwrap();
  /// let CosSin { cos, sin } = context.cos_sin(FixedPoint::PI);
  /// assert_eq!((cos, sin), (FixedPoint::MINUS_ONE, FixedPoint::ZERO));
  /// ```
  pub fn cos_sin(&self, radians: FixedPoint) -> CosSin {
    let radians = radians.normalize_pi();

    let (zero, one) = (FixedPoint::ZERO, FixedPoint::ONE);
    if radians == FixedPoint::PI || radians == -FixedPoint::PI {
      return CosSin { cos: -one, sin: zero }
    } else if radians == FixedPoint::FRAC_PI_2 {
      return CosSin { cos: zero, sin: one }
    } else if radians == -FixedPoint::FRAC_PI_2 {
      return CosSin { cos: zero, sin: -one }
    } else if radians == zero {
      return CosSin { cos: one, sin: zero }
    }

    let (quadrant, mut remaining) = Quadrant::reduce(radians);
    let (mut cos, mut sin) = (one, zero);
    let mut gain = one;
    for entry in self.table {
      if remaining.abs() < self.threshold {
        break
      }
      // Rotate towards the remaining angle.
      let (tangent, angle) = if remaining.is_negative() {
        (-entry.tangent, -entry.angle)
      } else {
        (entry.tangent, entry.angle)
      };
      remaining -= angle;
      (cos, sin) = (cos - tangent * sin, sin + tangent * cos);
      gain = entry.gain;
    }

    quadrant.restore(CosSin { cos: cos * gain, sin: sin * gain })
  }

  /// Returns the sine of `radians`. See [`Self::cos_sin`].
  pub fn sin(&self, radians: FixedPoint) -> FixedPoint {
    self.cos_sin(radians).sin
  }

  /// Returns the cosine of `radians`. See [`Self::cos_sin`].
  pub fn cos(&self, radians: FixedPoint) -> FixedPoint {
    self.cos_sin(radians).cos
  }

  /// Returns the tangent of `radians`, as `sin ÷ cos`.
  ///
  /// Where the cosine is exactly zero (at `±π/2`), this saturates to [`FixedPoint::MAX`] if the
  /// sine is positive and to [`FixedPoint::MIN`] otherwise.
  pub fn tan(&self, radians: FixedPoint) -> FixedPoint {
    let CosSin { cos, sin } = self.cos_sin(radians);
    if cos.is_zero() {
      if sin > FixedPoint::ZERO {FixedPoint::MAX} else {FixedPoint::MIN}
    } else {
      sin / cos
    }
  }
}
