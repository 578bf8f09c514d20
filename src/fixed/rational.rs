use super::*;

use malachite::rational::Rational;
use malachite::base::num::arithmetic::traits::Abs;

impl From<FixedPoint> for Rational {
  /// The exact value of a [`FixedPoint`], which is always `units ÷ SCALE`.
  fn from(x: FixedPoint) -> Self {
    Rational::from_signeds(x.to_scaled(), SCALE)
  }
}

/// Whether `got` is `exact` truncated towards zero to a whole number of units: `|got| ≤ |exact|`
/// with less than one unit between them, and the same sign (or zero).
pub(crate) fn is_truncated(exact: &Rational, got: FixedPoint) -> bool {
  let got = Rational::from(got);
  let unit = Rational::from_signeds(1, SCALE);
  if *exact >= Rational::from(0) {
    got <= *exact && *exact < got + unit
  } else {
    got >= *exact && *exact > got - unit
  }
}

/// Whether `got` is within `|exact| × relative + units ÷ SCALE` of `exact`.
pub(crate) fn is_within(exact: &Rational, got: FixedPoint, relative: Rational, units: i64) -> bool {
  let error = (Rational::from(got) - exact).abs();
  let bound = exact.clone().abs() * relative + Rational::from_signeds(units, SCALE);
  error <= bound
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_fixed() {
    assert_eq!(Rational::from(FixedPoint::from_parts(0, 50_000_000)), Rational::from_signeds(1, 2));
    assert_eq!(Rational::from(FixedPoint::MIN), Rational::from(-SCALE));
    assert_eq!(Rational::from(FixedPoint::EPSILON), Rational::from_signeds(1, SCALE));
  }

  #[test]
  fn truncation() {
    let third = Rational::from_signeds(1, 3);
    assert!(is_truncated(&third, FixedPoint::from_parts(0, 33_333_333)));
    assert!(!is_truncated(&third, FixedPoint::from_parts(0, 33_333_334)));
    assert!(!is_truncated(&third, FixedPoint::from_parts(0, 33_333_332)));
    let minus_third = Rational::from_signeds(-1, 3);
    assert!(is_truncated(&minus_third, FixedPoint::from_parts(0, -33_333_333)));
    assert!(!is_truncated(&minus_third, FixedPoint::from_parts(0, -33_333_334)));
    assert!(is_truncated(&Rational::from(2), FixedPoint::from_int(2)));
  }

  #[test]
  fn within() {
    let exact = Rational::from(1000);
    let relative = Rational::from_signeds(1, SCALE);
    // Bound is 1000 × 10⁻⁸ + 2 units = 1002 units.
    assert!(is_within(&exact, FixedPoint::from_parts(1000, 1_002), relative.clone(), 2));
    assert!(!is_within(&exact, FixedPoint::from_parts(1000, 1_003), relative.clone(), 2));
    assert!(is_within(&exact, FixedPoint::from_parts(999, 99_998_998), relative, 2));
  }
}
