use super::*;

impl FixedPoint {
  /// Reduce an angle in radians to the equivalent angle in `[-π, π]`.
  ///
  /// Large angles first have a whole number of turns taken off in one step, estimated from the
  /// integer part; the remainder is then brought into range by adding or subtracting
  /// [`TAU`](Self::TAU) (at most a couple of times).
  ///
  /// ```
  /// # use soft_fixed::FixedPoint;
  /// assert_eq!(FixedPoint::ONE.normalize_pi(), FixedPoint::ONE);
  /// assert_eq!(FixedPoint::from(4).normalize_pi(), FixedPoint::from(4) - FixedPoint::TAU);
  /// assert_eq!(FixedPoint::PI.normalize_pi(), FixedPoint::PI);
  /// ```
  pub fn normalize_pi(self) -> Self {
    let mut radians = self;

    let integer = self.integer().abs();
    if integer > 3 {
      // Number of whole turns in `|self|`, from the integer part only, so it may be one short.
      let turns = integer * crate::SCALE / (2 * Self::PI.to_scaled());
      radians -= Self::PI * Self::from_int(2 * turns * self.sign());
    }

    while radians > Self::PI {
      radians -= Self::TAU;
    }
    while radians < -Self::PI {
      radians += Self::TAU;
    }
    radians
  }
}
