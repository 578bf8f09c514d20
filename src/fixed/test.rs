use super::*;

impl FixedPoint {
  /// A handful of hand-picked values: the range ends, values around 0 and ±1, and values that
  /// exercise every digit position.
  pub(crate) fn cases_interesting() -> impl Iterator<Item = Self> {
    [
      Self::MIN,
      Self::from_parts(-99_999_999, -99_999_999),
      Self::from_parts(-12_345_678, -90_123_456),
      Self::from_parts(-1, -1),
      Self::MINUS_ONE,
      Self::from_parts(0, -99_999_999),
      Self::from_parts(0, -50_000_000),
      Self::from_parts(0, -1),
      Self::ZERO,
      Self::EPSILON,
      Self::from_parts(0, 10),
      Self::from_parts(0, 33_333_333),
      Self::from_parts(0, 99_999_999),
      Self::ONE,
      Self::from_parts(1, 1),
      Self::from_parts(3, 14_159_265),
      Self::from_parts(42, 0),
      Self::from_parts(1_000, 500),
      Self::from_parts(87_654_321, 12_345_678),
      Self::MAX,
    ].into_iter()
  }

  /// A [proptest Strategy](proptest::strategy::Strategy) that yields any representable value.
  pub(crate) fn cases_proptest() -> impl proptest::strategy::Strategy<Value = Self> {
    use proptest::prelude::*;
    (-SCALE * SCALE .. SCALE * SCALE).prop_map(Self::from_scaled)
  }

  /// A [proptest Strategy](proptest::strategy::Strategy) that yields values with magnitude below
  /// `bound`, with digits spread over all orders of magnitude (not just the biggest ones, as a
  /// uniform draw would).
  pub(crate) fn cases_proptest_below(bound: i64) -> impl proptest::strategy::Strategy<Value = Self> {
    use proptest::prelude::*;
    let max_units = bound * SCALE;
    (
      -max_units + 1 .. max_units,
      0 ..= basics::decimal_digits(max_units as u128),
    ).prop_map(|(units, shift)| Self::from_scaled(units / 10_i64.pow(shift)))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn cases_interesting_sorted() {
    let cases: Vec<_> = FixedPoint::cases_interesting().collect();
    assert!(cases.windows(2).all(|w| w[0] < w[1]));
    assert!(cases.iter().all(|x| !x.overflowed()));
  }
}
