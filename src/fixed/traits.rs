use super::*;

// The informational overflow flag must not take part in equality, ordering or hashing: a wrapped
// `0` is still `0`. So none of these can be derived.
//
// Comparison is lexicographic on the signed integer part, then the signed fraction part. Since the
// two parts always share a sign, that is exactly the order of `to_scaled`.

impl PartialEq for FixedPoint {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    self.negative == other.negative && self.int == other.int && self.frac == other.frac
  }
}

impl Eq for FixedPoint {}

impl PartialOrd for FixedPoint {
  #[inline]
  fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for FixedPoint {
  #[inline]
  fn cmp(&self, other: &Self) -> core::cmp::Ordering {
    self.integer().cmp(&other.integer())
      .then(self.fraction().cmp(&other.fraction()))
  }
}

impl core::hash::Hash for FixedPoint {
  #[inline]
  fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
    self.to_scaled().hash(state);
  }
}

impl Default for FixedPoint {
  #[inline]
  fn default() -> Self {
    Self::ZERO
  }
}
