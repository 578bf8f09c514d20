use super::*;

use ::serde::{Deserialize, Deserializer, Serialize, Serializer, de};

impl Serialize for FixedPoint {
  /// Serialises as the canonical string (e.g. `"-3.14159265"`), which is exact, unlike a float.
  /// The overflow flag is not serialised.
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

struct FixedPointVisitor;

impl de::Visitor<'_> for FixedPointVisitor {
  type Value = FixedPoint;

  fn expecting(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    f.write_str("a decimal fixed-point number as a string, such as \"-3.14159265\"")
  }

  fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
    v.parse().map_err(E::custom)
  }
}

impl<'de> Deserialize<'de> for FixedPoint {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserializer.deserialize_str(FixedPointVisitor)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn to_json() {
    let x = FixedPoint::from_parts(-3, -14_159_265);
    assert_eq!(serde_json::to_string(&x).unwrap(), "\"-3.14159265\"");
    assert_eq!(serde_json::to_string(&[FixedPoint::ONE, FixedPoint::ZERO]).unwrap(), "[\"1.00000000\",\"0.00000000\"]");
  }

  #[test]
  fn from_json() {
    let x: FixedPoint = serde_json::from_str("\"2.5\"").unwrap();
    assert_eq!(x, FixedPoint::from_parts(2, 50_000_000));
    assert!(serde_json::from_str::<FixedPoint>("\"abc\"").is_err());
    assert!(serde_json::from_str::<FixedPoint>("2.5").is_err());
  }

  #[test]
  fn round_trip() {
    for x in FixedPoint::cases_interesting() {
      let json = serde_json::to_string(&x).unwrap();
      assert_eq!(serde_json::from_str::<FixedPoint>(&json).unwrap(), x);
    }
  }
}
