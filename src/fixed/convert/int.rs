use super::*;

macro_rules! impl_from_int {
  ($($int:ty),*) => {$(
    impl From<$int> for FixedPoint {
      /// Exact for every value in range; only an `i32` can fall outside it, and then it wraps.
      #[inline]
      fn from(value: $int) -> Self {
        Self::from_int(value as i64)
      }
    }
  )*}
}

// `i64` and the unsigned types from `u32` up go through `FixedPoint::from_int` explicitly.
impl_from_int!{i8, i16, i32, u8, u16}
