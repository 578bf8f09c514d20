use super::*;

/// Addition and subtraction (both add the integer and fraction parts independently, and let
/// [`FixedPoint::from_parts`] carry and wrap).
mod add;

/// Multiplication.
mod mul;

/// Division.
mod div;

/// Helper macro for implementing operators for all combinations of value and reference
macro_rules! mk_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident) => {
    impl $trait<FixedPoint> for FixedPoint {
      type Output = FixedPoint;

      #[inline]
      fn $name(self, rhs: Self) -> Self::Output { FixedPoint::$name(self, rhs) }
    }

    impl $trait<&FixedPoint> for FixedPoint {
      type Output = FixedPoint;

      #[inline]
      fn $name(self, rhs: &Self) -> Self::Output { FixedPoint::$name(self, *rhs) }
    }

    impl $trait<FixedPoint> for &FixedPoint {
      type Output = FixedPoint;

      #[inline]
      fn $name(self, rhs: FixedPoint) -> Self::Output { FixedPoint::$name(*self, rhs) }
    }

    impl $trait<&FixedPoint> for &FixedPoint {
      type Output = FixedPoint;

      #[inline]
      fn $name(self, rhs: &FixedPoint) -> Self::Output { FixedPoint::$name(*self, *rhs) }
    }

    impl $trait_assign<FixedPoint> for FixedPoint {
      #[inline]
      fn $name_assign(&mut self, rhs: FixedPoint) { *self = FixedPoint::$name(*self, rhs) }
    }

    impl $trait_assign<&FixedPoint> for FixedPoint {
      #[inline]
      fn $name_assign(&mut self, rhs: &FixedPoint) { *self = FixedPoint::$name(*self, *rhs) }
    }
  }
}

pub(crate) use mk_ops;

/// Macro for instantiating the checks that every operand form of a binary operator compiles and
/// agrees with the by-value form.
macro_rules! mk_tests {
  ($op:tt, $op_assign:tt) => {
    #[test]
    fn operand_forms() {
      for a in FixedPoint::cases_interesting() {
        for b in FixedPoint::cases_interesting() {
          let expected = a $op b;
          assert_eq!(&a $op b, expected);
          assert_eq!(a $op &b, expected);
          assert_eq!(&a $op &b, expected);
          let mut c = a;
          c $op_assign b;
          assert_eq!(c, expected);
          let mut c = a;
          c $op_assign &b;
          assert_eq!(c, expected);
        }
      }
    }
  }
}

pub(crate) use mk_tests;
