//! Trigonometry by [CORDIC](https://en.wikipedia.org/wiki/CORDIC).
//!
//! CORDIC computes a rotation by an arbitrary angle `θ` as a sequence of rotations by the fixed
//! angles `atan(2^-i)`, each applied in whichever direction brings the remaining angle closer to
//! zero. A rotation by `atan(t)` is, up to a scale factor of `1/√(1 + t²)`,
//!
//!   (cos, sin) ← (cos - t × sin, sin + t × cos)
//!
//! so only the tangents `t`, the angles, and the cumulative scale factors ("gains") need to be
//! tabulated. In **rotation mode** ([`TrigContext::cos_sin`]) the unit vector is rotated by `θ`,
//! yielding `(cos θ, sin θ)`; in **vectoring mode** (the inverse functions) a given vector is
//! rotated onto the x axis, and the sum of the rotations taken is its angle.

use super::*;
use std::sync::OnceLock;

/// Rotation mode: sine and cosine
mod rotate;

/// Vectoring mode: arcsine, arccosine, argument
mod vector;

/// One step of the CORDIC iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CordicEntry {
  /// `tan(angle)`, nominally `2^-i` for the `i`th entry.
  pub tangent: FixedPoint,
  /// The rotation angle of this step, in radians.
  pub angle: FixedPoint,
  /// The cumulative gain after this step, `∏ 1/√(1 + tangent²)` over this and all previous steps.
  pub gain: FixedPoint,
}

impl CordicEntry {
  /// Whether this entry has been truncated to nothing at 8 digits, and so cannot rotate anything.
  const fn is_degenerate(&self) -> bool {
    self.tangent.is_zero() || self.angle.is_zero()
  }
}

const fn entry(tangent: FixedPoint, angle: FixedPoint, gain: FixedPoint) -> CordicEntry {
  CordicEntry { tangent, angle, gain }
}

/// The built-in table of 16 CORDIC steps, for tangents `1`, `1/2`, …, `1/32768`.
///
/// Values are written at their published precision and truncated to 8 digits.
pub const CORDIC_TABLE: [CordicEntry; 16] = {
  const fn sci(digits: i64, exponent: i32) -> FixedPoint { FixedPoint::from_scientific(digits, exponent) }
  const fn gain(digits: u64) -> FixedPoint { FixedPoint::with_fraction_digits(0, digits) }
  [
    entry(sci(1, 0),          sci(785398163, -1), gain(707106781)),
    entry(sci(5, -1),         sci(463647609, -1), gain(632455532)),
    entry(sci(25, -1),        sci(244978663, -1), gain(613571991)),
    entry(sci(125, -1),       sci(124354994, -1), gain(608833912)),
    entry(sci(625, -2),       sci(624188100, -2), gain(607648256)),
    entry(sci(3125, -2),      sci(312398334, -2), gain(607351770)),
    entry(sci(15625, -2),     sci(156237286, -2), gain(607277644)),
    entry(sci(78125, -3),     sci(781234106, -3), gain(607259112)),
    entry(sci(390625, -3),    sci(390623013, -3), gain(607254479)),
    entry(sci(1953125, -3),   sci(195312251, -3), gain(607253321)),
    entry(sci(9765625, -4),   sci(976562189, -4), gain(607253031)),
    entry(sci(48828125, -4),  sci(488281211, -4), gain(607252959)),
    entry(sci(244140625, -4), sci(244140620, -4), gain(607252941)),
    entry(sci(122070312, -4), sci(122070312, -4), gain(607252936)),
    entry(sci(610351562, -5), sci(609979260, -5), gain(607252935)),
    entry(sci(305175781, -5), sci(304896640, -5), gain(607252934)),
  ]
};

/// A `(cos, sin)` pair, as computed together by [`TrigContext::cos_sin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CosSin {
  pub cos: FixedPoint,
  pub sin: FixedPoint,
}

/// The CORDIC table in use, cut down to its usable entries, and the angle below which iterating
/// stops.
///
/// Every trigonometric function of [`FixedPoint`] goes through the [built-in](Self::builtin)
/// context; a context for a custom table can be made with [`Self::from_table`].
#[derive(Debug, Clone, Copy)]
pub struct TrigContext<'t> {
  table: &'t [CordicEntry],
  threshold: FixedPoint,
}

impl<'t> TrigContext<'t> {
  /// Prepare a context from a CORDIC table.
  ///
  /// Only the entries up to (excluding) the first one whose tangent or angle is zero are used. The
  /// stopping threshold is half of the angle of the last usable entry: once the remaining angle is
  /// smaller than that, no further step can bring it closer to zero.
  ///
  /// Fails with [`MathError::DegenerateCordicTable`] if not even the first entry is usable.
  ///
  /// ```
  /// # use soft_fixed::{CORDIC_TABLE, TrigContext};
  /// let coarse = TrigContext::from_table(&CORDIC_TABLE[.. 8]).unwrap();
  /// assert_eq!(coarse.iterations(), 8);
  /// assert!(TrigContext::from_table(&[]).is_err());
  /// ```
  pub fn from_table(table: &'t [CordicEntry]) -> Result<Self, MathError> {
    let iterations = table.iter().take_while(|entry| !entry.is_degenerate()).count();
    let table = &table[.. iterations];
    let Some(last) = table.last() else {
      tracing::error!(entries = iterations, "CORDIC table has no usable entry at this precision");
      return Err(MathError::DegenerateCordicTable)
    };
    let threshold = FixedPoint::from_scaled(last.angle.to_scaled() / 2);
    tracing::debug!(iterations, %threshold, "prepared CORDIC context");
    Ok(Self { table, threshold })
  }

  /// The number of usable table entries, i.e. the most steps any function takes.
  pub fn iterations(&self) -> usize {
    self.table.len()
  }

  /// The remaining angle below which the iteration stops.
  pub fn threshold(&self) -> FixedPoint {
    self.threshold
  }
}

impl TrigContext<'static> {
  /// The context for [`CORDIC_TABLE`], prepared on first use and shared by all threads thereafter.
  pub fn builtin() -> Result<&'static Self, MathError> {
    static BUILTIN: OnceLock<Result<TrigContext<'static>, MathError>> = OnceLock::new();
    BUILTIN.get_or_init(|| TrigContext::from_table(&CORDIC_TABLE))
      .as_ref()
      .map_err(Clone::clone)
  }
}

/// The trigonometric functions on the [built-in context](TrigContext::builtin).
///
/// These only fail if the built-in table is unusable (which it is not) or on a domain error.
impl FixedPoint {
  /// Returns the cosine and the sine of `self` (in radians), computed together.
  pub fn cos_sin(self) -> Result<CosSin, MathError> {
    Ok(TrigContext::builtin()?.cos_sin(self))
  }

  /// Returns the sine of `self` (in radians). See [`TrigContext::cos_sin`].
  ///
  /// ```
  /// # use soft_fixed::FixedPoint;
  /// assert_eq!(FixedPoint::FRAC_PI_2.sin(), Ok(FixedPoint::ONE));
  /// assert_eq!(FixedPoint::ONE.sin().unwrap().to_string(), "0.84147700");
  /// ```
  pub fn sin(self) -> Result<Self, MathError> {
    Ok(TrigContext::builtin()?.sin(self))
  }

  /// Returns the cosine of `self` (in radians). See [`TrigContext::cos_sin`].
  pub fn cos(self) -> Result<Self, MathError> {
    Ok(TrigContext::builtin()?.cos(self))
  }

  /// Returns the tangent of `self` (in radians). See [`TrigContext::tan`].
  pub fn tan(self) -> Result<Self, MathError> {
    Ok(TrigContext::builtin()?.tan(self))
  }

  /// Returns the arcsine of `self`, (about) in `[-π/2, π/2]`. See [`TrigContext::asin`].
  pub fn asin(self) -> Result<Self, MathError> {
    TrigContext::builtin()?.asin(self)
  }

  /// Returns the arccosine of `self`, (about) in `[0, π]`. See [`TrigContext::acos`].
  pub fn acos(self) -> Result<Self, MathError> {
    TrigContext::builtin()?.acos(self)
  }

  /// Returns the angle of the point `(x, self)`, (about) in `[-π, π]`, i.e. `atan2(self, x)`. See
  /// [`TrigContext::arg`].
  ///
  /// ```
  /// # use soft_fixed::FixedPoint;
  /// let (x, y) = (FixedPoint::ONE, FixedPoint::ONE);
  /// assert_eq!(y.arg(x).unwrap().to_string(), "0.78539816");
  /// ```
  pub fn arg(self, x: Self) -> Result<Self, MathError> {
    TrigContext::builtin()?.arg(self, x)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn table_values() {
    let first = CORDIC_TABLE[0];
    assert_eq!(first.tangent, FixedPoint::ONE);
    assert_eq!(first.angle, FixedPoint::from_parts(0, 78_539_816));
    assert_eq!(first.gain, FixedPoint::from_parts(0, 70_710_678));
    let last = CORDIC_TABLE[15];
    assert_eq!(last.tangent, FixedPoint::from_parts(0, 3_051));
    assert_eq!(last.angle, FixedPoint::from_parts(0, 3_048));
    assert_eq!(last.gain, FixedPoint::from_parts(0, 60_725_293));
  }

  #[test]
  fn table_is_decreasing() {
    for w in CORDIC_TABLE.windows(2) {
      assert!(w[1].tangent < w[0].tangent);
      assert!(w[1].angle < w[0].angle);
      assert!(w[1].gain <= w[0].gain);
    }
  }

  #[test]
  fn builtin() {
    let context = TrigContext::builtin().unwrap();
    assert_eq!(context.iterations(), 16);
    assert_eq!(context.threshold(), FixedPoint::from_parts(0, 1_524));
    // Prepared once.
    assert!(core::ptr::eq(context, TrigContext::builtin().unwrap()));
  }

  #[test]
  fn builtin_shared_across_threads() {
    use std::sync::Barrier;
    const THREADS: usize = 8;
    let barrier = Barrier::new(THREADS);
    let contexts: Vec<&'static TrigContext<'static>> = std::thread::scope(|s| {
      let handles: Vec<_> = (0 .. THREADS).map(|_| s.spawn(|| {
        barrier.wait();
        TrigContext::builtin().unwrap()
      })).collect();
      handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    for context in &contexts {
      assert!(core::ptr::eq(*context, contexts[0]));
      assert_eq!(context.iterations(), 16);
      assert_eq!(context.threshold(), FixedPoint::from_parts(0, 1_524));
    }
  }

  #[test]
  fn from_table_truncated() {
    let context = TrigContext::from_table(&CORDIC_TABLE[.. 4]).unwrap();
    assert_eq!(context.iterations(), 4);
    assert_eq!(context.threshold(), FixedPoint::from_parts(0, 6_217_749));
  }

  #[test]
  fn from_table_stops_at_degenerate() {
    let mut table = CORDIC_TABLE;
    table[5].angle = FixedPoint::ZERO;
    let context = TrigContext::from_table(&table).unwrap();
    assert_eq!(context.iterations(), 5);
    assert_eq!(context.threshold(), FixedPoint::from_parts(0, 3_120_940));
  }

  #[test]
  fn from_table_degenerate() {
    let mut table = CORDIC_TABLE;
    table[0].tangent = FixedPoint::ZERO;
    assert_eq!(TrigContext::from_table(&table).unwrap_err(), MathError::DegenerateCordicTable);
    assert_eq!(TrigContext::from_table(&[]).unwrap_err(), MathError::DegenerateCordicTable);
  }

  #[test]
  fn coarse_table_still_works() {
    let context = TrigContext::from_table(&CORDIC_TABLE[.. 8]).unwrap();
    let CosSin { cos, sin } = context.cos_sin(FixedPoint::ONE);
    assert!((cos - FixedPoint::from_parts(0, 54_030_230)).abs() < FixedPoint::from_parts(0, 1_000_000));
    assert!((sin - FixedPoint::from_parts(0, 84_147_098)).abs() < FixedPoint::from_parts(0, 1_000_000));
  }
}
