use super::*;

/// [`SCALE`] widened, since all normalisation happens in `i128` to stay clear of overflow.
const S: i128 = SCALE as i128;

/// `10^exp` as an `i128`.
#[inline]
pub(crate) const fn pow10(exp: u32) -> i128 {
  10_i128.pow(exp)
}

/// The number of decimal digits of `x`, or 0 if `x` is 0.
#[inline]
pub(crate) const fn decimal_digits(x: u128) -> u32 {
  match x.checked_ilog10() {
    Some(log) => log + 1,
    None => 0,
  }
}

impl FixedPoint {
  /// Construct a number from a raw `integer` part and a `fraction` part in units of 10⁻⁸, which
  /// need not be normalised. The result is `integer + fraction ÷ SCALE`, wrapped around if out of
  /// range.
  ///
  /// Normalisation happens in two steps:
  ///
  ///   1. **Carry**: whole multiples of `SCALE` are moved from `fraction` into `integer`, and if
  ///      the two parts disagree in sign, one unit is borrowed/lent between them so they agree.
  ///   2. **Wraparound**: if the integer magnitude is `≥ SCALE`, the value is reduced onto the
  ///      signed ring `[-SCALE, SCALE)` and the result is flagged as
  ///      [overflowed](Self::overflowed). The one exception is exactly `-SCALE`, which is
  ///      [`Self::MIN`] and is in range.
  ///
  /// # Example
  ///
  /// ```
  /// # use soft_fixed::FixedPoint;
  /// assert_eq!(FixedPoint::from_parts(2, -50_000_000).to_string(), "1.50000000");
  /// assert_eq!(FixedPoint::from_parts(0, 250_000_000).to_string(), "2.50000000");
  ///
  /// let wrapped = FixedPoint::from_parts(100_000_001, 0);
  /// assert_eq!(wrapped.to_string(), "-99999999.00000000");
  /// assert!(wrapped.overflowed());
  /// ```
  pub const fn from_parts(integer: i64, fraction: i64) -> Self {
    Self::from_parts_wide(integer as i128, fraction as i128)
  }

  /// As [`Self::from_parts`], for intermediate results that may not fit an `i64`.
  pub(crate) const fn from_parts_wide(integer: i128, fraction: i128) -> Self {
    let (integer, fraction) = carry(integer, fraction);
    let (integer, fraction, overflow) = wrap(integer, fraction);
    // Both parts now share a sign and are within range.
    let negative = integer < 0 || (integer == 0 && fraction < 0);
    Self {
      negative,
      int: integer.unsigned_abs() as u32,
      frac: fraction.unsigned_abs() as u32,
      overflow,
    }
  }

  /// Construct a number from an integer. Integers outside `[-SCALE, SCALE)` wrap around.
  #[inline]
  pub const fn from_int(value: i64) -> Self {
    Self::from_parts(value, 0)
  }

  /// Construct a number from a count of units of 10⁻⁸, i.e. the inverse of [`Self::to_scaled`].
  ///
  /// ```
  /// # use soft_fixed::FixedPoint;
  /// assert_eq!(FixedPoint::from_scaled(-150_000_000).to_string(), "-1.50000000");
  /// ```
  #[inline]
  pub const fn from_scaled(units: i64) -> Self {
    let units = units as i128;
    Self::from_parts_wide(units / S, units % S)
  }

  /// Construct `integer.digits`, where `digits` is the literal digit string written after the
  /// decimal point. Digits past the 8th are truncated (never rounded); fewer than 8 are padded with
  /// zeros on the right. The fraction takes the sign of `integer`.
  ///
  /// Since `digits` is an integer, it cannot express leading zeros: use [`Self::from_parts`] for
  /// fractions such as `0.05`.
  ///
  /// ```
  /// # use soft_fixed::FixedPoint;
  /// assert_eq!(FixedPoint::with_fraction_digits(3, 14159265359).to_string(), "3.14159265");
  /// assert_eq!(FixedPoint::with_fraction_digits(-2, 5).to_string(), "-2.50000000");
  /// ```
  pub const fn with_fraction_digits(integer: i64, digits: u64) -> Self {
    let len = decimal_digits(digits as u128);
    let frac = if len <= DIGITS {
      digits as i128 * pow10(DIGITS - len)
    } else {
      digits as i128 / pow10(len - DIGITS)
    };
    let frac = if integer < 0 {-frac} else {frac};
    Self::from_parts_wide(integer as i128, frac)
  }

  /// Construct `d.ddd × 10^exponent` from the digit string `digits = dddd`, i.e. the leading
  /// digit of `digits` has place value `10^exponent`. Fraction digits past the 8th are truncated.
  ///
  /// An `exponent` below `-DIGITS` underflows to zero; an `exponent` of `DIGITS` or more is out of
  /// range and wraps like `from_parts(SCALE, 0)` does.
  ///
  /// ```
  /// # use soft_fixed::FixedPoint;
  /// assert_eq!(FixedPoint::from_scientific(785398163, -1).to_string(), "0.78539816");
  /// assert_eq!(FixedPoint::from_scientific(-625, -2).to_string(), "-0.06250000");
  /// assert_eq!(FixedPoint::from_scientific(12, 3).to_string(), "1200.00000000");
  /// ```
  pub const fn from_scientific(digits: i64, exponent: i32) -> Self {
    const DIGITS_I32: i32 = DIGITS as i32;
    if digits == 0 || exponent < -DIGITS_I32 {
      return Self::ZERO
    }
    if exponent >= DIGITS_I32 {
      return Self::from_parts(SCALE, 0)
    }
    let len = decimal_digits(digits.unsigned_abs() as u128) as i32;
    // Power of ten that turns `digits` into a count of units.
    let shift = exponent - (len - 1) + DIGITS_I32;
    let units = if shift >= 0 {
      digits as i128 * pow10(shift as u32)
    } else {
      digits as i128 / pow10(-shift as u32)
    };
    Self::from_parts_wide(units / S, units % S)
  }

  /// The integer part, signed. It always has the same sign as [`Self::fraction`].
  #[inline]
  pub const fn integer(self) -> i64 {
    if self.negative {-(self.int as i64)} else {self.int as i64}
  }

  /// The fraction part in units of 10⁻⁸, signed. It always has the same sign as
  /// [`Self::integer`], and its magnitude is less than [`SCALE`].
  #[inline]
  pub const fn fraction(self) -> i64 {
    if self.negative {-(self.frac as i64)} else {self.frac as i64}
  }

  /// The value as a count of units of 10⁻⁸, i.e. `self × SCALE`.
  #[inline]
  pub const fn to_scaled(self) -> i64 {
    self.integer() * SCALE + self.fraction()
  }

  /// Whether `self` is strictly negative.
  #[inline]
  pub const fn is_negative(self) -> bool {
    self.negative
  }

  /// Whether `self` is zero.
  #[inline]
  pub const fn is_zero(self) -> bool {
    self.int == 0 && self.frac == 0
  }

  /// Whether the operation that produced `self` wrapped around the ring `[-SCALE, SCALE)`.
  ///
  /// This is purely informational: it is never an error, and it does not take part in
  /// comparisons. Callers that need a strict range must check it themselves.
  #[inline]
  pub const fn overflowed(self) -> bool {
    self.overflow
  }

  /// `-1` if `self` is negative, `+1` otherwise (including zero).
  #[inline]
  pub(crate) const fn sign(self) -> i64 {
    if self.negative {-1} else {1}
  }

  /// Magnitude of the integer part.
  #[inline]
  pub(crate) const fn int_magnitude(self) -> u64 {
    self.int as u64
  }

  /// Magnitude of the fraction part.
  #[inline]
  pub(crate) const fn frac_magnitude(self) -> u64 {
    self.frac as u64
  }
}

/// Move whole multiples of [`SCALE`] from `fraction` into `integer`, then make both parts agree
/// in sign.
const fn carry(integer: i128, fraction: i128) -> (i128, i128) {
  // `/` rounds towards zero, so `fraction` keeps its sign and ends up in `]-S, S[`.
  let carry = fraction / S;
  let mut integer = integer + carry;
  let mut fraction = fraction - carry * S;
  if integer > 0 && fraction < 0 {
    integer -= 1;
    fraction += S;
  } else if integer < 0 && fraction > 0 {
    integer += 1;
    fraction -= S;
  }
  (integer, fraction)
}

/// Reduce a carried pair onto the ring `[-S, S)`. Returns the reduced pair and whether any
/// wrapping happened.
///
/// The ring has width `2S`, so with `count = |integer| / S`:
///
///   - An even `count` is a whole number of turns: keep `|integer| mod S` and the sign.
///   - An odd `count` lands on the opposite half: the integer becomes `(|integer| mod S) - S`
///     (times the sign), so it now disagrees in sign with the untouched fraction, and carrying
///     again settles the pair.
const fn wrap(integer: i128, fraction: i128) -> (i128, i128, bool) {
  let sign = if integer < 0 || (integer == 0 && fraction < 0) {-1} else {1};
  let magnitude = integer * sign;
  if magnitude < S || (integer == -S && fraction == 0) {
    return (integer, fraction, false)
  }

  let count = magnitude / S;
  let rem = magnitude % S;
  let integer = if count % 2 == 0 { rem * sign } else { (rem - S) * sign };
  let (integer, fraction) = carry(integer, fraction);

  // A negative odd wrap with nothing left over lands on `+S`, which is the same ring point as
  // `-S`.
  if integer == S && fraction == 0 {
    (-S, 0, true)
  } else {
    (integer, fraction, true)
  }
}
