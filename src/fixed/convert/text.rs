use super::*;

use core::str::FromStr;

/// The error type returned when parsing a [`FixedPoint`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFixedError {
  /// The string has no digits at all (e.g. `""`, `"-"`, or `"."`).
  #[error("cannot parse a fixed-point number from a string without digits")]
  Empty,
  /// The string contains a character other than an optional leading sign, decimal digits, and a
  /// single decimal point.
  #[error("invalid character {0:?} in fixed-point number")]
  InvalidDigit(char),
  /// A run of digits too long to even be read into a 64-bit integer. Merely out-of-range integer
  /// parts wrap around instead, as with every other constructor.
  #[error("fixed-point number has too many digits")]
  IntegerTooLarge,
}

/// Parse a run of decimal digits into an integer, or fail with `IntegerTooLarge` if it does not fit
/// in a `u64`.
fn parse_digits(digits: &str) -> Result<u64, ParseFixedError> {
  digits.chars().try_fold(0_u64, |acc, c| {
    let digit = c.to_digit(10).ok_or(ParseFixedError::InvalidDigit(c))?;
    acc.checked_mul(10)
      .and_then(|acc| acc.checked_add(digit as u64))
      .ok_or(ParseFixedError::IntegerTooLarge)
  })
}

impl FromStr for FixedPoint {
  type Err = ParseFixedError;

  /// Parse the canonical form `[-]<integer>.<fraction>` that [`Display`](core::fmt::Display)
  /// prints. A leading `+` is also accepted, and either side of the decimal point (but not both)
  /// may be empty.
  ///
  /// The fraction may have any number of digits: fewer than 8 are padded with zeros on the right,
  /// and digits past the 8th are **truncated**, never rounded. Like [`FixedPoint::from_parts`], a
  /// value outside the representable range wraps around and is flagged as
  /// [overflowed](FixedPoint::overflowed).
  ///
  /// ```
  /// # use soft_fixed::{FixedPoint, ParseFixedError};
  /// let x: FixedPoint = "-3.14159265".parse().unwrap();
  /// assert_eq!(x, FixedPoint::from_parts(-3, -14_159_265));
  /// assert_eq!("2.5".parse::<FixedPoint>(), Ok(FixedPoint::from_parts(2, 50_000_000)));
  /// assert_eq!("0.123456789".parse::<FixedPoint>(), Ok(FixedPoint::from_parts(0, 12_345_678)));
  /// assert_eq!("1e5".parse::<FixedPoint>(), Err(ParseFixedError::InvalidDigit('e')));
  /// ```
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let (negative, body) = match s.strip_prefix('-') {
      Some(rest) => (true, rest),
      None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let (int_digits, frac_digits) = body.split_once('.').unwrap_or((body, ""));
    if int_digits.is_empty() && frac_digits.is_empty() {
      return Err(ParseFixedError::Empty)
    }

    let int = parse_digits(int_digits)?;
    // All digits are validated, but only the first `DIGITS` count.
    let kept = frac_digits.char_indices().nth(DIGITS as usize).map_or(frac_digits, |(i, _)| &frac_digits[..i]);
    let frac = parse_digits(kept)? * 10_u64.pow(DIGITS - kept.len() as u32);
    if let Some(c) = frac_digits[kept.len()..].chars().find(|c| !c.is_ascii_digit()) {
      return Err(ParseFixedError::InvalidDigit(c))
    }

    let sign = if negative {-1} else {1};
    Ok(Self::from_parts_wide(int as i128 * sign, frac as i128 * sign))
  }
}
