
//! Parsing rational numbers from text.
//!
//! Three grammars are accepted, tried in this order:
//!
//! * `<left>/<right>`, where each side is itself any accepted form.
//!   The value is `left / right`.
//! * `<integer>.<digits>`, an exact decimal.
//! * `<integer>`, an optionally signed run of digits.
//!
//! Surrounding whitespace on each side of a `/` is ignored.

use super::RationalNumber;
use crate::error::RationalError;
use crate::util::regexes::{INTEGER_RE, DECIMAL_RE};

use num::BigInt;
use log::{debug, trace};

use std::str::FromStr;

/// Converts a decimal of the form `<integer>.<digits>` into a
/// `(numerator, denominator)` pair, with the denominator
/// `10^(number of fractional digits)`. The result is neither reduced
/// nor sign-normalized; that is left to the caller.
///
/// A leading `-` negates the whole value, so `"-1.5"` produces
/// `(-15, 10)`.
pub fn decimal_to_fraction(s: &str) -> Result<(BigInt, BigInt), RationalError> {
  let caps = DECIMAL_RE.captures(s).ok_or_else(|| RationalError::malformed_string(s))?;
  let negative = &caps[1] == "-";
  let digits = &caps[3];

  let denominator = num::pow(BigInt::from(10), digits.len());
  let whole = parse_digits(&caps[2])?;
  let fraction = parse_digits(digits)?;
  let magnitude = whole * &denominator + fraction;
  let numerator = if negative { - magnitude } else { magnitude };
  Ok((numerator, denominator))
}

fn parse_digits(s: &str) -> Result<BigInt, RationalError> {
  BigInt::from_str(s).map_err(|_| RationalError::malformed_string(s))
}

fn parse_rational(s: &str) -> Result<RationalNumber, RationalError> {
  let s = s.trim();
  if let Some((left, right)) = s.split_once('/') {
    trace!("Parsing {s:?} as a fraction");
    let left = parse_rational(left)?;
    let right = parse_rational(right)?;
    return RationalNumber::canonicalize(
      left.numerator() * right.denominator(),
      left.denominator() * right.numerator(),
    );
  }
  if s.contains('.') {
    trace!("Parsing {s:?} as a decimal");
    let (numerator, denominator) = decimal_to_fraction(s)?;
    return RationalNumber::canonicalize(numerator, denominator);
  }
  if INTEGER_RE.is_match(s) {
    trace!("Parsing {s:?} as an integer");
    return parse_digits(s).map(RationalNumber::from);
  }
  debug!("Rejecting malformed rational string {s:?}");
  Err(RationalError::malformed_string(s))
}

impl FromStr for RationalNumber {
  type Err = RationalError;

  fn from_str(s: &str) -> Result<RationalNumber, RationalError> {
    parse_rational(s)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ratio(n: i64, d: i64) -> RationalNumber {
    RationalNumber::ratio(n, d).unwrap()
  }

  fn parse(s: &str) -> RationalNumber {
    RationalNumber::from_str(s).unwrap()
  }

  #[test]
  fn test_decimal_to_fraction() {
    assert_eq!(decimal_to_fraction("0.25").unwrap(), (BigInt::from(25), BigInt::from(100)));
    assert_eq!(decimal_to_fraction("12.050").unwrap(), (BigInt::from(12050), BigInt::from(1000)));
    assert_eq!(decimal_to_fraction("-1.5").unwrap(), (BigInt::from(-15), BigInt::from(10)));
    assert_eq!(decimal_to_fraction("-0.5").unwrap(), (BigInt::from(-5), BigInt::from(10)));
    assert_eq!(decimal_to_fraction("+3.0").unwrap(), (BigInt::from(30), BigInt::from(10)));
  }

  #[test]
  fn test_decimal_to_fraction_malformed() {
    assert_eq!(decimal_to_fraction("1."), Err(RationalError::malformed_string("1.")));
    assert!(decimal_to_fraction(".5").is_err());
    assert!(decimal_to_fraction("1.2.3").is_err());
    assert!(decimal_to_fraction("1.5e3").is_err());
    assert!(decimal_to_fraction("12").is_err());
  }

  #[test]
  fn test_parse_integer() {
    assert_eq!(parse("7"), ratio(7, 1));
    assert_eq!(parse("-99"), ratio(-99, 1));
    assert_eq!(parse("+5"), ratio(5, 1));
    assert_eq!(
      parse("888888888888888888888888888888888"),
      RationalNumber::from(BigInt::from_str("888888888888888888888888888888888").unwrap()),
    );
  }

  #[test]
  fn test_parse_fraction() {
    let r = parse("3/4");
    assert_eq!(r.numerator(), &BigInt::from(3));
    assert_eq!(r.denominator(), &BigInt::from(4));
    let r = parse("6/8");
    assert_eq!(r.numerator(), &BigInt::from(3));
    assert_eq!(r.denominator(), &BigInt::from(4));
    assert_eq!(parse("7/-9"), ratio(-7, 9));
    assert_eq!(parse("-7/-9"), ratio(7, 9));
    assert_eq!(parse(" 1 / 2 "), ratio(1, 2));
  }

  #[test]
  fn test_parse_decimal() {
    assert_eq!(parse("0.25"), ratio(1, 4));
    assert_eq!(parse("-1.5"), ratio(-3, 2));
    assert_eq!(parse("-0.5"), ratio(-1, 2));
    assert_eq!(parse("2.000"), ratio(2, 1));
    assert_eq!(parse("0.0"), ratio(0, 1));
  }

  #[test]
  fn test_parse_mixed_fraction() {
    assert_eq!(parse("1.5/3"), ratio(1, 2));
    assert_eq!(parse("1/0.25"), ratio(4, 1));
    assert_eq!(parse("0.5/-0.25"), ratio(-2, 1));
    // The right-hand side is itself parsed as a fraction.
    assert_eq!(parse("1/2/3"), ratio(3, 2));
  }

  #[test]
  fn test_parse_zero_denominator() {
    assert_eq!(RationalNumber::from_str("1/0"), Err(RationalError::DivisionByZero));
    assert_eq!(RationalNumber::from_str("0/0.0"), Err(RationalError::DivisionByZero));
  }

  #[test]
  fn test_parse_malformed() {
    assert_eq!(RationalNumber::from_str(""), Err(RationalError::malformed_string("")));
    assert_eq!(RationalNumber::from_str("abc"), Err(RationalError::malformed_string("abc")));
    assert_eq!(RationalNumber::from_str("1/x"), Err(RationalError::malformed_string("x")));
    assert!(matches!(RationalNumber::from_str("1/"), Err(RationalError::MalformedString(_))));
    assert!(matches!(RationalNumber::from_str("1e5"), Err(RationalError::MalformedString(_))));
    assert!(matches!(RationalNumber::from_str("1.x"), Err(RationalError::MalformedString(_))));
    assert!(matches!(RationalNumber::from_str("1:2"), Err(RationalError::MalformedString(_))));
  }

  #[test]
  fn test_integer_string_round_trip() {
    for n in [0i64, 1, -1, 42, -1000000007, i64::MAX, i64::MIN] {
      let r = RationalNumber::from(n);
      assert_eq!(parse(&r.to_string()), r);
    }
  }
}
