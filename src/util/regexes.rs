
//! Module containing the grammars accepted by the string
//! constructors.

use regex::Regex;
use once_cell::sync::Lazy;

/// An optionally signed run of decimal digits.
pub static INTEGER_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^[+-]?\d+$").unwrap());

/// `<integer>.<digits>`. Captures the sign, the integer part, and the
/// fractional digits separately.
pub static DECIMAL_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^([+-]?)(\d+)\.(\d+)$").unwrap());

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_integer_re() {
    assert!(INTEGER_RE.is_match("0"));
    assert!(INTEGER_RE.is_match("-120"));
    assert!(INTEGER_RE.is_match("+7"));
    assert!(!INTEGER_RE.is_match(""));
    assert!(!INTEGER_RE.is_match("-"));
    assert!(!INTEGER_RE.is_match("1.5"));
    assert!(!INTEGER_RE.is_match("1_000"));
  }

  #[test]
  fn test_decimal_re() {
    let caps = DECIMAL_RE.captures("-12.050").unwrap();
    assert_eq!(&caps[1], "-");
    assert_eq!(&caps[2], "12");
    assert_eq!(&caps[3], "050");
    assert!(!DECIMAL_RE.is_match("12."));
    assert!(!DECIMAL_RE.is_match(".5"));
    assert!(!DECIMAL_RE.is_match("1.2.3"));
    assert!(!DECIMAL_RE.is_match("1.x"));
  }
}
