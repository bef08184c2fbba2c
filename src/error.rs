
use thiserror::Error;

/// Errors produced while constructing or operating on a
/// [`RationalNumber`](crate::number::RationalNumber).
///
/// Every failure is reported to the immediate caller. No operation in
/// this crate returns a partial result alongside an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RationalError {
  /// Wrong argument count, shape, or type. This includes non-finite
  /// floats and non-integral components of an explicit pair.
  #[error("Invalid argument: {0}")]
  InvalidArgument(String),
  /// The divisor (or the denominator being constructed) is zero.
  #[error("Division by zero")]
  DivisionByZero,
  /// A string that matches none of the integer, decimal, or fraction
  /// grammars.
  #[error("Malformed rational number string {0:?}")]
  MalformedString(String),
}

impl RationalError {
  pub fn invalid_argument(reason: impl Into<String>) -> Self {
    Self::InvalidArgument(reason.into())
  }

  pub fn malformed_string(input: impl Into<String>) -> Self {
    Self::MalformedString(input.into())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_display() {
    assert_eq!(
      RationalError::invalid_argument("expected 1 or 2 arguments, got 3").to_string(),
      "Invalid argument: expected 1 or 2 arguments, got 3",
    );
    assert_eq!(RationalError::DivisionByZero.to_string(), "Division by zero");
    assert_eq!(
      RationalError::malformed_string("1/x").to_string(),
      "Malformed rational number string \"1/x\"",
    );
  }
}
