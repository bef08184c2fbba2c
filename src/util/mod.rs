
//! Various utility functions.

pub mod gcd;
pub mod regexes;

use num::BigInt;
use num::bigint::Sign as BigSign;

use std::ops::Mul;

/// The sign of a nonzero quantity. Zero is treated as positive, which
/// is the convention used by every canonical form in this crate (the
/// sign, if any, lives in the numerator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Sign {
  Negative,
  Positive,
}

impl Sign {
  /// The sign recorded in the top bit of an IEEE 754 value.
  pub fn from_sign_bit(bit_set: bool) -> Self {
    if bit_set { Self::Negative } else { Self::Positive }
  }

  pub fn of(value: &BigInt) -> Self {
    match value.sign() {
      BigSign::Minus => Self::Negative,
      BigSign::NoSign | BigSign::Plus => Self::Positive,
    }
  }

  /// Multiplies `value` by this sign.
  pub fn apply(self, value: BigInt) -> BigInt {
    match self {
      Self::Negative => - value,
      Self::Positive => value,
    }
  }
}

impl Mul for Sign {
  type Output = Self;

  fn mul(self, other: Self) -> Self::Output {
    if self == other {
      Self::Positive
    } else {
      Self::Negative
    }
  }
}
