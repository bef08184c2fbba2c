
//! Exact decomposition of IEEE 754 double-precision values.
//!
//! Every finite `f64` is a dyadic rational `significand * 2^exponent`.
//! The functions here read that representation straight out of the
//! bit pattern, so the resulting fraction is exactly the value the
//! float denotes rather than an approximation of its decimal
//! rendering.

use crate::error::RationalError;
use crate::util::Sign;
use crate::util::gcd::gcd;

use num::{BigInt, One};
use log::debug;

const MANTISSA_BITS: u32 = 52;
const EXPONENT_BIAS: i64 = 1023;
const EXPONENT_MASK: u64 = 0x7ff;
const MANTISSA_MASK: u64 = (1 << MANTISSA_BITS) - 1;

/// The three bit fields of an `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FloatFields {
  sign: Sign,
  exponent: u64,
  mantissa: u64,
}

impl FloatFields {
  fn of(x: f64) -> Self {
    let bits = x.to_bits();
    FloatFields {
      sign: Sign::from_sign_bit(bits >> 63 == 1),
      exponent: (bits >> MANTISSA_BITS) & EXPONENT_MASK,
      mantissa: bits & MANTISSA_MASK,
    }
  }

  /// The integer significand and the power of two it is scaled by,
  /// such that the magnitude equals `significand * 2^(power - 52)`.
  ///
  /// Exponent field 0 encodes zero and the subnormals, whose implicit
  /// leading bit is 0 and whose exponent is pinned at `1 - bias`.
  fn significand_and_power(&self) -> (u64, i64) {
    if self.exponent == 0 {
      (self.mantissa, 1 - EXPONENT_BIAS)
    } else {
      ((1 << MANTISSA_BITS) | self.mantissa, self.exponent as i64 - EXPONENT_BIAS)
    }
  }
}

/// Converts a finite `f64` into the reduced fraction it represents
/// exactly, as `(numerator, denominator)` with the sign folded into
/// the numerator. Both zeroes decompose to `(0, 1)`.
///
/// `NaN` and the infinities have no rational value and are rejected
/// with [`RationalError::InvalidArgument`].
pub fn decompose(x: f64) -> Result<(BigInt, BigInt), RationalError> {
  let fields = FloatFields::of(x);
  if fields.exponent == EXPONENT_MASK {
    debug!("Rejecting non-finite float {x}");
    return Err(RationalError::invalid_argument(format!("cannot represent {x} as a fraction")));
  }
  let (significand, power) = fields.significand_and_power();

  // significand / 2^52, then scaled by 2^power.
  let mut numerator = BigInt::from(significand);
  let mut denominator = BigInt::one() << MANTISSA_BITS;
  if power >= 0 {
    numerator <<= power as usize;
  } else {
    denominator <<= power.unsigned_abs() as usize;
  }

  // The denominator is a nonzero power of two, so the divisor is
  // never zero, even when the numerator is.
  let divisor = gcd(&numerator, &denominator);
  numerator /= &divisor;
  denominator /= &divisor;

  Ok((fields.sign.apply(numerator), denominator))
}

#[cfg(test)]
mod tests {
  use super::*;

  use std::str::FromStr;

  fn decompose_i64(x: f64) -> (i64, i64) {
    let (n, d) = decompose(x).unwrap();
    (i64::try_from(n).unwrap(), i64::try_from(d).unwrap())
  }

  #[test]
  fn test_decompose_simple() {
    assert_eq!(decompose_i64(1.0), (1, 1));
    assert_eq!(decompose_i64(2.0), (2, 1));
    assert_eq!(decompose_i64(0.5), (1, 2));
    assert_eq!(decompose_i64(0.75), (3, 4));
    assert_eq!(decompose_i64(-0.375), (-3, 8));
    assert_eq!(decompose_i64(1536.0), (1536, 1));
  }

  #[test]
  fn test_decompose_zero() {
    assert_eq!(decompose_i64(0.0), (0, 1));
    assert_eq!(decompose_i64(-0.0), (0, 1));
  }

  #[test]
  fn test_decompose_inexact_decimal() {
    // 0.1 is actually 3602879701896397 / 2^55.
    let (n, d) = decompose(0.1).unwrap();
    assert_eq!(n, BigInt::from(3602879701896397i64));
    assert_eq!(d, BigInt::one() << 55);
  }

  #[test]
  fn test_decompose_large() {
    let (n, d) = decompose(2f64.powi(100)).unwrap();
    assert_eq!(n, BigInt::one() << 100);
    assert_eq!(d, BigInt::one());
    let (n, d) = decompose(f64::MAX).unwrap();
    assert_eq!(n, (BigInt::from((1u64 << 53) - 1)) << 971);
    assert_eq!(d, BigInt::one());
  }

  #[test]
  fn test_decompose_subnormal() {
    // Smallest positive subnormal is 2^-1074.
    let (n, d) = decompose(f64::from_bits(1)).unwrap();
    assert_eq!(n, BigInt::one());
    assert_eq!(d, BigInt::one() << 1074);
    let (n, d) = decompose(-f64::from_bits(3)).unwrap();
    assert_eq!(n, BigInt::from(-3));
    assert_eq!(d, BigInt::one() << 1074);
    // Smallest positive normal is 2^-1022.
    let (n, d) = decompose(f64::MIN_POSITIVE).unwrap();
    assert_eq!(n, BigInt::one());
    assert_eq!(d, BigInt::one() << 1022);
  }

  #[test]
  fn test_decompose_non_finite() {
    assert!(matches!(decompose(f64::NAN), Err(RationalError::InvalidArgument(_))));
    assert!(matches!(decompose(f64::INFINITY), Err(RationalError::InvalidArgument(_))));
    assert!(matches!(decompose(f64::NEG_INFINITY), Err(RationalError::InvalidArgument(_))));
  }

  #[test]
  fn test_decompose_reduced() {
    let (n, d) = decompose(-123.456).unwrap();
    assert_eq!(gcd(&n, &d), BigInt::one());
    assert!(d > BigInt::from(0));
    assert!(n < BigInt::from(0));
    assert_eq!(decompose_i64(-123.0), (-123, 1));
    assert_eq!(n, BigInt::from_str("-8687443681197687").unwrap());
    assert_eq!(d, BigInt::one() << 46);
  }
}
