
//! Arithmetic and rounding over [`RationalLike`] operands.
//!
//! Each operator cross-multiplies the raw numerators and denominators
//! and hands the result to the canonicalizing constructor, so results
//! are always in lowest terms regardless of whether the operands were.

use super::{RationalNumber, RationalLike};
use crate::error::RationalError;
use crate::util::Sign;

use num::{BigInt, Zero, One};
use num::integer::div_floor;
use log::debug;

fn check_operand(x: &impl RationalLike) -> Result<(), RationalError> {
  if x.denominator().is_zero() {
    debug!("Rejecting operand {}/0", x.numerator());
    Err(RationalError::invalid_argument(format!("operand {}/0 has a zero denominator", x.numerator())))
  } else {
    Ok(())
  }
}

fn half() -> RationalNumber {
  RationalNumber { numerator: BigInt::one(), denominator: BigInt::from(2) }
}

// The `*_unchecked` variants assume nonzero operand denominators.
// Canonical `RationalNumber`s always satisfy this, which is what lets
// the `std::ops` impls be infallible.

pub(super) fn add_unchecked(a: &impl RationalLike, b: &impl RationalLike) -> RationalNumber {
  RationalNumber::reduce(
    a.numerator() * b.denominator() + a.denominator() * b.numerator(),
    a.denominator() * b.denominator(),
  )
}

pub(super) fn sub_unchecked(a: &impl RationalLike, b: &impl RationalLike) -> RationalNumber {
  RationalNumber::reduce(
    a.numerator() * b.denominator() - a.denominator() * b.numerator(),
    a.denominator() * b.denominator(),
  )
}

pub(super) fn mul_unchecked(a: &impl RationalLike, b: &impl RationalLike) -> RationalNumber {
  RationalNumber::reduce(
    a.numerator() * b.numerator(),
    a.denominator() * b.denominator(),
  )
}

fn trunc_unchecked(a: &impl RationalLike) -> RationalNumber {
  // BigInt division truncates toward zero.
  RationalNumber::from(a.numerator() / a.denominator())
}

fn floor_unchecked(a: &impl RationalLike) -> RationalNumber {
  RationalNumber::from(div_floor(a.numerator().clone(), a.denominator().clone()))
}

/// `a + b`.
pub fn add(a: &impl RationalLike, b: &impl RationalLike) -> Result<RationalNumber, RationalError> {
  check_operand(a)?;
  check_operand(b)?;
  Ok(add_unchecked(a, b))
}

/// `a - b`.
pub fn sub(a: &impl RationalLike, b: &impl RationalLike) -> Result<RationalNumber, RationalError> {
  check_operand(a)?;
  check_operand(b)?;
  Ok(sub_unchecked(a, b))
}

/// `a * b`.
pub fn mul(a: &impl RationalLike, b: &impl RationalLike) -> Result<RationalNumber, RationalError> {
  check_operand(a)?;
  check_operand(b)?;
  Ok(mul_unchecked(a, b))
}

/// `a / b`. Fails with [`RationalError::DivisionByZero`] if `b` is
/// zero.
pub fn div(a: &impl RationalLike, b: &impl RationalLike) -> Result<RationalNumber, RationalError> {
  check_operand(a)?;
  check_operand(b)?;
  if b.numerator().is_zero() {
    debug!("Rejecting division of {}/{} by zero", a.numerator(), a.denominator());
    return Err(RationalError::DivisionByZero);
  }
  Ok(RationalNumber::reduce(
    a.numerator() * b.denominator(),
    a.denominator() * b.numerator(),
  ))
}

/// The floored remainder `a - b * floor(a / b)`. The result is zero
/// or has the same sign as `b`.
pub fn modulo(a: &impl RationalLike, b: &impl RationalLike) -> Result<RationalNumber, RationalError> {
  let quotient = floor_unchecked(&div(a, b)?);
  Ok(sub_unchecked(a, &mul_unchecked(b, &quotient)))
}

/// Rounds toward zero.
pub fn trunc(a: &impl RationalLike) -> Result<RationalNumber, RationalError> {
  check_operand(a)?;
  Ok(trunc_unchecked(a))
}

/// Rounds toward negative infinity. Integers are returned unchanged.
pub fn floor(a: &impl RationalLike) -> Result<RationalNumber, RationalError> {
  check_operand(a)?;
  Ok(floor_unchecked(a))
}

/// Rounds toward positive infinity. Integers are returned unchanged.
pub fn ceil(a: &impl RationalLike) -> Result<RationalNumber, RationalError> {
  check_operand(a)?;
  let negated_floor = div_floor(- a.numerator(), a.denominator().clone());
  Ok(RationalNumber::from(- negated_floor))
}

/// Rounds to the nearest integer. Exact halves round away from zero,
/// so `round(1/2) = 1` and `round(-1/2) = -1`.
pub fn round(a: &impl RationalLike) -> Result<RationalNumber, RationalError> {
  check_operand(a)?;
  // Raw operands may carry their sign in the denominator.
  let sign = Sign::of(a.numerator()) * Sign::of(a.denominator());
  let offset = match sign {
    Sign::Positive => add_unchecked(a, &half()),
    Sign::Negative => sub_unchecked(a, &half()),
  };
  Ok(trunc_unchecked(&offset))
}
