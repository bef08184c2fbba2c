
//! Exact rational numbers.
//!
//! [`RationalNumber`] is the sole value type. Every way of producing
//! one (floats, integers, strings, explicit pairs, arithmetic results)
//! is funneled through a single canonicalizing constructor, so every
//! value in existence has a positive denominator coprime to its
//! numerator.

mod arithmetic;
mod float;
mod input;
mod parse;
#[cfg(feature = "serde")]
mod serialize;

pub use arithmetic::{add, sub, mul, div, modulo, trunc, floor, ceil, round};
pub use float::decompose;
pub use input::{RationalInput, Integral, Argument};
pub use parse::decimal_to_fraction;

use crate::error::RationalError;
use crate::util::gcd::gcd;

use num::{BigInt, BigRational, Zero, One, Signed};
use num::traits::ToPrimitive;
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use log::{debug, trace};

use std::fmt::{self, Display, Formatter};
use std::ops;

/// Anything exposing an integer numerator and denominator.
///
/// The free operators in this module accept any `RationalLike`, so a
/// raw `(numerator, denominator)` pair can be combined with a
/// canonical [`RationalNumber`] without constructing one first. Raw
/// pairs need not be reduced or sign-normalized, but a zero
/// denominator is rejected by every operator.
pub trait RationalLike {
  fn numerator(&self) -> &BigInt;
  fn denominator(&self) -> &BigInt;
}

/// An exact rational number in canonical form.
///
/// The denominator is always positive and coprime to the numerator.
/// Zero is represented uniquely as `0/1`. Since the representation is
/// canonical, the derived structural equality is numerical equality.
///
/// Values are immutable. Every operation produces a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RationalNumber {
  numerator: BigInt,
  denominator: BigInt,
}

impl RationalNumber {
  /// Constructs a rational number from any of the supported input
  /// shapes. See [`RationalInput`].
  pub fn new(input: RationalInput) -> Result<Self, RationalError> {
    match input {
      RationalInput::Float(x) => {
        trace!("Constructing rational from float {x}");
        Self::from_f64(x)
      }
      RationalInput::Integer(n) => {
        trace!("Constructing rational from integer {n}");
        Ok(Self::from(n))
      }
      RationalInput::String(s) => {
        trace!("Constructing rational from string {s:?}");
        s.parse()
      }
      RationalInput::Pair(numer, denom) => {
        trace!("Constructing rational from pair ({numer:?}, {denom:?})");
        Self::canonicalize(numer.into_integer()?, denom.into_integer()?)
      }
    }
  }

  /// Produces the rational number `numer / denom`, in lowest terms.
  ///
  /// Fails with [`RationalError::DivisionByZero`] if `denom == 0`.
  pub fn ratio(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Result<Self, RationalError> {
    Self::canonicalize(numer.into(), denom.into())
  }

  /// The exact value of a finite float. See [`decompose`].
  pub fn from_f64(x: f64) -> Result<Self, RationalError> {
    let (numerator, denominator) = decompose(x)?;
    Self::canonicalize(numerator, denominator)
  }

  /// The canonicalizing constructor. All construction paths end here.
  pub(crate) fn canonicalize(numerator: BigInt, denominator: BigInt) -> Result<Self, RationalError> {
    if denominator.is_zero() {
      debug!("Rejecting zero denominator (numerator {numerator})");
      return Err(RationalError::DivisionByZero);
    }
    Ok(Self::reduce(numerator, denominator))
  }

  // Precondition: denominator != 0.
  pub(crate) fn reduce(mut numerator: BigInt, mut denominator: BigInt) -> Self {
    debug_assert!(!denominator.is_zero(), "reduce called with zero denominator");
    if denominator.is_negative() {
      numerator = - numerator;
      denominator = - denominator;
    }
    // Nonzero denominator, so the divisor is at least 1.
    let divisor = gcd(&numerator, &denominator);
    if !divisor.is_one() {
      numerator /= &divisor;
      denominator /= &divisor;
    }
    RationalNumber { numerator, denominator }
  }

  pub fn numerator(&self) -> &BigInt {
    &self.numerator
  }

  pub fn denominator(&self) -> &BigInt {
    &self.denominator
  }

  /// Consumes `self`, returning `(numerator, denominator)`.
  pub fn into_parts(self) -> (BigInt, BigInt) {
    (self.numerator, self.denominator)
  }

  pub fn is_integer(&self) -> bool {
    self.denominator.is_one()
  }

  /// Returns the sign of the number as `-1`, `0`, or `1`.
  pub fn signum(&self) -> RationalNumber {
    RationalNumber::from(self.numerator.signum())
  }

  pub fn abs(&self) -> RationalNumber {
    RationalNumber {
      numerator: self.numerator.abs(),
      denominator: self.denominator.clone(),
    }
  }

  /// The multiplicative inverse. Fails on zero.
  pub fn recip(&self) -> Result<RationalNumber, RationalError> {
    Self::canonicalize(self.denominator.clone(), self.numerator.clone())
  }

  /// Exact division. Fails with [`RationalError::DivisionByZero`] if
  /// `other` is zero.
  pub fn checked_div(&self, other: &RationalNumber) -> Result<RationalNumber, RationalError> {
    div(self, other)
  }

  /// Floored remainder, taking the sign of `other`. See [`modulo`].
  pub fn checked_rem(&self, other: &RationalNumber) -> Result<RationalNumber, RationalError> {
    modulo(self, other)
  }

  /// Approximates `self` as the nearest `f64`.
  ///
  /// This inverts [`RationalNumber::from_f64`]: a value constructed
  /// from a finite float converts back to exactly that float (up to
  /// the sign of zero). Values beyond the range of `f64` convert to
  /// an infinity.
  pub fn to_f64(&self) -> f64 {
    BigRational::new_raw(self.numerator.clone(), self.denominator.clone())
      .to_f64()
      .unwrap_or(f64::NAN)
  }
}

impl RationalLike for RationalNumber {
  fn numerator(&self) -> &BigInt {
    &self.numerator
  }

  fn denominator(&self) -> &BigInt {
    &self.denominator
  }
}

/// A raw `(numerator, denominator)` pair, not necessarily reduced.
impl RationalLike for (BigInt, BigInt) {
  fn numerator(&self) -> &BigInt {
    &self.0
  }

  fn denominator(&self) -> &BigInt {
    &self.1
  }
}

impl<T: RationalLike + ?Sized> RationalLike for &T {
  fn numerator(&self) -> &BigInt {
    (**self).numerator()
  }

  fn denominator(&self) -> &BigInt {
    (**self).denominator()
  }
}

/// Constructs an integer-valued rational number.
impl From<BigInt> for RationalNumber {
  fn from(n: BigInt) -> RationalNumber {
    RationalNumber { numerator: n, denominator: BigInt::one() }
  }
}

impl From<i32> for RationalNumber {
  fn from(n: i32) -> RationalNumber {
    RationalNumber::from(BigInt::from(n))
  }
}

impl From<i64> for RationalNumber {
  fn from(n: i64) -> RationalNumber {
    RationalNumber::from(BigInt::from(n))
  }
}

impl From<u64> for RationalNumber {
  fn from(n: u64) -> RationalNumber {
    RationalNumber::from(BigInt::from(n))
  }
}

impl From<usize> for RationalNumber {
  fn from(n: usize) -> RationalNumber {
    RationalNumber::from(BigInt::from(n))
  }
}

impl TryFrom<f64> for RationalNumber {
  type Error = RationalError;

  fn try_from(x: f64) -> Result<RationalNumber, RationalError> {
    RationalNumber::from_f64(x)
  }
}

/// `BigRational` values built with `Ratio::new_raw` may carry a zero
/// denominator, so this conversion re-checks and re-reduces.
impl TryFrom<BigRational> for RationalNumber {
  type Error = RationalError;

  fn try_from(r: BigRational) -> Result<RationalNumber, RationalError> {
    let (numerator, denominator) = r.into_raw();
    RationalNumber::canonicalize(numerator, denominator)
  }
}

impl From<RationalNumber> for BigRational {
  fn from(r: RationalNumber) -> BigRational {
    // Already canonical, so no need to reduce again.
    BigRational::new_raw(r.numerator, r.denominator)
  }
}

impl Default for RationalNumber {
  fn default() -> RationalNumber {
    RationalNumber::zero()
  }
}

/// Always `numerator/denominator`, even for integers.
impl Display for RationalNumber {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}", self.numerator, self.denominator)
  }
}

impl ops::Add for &RationalNumber {
  type Output = RationalNumber;

  fn add(self, other: &RationalNumber) -> RationalNumber {
    arithmetic::add_unchecked(self, other)
  }
}

impl ops::Add for RationalNumber {
  type Output = RationalNumber;

  fn add(self, other: RationalNumber) -> RationalNumber {
    &self + &other
  }
}

impl ops::Sub for &RationalNumber {
  type Output = RationalNumber;

  fn sub(self, other: &RationalNumber) -> RationalNumber {
    arithmetic::sub_unchecked(self, other)
  }
}

impl ops::Sub for RationalNumber {
  type Output = RationalNumber;

  fn sub(self, other: RationalNumber) -> RationalNumber {
    &self - &other
  }
}

impl ops::Mul for &RationalNumber {
  type Output = RationalNumber;

  fn mul(self, other: &RationalNumber) -> RationalNumber {
    arithmetic::mul_unchecked(self, other)
  }
}

impl ops::Mul for RationalNumber {
  type Output = RationalNumber;

  fn mul(self, other: RationalNumber) -> RationalNumber {
    &self * &other
  }
}

impl ops::Neg for RationalNumber {
  type Output = RationalNumber;

  fn neg(self) -> RationalNumber {
    // Negating the numerator preserves canonical form.
    RationalNumber { numerator: - self.numerator, denominator: self.denominator }
  }
}

impl ops::Neg for &RationalNumber {
  type Output = RationalNumber;

  fn neg(self) -> RationalNumber {
    - self.clone()
  }
}

impl Zero for RationalNumber {
  fn zero() -> RationalNumber {
    RationalNumber::from(BigInt::zero())
  }

  fn is_zero(&self) -> bool {
    self.numerator.is_zero()
  }
}

impl One for RationalNumber {
  fn one() -> RationalNumber {
    RationalNumber::from(BigInt::one())
  }

  fn is_one(&self) -> bool {
    self.numerator.is_one() && self.denominator.is_one()
  }
}

/// Integer conversions succeed only for integral values in range.
impl ToPrimitive for RationalNumber {
  fn to_i64(&self) -> Option<i64> {
    if self.is_integer() { self.numerator.to_i64() } else { None }
  }

  fn to_u64(&self) -> Option<u64> {
    if self.is_integer() { self.numerator.to_u64() } else { None }
  }

  fn to_f64(&self) -> Option<f64> {
    Some(RationalNumber::to_f64(self))
  }
}

impl AbsDiffEq for RationalNumber {
  type Epsilon = f64;

  fn default_epsilon() -> f64 {
    <f64 as AbsDiffEq>::default_epsilon()
  }

  fn abs_diff_eq(&self, other: &RationalNumber, epsilon: f64) -> bool {
    self.to_f64().abs_diff_eq(&other.to_f64(), epsilon)
  }
}

impl RelativeEq for RationalNumber {
  fn default_max_relative() -> f64 {
    <f64 as RelativeEq>::default_max_relative()
  }

  fn relative_eq(&self, other: &RationalNumber, epsilon: f64, max_relative: f64) -> bool {
    self.to_f64().relative_eq(&other.to_f64(), epsilon, max_relative)
  }
}

impl UlpsEq for RationalNumber {
  fn default_max_ulps() -> u32 {
    <f64 as UlpsEq>::default_max_ulps()
  }

  fn ulps_eq(&self, other: &RationalNumber, epsilon: f64, max_ulps: u32) -> bool {
    self.to_f64().ulps_eq(&other.to_f64(), epsilon, max_ulps)
  }
}
