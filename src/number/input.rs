
//! The input shapes accepted by
//! [`RationalNumber::new`](super::RationalNumber::new).

use super::float::decompose;
use crate::error::RationalError;

use num::BigInt;
use log::debug;

/// The supported ways of constructing a
/// [`RationalNumber`](super::RationalNumber).
#[derive(Debug, Clone, PartialEq)]
pub enum RationalInput {
  /// The exact value of a finite float.
  Float(f64),
  /// An integer, over a denominator of 1.
  Integer(BigInt),
  /// An integer (`"-12"`), a decimal (`"3.25"`), or a fraction of
  /// either (`"1.5/-3"`).
  String(String),
  /// An explicit numerator and denominator.
  Pair(Integral, Integral),
}

/// A component of an explicit pair. Floats are accepted only if they
/// are finite and integer-valued.
#[derive(Debug, Clone, PartialEq)]
pub enum Integral {
  Integer(BigInt),
  Float(f64),
}

/// A single untyped constructor argument, as received from a caller
/// that dispatches on argument count. See
/// [`RationalInput::from_arguments`].
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
  Float(f64),
  Integer(BigInt),
  String(String),
}

impl RationalInput {
  /// Interprets a list of one or two arguments. One argument of any
  /// kind is a complete input. Two arguments form a numerator and
  /// denominator, and must both be numeric. Any other count or shape
  /// fails with [`RationalError::InvalidArgument`].
  pub fn from_arguments(args: Vec<Argument>) -> Result<RationalInput, RationalError> {
    let count = args.len();
    let mut args = args.into_iter();
    match (args.next(), args.next()) {
      (Some(value), None) => Ok(RationalInput::from(value)),
      (Some(numer), Some(denom)) if count == 2 => {
        Ok(RationalInput::Pair(Integral::try_from(numer)?, Integral::try_from(denom)?))
      }
      _ => {
        debug!("Rejecting constructor call with {count} arguments");
        Err(RationalError::invalid_argument(format!("expected 1 or 2 arguments, got {count}")))
      }
    }
  }
}

impl Integral {
  /// The exact integer value of this component.
  pub fn into_integer(self) -> Result<BigInt, RationalError> {
    match self {
      Integral::Integer(n) => Ok(n),
      Integral::Float(x) => {
        if !x.is_finite() || x.fract() != 0.0 {
          debug!("Rejecting non-integral pair component {x}");
          return Err(RationalError::invalid_argument(format!("expected an integer, got {x}")));
        }
        // Integer-valued, so the denominator is 1.
        let (numerator, _) = decompose(x)?;
        Ok(numerator)
      }
    }
  }
}

impl From<Argument> for RationalInput {
  fn from(arg: Argument) -> RationalInput {
    match arg {
      Argument::Float(x) => RationalInput::Float(x),
      Argument::Integer(n) => RationalInput::Integer(n),
      Argument::String(s) => RationalInput::String(s),
    }
  }
}

impl TryFrom<Argument> for Integral {
  type Error = RationalError;

  fn try_from(arg: Argument) -> Result<Integral, RationalError> {
    match arg {
      Argument::Float(x) => Ok(Integral::Float(x)),
      Argument::Integer(n) => Ok(Integral::Integer(n)),
      Argument::String(s) => {
        Err(RationalError::invalid_argument(format!("expected a number in a numerator/denominator pair, got string {s:?}")))
      }
    }
  }
}

impl From<f64> for RationalInput {
  fn from(x: f64) -> RationalInput {
    RationalInput::Float(x)
  }
}

impl From<BigInt> for RationalInput {
  fn from(n: BigInt) -> RationalInput {
    RationalInput::Integer(n)
  }
}

impl From<i64> for RationalInput {
  fn from(n: i64) -> RationalInput {
    RationalInput::Integer(BigInt::from(n))
  }
}

impl From<String> for RationalInput {
  fn from(s: String) -> RationalInput {
    RationalInput::String(s)
  }
}

impl From<&str> for RationalInput {
  fn from(s: &str) -> RationalInput {
    RationalInput::String(s.to_owned())
  }
}

impl From<BigInt> for Integral {
  fn from(n: BigInt) -> Integral {
    Integral::Integer(n)
  }
}

impl From<i64> for Integral {
  fn from(n: i64) -> Integral {
    Integral::Integer(BigInt::from(n))
  }
}

impl From<f64> for Integral {
  fn from(x: f64) -> Integral {
    Integral::Float(x)
  }
}
