
//! Exact rational numbers over arbitrary-precision integers, with
//! lossless conversion from IEEE 754 doubles.
//!
//! # Examples
//!
//! ```
//! use exact_rational::{RationalNumber, RationalError};
//! use exact_rational::number::{div, floor};
//!
//! let tenth = RationalNumber::from_f64(0.1).unwrap();
//! assert_eq!(tenth.to_string(), "3602879701896397/36028797018963968");
//! assert_eq!(tenth.to_f64(), 0.1);
//!
//! let r: RationalNumber = "6/8".parse().unwrap();
//! assert_eq!(r, RationalNumber::ratio(3, 4).unwrap());
//! assert_eq!(floor(&-r).unwrap(), RationalNumber::from(-1));
//!
//! let zero = RationalNumber::from(0);
//! assert_eq!(div(&tenth, &zero), Err(RationalError::DivisionByZero));
//! ```

pub mod error;
pub mod number;
pub mod util;

pub use error::RationalError;
pub use number::{RationalNumber, RationalLike, RationalInput};
