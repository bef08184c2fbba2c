
//! Greatest common divisor over arbitrary-precision integers.

use num::{BigInt, Signed, Zero};

/// Greatest common divisor of `a` and `b`, always non-negative.
///
/// Negative operands are reflected to their absolute value before the
/// Euclidean reduction. `gcd(0, 0)` is `0`, so callers dividing by the
/// result must rule out the all-zero case first.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
  let mut a = a.abs();
  let mut b = b.abs();
  while !b.is_zero() {
    let r = &a % &b;
    a = b;
    b = r;
  }
  a
}
