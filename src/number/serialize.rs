
//! `serde` support. Rational numbers serialize as their canonical
//! `numerator/denominator` text and deserialize from any string
//! accepted by [`FromStr`].

use super::RationalNumber;

use serde::{Serialize, Serializer, Deserialize, Deserializer};
use serde::de::{self, Visitor};

use std::fmt::{self, Formatter};
use std::str::FromStr;

struct RationalVisitor;

impl Serialize for RationalNumber {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl<'de> Visitor<'de> for RationalVisitor {
  type Value = RationalNumber;

  fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "a rational number string such as \"3/4\"")
  }

  fn visit_str<E: de::Error>(self, v: &str) -> Result<RationalNumber, E> {
    RationalNumber::from_str(v).map_err(E::custom)
  }
}

impl<'de> Deserialize<'de> for RationalNumber {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<RationalNumber, D::Error> {
    deserializer.deserialize_str(RationalVisitor)
  }
}
