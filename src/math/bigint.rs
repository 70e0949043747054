// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Rem, Sub};
use std::str::FromStr;

use num_bigint::{BigInt, Sign};
use num_traits::{Num, Signed, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::utils::hex::{must_hex, HEX_PREFIX};

/// Arbitrary precision integer backing ABI magnitudes and fee-market math.
///
/// The backing integer is signed so that intermediate results, such as a fee
/// delta subtracted from a smaller base fee, stay representable until they
/// are floored. Boundaries that need a non-negative value check for it
/// themselves. Values are immutable; every operation yields a new instance.
#[derive(
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Deref,
    derive_more::From,
    derive_more::Into,
)]
pub struct BigUint(BigInt);

macro_rules! impl_from_primitive {
    ($($t:ty),*) => {$(
        impl From<$t> for BigUint {
            #[inline]
            fn from(n: $t) -> Self {
                Self(BigInt::from(n))
            }
        }
    )*};
}

impl_from_primitive!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl From<num_bigint::BigUint> for BigUint {
    fn from(n: num_bigint::BigUint) -> Self {
        Self(BigInt::from(n))
    }
}

impl From<&BigUint> for BigUint {
    fn from(n: &BigUint) -> Self {
        n.clone()
    }
}

impl BigUint {
    pub fn zero() -> Self {
        Self(BigInt::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Length of the minimal binary rendering of the magnitude. Zero renders
    /// as `"0"` and therefore has a bit length of one.
    pub fn bit_len(&self) -> u64 {
        self.0.bits().max(1)
    }

    /// Returns the greater of `self` and `floor`.
    pub fn max(self, floor: impl Into<BigUint>) -> Self {
        let floor = floor.into();
        if self < floor {
            floor
        } else {
            self
        }
    }

    /// Returns the lesser of `self` and `ceiling`.
    pub fn min(self, ceiling: impl Into<BigUint>) -> Self {
        let ceiling = ceiling.into();
        if self > ceiling {
            ceiling
        } else {
            self
        }
    }

    /// Subtracts `rhs`, flooring the result at zero.
    pub fn saturating_sub(&self, rhs: &BigUint) -> Self {
        (self - rhs).max(0)
    }

    pub fn pow(&self, exponent: u32) -> Self {
        Self(num_traits::Pow::pow(&self.0, exponent))
    }

    pub fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }

    /// Big-endian magnitude left-padded with zero bytes to exactly `width`
    /// bytes. Fails for negative values and for magnitudes that do not fit.
    pub fn to_bin(&self, width: usize) -> Result<Vec<u8>> {
        if self.is_negative() {
            return Err(Error::argument(format!(
                "cannot encode negative value {self} as unsigned binary"
            )));
        }
        let magnitude = if self.is_zero() {
            Vec::new()
        } else {
            self.0.magnitude().to_bytes_be()
        };
        if magnitude.len() > width {
            return Err(Error::argument(format!(
                "value needs {} bytes, more than the requested width of {width}",
                magnitude.len()
            )));
        }
        let mut out = vec![0u8; width - magnitude.len()];
        out.extend_from_slice(&magnitude);
        Ok(out)
    }

    /// Interprets `bytes` as a big-endian unsigned magnitude. Empty input is zero.
    pub fn from_bin(bytes: &[u8]) -> Self {
        Self(BigInt::from_bytes_be(Sign::Plus, bytes))
    }

    /// Parses hex digits with an optional `0x` prefix.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = must_hex(hex)?;
        BigInt::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|e| Error::invalid_hex(e.to_string()))
    }

    /// Lowercase `0x`-prefixed hex. Negative values carry a leading `-`.
    pub fn to_hex(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{sign}{HEX_PREFIX}{:x}", self.0.magnitude())
    }
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident, |$a:ident, $b:ident| $body:expr) => {
        impl $trait<&BigUint> for &BigUint {
            type Output = BigUint;
            fn $method(self, rhs: &BigUint) -> BigUint {
                let ($a, $b) = (&self.0, &rhs.0);
                BigUint($body)
            }
        }

        impl $trait<BigUint> for BigUint {
            type Output = BigUint;
            fn $method(self, rhs: BigUint) -> BigUint {
                (&self).$method(&rhs)
            }
        }

        impl $trait<&BigUint> for BigUint {
            type Output = BigUint;
            fn $method(self, rhs: &BigUint) -> BigUint {
                (&self).$method(rhs)
            }
        }

        impl $trait<BigUint> for &BigUint {
            type Output = BigUint;
            fn $method(self, rhs: BigUint) -> BigUint {
                self.$method(&rhs)
            }
        }

        impl $trait<u64> for BigUint {
            type Output = BigUint;
            fn $method(self, rhs: u64) -> BigUint {
                (&self).$method(&BigUint::from(rhs))
            }
        }

        impl $trait<u64> for &BigUint {
            type Output = BigUint;
            fn $method(self, rhs: u64) -> BigUint {
                self.$method(&BigUint::from(rhs))
            }
        }
    };
}

impl_binop!(Add, add, |a, b| a + b);
impl_binop!(Sub, sub, |a, b| a - b);
impl_binop!(Mul, mul, |a, b| a * b);
// Division and remainder by zero yield zero, as the EVM `DIV` and `MOD` opcodes do.
impl_binop!(Div, div, |a, b| if b.is_zero() {
    BigInt::zero()
} else {
    a / b
});
impl_binop!(Rem, rem, |a, b| if b.is_zero() {
    BigInt::zero()
} else {
    a % b
});

macro_rules! impl_cmp_primitive {
    ($($t:ty),*) => {$(
        impl PartialEq<$t> for BigUint {
            fn eq(&self, other: &$t) -> bool {
                self.0 == BigInt::from(*other)
            }
        }

        impl PartialOrd<$t> for BigUint {
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                Some(self.0.cmp(&BigInt::from(*other)))
            }
        }
    )*};
}

impl_cmp_primitive!(u64, i64);

impl fmt::Display for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl FromStr for BigUint {
    type Err = Error;

    /// Parses a base-10 integer.
    fn from_str(s: &str) -> Result<Self> {
        BigInt::from_str(s)
            .map(Self)
            .map_err(|e| Error::argument(format!("invalid decimal integer {s:?}: {e}")))
    }
}

/// Serializes as a decimal string.
impl Serialize for BigUint {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Accepts a decimal string, a `0x`-prefixed hex string or a plain integer.
impl<'de> Deserialize<'de> for BigUint {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;

        impl serde::de::Visitor<'_> for Visitor {
            type Value = BigUint;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a decimal string, a 0x-prefixed hex string or an integer")
            }

            fn visit_str<E: serde::de::Error>(self, s: &str) -> std::result::Result<BigUint, E> {
                let parsed = if s.starts_with(HEX_PREFIX) {
                    BigUint::from_hex(s)
                } else {
                    BigUint::from_str(s)
                };
                parsed.map_err(E::custom)
            }

            fn visit_u64<E: serde::de::Error>(self, n: u64) -> std::result::Result<BigUint, E> {
                Ok(BigUint::from(n))
            }

            fn visit_i64<E: serde::de::Error>(self, n: i64) -> std::result::Result<BigUint, E> {
                Ok(BigUint::from(n))
            }
        }

        deserializer.deserialize_any(Visitor)
    }
}
