// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::fmt;

use tracing::debug;

use super::{AbiValue, ABI_WORD_LENGTH, MAX_INT_BITS};
use crate::error::{Error, Result};
use crate::math::BigUint;

/// Solidity `intN` value, encoded as a sign-extended two's-complement word.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AbiInt {
    value: BigUint,
    bits: u16,
}

impl AbiInt {
    /// Accepts `-2^(bits-1) <= value < 2^(bits-1)`, with `bits` capped at 256.
    pub fn new(value: impl Into<BigUint>, bits: u16) -> Result<Self> {
        let value = value.into();
        let max_bits = bits.min(MAX_INT_BITS);
        if max_bits == 0 {
            return Err(Error::argument("int0 cannot hold any value"));
        }
        let bound = BigUint::from(2u8).pow(u32::from(max_bits) - 1);
        let min = BigUint::zero() - &bound;
        if value < min || value >= bound {
            debug!(%value, bits, "rejected signed ABI value outside its type");
            return Err(Error::argument(format!(
                "value {value} does not fit in int{bits}"
            )));
        }
        Ok(Self { value, bits })
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn bits(&self) -> u16 {
        self.bits
    }
}

impl AbiValue for AbiInt {
    fn is_dynamic(&self) -> bool {
        false
    }

    fn encode_bin(&self) -> Vec<u8> {
        let bytes = self.value.to_signed_bytes_be();
        let fill = if self.value.is_negative() { 0xff } else { 0x00 };
        let mut word = vec![fill; ABI_WORD_LENGTH - bytes.len()];
        word.extend_from_slice(&bytes);
        word
    }
}

impl fmt::Display for AbiInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}
