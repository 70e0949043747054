// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::fmt;
use std::str::FromStr;

use ethereum_types::Address;

use super::{AbiValue, ABI_WORD_LENGTH};
use crate::error::{Error, Result};
use crate::utils::hex::{decode_hex, encode_hex, must_hex_len};

/// Number of hex digits in a 20-byte address.
const ADDRESS_HEX_LEN: usize = 40;

/// Solidity `address`, encoded left-padded with 12 zero bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, derive_more::From, derive_more::Into)]
pub struct AbiAddress(Address);

impl AbiAddress {
    /// Parses exactly 40 hex digits, optionally `0x`-prefixed, in any case.
    pub fn from_hex(hex: &str) -> Result<Self> {
        must_hex_len(hex, ADDRESS_HEX_LEN)?;
        let bytes: [u8; 20] = decode_hex(hex)?
            .try_into()
            .map_err(|_| Error::invalid_hex("address must decode to 20 bytes"))?;
        Ok(Self(Address::from(bytes)))
    }

    pub fn address(&self) -> &Address {
        &self.0
    }
}

impl FromStr for AbiAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl AbiValue for AbiAddress {
    fn is_dynamic(&self) -> bool {
        false
    }

    fn encode_bin(&self) -> Vec<u8> {
        let bytes = self.0.as_bytes();
        let mut word = vec![0u8; ABI_WORD_LENGTH - bytes.len()];
        word.extend_from_slice(bytes);
        word
    }
}

impl fmt::Display for AbiAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_hex(self.0.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_encodes() {
        let addr: AbiAddress = "0x000000000000000000000000000000000000dEaD".parse().unwrap();
        let encoded = addr.encode_bin();
        assert_eq!(encoded.len(), 32);
        assert!(encoded[..30].iter().all(|b| *b == 0));
        assert_eq!(encoded[30..], [0xde, 0xad]);
        assert_eq!(
            addr.to_string(),
            "0x000000000000000000000000000000000000dead"
        );
    }

    #[test]
    fn prefix_is_optional() {
        assert_eq!(
            AbiAddress::from_hex("000000000000000000000000000000000000dead").unwrap(),
            AbiAddress::from_hex("0x000000000000000000000000000000000000DEAD").unwrap(),
        );
    }

    #[test]
    fn malformed_addresses_are_rejected() {
        assert!(matches!(
            AbiAddress::from_hex("0xdead"),
            Err(Error::InvalidHexLength {
                expected: 40,
                actual: 4
            })
        ));
        assert!(matches!(
            AbiAddress::from_hex("0x000000000000000000000000000000000000deaZ"),
            Err(Error::InvalidHexFormat(_))
        ));
    }
}
