// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::fmt;

use super::{length_word, right_pad_to_words, AbiValue, ABI_WORD_LENGTH};
use crate::error::{Error, Result};
use crate::utils::hex::{decode_hex, encode_hex, must_hex_len};

/// Solidity `bytesN` for `1 <= N <= 32`, right-padded to one word.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AbiFixedBytes(Vec<u8>);

impl AbiFixedBytes {
    /// `data` must be exactly `size` bytes long.
    pub fn new(data: impl Into<Vec<u8>>, size: usize) -> Result<Self> {
        let data = data.into();
        if size == 0 || size > ABI_WORD_LENGTH {
            return Err(Error::argument(format!("bytes{size} is not an ABI type")));
        }
        if data.len() != size {
            return Err(Error::argument(format!(
                "bytes{size} requires {size} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self(data))
    }

    /// Parses exactly `2 * size` hex digits.
    pub fn from_hex(hex: &str, size: usize) -> Result<Self> {
        must_hex_len(hex, size * 2)?;
        Self::new(decode_hex(hex)?, size)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl AbiValue for AbiFixedBytes {
    fn is_dynamic(&self) -> bool {
        false
    }

    fn encode_bin(&self) -> Vec<u8> {
        right_pad_to_words(&self.0)
    }
}

impl fmt::Display for AbiFixedBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_hex(&self.0))
    }
}

/// Solidity `bytes`: a length word followed by the data padded to whole words.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, derive_more::From)]
pub struct AbiBytes(Vec<u8>);

impl AbiBytes {
    pub fn from_hex(hex: &str) -> Result<Self> {
        decode_hex(hex).map(Self)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<&[u8]> for AbiBytes {
    fn from(data: &[u8]) -> Self {
        Self(data.to_vec())
    }
}

impl AbiValue for AbiBytes {
    fn is_dynamic(&self) -> bool {
        true
    }

    fn encode_bin(&self) -> Vec<u8> {
        encode_dynamic(&self.0)
    }
}

impl fmt::Display for AbiBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_hex(&self.0))
    }
}

/// Solidity `string`, encoded as its UTF-8 bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, derive_more::From)]
pub struct AbiString(String);

impl AbiString {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AbiString {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl AbiValue for AbiString {
    fn is_dynamic(&self) -> bool {
        true
    }

    fn encode_bin(&self) -> Vec<u8> {
        encode_dynamic(self.0.as_bytes())
    }
}

impl fmt::Display for AbiString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn encode_dynamic(data: &[u8]) -> Vec<u8> {
    let mut out = length_word(data.len()).to_vec();
    out.extend(right_pad_to_words(data));
    out
}
