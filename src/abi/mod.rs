// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Single-value Solidity ABI encoding.
//!
//! Every value implements [`AbiValue`]. Construction is the only validation
//! gate: once a value exists its encoding cannot fail. Assembling several
//! values into a call payload (selectors, head/tail offsets) happens outside
//! this module.

mod address;
mod boolean;
mod bytes;
mod int;
mod uint;

use std::fmt;

pub use address::AbiAddress;
pub use boolean::AbiBool;
pub use bytes::{AbiBytes, AbiFixedBytes, AbiString};
pub use int::AbiInt;
pub use uint::AbiUint;

/// Every static ABI value occupies one word of this many bytes.
pub const ABI_WORD_LENGTH: usize = 32;

/// Widest integer type the ABI defines, `uint256`/`int256`.
pub const MAX_INT_BITS: u16 = 256;

pub trait AbiValue: fmt::Display {
    /// `true` for variable-length types, which a tuple encoder places behind
    /// an offset pointer instead of inline.
    fn is_dynamic(&self) -> bool;

    /// Canonical word-aligned encoding of the value.
    fn encode_bin(&self) -> Vec<u8>;
}

/// Closed set of the supported ABI values.
#[derive(Clone, Debug, PartialEq, Eq, derive_more::From)]
pub enum AbiToken {
    Uint(AbiUint),
    Int(AbiInt),
    Bool(AbiBool),
    Address(AbiAddress),
    FixedBytes(AbiFixedBytes),
    Bytes(AbiBytes),
    String(AbiString),
}

impl AbiToken {
    fn as_value(&self) -> &dyn AbiValue {
        match self {
            AbiToken::Uint(v) => v,
            AbiToken::Int(v) => v,
            AbiToken::Bool(v) => v,
            AbiToken::Address(v) => v,
            AbiToken::FixedBytes(v) => v,
            AbiToken::Bytes(v) => v,
            AbiToken::String(v) => v,
        }
    }
}

impl AbiValue for AbiToken {
    fn is_dynamic(&self) -> bool {
        self.as_value().is_dynamic()
    }

    fn encode_bin(&self) -> Vec<u8> {
        self.as_value().encode_bin()
    }
}

impl fmt::Display for AbiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_value(), f)
    }
}

/// Length prefix of a dynamic value as a big-endian word.
fn length_word(len: usize) -> [u8; ABI_WORD_LENGTH] {
    let mut word = [0u8; ABI_WORD_LENGTH];
    word[ABI_WORD_LENGTH - 8..].copy_from_slice(&(len as u64).to_be_bytes());
    word
}

/// Copies `data` and right-pads it with zeros to a multiple of the word length.
fn right_pad_to_words(data: &[u8]) -> Vec<u8> {
    let padded_len = data.len().div_ceil(ABI_WORD_LENGTH) * ABI_WORD_LENGTH;
    let mut out = Vec::with_capacity(padded_len);
    out.extend_from_slice(data);
    out.resize(padded_len, 0);
    out
}
