// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Messages prepared for [EIP-191](https://eips.ethereum.org/EIPS/eip-191)
//! version `0x45` signing.
//!
//! The prefix keeps a signed message from ever being valid as a raw
//! transaction. Signing the resulting hash is left to the key manager.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::utils::encoding::keccak_256;
use crate::utils::hex::decode_hex;

pub const SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n";

/// Length suffix used by [`MessageScheme::InnerHashed`]: the digest size.
const DIGEST_LEN_SUFFIX: &[u8] = b"32";

/// How the raw message is wrapped before hashing.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum MessageScheme {
    /// `personal_sign` as implemented by geth: prefix, decimal length of the
    /// message, then the message itself.
    #[default]
    Personal,
    /// Prefix with the fixed length `32`, then the Keccak-256 digest of the
    /// message. The raw message never appears in the output.
    InnerHashed,
}

/// Raw message bytes together with the scheme used to prepare them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SigningMessage {
    message: Vec<u8>,
    scheme: MessageScheme,
}

impl SigningMessage {
    pub fn new(message: impl Into<Vec<u8>>, scheme: MessageScheme) -> Self {
        Self {
            message: message.into(),
            scheme,
        }
    }

    pub fn personal(message: impl Into<Vec<u8>>) -> Self {
        Self::new(message, MessageScheme::Personal)
    }

    pub fn inner_hashed(message: impl Into<Vec<u8>>) -> Self {
        Self::new(message, MessageScheme::InnerHashed)
    }

    /// Builds a message from `0x`-prefixed or bare hex.
    pub fn from_hex(hex: &str, scheme: MessageScheme) -> Result<Self> {
        Ok(Self::new(decode_hex(hex)?, scheme))
    }

    pub fn message(&self) -> &[u8] {
        &self.message
    }

    pub fn scheme(&self) -> MessageScheme {
        self.scheme
    }

    /// Bytes that get hashed and signed.
    pub fn preprocess(&self) -> Vec<u8> {
        match self.scheme {
            MessageScheme::Personal => {
                let len = self.message.len().to_string();
                let mut out =
                    Vec::with_capacity(SIGNED_MESSAGE_PREFIX.len() + len.len() + self.message.len());
                out.extend_from_slice(SIGNED_MESSAGE_PREFIX);
                out.extend_from_slice(len.as_bytes());
                out.extend_from_slice(&self.message);
                out
            }
            MessageScheme::InnerHashed => {
                let mut out =
                    Vec::with_capacity(SIGNED_MESSAGE_PREFIX.len() + DIGEST_LEN_SUFFIX.len() + 32);
                out.extend_from_slice(SIGNED_MESSAGE_PREFIX);
                out.extend_from_slice(DIGEST_LEN_SUFFIX);
                out.extend_from_slice(&keccak_256(&self.message));
                out
            }
        }
    }

    /// Keccak-256 of [`Self::preprocess`], the digest handed to the signer.
    pub fn signing_hash(&self) -> [u8; 32] {
        keccak_256(&self.preprocess())
    }
}
