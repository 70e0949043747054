// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

/// Generates the Keccak-256 digest of `ingest`.
///
/// # Example
/// ```
/// use eth_binder::utils::encoding::keccak_256;
///
/// let hash = keccak_256(b"");
/// assert_eq!(hash.len(), 32);
/// ```
pub fn keccak_256(ingest: &[u8]) -> [u8; 32] {
    keccak_hash::keccak(ingest).0
}
