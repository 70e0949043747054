// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Validation failures raised while constructing values or parsing hex input.
///
/// Every variant is reported synchronously at the construction site; nothing
/// in this crate retries or coerces an invalid input into a valid one.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A caller-supplied value violates a precondition, e.g. a negative
    /// magnitude for an unsigned type or a value wider than its declared size.
    #[error("invalid argument: {0}")]
    Argument(String),
    #[error("invalid hex format: {0}")]
    InvalidHexFormat(String),
    #[error("invalid hex length: expected {expected} digits, got {actual}")]
    InvalidHexLength { expected: usize, actual: usize },
}

impl Error {
    pub fn argument(message: impl Into<String>) -> Self {
        Self::Argument(message.into())
    }

    pub fn invalid_hex(message: impl Into<String>) -> Self {
        Self::InvalidHexFormat(message.into())
    }
}
