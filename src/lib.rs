// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Binary-encoding and arithmetic core for talking to Ethereum contracts.
//!
//! - [`math::BigUint`]: arbitrary precision integers with fixed-width
//!   big-endian encoding.
//! - [`abi`]: single-value ABI encoding, e.g. [`abi::AbiUint`].
//! - [`chain::next_base_fee`]: EIP-1559 base fee prediction, parameterized by
//!   [`networks::Eip1559Config`].
//! - [`message::SigningMessage`]: EIP-191 message preprocessing ahead of signing.
//! - [`utils::hex`]: hex validation and padding.

pub mod abi;
pub mod blocks;
pub mod chain;
pub mod error;
pub mod math;
pub mod message;
pub mod networks;
pub mod utils;

pub use error::{Error, Result};
