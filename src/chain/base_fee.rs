// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Base fee prediction following [EIP-1559](https://eips.ethereum.org/EIPS/eip-1559).

use std::cmp::Ordering;

use tracing::trace;

use crate::blocks::Block;
use crate::math::BigUint;
use crate::networks::Eip1559Config;

/// Computes the base fee of the block following `previous`.
///
/// Blocks at or before the activation height, or without a base fee of their
/// own, bootstrap the market with the configured initial base fee. Under
/// congestion the fee rises by at least one wei; under utilization it falls
/// but never below zero.
pub fn next_base_fee(previous: &Block, config: &Eip1559Config) -> BigUint {
    let base_fee = match &previous.base_fee_per_gas {
        Some(base_fee) if previous.number > config.activation_block_number => base_fee,
        _ => {
            trace!(
                number = previous.number,
                eip1559 = previous.is_eip1559(),
                "fee market not active, using initial base fee"
            );
            return config.initial_base_fee.clone();
        }
    };

    let gas_used = BigUint::from(previous.gas_used);
    let target = BigUint::from(previous.gas_limit) / config.elasticity_multiplier;
    let denominator = config.base_fee_change_denominator;

    match gas_used.cmp(&target) {
        Ordering::Equal => base_fee.clone(),
        Ordering::Greater => {
            let delta = ((&gas_used - &target) * base_fee / &target / denominator).max(1);
            trace!(number = previous.number, %delta, "block above gas target");
            base_fee + delta
        }
        Ordering::Less => {
            let delta = (&target - &gas_used) * base_fee / &target / denominator;
            trace!(number = previous.number, %delta, "block below gas target");
            (base_fee - delta).max(0)
        }
    }
}
