// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::math::BigUint;

/// The subset of a block header the fee market reads.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub number: u64,
    pub gas_limit: u64,
    pub gas_used: u64,
    /// Absent for blocks produced before the fee market activated.
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_fee_per_gas: Option<BigUint>,
}

impl Block {
    pub fn is_eip1559(&self) -> bool {
        self.base_fee_per_gas.is_some()
    }
}
