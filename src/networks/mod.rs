// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::math::BigUint;

/// Base fee of the first fee-market block, in wei.
pub const INITIAL_BASE_FEE: u64 = 1_000_000_000;
/// The gas target is the gas limit divided by this.
pub const ELASTICITY_MULTIPLIER: u64 = 2;
/// Bounds the base fee change between blocks to `1 / denominator` (12.5%).
pub const BASE_FEE_MAX_CHANGE_DENOMINATOR: u64 = 8;
/// Mainnet London hard fork.
pub const MAINNET_LONDON_BLOCK: u64 = 12_965_000;

/// Builtin Ethereum networks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "name", rename_all = "lowercase")]
pub enum NetworkChain {
    Mainnet,
    Sepolia,
    Holesky,
    Devnet(String),
}

impl FromStr for NetworkChain {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(NetworkChain::Mainnet),
            "sepolia" => Ok(NetworkChain::Sepolia),
            "holesky" => Ok(NetworkChain::Holesky),
            name => Ok(NetworkChain::Devnet(name.to_owned())),
        }
    }
}

impl Display for NetworkChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetworkChain::Mainnet => write!(f, "mainnet"),
            NetworkChain::Sepolia => write!(f, "sepolia"),
            NetworkChain::Holesky => write!(f, "holesky"),
            NetworkChain::Devnet(name) => write!(f, "{name}"),
        }
    }
}

impl NetworkChain {
    pub fn is_testnet(&self) -> bool {
        !matches!(self, NetworkChain::Mainnet)
    }
}

/// Fee-market parameters of a chain.
///
/// Missing fields take the Ethereum values, so a testnet only has to spell
/// out what differs:
///
/// ```
/// # use eth_binder::networks::Eip1559Config;
/// let config = Eip1559Config::from_toml("activation_block_number = 100").unwrap();
/// assert_eq!(config.activation_block_number, 100);
/// assert_eq!(config.elasticity_multiplier, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Eip1559Config {
    /// Last block that is still priced by the legacy rules. The block after
    /// it is the first to carry a base fee.
    pub activation_block_number: u64,
    pub initial_base_fee: BigUint,
    pub elasticity_multiplier: u64,
    pub base_fee_change_denominator: u64,
}

impl Default for Eip1559Config {
    fn default() -> Self {
        Self {
            activation_block_number: 0,
            initial_base_fee: BigUint::from(INITIAL_BASE_FEE),
            elasticity_multiplier: ELASTICITY_MULTIPLIER,
            base_fee_change_denominator: BASE_FEE_MAX_CHANGE_DENOMINATOR,
        }
    }
}

impl Eip1559Config {
    pub fn mainnet() -> Self {
        Self {
            activation_block_number: MAINNET_LONDON_BLOCK,
            ..Default::default()
        }
    }

    /// Sepolia and Holesky launched with the fee market active.
    pub fn for_network(network: &NetworkChain) -> Self {
        match network {
            NetworkChain::Mainnet => Self::mainnet(),
            NetworkChain::Sepolia | NetworkChain::Holesky | NetworkChain::Devnet(_) => {
                Self::default()
            }
        }
    }

    pub fn from_toml(toml_string: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(toml_string)?;
        anyhow::ensure!(
            config.elasticity_multiplier > 0,
            "elasticity multiplier must be positive"
        );
        anyhow::ensure!(
            config.base_fee_change_denominator > 0,
            "base fee change denominator must be positive"
        );
        Ok(config)
    }

    /// Gas a block is expected to use at equilibrium.
    pub fn gas_target(&self, gas_limit: u64) -> u64 {
        gas_limit.checked_div(self.elasticity_multiplier).unwrap_or(0)
    }
}
