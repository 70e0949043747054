// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

mod base_fee;

pub use base_fee::next_base_fee;
