// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::fmt;

use super::{AbiValue, ABI_WORD_LENGTH};

/// Solidity `bool`, encoded as the `uint8` word 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, derive_more::From, derive_more::Into)]
pub struct AbiBool(bool);

impl AbiBool {
    pub fn value(&self) -> bool {
        self.0
    }
}

impl AbiValue for AbiBool {
    fn is_dynamic(&self) -> bool {
        false
    }

    fn encode_bin(&self) -> Vec<u8> {
        let mut word = vec![0u8; ABI_WORD_LENGTH];
        word[ABI_WORD_LENGTH - 1] = u8::from(self.0);
        word
    }
}

impl fmt::Display for AbiBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_as_zero_or_one() {
        let t = AbiBool::from(true).encode_bin();
        assert_eq!(t[31], 1);
        assert!(t[..31].iter().all(|b| *b == 0));
        assert_eq!(AbiBool::from(false).encode_bin(), vec![0u8; 32]);
        assert_eq!(AbiBool::from(false).to_string(), "false");
    }
}
