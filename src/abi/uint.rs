// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::fmt;

use tracing::debug;

use super::{AbiValue, ABI_WORD_LENGTH, MAX_INT_BITS};
use crate::error::{Error, Result};
use crate::math::BigUint;

/// Solidity `uintN` value.
///
/// The declared width bounds the bit length of the magnitude; it is not
/// required to be a multiple of eight. The encoding is always one 32-byte
/// word no matter the width.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AbiUint {
    value: BigUint,
    bits: u16,
}

impl AbiUint {
    pub fn new(value: impl Into<BigUint>, bits: u16) -> Result<Self> {
        let value = value.into();
        if value.is_negative() {
            debug!(%value, bits, "rejected negative unsigned ABI value");
            return Err(Error::argument(format!(
                "value {value} is lower than 0, cannot be unsigned int"
            )));
        }
        // A word holds at most 256 bits, so wider declarations are capped.
        let max_bits = bits.min(MAX_INT_BITS);
        if value.bit_len() > u64::from(max_bits) {
            debug!(%value, bits, "rejected unsigned ABI value wider than its type");
            return Err(Error::argument(format!(
                "value {value} is too big for uint{bits}"
            )));
        }
        Ok(Self { value, bits })
    }

    /// Shorthand for a `uint256`.
    pub fn uint256(value: impl Into<BigUint>) -> Result<Self> {
        Self::new(value, MAX_INT_BITS)
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn bits(&self) -> u16 {
        self.bits
    }
}

impl AbiValue for AbiUint {
    fn is_dynamic(&self) -> bool {
        false
    }

    fn encode_bin(&self) -> Vec<u8> {
        // The magnitude is non-negative and at most 256 bits wide.
        let magnitude = self.value.magnitude().to_bytes_be();
        let mut word = vec![0u8; ABI_WORD_LENGTH - magnitude.len()];
        word.extend_from_slice(&magnitude);
        word
    }
}

impl fmt::Display for AbiUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;
    use rstest::rstest;

    #[rstest]
    #[case(0, 8)]
    #[case(255, 8)]
    #[case(8191, 13)]
    #[case(65535, 16)]
    #[case(u64::MAX, 64)]
    fn accepts_values_within_width(#[case] value: u64, #[case] bits: u16) {
        let uint = AbiUint::new(value, bits).unwrap();
        assert_eq!(uint.value(), &BigUint::from(value));
        assert_eq!(uint.bits(), bits);
    }

    #[rstest]
    #[case(256, 8)]
    #[case(8192, 13)]
    #[case(65536, 16)]
    #[case(1, 0)]
    fn rejects_values_wider_than_type(#[case] value: u64, #[case] bits: u16) {
        assert!(matches!(
            AbiUint::new(value, bits),
            Err(Error::Argument(_))
        ));
    }

    #[test]
    fn uint256_boundary() {
        let max = BigUint::from(2u8).pow(256) - 1u64;
        let uint = AbiUint::uint256(max.clone()).unwrap();
        assert_eq!(uint.encode_bin(), vec![0xff; 32]);
        assert!(AbiUint::uint256(max + 1u64).is_err());
    }

    #[test]
    fn widths_beyond_a_word_are_capped() {
        AbiUint::new(5u64, 300).unwrap();
        assert!(AbiUint::new(BigUint::from(2u8).pow(256), 512).is_err());
    }

    #[test]
    fn encodes_one_left_padded_word() {
        let uint = AbiUint::new(0x0102u64, 16).unwrap();
        let mut expected = vec![0u8; 30];
        expected.extend([1, 2]);
        assert_eq!(uint.encode_bin(), expected);
        assert_eq!(AbiUint::new(0u64, 8).unwrap().encode_bin(), vec![0u8; 32]);
        assert!(!uint.is_dynamic());
        assert_eq!(uint.to_string(), "258");
    }

    #[quickcheck]
    fn negative_values_are_rejected(value: i64, bits: u16) -> TestResult {
        if value >= 0 {
            return TestResult::discard();
        }
        TestResult::from_bool(matches!(
            AbiUint::new(value, bits),
            Err(Error::Argument(_))
        ))
    }

    #[quickcheck]
    fn encoding_reproduces_value(value: u128, extra_bits: u8) -> bool {
        let value = BigUint::from(value);
        let bits = u16::try_from(value.bit_len()).unwrap() + u16::from(extra_bits);
        let uint = AbiUint::new(value.clone(), bits).unwrap();
        let encoded = uint.encode_bin();
        encoded.len() == ABI_WORD_LENGTH
            && BigUint::from_bin(&encoded) == value
            && encoded == uint.encode_bin()
    }
}
