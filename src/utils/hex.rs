// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Validation and padding helpers for `0x`-prefixed hex text.

use std::borrow::Cow;

use crate::error::{Error, Result};

pub const HEX_PREFIX: &str = "0x";

/// Splits an optional `0x` prefix off `hex`. The flag reports whether it was present.
pub fn strip_0x(hex: &str) -> (&str, bool) {
    match hex.strip_prefix(HEX_PREFIX) {
        Some(body) => (body, true),
        None => (hex, false),
    }
}

/// Checks that `hex` (after an optional `0x`) is a non-empty run of hex
/// digits and returns the digits.
pub fn must_hex(hex: &str) -> Result<&str> {
    let (body, _) = strip_0x(hex);
    if body.is_empty() || !body.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::invalid_hex(format!(
            "got unexpected character in hex {hex:?}"
        )));
    }
    Ok(body)
}

/// Checks that `hex` is valid hex with exactly `len` digits after the
/// optional `0x`. Format is checked before length.
pub fn must_hex_len(hex: &str, len: usize) -> Result<()> {
    let body = must_hex(hex)?;
    if body.len() != len {
        return Err(Error::InvalidHexLength {
            expected: len,
            actual: body.len(),
        });
    }
    Ok(())
}

/// Left-pads `hex` with zeros, keeping its `0x` prefix if it had one.
///
/// With `closest_multiple` the digits are padded up to the next multiple of
/// `pad_to`, otherwise to exactly `pad_to`. Input longer than `pad_to` is
/// returned unchanged in the latter mode.
pub fn lpad_hex(hex: &str, pad_to: usize, closest_multiple: bool) -> String {
    let (body, has_0x) = strip_0x(hex);
    let prefix = if has_0x { HEX_PREFIX } else { "" };

    let target_len = match (pad_to, closest_multiple) {
        (0, _) => body.len(),
        (_, true) => body.len().div_ceil(pad_to) * pad_to,
        (_, false) => body.len().max(pad_to),
    };

    format!("{prefix}{body:0>target_len$}")
}

/// Renders `val` as lowercase hex without leading zeros.
pub fn int_to_hex(val: u64, with_0x: bool) -> String {
    if with_0x {
        format!("{HEX_PREFIX}{val:x}")
    } else {
        format!("{val:x}")
    }
}

/// Decodes hex text into bytes. An odd digit count is treated as having an
/// implicit leading zero, so `0x1` decodes to `[0x01]`.
pub fn decode_hex(hex: &str) -> Result<Vec<u8>> {
    let body = must_hex(hex)?;
    let body = if body.len() % 2 == 0 {
        Cow::Borrowed(body)
    } else {
        Cow::Owned(format!("0{body}"))
    };
    ::hex::decode(body.as_ref()).map_err(|e| Error::invalid_hex(e.to_string()))
}

/// Encodes bytes as `0x`-prefixed lowercase hex.
pub fn encode_hex(bytes: impl AsRef<[u8]>) -> String {
    format!("{HEX_PREFIX}{}", ::hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn non_hex_characters_are_rejected() {
        assert!(matches!(
            must_hex_len("0xZZ", 2),
            Err(Error::InvalidHexFormat(_))
        ));
        assert!(matches!(must_hex("0x"), Err(Error::InvalidHexFormat(_))));
        assert!(matches!(must_hex(""), Err(Error::InvalidHexFormat(_))));
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert_eq!(
            must_hex_len("0x1", 2),
            Err(Error::InvalidHexLength {
                expected: 2,
                actual: 1
            })
        );
    }

    #[rstest]
    #[case("0xab", 2)]
    #[case("AB", 2)]
    #[case("0xDeadBeef", 8)]
    fn valid_hex_of_expected_length(#[case] hex: &str, #[case] len: usize) {
        must_hex_len(hex, len).unwrap();
    }

    #[rstest]
    #[case("0xabc", 4, true, "0x0abc")]
    #[case("abcde", 4, true, "000abcde")]
    #[case("abcd", 4, true, "abcd")]
    #[case("0xab", 6, false, "0x0000ab")]
    #[case("0xabcdef01", 4, false, "0xabcdef01")]
    #[case("", 4, true, "")]
    fn left_padding(
        #[case] hex: &str,
        #[case] pad_to: usize,
        #[case] closest_multiple: bool,
        #[case] expected: &str,
    ) {
        assert_eq!(lpad_hex(hex, pad_to, closest_multiple), expected);
    }

    #[test]
    fn int_hex_rendering() {
        assert_eq!(int_to_hex(255, true), "0xff");
        assert_eq!(int_to_hex(0, false), "0");
    }

    #[test]
    fn decoding() {
        assert_eq!(decode_hex("0x1").unwrap(), vec![0x01]);
        assert_eq!(decode_hex("0xdeadBEEF").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert!(decode_hex("0xg0").is_err());
        assert_eq!(encode_hex([0xde, 0xad]), "0xdead");
    }
}
