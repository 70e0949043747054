// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use eth_binder::abi::{AbiToken, AbiUint, AbiValue};
use eth_binder::blocks::BlockBuilder;
use eth_binder::chain::next_base_fee;
use eth_binder::math::BigUint;
use eth_binder::message::{MessageScheme, SigningMessage};
use eth_binder::networks::{Eip1559Config, NetworkChain};
use eth_binder::utils::hex::{encode_hex, must_hex_len};
use eth_binder::Error;

#[test]
fn uint8_boundary() {
    let max = AbiUint::new(255u64, 8).unwrap();
    assert_eq!(max.encode_bin().len(), 32);
    assert_eq!(max.encode_bin()[31], 0xff);
    assert!(matches!(AbiUint::new(256u64, 8), Err(Error::Argument(_))));
    assert!(matches!(AbiUint::new(-1, 256), Err(Error::Argument(_))));
}

#[test]
fn call_arguments_concatenate_to_words() {
    // transfer(address,uint256) arguments
    let args: Vec<AbiToken> = vec![
        "0x000000000000000000000000000000000000dEaD"
            .parse::<eth_binder::abi::AbiAddress>()
            .unwrap()
            .into(),
        AbiUint::uint256(1_000_000u64).unwrap().into(),
    ];
    let payload: Vec<u8> = args.iter().flat_map(AbiValue::encode_bin).collect();
    assert_eq!(
        encode_hex(&payload),
        "0x000000000000000000000000000000000000000000000000000000000000dead\
         00000000000000000000000000000000000000000000000000000000000f4240"
    );
}

#[test]
fn mainnet_fee_market_from_london() {
    let config = Eip1559Config::for_network(&"mainnet".parse::<NetworkChain>().unwrap());

    let london = BlockBuilder::default()
        .number(config.activation_block_number)
        .gas_limit(30_000_000u64)
        .gas_used(30_000_000u64)
        .build()
        .unwrap();
    let first = next_base_fee(&london, &config);
    assert_eq!(first, 1_000_000_000u64);

    let next = BlockBuilder::default()
        .number(config.activation_block_number + 1)
        .gas_limit(30_000_000u64)
        .gas_used(30_000_000u64)
        .base_fee_per_gas(first)
        .build()
        .unwrap();
    assert_eq!(next_base_fee(&next, &config), 1_125_000_000u64);
}

#[test]
fn signing_messages() {
    let personal = SigningMessage::new("hi", MessageScheme::Personal);
    assert_eq!(personal.preprocess(), b"\x19Ethereum Signed Message:\n2hi");

    let inner = SigningMessage::new("hi", MessageScheme::InnerHashed);
    let out = inner.preprocess();
    assert_eq!(out.len(), 60);
    assert_ne!(&out[28..], b"hi");
}

#[test]
fn hex_validation() {
    assert!(matches!(
        must_hex_len("0xZZ", 2),
        Err(Error::InvalidHexFormat(_))
    ));
    assert!(matches!(
        must_hex_len("0x1", 2),
        Err(Error::InvalidHexLength { .. })
    ));
    assert_eq!(
        BigUint::from_hex("0xff").unwrap().to_bin(2).unwrap(),
        vec![0, 0xff]
    );
}
