// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for dexcore integration tests
//!
//! Proptest strategies for networks and addresses, plus a tracing
//! subscriber for debugging failing cases with `RUST_LOG=dexcore=trace`.

#![allow(dead_code)]

use alloy_primitives::Address;
use dexcore::{ChainId, Token};
use proptest::prelude::*;

/// Any supported network
pub fn arb_chain() -> impl Strategy<Value = ChainId> {
    proptest::sample::select(ChainId::ALL.to_vec())
}

/// Any 20-byte address
pub fn arb_address() -> impl Strategy<Value = Address> {
    any::<[u8; 20]>().prop_map(Address::new)
}

/// Two different addresses
pub fn arb_distinct_addresses() -> impl Strategy<Value = (Address, Address)> {
    (arb_address(), arb_address()).prop_filter("addresses must differ", |(a, b)| a != b)
}

/// How an address is spelled by a caller
#[derive(Debug, Clone, Copy)]
pub enum Spelling {
    Lowercase,
    Uppercase,
    Checksummed,
}

pub fn arb_spelling() -> impl Strategy<Value = Spelling> {
    prop_oneof![
        Just(Spelling::Lowercase),
        Just(Spelling::Uppercase),
        Just(Spelling::Checksummed),
    ]
}

/// Spell `address` the way a caller might, with or without the `0x` prefix.
pub fn spell(address: Address, spelling: Spelling, with_prefix: bool) -> String {
    let checksummed = address.to_checksum(None);
    let body = match spelling {
        Spelling::Lowercase => checksummed[2..].to_lowercase(),
        Spelling::Uppercase => checksummed[2..].to_uppercase(),
        Spelling::Checksummed => checksummed[2..].to_string(),
    };
    if with_prefix {
        format!("0x{body}")
    } else {
        body
    }
}

/// Build a token from address bytes through the string validation path.
pub fn token_from(chain: ChainId, address: Address) -> Token {
    Token::new(chain, &spell(address, Spelling::Lowercase, true), 18)
        .expect("lowercase addresses are always valid")
}

/// Install a test-friendly subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
