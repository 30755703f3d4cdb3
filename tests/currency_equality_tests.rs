// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for currency equality and the static registries

mod helpers;

use dexcore::{
    currency_equals, wrapped_native, ChainId, Currency, NativeCurrency, Token, WRAPPED_NATIVE,
};
use helpers::{arb_address, arb_chain, token_from};
use proptest::prelude::*;

#[test]
fn test_registry_matches_shipped_table() {
    let expected = [
        (ChainId::Mainnet, "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
        (ChainId::Ropsten, "0xc778417E063141139Fce010982780140Aa0cD5Ab"),
        (ChainId::Rinkeby, "0xe41c4939D2CB35A4DD61e852e2aa00D493AF87A3"),
        (ChainId::Goerli, "0xB4FBF271143F4FBf7B91A5ded31805e42b2208d6"),
        (ChainId::Kovan, "0xd0A1E359811322d97991E03f863a0C30C2cF029C"),
        (ChainId::HecoTestnet, "0xa5a3c93776ba2e1a78c79e88a2cb5abab2a0097f"),
        (ChainId::HecoMainnet, "0x5545153ccfca01fbd7dd11c0b23ba694d9509a6f"),
        (ChainId::BscMainnet, "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
        (ChainId::BscTestnet, "0xae13d989daC2f0dEbFf460aC112a837C89BAa7cd"),
        (ChainId::PolygonMainnet, "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
        (ChainId::XdaiMainnet, "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
        (ChainId::FantomMainnet, "0x21be370D5312f44cB42ce377BC9b8a0cEF1A4C83"),
        (ChainId::Okex, "0x8F8526dbfd6E38E3D8307702cA8469Bae6C56C15"),
        (ChainId::Harmony, "0x6983D1E6DEf3690C4d616b13597A09e6193EA013"),
        (ChainId::Avalanche, "0xf20d962a6c8f70c731bd838a3a388D7d48fA6e15"),
    ];

    for (chain, raw) in expected {
        let built = Token::new(chain, raw, 18).unwrap();
        assert!(built.equals(wrapped_native(chain)), "{chain}");
        assert!(currency_equals(&built, &WRAPPED_NATIVE[chain]), "{chain}");
    }
}

#[test]
fn test_native_never_equals_its_wrapped_token() {
    for chain in ChainId::ALL {
        let native = NativeCurrency::on(chain);
        let wrapped = wrapped_native(chain);
        assert!(!currency_equals(native, wrapped));
        assert!(!currency_equals(wrapped, native));
        assert_eq!(native.decimals(), wrapped.decimals());
    }
}

#[test]
fn test_registry_is_shared_across_threads() {
    let handles: Vec<_> = ChainId::ALL
        .into_iter()
        .map(|chain| std::thread::spawn(move || wrapped_native(chain) as *const Token as usize))
        .collect();

    for (chain, handle) in ChainId::ALL.into_iter().zip(handles) {
        let ptr = handle.join().unwrap();
        assert_eq!(ptr, wrapped_native(chain) as *const Token as usize);
    }
}

proptest! {
    /// Property: A native currency never equals any token on its own network
    #[test]
    fn prop_native_never_equals_token(chain in arb_chain(), address in arb_address()) {
        let token = token_from(chain, address);
        let native = NativeCurrency::on(chain);
        prop_assert!(!currency_equals(native, &token));
        prop_assert!(!currency_equals(&token, native));
    }

    /// Property: For two tokens the dispatcher agrees with Token::equals
    #[test]
    fn prop_dispatcher_agrees_with_equals(
        chain_a in arb_chain(),
        chain_b in arb_chain(),
        addr_a in arb_address(),
        addr_b in arb_address(),
    ) {
        let a = token_from(chain_a, addr_a);
        let b = token_from(chain_b, addr_b);
        prop_assert_eq!(currency_equals(&a, &b), a.equals(&b));
    }

    /// Property: Two natives are equal iff they belong to the same network
    #[test]
    fn prop_natives_equal_by_network(a in arb_chain(), b in arb_chain()) {
        prop_assert_eq!(
            currency_equals(NativeCurrency::on(a), NativeCurrency::on(b)),
            a == b
        );
    }
}
