//! Well-known addresses
//!
//! Contract addresses of each network's wrapped-native token, as shipped in
//! the SDK's data table. Consumed by [`crate::registry`].

use alloy_primitives::{address, Address};

use crate::types::chain::ChainId;

/// Wrapped-native token contracts, one per network
///
/// The Mainnet contract literal is also listed for BSC, Polygon and xDai.
/// That is how the data table ships and it is kept as is.
pub mod wrapped_native {
    use super::*;

    /// Contract: 0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2
    pub const MAINNET: Address = address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");

    /// Contract: 0xc778417E063141139Fce010982780140Aa0cD5Ab
    pub const ROPSTEN: Address = address!("c778417e063141139fce010982780140aa0cd5ab");

    /// Contract: 0xe41c4939D2CB35A4DD61e852e2aa00D493AF87A3
    pub const RINKEBY: Address = address!("e41c4939d2cb35a4dd61e852e2aa00d493af87a3");

    /// Contract: 0xB4FBF271143F4FBf7B91A5ded31805e42b2208d6
    pub const GOERLI: Address = address!("b4fbf271143f4fbf7b91a5ded31805e42b2208d6");

    /// Contract: 0xd0A1E359811322d97991E03f863a0C30C2cF029C
    pub const KOVAN: Address = address!("d0a1e359811322d97991e03f863a0c30c2cf029c");

    /// Contract: 0xA5a3c93776bA2e1A78C79E88A2cB5aBaB2a0097F
    pub const HECO_TESTNET: Address = address!("a5a3c93776ba2e1a78c79e88a2cb5abab2a0097f");

    /// Contract: 0x5545153CCFcA01fbd7Dd11C0b23ba694D9509A6F
    pub const HECO_MAINNET: Address = address!("5545153ccfca01fbd7dd11c0b23ba694d9509a6f");

    pub const BSC_MAINNET: Address = MAINNET;

    /// Contract: 0xae13d989daC2f0dEbFf460aC112a837C89BAa7cd
    pub const BSC_TESTNET: Address = address!("ae13d989dac2f0debff460ac112a837c89baa7cd");

    pub const POLYGON_MAINNET: Address = MAINNET;

    pub const XDAI_MAINNET: Address = MAINNET;

    /// Contract: 0x21be370D5312f44cB42ce377BC9b8a0cEF1A4C83
    pub const FANTOM_MAINNET: Address = address!("21be370d5312f44cb42ce377bc9b8a0cef1a4c83");

    /// Contract: 0x8F8526dbfd6E38E3D8307702cA8469Bae6C56C15
    pub const OKEX: Address = address!("8f8526dbfd6e38e3d8307702ca8469bae6c56c15");

    /// Contract: 0x6983D1E6DEf3690C4d616b13597A09e6193EA013
    pub const HARMONY: Address = address!("6983d1e6def3690c4d616b13597a09e6193ea013");

    /// Contract: 0xf20d962a6c8f70c731bd838a3a388D7d48fA6e15
    pub const AVALANCHE: Address = address!("f20d962a6c8f70c731bd838a3a388d7d48fa6e15");

    /// Wrapped-native contract for `chain`.
    pub const fn for_chain(chain: ChainId) -> Address {
        match chain {
            ChainId::Mainnet => MAINNET,
            ChainId::Ropsten => ROPSTEN,
            ChainId::Rinkeby => RINKEBY,
            ChainId::Goerli => GOERLI,
            ChainId::Kovan => KOVAN,
            ChainId::HecoTestnet => HECO_TESTNET,
            ChainId::HecoMainnet => HECO_MAINNET,
            ChainId::BscMainnet => BSC_MAINNET,
            ChainId::BscTestnet => BSC_TESTNET,
            ChainId::PolygonMainnet => POLYGON_MAINNET,
            ChainId::XdaiMainnet => XDAI_MAINNET,
            ChainId::FantomMainnet => FANTOM_MAINNET,
            ChainId::Okex => OKEX,
            ChainId::Harmony => HARMONY,
            ChainId::Avalanche => AVALANCHE,
        }
    }
}

/// Decimals of every wrapped-native token in the table
pub const WRAPPED_NATIVE_DECIMALS: u8 = 18;

/// Decimals of every native coin
pub const NATIVE_DECIMALS: u8 = 18;
