// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Network identifiers supported by the SDK.

use std::fmt;
use std::str::FromStr;

use alloy_chains::{Chain, NamedChain};
use serde::{Deserialize, Serialize};

use crate::errors::TokenError;

/// A blockchain network the SDK knows about.
///
/// The discriminant is the network's EIP-155 chain id. Serialized as that
/// numeric id.
///
/// # Examples
///
/// ```
/// use dexcore::ChainId;
///
/// assert_eq!(ChainId::BscMainnet.id(), 56);
/// assert_eq!(ChainId::try_from(137u64).unwrap(), ChainId::PolygonMainnet);
/// assert_eq!("43114".parse::<ChainId>().unwrap(), ChainId::Avalanche);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
#[repr(u64)]
pub enum ChainId {
    Mainnet = 1,
    Ropsten = 3,
    Rinkeby = 4,
    Goerli = 5,
    Kovan = 42,
    HecoTestnet = 256,
    HecoMainnet = 128,
    BscMainnet = 56,
    BscTestnet = 97,
    PolygonMainnet = 137,
    XdaiMainnet = 100,
    FantomMainnet = 250,
    Okex = 66,
    Harmony = 1_666_600_000,
    Avalanche = 43114,
}

impl ChainId {
    /// Number of supported networks.
    pub const COUNT: usize = 15;

    /// Every supported network, in registry order.
    pub const ALL: [ChainId; Self::COUNT] = [
        ChainId::Mainnet,
        ChainId::Ropsten,
        ChainId::Rinkeby,
        ChainId::Goerli,
        ChainId::Kovan,
        ChainId::HecoTestnet,
        ChainId::HecoMainnet,
        ChainId::BscMainnet,
        ChainId::BscTestnet,
        ChainId::PolygonMainnet,
        ChainId::XdaiMainnet,
        ChainId::FantomMainnet,
        ChainId::Okex,
        ChainId::Harmony,
        ChainId::Avalanche,
    ];

    /// The EIP-155 chain id.
    pub const fn id(self) -> u64 {
        self as u64
    }

    /// Position of this network in [`ChainId::ALL`].
    pub(crate) const fn ordinal(self) -> usize {
        match self {
            ChainId::Mainnet => 0,
            ChainId::Ropsten => 1,
            ChainId::Rinkeby => 2,
            ChainId::Goerli => 3,
            ChainId::Kovan => 4,
            ChainId::HecoTestnet => 5,
            ChainId::HecoMainnet => 6,
            ChainId::BscMainnet => 7,
            ChainId::BscTestnet => 8,
            ChainId::PolygonMainnet => 9,
            ChainId::XdaiMainnet => 10,
            ChainId::FantomMainnet => 11,
            ChainId::Okex => 12,
            ChainId::Harmony => 13,
            ChainId::Avalanche => 14,
        }
    }

    /// Short kebab-case name used in logs and error messages.
    pub const fn name(self) -> &'static str {
        match self {
            ChainId::Mainnet => "mainnet",
            ChainId::Ropsten => "ropsten",
            ChainId::Rinkeby => "rinkeby",
            ChainId::Goerli => "goerli",
            ChainId::Kovan => "kovan",
            ChainId::HecoTestnet => "heco-testnet",
            ChainId::HecoMainnet => "heco-mainnet",
            ChainId::BscMainnet => "bsc-mainnet",
            ChainId::BscTestnet => "bsc-testnet",
            ChainId::PolygonMainnet => "polygon-mainnet",
            ChainId::XdaiMainnet => "xdai-mainnet",
            ChainId::FantomMainnet => "fantom-mainnet",
            ChainId::Okex => "okex",
            ChainId::Harmony => "harmony",
            ChainId::Avalanche => "avalanche",
        }
    }

    /// Ticker of the network's native, non-addressed coin.
    pub const fn native_symbol(self) -> &'static str {
        match self {
            ChainId::Mainnet
            | ChainId::Ropsten
            | ChainId::Rinkeby
            | ChainId::Goerli
            | ChainId::Kovan => "ETH",
            ChainId::HecoTestnet | ChainId::HecoMainnet => "HT",
            ChainId::BscMainnet | ChainId::BscTestnet => "BNB",
            ChainId::PolygonMainnet => "MATIC",
            ChainId::XdaiMainnet => "XDAI",
            ChainId::FantomMainnet => "FTM",
            ChainId::Okex => "OKT",
            ChainId::Harmony => "ONE",
            ChainId::Avalanche => "AVAX",
        }
    }

    /// The matching `alloy-chains` named chain, if alloy knows it.
    pub fn named(self) -> Option<NamedChain> {
        Chain::from(self).named()
    }
}

impl From<ChainId> for u64 {
    fn from(chain: ChainId) -> Self {
        chain.id()
    }
}

impl From<ChainId> for Chain {
    fn from(chain: ChainId) -> Self {
        Chain::from_id(chain.id())
    }
}

impl TryFrom<u64> for ChainId {
    type Error = TokenError;

    fn try_from(id: u64) -> Result<Self, Self::Error> {
        ChainId::ALL
            .into_iter()
            .find(|chain| chain.id() == id)
            .ok_or(TokenError::UnsupportedChain { id })
    }
}

impl TryFrom<Chain> for ChainId {
    type Error = TokenError;

    fn try_from(chain: Chain) -> Result<Self, Self::Error> {
        ChainId::try_from(chain.id())
    }
}

impl FromStr for ChainId {
    type Err = TokenError;

    /// Parses the decimal EIP-155 id, e.g. `"56"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .parse::<u64>()
            .map_err(|_| TokenError::InvalidChainId { value: s.to_string() })?;
        ChainId::try_from(id)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.id())
    }
}
