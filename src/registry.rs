// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Process-wide, read-only per-network registries.
//!
//! - [`WRAPPED_NATIVE`]: each network's wrapped-native token (WETH and friends)
//! - native currencies, reached through [`NativeCurrency::on`]
//!
//! Both are built once on first access and never mutated afterwards, so they
//! can be read from any thread without locking.
//!
//! # Examples
//!
//! ```
//! use dexcore::{ChainId, Currency, WRAPPED_NATIVE};
//!
//! let weth = &WRAPPED_NATIVE[ChainId::Mainnet];
//! assert_eq!(weth.address(), "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
//! assert_eq!(weth.symbol(), Some("WETH"));
//! ```

use std::ops::Index;
use std::sync::LazyLock;

use crate::config::constants::{
    wrapped_native as wrapped_native_addresses, WRAPPED_NATIVE_DECIMALS,
};
use crate::tracing::spans;
use crate::types::chain::ChainId;
use crate::types::native::NativeCurrency;
use crate::types::tokens::Token;

/// A value for every supported network, indexable by [`ChainId`].
#[derive(Debug, Clone)]
pub struct ChainTable<T> {
    entries: [T; ChainId::COUNT],
}

impl<T> ChainTable<T> {
    /// Build a table by calling `f` once per network, in [`ChainId::ALL`] order.
    pub fn from_fn(f: impl FnMut(ChainId) -> T) -> Self {
        Self {
            entries: ChainId::ALL.map(f),
        }
    }

    pub fn get(&self, chain: ChainId) -> &T {
        &self.entries[chain.ordinal()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ChainId, &T)> {
        ChainId::ALL.into_iter().zip(self.entries.iter())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Index<ChainId> for ChainTable<T> {
    type Output = T;

    fn index(&self, chain: ChainId) -> &Self::Output {
        self.get(chain)
    }
}

/// Wrapped-native token of every supported network.
///
/// 18 decimals, symbol `WETH`, name "Wrapped Ether", addresses from
/// [`wrapped_native`](crate::config::constants::wrapped_native).
pub static WRAPPED_NATIVE: LazyLock<ChainTable<Token>> = LazyLock::new(|| {
    let span = spans::build_registry("wrapped_native");
    let _guard = span.enter();

    let table = ChainTable::from_fn(|chain| {
        Token::from_address(
            chain,
            wrapped_native_addresses::for_chain(chain),
            WRAPPED_NATIVE_DECIMALS,
        )
        .with_symbol("WETH")
        .with_name("Wrapped Ether")
    });
    tracing::debug!(entries = table.len(), "Built wrapped-native registry");
    table
});

static NATIVE_CURRENCIES: LazyLock<ChainTable<NativeCurrency>> = LazyLock::new(|| {
    let span = spans::build_registry("native_currency");
    let _guard = span.enter();

    let table = ChainTable::from_fn(NativeCurrency::build);
    tracing::debug!(entries = table.len(), "Built native currency registry");
    table
});

/// The wrapped-native token of `chain`.
///
/// # Examples
///
/// ```
/// use dexcore::{wrapped_native, ChainId};
///
/// assert_eq!(
///     wrapped_native(ChainId::BscTestnet).address(),
///     "0xae13d989daC2f0dEbFf460aC112a837C89BAa7cd"
/// );
/// ```
pub fn wrapped_native(chain: ChainId) -> &'static Token {
    WRAPPED_NATIVE.get(chain)
}

pub(crate) fn native_currency(chain: ChainId) -> &'static NativeCurrency {
    NATIVE_CURRENCIES.get(chain)
}
