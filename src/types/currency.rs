// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! The currency capability set shared by tokens and native coins.
//!
//! ```text
//! Currency (trait)
//!     ├── Token           addressed, network-scoped ERC-20
//!     └── NativeCurrency  non-addressed coin of a network (ETH, BNB, ...)
//! ```
//!
//! Both implementors embed a [`CurrencyInfo`] holding the display data.
//! [`currency_equals`](crate::currency_equals) dispatches on
//! [`Currency::as_token`] and [`Currency::as_native`].

use serde::{Deserialize, Serialize};

use super::metadata::CurrencyMetadata;
use super::native::NativeCurrency;
use super::tokens::{Token, TokenDecimals};

/// Display data common to every currency.
///
/// Pure data holder with no comparison logic of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyInfo {
    pub decimals: TokenDecimals,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "CurrencyMetadata::is_empty")]
    pub metadata: CurrencyMetadata,
}

impl CurrencyInfo {
    pub fn new(decimals: u8) -> Self {
        Self {
            decimals: TokenDecimals::new(decimals),
            ..Self::default()
        }
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_metadata(mut self, metadata: CurrencyMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Anything that behaves as a currency: has decimals and optional display names.
///
/// Implementors say which concrete kind they are through [`as_token`](Self::as_token)
/// and [`as_native`](Self::as_native), which lets equality be decided without
/// downcasting.
pub trait Currency: std::fmt::Debug + Send + Sync {
    /// The display data of this currency.
    fn info(&self) -> &CurrencyInfo;

    /// `Some` if this currency is an addressed, network-scoped token.
    fn as_token(&self) -> Option<&Token> {
        None
    }

    /// `Some` if this currency is a network's native coin.
    fn as_native(&self) -> Option<&NativeCurrency> {
        None
    }

    fn decimals(&self) -> TokenDecimals {
        self.info().decimals
    }

    fn symbol(&self) -> Option<&str> {
        self.info().symbol.as_deref()
    }

    fn name(&self) -> Option<&str> {
        self.info().name.as_deref()
    }

    fn is_token(&self) -> bool {
        self.as_token().is_some()
    }
}
