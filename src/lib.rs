// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token identity and ordering for EVM decentralized-exchange SDKs.
//!
//! Every token is identified by its network and its validated, checksummed
//! contract address. Tokens on the same network have a strict total order by
//! address, which is what pair keys and pool addresses are derived from.
//!
//! # Quick start
//!
//! ```rust
//! use dexcore::{currency_equals, wrapped_native, ChainId, NativeCurrency, Token, TokenPair};
//!
//! // Addresses are validated and checksummed at construction
//! let usdc = Token::new(ChainId::Mainnet, "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48", 6)?
//!     .with_symbol("USDC");
//! let weth = wrapped_native(ChainId::Mainnet).clone();
//!
//! // Deterministic ordering within one network
//! assert!(usdc.sorts_before(&weth)?);
//! let pair = TokenPair::new(weth.clone(), usdc.clone())?;
//! assert_eq!(pair.token0(), &usdc);
//!
//! // Native coins never equal tokens
//! assert!(!currency_equals(NativeCurrency::on(ChainId::Mainnet), &weth));
//! # Ok::<(), dexcore::TokenError>(())
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`types`] | [`ChainId`], [`Currency`], [`Token`], [`TokenPair`], [`NativeCurrency`] |
//! | [`address`] | [`validate_and_parse_address`] and [`AddressValidator`] |
//! | [`config`] | [`ValidationConfig`] and well-known addresses |
//! | [`registry`] | [`WRAPPED_NATIVE`] and the native currency table |
//! | [`errors`] | [`TokenError`] and [`AddressError`] |

pub mod address;
pub mod config;
mod equality;
pub mod errors;
pub mod registry;
mod tracing;
pub mod types;

pub use address::{validate_and_parse_address, AddressValidator};
pub use config::{ChainValidation, ValidationConfig, ValidationConfigBuilder};
pub use equality::currency_equals;
pub use errors::{AddressError, TokenError};
pub use registry::{wrapped_native, ChainTable, WRAPPED_NATIVE};
pub use types::chain::ChainId;
pub use types::currency::{Currency, CurrencyInfo};
pub use types::metadata::{CurrencyMetadata, UnderlyingToken};
pub use types::native::NativeCurrency;
pub use types::tokens::{Token, TokenDecimals, TokenPair};
