// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the dexcore library.
//!
//! - [`AddressError`] - why a raw address string was rejected
//! - [`TokenError`] - unified error for token construction and ordering
//!
//! All failures are precondition or validation failures. They are returned
//! synchronously to the immediate caller and never degrade to a default value.
//!
//! # Examples
//!
//! ```rust
//! use dexcore::{ChainId, Token, TokenError};
//!
//! let weth = Token::new(ChainId::Mainnet, "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2", 18)?;
//! let bsc = Token::new(ChainId::BscMainnet, "0xae13d989daC2f0dEbFf460aC112a837C89BAa7cd", 18)?;
//!
//! match weth.sorts_before(&bsc) {
//!     Err(TokenError::CrossChainComparison { left, right }) => {
//!         assert_eq!(left, ChainId::Mainnet);
//!         assert_eq!(right, ChainId::BscMainnet);
//!     }
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! # Ok::<(), TokenError>(())
//! ```

mod address;

pub use address::AddressError;

use crate::types::chain::ChainId;

/// Unified error type for token identity operations.
///
/// [`AddressError`] converts into `TokenError::InvalidAddress` via `From`, so
/// `?` works across validation and construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// The token address failed validation at construction time.
    ///
    /// No token value is produced for an invalid address.
    #[error("Invalid address: {0}")]
    InvalidAddress(#[from] AddressError),

    /// [`Token::sorts_before`](crate::Token::sorts_before) was called on tokens
    /// from different networks.
    ///
    /// Ordering is only defined within a single network; this is a caller bug.
    #[error("Cannot order tokens across chains: {left} vs {right}")]
    CrossChainComparison {
        /// Network of the receiver
        left: ChainId,
        /// Network of the argument
        right: ChainId,
    },

    /// [`Token::sorts_before`](crate::Token::sorts_before) was called on two
    /// tokens sharing the same address.
    #[error("Cannot order a token against itself: {address}")]
    IdenticalAddress {
        /// Canonical address shared by both operands
        address: String,
    },

    /// A numeric chain id has no [`ChainId`] variant.
    #[error("Unsupported chain id: {id}")]
    UnsupportedChain {
        /// The raw EIP-155 chain id
        id: u64,
    },

    /// A chain id string is not a decimal integer.
    #[error("Invalid chain id: {value:?}")]
    InvalidChainId {
        /// The rejected input
        value: String,
    },
}

impl TokenError {
    /// Create a `CrossChainComparison` error.
    pub fn cross_chain(left: ChainId, right: ChainId) -> Self {
        TokenError::CrossChainComparison { left, right }
    }

    /// Create an `IdenticalAddress` error.
    pub fn identical_address(address: impl Into<String>) -> Self {
        TokenError::IdenticalAddress {
            address: address.into(),
        }
    }

    /// Returns `true` for the two ordering precondition violations.
    pub fn is_ordering_violation(&self) -> bool {
        matches!(
            self,
            TokenError::CrossChainComparison { .. } | TokenError::IdenticalAddress { .. }
        )
    }
}
