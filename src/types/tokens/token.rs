// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Network-scoped ERC-20 token identity.

use std::fmt;
use std::hash::{Hash, Hasher};

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::address::AddressValidator;
use crate::errors::TokenError;
use crate::tracing::spans;
use crate::types::chain::ChainId;
use crate::types::currency::{Currency, CurrencyInfo};
use crate::types::metadata::CurrencyMetadata;

/// An ERC-20 token: one validated contract address on one network.
///
/// The address is validated and normalized to its EIP-55 checksum when the
/// token is built, so a `Token` never holds a malformed address. Two tokens
/// are the same asset iff they share network and address; decimals, names
/// and metadata play no part in equality or hashing.
///
/// # Examples
///
/// ```
/// use dexcore::{wrapped_native, ChainId, Token};
///
/// let weth = Token::new(ChainId::Mainnet, "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2", 18)?
///     .with_symbol("WETH");
///
/// assert_eq!(weth.address(), "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
/// assert!(weth.equals(wrapped_native(ChainId::Mainnet)));
/// # Ok::<(), dexcore::TokenError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "TokenRecord", into = "TokenRecord")]
pub struct Token {
    chain_id: ChainId,
    address: Address,
    checksummed: String,
    currency: CurrencyInfo,
}

impl Token {
    /// Build a token from an untrusted address string.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::InvalidAddress`] if `address` fails validation.
    pub fn new(chain_id: ChainId, address: &str, decimals: u8) -> Result<Self, TokenError> {
        Self::with_validator(&AddressValidator::default(), chain_id, address, decimals)
    }

    /// Like [`Token::new`], validating with a custom policy.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::InvalidAddress`] if `validator` rejects `address`.
    pub fn with_validator(
        validator: &AddressValidator,
        chain_id: ChainId,
        address: &str,
        decimals: u8,
    ) -> Result<Self, TokenError> {
        let (address, checksummed) = validator.parse_for_chain(chain_id, address)?;
        Ok(Self {
            chain_id,
            address,
            checksummed,
            currency: CurrencyInfo::new(decimals),
        })
    }

    /// Build a token from already-parsed address bytes.
    pub fn from_address(chain_id: ChainId, address: Address, decimals: u8) -> Self {
        Self {
            chain_id,
            address,
            checksummed: address.to_checksum(None),
            currency: CurrencyInfo::new(decimals),
        }
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency.symbol = Some(symbol.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.currency.name = Some(name.into());
        self
    }

    pub fn with_metadata(mut self, metadata: CurrencyMetadata) -> Self {
        self.currency.metadata = metadata;
        self
    }

    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// Canonical checksummed address, `0x`-prefixed.
    pub fn address(&self) -> &str {
        &self.checksummed
    }

    pub fn address_bytes(&self) -> Address {
        self.address
    }

    pub fn metadata(&self) -> &CurrencyMetadata {
        &self.currency.metadata
    }

    /// Returns `true` if both tokens have the same network and address.
    pub fn equals(&self, other: &Token) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        self.chain_id == other.chain_id && self.address == other.address
    }

    /// Returns `true` if this token's address sorts before `other`'s.
    ///
    /// Addresses compare case-insensitively, so the result is the same for
    /// any casing of the inputs. Use this to put a pair of tokens in
    /// canonical order before deriving a pair key.
    ///
    /// # Errors
    ///
    /// - [`TokenError::CrossChainComparison`] if the tokens are on different networks
    /// - [`TokenError::IdenticalAddress`] if the tokens share an address
    pub fn sorts_before(&self, other: &Token) -> Result<bool, TokenError> {
        let span = spans::sort_tokens(self.chain_id, other.chain_id);
        let _guard = span.enter();

        if self.chain_id != other.chain_id {
            tracing::warn!(
                left = %self.chain_id,
                right = %other.chain_id,
                "Attempted to order tokens from different chains"
            );
            return Err(TokenError::cross_chain(self.chain_id, other.chain_id));
        }
        if self.address == other.address {
            tracing::warn!(
                address = %self.checksummed,
                "Attempted to order a token against itself"
            );
            return Err(TokenError::identical_address(self.checksummed.clone()));
        }

        // Big-endian byte order is lowercase hex order.
        Ok(self.address < other.address)
    }
}

impl Currency for Token {
    fn info(&self) -> &CurrencyInfo {
        &self.currency
    }

    fn as_token(&self) -> Option<&Token> {
        Some(self)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.hash(state);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.currency.symbol {
            Some(symbol) => write!(f, "{symbol} ({}) on {}", self.checksummed, self.chain_id),
            None => write!(f, "{} on {}", self.checksummed, self.chain_id),
        }
    }
}

/// Wire form of a [`Token`]. Deserialization re-validates the address.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenRecord {
    chain_id: ChainId,
    address: String,
    #[serde(flatten)]
    currency: CurrencyInfo,
}

impl TryFrom<TokenRecord> for Token {
    type Error = TokenError;

    fn try_from(record: TokenRecord) -> Result<Self, Self::Error> {
        let (address, checksummed) =
            AddressValidator::default().parse_for_chain(record.chain_id, &record.address)?;
        Ok(Self {
            chain_id: record.chain_id,
            address,
            checksummed,
            currency: record.currency,
        })
    }
}

impl From<Token> for TokenRecord {
    fn from(token: Token) -> Self {
        Self {
            chain_id: token.chain_id,
            address: token.checksummed,
            currency: token.currency,
        }
    }
}
