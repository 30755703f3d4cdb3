// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for address validation
//!
//! Controls how strictly [`AddressValidator`](crate::AddressValidator) treats
//! raw address strings, globally and per network.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use dexcore::ValidationConfig;
//!
//! // Accepts the same inputs as ethers' getAddress
//! let config = ValidationConfig::default();
//! assert!(!config.require_prefix);
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use dexcore::{ChainId, ValidationConfigBuilder};
//!
//! let config = ValidationConfigBuilder::new()
//!     .require_prefix(true)
//!     .chain_reject_zero_address(ChainId::Mainnet, true)
//!     .build();
//!
//! assert!(config.get_reject_zero_address(ChainId::Mainnet));
//! assert!(!config.get_reject_zero_address(ChainId::Kovan));
//! ```

use std::collections::HashMap;

use crate::types::chain::ChainId;

pub mod constants;

/// Address validation policy
///
/// Global settings apply to every network unless a [`ChainValidation`]
/// override says otherwise. Use [`ValidationConfigBuilder`] for a fluent API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Require the `0x` prefix on raw input
    /// Default: false
    pub require_prefix: bool,

    /// Reject `0x0000000000000000000000000000000000000000`
    /// Default: false (the zero address is well-formed)
    pub reject_zero_address: bool,

    /// Chain-specific overrides
    pub chain_overrides: HashMap<ChainId, ChainValidation>,
}

/// Chain-specific validation overrides
///
/// `None` fields fall back to the global value in [`ValidationConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChainValidation {
    /// Override prefix requirement for this chain
    pub require_prefix: Option<bool>,

    /// Override zero-address rejection for this chain
    pub reject_zero_address: Option<bool>,
}

impl ValidationConfig {
    /// Policy that requires the `0x` prefix and rejects the zero address
    /// on every network.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dexcore::{ChainId, ValidationConfig};
    ///
    /// let config = ValidationConfig::strict();
    /// assert!(config.get_require_prefix(ChainId::BscMainnet));
    /// assert!(config.get_reject_zero_address(ChainId::BscMainnet));
    /// ```
    pub fn strict() -> Self {
        Self {
            require_prefix: true,
            reject_zero_address: true,
            chain_overrides: HashMap::new(),
        }
    }

    /// Get effective prefix requirement for a specific chain
    pub fn get_require_prefix(&self, chain: ChainId) -> bool {
        self.chain_overrides
            .get(&chain)
            .and_then(|c| c.require_prefix)
            .unwrap_or(self.require_prefix)
    }

    /// Get effective zero-address rejection for a specific chain
    pub fn get_reject_zero_address(&self, chain: ChainId) -> bool {
        self.chain_overrides
            .get(&chain)
            .and_then(|c| c.reject_zero_address)
            .unwrap_or(self.reject_zero_address)
    }

    /// Set chain-specific override
    ///
    /// # Example
    ///
    /// ```rust
    /// use dexcore::{ChainId, ChainValidation, ValidationConfig};
    ///
    /// let mut config = ValidationConfig::strict();
    /// config.set_chain_override(
    ///     ChainId::Kovan,
    ///     ChainValidation {
    ///         require_prefix: Some(false),
    ///         reject_zero_address: None,
    ///     },
    /// );
    ///
    /// assert!(!config.get_require_prefix(ChainId::Kovan));
    /// assert!(config.get_reject_zero_address(ChainId::Kovan));
    /// ```
    pub fn set_chain_override(&mut self, chain: ChainId, config: ChainValidation) {
        self.chain_overrides.insert(chain, config);
    }
}

/// Builder for [`ValidationConfig`]
///
/// # Example
///
/// ```rust
/// use dexcore::{ChainId, ValidationConfigBuilder};
///
/// let config = ValidationConfigBuilder::strict()
///     .chain_require_prefix(ChainId::Harmony, false)
///     .build();
///
/// assert!(config.get_require_prefix(ChainId::Mainnet));
/// assert!(!config.get_require_prefix(ChainId::Harmony));
/// ```
#[derive(Debug, Default)]
pub struct ValidationConfigBuilder {
    config: ValidationConfig,
}

impl ValidationConfigBuilder {
    /// Create a new builder with permissive defaults
    pub fn new() -> Self {
        Self {
            config: ValidationConfig::default(),
        }
    }

    /// Start from [`ValidationConfig::strict`]
    pub fn strict() -> Self {
        Self {
            config: ValidationConfig::strict(),
        }
    }

    /// Set global prefix requirement
    pub fn require_prefix(mut self, require: bool) -> Self {
        self.config.require_prefix = require;
        self
    }

    /// Set global zero-address rejection
    pub fn reject_zero_address(mut self, reject: bool) -> Self {
        self.config.reject_zero_address = reject;
        self
    }

    /// Add chain-specific configuration
    pub fn chain_config(mut self, chain: ChainId, config: ChainValidation) -> Self {
        self.config.set_chain_override(chain, config);
        self
    }

    /// Convenience: override the prefix requirement for one chain
    pub fn chain_require_prefix(mut self, chain: ChainId, require: bool) -> Self {
        self.config
            .chain_overrides
            .entry(chain)
            .or_default()
            .require_prefix = Some(require);
        self
    }

    /// Convenience: override zero-address rejection for one chain
    pub fn chain_reject_zero_address(mut self, chain: ChainId, reject: bool) -> Self {
        self.config
            .chain_overrides
            .entry(chain)
            .or_default()
            .reject_zero_address = Some(reject);
        self
    }

    pub fn build(self) -> ValidationConfig {
        self.config
    }
}
