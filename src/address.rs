// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! EVM address validation and normalization.
//!
//! Turns an untrusted address string into its canonical `0x`-prefixed EIP-55
//! checksummed form, or rejects it. The rules match ethers' `getAddress`:
//!
//! - the `0x` prefix is optional unless the policy requires it
//! - the body must be exactly 40 hex digits
//! - all-lowercase and all-uppercase bodies carry no checksum and are accepted
//! - a mixed-case body must equal its own EIP-55 checksum
//!
//! Validation is deterministic: the same input always yields the same output.

use alloy_primitives::{hex, Address};

use crate::config::ValidationConfig;
use crate::errors::AddressError;
use crate::tracing::spans;
use crate::types::chain::ChainId;

const ADDRESS_HEX_LEN: usize = 40;

/// Validate `raw` with the default policy and return its canonical form.
///
/// # Examples
///
/// ```rust
/// use dexcore::validate_and_parse_address;
///
/// let canonical = validate_and_parse_address("0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2")?;
/// assert_eq!(canonical, "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
/// # Ok::<(), dexcore::AddressError>(())
/// ```
pub fn validate_and_parse_address(raw: &str) -> Result<String, AddressError> {
    AddressValidator::default().validate(raw)
}

/// Address validator bound to a [`ValidationConfig`].
///
/// # Examples
///
/// ```rust
/// use dexcore::{AddressError, AddressValidator, ValidationConfig};
///
/// let strict = AddressValidator::new(ValidationConfig::strict());
/// assert_eq!(
///     strict.validate("0000000000000000000000000000000000000000"),
///     Err(AddressError::MissingPrefix)
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct AddressValidator {
    config: ValidationConfig,
}

impl AddressValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate using the global settings only.
    pub fn validate(&self, raw: &str) -> Result<String, AddressError> {
        parse_address(
            raw,
            self.config.require_prefix,
            self.config.reject_zero_address,
        )
        .map(|(_, canonical)| canonical)
    }

    /// Validate applying `chain`'s overrides.
    pub fn validate_for_chain(&self, chain: ChainId, raw: &str) -> Result<String, AddressError> {
        self.parse_for_chain(chain, raw)
            .map(|(_, canonical)| canonical)
    }

    /// Same as [`validate_for_chain`](Self::validate_for_chain), also returning
    /// the parsed bytes.
    pub(crate) fn parse_for_chain(
        &self,
        chain: ChainId,
        raw: &str,
    ) -> Result<(Address, String), AddressError> {
        parse_address(
            raw,
            self.config.get_require_prefix(chain),
            self.config.get_reject_zero_address(chain),
        )
    }
}

fn parse_address(
    raw: &str,
    require_prefix: bool,
    reject_zero_address: bool,
) -> Result<(Address, String), AddressError> {
    let span = spans::validate_address(raw.len());
    let _guard = span.enter();

    let result = parse_address_inner(raw, require_prefix, reject_zero_address);
    if let Err(error) = &result {
        tracing::debug!(input_len = raw.len(), %error, "Rejected token address");
    }
    result
}

fn parse_address_inner(
    raw: &str,
    require_prefix: bool,
    reject_zero_address: bool,
) -> Result<(Address, String), AddressError> {
    let body = match raw.strip_prefix("0x") {
        Some(body) => body,
        None if require_prefix => return Err(AddressError::MissingPrefix),
        None => raw,
    };

    let length = body.chars().count();
    if length != ADDRESS_HEX_LEN {
        return Err(AddressError::invalid_length(length));
    }

    if let Some((position, character)) = body
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_hexdigit())
    {
        return Err(AddressError::invalid_character(character, position));
    }

    let mut bytes = [0u8; 20];
    hex::decode_to_slice(body, &mut bytes).map_err(|_| AddressError::invalid_length(length))?;
    let address = Address::new(bytes);

    if reject_zero_address && address == Address::ZERO {
        return Err(AddressError::ZeroAddress);
    }

    let canonical = address.to_checksum(None);

    let has_lower = body.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = body.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper && canonical[2..] != *body {
        return Err(AddressError::bad_checksum(canonical));
    }

    Ok((address, canonical))
}
