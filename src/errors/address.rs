//! Error types for address validation.
//!
//! Every way a raw address string can be rejected by
//! [`AddressValidator`](crate::AddressValidator) has its own variant, so
//! callers can tell a typo (bad checksum) apart from garbage input
//! (wrong length, non-hex characters).

/// Reasons a raw address string fails validation.
///
/// # Examples
///
/// ```rust
/// use dexcore::{validate_and_parse_address, AddressError};
///
/// let err = validate_and_parse_address("0x1234").unwrap_err();
/// assert_eq!(err, AddressError::InvalidLength { length: 4 });
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    /// The `0x` prefix is mandatory under the active validation policy.
    #[error("Address is missing the 0x prefix")]
    MissingPrefix,

    /// The hex body is not exactly 40 digits long.
    #[error("Address must have 40 hex digits, found {length}")]
    InvalidLength {
        /// Number of characters after the optional `0x` prefix
        length: usize,
    },

    /// The hex body contains a character outside `[0-9a-fA-F]`.
    #[error("Invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// The offending character
        character: char,
        /// Zero-based character index within the hex body
        position: usize,
    },

    /// Mixed-case input whose casing does not match its EIP-55 checksum.
    ///
    /// All-lowercase and all-uppercase inputs carry no checksum and are never
    /// rejected with this variant.
    #[error("Bad address checksum, expected {expected}")]
    BadChecksum {
        /// The correctly checksummed form of the same address
        expected: String,
    },

    /// The zero address is rejected under the active validation policy.
    #[error("The zero address is not a valid token address")]
    ZeroAddress,
}

impl AddressError {
    /// Create an `InvalidLength` error.
    pub fn invalid_length(length: usize) -> Self {
        AddressError::InvalidLength { length }
    }

    /// Create an `InvalidCharacter` error.
    pub fn invalid_character(character: char, position: usize) -> Self {
        AddressError::InvalidCharacter {
            character,
            position,
        }
    }

    /// Create a `BadChecksum` error carrying the expected checksummed form.
    pub fn bad_checksum(expected: impl Into<String>) -> Self {
        AddressError::BadChecksum {
            expected: expected.into(),
        }
    }
}
